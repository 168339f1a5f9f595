//! Application state

use circle_indicator::CircleIndicator;

/// Demo host state
pub struct App {
    /// The indicator under the pager
    pub indicator: CircleIndicator,
    /// Last scroll position seen from the pager (x, y)
    pub last_offset: (f32, f32),
    /// Index into [`circle_indicator::ui::theme::FILL_SWATCHES`]
    pub fill_swatch: usize,
    /// Index into [`circle_indicator::ui::theme::STROKE_SWATCHES`]
    pub stroke_swatch: usize,
    /// Dark or light palette
    pub dark_mode: bool,
}

impl App {
    pub fn page_count(&self) -> u32 {
        self.indicator.page_total_count()
    }

    pub fn current_page(&self) -> i32 {
        self.indicator.current_page()
    }
}
