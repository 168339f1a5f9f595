//! Demo host application
//!
//! A horizontally paged scroll view with a circle indicator underneath. The
//! pager reports its scroll position and the host turns it into page changes.

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use circle_indicator::{CircleIndicator, DisplayMetrics};

pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let attributes = helpers::startup_attributes();
        let mut indicator =
            CircleIndicator::from_attributes(&attributes, DisplayMetrics::default());

        let count = indicator.page_total_count().clamp(1, helpers::MAX_PAGES);
        indicator.init_data(count, helpers::content_width(count));
        tracing::info!(
            pages = count,
            radius = indicator.radius(),
            "Circle indicator demo started"
        );

        let app = Self {
            indicator,
            last_offset: (0.0, 0.0),
            fill_swatch: 0,
            stroke_swatch: 0,
            dark_mode: true,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!(
            "Circle Indicator - page {} of {}",
            self.current_page() + 1,
            self.page_count()
        )
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
