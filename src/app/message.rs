//! Application messages

use iced::widget::scrollable;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Pager ============
    /// The paged scroll view moved
    PagerScrolled(scrollable::Viewport),
    /// Jump to the previous page
    PreviousPage,
    /// Jump to the next page
    NextPage,
    /// Append a page
    AddPage,
    /// Drop the last page
    RemovePage,

    // ============ Indicator styling ============
    /// Switch to the next fill swatch
    CycleFill,
    /// Switch to the next stroke swatch
    CycleStroke,
    /// Radius slider moved
    RadiusChanged(f32),
    /// Interval slider moved
    IntervalChanged(f32),

    // ============ Window ============
    /// Switch between dark and light mode
    ToggleTheme,
}
