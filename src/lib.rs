//! Circle page indicator for iced
//!
//! A row of circles, one per page, with the current page filled and the rest
//! outlined. Hosts feed it page count, current page and scroll updates and
//! place it with [`ui::circle_indicator`].

pub mod features;
pub mod ui;

pub use features::{AttributeSet, CircleIndicator, DisplayMetrics};
pub use ui::circle_indicator;
