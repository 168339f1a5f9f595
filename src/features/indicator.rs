//! Circle page indicator
//!
//! Toolkit-independent half of the indicator: state, mutators, size
//! negotiation and the display list. The iced binding lives in
//! [`crate::ui::primitives::circle_indicator`].

pub mod measure;
pub mod paint;
pub mod render;
pub mod state;

pub use measure::{MeasureMode, MeasureSpec};
pub use paint::{Argb, Paint, PaintStyle};
pub use render::CircleOp;
pub use state::{CircleIndicator, DEFAULT_PAGE_TOTAL_COUNT, DEFAULT_RADIUS, IndicatorState};
