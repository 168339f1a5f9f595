//! Feature modules - widget logic separated from UI bindings
//!
//! Features should not depend on UI components directly.

pub mod attributes;
pub mod indicator;

pub use attributes::{AttributeError, AttributeSet, DisplayMetrics};
pub use indicator::{CircleIndicator, MeasureMode, MeasureSpec};
