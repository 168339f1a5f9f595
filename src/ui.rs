//! UI layer
//!
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Theme** (`theme`): Palette and styles shared by the demo host

pub mod primitives;
pub mod theme;

pub use primitives::{IndicatorWidget, circle_indicator};
