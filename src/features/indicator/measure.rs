//! Size negotiation
//!
//! A layout pass hands the indicator one [`MeasureSpec`] per axis. The
//! indicator answers with a concrete size that honors the spec's mode.

use iced::Length;

/// How a layout pass constrains one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// The dimension must be exactly the given size
    Exact,
    /// The dimension may be anything up to the given size
    AtMost,
    /// No bound; the given size is ignored
    Unconstrained,
}

/// A (mode, size) constraint for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: f32,
}

impl MeasureSpec {
    pub const fn exact(size: f32) -> Self {
        Self {
            mode: MeasureMode::Exact,
            size,
        }
    }

    pub const fn at_most(size: f32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    pub const fn unconstrained() -> Self {
        Self {
            mode: MeasureMode::Unconstrained,
            size: 0.0,
        }
    }

    /// Map an iced length and the available maximum onto a spec
    ///
    /// `Fixed` is exact, `Fill` takes the whole available space, `Shrink`
    /// is bounded by it. An infinite maximum means the parent imposes no bound.
    pub fn resolve(length: Length, max: f32) -> Self {
        match length {
            Length::Fixed(size) => Self::exact(size),
            Length::Fill | Length::FillPortion(_) if max.is_finite() => Self::exact(max),
            Length::Shrink if max.is_finite() => Self::at_most(max),
            _ => Self::unconstrained(),
        }
    }

    /// Settle a natural size against this spec
    pub fn apply(self, natural: f32) -> f32 {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::AtMost => natural.min(self.size),
            MeasureMode::Unconstrained => natural,
        }
    }
}
