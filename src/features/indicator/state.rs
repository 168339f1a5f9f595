//! Indicator state and its mutators

use iced::{Padding, Size};

use super::measure::MeasureSpec;
use super::paint::{Argb, Paint};
use crate::features::attributes::{
    AttributeError, AttributeSet, CIRCLE_INTERVAL, DisplayMetrics, FILL_COLOR, PADDING,
    PAGE_TOTAL_COUNT, RADIUS, STROKE_COLOR,
};

/// Circle radius used when nothing else is configured
pub const DEFAULT_RADIUS: f32 = 4.0;

/// Page count of a freshly constructed indicator
pub const DEFAULT_PAGE_TOTAL_COUNT: u32 = 1;

/// Everything the indicator draws and measures from
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorState {
    /// Circle radius in device pixels
    pub radius: f32,
    /// Gap between the edges of adjacent circles
    pub circle_interval: f32,
    /// Paint for the current page's circle
    pub fill: Paint,
    /// Paint for every page's outline
    pub stroke: Paint,
    /// Number of circles in the row
    pub page_total_count: u32,
    /// Index of the filled circle, not checked against the page count
    pub current_page: i32,
    /// Content width reported by the host. Never read by measure or draw.
    pub content_extent: f32,
    /// Last horizontal scroll position reported by the host. Never read by measure or draw.
    pub scroll_offset: f32,
    /// Padding assigned by the host
    pub padding: Padding,
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            circle_interval: DEFAULT_RADIUS,
            fill: Paint::fill(Argb::WHITE),
            stroke: Paint::stroke(Argb::WHITE),
            page_total_count: DEFAULT_PAGE_TOTAL_COUNT,
            current_page: 0,
            content_extent: 0.0,
            scroll_offset: 0.0,
            padding: Padding::ZERO,
        }
    }
}

/// A row of circles, one per page, with the current page filled
///
/// Every mutator is a plain assignment followed by an invalidation; the
/// renderer picks the change up on its next pass.
#[derive(Debug, Clone, Default)]
pub struct CircleIndicator {
    state: IndicatorState,
    revision: u64,
}

impl CircleIndicator {
    /// Create an indicator with default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an indicator from a declarative attribute set
    ///
    /// Never fails. A field that is missing or cannot be read keeps its
    /// default; read errors are logged.
    pub fn from_attributes(attrs: &AttributeSet, metrics: DisplayMetrics) -> Self {
        let mut state = IndicatorState::default();

        {
            let mut styled = attrs.obtain_styled(metrics);

            if let Some(color) = read_logged(FILL_COLOR, styled.color(FILL_COLOR)) {
                state.fill.color = color;
            }
            if let Some(color) = read_logged(STROKE_COLOR, styled.color(STROKE_COLOR)) {
                state.stroke.color = color;
            }
            if let Some(radius) = read_logged(RADIUS, styled.dimension(RADIUS)) {
                state.radius = sanitize_radius(radius).unwrap_or(state.radius);
            }
            // Interval follows whatever radius was settled on above
            state.circle_interval =
                read_logged(CIRCLE_INTERVAL, styled.dimension(CIRCLE_INTERVAL))
                    .unwrap_or(state.radius);
            if let Some(count) = read_logged(PAGE_TOTAL_COUNT, styled.count(PAGE_TOTAL_COUNT)) {
                state.page_total_count = count;
            }
            if let Some(padding) = read_logged(PADDING, styled.dimension(PADDING)) {
                state.padding = Padding::new(padding.max(0.0));
            }
        }

        tracing::debug!(
            radius = state.radius,
            circle_interval = state.circle_interval,
            fill = %state.fill.color,
            stroke = %state.stroke.color,
            "Circle indicator created from attributes"
        );

        Self { state, revision: 0 }
    }

    /// Current state snapshot
    pub fn state(&self) -> &IndicatorState {
        &self.state
    }

    /// Monotonic counter bumped by every mutator
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn radius(&self) -> f32 {
        self.state.radius
    }

    pub fn circle_interval(&self) -> f32 {
        self.state.circle_interval
    }

    pub fn page_total_count(&self) -> u32 {
        self.state.page_total_count
    }

    pub fn current_page(&self) -> i32 {
        self.state.current_page
    }

    pub fn content_extent(&self) -> f32 {
        self.state.content_extent
    }

    pub fn scroll_offset(&self) -> f32 {
        self.state.scroll_offset
    }

    pub fn padding(&self) -> Padding {
        self.state.padding
    }

    pub fn fill_paint(&self) -> Paint {
        self.state.fill
    }

    pub fn stroke_paint(&self) -> Paint {
        self.state.stroke
    }

    /// Set page count and the host's content width
    ///
    /// `content_extent` is stored but has no effect on rendering.
    pub fn init_data(&mut self, count: u32, content_extent: f32) {
        self.state.page_total_count = count;
        self.state.content_extent = content_extent;
        self.invalidate();
    }

    pub fn set_page_total_count(&mut self, count: u32) {
        self.state.page_total_count = count;
        self.invalidate();
    }

    /// Set the highlighted page, starting at zero
    pub fn set_current_page(&mut self, page: i32) {
        self.state.current_page = page;
        self.invalidate();
    }

    pub fn set_fill_color(&mut self, color: impl Into<Argb>) {
        self.state.fill.color = color.into();
        self.invalidate();
    }

    pub fn set_stroke_color(&mut self, color: impl Into<Argb>) {
        self.state.stroke.color = color.into();
        self.invalidate();
    }

    /// Set the circle radius in pixels
    ///
    /// Negative values clamp to zero. Non-finite values are ignored.
    pub fn set_radius(&mut self, radius: f32) {
        let Some(radius) = sanitize_radius(radius) else {
            return;
        };
        self.state.radius = radius;
        self.invalidate();
    }

    /// Set the gap between circle edges in pixels
    pub fn set_circle_interval(&mut self, interval: f32) {
        if !interval.is_finite() {
            tracing::warn!(interval, "Ignoring non-finite circle interval");
            return;
        }
        self.state.circle_interval = interval;
        self.invalidate();
    }

    pub fn set_padding(&mut self, padding: impl Into<Padding>) {
        self.state.padding = padding.into();
        self.invalidate();
    }

    /// Record a scroll notification from the host
    ///
    /// Only the horizontal position is kept; the filled circle still
    /// follows [`Self::set_current_page`].
    pub fn on_scrolled(
        &mut self,
        horizontal: f32,
        _vertical: f32,
        _old_horizontal: f32,
        _old_vertical: f32,
    ) {
        self.state.scroll_offset = horizontal;
        self.invalidate();
    }

    /// Width of the circle row plus horizontal padding
    pub fn natural_width(&self) -> f32 {
        let s = &self.state;
        let count = s.page_total_count as f32;
        let gaps = s.page_total_count.saturating_sub(1) as f32;
        s.padding.left + s.padding.right + count * 2.0 * s.radius + gaps * s.circle_interval
    }

    /// One circle diameter plus vertical padding
    pub fn natural_height(&self) -> f32 {
        let s = &self.state;
        2.0 * s.radius + s.padding.top + s.padding.bottom
    }

    /// Negotiate the indicator's size against independent axis constraints
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Size::new(
            width.apply(self.natural_width()),
            height.apply(self.natural_height()),
        )
    }

    /// Request a redraw on the next render pass
    fn invalidate(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(revision = self.revision, "Circle indicator invalidated");
    }
}

/// Clamp a negative radius to zero and reject non-finite ones
fn sanitize_radius(radius: f32) -> Option<f32> {
    if !radius.is_finite() {
        tracing::warn!(radius, "Ignoring non-finite radius");
        return None;
    }
    if radius < 0.0 {
        tracing::warn!(radius, "Negative radius clamped to zero");
        return Some(0.0);
    }
    Some(radius)
}

/// Log a failed attribute read and turn it into "not supplied"
fn read_logged<T>(key: &str, result: Result<Option<T>, AttributeError>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to read indicator attribute {}: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::indicator::MeasureMode;

    fn indicator(count: u32, radius: f32, interval: f32) -> CircleIndicator {
        let mut ind = CircleIndicator::new();
        ind.set_page_total_count(count);
        ind.set_radius(radius);
        ind.set_circle_interval(interval);
        ind
    }

    #[test]
    fn test_defaults() {
        let ind = CircleIndicator::new();
        assert_eq!(ind.radius(), 4.0);
        assert_eq!(ind.circle_interval(), 4.0);
        assert_eq!(ind.fill_paint(), Paint::fill(Argb::WHITE));
        assert_eq!(ind.stroke_paint(), Paint::stroke(Argb::WHITE));
        assert_eq!(ind.page_total_count(), 1);
        assert_eq!(ind.current_page(), 0);
        assert_eq!(ind.revision(), 0);
    }

    #[test]
    fn test_unconstrained_width_is_natural() {
        let padding = Padding {
            top: 1.0,
            right: 3.0,
            bottom: 2.0,
            left: 5.0,
        };
        for n in 1..=8u32 {
            let mut ind = indicator(n, 6.0, 3.0);
            ind.set_padding(padding);
            ind.set_current_page((n - 1) as i32);
            let size = ind.measure(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());
            let expected = 5.0 + 3.0 + n as f32 * 12.0 + (n - 1) as f32 * 3.0;
            assert_eq!(size.width, expected);
        }
    }

    #[test]
    fn test_exact_width_ignores_content() {
        for (n, radius) in [(0, 4.0), (3, 10.0), (50, 2.0)] {
            let ind = indicator(n, radius, radius);
            let size = ind.measure(MeasureSpec::exact(77.0), MeasureSpec::unconstrained());
            assert_eq!(size.width, 77.0);
        }
    }

    #[test]
    fn test_at_most_width_clamps() {
        let ind = indicator(5, 4.0, 4.0);
        // Natural width: 5 * 8 + 4 * 4 = 56
        assert_eq!(ind.natural_width(), 56.0);
        assert_eq!(
            ind.measure(MeasureSpec::at_most(30.0), MeasureSpec::unconstrained()).width,
            30.0
        );
        assert_eq!(
            ind.measure(MeasureSpec::at_most(100.0), MeasureSpec::unconstrained()).width,
            56.0
        );
    }

    #[test]
    fn test_height_independent_of_page_count() {
        let mut ind = indicator(1, 4.0, 4.0);
        ind.set_padding(Padding {
            top: 2.0,
            right: 0.0,
            bottom: 6.0,
            left: 0.0,
        });
        let before = ind.measure(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());
        ind.set_page_total_count(40);
        let after = ind.measure(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());
        assert_eq!(before.height, 16.0);
        assert_eq!(after.height, 16.0);
        assert_eq!(
            ind.measure(MeasureSpec::unconstrained(), MeasureSpec::at_most(10.0)).height,
            10.0
        );
        assert_eq!(
            ind.measure(MeasureSpec::unconstrained(), MeasureSpec::exact(3.0)).height,
            3.0
        );
    }

    #[test]
    fn test_zero_pages_has_no_negative_gap() {
        let ind = indicator(0, 4.0, 4.0);
        assert_eq!(ind.natural_width(), 0.0);
    }

    #[test]
    fn test_mutators_touch_only_their_field() {
        let mut ind = indicator(5, 4.0, 4.0);
        let before = ind.state().clone();

        ind.set_current_page(3);
        assert_eq!(
            *ind.state(),
            IndicatorState {
                current_page: 3,
                ..before.clone()
            }
        );

        let before = ind.state().clone();
        ind.set_fill_color(Argb(0xFF11_2233));
        assert_eq!(
            *ind.state(),
            IndicatorState {
                fill: Paint::fill(Argb(0xFF11_2233)),
                ..before.clone()
            }
        );

        let before = ind.state().clone();
        ind.set_stroke_color(Argb(0x8000_0000));
        assert_eq!(
            *ind.state(),
            IndicatorState {
                stroke: Paint::stroke(Argb(0x8000_0000)),
                ..before.clone()
            }
        );

        let before = ind.state().clone();
        ind.init_data(9, 1234.0);
        assert_eq!(
            *ind.state(),
            IndicatorState {
                page_total_count: 9,
                content_extent: 1234.0,
                ..before
            }
        );
    }

    #[test]
    fn test_non_layout_mutators_keep_measured_size() {
        let mut ind = indicator(5, 4.0, 4.0);
        let spec = MeasureSpec::unconstrained();
        let size = ind.measure(spec, spec);

        ind.set_current_page(4);
        ind.set_fill_color(Argb(0xFF00_0000));
        ind.set_stroke_color(Argb(0xFF00_0000));
        ind.on_scrolled(300.0, 0.0, 100.0, 0.0);
        assert_eq!(ind.measure(spec, spec), size);
        assert_eq!(spec.mode, MeasureMode::Unconstrained);
    }

    #[test]
    fn test_every_mutator_invalidates() {
        let mut ind = CircleIndicator::new();
        let mut last = ind.revision();
        let mut check = |ind: &CircleIndicator| {
            assert!(ind.revision() > last);
            last = ind.revision();
        };

        ind.set_page_total_count(3);
        check(&ind);
        ind.set_current_page(1);
        check(&ind);
        ind.set_fill_color(Argb(0xFFFF_0000));
        check(&ind);
        ind.set_stroke_color(Argb(0xFF00_FF00));
        check(&ind);
        ind.set_radius(6.0);
        check(&ind);
        ind.set_circle_interval(2.0);
        check(&ind);
        ind.set_padding(Padding::new(4.0));
        check(&ind);
        ind.init_data(4, 800.0);
        check(&ind);
        ind.on_scrolled(10.0, 0.0, 0.0, 0.0);
        check(&ind);
    }

    #[test]
    fn test_radius_clamped_and_non_finite_ignored() {
        let mut ind = CircleIndicator::new();
        ind.set_radius(-3.0);
        assert_eq!(ind.radius(), 0.0);

        ind.set_radius(5.0);
        let revision = ind.revision();
        ind.set_radius(f32::NAN);
        assert_eq!(ind.radius(), 5.0);
        assert_eq!(ind.revision(), revision);
    }

    #[test]
    fn test_set_radius_keeps_interval() {
        let mut ind = CircleIndicator::new();
        ind.set_radius(10.0);
        assert_eq!(ind.circle_interval(), 4.0);
    }

    #[test]
    fn test_on_scrolled_keeps_horizontal_offset() {
        let mut ind = CircleIndicator::new();
        ind.on_scrolled(250.0, 40.0, 100.0, 10.0);
        assert_eq!(ind.scroll_offset(), 250.0);
    }
}
