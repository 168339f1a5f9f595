//! Display list for one draw pass

use iced::Point;

use super::paint::Paint;
use super::state::CircleIndicator;

/// One circle to paint, in the indicator's local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleOp {
    pub center: Point,
    pub radius: f32,
    pub paint: Paint,
}

impl CircleIndicator {
    /// Horizontal distance between the centers of adjacent circles
    pub fn circle_pitch(&self) -> f32 {
        2.0 * self.radius() + self.circle_interval()
    }

    /// Circles for the current state, in paint order
    ///
    /// One stroked circle per page, then the filled circle for the current
    /// page so it sits on top of the outline at the same index. The current
    /// page is not range checked and may land outside the stroked row.
    pub fn draw_ops(&self) -> impl Iterator<Item = CircleOp> + '_ {
        self.ops_for(self.page_total_count())
    }

    /// Like [`Self::draw_ops`], skipping stroked circles that lie entirely
    /// outside `[0, width)` horizontally
    pub fn draw_ops_within(&self, width: f32) -> impl Iterator<Item = CircleOp> + '_ {
        self.ops_for(self.visible_stroke_count(width))
    }

    /// Number of leading stroked circles that reach into `[0, width)`
    fn visible_stroke_count(&self, width: f32) -> u32 {
        let count = self.page_total_count();
        let pitch = self.circle_pitch();
        let left = self.padding().left;

        let reach = if pitch > 0.0 {
            // Left edge of circle i is left + i * pitch
            (width - left) / pitch
        } else if pitch < 0.0 {
            // Right edge of circle i is left + 2r + i * pitch
            (left + 2.0 * self.radius()) / -pitch
        } else {
            return count.min(1);
        };

        if reach.is_nan() {
            return 0;
        }
        // Float to int casts saturate
        count.min(reach.ceil().max(0.0) as u32)
    }

    fn ops_for(&self, strokes: u32) -> impl Iterator<Item = CircleOp> + '_ {
        let state = self.state();
        let radius = state.radius;
        let pitch = self.circle_pitch();
        let origin_x = state.padding.left + radius;
        let y = state.padding.top + radius;

        let stroked = (0..strokes).map(move |i| CircleOp {
            center: Point::new(origin_x + i as f32 * pitch, y),
            radius,
            paint: state.stroke,
        });

        let cx = state.current_page as f32 * pitch;
        let filled = CircleOp {
            center: Point::new(origin_x + cx, y),
            radius,
            paint: state.fill,
        };

        stroked.chain(std::iter::once(filled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::indicator::PaintStyle;

    fn five_pages_on_page_two() -> CircleIndicator {
        let mut ind = CircleIndicator::new();
        ind.set_page_total_count(5);
        ind.set_radius(4.0);
        ind.set_circle_interval(4.0);
        ind.set_current_page(2);
        ind
    }

    #[test]
    fn test_five_page_layout() {
        let ops: Vec<CircleOp> = five_pages_on_page_two().draw_ops().collect();
        assert_eq!(ops.len(), 6);

        let stroked: Vec<f32> = ops[..5].iter().map(|op| op.center.x).collect();
        assert_eq!(stroked, vec![4.0, 16.0, 28.0, 40.0, 52.0]);
        assert!(ops[..5].iter().all(|op| op.center.y == 4.0));
        assert!(ops[..5].iter().all(|op| op.paint.style == PaintStyle::Stroke));

        let filled = ops[5];
        assert_eq!(filled.paint.style, PaintStyle::Fill);
        assert_eq!(filled.center, Point::new(28.0, 4.0));
        assert_eq!(filled.center, ops[2].center);
    }

    #[test]
    fn test_filled_circle_drawn_last() {
        let ops: Vec<CircleOp> = five_pages_on_page_two().draw_ops().collect();
        assert_eq!(ops.last().map(|op| op.paint.style), Some(PaintStyle::Fill));
    }

    #[test]
    fn test_padding_offsets_every_circle() {
        let mut ind = five_pages_on_page_two();
        ind.set_padding(iced::Padding {
            top: 3.0,
            right: 0.0,
            bottom: 0.0,
            left: 10.0,
        });
        let ops: Vec<CircleOp> = ind.draw_ops().collect();
        assert_eq!(ops[0].center, Point::new(14.0, 7.0));
        assert_eq!(ops[5].center, Point::new(38.0, 7.0));
    }

    #[test]
    fn test_current_page_out_of_range_is_not_clamped() {
        let mut ind = five_pages_on_page_two();
        ind.set_current_page(7);
        let filled = ind.draw_ops().last().expect("filled circle");
        assert_eq!(filled.center.x, 4.0 + 7.0 * 12.0);

        ind.set_current_page(-1);
        let filled = ind.draw_ops().last().expect("filled circle");
        assert_eq!(filled.center.x, -8.0);
    }

    #[test]
    fn test_scroll_and_content_extent_do_not_affect_output() {
        let base = five_pages_on_page_two();
        let ops: Vec<CircleOp> = base.draw_ops().collect();
        let size = base.natural_width();

        for (offset, extent) in [(0.0, 0.0), (123.0, 480.0), (-50.0, 1e6)] {
            let mut ind = base.clone();
            ind.on_scrolled(offset, 7.0, 3.0, 1.0);
            ind.init_data(5, extent);
            assert_eq!(ind.draw_ops().collect::<Vec<_>>(), ops);
            assert_eq!(ind.natural_width(), size);
            assert_eq!(ind.scroll_offset(), offset);
            assert_eq!(ind.content_extent(), extent);
        }
    }

    #[test]
    fn test_zero_pages_still_draws_filled_circle() {
        let mut ind = CircleIndicator::new();
        ind.set_page_total_count(0);
        let ops: Vec<CircleOp> = ind.draw_ops().collect();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].paint.style, PaintStyle::Fill);
    }

    #[test]
    fn test_huge_page_count_is_lazy() {
        let mut ind = CircleIndicator::new();
        ind.set_page_total_count(u32::MAX);
        let first: Vec<CircleOp> = ind.draw_ops().take(3).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first[2].center.x, 4.0 + 2.0 * 12.0);
    }

    #[test]
    fn test_ops_within_width_skip_offscreen_strokes() {
        let mut ind = CircleIndicator::new();
        ind.set_page_total_count(u32::MAX);
        // Pitch 12: left edges at 0, 12, 24, 36, 48 fall inside 50px
        let ops: Vec<CircleOp> = ind.draw_ops_within(50.0).collect();
        assert_eq!(ops.len(), 6);
        assert_eq!(ops.last().map(|op| op.paint.style), Some(PaintStyle::Fill));
    }

    #[test]
    fn test_ops_within_wide_bounds_match_full_list() {
        let ind = five_pages_on_page_two();
        let width = ind.natural_width();
        assert_eq!(
            ind.draw_ops_within(width).collect::<Vec<_>>(),
            ind.draw_ops().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_ops_within_overlapping_circles() {
        let mut ind = five_pages_on_page_two();
        ind.set_circle_interval(-8.0);
        // Pitch 0: every outline sits on the first one
        assert_eq!(ind.draw_ops_within(100.0).count(), 2);

        ind.set_circle_interval(-16.0);
        // Pitch -8: right edges at 8, 0, -8, ... only the first reaches in
        assert_eq!(ind.draw_ops_within(100.0).count(), 2);
    }
}
