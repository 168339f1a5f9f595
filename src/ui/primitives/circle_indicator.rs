//! Circle page indicator primitive
//!
//! Binds a [`CircleIndicator`] to iced's `Widget` trait: layout maps iced's
//! sizing onto [`MeasureSpec`]s and draw paints the indicator's display list
//! with rounded quads.
//!
//! # Design
//!
//! This is a primitive component - it borrows the indicator from the host's
//! state and does not depend on application-specific types.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::Event;
use iced::mouse;
use iced::{Background, Border, Color, Element, Length, Rectangle, Size, Theme};

use crate::features::indicator::{CircleIndicator, CircleOp, MeasureSpec, PaintStyle};

/// Outline width for stroked circles
const STROKE_WIDTH: f32 = 1.0;

/// Create an indicator widget that sizes itself to its content
pub fn circle_indicator(indicator: &CircleIndicator) -> IndicatorWidget<'_> {
    IndicatorWidget::new(indicator)
}

/// Widget view of a [`CircleIndicator`]
pub struct IndicatorWidget<'a> {
    indicator: &'a CircleIndicator,
    width: Length,
    height: Length,
}

impl<'a> IndicatorWidget<'a> {
    pub fn new(indicator: &'a CircleIndicator) -> Self {
        Self {
            indicator,
            width: Length::Shrink,
            height: Length::Shrink,
        }
    }

    /// Sets the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

/// Tree state: the last indicator revision this widget scheduled a redraw for
#[derive(Debug, Clone, Copy, Default)]
struct State {
    seen_revision: Option<u64>,
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for IndicatorWidget<'_>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let max = limits.max();
        let width = MeasureSpec::resolve(self.width, max.width);
        let height = MeasureSpec::resolve(self.height, max.height);

        layout::Node::new(self.indicator.measure(width, height))
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        _event: &Event,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let revision = self.indicator.revision();

        if state.seen_revision != Some(revision) {
            state.seen_revision = Some(revision);
            shell.request_redraw();
        }
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        // Circles outside the measured box are clipped, like any other view
        renderer.with_layer(bounds, |renderer| {
            for op in self.indicator.draw_ops_within(bounds.width) {
                draw_circle(renderer, bounds, &op);
            }
        });
    }
}

/// Paint one circle as a fully rounded quad
fn draw_circle<Renderer: renderer::Renderer>(
    renderer: &mut Renderer,
    bounds: Rectangle,
    op: &CircleOp,
) {
    if op.radius <= 0.0 {
        return;
    }

    let color = op.paint.color.to_color();
    let cx = bounds.x + op.center.x;
    let cy = bounds.y + op.center.y;

    match op.paint.style {
        PaintStyle::Fill => {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: circle_bounds(cx, cy, op.radius),
                    border: Border::default().rounded(op.radius),
                    ..Default::default()
                },
                Background::Color(color),
            );
        }
        PaintStyle::Stroke => {
            // Center the outline on the circle's edge
            let outer = op.radius + STROKE_WIDTH / 2.0;
            renderer.fill_quad(
                renderer::Quad {
                    bounds: circle_bounds(cx, cy, outer),
                    border: Border {
                        color,
                        width: STROKE_WIDTH,
                        radius: outer.into(),
                    },
                    ..Default::default()
                },
                Background::Color(Color::TRANSPARENT),
            );
        }
    }
}

fn circle_bounds(cx: f32, cy: f32, radius: f32) -> Rectangle {
    Rectangle {
        x: cx - radius,
        y: cy - radius,
        width: radius * 2.0,
        height: radius * 2.0,
    }
}

impl<'a, Message: 'a> From<IndicatorWidget<'a>> for Element<'a, Message> {
    fn from(widget: IndicatorWidget<'a>) -> Self {
        Element::new(widget)
    }
}
