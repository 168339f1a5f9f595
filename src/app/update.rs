//! Message update handlers

use iced::Task;
use iced::widget::scrollable::RelativeOffset;

use super::helpers::{self, MAX_PAGES, PAGER_ID};
use super::{App, Message};
use circle_indicator::ui::theme;

impl App {
    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PagerScrolled(viewport) => {
                let offset = viewport.absolute_offset();
                let (old_x, old_y) = self.last_offset;
                self.indicator.on_scrolled(offset.x, offset.y, old_x, old_y);
                self.last_offset = (offset.x, offset.y);

                let content_width = viewport.content_bounds().width;
                if content_width != self.indicator.content_extent() {
                    self.indicator.init_data(self.page_count(), content_width);
                }

                let page = helpers::page_for_offset(
                    offset.x,
                    viewport.bounds().width,
                    self.page_count(),
                );
                if page != self.current_page() {
                    tracing::debug!(page, "Pager settled on a new page");
                    self.indicator.set_current_page(page);
                }
                Task::none()
            }
            Message::PreviousPage => self.go_to_page(self.current_page() - 1),
            Message::NextPage => self.go_to_page(self.current_page() + 1),
            Message::AddPage => {
                let count = (self.page_count() + 1).min(MAX_PAGES);
                self.indicator.init_data(count, helpers::content_width(count));
                Task::none()
            }
            Message::RemovePage => {
                let count = self.page_count().saturating_sub(1).max(1);
                self.indicator.init_data(count, helpers::content_width(count));
                if self.current_page() >= count as i32 {
                    return self.go_to_page(count as i32 - 1);
                }
                Task::none()
            }
            Message::CycleFill => {
                self.fill_swatch = (self.fill_swatch + 1) % theme::FILL_SWATCHES.len();
                self.indicator
                    .set_fill_color(theme::FILL_SWATCHES[self.fill_swatch]);
                Task::none()
            }
            Message::CycleStroke => {
                self.stroke_swatch = (self.stroke_swatch + 1) % theme::STROKE_SWATCHES.len();
                self.indicator
                    .set_stroke_color(theme::STROKE_SWATCHES[self.stroke_swatch]);
                Task::none()
            }
            Message::RadiusChanged(radius) => {
                self.indicator.set_radius(radius);
                Task::none()
            }
            Message::IntervalChanged(interval) => {
                self.indicator.set_circle_interval(interval);
                Task::none()
            }
            Message::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                Task::none()
            }
        }
    }

    /// Highlight `page` and scroll the pager to it
    fn go_to_page(&mut self, page: i32) -> Task<Message> {
        let count = self.page_count();
        if count == 0 {
            return Task::none();
        }
        let page = page.clamp(0, count as i32 - 1);
        self.indicator.set_current_page(page);

        iced::widget::operation::snap_to(
            iced::widget::Id::new(PAGER_ID),
            RelativeOffset {
                x: helpers::relative_offset_for_page(page, count),
                y: 0.0,
            },
        )
    }
}
