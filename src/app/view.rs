//! Application view rendering

use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Space, button, column, container, row, scrollable, slider, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::helpers::{MAX_PAGES, PAGE_HEIGHT, PAGE_WIDTH, PAGER_ID};
use super::message::Message;
use circle_indicator::circle_indicator;
use ::circle_indicator::ui::theme;

impl App {
    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let count = self.page_count();
        let current = self.current_page();

        let pages = row((0..count).map(|i| {
            container(text(format!("Page {}", i + 1)).size(28))
                .width(PAGE_WIDTH)
                .height(PAGE_HEIGHT)
                .align_x(Alignment::Center)
                .align_y(Alignment::Center)
                .style(move |t| theme::page_card(t, i as usize))
                .into()
        }));

        let pager = scrollable(pages)
            .direction(Direction::Horizontal(
                Scrollbar::new().width(0).scroller_width(0),
            ))
            .width(PAGE_WIDTH)
            .height(PAGE_HEIGHT)
            .id(iced::widget::Id::new(PAGER_ID))
            .on_scroll(Message::PagerScrolled);

        let indicator = container(circle_indicator(&self.indicator))
            .padding(12)
            .style(theme::indicator_strip);

        let navigation = row![
            button(text("Previous"))
                .on_press_maybe((current > 0).then_some(Message::PreviousPage))
                .style(theme::secondary_button),
            Space::new().width(Fill),
            button(text("Next"))
                .on_press_maybe((current + 1 < count as i32).then_some(Message::NextPage))
                .style(theme::primary_button),
        ]
        .width(PAGE_WIDTH)
        .align_y(Alignment::Center);

        let pages_controls = row![
            button(text("Remove page"))
                .on_press_maybe((count > 1).then_some(Message::RemovePage))
                .style(theme::secondary_button),
            button(text("Add page"))
                .on_press_maybe((count < MAX_PAGES).then_some(Message::AddPage))
                .style(theme::secondary_button),
            button(text("Fill color"))
                .on_press(Message::CycleFill)
                .style(theme::secondary_button),
            button(text("Stroke color"))
                .on_press(Message::CycleStroke)
                .style(theme::secondary_button),
            button(text(if self.dark_mode { "Light" } else { "Dark" }))
                .on_press(Message::ToggleTheme)
                .style(theme::secondary_button),
        ]
        .spacing(8);

        let geometry_controls = row![
            text(format!("Radius {:.1}", self.indicator.radius())).size(14),
            slider(0.0..=12.0, self.indicator.radius(), Message::RadiusChanged)
                .step(0.5)
                .width(140),
            text(format!("Interval {:.1}", self.indicator.circle_interval())).size(14),
            slider(
                0.0..=16.0,
                self.indicator.circle_interval(),
                Message::IntervalChanged
            )
            .step(0.5)
            .width(140),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let content = column![
            pager,
            indicator,
            navigation,
            pages_controls,
            geometry_controls,
        ]
        .spacing(16)
        .padding(24)
        .align_x(Alignment::Center);

        container(content)
            .width(Fill)
            .height(Fill)
            .align_x(Alignment::Center)
            .style(theme::main_content)
            .into()
    }
}
