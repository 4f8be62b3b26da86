// SPDX-License-Identifier: MPL-2.0
//! Page chrome: heading, the slider (or the error fallback) and a caption.

use super::{BoundaryError, Message, APP_TITLE, CAPTION};
use crate::ui::components::error_display::ErrorDisplay;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::slider;
use iced::widget::{text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

pub fn view<'a>(
    slider: Option<&'a slider::State>,
    failure: Option<&'a BoundaryError>,
) -> Element<'a, Message> {
    let heading = Text::new(APP_TITLE).size(typography::TITLE_MD);

    let body: Element<'a, Message> = match (failure, slider) {
        (Some(failure), _) => ErrorDisplay::for_load_error(&failure.error)
            .details_visible(failure.show_details)
            .on_toggle_details(Message::ToggleErrorDetails)
            .view(),
        (None, Some(state)) => state.view().map(Message::Slider),
        (None, None) => Text::new("").into(),
    };

    let caption = Text::new(CAPTION)
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_700),
        });

    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(body)
        .push(caption);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}
