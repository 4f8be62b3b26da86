// SPDX-License-Identifier: MPL-2.0
//! Error boundary fallback.
//!
//! Rendered instead of the slider once it has raised a load failure:
//! - A title describing the issue
//! - The failure's human-readable message
//! - Optional collapsible technical details
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::ErrorDisplay;
//!
//! ErrorDisplay::for_load_error(&err)
//!     .details_visible(show_details)
//!     .on_toggle_details(Message::ToggleErrorDetails)
//!     .view()
//! ```

use crate::error::LoadError;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{button, container, rule, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Heading of the fallback raised by a failing slider.
pub const FALLBACK_TITLE: &str = "Something went wrong";

/// Configuration for the ErrorDisplay component.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: String,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    toggle_details_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            message: None,
            details: None,
            show_details: false,
            toggle_details_message: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback for a failed image batch.
    #[must_use]
    pub fn for_load_error(error: &LoadError) -> Self {
        Self::new()
            .message(error.user_message())
            .details(error.details())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details (collapsible).
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    /// Sets the message to emit when toggling details visibility.
    #[must_use]
    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        content = content.push(Text::new(self.title).size(typography::TITLE_SM).style(
            |_theme: &Theme| text::Style {
                color: Some(palette::ERROR_500),
            },
        ));

        if let Some(message_text) = self.message {
            content = content.push(Text::new(message_text).size(typography::BODY));
        }

        if let Some(details_text) = self.details {
            if let Some(toggle_msg) = self.toggle_details_message {
                let label = if self.show_details {
                    "Hide details"
                } else {
                    "Show details"
                };
                content = content.push(
                    button(Text::new(label).size(typography::CAPTION))
                        .on_press(toggle_msg)
                        .padding(spacing::XXS),
                );
            }

            if self.show_details {
                let details_body = Text::new(details_text)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    });
                content = content.push(
                    Column::new()
                        .spacing(spacing::XS)
                        .width(Length::Fill)
                        .push(rule::horizontal(1))
                        .push(details_body),
                );
            }
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(500.0)
            .padding(spacing::LG)
            .style(|theme: &Theme| {
                let palette = theme.extended_palette();
                container::Style {
                    background: Some(iced::Background::Color(palette.background.weak.color)),
                    border: iced::Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}
