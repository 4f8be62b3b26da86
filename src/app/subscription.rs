// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::slider;
use iced::Subscription;

/// The slider's timers, or nothing once it has been torn down.
pub fn create(slider: Option<&slider::State>) -> Subscription<Message> {
    slider.map_or_else(Subscription::none, |state| {
        state.subscription().map(Message::Slider)
    })
}
