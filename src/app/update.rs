// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::{BoundaryError, Message};
use crate::ui::slider;
use iced::Task;

/// Routes a slider message and applies its effect.
///
/// Messages for a slider that was torn down (late load results included)
/// are dropped here.
pub fn handle_slider_message(
    slot: &mut Option<slider::State>,
    failure: &mut Option<BoundaryError>,
    message: slider::Message,
) -> Task<Message> {
    let Some(state) = slot.as_mut() else {
        log::debug!("dropping slider message after teardown: {message:?}");
        return Task::none();
    };

    let (effect, task) = state.handle_message(message);
    match effect {
        slider::Effect::None => task.map(Message::Slider),
        slider::Effect::RaiseFailure(error) => {
            log::error!("error boundary caught: {error}");
            state.teardown();
            *slot = None;
            *failure = Some(BoundaryError {
                error,
                show_details: false,
            });
            Task::none()
        }
    }
}
