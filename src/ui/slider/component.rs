// SPDX-License-Identifier: MPL-2.0
//! Slider component: wires [`SliderState`] into iced.
//!
//! Input arrives from the [`InputLayer`] canvas, load batches run as
//! [`Task`]s, and a timer subscription is active only while the throttle
//! holds a move back or the skeleton is animating.

use super::canvas::{InputLayer, PointerInput};
use super::state::{Outcome, SliderSettings, SliderState, ViewState};
use crate::domain::slider::SurfaceSize;
use crate::error::LoadError;
use crate::media::{load_request, ImageData, LoadRequest};
use crate::ui::components::placeholder::{self, Skeleton};
use crate::ui::compositor;
use iced::widget::image::{FilterMethod, Handle, Image};
use iced::widget::{Canvas, Container, Stack};
use iced::{time, Element, Length, Subscription, Task};
use std::time::{Duration, Instant};

const SKELETON_FRAME: Duration = Duration::from_millis(50);

/// Messages emitted by the slider's widgets and tasks.
#[derive(Debug, Clone)]
pub enum Message {
    Pointer(PointerInput),
    Tick(Instant),
    Loaded(LoadRequest, Result<Vec<ImageData>, LoadError>),
}

/// Side effects the application should perform after handling a slider message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// A batch failed; the error boundary takes over.
    RaiseFailure(LoadError),
}

/// One mounted slider and the last surface handed to the renderer.
#[derive(Debug)]
pub struct State {
    slider: SliderState,
    frame: Option<Handle>,
    mounted_at: Instant,
    last_tick: Instant,
}

impl State {
    /// Creates the slider and starts loading its initial batch.
    pub fn new(
        identifiers: Vec<String>,
        size: SurfaceSize,
        settings: SliderSettings,
    ) -> (Self, Task<Message>) {
        let mut slider = SliderState::new(identifiers, size, settings);
        let task = slider
            .mount()
            .map_or_else(Task::none, |request| spawn_load(&slider, request));
        let now = Instant::now();
        (
            Self {
                slider,
                frame: None,
                mounted_at: now,
                last_tick: now,
            },
            task,
        )
    }

    #[must_use]
    pub fn slider(&self) -> &SliderState {
        &self.slider
    }

    pub fn teardown(&mut self) {
        self.slider.teardown();
        self.frame = None;
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        let request = match message {
            Message::Pointer(input) => self.handle_pointer(input),
            Message::Tick(now) => {
                self.last_tick = now;
                self.slider.poll_throttle(now)
            }
            Message::Loaded(request, result) => {
                match self.slider.apply_loaded(&request, result) {
                    Outcome::Failed(err) => {
                        self.frame = None;
                        return (Effect::RaiseFailure(err), Task::none());
                    }
                    Outcome::Repaint | Outcome::Ignored => None,
                }
            }
        };

        self.refresh_frame();
        let task = request.map_or_else(Task::none, |request| spawn_load(&self.slider, request));
        (Effect::None, task)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.slider.has_pending_move() {
            time::every(self.slider.settings().move_throttle).map(Message::Tick)
        } else if self.slider.view_state() == ViewState::Placeholder {
            time::every(SKELETON_FRAME).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let size = self.slider.size();
        let (width, height) = (size.width_f32(), size.height_f32());

        let surface: Element<'_, Message> = match (&self.frame, self.slider.view_state()) {
            (Some(handle), ViewState::Ready) => {
                let image = Image::new(handle.clone())
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height))
                    .filter_method(FilterMethod::Nearest);
                let input = Canvas::new(InputLayer {
                    touch_enabled: self.slider.settings().touch_enabled,
                })
                .width(Length::Fixed(width))
                .height(Length::Fixed(height));
                Stack::new().push(image).push(input).into()
            }
            _ => {
                let elapsed = self.last_tick.saturating_duration_since(self.mounted_at);
                placeholder::view(width, height, Skeleton::at(elapsed))
            }
        };

        Container::new(surface)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }

    fn handle_pointer(&mut self, input: PointerInput) -> Option<LoadRequest> {
        match input {
            PointerInput::Press { x } => {
                self.slider.press(x, true);
                None
            }
            PointerInput::Move { x } => self.slider.offer_move(x, Instant::now()),
            PointerInput::Release { x } => self.slider.release(x),
            PointerInput::Lost => {
                self.slider.cancel_gesture();
                None
            }
        }
    }

    fn refresh_frame(&mut self) {
        if !self.slider.is_dirty() && self.frame.is_some() {
            return;
        }
        self.frame = self.slider.frame().map(|pixmap| {
            Handle::from_rgba(pixmap.width(), pixmap.height(), compositor::to_rgba(pixmap))
        });
    }
}

fn spawn_load(slider: &SliderState, request: LoadRequest) -> Task<Message> {
    let identifiers = slider.identifiers();
    Task::perform(load_request(identifiers, request.clone()), move |result| {
        Message::Loaded(request.clone(), result)
    })
}
