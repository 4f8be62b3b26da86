// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` hosts a single slider inside the page chrome and acts as its
//! error boundary: once the slider raises a load failure it is torn down and
//! replaced by the fallback for the rest of the session.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::slider::DeviceClass;
use crate::error::LoadError;
use crate::ui::slider::{self, SliderSettings};
use iced::{window, Element, Subscription, Task, Theme};

/// Window title, also the heading above the surface.
pub const APP_TITLE: &str = "Canvas Image Slider";

/// Caption rendered under the surface.
pub const CAPTION: &str = "Drag to change image";

/// Failure caught by the error boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryError {
    pub error: LoadError,
    pub show_details: bool,
}

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    /// `None` once the error boundary has torn the slider down.
    slider: Option<slider::State>,
    failure: Option<BoundaryError>,
}

/// Builds the window settings from the `[window]` section.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings(config: &Config) -> window::Settings {
    window::Settings {
        size: iced::Size::new(config.window.width() as f32, config.window.height() as f32),
        ..window::Settings::default()
    }
}

/// Picks the surface profile: an explicit override wins, otherwise the
/// configured window width is compared against the compact breakpoint.
#[must_use]
pub fn resolve_device_class(config: &Config, device: Option<DeviceClass>) -> DeviceClass {
    device.unwrap_or_else(|| {
        DeviceClass::from_viewport_width(config.window.width(), config.slider.compact_breakpoint())
    })
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load();
    if let Some(warning) = config_warning {
        log::warn!("{warning}");
    }
    match config::write_defaults_if_missing() {
        Ok(Some(path)) => log::info!("wrote default settings to {}", path.display()),
        Ok(None) => {}
        Err(err) => log::warn!("could not write default settings: {err}"),
    }
    let window = window_settings(&config);

    // iced 0.14 requires Fn for boot; the flags are only consumed once.
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, &config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Mounts the slider and starts loading its initial batch.
    pub fn new(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let device = resolve_device_class(config, flags.device);
        log::info!(
            "starting with {} image(s), {device:?} surface",
            flags.identifiers.len()
        );

        let (slider, task) = slider::State::new(
            flags.identifiers,
            device.surface_size(),
            SliderSettings::from(&config.slider),
        );

        (
            Self {
                slider: Some(slider),
                failure: None,
            },
            task.map(Message::Slider),
        )
    }

    #[must_use]
    pub fn slider(&self) -> Option<&slider::State> {
        self.slider.as_ref()
    }

    #[must_use]
    pub fn failure(&self) -> Option<&BoundaryError> {
        self.failure.as_ref()
    }

    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self.slider.as_ref())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Slider(slider_message) => update::handle_slider_message(
                &mut self.slider,
                &mut self.failure,
                slider_message,
            ),
            Message::ToggleErrorDetails => {
                if let Some(failure) = &mut self.failure {
                    failure.show_details = !failure.show_details;
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self.slider.as_ref(), self.failure.as_ref())
    }
}
