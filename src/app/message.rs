// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::slider::DeviceClass;
use crate::ui::slider;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Slider(slider::Message),
    /// Show or hide the technical details of the error fallback.
    ToggleErrorDetails,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Ordered image identifiers (file paths or http(s) URLs).
    pub identifiers: Vec<String>,
    /// Forces a surface profile instead of detecting it from the window width.
    pub device: Option<DeviceClass>,
}
