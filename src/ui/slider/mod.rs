// SPDX-License-Identifier: MPL-2.0
//! The drag-to-page image slider.
//!
//! - [`state`] - Toolkit-free orchestration (pages, gesture, loading, frame)
//! - [`canvas`] - Input capture layered over the surface
//! - [`component`] - iced messages, update, subscription and view

pub mod canvas;
pub mod component;
pub mod state;

pub use canvas::{InputLayer, PointerInput};
pub use component::{Effect, Message, State};
pub use state::{Outcome, SliderSettings, SliderState, ViewState};
