// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`slider`] - The drag-to-page image slider
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Toolkit-independent state machines (drag, load frontier, throttle)
//! - [`compositor`] - Paints loaded pages onto the surface raster
//! - [`components`] - Reusable UI components (skeleton placeholder, error display)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod components;
pub mod compositor;
pub mod design_tokens;
pub mod slider;
pub mod state;
