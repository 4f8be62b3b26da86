// SPDX-License-Identifier: MPL-2.0
//! `iced_pager` is a drag-to-page image slider built with the Iced GUI framework.
//!
//! Images are painted side by side on a fixed-size surface and scrolled
//! horizontally by dragging. Pages load progressively as the drag approaches
//! them instead of all at once.

#![doc(html_root_url = "https://docs.rs/iced_pager/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
