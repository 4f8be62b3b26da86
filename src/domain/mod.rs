// SPDX-License-Identifier: MPL-2.0
//! Domain layer - plain data types with no toolkit dependencies.
//!
//! # Modules
//!
//! - [`slider`]: Page sequence and surface geometry
//!   ([`PageSet`](slider::PageSet), [`ScrollRange`](slider::ScrollRange),
//!   [`DeviceClass`](slider::DeviceClass))

pub mod slider;
