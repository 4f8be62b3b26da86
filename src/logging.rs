// SPDX-License-Identifier: MPL-2.0
//! Logger setup.
//!
//! `RUST_LOG` wins when set. Otherwise this crate logs at `info` and other
//! crates stay silent; `RUST_LOG=iced_pager=debug` shows load decisions.

use env_logger::fmt::{Color, Formatter};
use log::{Level, LevelFilter, Record};
use std::io::Write;

const CRATE_TARGET: &str = "iced_pager";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Installs the global logger. Calling it again is a no-op.
pub fn init() {
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_env("RUST_LOG");
    } else {
        builder.filter(None, LevelFilter::Off);
        builder.filter(Some(CRATE_TARGET), DEFAULT_LEVEL);
    }

    builder.format(|buf: &mut Formatter, record: &Record| {
        let mut level_style = buf.style();
        match record.level() {
            Level::Error => level_style.set_color(Color::Red).set_bold(true),
            Level::Warn => level_style.set_color(Color::Yellow).set_bold(true),
            Level::Info => level_style.set_color(Color::Green).set_bold(true),
            Level::Debug => level_style.set_color(Color::Blue).set_bold(true),
            Level::Trace => level_style.set_color(Color::White),
        };

        writeln!(
            buf,
            "{} {:<5} {} {}",
            buf.timestamp_millis(),
            level_style.value(record.level()),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    // Tests and embedders may already own the logger.
    let _ = builder.try_init();
}
