// SPDX-License-Identifier: MPL-2.0
use iced_pager::app::{self, Flags};
use iced_pager::config::paths;
use iced_pager::domain::slider::DeviceClass;
use iced_pager::{logging, media};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: iced_pager [OPTIONS] IDENTIFIER...

Drag horizontally through a sequence of images.

Arguments:
  IDENTIFIER...        Image file paths or http(s) URLs, in page order.
                       A single directory expands to the images it contains.

Options:
  --config-dir DIR     Read settings.toml from DIR
  --compact            Force the compact (320x200) surface
  --standard           Force the standard (640x400) surface
  -h, --help           Print this help
";

fn main() -> ExitCode {
    logging::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => return usage_error(&err.to_string()),
    };
    let compact = args.contains("--compact");
    let standard = args.contains("--standard");
    let device = match (compact, standard) {
        (true, true) => return usage_error("--compact and --standard are mutually exclusive"),
        (true, false) => Some(DeviceClass::Compact),
        (false, true) => Some(DeviceClass::Standard),
        (false, false) => None,
    };

    let arguments: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();
    if let Some(flag) = arguments.iter().find(|arg| arg.starts_with("--")) {
        return usage_error(&format!("unknown option {flag}"));
    }

    let identifiers = match media::expand_arguments(arguments) {
        Ok(identifiers) => identifiers,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if identifiers.is_empty() {
        return usage_error("no images given");
    }

    paths::init_cli_override(config_dir);

    let flags = Flags {
        identifiers,
        device,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn usage_error(reason: &str) -> ExitCode {
    eprintln!("error: {reason}\n\n{USAGE}");
    ExitCode::from(2)
}
