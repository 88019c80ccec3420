// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `fancy_console`
//!
//! Line oriented terminal output for command line programs: status lines with prompts,
//! banners and sections, a bounded history of everything printed, and a progress bar
//! that redraws in place.
//!
//! All text goes through the inline markup renderer from [`fancy_console_markup`] (which
//! is re-exported here), so `#{done}{green}{bold}` prints `done` in bold green.
//!
//! ```rust
//! use fancy_console::{Console, ConsoleConfig, FancyTextSwitch, OutputDevice, Style,
//!                     test_fixtures::OutputDeviceExt};
//!
//! let (device, mock) = OutputDevice::new_mock();
//! let config = ConsoleConfig::default()
//!     .with_buffer_size(10)
//!     .with_text_width(20)
//!     .with_fancy_text_switch(FancyTextSwitch::new_local(false));
//! let mut console = Console::new_with_output_device(config, device);
//!
//! console.section("Build").unwrap();
//! console.print_progress((1, 2), Some(10)).unwrap();
//! console.show_status("#{compiled}{green}").unwrap();
//! console.warning("1 warning", &Style::new()).unwrap();
//!
//! assert_eq!(console.buffer_lines().last().unwrap(), "!! 1 warning");
//! assert!(mock.get_copy_of_buffer_as_string().contains(">> compiled\n"));
//! ```
//!
//! # Process wide switches
//!
//! - [`disable_fancy_text`] turns decoration off for every session that uses the
//!   default [`FancyTextSwitch::Global`].
//! - [`disable_logging`] and [`disable_future_warnings`] silence `tracing` targets in
//!   the subscriber installed by [`try_initialize_logging_global`].

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
// Production library code must not use .unwrap() in functions that return Result. Tests
// are allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod console_config;
pub mod console_error;
pub mod console_session;
pub mod line_buffer;
pub mod log;
pub mod miette_setup_global_report_handler;
pub mod output_device;
pub mod progress;
pub mod test_fixtures;

// Re-export.
pub use console_config::*;
pub use console_error::*;
pub use console_session::*;
pub use fancy_console_markup::*;
pub use line_buffer::*;
pub use log::*;
pub use miette_setup_global_report_handler::*;
pub use output_device::*;
pub use progress::*;
