// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging for a program that uses [`crate::Console`]. Everything here is built on
//! [tracing](https://docs.rs/tracing) and
//! [tracing-subscriber](https://docs.rs/tracing-subscriber).
//!
//! Logging is **DISABLED** by **default**. Call [`try_initialize_logging_global`] (apps)
//! or [`try_initialize_logging_thread_local`] (tests) to turn it on.
//!
//! Noisy targets can be silenced at any time, before or after logging is initialized,
//! with [`disable_logging`] and [`disable_future_warnings`].

// Attach sources.
pub mod log_suppression;
pub mod public_api;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_suppression::*;
pub use public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
