// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures for driving a [`crate::Console`] deterministically from tests: a capturing
//! output sink and a clock that only moves when told to.

// Attach sources.
pub mod manual_clock;
pub mod output_device_ext;
pub mod stdout_mock;

// Re-export.
pub use manual_clock::*;
pub use output_device_ext::*;
pub use stdout_mock::*;
