// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::{Arc,
                 atomic::{AtomicBool, Ordering}}};

/// When this environment variable is present (its value is ignored), no escape
/// sequences are produced, regardless of the fancy text switch.
pub const ANSI_COLORS_DISABLED_ENV_VAR: &str = "ANSI_COLORS_DISABLED";

/// Process wide fancy text switch. Turning it off affects every live
/// [`crate::MarkupRenderer`] that uses [`FancyTextSwitch::Global`], at the same time.
///
/// # Testing support
///
/// The [serial_test](https://crates.io/crates/serial_test) crate is used to test code
/// that calls [`disable`] or [`enable`]. In any test in which they are called, please use
/// the `#[serial]` attribute to annotate that test. Otherwise there will be flakiness in
/// the test results (tests are run in parallel using many threads).
pub mod global_fancy_text {
    use super::{AtomicBool, Ordering};

    static FANCY_TEXT_GLOBAL: AtomicBool = AtomicBool::new(true);

    pub fn is_enabled() -> bool { FANCY_TEXT_GLOBAL.load(Ordering::SeqCst) }

    pub fn disable() { FANCY_TEXT_GLOBAL.store(false, Ordering::SeqCst); }

    /// Applications are only handed a way to turn fancy text off. This exists so that
    /// tests can put the switch back.
    pub fn enable() { FANCY_TEXT_GLOBAL.store(true, Ordering::SeqCst); }

    /// Restore the initial state (enabled).
    pub fn reset() { enable(); }
}

/// Which fancy text switch a renderer consults.
///
/// - [`FancyTextSwitch::Global`] is the process wide [`global_fancy_text`] switch. This
///   is the default.
/// - [`FancyTextSwitch::Local`] is owned by the renderers that share the [Arc], so tests
///   can flip it without touching any other renderer.
#[derive(Debug, Clone, Default)]
pub enum FancyTextSwitch {
    #[default]
    Global,
    Local(Arc<AtomicBool>),
}

impl FancyTextSwitch {
    #[must_use]
    pub fn new_local(enabled: bool) -> Self { Self::Local(Arc::new(AtomicBool::new(enabled))) }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            FancyTextSwitch::Global => global_fancy_text::is_enabled(),
            FancyTextSwitch::Local(flag) => flag.load(Ordering::SeqCst),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        match self {
            FancyTextSwitch::Global if enabled => global_fancy_text::enable(),
            FancyTextSwitch::Global => global_fancy_text::disable(),
            FancyTextSwitch::Local(flag) => flag.store(enabled, Ordering::SeqCst),
        }
    }
}

/// Only presence is checked, so `VAR=` and `VAR=0` both opt out.
#[must_use]
pub fn env_opt_out_is_set(env_var_name: &str) -> bool { env::var_os(env_var_name).is_some() }
