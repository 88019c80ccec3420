// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashSet,
          sync::{LazyLock, PoisonError, RwLock}};

use fancy_console_markup::FUTURE_WARNING_TARGET;

/// Separator between the segments of a `tracing` target, eg: `hyper::client`.
pub const TARGET_SEPARATOR: &str = "::";

/// Targets whose events are dropped by every layer created in
/// [`super::try_create_layers`].
///
/// # Testing support
///
/// Tests that call [`disable_logging`] or [`enable_logging`] must be annotated with
/// `#[serial]`, since this set is shared by the whole process.
static SUPPRESSED_TARGETS: LazyLock<RwLock<HashSet<String>>> =
    LazyLock::new(|| RwLock::new(HashSet::new()));

/// Suppress the events of the `name` target and all of its children (`name::*`), eg:
/// `disable_logging("hyper")` also silences `hyper::client::pool`.
pub fn disable_logging(name: &str) {
    let was_added = SUPPRESSED_TARGETS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name.to_string());
    if was_added {
        // % is Display, ? is Debug.
        tracing::debug!(message = "logging disabled for target", target_name = %name);
    }
}

/// Undo [`disable_logging`] for exactly `name`.
pub fn enable_logging(name: &str) {
    SUPPRESSED_TARGETS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(name);
}

/// Silence the notices emitted on [`FUTURE_WARNING_TARGET`] about usage that may go
/// away, eg: a custom markup lead character.
pub fn disable_future_warnings() { disable_logging(FUTURE_WARNING_TARGET); }

#[must_use]
pub fn is_target_suppressed(target: &str) -> bool {
    let suppressed = SUPPRESSED_TARGETS
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    if suppressed.is_empty() {
        return false;
    }
    suppressed.iter().any(|name| target_matches(target, name))
}

/// Clears every suppressed target.
pub fn reset_log_suppression() {
    SUPPRESSED_TARGETS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

fn target_matches(target: &str, name: &str) -> bool {
    match target.strip_prefix(name) {
        Some(rest) => rest.is_empty() || rest.starts_with(TARGET_SEPARATOR),
        None => false,
    }
}
