// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;

use super::TracingConfig;

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Passing [`LevelFilter::OFF`] is a no-op, logging stays disabled.
///
/// # Errors
///
/// Returns an error if a global default subscriber has already been set.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones to
/// different threads.
/// - This is great for tests.
/// - Passing [`LevelFilter::OFF`] is a no-op and returns `None`.
///
/// Logging stops when the returned guard is dropped.
///
/// # Errors
///
/// Returns an error if the layers can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
