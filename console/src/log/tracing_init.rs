// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use fancy_console_markup::{ANSI_COLORS_DISABLED_ENV_VAR, env_opt_out_is_set,
                           global_fancy_text};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, filter::filter_fn, registry::LookupSpan};

use super::{DisplayPreference, TracingConfig, is_target_suppressed};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. Events are
/// dropped if they are above `$level_filter` or their target is suppressed, see
/// [`super::disable_logging`].
macro_rules! create_fmt_layer {
    ($writer:expr, $level_filter:expr, $ansi:expr) => {{
        let level_filter: LevelFilter = $level_filter;
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_ansi($ansi)
            .with_writer($writer)
            .with_filter(filter_fn(move |metadata| {
                *metadata.level() <= level_filter
                    && !is_target_suppressed(metadata.target())
            }))
    }};
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers. This does not initialize the tracing system, see
/// [`TracingConfig::install_global`] and [`TracingConfig::install_thread_local`].
///
/// # Errors
///
/// Currently infallible. Kept fallible so that a writer that has to be opened (eg: a
/// file) can be added without changing callers.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter for the whole subscriber as well, so that events above it are
    // rejected before any layer sees them.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    return_it.push(create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_display_preference(),
    ));

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    display_preference: DisplayPreference,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let ansi = global_fancy_text::is_enabled()
        && !env_opt_out_is_set(ANSI_COLORS_DISABLED_ENV_VAR);

    match display_preference {
        DisplayPreference::Stdout => {
            Box::new(create_fmt_layer!(std::io::stdout, level_filter, ansi))
        }
        DisplayPreference::Stderr => {
            Box::new(create_fmt_layer!(std::io::stderr, level_filter, ansi))
        }
        DisplayPreference::OutputDevice(output_device) => {
            // Captured output (eg: in tests) is easier to inspect without escapes.
            let ansi = ansi && !output_device.is_mock;
            let make_writer = move || output_device.clone();
            Box::new(create_fmt_layer!(make_writer, level_filter, ansi))
        }
    }
}
