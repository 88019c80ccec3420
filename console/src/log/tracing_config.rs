// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{self, Debug};

use miette::IntoDiagnostic;
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::try_create_layers;
use crate::OutputDevice;

/// Configure where log events go, and the most verbose level that is let through.
///
/// Instead of taking lots of arguments, [`super::try_initialize_logging_global`] and
/// [`super::try_initialize_logging_thread_local`] take anything that is
/// [`Into<TracingConfig>`]:
///
/// ```no_run
/// use fancy_console::{DisplayPreference, TracingConfig};
///
/// let config_1: TracingConfig = tracing::Level::DEBUG.into();
/// let config_2: TracingConfig = tracing_core::LevelFilter::INFO.into();
/// let config_3: TracingConfig = DisplayPreference::Stdout.into();
/// let config_4 = TracingConfig::new(tracing_core::LevelFilter::WARN, DisplayPreference::Stderr);
/// ```
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub display_preference: DisplayPreference,
}

/// Log lines are written to stderr by default, so that they don't get mixed into the
/// [`crate::Console`] output on stdout.
#[derive(Clone, Default)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
    OutputDevice(OutputDevice),
}

impl Debug for DisplayPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayPreference::Stdout => write!(f, "Stdout"),
            DisplayPreference::Stderr => write!(f, "Stderr"),
            DisplayPreference::OutputDevice(_) => write!(f, "OutputDevice"),
        }
    }
}

pub mod tracing_config_options {
    use super::{DisplayPreference, LevelFilter, TracingConfig};

    pub const DEFAULT_LEVEL_FILTER: LevelFilter = LevelFilter::DEBUG;

    impl Default for TracingConfig {
        fn default() -> Self {
            Self {
                level_filter: DEFAULT_LEVEL_FILTER,
                display_preference: DisplayPreference::default(),
            }
        }
    }

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                ..Default::default()
            }
        }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                ..Default::default()
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(display_preference: DisplayPreference) -> Self {
            Self {
                display_preference,
                ..Default::default()
            }
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new(level_filter: LevelFilter, display_preference: DisplayPreference) -> Self {
        Self {
            level_filter,
            display_preference,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_display_preference(&self) -> DisplayPreference {
        self.display_preference.clone()
    }

    /// Set the process wide default subscriber. This can only succeed once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if a global default subscriber has already been set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Set the default subscriber for the current thread, until the returned guard is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the layers can't be created.
    pub fn install_thread_local(self) -> miette::Result<DefaultGuard> {
        let layers = try_create_layers(self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_impls() {
        let config: TracingConfig = tracing::Level::INFO.into();
        assert_eq!(config.get_level_filter(), LevelFilter::INFO);
        assert!(matches!(config.display_preference, DisplayPreference::Stderr));

        let config: TracingConfig = LevelFilter::TRACE.into();
        assert_eq!(config.get_level_filter(), LevelFilter::TRACE);

        let config: TracingConfig = DisplayPreference::Stdout.into();
        assert_eq!(config.get_level_filter(), LevelFilter::DEBUG);
        assert_eq!(format!("{:?}", config.get_display_preference()), "Stdout");
    }
}
