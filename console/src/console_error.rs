// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use fancy_console_markup::MarkupError;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Errors surfaced by [`crate::Console`] operations. Every one of them is raised before
/// anything is written to the output device, except for [`ConsoleError::Io`] which comes
/// from the output device itself.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConsoleError {
    #[error("Invalid buffer size: {value}")]
    #[diagnostic(
        code(fancy_console::invalid_buffer_size),
        help("The buffer size must be 0 (no history) or a positive number of lines")
    )]
    InvalidBufferSize { value: i64 },

    #[error("Invalid supplement level: {level}")]
    #[diagnostic(
        code(fancy_console::invalid_supplement_level),
        help("The supplement level must be 1 or more")
    )]
    InvalidSupplementLevel { level: usize },

    #[error("Progress can't be determined")]
    #[diagnostic(
        code(fancy_console::missing_progress_input),
        help("Provide either a progress fraction, or both an index and a total")
    )]
    MissingProgressInput,

    #[error("Progress total is 0")]
    #[diagnostic(
        code(fancy_console::zero_progress_total),
        help("The total number of steps must be 1 or more")
    )]
    ZeroProgressTotal,

    #[error("Invalid progress fraction: {value}")]
    #[diagnostic(code(fancy_console::invalid_progress_fraction))]
    InvalidProgressFraction { value: f64 },

    #[error("Splitter '{splitter}' has no visible characters")]
    #[diagnostic(
        code(fancy_console::empty_splitter),
        help("Use a splitter with at least one character of text, eg: '-' or '='")
    )]
    EmptySplitter { splitter: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Markup(#[from] MarkupError),

    #[error("Could not write to the output device")]
    #[diagnostic(code(fancy_console::io))]
    Io(#[from] std::io::Error),
}
