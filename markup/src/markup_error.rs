// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Errors from resolving style markup. Text without any markup never produces one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum MarkupError {
    /// A `{...}` group after the payload is not a color, highlight or attribute name.
    #[error("Unknown style directive: '{token}'")]
    #[diagnostic(
        code(fancy_console_markup::unknown_directive),
        help(
            "Colors: grey, red, green, yellow, blue, magenta, cyan, white. \
             Highlights: on_<color>, eg: on_red. \
             Attributes: bold, dark, underline, blink, reverse, concealed."
        )
    )]
    UnknownDirective { token: String },
}
