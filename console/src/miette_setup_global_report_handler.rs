// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pretty printing for the [`crate::ConsoleError`] (and any other
//! [miette](https://docs.rs/miette) diagnostic) that makes it out of `main() ->
//! miette::Result<_>`.
//!
//! The hook is lazy, so the terminal width is only measured when a report is actually
//! displayed.

use miette::MietteHandlerOpts;

pub const DEFAULT_REPORT_WIDTH: u16 = 80;

/// Install a graphical report handler sized to the terminal, with `issues_url` in the
/// footer. Only the first call in a process has any effect.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    let result = miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_REPORT_WIDTH, |(columns, _rows)| columns);
            tracing::debug!(message = "miette::set_hook", terminal_width = it);
            usize::from(it)
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }));

    if result.is_err() {
        tracing::debug!(message = "miette report handler already installed");
    }
}
