// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow, sync::Once};

use crate::{ANSI_COLORS_DISABLED_ENV_VAR, FancyTextSwitch, MarkupError, Style,
            constants::DEFAULT_LEAD, env_opt_out_is_set, find_markup_segments};

/// `tracing` target for notices about usage that is discouraged and may go away.
/// Silence these by suppressing this target.
pub const FUTURE_WARNING_TARGET: &str = "fancy_console::future_warning";

/// The result of resolving a markup string. Both forms are always computed together so
/// that history can keep the `raw` form while the terminal shows the `decorated` one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLine {
    /// Escape sequences injected around each segment's payload.
    pub decorated: String,
    /// Markup stripped, no styling.
    pub raw: String,
}

/// Resolves markup into [`RenderedLine`]s, and applies direct styling with
/// [`Self::decorate`].
///
/// Decoration is only produced when [`Self::is_fancy`] is true, ie: the
/// [`FancyTextSwitch`] is on AND the opt out environment variable is absent. The
/// environment is checked every time something is rendered.
///
/// # Example usage:
///
/// ```rust
/// use fancy_console_markup::{FancyTextSwitch, MarkupRenderer};
///
/// let renderer = MarkupRenderer::default().with_switch(FancyTextSwitch::new_local(false));
/// let line = renderer.parse("#{Hello}{red}, #{World}{green}!").unwrap();
/// assert_eq!(line.raw, "Hello, World!");
/// assert_eq!(line.decorated, line.raw);
/// ```
#[derive(Debug, Clone)]
pub struct MarkupRenderer {
    pub switch: FancyTextSwitch,
    pub opt_out_env_var: Cow<'static, str>,
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self {
            switch: FancyTextSwitch::Global,
            opt_out_env_var: Cow::Borrowed(ANSI_COLORS_DISABLED_ENV_VAR),
        }
    }
}

impl MarkupRenderer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_switch(mut self, switch: FancyTextSwitch) -> Self {
        self.switch = switch;
        self
    }

    #[must_use]
    pub fn with_opt_out_env_var(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.opt_out_env_var = name.into();
        self
    }

    #[must_use]
    pub fn is_fancy(&self) -> bool {
        self.switch.is_enabled() && !env_opt_out_is_set(&self.opt_out_env_var)
    }

    /// Resolve markup using the default `#` lead character.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownDirective`] if any segment has a directive token
    /// that isn't a color, highlight or attribute name.
    pub fn parse(&self, text: &str) -> Result<RenderedLine, MarkupError> {
        self.resolve(text, DEFAULT_LEAD)
    }

    /// Resolve markup using a custom lead character. Prefer [`Self::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownDirective`] if any segment has a directive token
    /// that isn't a color, highlight or attribute name.
    pub fn parse_with_lead(
        &self,
        text: &str,
        lead: char,
    ) -> Result<RenderedLine, MarkupError> {
        if lead != DEFAULT_LEAD {
            warn_custom_lead_once(lead);
        }
        self.resolve(text, lead)
    }

    /// Wrap `text` with the escape sequences for `style`. A plain style, or a renderer
    /// that isn't fancy, returns `text` unchanged.
    #[must_use]
    pub fn decorate(&self, text: &str, style: &Style) -> String {
        if style.is_plain() || !self.is_fancy() {
            return text.to_string();
        }
        style.wrap(text)
    }

    fn resolve(&self, text: &str, lead: char) -> Result<RenderedLine, MarkupError> {
        let mut decorated = String::with_capacity(text.len());
        let mut raw = String::with_capacity(text.len());
        let mut last_end = 0;

        for segment in find_markup_segments(text, lead) {
            let style = Style::try_from_tokens(segment.directives.iter().copied())?;

            let gap = &text[last_end..segment.range.start];
            decorated.push_str(gap);
            raw.push_str(gap);

            decorated.push_str(&style.wrap(segment.payload));
            raw.push_str(segment.payload);

            last_end = segment.range.end;
        }

        let tail = &text[last_end..];
        decorated.push_str(tail);
        raw.push_str(tail);

        if !self.is_fancy() {
            decorated.clone_from(&raw);
        }

        Ok(RenderedLine { decorated, raw })
    }
}

fn warn_custom_lead_once(lead: char) {
    static WARNED: Once = Once::new();
    WARNED.call_once(|| {
        // % is Display, ? is Debug.
        tracing::warn!(
            target: FUTURE_WARNING_TARGET,
            message = "custom markup lead character in use, only '#' is supported going forward",
            lead = %lead
        );
    });
}

/// [`MarkupRenderer::parse`] with a renderer bound to the process wide switch.
///
/// # Errors
///
/// Returns [`MarkupError::UnknownDirective`] for an unrecognized directive token.
pub fn parse(text: &str) -> Result<RenderedLine, MarkupError> {
    MarkupRenderer::default().parse(text)
}

/// [`MarkupRenderer::parse_with_lead`] with a renderer bound to the process wide switch.
///
/// # Errors
///
/// Returns [`MarkupError::UnknownDirective`] for an unrecognized directive token.
pub fn parse_with_lead(text: &str, lead: char) -> Result<RenderedLine, MarkupError> {
    MarkupRenderer::default().parse_with_lead(text, lead)
}

/// [`MarkupRenderer::decorate`] with a renderer bound to the process wide switch.
#[must_use]
pub fn decorate(text: &str, style: &Style) -> String {
    MarkupRenderer::default().decorate(text, style)
}

/// Build a markup string (without resolving it), eg: `fancify("hi", &["red", "bold"])`
/// is `#{hi}{red}{bold}`.
#[must_use]
pub fn fancify(payload: &str, directives: &[&str]) -> String {
    let mut acc = format!("{DEFAULT_LEAD}{{{payload}}}");
    for directive in directives {
        acc.push('{');
        acc.push_str(directive);
        acc.push('}');
    }
    acc
}
