// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use fancy_console_markup::{FancyTextSwitch, MarkupRenderer};

use crate::ConsoleError;

pub mod console_constants {
    pub const DEFAULT_PROMPT: &str = ">>";
    pub const INFO_PROMPT: &str = "::";
    pub const WARNING_PROMPT: &str = "!!";
    pub const SUPPLEMENT_MARKER: &str = "..";
    pub const SECTION_MARKER: &str = "∷";
    pub const DEFAULT_SPLITTER: &str = "-";
    pub const BANNER_SPLITTER: &str = "=";
    pub const DEFAULT_TITLE: &str = "Program";
    /// Width used for line clearing, splitters and banners.
    pub const DEFAULT_TEXT_WIDTH: usize = 79;
    pub const DEFAULT_BAR_WIDTH: usize = 65;
    pub const DEFAULT_BUFFER_SIZE: usize = 0;
}
use console_constants::{DEFAULT_BUFFER_SIZE, DEFAULT_PROMPT, DEFAULT_TEXT_WIDTH,
                        DEFAULT_TITLE};

/// Number of raw lines kept in a session's history. 0 means no history at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferSize(pub usize);

impl BufferSize {
    #[must_use]
    pub fn as_usize(self) -> usize { self.0 }
}

impl From<usize> for BufferSize {
    fn from(it: usize) -> Self { Self(it) }
}

impl TryFrom<i64> for BufferSize {
    type Error = ConsoleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(BufferSize)
            .map_err(|_| ConsoleError::InvalidBufferSize { value })
    }
}

/// Construction time settings for a [`crate::Console`].
///
/// ```
/// use fancy_console::{ConsoleConfig, FancyTextSwitch};
///
/// let config = ConsoleConfig::default()
///     .with_buffer_size(20)
///     .with_prompt("$")
///     .with_fancy_text_switch(FancyTextSwitch::new_local(false));
/// assert_eq!(config.buffer_size.as_usize(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub buffer_size: BufferSize,
    /// Prompt used by [`crate::Console::show_status`].
    pub prompt: String,
    pub text_width: usize,
    /// Title used by [`crate::Console::start`] when none is given.
    pub title: String,
    pub renderer: MarkupRenderer,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            buffer_size: BufferSize(DEFAULT_BUFFER_SIZE),
            prompt: DEFAULT_PROMPT.to_string(),
            text_width: DEFAULT_TEXT_WIDTH,
            title: DEFAULT_TITLE.to_string(),
            renderer: MarkupRenderer::default(),
        }
    }
}

impl ConsoleConfig {
    #[must_use]
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = BufferSize(buffer_size);
        self
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn with_text_width(mut self, text_width: usize) -> Self {
        self.text_width = text_width;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: MarkupRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    #[must_use]
    pub fn with_fancy_text_switch(mut self, switch: FancyTextSwitch) -> Self {
        self.renderer.switch = switch;
        self
    }

    /// Size `text_width` to the terminal, leaving the last column empty. Keeps the
    /// current width if the terminal size can't be queried (eg: output is piped).
    #[must_use]
    pub fn with_terminal_width(mut self) -> Self {
        match crossterm::terminal::size() {
            Ok((columns, _rows)) if columns > 1 => {
                self.text_width = usize::from(columns) - 1;
            }
            _ => {
                tracing::debug!(
                    message = "terminal size unavailable, keeping text width",
                    text_width = self.text_width
                );
            }
        }
        self
    }
}
