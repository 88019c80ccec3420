// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Instant;

use fancy_console_markup::{Color, MarkupRenderer, RenderedLine, Style, global_fancy_text};

use crate::{BufferSize, Clock, ConsoleConfig, ConsoleError, ConsoleResult, LineBuffer,
            OutputDevice, Progress, SystemClock,
            console_constants::{BANNER_SPLITTER, DEFAULT_BAR_WIDTH, DEFAULT_SPLITTER,
                                INFO_PROMPT, SECTION_MARKER, SUPPLEMENT_MARKER,
                                WARNING_PROMPT},
            format_eta, format_percentage, render_progress_bar};

/// The kind of the most recent operation on a [`Console`]. Only a progress bar leaves the
/// cursor in the middle of a line that the next [`Console::write_line`] has to erase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LastOperation {
    #[default]
    None,
    WriteLine,
    Write,
    PrintProgress,
    ClearLine,
}

/// `\r`, `width` spaces, then `\r` again. Leaves the cursor at the start of a blank
/// line.
#[must_use]
pub fn erase_line_sequence(width: usize) -> String {
    let mut acc = String::with_capacity(width + 2);
    acc.push('\r');
    acc.extend(std::iter::repeat_n(' ', width));
    acc.push('\r');
    acc
}

/// Turn off decoration for every renderer bound to the process wide switch, ie: every
/// [`Console`] created with the default [`ConsoleConfig`]. There is no way to turn it
/// back on (outside of tests).
pub fn disable_fancy_text() {
    global_fancy_text::disable();
    tracing::debug!(message = "fancy text disabled for the rest of the process");
}

/// A line oriented terminal session.
///
/// - Text passed to any operation may contain markup, eg: `#{done}{green}{bold}`, which
///   is resolved before anything is written. A bad directive is reported as an error and
///   nothing is written.
/// - The raw form (markup stripped) of each buffered line is kept in a bounded history,
///   see [`Self::buffer`].
/// - [`Self::print_progress`] redraws a bar in place. The next line written erases it
///   first.
///
/// A session assumes a single writer. Share it between threads behind a mutex.
///
/// ```
/// use fancy_console::{Console, ConsoleConfig, FancyTextSwitch, OutputDevice,
///                     test_fixtures::OutputDeviceExt};
///
/// let (device, mock) = OutputDevice::new_mock();
/// let config = ConsoleConfig::default()
///     .with_buffer_size(2)
///     .with_fancy_text_switch(FancyTextSwitch::new_local(false));
/// let mut console = Console::new_with_output_device(config, device);
///
/// console.show_status("#{ready}{green}").unwrap();
/// assert_eq!(mock.get_copy_of_buffer_as_string(), ">> ready\n");
/// assert_eq!(console.buffer_lines(), vec![">> ready"]);
/// ```
#[derive(Debug)]
pub struct Console {
    output_device: OutputDevice,
    renderer: MarkupRenderer,
    prompt: String,
    text_width: usize,
    default_title: String,
    line_buffer: LineBuffer,
    last_operation: LastOperation,
    progress_start_time: Option<Instant>,
    current_title: Option<String>,
    clock: Box<dyn Clock>,
}

impl Default for Console {
    fn default() -> Self { Self::new(ConsoleConfig::default()) }
}

impl Console {
    /// A session that writes to stdout.
    #[must_use]
    pub fn new(config: ConsoleConfig) -> Self {
        Self::new_with_output_device(config, OutputDevice::new_stdout())
    }

    #[must_use]
    pub fn new_with_output_device(
        config: ConsoleConfig,
        output_device: OutputDevice,
    ) -> Self {
        let ConsoleConfig {
            buffer_size,
            prompt,
            text_width,
            title,
            renderer,
        } = config;

        Self {
            output_device,
            renderer,
            prompt,
            text_width,
            default_title: title,
            line_buffer: LineBuffer::new(buffer_size.as_usize()),
            last_operation: LastOperation::None,
            progress_start_time: None,
            current_title: None,
            clock: Box::new(SystemClock),
        }
    }

    /// A stdout session with the default settings and a history of `buffer_size` lines.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidBufferSize`] if `buffer_size` is negative.
    pub fn try_with_buffer_size(buffer_size: i64) -> ConsoleResult<Self> {
        let buffer_size = BufferSize::try_from(buffer_size)?;
        Ok(Self::new(
            ConsoleConfig::default().with_buffer_size(buffer_size.as_usize()),
        ))
    }

    /// Replace the time source used for progress ETAs.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }
}

/// Line output.
impl Console {
    /// Write `text` followed by a new line, and keep its raw form in the history.
    /// Returns the raw form.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized directive, or if the output device fails.
    pub fn write_line(&mut self, text: &str) -> ConsoleResult<String> {
        self.write_line_with(text, &Style::new(), true)
    }

    /// [`Self::write_line`] with `style` applied to the whole (resolved) line. If
    /// `buffer` is false the line isn't added to the history.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized directive, or if the output device fails.
    pub fn write_line_with(
        &mut self,
        text: &str,
        style: &Style,
        buffer: bool,
    ) -> ConsoleResult<String> {
        let RenderedLine { decorated, raw } = self.renderer.parse(text)?;
        let decorated = self.renderer.decorate(&decorated, style);

        let mut acc = String::with_capacity(decorated.len() + 1);
        if self.last_operation == LastOperation::PrintProgress {
            acc.push_str(&erase_line_sequence(self.text_width));
        }
        acc.push_str(&decorated);
        acc.push('\n');
        self.output_device.write_and_flush(acc.as_bytes())?;

        if buffer {
            self.line_buffer.add(raw.clone());
        }
        self.last_operation = LastOperation::WriteLine;
        Ok(raw)
    }

    /// Write `text` without a new line, eg: to build a line piece by piece. Nothing is
    /// added to the history. A progress bar on the current line is not erased here, it
    /// stays pending so the next [`Self::write_line`] still blanks the line first.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized directive, or if the output device fails.
    pub fn write(&mut self, text: &str, style: &Style) -> ConsoleResult<()> {
        let RenderedLine { decorated, .. } = self.renderer.parse(text)?;
        let decorated = self.renderer.decorate(&decorated, style);
        self.output_device.write_and_flush(decorated.as_bytes())?;
        if self.last_operation != LastOperation::PrintProgress {
            self.last_operation = LastOperation::Write;
        }
        Ok(())
    }

    /// Write `"{prompt} {text}"` using the session's prompt (`>>` by default).
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized directive, or if the output device fails.
    pub fn show_status(&mut self, text: &str) -> ConsoleResult<String> {
        self.show_status_with(text, &Style::new(), None, true)
    }

    /// [`Self::show_status`] with a line `style`, an optional `prompt` that overrides the
    /// session's prompt, and control over the history.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized directive, or if the output device fails.
    pub fn show_status_with(
        &mut self,
        text: &str,
        style: &Style,
        prompt: Option<&str>,
        buffer: bool,
    ) -> ConsoleResult<String> {
        let line = format!("{} {text}", prompt.unwrap_or(&self.prompt));
        self.write_line_with(&line, style, buffer)
    }

    /// Status line with the `::` prompt.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized directive, or if the output device fails.
    pub fn show_info(&mut self, text: &str, style: &Style) -> ConsoleResult<String> {
        self.show_status_with(text, style, Some(INFO_PROMPT), true)
    }

    /// Status line with the `!!` prompt, in red unless `style` has a color of its own.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized directive, or if the output device fails.
    pub fn warning(&mut self, text: &str, style: &Style) -> ConsoleResult<String> {
        let style = match style.color {
            Some(_) => style.clone(),
            None => style.clone().color(Color::Red),
        };
        self.show_status_with(text, &style, Some(WARNING_PROMPT), true)
    }

    /// Status line indented under a previous one, with `level` repetitions of `..` as
    /// the prompt.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidSupplementLevel`] if `level` is 0, otherwise the
    /// same errors as [`Self::write_line`].
    pub fn supplement(
        &mut self,
        text: &str,
        level: usize,
        style: &Style,
    ) -> ConsoleResult<String> {
        if level == 0 {
            return Err(ConsoleError::InvalidSupplementLevel { level });
        }
        let prompt = SUPPLEMENT_MARKER.repeat(level);
        self.show_status_with(text, style, Some(&prompt), true)
    }
}

/// Layout.
impl Console {
    /// Write a line made of `splitter` repeated to fill `width` (the session's text
    /// width by default). The repeat count is based on the raw form of `splitter`, so
    /// markup like `#{-}{red}` doesn't make the line any shorter.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::EmptySplitter`] if the raw form of `splitter` is empty,
    /// otherwise the same errors as [`Self::write_line`].
    pub fn split(
        &mut self,
        splitter: &str,
        width: Option<usize>,
        style: &Style,
    ) -> ConsoleResult<String> {
        let raw_len = self.renderer.parse(splitter)?.raw.chars().count();
        if raw_len == 0 {
            return Err(ConsoleError::EmptySplitter {
                splitter: splitter.to_string(),
            });
        }
        let count = width.unwrap_or(self.text_width) / raw_len;
        self.write_line_with(&splitter.repeat(count), style, true)
    }

    /// Open a banner for `title` (the configured title by default). The title is
    /// remembered for the matching [`Self::end`].
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized directive, or if the output device fails.
    pub fn start(
        &mut self,
        title: Option<&str>,
        width: Option<usize>,
        color: Option<Color>,
    ) -> ConsoleResult<()> {
        let title = title.unwrap_or(&self.default_title).to_string();
        let style = Style::from(color.unwrap_or(Color::Grey));

        self.write_line_with(&format!("|> Start of {title}"), &style, true)?;
        self.split(BANNER_SPLITTER, width, &style)?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "console banner start", title = %title);
        self.current_title = Some(title);
        Ok(())
    }

    /// Close the banner opened by the most recent [`Self::start`]. Without one, the
    /// configured title is used.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized directive, or if the output device fails.
    pub fn end(&mut self, width: Option<usize>, color: Option<Color>) -> ConsoleResult<()> {
        let title = self
            .current_title
            .clone()
            .unwrap_or_else(|| self.default_title.clone());
        let style = Style::from(color.unwrap_or(Color::Grey));

        let line = format!("|> End of {title}");
        // Resolve before the splitter goes out, so a bad title writes nothing.
        self.renderer.parse(&line)?;
        self.split(BANNER_SPLITTER, width, &style)?;
        self.write_line_with(&line, &style, true)?;

        tracing::debug!(message = "console banner end", title = %title);
        Ok(())
    }

    /// A `∷ title` line between two splitter lines.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized directive, or if the output device fails.
    pub fn section(&mut self, title: &str) -> ConsoleResult<()> {
        let line = format!("{SECTION_MARKER} {title}");
        self.renderer.parse(&line)?;
        let plain = Style::new();
        self.split(DEFAULT_SPLITTER, None, &plain)?;
        self.write_line(&line)?;
        self.split(DEFAULT_SPLITTER, None, &plain)?;
        Ok(())
    }
}

/// In place output.
impl Console {
    /// Redraw the progress bar on the current line. `bar_width` defaults to 65.
    ///
    /// The tail is an ETA once a timer is running, otherwise a percentage. The timer is
    /// (re)started by `Progress::Steps { index: 0, .. }`.
    ///
    /// ```
    /// use fancy_console::{Console, ConsoleConfig, OutputDevice,
    ///                     test_fixtures::OutputDeviceExt};
    ///
    /// let (device, mock) = OutputDevice::new_mock();
    /// let config = ConsoleConfig::default().with_text_width(4);
    /// let mut console = Console::new_with_output_device(config, device);
    ///
    /// console.print_progress(0.5, Some(4)).unwrap();
    /// assert_eq!(mock.get_copy_of_buffer_as_string(), "\r    \r[==>  ] 50%");
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::ZeroProgressTotal`] or [`ConsoleError::InvalidProgressFraction`]
    ///   if the completion can't be computed.
    /// - [`ConsoleError::Io`] if the output device fails.
    pub fn print_progress(
        &mut self,
        progress: impl Into<Progress>,
        bar_width: Option<usize>,
    ) -> ConsoleResult<()> {
        let progress: Progress = progress.into();
        let fraction = progress.fraction()?;

        let now = self.clock.now();
        if progress.starts_sequence() {
            self.progress_start_time = Some(now);
        }
        let tail = match self.progress_start_time {
            Some(start_time) => {
                format_eta(now.saturating_duration_since(start_time), fraction)
            }
            None => format_percentage(fraction),
        };
        let bar_width = bar_width.unwrap_or(DEFAULT_BAR_WIDTH);
        let bar = render_progress_bar(fraction, bar_width, &tail);

        let mut acc = erase_line_sequence(self.text_width);
        acc.push_str(&bar);
        self.output_device.write_and_flush(acc.as_bytes())?;

        tracing::trace!(message = "progress redraw", fraction, tail = %tail);
        self.last_operation = LastOperation::PrintProgress;
        Ok(())
    }

    /// Blank the current line and return the cursor to its start. `width` defaults to
    /// the session's text width.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] if the output device fails.
    pub fn clear_line(&mut self, width: Option<usize>) -> ConsoleResult<()> {
        let sequence = erase_line_sequence(width.unwrap_or(self.text_width));
        self.output_device.write_and_flush(sequence.as_bytes())?;
        self.last_operation = LastOperation::ClearLine;
        Ok(())
    }
}

/// Accessors.
impl Console {
    #[must_use]
    pub fn buffer(&self) -> &LineBuffer { &self.line_buffer }

    /// Raw lines in the history, oldest first.
    #[must_use]
    pub fn buffer_lines(&self) -> Vec<String> { self.line_buffer.lines() }

    /// Raw lines in the history joined with new lines.
    #[must_use]
    pub fn buffer_string(&self) -> String { self.line_buffer.joined("\n") }

    #[must_use]
    pub fn buffer_size(&self) -> BufferSize { BufferSize(self.line_buffer.capacity()) }

    #[must_use]
    pub fn last_operation(&self) -> LastOperation { self.last_operation }

    #[must_use]
    pub fn current_title(&self) -> Option<&str> { self.current_title.as_deref() }

    #[must_use]
    pub fn text_width(&self) -> usize { self.text_width }

    #[must_use]
    pub fn renderer(&self) -> &MarkupRenderer { &self.renderer }

    #[must_use]
    pub fn output_device(&self) -> &OutputDevice { &self.output_device }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use fancy_console_markup::{Attribute, FancyTextSwitch};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::{ManualClock, OutputDeviceExt, StdoutMock};

    const UNSET_ENV_VAR: &str = "FANCY_CONSOLE_SESSION_TEST_UNSET_VAR";

    fn console_with(fancy: bool, buffer_size: usize) -> (Console, StdoutMock) {
        let (device, mock) = OutputDevice::new_mock();
        let renderer = MarkupRenderer::default()
            .with_switch(FancyTextSwitch::new_local(fancy))
            .with_opt_out_env_var(UNSET_ENV_VAR);
        let config = ConsoleConfig::default()
            .with_buffer_size(buffer_size)
            .with_text_width(10)
            .with_renderer(renderer);
        (Console::new_with_output_device(config, device), mock)
    }

    #[test]
    fn test_write_line_returns_raw_and_buffers_it() {
        let (mut console, mock) = console_with(true, 5);
        let raw = console.write_line("#{Hello}{red}, World").unwrap();
        assert_eq!(raw, "Hello, World");
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            "\x1b[31mHello\x1b[0m, World\n"
        );
        assert_eq!(console.buffer_lines(), vec!["Hello, World"]);
        assert_eq!(console.last_operation(), LastOperation::WriteLine);
    }

    #[test]
    fn test_write_line_with_style_and_no_buffer() {
        let (mut console, mock) = console_with(true, 5);
        let raw = console
            .write_line_with("note", &Style::from(Attribute::Underline), false)
            .unwrap();
        assert_eq!(raw, "note");
        assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b[4mnote\x1b[0m\n");
        assert!(console.buffer().is_empty());
    }

    #[test]
    fn test_write_has_no_new_line_and_no_history() {
        let (mut console, mock) = console_with(false, 5);
        console.write("a", &Style::new()).unwrap();
        console.write("#{b}{blue}", &Style::from(Color::Red)).unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "ab");
        assert!(console.buffer().is_empty());
        assert_eq!(console.last_operation(), LastOperation::Write);
    }

    #[test]
    fn test_write_after_progress_does_not_erase() {
        let (mut console, mock) = console_with(false, 0);
        console.print_progress(0.0, Some(2)).unwrap();
        mock.clear();
        console.write("x", &Style::new()).unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "x");
        assert_eq!(console.last_operation(), LastOperation::PrintProgress);
    }

    #[test]
    fn test_write_line_after_progress_and_write_still_erases() {
        let (mut console, mock) = console_with(false, 1);
        console.print_progress(0.5, Some(2)).unwrap();
        console.write("x", &Style::new()).unwrap();
        mock.clear();

        console.write_line("done").unwrap();
        let erase = erase_line_sequence(10);
        assert_eq!(mock.get_copy_of_buffer_as_string(), format!("{erase}done\n"));
        assert_eq!(console.buffer_lines(), vec!["done"]);
    }

    #[test]
    fn test_status_variants() {
        let (mut console, mock) = console_with(false, 10);
        assert_eq!(console.show_status("ready").unwrap(), ">> ready");
        assert_eq!(
            console
                .show_status_with("custom", &Style::new(), Some("$"), true)
                .unwrap(),
            "$ custom"
        );
        assert_eq!(console.show_info("fyi", &Style::new()).unwrap(), ":: fyi");
        assert_eq!(console.warning("careful", &Style::new()).unwrap(), "!! careful");
        assert_eq!(
            console.supplement("detail", 2, &Style::new()).unwrap(),
            ".... detail"
        );
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            ">> ready\n$ custom\n:: fyi\n!! careful\n.... detail\n"
        );
        assert_eq!(console.buffer().len(), 5);
    }

    #[test]
    fn test_warning_is_red_unless_overridden() {
        let (mut console, mock) = console_with(true, 0);
        console.warning("a", &Style::new()).unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b[31m!! a\x1b[0m\n");

        mock.clear();
        console.warning("b", &Style::from(Color::Yellow)).unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b[33m!! b\x1b[0m\n");
    }

    #[test]
    fn test_supplement_level_zero_is_an_error() {
        let (mut console, mock) = console_with(false, 3);
        let result = console.supplement("x", 0, &Style::new());
        assert!(matches!(
            result,
            Err(ConsoleError::InvalidSupplementLevel { level: 0 })
        ));
        assert!(mock.get_copy_of_buffer().is_empty());
    }

    #[test]
    fn test_split_uses_raw_splitter_length() {
        let (mut console, mock) = console_with(true, 3);
        assert_eq!(console.split("-", None, &Style::new()).unwrap(), "-".repeat(10));
        assert_eq!(console.split("-=", Some(7), &Style::new()).unwrap(), "-=-=-=");
        assert_eq!(
            console.split("#{-}{red}", Some(10), &Style::new()).unwrap(),
            "-".repeat(10)
        );
        let lines = mock.get_copy_of_buffer_as_string_strip_ansi();
        assert_eq!(lines, "----------\n-=-=-=\n----------\n");
    }

    #[test]
    fn test_split_with_empty_splitter_is_an_error() {
        let (mut console, mock) = console_with(false, 3);
        assert!(matches!(
            console.split("", None, &Style::new()),
            Err(ConsoleError::EmptySplitter { .. })
        ));
        assert!(matches!(
            console.split("#{-}{purple}", None, &Style::new()),
            Err(ConsoleError::Markup(_))
        ));
        assert!(mock.get_copy_of_buffer().is_empty());
        assert!(console.buffer().is_empty());
    }

    #[test]
    fn test_banner_uses_title_from_start() {
        let (mut console, mock) = console_with(false, 10);
        console.start(Some("Job"), Some(4), None).unwrap();
        console.show_status("working").unwrap();
        console.end(Some(4), None).unwrap();
        assert_eq!(console.current_title(), Some("Job"));
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            "|> Start of Job\n====\n>> working\n====\n|> End of Job\n"
        );
    }

    #[test]
    fn test_banner_default_title_and_color() {
        let (mut console, mock) = console_with(true, 0);
        console.end(Some(2), Some(Color::Cyan)).unwrap();
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            "\x1b[36m==\x1b[0m\n\x1b[36m|> End of Program\x1b[0m\n"
        );

        mock.clear();
        console.start(None, Some(2), None).unwrap();
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            "\x1b[30m|> Start of Program\x1b[0m\n\x1b[30m==\x1b[0m\n"
        );
    }

    #[test]
    fn test_section_with_bad_markup_writes_nothing() {
        let (mut console, mock) = console_with(false, 5);
        assert!(console.section("#{x}{purple}").is_err());
        assert!(mock.get_copy_of_buffer().is_empty());
        assert!(console.buffer().is_empty());
    }

    #[test]
    fn test_section() {
        let (mut console, mock) = console_with(false, 0);
        console.section("Setup").unwrap();
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            "----------\n∷ Setup\n----------\n"
        );
    }

    #[test]
    fn test_progress_percentage_and_erase() {
        let (mut console, mock) = console_with(false, 2);
        console.print_progress((1, 4), Some(4)).unwrap();
        assert_eq!(console.last_operation(), LastOperation::PrintProgress);
        console.write_line("done").unwrap();

        let erase = erase_line_sequence(10);
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            format!("{erase}[=>   ] 25%{erase}done\n")
        );
        // The bar itself is never part of the history.
        assert_eq!(console.buffer_lines(), vec!["done"]);
    }

    #[test]
    fn test_progress_eta_with_manual_clock() {
        let clock = ManualClock::new();
        let (console, mock) = console_with(false, 0);
        let mut console = console.with_clock(clock.clone());

        console.print_progress((0, 4), Some(4)).unwrap();
        clock.advance(Duration::from_secs(10));
        mock.clear();
        console.print_progress((2, 4), Some(4)).unwrap();
        assert!(mock.get_copy_of_buffer_as_string().ends_with("[==>  ] ETA: 10s"));

        // Restart the timer.
        console.print_progress((0, 4), Some(4)).unwrap();
        clock.advance(Duration::from_secs(1));
        mock.clear();
        console.print_progress((1, 4), Some(4)).unwrap();
        assert!(mock.get_copy_of_buffer_as_string().ends_with("[=>   ] ETA: 3s"));
    }

    #[test]
    fn test_progress_errors_write_nothing() {
        let (mut console, mock) = console_with(false, 0);
        assert!(matches!(
            console.print_progress((1, 0), None),
            Err(ConsoleError::ZeroProgressTotal)
        ));
        assert!(mock.get_copy_of_buffer().is_empty());
        assert_eq!(console.last_operation(), LastOperation::None);
    }

    #[test]
    fn test_clear_line() {
        let (mut console, mock) = console_with(false, 0);
        console.clear_line(Some(3)).unwrap();
        console.clear_line(None).unwrap();
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            format!("\r   \r{}", erase_line_sequence(10))
        );
        assert_eq!(console.last_operation(), LastOperation::ClearLine);
    }

    #[test]
    fn test_buffer_accessors() {
        let (mut console, _mock) = console_with(false, 2);
        for line in ["a", "b", "c"] {
            console.write_line(line).unwrap();
        }
        assert_eq!(console.buffer_size(), BufferSize(2));
        assert_eq!(console.buffer_lines(), vec!["b", "c"]);
        assert_eq!(console.buffer_string(), "b\nc");
    }

    #[test]
    fn test_try_with_buffer_size() {
        assert!(matches!(
            Console::try_with_buffer_size(-3),
            Err(ConsoleError::InvalidBufferSize { value: -3 })
        ));
        let console = Console::try_with_buffer_size(4).unwrap();
        assert_eq!(console.buffer_size(), BufferSize(4));
        assert!(!console.output_device().is_mock);
    }
}
