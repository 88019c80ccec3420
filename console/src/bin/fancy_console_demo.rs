// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Walk through everything a [`Console`] can do. Run with `--help` to see the options.

use std::{thread, time::Duration};

use clap::{Args, Parser, ValueEnum};
use fancy_console::{Attribute, BufferSize, Color, Console, ConsoleConfig,
                    DisplayPreference, Progress, Style, TracingConfig, disable_fancy_text,
                    disable_future_warnings, disable_logging, fancify,
                    setup_default_miette_global_report_handler,
                    try_initialize_logging_global};
use tracing_core::LevelFilter;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

#[derive(Debug, Parser)]
#[command(name = "fancy_console_demo", version, about = "🎨 Tour of the fancy console")]
pub struct CLIArg {
    #[command(flatten)]
    pub global_options: GlobalOption,

    #[command(flatten)]
    pub demo_options: DemoOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        long,
        short = 'l',
        value_enum,
        default_value_t = LogLevel::Off,
        help = "Log to stderr at this level"
    )]
    pub log_level: LogLevel,

    #[arg(long, short = 'n', help = "Print plain text, without any escape sequences")]
    pub no_fancy: bool,

    #[arg(long, help = "Also show notices about discouraged usage (eg: custom lead)")]
    pub future_warnings: bool,
}

#[derive(Debug, Args)]
pub struct DemoOption {
    #[arg(
        long,
        short = 'b',
        default_value_t = 100,
        allow_negative_numbers = true,
        help = "Number of printed lines to keep in the history"
    )]
    pub buffer_size: i64,

    #[arg(long, short = 'w', help = "Text width, defaults to the terminal width")]
    pub width: Option<usize>,

    #[arg(long, default_value_t = 20, help = "Number of progress bar steps")]
    pub steps: usize,

    #[arg(long, default_value_t = 50, help = "Delay between progress steps")]
    pub step_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(it: LogLevel) -> Self {
        match it {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    let cli_arg = CLIArg::parse();

    try_initialize_logging_global(TracingConfig::new(
        cli_arg.global_options.log_level.into(),
        DisplayPreference::Stderr,
    ))?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    if !cli_arg.global_options.future_warnings {
        disable_future_warnings();
    }
    if cli_arg.global_options.no_fancy {
        disable_fancy_text();
    }

    // Eviction notices are noisy once the history is full.
    disable_logging("fancy_console::line_buffer");

    let mut console = create_console(&cli_arg.demo_options)?;
    run_demo(&mut console, &cli_arg.demo_options)?;

    tracing::debug!(message = "Stop logging...");
    Ok(())
}

fn create_console(demo_options: &DemoOption) -> miette::Result<Console> {
    let buffer_size = BufferSize::try_from(demo_options.buffer_size)?;
    let config = ConsoleConfig::default()
        .with_buffer_size(buffer_size.as_usize())
        .with_title("fancy_console_demo");
    let config = match demo_options.width {
        Some(width) => config.with_text_width(width),
        None => config.with_terminal_width(),
    };
    Ok(Console::new(config))
}

fn run_demo(console: &mut Console, demo_options: &DemoOption) -> miette::Result<()> {
    console.start(None, None, Some(Color::Cyan))?;

    console.section("Markup")?;
    console.write_line("#{Hello}{red}, #{World}{green}!")?;
    console.write_line("#{Highlights}{white}{on_blue} and #{attributes}{bold}{underline}")?;
    console.write_line_with("A whole line in yellow", &Style::from(Color::Yellow), true)?;
    console.write("Built ", &Style::new())?;
    console.write("piece ", &Style::from(Attribute::Dark))?;
    console.write_line("by #{piece}{magenta}")?;
    console.write_line(&format!("{} by fancify", fancify("Markup", &["green", "bold"])))?;

    console.section("Status lines")?;
    console.show_status("Status with the default prompt")?;
    console.show_status_with("Status with a custom prompt", &Style::new(), Some("$"), true)?;
    console.show_info("Something worth knowing", &Style::new())?;
    console.supplement("A detail about it", 1, &Style::new())?;
    console.supplement("A detail about the detail", 2, &Style::from(Color::Grey))?;
    console.warning("Something went sideways", &Style::new())?;

    console.section("Progress")?;
    let delay = Duration::from_millis(demo_options.step_delay_ms);
    let total = demo_options.steps.max(1);
    for index in 0..=total {
        console.print_progress(Progress::Steps { index, total }, None)?;
        thread::sleep(delay);
    }
    console.show_status("#{Done}{green}{bold}")?;
    console.print_progress(0.42, Some(20))?;
    thread::sleep(delay);
    console.clear_line(None)?;
    console.split("#{-=}{blue}", None, &Style::new())?;

    console.section("History")?;
    let history = console.buffer_string();
    let summary = format!(
        "{} of {} lines kept, the last few were:",
        console.buffer().len(),
        console.buffer_size().as_usize()
    );
    console.show_info(&summary, &Style::new())?;
    for line in history.lines().rev().take(3) {
        console.supplement(line, 1, &Style::new())?;
    }

    console.end(None, Some(Color::Cyan))?;
    Ok(())
}
