// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drive whole sessions through the public API, capturing output with a mock device.

use fancy_console::{Color, Console, ConsoleConfig, ConsoleError, FancyTextSwitch,
                    LastOperation, MarkupError, MarkupRenderer, OutputDevice, Progress,
                    Style, erase_line_sequence, fancify, global_fancy_text, parse,
                    test_fixtures::{OutputDeviceExt, StdoutMock}};
use pretty_assertions::assert_eq;
use serial_test::serial;

const UNSET_ENV_VAR: &str = "FANCY_CONSOLE_INTEGRATION_TEST_UNSET_VAR";

fn create_console(
    fancy: bool,
    buffer_size: usize,
    text_width: usize,
) -> (Console, StdoutMock) {
    let (device, mock) = OutputDevice::new_mock();
    let renderer = MarkupRenderer::default()
        .with_switch(FancyTextSwitch::new_local(fancy))
        .with_opt_out_env_var(UNSET_ENV_VAR);
    let config = ConsoleConfig::default()
        .with_buffer_size(buffer_size)
        .with_text_width(text_width)
        .with_renderer(renderer);
    (Console::new_with_output_device(config, device), mock)
}

#[test]
fn test_history_keeps_most_recent_lines() {
    let (mut console, _mock) = create_console(false, 2, 79);
    for line in ["a", "b", "c"] {
        console.write_line(line).unwrap();
    }
    assert_eq!(console.buffer_lines(), vec!["b", "c"]);
}

#[test]
fn test_zero_buffer_size_keeps_nothing() {
    let (mut console, mock) = create_console(false, 0, 79);
    for index in 0..50 {
        console.write_line(&format!("line {index}")).unwrap();
    }
    assert!(console.buffer().is_empty());
    assert_eq!(console.buffer_string(), "");
    assert_eq!(mock.get_copy_of_buffer_as_string().lines().count(), 50);
}

#[test]
fn test_show_status_default_prompt() {
    let (mut console, mock) = create_console(true, 1, 79);
    assert_eq!(console.show_status("ready").unwrap(), ">> ready");
    assert_eq!(mock.get_copy_of_buffer_as_string(), ">> ready\n");
}

#[test]
fn test_progress_line_is_erased_before_next_line() {
    let (mut console, mock) = create_console(false, 5, 30);
    console.print_progress(0.5, Some(10)).unwrap();
    console.write_line("done").unwrap();

    let erase = erase_line_sequence(30);
    let output = mock.get_copy_of_buffer_as_string();
    assert_eq!(output, format!("{erase}[=====>     ] 50%{erase}done\n"));
    assert_eq!(console.buffer_lines(), vec!["done"]);
    assert_eq!(console.last_operation(), LastOperation::WriteLine);
}

#[test]
fn test_progress_is_clamped() {
    let (mut over, over_mock) = create_console(false, 0, 79);
    let (mut full, full_mock) = create_console(false, 0, 79);
    over.print_progress(1.5, None).unwrap();
    full.print_progress(1.0, None).unwrap();

    let it = over_mock.get_copy_of_buffer_as_string();
    assert_eq!(it, full_mock.get_copy_of_buffer_as_string());
    assert!(it.ends_with(&format!("[{}] 100%", "=".repeat(66))));
}

#[test]
fn test_progress_from_optional_parts() {
    let (mut console, mock) = create_console(false, 0, 4);
    let progress = Progress::try_from_parts(Some(3), Some(4), None).unwrap();
    console.print_progress(progress, Some(4)).unwrap();
    assert!(mock.get_copy_of_buffer_as_string().ends_with("[===> ] 75%"));

    assert!(matches!(
        Progress::try_from_parts(Some(3), None, None),
        Err(ConsoleError::MissingProgressInput)
    ));
}

#[test]
fn test_split_width_ignores_markup() {
    let (mut console, mock) = create_console(true, 0, 79);
    console.split("-", Some(10), &Style::new()).unwrap();
    console.split("#{-}{red}", Some(10), &Style::new()).unwrap();

    let plain = mock.get_copy_of_buffer_as_string_strip_ansi();
    assert_eq!(plain, format!("{0}\n{0}\n", "-".repeat(10)));

    // Every styled dash is wrapped on its own.
    let styled = mock.get_copy_of_buffer_as_string();
    assert_eq!(styled.matches("\x1b[31m-\x1b[0m").count(), 10);
}

#[test]
fn test_unknown_directive_writes_nothing() {
    let (mut console, mock) = create_console(true, 3, 79);
    console.write_line("before").unwrap();
    mock.clear();

    let result = console.write_line("#{x}{purple}");
    assert!(matches!(
        result,
        Err(ConsoleError::Markup(MarkupError::UnknownDirective { ref token })) if token == "purple"
    ));
    assert!(mock.get_copy_of_buffer().is_empty());
    assert_eq!(console.buffer_lines(), vec!["before"]);

    assert!(console.show_status("#{y}{on_purple}").is_err());
    assert!(console.write("#{z}{bolder}", &Style::new()).is_err());
    assert!(mock.get_copy_of_buffer().is_empty());
}

#[test]
fn test_fancify_output_resolves_in_a_session() {
    let markup = fancify("hi", &["red", "bold"]);
    assert_eq!(markup, "#{hi}{red}{bold}");

    let (mut console, mock) = create_console(true, 1, 79);
    assert_eq!(console.write_line(&markup).unwrap(), "hi");
    assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b[31m\x1b[1mhi\x1b[0m\n");
}

#[test]
fn test_full_session_transcript() {
    let (mut console, mock) = create_console(false, 100, 8);
    console.start(Some("Build"), None, Some(Color::Green)).unwrap();
    console.section("Compile").unwrap();
    console.show_info("3 crates", &Style::new()).unwrap();
    console.supplement("markup", 1, &Style::new()).unwrap();
    console.print_progress((2, 2), Some(4)).unwrap();
    console.warning("slow", &Style::new()).unwrap();
    console.end(None, None).unwrap();

    assert_eq!(
        console.buffer_string(),
        [
            "|> Start of Build",
            "========",
            "--------",
            "∷ Compile",
            "--------",
            ":: 3 crates",
            ".. markup",
            "!! slow",
            "========",
            "|> End of Build",
        ]
        .join("\n")
    );
    let plain = mock.get_copy_of_buffer_as_string();
    assert!(plain.contains(&format!("{}!! slow\n", erase_line_sequence(8))));
}

/// The global switch is shared by every session created with the default config.
#[test]
#[serial]
fn test_disable_fancy_text_affects_default_sessions() {
    global_fancy_text::reset();
    let (device, mock) = OutputDevice::new_mock();
    let config = ConsoleConfig::default().with_renderer(
        MarkupRenderer::default().with_opt_out_env_var(UNSET_ENV_VAR),
    );
    let mut console = Console::new_with_output_device(config, device);

    console.write_line("#{a}{red}").unwrap();
    fancy_console::disable_fancy_text();
    console.write_line("#{b}{red}").unwrap();
    assert_eq!(parse("#{c}{red}").unwrap().decorated, "c");
    global_fancy_text::reset();

    assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b[31ma\x1b[0m\nb\n");
}
