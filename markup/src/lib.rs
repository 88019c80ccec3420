// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `fancy_console_markup`
//!
//! A small inline markup language for styling terminal text, and the renderer that turns
//! it into 8 color ANSI escape sequences.
//!
//! A markup segment is a lead character (`#`) followed by one or more `{...}` groups.
//! The first group is the text to show, every other group is a style directive:
//!
//! ```text
//! #{Hello}{red}, #{World}{green}{bold}!
//! ```
//!
//! | Category    | Tokens                                                     | SGR codes      |
//! | :---------- | :--------------------------------------------------------- | :------------- |
//! | [`Color`]     | `grey` `red` `green` `yellow` `blue` `magenta` `cyan` `white` | `30..=37`      |
//! | [`Highlight`] | `on_grey` .. `on_white`                                     | `40..=47`      |
//! | [`Attribute`] | `bold` `dark` `underline` `blink` `reverse` `concealed`      | `1 2 4 5 7 8`  |
//!
//! Resolving a string always produces a pair: the `decorated` form (with escape
//! sequences) and the `raw` form (markup stripped). See [`RenderedLine`].
//!
//! # Turning decoration off
//!
//! - [`global_fancy_text::disable`] turns it off for the whole process, for every
//!   [`MarkupRenderer`] that uses [`FancyTextSwitch::Global`] (the default).
//! - Setting the [`ANSI_COLORS_DISABLED_ENV_VAR`] environment variable (any value) also
//!   turns it off. This is checked at render time.
//! - Tests can hand a renderer its own [`FancyTextSwitch::Local`] switch.
//!
//! # Example
//!
//! ```rust
//! use fancy_console_markup::{FancyTextSwitch, MarkupRenderer, fancify};
//!
//! let renderer = MarkupRenderer::default().with_switch(FancyTextSwitch::new_local(true));
//! let markup = format!("{} is ready", fancify("server", &["green", "bold"]));
//! assert_eq!(markup, "#{server}{green}{bold} is ready");
//!
//! let line = renderer.parse(&markup).unwrap();
//! assert_eq!(line.raw, "server is ready");
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
// Production library code must not use .unwrap() in functions that return Result. Tests
// are allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod directives;
pub mod fancy_text;
pub mod markup_error;
pub mod markup_parser;
pub mod render;
pub mod sgr_code;
pub mod style;

// Re-export.
pub use directives::*;
pub use fancy_text::*;
pub use markup_error::*;
pub use markup_parser::*;
pub use render::*;
pub use sgr_code::*;
pub use style::*;
