// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The three disjoint categories of style directive that can follow the payload group
//! in a markup segment: [`Color`], [`Highlight`] and [`Attribute`].
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::{fmt, str::FromStr};

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::MarkupError;

/// The prefix that turns a [`Color`] token into a [`Highlight`] token, eg: `on_red`.
pub const HIGHLIGHT_PREFIX: &str = "on_";

/// One of the 8 basic ANSI colors. Used as a foreground color directly, and as a
/// background color when wrapped in a [`Highlight`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    EnumIter,
    EnumCount,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    Grey,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Offset of this color in the 8 color palette (grey is 0, white is 7).
    #[must_use]
    pub fn palette_index(self) -> u8 {
        match self {
            Color::Grey => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
        }
    }

    /// SGR foreground code, `30..=37`.
    #[must_use]
    pub fn fg_code(self) -> u8 { 30 + self.palette_index() }

    /// SGR background code, `40..=47`.
    #[must_use]
    pub fn bg_code(self) -> u8 { 40 + self.palette_index() }
}

/// A background color. The token form is the color name with the [`HIGHLIGHT_PREFIX`],
/// eg: `on_cyan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Highlight(pub Color);

impl Highlight {
    #[must_use]
    pub fn color(self) -> Color { self.0 }

    pub fn iter() -> impl Iterator<Item = Highlight> { Color::iter().map(Highlight) }
}

impl From<Color> for Highlight {
    fn from(color: Color) -> Self { Self(color) }
}

impl FromStr for Highlight {
    type Err = strum::ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let color_token = token
            .strip_prefix(HIGHLIGHT_PREFIX)
            .ok_or(strum::ParseError::VariantNotFound)?;
        Color::from_str(color_token).map(Highlight)
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{HIGHLIGHT_PREFIX}{}", self.0)
    }
}

/// Text attributes. SGR code `3` (italic) is not part of this set.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    EnumIter,
    EnumCount,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Attribute {
    Bold,
    Dark,
    Underline,
    Blink,
    Reverse,
    Concealed,
}

impl Attribute {
    #[rustfmt::skip]
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Attribute::Bold      => 1,
            Attribute::Dark      => 2,
            Attribute::Underline => 4,
            Attribute::Blink     => 5,
            Attribute::Reverse   => 7,
            Attribute::Concealed => 8,
        }
    }
}

/// A single resolved style token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Color(Color),
    Highlight(Highlight),
    Attribute(Attribute),
}

impl Directive {
    /// Classify `token` by membership in the color set, then the highlight set, then the
    /// attribute set. The first match wins.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownDirective`] if `token` is in none of the sets.
    pub fn try_from_token(token: &str) -> Result<Self, MarkupError> {
        if let Ok(color) = Color::from_str(token) {
            return Ok(Directive::Color(color));
        }
        if let Ok(highlight) = Highlight::from_str(token) {
            return Ok(Directive::Highlight(highlight));
        }
        if let Ok(attribute) = Attribute::from_str(token) {
            return Ok(Directive::Attribute(attribute));
        }
        Err(MarkupError::UnknownDirective {
            token: token.to_string(),
        })
    }
}

impl FromStr for Directive {
    type Err = MarkupError;

    fn from_str(token: &str) -> Result<Self, Self::Err> { Self::try_from_token(token) }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Color(color) => write!(f, "{color}"),
            Directive::Highlight(highlight) => write!(f, "{highlight}"),
            Directive::Attribute(attribute) => write!(f, "{attribute}"),
        }
    }
}

impl From<Color> for Directive {
    fn from(it: Color) -> Self { Directive::Color(it) }
}

impl From<Highlight> for Directive {
    fn from(it: Highlight) -> Self { Directive::Highlight(it) }
}

impl From<Attribute> for Directive {
    fn from(it: Attribute) -> Self { Directive::Attribute(it) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::EnumCount;
    use test_case::test_case;

    use super::*;

    #[test_case("grey", Directive::Color(Color::Grey))]
    #[test_case("white", Directive::Color(Color::White))]
    #[test_case("on_red", Directive::Highlight(Highlight(Color::Red)))]
    #[test_case("on_magenta", Directive::Highlight(Highlight(Color::Magenta)))]
    #[test_case("bold", Directive::Attribute(Attribute::Bold))]
    #[test_case("concealed", Directive::Attribute(Attribute::Concealed))]
    fn classify_known_tokens(token: &str, expected: Directive) {
        assert_eq!(Directive::try_from_token(token).unwrap(), expected);
    }

    #[test_case("purple")]
    #[test_case("Red")]
    #[test_case("on_")]
    #[test_case("on_bold")]
    #[test_case("italic")]
    #[test_case("")]
    fn reject_unknown_tokens(token: &str) {
        assert_eq!(
            Directive::try_from_token(token),
            Err(MarkupError::UnknownDirective {
                token: token.to_string()
            })
        );
    }

    #[test]
    fn sgr_code_ranges() {
        let fg = Color::iter().map(Color::fg_code).collect::<Vec<_>>();
        let bg = Color::iter().map(Color::bg_code).collect::<Vec<_>>();
        assert_eq!(fg, (30..=37).collect::<Vec<u8>>());
        assert_eq!(bg, (40..=47).collect::<Vec<u8>>());

        let attrs = Attribute::iter().map(Attribute::code).collect::<Vec<_>>();
        assert_eq!(attrs, vec![1, 2, 4, 5, 7, 8]);
    }

    #[test]
    fn token_display_round_trips() {
        assert_eq!(Color::COUNT, 8);
        for highlight in Highlight::iter() {
            let token = highlight.to_string();
            assert!(token.starts_with(HIGHLIGHT_PREFIX));
            assert_eq!(Highlight::from_str(&token).unwrap(), highlight);
        }
        assert_eq!(Directive::from(Attribute::Underline).to_string(), "underline");
    }
}
