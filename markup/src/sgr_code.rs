// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::{Attribute, Color, Highlight};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Foreground(Color),
    Background(Highlight),
    Attribute(Attribute),
}

pub mod sgr_code_impl {
    use super::{Display, Formatter, Result, SgrCode};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl SgrCode {
        #[must_use]
        pub fn code(&self) -> u8 {
            match *self {
                SgrCode::Reset => 0,
                SgrCode::Foreground(color) => color.fg_code(),
                SgrCode::Background(highlight) => highlight.color().bg_code(),
                SgrCode::Attribute(attribute) => attribute.code(),
            }
        }
    }

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{CSI}{code}{SGR}", code = self.code())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::SgrCode;
    use crate::{Attribute, Color, Highlight};

    #[test]
    fn reset() {
        assert_eq!(SgrCode::Reset.to_string(), "\x1b[0m");
    }

    #[test]
    fn fg_grey() {
        assert_eq!(SgrCode::Foreground(Color::Grey).to_string(), "\x1b[30m");
    }

    #[test]
    fn fg_white() {
        assert_eq!(SgrCode::Foreground(Color::White).to_string(), "\x1b[37m");
    }

    #[test]
    fn bg_cyan() {
        let sgr_code = SgrCode::Background(Highlight(Color::Cyan));
        assert_eq!(sgr_code.to_string(), "\x1b[46m");
    }

    #[test]
    fn bold() {
        assert_eq!(SgrCode::Attribute(Attribute::Bold).to_string(), "\x1b[1m");
    }

    #[test]
    fn concealed() {
        let sgr_code = SgrCode::Attribute(Attribute::Concealed);
        assert_eq!(sgr_code.to_string(), "\x1b[8m");
    }
}
