// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::{Attribute, Color, Directive, Highlight, MarkupError, SgrCode};

pub mod sizing {
    use super::{Attribute, SmallVec};

    /// There are only 6 attributes, and duplicates are never stored, so this never
    /// spills to the heap.
    pub const MAX_STYLE_ATTRIB_SIZE: usize = 6;
    pub type InlineVecAttributes = SmallVec<[Attribute; MAX_STYLE_ATTRIB_SIZE]>;
}

/// The styling applied to one markup segment, or to a whole line.
///
/// - `color` and `highlight` hold at most one value each. Applying another one
///   overwrites the previous value (last wins).
/// - `attributes` is an insertion ordered set. Applying an attribute that is already
///   present is a no-op.
///
/// # Example usage:
///
/// ```rust
/// use fancy_console_markup::{Attribute, Color, Style};
///
/// let style = Style::new().color(Color::Red).attribute(Attribute::Bold);
/// assert_eq!(style.wrap("hi"), "\x1b[31m\x1b[1mhi\x1b[0m");
/// assert_eq!(Style::new().wrap("hi"), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub color: Option<Color>,
    pub highlight: Option<Highlight>,
    pub attributes: sizing::InlineVecAttributes,
}

impl Style {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn highlight(mut self, highlight: impl Into<Highlight>) -> Self {
        self.highlight = Some(highlight.into());
        self
    }

    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.push_attribute(attribute);
        self
    }

    #[must_use]
    pub fn attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        for attribute in attributes {
            self.push_attribute(attribute);
        }
        self
    }

    pub fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::Color(color) => self.color = Some(color),
            Directive::Highlight(highlight) => self.highlight = Some(highlight),
            Directive::Attribute(attribute) => self.push_attribute(attribute),
        }
    }

    /// Resolve a sequence of directive tokens, left to right.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownDirective`] for the first token that is not a
    /// color, highlight or attribute name.
    pub fn try_from_tokens<'a>(
        tokens: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, MarkupError> {
        let mut style = Style::new();
        for token in tokens {
            style.apply(Directive::try_from_token(token)?);
        }
        Ok(style)
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.color.is_none() && self.highlight.is_none() && self.attributes.is_empty()
    }

    /// Wrap `text` in escape sequences, unconditionally. Attributes are the innermost
    /// wrapping (in the order they were added), then the highlight, then the color as
    /// the outermost one. A single reset follows the text. A plain style returns `text`
    /// untouched, without a reset.
    #[must_use]
    pub fn wrap(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }

        let mut acc = String::with_capacity(text.len() + 8 * (self.attributes.len() + 3));
        // Writing to a String can't fail.
        if let Some(color) = self.color {
            let _ = write!(acc, "{}", SgrCode::Foreground(color));
        }
        if let Some(highlight) = self.highlight {
            let _ = write!(acc, "{}", SgrCode::Background(highlight));
        }
        for attribute in self.attributes.iter().rev() {
            let _ = write!(acc, "{}", SgrCode::Attribute(*attribute));
        }
        acc.push_str(text);
        let _ = write!(acc, "{}", SgrCode::Reset);
        acc
    }

    fn push_attribute(&mut self, attribute: Attribute) {
        if !self.attributes.contains(&attribute) {
            self.attributes.push(attribute);
        }
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self { Style::new().color(color) }
}

impl From<Highlight> for Style {
    fn from(highlight: Highlight) -> Self { Style::new().highlight(highlight) }
}

impl From<Attribute> for Style {
    fn from(attribute: Attribute) -> Self { Style::new().attribute(attribute) }
}
