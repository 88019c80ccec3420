// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Grammar for a markup segment, where `LEAD` defaults to `#`:
//!
//! ```text
//! segment := LEAD group+
//! group   := '{' content '}'
//! content := any char except new line, followed by any chars except '}' and new line
//! ```
//!
//! The first group is the literal payload, and the remaining groups are directive
//! tokens, eg: `#{Hello}{red}{bold}`. Note that the first character of `content` may
//! itself be a `}`, so `#{}{red}` is a single group whose content is `}{red`.
//!
//! Segments never nest. [`find_markup_segments`] scans the text left to right and
//! collects non overlapping segments. A lead character that doesn't start a valid
//! segment is just text.

use std::ops::Range;

use nom::{IResult, Parser,
          bytes::complete::take_till,
          character::complete::{char, satisfy},
          combinator::recognize,
          multi::many1,
          sequence::{delimited, preceded}};
use smallvec::SmallVec;

pub mod constants {
    pub const DEFAULT_LEAD: char = '#';
    pub const OPEN_BRACE: char = '{';
    pub const CLOSE_BRACE: char = '}';
    pub const NEW_LINE: char = '\n';
}
use constants::{CLOSE_BRACE, NEW_LINE, OPEN_BRACE};

pub type InlineVecTokens<'a> = SmallVec<[&'a str; 4]>;

/// One `LEAD{payload}{directive}...` run found in some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSegment<'a> {
    /// Byte range of the whole segment (lead included) in the scanned text.
    pub range: Range<usize>,
    pub payload: &'a str,
    pub directives: InlineVecTokens<'a>,
}

/// Parses one `{...}` group and returns its content.
///
/// # Errors
///
/// Returns a nom parsing error if the input doesn't start with a well formed group.
pub fn parse_brace_group(input: &str) -> IResult<&str, &str> {
    delimited(
        char(OPEN_BRACE),
        recognize((
            satisfy(|c: char| c != NEW_LINE),
            take_till(|c: char| c == CLOSE_BRACE || c == NEW_LINE),
        )),
        char(CLOSE_BRACE),
    )
    .parse(input)
}

/// Parses `lead` followed by one or more brace groups, returning the content of every
/// group in order.
///
/// # Errors
///
/// Returns a nom parsing error if the input doesn't start with `lead`, or `lead` isn't
/// followed by at least one group.
pub fn parse_markup_segment(input: &str, lead: char) -> IResult<&str, Vec<&str>> {
    preceded(char(lead), many1(parse_brace_group)).parse(input)
}

#[must_use]
pub fn find_markup_segments(text: &str, lead: char) -> Vec<MarkupSegment<'_>> {
    let mut acc = vec![];
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(lead) {
        let start = cursor + offset;
        match parse_markup_segment(&text[start..], lead) {
            Ok((remainder, groups)) => {
                let end = text.len() - remainder.len();
                if let Some((payload, directives)) = groups.split_first() {
                    acc.push(MarkupSegment {
                        range: start..end,
                        payload,
                        directives: directives.iter().copied().collect(),
                    });
                }
                cursor = end;
            }
            Err(_) => cursor = start + lead.len_utf8(),
        }
    }

    acc
}
