// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Progress bar rendering for [`crate::Console::print_progress`].
//!
//! A bar `bar_width` wide looks like this (with `bar_width = 10`, 40% done, no timer):
//!
//! ```text
//! [====>      ] 40%
//! ```
//!
//! With a running timer the tail is an estimate of the time left, eg: `ETA: 12s`.

use std::{fmt::Debug,
          time::{Duration, Instant}};

use crate::{ConsoleError, ConsoleResult};

pub mod progress_constants {
    /// Floor for the fraction when estimating time left, so 0% never divides by zero.
    pub const MIN_FRACTION_FOR_ETA: f64 = 1e-7;
    pub const FILL_CHAR: char = '=';
    pub const HEAD_CHAR: char = '>';
    pub const EMPTY_CHAR: char = ' ';
}
use progress_constants::{EMPTY_CHAR, FILL_CHAR, HEAD_CHAR, MIN_FRACTION_FOR_ETA};

/// How far along some work is.
///
/// ```
/// use fancy_console::Progress;
///
/// assert_eq!(Progress::from(0.25).fraction().unwrap(), 0.25);
/// assert_eq!(Progress::from((3, 4)).fraction().unwrap(), 0.75);
/// assert_eq!(Progress::from(1.5).fraction().unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    Fraction(f64),
    Steps { index: usize, total: usize },
}

impl From<f64> for Progress {
    fn from(fraction: f64) -> Self { Self::Fraction(fraction) }
}

impl From<(usize, usize)> for Progress {
    fn from((index, total): (usize, usize)) -> Self { Self::Steps { index, total } }
}

impl Progress {
    /// Build from optional parts. An explicit `progress` wins over `index` and `total`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingProgressInput`] if `progress` is absent and
    /// either of `index` or `total` is absent too.
    pub fn try_from_parts(
        index: Option<usize>,
        total: Option<usize>,
        progress: Option<f64>,
    ) -> ConsoleResult<Self> {
        match (progress, index, total) {
            (Some(fraction), _, _) => Ok(Self::Fraction(fraction)),
            (None, Some(index), Some(total)) => Ok(Self::Steps { index, total }),
            _ => Err(ConsoleError::MissingProgressInput),
        }
    }

    /// Completion, clamped to `[0.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::ZeroProgressTotal`] for `Steps` with a `total` of 0.
    /// - [`ConsoleError::InvalidProgressFraction`] for a NaN fraction.
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> ConsoleResult<f64> {
        let it = match *self {
            Self::Fraction(value) => value,
            Self::Steps { total: 0, .. } => return Err(ConsoleError::ZeroProgressTotal),
            Self::Steps { index, total } => index as f64 / total as f64,
        };
        if it.is_nan() {
            return Err(ConsoleError::InvalidProgressFraction { value: it });
        }
        Ok(it.clamp(0.0, 1.0))
    }

    /// The first step of a sequence (re)starts the session's ETA timer.
    #[must_use]
    pub fn starts_sequence(&self) -> bool { matches!(self, Self::Steps { index: 0, .. }) }
}

/// Source of "now" for ETA estimates. Tests inject
/// [`crate::test_fixtures::ManualClock`].
pub trait Clock: Debug + Send {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant { Instant::now() }
}

/// `fraction` is expected to already be clamped, see [`Progress::fraction`].
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(fraction: f64, bar_width: usize, tail: &str) -> String {
    let filled = ((fraction * bar_width as f64).floor() as usize).min(bar_width);
    let empty = bar_width - filled;
    let head = if (fraction - 1.0).abs() < f64::EPSILON {
        FILL_CHAR
    } else {
        HEAD_CHAR
    };

    let mut acc = String::with_capacity(bar_width + 3 + tail.len() + 2);
    acc.push('[');
    acc.extend(std::iter::repeat_n(FILL_CHAR, filled));
    acc.push(head);
    acc.extend(std::iter::repeat_n(EMPTY_CHAR, empty));
    acc.push_str("] ");
    acc.push_str(tail);
    acc
}

/// Time left, assuming the rest of the work goes at the pace seen so far.
#[must_use]
pub fn format_eta(elapsed: Duration, fraction: f64) -> String {
    let eta = elapsed.as_secs_f64() / fraction.max(MIN_FRACTION_FOR_ETA) * (1.0 - fraction);
    format!("ETA: {eta:.0}s")
}

#[must_use]
pub fn format_percentage(fraction: f64) -> String { format!("{:.0}%", 100.0 * fraction) }
