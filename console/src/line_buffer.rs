// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A bounded history of raw (undecorated) lines. Capacity is fixed at construction.
//! Adding to a full buffer evicts the oldest line. A capacity of 0 keeps nothing.

use std::collections::{VecDeque, vec_deque};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBuffer {
    capacity: usize,
    lines: VecDeque<String>,
}

impl LineBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    #[must_use]
    pub fn len(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Insert the newest line, evicting the oldest one if the buffer is full.
    pub fn add(&mut self, line: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            if let Some(evicted) = self.lines.pop_front() {
                tracing::debug!(
                    message = "line buffer full, evicting oldest line",
                    capacity = self.capacity,
                    evicted = %evicted
                );
            }
        }
        self.lines.push_back(line.into());
    }

    pub fn clear(&mut self) { self.lines.clear(); }

    /// Oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, String> { self.lines.iter() }

    #[must_use]
    pub fn lines(&self) -> Vec<String> { self.lines.iter().cloned().collect() }

    #[must_use]
    pub fn joined(&self, separator: &str) -> String {
        let mut acc = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                acc.push_str(separator);
            }
            acc.push_str(line);
        }
        acc
    }
}

impl<'a> IntoIterator for &'a LineBuffer {
    type Item = &'a String;
    type IntoIter = vec_deque::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
