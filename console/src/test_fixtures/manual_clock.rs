// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{sync::{Arc, PoisonError},
          time::{Duration, Instant}};

use crate::{Clock, StdMutex};

/// A [`Clock`] that stands still until [`ManualClock::advance`] is called. Clones share
/// the same time, so a test can keep one and hand the other to a
/// [`crate::Console::with_clock`].
#[derive(Clone, Debug)]
pub struct ManualClock {
    pub now: Arc<StdMutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Arc::new(StdMutex::new(Instant::now())),
        }
    }
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant { *self.now.lock().unwrap_or_else(PoisonError::into_inner) }
}
