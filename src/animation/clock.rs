use std::{cell::Cell, time::Instant};

/// Monotonic time source in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall-clock time since construction, offset by a starting value.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
    start_ms: f64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::starting_at(0.0)
    }

    pub fn starting_at(ms: f64) -> Self {
        Self {
            origin: Instant::now(),
            start_ms: ms,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start_ms + self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock advanced by hand; used for offline frame sequences and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn starting_at(ms: f64) -> Self {
        Self { now: Cell::new(ms) }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    /// Move forward by `ms`; time never runs backwards.
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms.max(0.0));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
