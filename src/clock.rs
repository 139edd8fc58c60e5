//! Wall-clock sources for the search budget.
//!
//! The controller only ever asks "how much time has passed", so a clock is
//! a monotonic reading relative to its own origin.

use std::cell::Cell;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Monotonic time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Real time, backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that moves forward by `step` each time it is read.
///
/// The first reading is zero. A search budget of `n * step` therefore runs
/// exactly `n - 1` cycles: one reading marks the start and every cycle is
/// preceded by one check.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    current: Cell<Duration>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            current: Cell::new(Duration::ZERO),
            step,
        }
    }

    /// Number of times the clock has been read so far.
    pub fn readings(&self) -> u32 {
        if self.step.is_zero() {
            return 0;
        }
        (self.current.get().as_nanos() / self.step.as_nanos()) as u32
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Duration {
        let reading = self.current.get();
        self.current.set(reading + self.step);
        reading
    }
}
