//! Monotonic time source for aging a press.

use std::time::{Duration, Instant};

/// Monotonic clock consulted by the hold timer.
///
/// Readings are durations since an arbitrary fixed origin and only ever move
/// forward, so wall-clock adjustments cannot stretch or shrink a hold.
pub trait Clock {
  /// Time elapsed since the clock's origin.
  fn now(&mut self) -> Duration;
}

/// System monotonic clock, anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct Monotonic(Instant);

impl Default for Monotonic {
  fn default() -> Self {
    Self(Instant::now())
  }
}

impl Clock for Monotonic {
  fn now(&mut self) -> Duration {
    self.0.elapsed()
  }
}
