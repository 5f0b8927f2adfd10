//! Second-button emulation: a single-touch press/hold/release state machine.
//!
//! Panels of this family report one contact and no physical buttons, so the
//! driver synthesizes them: contact is the primary button, and a press that
//! stays put long enough is re-reported as the secondary button. The radius
//! and pause thresholds jointly debounce accidental drift so it is not taken
//! for a new gesture.

use std::time::Duration;

use crate::config::Hold;
use crate::sink::Button;

/// Button activity derived from one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
  /// Nothing changed.
  None,
  /// A button went down.
  Press(Button),
  /// A button came up.
  Release(Button),
  /// A stable press matured: release the primary, then press the secondary.
  Promote,
}

/// Tracks which logical button is down and where and when contact began.
///
/// At most one button is down at a time; the secondary supersedes the
/// primary when a promotion fires. Coordinates fed in are the final ones
/// (after Y inversion), so the recorded origin matches what the host saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldEmulator {
  down: Option<Button>,
  origin_x: u16,
  origin_y: u16,
  since: Duration,
}

impl HoldEmulator {
  pub const fn new() -> Self {
    Self { down: None, origin_x: 0, origin_y: 0, since: Duration::ZERO }
  }

  /// Which button is currently reported as down, if any.
  pub const fn held(&self) -> Option<Button> {
    self.down
  }

  /// Forget any in-flight press. Used at session teardown; no release event
  /// is synthesized for a press discarded this way.
  pub fn reset(&mut self) {
    *self = Self::new();
  }

  /// Feed one sample and report what the host must be told.
  ///
  /// Promotion requires the sample to sit strictly inside `hold.radius` of
  /// the press origin with at least `hold.pause` elapsed since press-down.
  /// The check runs per sample: a drifted touch merely keeps waiting, and
  /// the origin and timer are never rebased while the press lasts.
  pub fn feed(&mut self, hold: &Hold, touching: bool, x: u16, y: u16, now: Duration) -> Activity {
    match (touching, self.down) {
      (false, None) => Activity::None,

      (false, Some(button)) => {
        self.down = None;
        self.since = Duration::ZERO;
        Activity::Release(button)
      }

      (true, None) => {
        self.down = Some(Button::Primary);
        self.origin_x = x;
        self.origin_y = y;
        self.since = now;
        Activity::Press(Button::Primary)
      }

      (true, Some(Button::Primary)) => {
        let stable = x.abs_diff(self.origin_x) < hold.radius && y.abs_diff(self.origin_y) < hold.radius;
        if stable && now.saturating_sub(self.since) >= hold.pause {
          self.down = Some(Button::Secondary);
          Activity::Promote
        } else {
          Activity::None
        }
      }

      (true, Some(Button::Secondary)) => Activity::None,
    }
  }
}

impl Default for HoldEmulator {
  fn default() -> Self {
    Self::new()
  }
}
