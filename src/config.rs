//! Session configuration assembled from the host's device options.
//!
//! Values are read once when the session is created; there is no hot-reload.
//! The axis bounds are the only fields that change afterwards, widened in
//! place by calibration for the life of the session.

use std::time::Duration;

/// Inclusive bounds of one axis, in raw panel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
  pub min: u16,
  pub max: u16,
}

impl Range {
  pub const fn new(min: u16, max: u16) -> Self {
    Self { min, max }
  }

  /// Whether `v` already lies inside the range.
  pub const fn contains(self, v: u16) -> bool {
    self.min <= v && v <= self.max
  }

  /// Widen the range so it covers `v`, returning `true` if a bound moved.
  ///
  /// Bounds only ever move outward; an in-range `v` changes nothing.
  pub fn widen_to(&mut self, v: u16) -> bool {
    if v < self.min {
      self.min = v;
      true
    } else if v > self.max {
      self.max = v;
      true
    } else {
      false
    }
  }
}

/// Tuning for press-and-hold promotion to the second button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hold {
  /// Maximum drift from the press origin, in raw panel units, for the press
  /// to still count as stable. A touch must stay strictly inside this radius.
  pub radius: u16,
  /// How long a stable press must last before it is re-reported as the
  /// second button.
  pub pause: Duration,
}

impl Hold {
  pub const fn new(radius: u16, pause: Duration) -> Self {
    Self { radius, pause }
  }
}

impl Default for Hold {
  fn default() -> Self {
    Self::new(5, Duration::from_secs(1))
  }
}

/// Everything a session needs to know about one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Device node delivering raw reports.
  pub device: String,
  /// Observed X axis bounds; widened in place by calibration.
  pub x: Range,
  /// Observed Y axis bounds; widened in place by calibration.
  pub y: Range,
  /// Mirror the Y axis. Most panels of this family count Y from the bottom.
  pub reverse_y: bool,
  /// Second-button emulation tuning.
  pub hold: Hold,
}

impl Config {
  /// Device node probed when the host supplies no `Device` option.
  pub const DEFAULT_DEVICE: &'static str = "/dev/uep0";

  pub fn with_device(mut self, device: impl Into<String>) -> Self {
    self.device = device.into();
    self
  }

  pub fn with_x(mut self, x: Range) -> Self {
    self.x = x;
    self
  }

  pub fn with_y(mut self, y: Range) -> Self {
    self.y = y;
    self
  }

  pub fn with_reverse_y(mut self, reverse_y: bool) -> Self {
    self.reverse_y = reverse_y;
    self
  }

  pub fn with_hold(mut self, hold: Hold) -> Self {
    self.hold = hold;
    self
  }

  /// Build a configuration from the host's option list.
  ///
  /// Recognized keys are `Device`, `MinX`, `MaxX`, `MinY`, `MaxY`,
  /// `ReverseY`, `RightClickEmulArea`, and `RightClickEmulPause` (whole
  /// seconds), matched without regard to ASCII case. Unrecognized keys are
  /// ignored, since the host owns its own generic options. A value that
  /// fails to parse keeps the default for that key and is logged.
  pub fn from_options<'a, I>(options: I) -> Self
  where
    I: IntoIterator<Item = (&'a str, &'a str)>,
  {
    let mut config = Self::default();

    for (key, value) in options {
      if key.eq_ignore_ascii_case("Device") {
        config.device = value.to_owned();
      } else if key.eq_ignore_ascii_case("MinX") {
        set_u16(key, value, &mut config.x.min);
      } else if key.eq_ignore_ascii_case("MaxX") {
        set_u16(key, value, &mut config.x.max);
      } else if key.eq_ignore_ascii_case("MinY") {
        set_u16(key, value, &mut config.y.min);
      } else if key.eq_ignore_ascii_case("MaxY") {
        set_u16(key, value, &mut config.y.max);
      } else if key.eq_ignore_ascii_case("ReverseY") {
        match parse_bool(value) {
          Some(v) => config.reverse_y = v,
          None => log::warn!("option {key}: unrecognized boolean {value:?}, keeping default"),
        }
      } else if key.eq_ignore_ascii_case("RightClickEmulArea") {
        set_u16(key, value, &mut config.hold.radius);
      } else if key.eq_ignore_ascii_case("RightClickEmulPause") {
        match value.parse::<u64>() {
          Ok(secs) => config.hold.pause = Duration::from_secs(secs),
          Err(_) => log::warn!("option {key}: unrecognized integer {value:?}, keeping default"),
        }
      }
    }

    config
  }
}

impl Default for Config {
  /// Defaults are deliberately narrower than any real panel reports;
  /// calibration widens the bounds within the first few samples.
  fn default() -> Self {
    Self {
      device: Self::DEFAULT_DEVICE.to_owned(),
      x: Range::new(500, 1500),
      y: Range::new(500, 1500),
      reverse_y: true,
      hold: Hold::default(),
    }
  }
}

fn set_u16(key: &str, value: &str, slot: &mut u16) {
  match value.parse::<u16>() {
    Ok(v) => *slot = v,
    Err(_) => log::warn!("option {key}: unrecognized integer {value:?}, keeping default"),
  }
}

fn parse_bool(value: &str) -> Option<bool> {
  if ["1", "true", "yes", "on"].iter().any(|v| value.eq_ignore_ascii_case(v)) {
    Some(true)
  } else if ["0", "false", "no", "off"].iter().any(|v| value.eq_ignore_ascii_case(v)) {
    Some(false)
  } else {
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn documented_defaults() {
    let config = Config::default();
    assert_eq!(config.device, "/dev/uep0");
    assert_eq!(config.x, Range::new(500, 1500));
    assert_eq!(config.y, Range::new(500, 1500));
    assert!(config.reverse_y);
    assert_eq!(config.hold, Hold::new(5, Duration::from_secs(1)));
  }

  #[test]
  fn options_override_every_field() {
    let config = Config::from_options([
      ("Device", "/dev/uep1"),
      ("MinX", "100"),
      ("MaxX", "3900"),
      ("MinY", "120"),
      ("MaxY", "3800"),
      ("ReverseY", "off"),
      ("RightClickEmulArea", "12"),
      ("RightClickEmulPause", "3"),
    ]);
    assert_eq!(config.device, "/dev/uep1");
    assert_eq!(config.x, Range::new(100, 3900));
    assert_eq!(config.y, Range::new(120, 3800));
    assert!(!config.reverse_y);
    assert_eq!(config.hold, Hold::new(12, Duration::from_secs(3)));
  }

  #[test]
  fn option_keys_ignore_ascii_case() {
    let config = Config::from_options([("minx", "42"), ("REVERSEY", "no")]);
    assert_eq!(config.x.min, 42);
    assert!(!config.reverse_y);
  }

  #[test]
  fn bad_values_and_unknown_keys_keep_defaults() {
    let config = Config::from_options([
      ("MinX", "not-a-number"),
      ("ReverseY", "maybe"),
      ("RightClickEmulPause", "-1"),
      ("SendCoreEvents", "true"),
    ]);
    assert_eq!(config, Config::default());
  }

  #[test]
  fn ranges_widen_outward_only() {
    let mut range = Range::new(500, 1500);
    assert!(range.widen_to(50));
    assert_eq!(range, Range::new(50, 1500));
    assert!(range.widen_to(2000));
    assert_eq!(range, Range::new(50, 2000));

    // In-range samples never move a bound back inward.
    assert!(!range.widen_to(500));
    assert!(!range.widen_to(50));
    assert!(!range.widen_to(2000));
    assert_eq!(range, Range::new(50, 2000));
  }
}
