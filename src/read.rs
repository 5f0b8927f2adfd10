//! The read path: drain queued reports, calibrate, and post events.
//!
//! Everything here runs inside the host's readable callback, on the host's
//! thread. One callback drains every complete report currently queued, so
//! event order within a callback is exactly packet arrival order.

use crate::clock::Clock;
use crate::hold::Activity;
use crate::packet::Packet;
use crate::port::{ReadError, TouchPort};
use crate::sink::{AxisRegistry, Button, EventSink};
use crate::{Egalax, Error};

impl<P, E, S, C> Egalax<P, S, C>
where
  P: TouchPort<Error = E>,
  E: std::error::Error,
  S: EventSink + AxisRegistry,
  C: Clock,
{
  /// Drain every report currently readable and post the resulting events.
  ///
  /// Hosts call this whenever the device node becomes readable. The loop
  /// exits as soon as the node has nothing queued; it never blocks. A short
  /// read logs a warning and abandons the rest of this callback's work;
  /// the next callback is assumed to start on a report boundary again, as
  /// the wire format has no framing byte to resynchronize on.
  ///
  /// Returns [`Error::Disconnected`] if the panel vanished mid-drain; the
  /// session has already closed the node and gone offline by the time the
  /// error reaches the host. Other read failures are logged and absorbed,
  /// and the session stays online. Calling this on an offline session is a
  /// no-op.
  pub fn handle_readable(&mut self) -> Result<(), Error<E>> {
    let mut raw = [0u8; Packet::LEN];

    while self.online && self.port.poll_readable() {
      let n = match self.port.read(&mut raw) {
        Ok(n) => n,
        Err(ReadError::WouldBlock) => return Ok(()),
        Err(ReadError::Gone) => {
          log::error!("{}: device disappeared", self.config.device);
          self.go_offline();
          return Err(Error::Disconnected);
        }
        Err(ReadError::Other(e)) => {
          log::error!("{}: read error: {e}", self.config.device);
          return Ok(());
        }
      };

      match Packet::decode(&raw[..n]) {
        Ok(packet) => self.process(packet),
        Err(e) => {
          log::warn!("{}: {e}", self.config.device);
          return Ok(());
        }
      }
    }

    Ok(())
  }

  /// Run one decoded report through calibration, inversion, and emulation.
  fn process(&mut self, packet: Packet) {
    let x = packet.x;
    let mut y = packet.y;

    // Calibration looks at raw coordinates, before any inversion.
    if !(self.config.x.contains(x) && self.config.y.contains(y)) {
      self.recalibrate(x, y);
    }

    if self.config.reverse_y {
      y = self.config.y.max - y + self.config.y.min;
    }

    // Motion goes out unconditionally; button activity layers on top.
    self.sink.post_motion(true, x, y);

    let now = self.clock.now();
    match self.emulator.feed(&self.config.hold, packet.touching(), x, y, now) {
      Activity::None => {}
      Activity::Press(button) => self.sink.post_button(button, true, x, y),
      Activity::Release(button) => self.sink.post_button(button, false, x, y),
      Activity::Promote => {
        self.sink.post_button(Button::Primary, false, x, y);
        self.sink.post_button(Button::Secondary, true, x, y);
      }
    }
  }

  /// Widen the observed bounds to cover an out-of-range sample and tell the
  /// host about the panel's new geometry.
  fn recalibrate(&mut self, x: u16, y: u16) {
    self.config.x.widen_to(x);
    self.config.y.widen_to(y);
    self.register_axes();
    log::warn!(
      "{}: adjusted calibration MinX={}, MaxX={}, MinY={}, MaxY={}",
      self.config.device,
      self.config.x.min,
      self.config.x.max,
      self.config.y.min,
      self.config.y.max
    );
  }
}
