//! Session lifecycle: probe, enable, disable, teardown.
//!
//! The host drives these from its device-control path. Enabling and
//! disabling may alternate any number of times over a session's life, and
//! both are idempotent; teardown is terminal only in the sense that the
//! host stops calling, as the session itself keeps no destructor state.

use crate::clock::Clock;
use crate::packet::Packet;
use crate::port::TouchPort;
use crate::sink::{Axis, AxisRegistry, EventSink};
use crate::{Egalax, Error};

impl<P, E, S, C> Egalax<P, S, C>
where
  P: TouchPort<Error = E>,
  E: std::error::Error,
  S: EventSink + AxisRegistry,
  C: Clock,
{
  /// Verify the configured device node can be opened, then release it.
  ///
  /// Hosts call this once at registration time, before any enable, so a
  /// misconfigured device path fails fast instead of at first use.
  pub fn probe(&mut self) -> Result<(), Error<E>> {
    self.port.open(&self.config.device).map_err(Error::Port)?;
    self.port.close();
    Ok(())
  }

  /// Open the device and start delivering events.
  ///
  /// Bytes queued on the node while the session was off are discarded so
  /// stale reports never replay as input, and both axis ranges are
  /// registered with the host. Enabling an online session is a no-op.
  pub fn enable(&mut self) -> Result<(), Error<E>> {
    if self.online {
      return Ok(());
    }

    if let Err(e) = self.port.open(&self.config.device) {
      log::error!("{}: cannot open device: {e}", self.config.device);
      return Err(Error::Port(e));
    }

    self.drain_stale();
    self.register_axes();
    self.online = true;
    log::info!("{}: on", self.config.device);
    Ok(())
  }

  /// Stop delivering events and close the device node.
  ///
  /// Safe to call between any two drain iterations; disabling an offline
  /// session is a no-op.
  pub fn disable(&mut self) {
    if !self.online {
      return;
    }
    self.go_offline();
    log::info!("{}: off", self.config.device);
  }

  /// Disable the session and discard any in-flight gesture state.
  ///
  /// A press that was open at teardown is simply forgotten; no release
  /// event is synthesized for it.
  pub fn teardown(&mut self) {
    self.disable();
    self.emulator.reset();
  }

  /// Declare both axis ranges to the host, at enable time and again after
  /// every calibration widening.
  pub(crate) fn register_axes(&mut self) {
    self.sink.set_axis_range(Axis::X, self.config.x.min, self.config.x.max);
    self.sink.set_axis_range(Axis::Y, self.config.y.min, self.config.y.max);
  }

  pub(crate) fn go_offline(&mut self) {
    self.port.close();
    self.online = false;
  }

  fn drain_stale(&mut self) {
    let mut scratch = [0u8; Packet::LEN];
    while self.port.poll_readable() {
      match self.port.read(&mut scratch) {
        Ok(n) if n > 0 => continue,
        _ => break,
      }
    }
  }
}
