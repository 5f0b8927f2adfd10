//! Input driver core for eGalax-family serial touchscreens.
//!
//! Panels of this family push fixed five-byte contact reports through a
//! character device (`/dev/uep0` by default). This crate turns that byte
//! stream into absolute pointer motion and button events for a windowing
//! server's input layer, with helpers for:
//!
//! - Decoding the wire report: a contact flag plus two 14-bit positions
//!   carried in 7-bit byte pairs
//! - Adaptive calibration that widens the advertised axis ranges whenever
//!   the panel reports outside them
//! - Press-and-hold emulation that promotes a stable single touch into a
//!   second (right) button click
//! - Host integration through the small [`TouchPort`], [`EventSink`], and
//!   [`AxisRegistry`] traits, so the driver stays independent of any
//!   particular server
//!
//! The driver owns no file descriptors and spawns no threads: the host opens
//! the device behind a [`TouchPort`], watches it for readability, and calls
//! [`Egalax::handle_readable`] from its main loop. One [`Egalax`] session
//! exists per plugged panel.
//!
//! ```no_run
//! use egalax::{AxisRegistry, Config, Egalax, EventSink, TouchPort};
//!
//! fn wire<P, S>(port: P, sink: S) -> Result<(), egalax::Error<P::Error>>
//! where
//!   P: TouchPort,
//!   S: EventSink + AxisRegistry,
//! {
//!   let config = Config::from_options([("Device", "/dev/uep0"), ("RightClickEmulPause", "2")]);
//!   let mut session = Egalax::new(port, sink, config);
//!   session.probe()?;
//!   session.enable()?;
//!   // ...then, whenever the host main loop sees the node readable:
//!   session.handle_readable()?;
//!   Ok(())
//! }
//! ```

mod clock;
mod config;
mod hold;
mod lifecycle;
mod packet;
mod port;
mod read;
mod sink;

pub use clock::{Clock, Monotonic};
pub use config::{Config, Hold, Range};
pub use hold::{Activity, HoldEmulator};
pub use packet::{Flags, Packet, ShortPacket};
pub use port::{ReadError, TouchPort};
pub use sink::{Axis, AxisRegistry, Button, EventSink};

/// Errors a session surfaces to its host.
///
/// Recoverable conditions (short packets, transient read failures) are
/// logged and absorbed inside the drain loop; only conditions the host must
/// react to show up here.
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
  /// The device node could not be opened or read.
  #[error("device port error: {0}")]
  Port(E),
  /// The panel vanished while the session was enabled. The session has
  /// already closed the node and gone offline; the host may re-probe.
  #[error("device disappeared")]
  Disconnected,
}

/// One driver session for one plugged panel.
///
/// Holds the session configuration (whose axis bounds calibration widens in
/// place), the button emulation state, and the host-provided port, sink, and
/// clock. All state is owned here, nothing is global, so the host can run
/// any number of panels side by side.
pub struct Egalax<P, S, C = Monotonic> {
  port: P,
  sink: S,
  clock: C,
  config: Config,
  emulator: HoldEmulator,
  online: bool,
}

impl<P, S> Egalax<P, S> {
  /// Create a session over the host's port and event sink, timing holds
  /// with the system monotonic clock.
  ///
  /// The session starts offline; call [`Egalax::enable`] to open the device
  /// and start delivering events.
  pub fn new(port: P, sink: S, config: Config) -> Self {
    Self::with_clock(port, sink, config, Monotonic::default())
  }
}

impl<P, S, C> Egalax<P, S, C> {
  /// Like [`Egalax::new`], but with an explicit time source.
  pub fn with_clock(port: P, sink: S, config: Config, clock: C) -> Self {
    Self { port, sink, clock, config, emulator: HoldEmulator::new(), online: false }
  }

  /// Whether the session is currently delivering events.
  pub const fn is_online(&self) -> bool {
    self.online
  }

  /// The session configuration, including any calibration-widened bounds.
  pub const fn config(&self) -> &Config {
    &self.config
  }

  /// The host's event sink.
  pub fn sink(&self) -> &S {
    &self.sink
  }

  /// Consume the session and hand the host its parts back.
  pub fn into_parts(self) -> (P, S, C) {
    (self.port, self.sink, self.clock)
  }
}
