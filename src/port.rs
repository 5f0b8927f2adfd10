//! Transport seam between the driver and the host's device I/O layer.
//!
//! The driver never opens files or polls descriptors itself. The host hands
//! it a [`TouchPort`] and signals readability from its main loop; everything
//! else (O_NONBLOCK handling, descriptor bookkeeping) stays on the host side.

/// Non-blocking byte transport to the digitizer's device node.
///
/// One port represents one plugged panel. `open`/`close` may be called
/// repeatedly over a session's life as the host enables and disables the
/// device; `read` must never block.
pub trait TouchPort {
  /// Transport-level failure type, surfaced through [`crate::Error::Port`].
  type Error: std::error::Error;

  /// Open the device node at `path` in non-blocking mode.
  fn open(&mut self, path: &str) -> Result<(), Self::Error>;

  /// Close the device node. Closing a port that is not open is a no-op.
  fn close(&mut self);

  /// Whether at least one byte can be read right now without blocking.
  fn poll_readable(&mut self) -> bool;

  /// Read up to `buf.len()` bytes, returning how many arrived.
  fn read(&mut self, buf: &mut [u8]) -> Result<usize, ReadError<Self::Error>>;
}

/// Why a non-blocking read produced no data.
#[derive(Debug, thiserror::Error)]
pub enum ReadError<E> {
  /// Nothing is queued; try again when the host signals readable.
  #[error("read would block")]
  WouldBlock,
  /// The device node vanished (panel unplugged, kernel driver detached).
  #[error("device is gone")]
  Gone,
  /// Any other transport failure.
  #[error("{0}")]
  Other(E),
}
