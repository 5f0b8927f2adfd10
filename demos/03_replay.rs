//! Replaying a canned report stream through the full pipeline.
//!
//! Run with `RUST_LOG=warn cargo run --example 03_replay` to watch the
//! calibration adjustment go by in the log.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use egalax::{Axis, AxisRegistry, Button, Config, Egalax, EventSink, ReadError, TouchPort};

/// In-memory port fed from the outside, like a host handing over bytes as
/// they arrive on the wire.
#[derive(Clone, Default)]
struct Canned {
  reports: Rc<RefCell<VecDeque<Vec<u8>>>>,
}

impl Canned {
  fn queue(&self, bytes: Vec<u8>) {
    self.reports.borrow_mut().push_back(bytes);
  }
}

impl TouchPort for Canned {
  type Error = Infallible;

  fn open(&mut self, _path: &str) -> Result<(), Self::Error> {
    Ok(())
  }

  fn close(&mut self) {}

  fn poll_readable(&mut self) -> bool {
    !self.reports.borrow().is_empty()
  }

  fn read(&mut self, buf: &mut [u8]) -> Result<usize, ReadError<Self::Error>> {
    match self.reports.borrow_mut().pop_front() {
      Some(bytes) => {
        let n = bytes.len().min(buf.len());
        buf[..n].copy_from_slice(&bytes[..n]);
        Ok(n)
      }
      None => Err(ReadError::WouldBlock),
    }
  }
}

/// Prints everything the driver would hand to the server.
struct Console;

impl EventSink for Console {
  fn post_motion(&mut self, _absolute: bool, x: u16, y: u16) {
    println!("motion ({x}, {y})");
  }

  fn post_button(&mut self, button: Button, pressed: bool, x: u16, y: u16) {
    let edge = if pressed { "press" } else { "release" };
    println!("button {} {edge} at ({x}, {y})", button.number());
  }
}

impl AxisRegistry for Console {
  fn set_axis_range(&mut self, axis: Axis, min: u16, max: u16) {
    println!("axis {} range [{min}, {max}]", axis.index());
  }
}

fn report(touching: bool, x: u16, y: u16) -> Vec<u8> {
  vec![touching as u8, (x >> 7) as u8, (x & 0x7F) as u8, (y >> 7) as u8, (y & 0x7F) as u8]
}

fn main() -> Result<(), egalax::Error<Infallible>> {
  env_logger::init();

  let port = Canned::default();
  let mut session = Egalax::new(port.clone(), Console, Config::default());
  session.enable()?;

  port.queue(report(true, 996, 996)); // touch down
  port.queue(report(true, 997, 995)); // hold still
  port.queue(report(true, 40, 996)); // jump left of MinX: calibration widens
  port.queue(report(false, 40, 996)); // lift
  session.handle_readable()?;

  session.disable();
  Ok(())
}
