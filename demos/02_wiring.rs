//! Wiring a session into a host, generic over its port and sink.
#![allow(unused)]

use egalax::{AxisRegistry, Config, Egalax, Error, EventSink, TouchPort};

fn run_session<P, S>(port: P, sink: S, options: &[(&str, &str)]) -> Result<(), Error<P::Error>>
where
  P: TouchPort,
  S: EventSink + AxisRegistry,
{
  let config = Config::from_options(options.iter().copied());
  let mut session = Egalax::new(port, sink, config);

  // Registration-time check that the configured node exists.
  session.probe()?;

  // Device on: flush stale bytes, register axes, start delivering.
  session.enable()?;

  // The host parks the node in its main loop and calls this from the
  // readable callback:
  session.handle_readable()?;

  // Device off / unplug.
  session.teardown();
  Ok(())
}

fn main() {}
