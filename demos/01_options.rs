//! Building a session configuration from a host option list.

use egalax::Config;

fn main() {
  let config = Config::from_options([
    ("Device", "/dev/uep0"),
    ("MinX", "400"),
    ("MaxX", "3700"),
    ("MinY", "400"),
    ("MaxY", "3800"),
    ("ReverseY", "on"),
    ("RightClickEmulArea", "8"),
    ("RightClickEmulPause", "2"),
  ]);

  println!("{config:#?}");
}
