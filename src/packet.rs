//! Wire codec for the panel's fixed five-byte reports.
//!
//! The stream carries no framing byte and no checksum; synchronization rests
//! entirely on consistent five-byte reads. A read that comes up short is
//! reported as [`ShortPacket`] and the partial bytes are discarded; the next
//! read is assumed to land on a report boundary again.

use bitflags::bitflags;

bitflags! {
  /// Status bits carried in the first byte of a report.
  ///
  /// Only the contact bit is assigned; the remaining bits are preserved
  /// as-is for anyone who wants to look at the raw byte.
  #[derive(Debug, Clone, Copy, PartialEq, Eq)]
  pub struct Flags: u8 {
    /// The panel is being touched.
    const TOUCHING = 0x01;
  }
}

/// One decoded digitizer report.
///
/// Positions are 14-bit values reconstructed from two 7-bit bytes each, in
/// raw panel units. Every packet is consumed immediately; nothing beyond the
/// gesture machine's origin survives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet {
  pub flags: Flags,
  pub x: u16,
  pub y: u16,
}

impl Packet {
  /// Wire size of one report.
  pub const LEN: usize = 5;

  /// Decode one report from `raw`.
  ///
  /// Reproduces the panel's bit layout exactly: contact is bit 0 of byte 0,
  /// `x` is `(b1 << 7) | b2`, `y` is `(b3 << 7) | b4`, with no masking of
  /// stray high bits. Bytes past [`Packet::LEN`] are ignored.
  pub fn decode(raw: &[u8]) -> Result<Self, ShortPacket> {
    if raw.len() < Self::LEN {
      return Err(ShortPacket(raw.len()));
    }
    Ok(Self {
      flags: Flags::from_bits_retain(raw[0]),
      x: (raw[1] as u16) << 7 | raw[2] as u16,
      y: (raw[3] as u16) << 7 | raw[4] as u16,
    })
  }

  /// Whether the panel reports contact.
  pub fn touching(&self) -> bool {
    self.flags.contains(Flags::TOUCHING)
  }
}

/// Framing error: a read delivered fewer bytes than one full report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("bad packet len {0}")]
pub struct ShortPacket(pub usize);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_reconstructs_14_bit_positions() {
    let packet = Packet::decode(&[0x01, 0x07, 0x64, 0x07, 0x64]).expect("full packet");
    assert!(packet.touching());
    assert_eq!(packet.x, (7 << 7) | 0x64);
    assert_eq!(packet.x, 996);
    assert_eq!(packet.y, 996);
  }

  #[test]
  fn contact_is_bit_zero_only() {
    let released = Packet::decode(&[0xFE, 0, 0, 0, 0]).expect("full packet");
    assert!(!released.touching());

    let touching = Packet::decode(&[0x81, 0, 0, 0, 0]).expect("full packet");
    assert!(touching.touching());
    assert_eq!(touching.flags.bits(), 0x81);
  }

  #[test]
  fn stray_high_bits_pass_through_unmasked() {
    // The protocol promises 7-bit position bytes; a noisy byte must still
    // decode to exactly (b1 << 7) | b2.
    for (b1, b2) in [(0x00u8, 0xFFu8), (0xFF, 0x00), (0xFF, 0xFF), (0x80, 0x01)] {
      let packet = Packet::decode(&[0x01, b1, b2, b2, b1]).expect("full packet");
      assert_eq!(packet.x, (b1 as u16) << 7 | b2 as u16);
      assert_eq!(packet.y, (b2 as u16) << 7 | b1 as u16);
    }
  }

  #[test]
  fn short_reads_are_framing_errors() {
    assert_eq!(Packet::decode(&[]), Err(ShortPacket(0)));
    assert_eq!(Packet::decode(&[0x01, 0x07, 0x64]), Err(ShortPacket(3)));
    assert!(Packet::decode(&[0x01, 0x07, 0x64, 0x07, 0x64, 0x99]).is_ok());
  }
}
