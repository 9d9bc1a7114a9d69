//! SHA-256 message padding.
//!
//! FIPS 180-4 §5.1.1: append a single `0x80` marker byte, then the smallest
//! run of zero bytes that brings the length to 56 (mod 64), then the
//! original length in bits as a big-endian 64-bit integer. The result is
//! always a positive whole number of 64-byte blocks.

use alloc::vec::Vec;

use crate::compress::BLOCK_LEN;
use crate::error::MessageTooLong;

/// Largest message length, in bytes, whose bit length fits the standard's
/// 64-bit length field.
pub const MAX_MESSAGE_LEN: u64 = u64::MAX / 8;

/// Pad `message` to a whole number of 64-byte blocks.
///
/// Allocates a new buffer: the message, the `0x80` marker, an explicit zero
/// gap, and the 8-byte big-endian bit length. Errors only when the bit
/// length would overflow the length field.
pub fn pad(message: &[u8]) -> Result<Vec<u8>, MessageTooLong> {
  let len = message.len();
  if len as u64 > MAX_MESSAGE_LEN {
    return Err(MessageTooLong::new());
  }
  let bit_len = (len as u64) * 8;

  // Smallest zero gap such that marker + gap lands on 56 (mod 64), leaving
  // exactly 8 bytes for the length field.
  let zero_gap = (BLOCK_LEN + 56 - (len + 1) % BLOCK_LEN) % BLOCK_LEN;

  let mut padded = Vec::with_capacity(len + 1 + zero_gap + 8);
  padded.extend_from_slice(message);
  padded.push(0x80);
  // The gap is zeroed explicitly, not inherited from allocator behavior.
  padded.resize(len + 1 + zero_gap, 0);
  padded.extend_from_slice(&bit_len.to_be_bytes());

  debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
  Ok(padded)
}
