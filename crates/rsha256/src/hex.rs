//! Digest serialization: the 8-word state as bytes or lowercase hex.
#![allow(clippy::indexing_slicing)] // Nibble lookups are bounded by construction

use alloc::string::String;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Serialize the hash state as 32 bytes, most-significant byte of each word
/// first, `H0` through `H7`.
#[inline]
#[must_use]
pub fn digest_bytes(state: &[u32; 8]) -> [u8; 32] {
  let mut out = [0u8; 32];
  for (i, word) in state.iter().copied().enumerate() {
    let offset = i * 4;
    out[offset..offset + 4].copy_from_slice(&word.to_be_bytes());
  }
  out
}

/// Render the hash state as 64 lowercase hex characters.
#[must_use]
pub fn to_hex(state: &[u32; 8]) -> String {
  let mut out = String::with_capacity(64);
  for byte in digest_bytes(state) {
    out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
    out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
  }
  out
}
