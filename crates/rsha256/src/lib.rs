//! One-shot SHA-256 (FIPS 180-4).
//!
//! The digest is computed in three pure stages, composed by [`sha256`]:
//!
//! - [`pad`] - message padding to a whole number of 64-byte blocks.
//! - [`compress`] - 64-round block compression into the 8-word hash state.
//! - [`to_hex`] / [`digest_bytes`] - digest serialization.
//!
//! This crate is `no_std` (plus `alloc`) and has zero runtime dependencies.
//! Dev-only dependencies are used for oracle testing, benchmarking, and
//! fuzzing.
//!
//! # Quick Start
//!
//! ```
//! let digest = rsha256::sha256(b"abc")?;
//! assert_eq!(
//!   digest,
//!   "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # Ok::<(), rsha256::MessageTooLong>(())
//! ```
//!
//! The API is deliberately one-shot: streaming updates, HMAC, and algorithms
//! other than SHA-256 are out of scope.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

mod compress;
mod error;
mod hex;
mod pad;
mod util;

use alloc::string::String;

pub use compress::{BLOCK_LEN, compress};
pub use error::MessageTooLong;
pub use hex::{digest_bytes, to_hex};
pub use pad::{MAX_MESSAGE_LEN, pad};

/// Compute the SHA-256 digest of `message` as 64 lowercase hex characters.
///
/// Errors only when the message is too long for the standard's 64-bit
/// bit-length field; see [`pad`].
pub fn sha256(message: &[u8]) -> Result<String, MessageTooLong> {
  let padded = pad(message)?;
  Ok(to_hex(&compress(&padded)))
}

/// Compute the SHA-256 digest of `message` as 32 big-endian bytes.
pub fn sha256_digest(message: &[u8]) -> Result<[u8; 32], MessageTooLong> {
  let padded = pad(message)?;
  Ok(digest_bytes(&compress(&padded)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_vectors() {
    // NIST FIPS 180-4 test vectors (short messages).
    assert_eq!(
      sha256(b"").unwrap(),
      "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
      sha256(b"abc").unwrap(),
      "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
      sha256(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").unwrap(),
      "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );

    // 1,000,000 repetitions of 'a'.
    let million_a = alloc::vec![b'a'; 1_000_000];
    assert_eq!(
      sha256(&million_a).unwrap(),
      "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
  }

  #[test]
  fn hex_and_byte_forms_agree() {
    let hex = sha256(b"abc").unwrap();
    let bytes = sha256_digest(b"abc").unwrap();
    let rendered: alloc::string::String = bytes.iter().map(|b| alloc::format!("{b:02x}")).collect();
    assert_eq!(hex, rendered);
  }
}
