//! Error types.
//!
//! The only runtime failure in this crate is an input too large for the
//! SHA-256 length field; every other operation is total over its valid
//! domain.

use core::fmt;

/// Input message too long to hash.
///
/// SHA-256 encodes the message length in bits as an unsigned 64-bit
/// integer, capping the input at `2^61 - 1` bytes. [`crate::pad`] rejects
/// anything larger with this error instead of silently truncating the
/// length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct MessageTooLong;

impl MessageTooLong {
  /// Create a new error value.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for MessageTooLong {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for MessageTooLong {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("message exceeds the sha-256 length-field limit of 2^61 - 1 bytes")
  }
}

impl core::error::Error for MessageTooLong {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(
      MessageTooLong::new().to_string(),
      "message exceeds the sha-256 length-field limit of 2^61 - 1 bytes"
    );
  }

  #[test]
  fn debug_impl() {
    assert_eq!(format!("{:?}", MessageTooLong::new()), "MessageTooLong");
  }

  #[test]
  fn default_matches_new() {
    let err: MessageTooLong = Default::default();
    assert_eq!(err, MessageTooLong::new());
  }

  #[test]
  fn is_copy() {
    let e = MessageTooLong::new();
    let e2 = e; // Copy
    let e3 = e; // Still valid
    assert_eq!(e2, e3);
  }

  #[test]
  fn error_trait_impl() {
    use core::error::Error;

    fn assert_error<T: core::error::Error>() {}
    assert_error::<MessageTooLong>();

    assert!(MessageTooLong::new().source().is_none());
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<MessageTooLong>();
    assert_sync::<MessageTooLong>();
  }

  #[test]
  fn size_is_zero() {
    assert_eq!(core::mem::size_of::<MessageTooLong>(), 0);
  }
}
