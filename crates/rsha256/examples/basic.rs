//! Basic SHA-256 usage: the one-shot API and the pipeline taken apart.
//!
//! Run with: `cargo run --example basic -p rsha256`

use rsha256::{MessageTooLong, compress, pad, sha256, sha256_digest, to_hex};

fn main() -> Result<(), MessageTooLong> {
  println!("=== SHA-256 Basic Examples ===\n");

  one_shot_examples()?;
  stage_by_stage_example()?;
  Ok(())
}

/// The primary API: bytes in, hex digest out.
fn one_shot_examples() -> Result<(), MessageTooLong> {
  println!("--- One-Shot Digests ---\n");

  let empty = sha256(b"")?;
  println!("sha256(\"\")    = {empty}");
  assert_eq!(empty, "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");

  let abc = sha256(b"abc")?;
  println!("sha256(\"abc\") = {abc}");
  assert_eq!(abc, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");

  // Same digest, byte form.
  let bytes = sha256_digest(b"abc")?;
  println!("byte form starts with 0x{:02x}{:02x}", bytes[0], bytes[1]);

  println!();
  Ok(())
}

/// The three stages composed by `sha256`, run one at a time.
fn stage_by_stage_example() -> Result<(), MessageTooLong> {
  println!("--- Stage by Stage ---\n");

  let message = b"The quick brown fox jumps over the lazy dog";

  let padded = pad(message)?;
  println!("message: {} bytes", message.len());
  println!("padded:  {} bytes ({} block(s))", padded.len(), padded.len() / 64);

  let state = compress(&padded);
  println!("H0 word: 0x{:08x}", state[0]);
  println!("digest:  {}", to_hex(&state));

  println!();
  Ok(())
}
