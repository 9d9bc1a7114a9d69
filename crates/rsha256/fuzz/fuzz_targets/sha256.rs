#![no_main]

use libfuzzer_sys::fuzz_target;
use rsha256::sha256_digest;

fuzz_target!(|data: &[u8]| {
  let ours = sha256_digest(data).expect("fuzzer inputs are always within the length limit");

  use sha2::Digest as _;
  let ref_out = sha2::Sha256::digest(data);
  let mut expected = [0u8; 32];
  expected.copy_from_slice(&ref_out);

  assert_eq!(ours, expected);
});
