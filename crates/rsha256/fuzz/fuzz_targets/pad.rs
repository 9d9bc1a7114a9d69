#![no_main]

use libfuzzer_sys::fuzz_target;
use rsha256::pad;

fuzz_target!(|data: &[u8]| {
  let padded = pad(data).expect("fuzzer inputs are always within the length limit");

  assert_eq!(padded.len() % 64, 0);
  assert!(padded.len() >= data.len() + 9);
  assert_eq!(&padded[..data.len()], data);
  assert_eq!(padded[data.len()], 0x80);

  let trailer_start = padded.len() - 8;
  assert!(padded[data.len() + 1..trailer_start].iter().all(|&b| b == 0));

  let mut trailer = [0u8; 8];
  trailer.copy_from_slice(&padded[trailer_start..]);
  assert_eq!(u64::from_be_bytes(trailer), (data.len() as u64) * 8);
});
