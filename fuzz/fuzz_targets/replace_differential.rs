//! Differential fuzz target: every policy agrees with a plain iterator model.
//!
//! Covers all four algorithms, arbitrary output slack for the copy variants,
//! and ranges long enough to cross the parallel threshold.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rsalgo::{Backend, PAR, PAR_UNSEQ, SEQ, UNSEQ, replace, replace_copy, replace_copy_if, replace_if};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Repeat `data` to reach parallel-sized ranges.
  repeat: u8,
  old_value: u8,
  new_value: u8,
  slack: u8,
}

fuzz_target!(|input: Input| {
  let reps = usize::from(input.repeat % 8) + 1;
  let data: Vec<u8> = input.data.iter().copied().cycle().take(input.data.len() * reps).collect();
  let slack = usize::from(input.slack % 32);

  check(&SEQ, &data, &input, slack);
  check(&UNSEQ, &data, &input, slack);
  check(&PAR, &data, &input, slack);
  check(&PAR_UNSEQ, &data, &input, slack);
});

fn check<E: Backend>(policy: &E, data: &[u8], input: &Input, slack: usize) {
  let (old, new) = (input.old_value, input.new_value);
  let eq_model: Vec<u8> = data.iter().map(|&e| if e == old { new } else { e }).collect();
  let lt_model: Vec<u8> = data.iter().map(|&e| if e < old { new } else { e }).collect();

  let mut work = data.to_vec();
  replace(policy, &mut work, &old, &new).unwrap();
  assert_eq!(work, eq_model, "{} replace mismatch", E::NAME);

  let mut work = data.to_vec();
  replace_if(policy, &mut work, |e| *e < old, &new).unwrap();
  assert_eq!(work, lt_model, "{} replace_if mismatch", E::NAME);

  let mut out = vec![0xA5; data.len() + slack];
  replace_copy(policy, data, &mut out, &old, &new).unwrap();
  assert_eq!(&out[..data.len()], eq_model.as_slice(), "{} replace_copy mismatch", E::NAME);
  assert!(out[data.len()..].iter().all(|&e| e == 0xA5), "{} replace_copy wrote past input", E::NAME);

  let mut out = vec![0xA5; data.len() + slack];
  replace_copy_if(policy, data, &mut out, |e| *e < old, &new).unwrap();
  assert_eq!(&out[..data.len()], lt_model.as_slice(), "{} replace_copy_if mismatch", E::NAME);
  assert!(out[data.len()..].iter().all(|&e| e == 0xA5), "{} replace_copy_if wrote past input", E::NAME);
}
