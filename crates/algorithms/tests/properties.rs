//! Every built-in policy agrees with a plain iterator model.

use algorithms::{replace, replace_copy, replace_copy_if, replace_if};
use execution::{PAR, PAR_UNSEQ, SEQ, UNSEQ};
use proptest::prelude::*;

fn model_replace_if(data: &[i16], threshold: i16, new_value: i16) -> Vec<i16> {
  data.iter().map(|&e| if e > threshold { new_value } else { e }).collect()
}

fn model_replace(data: &[i16], old_value: i16, new_value: i16) -> Vec<i16> {
  data.iter().map(|&e| if e == old_value { new_value } else { e }).collect()
}

// Small value domain so `old_value` hits often.
fn values() -> impl Strategy<Value = Vec<i16>> {
  prop::collection::vec(-8i16..8, 0..=5000)
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(48))]

  #[test]
  fn replace_if_matches_model(data in values(), threshold in -8i16..8, new_value in any::<i16>()) {
    let expected = model_replace_if(&data, threshold, new_value);
    let pred = |e: &i16| *e > threshold;

    let mut seq = data.clone();
    prop_assert_eq!(replace_if(&SEQ, &mut seq, pred, &new_value), Ok(()));
    let mut unseq = data.clone();
    prop_assert_eq!(replace_if(&UNSEQ, &mut unseq, pred, &new_value), Ok(()));
    let mut par = data.clone();
    prop_assert_eq!(replace_if(&PAR, &mut par, pred, &new_value), Ok(()));
    let mut par_unseq = data.clone();
    prop_assert_eq!(replace_if(&PAR_UNSEQ, &mut par_unseq, pred, &new_value), Ok(()));

    prop_assert_eq!(&seq, &expected);
    prop_assert_eq!(&unseq, &expected);
    prop_assert_eq!(&par, &expected);
    prop_assert_eq!(&par_unseq, &expected);
  }

  #[test]
  fn replace_matches_model(data in values(), old_value in -8i16..8, new_value in any::<i16>()) {
    let expected = model_replace(&data, old_value, new_value);

    let mut seq = data.clone();
    prop_assert_eq!(replace(&SEQ, &mut seq, &old_value, &new_value), Ok(()));
    let mut unseq = data.clone();
    prop_assert_eq!(replace(&UNSEQ, &mut unseq, &old_value, &new_value), Ok(()));
    let mut par = data.clone();
    prop_assert_eq!(replace(&PAR, &mut par, &old_value, &new_value), Ok(()));
    let mut par_unseq = data.clone();
    prop_assert_eq!(replace(&PAR_UNSEQ, &mut par_unseq, &old_value, &new_value), Ok(()));

    prop_assert_eq!(&seq, &expected);
    prop_assert_eq!(&unseq, &expected);
    prop_assert_eq!(&par, &expected);
    prop_assert_eq!(&par_unseq, &expected);
  }

  #[test]
  fn replace_copy_if_preserves_input_and_tail(
    data in values(),
    threshold in -8i16..8,
    new_value in any::<i16>(),
    slack in 0usize..16,
  ) {
    let expected = model_replace_if(&data, threshold, new_value);
    let pred = |e: &i16| *e > threshold;

    for policy in 0..4 {
      let mut out = vec![i16::MIN; data.len() + slack];
      let result = match policy {
        0 => replace_copy_if(&SEQ, &data, &mut out, pred, &new_value),
        1 => replace_copy_if(&UNSEQ, &data, &mut out, pred, &new_value),
        2 => replace_copy_if(&PAR, &data, &mut out, pred, &new_value),
        _ => replace_copy_if(&PAR_UNSEQ, &data, &mut out, pred, &new_value),
      };
      prop_assert_eq!(result, Ok(()));
      prop_assert_eq!(&out[..data.len()], expected.as_slice());
      prop_assert!(out[data.len()..].iter().all(|&e| e == i16::MIN));
    }
  }

  #[test]
  fn replace_copy_agrees_with_in_place_replace(data in values(), old_value in -8i16..8, new_value in any::<i16>()) {
    let mut in_place = data.clone();
    prop_assert_eq!(replace(&PAR, &mut in_place, &old_value, &new_value), Ok(()));

    for policy in 0..4 {
      let mut copied = vec![0i16; data.len()];
      let result = match policy {
        0 => replace_copy(&SEQ, &data, &mut copied, &old_value, &new_value),
        1 => replace_copy(&UNSEQ, &data, &mut copied, &old_value, &new_value),
        2 => replace_copy(&PAR, &data, &mut copied, &old_value, &new_value),
        _ => replace_copy(&PAR_UNSEQ, &data, &mut copied, &old_value, &new_value),
      };
      prop_assert_eq!(result, Ok(()));
      prop_assert_eq!(&copied, &in_place);
    }
  }
}

#[test]
fn replace_scenario() {
  let mut data = [1, 2, 3, 2, 5];
  replace(&PAR, &mut data, &2, &9).unwrap();
  assert_eq!(data, [1, 9, 3, 9, 5]);
}

#[test]
fn replace_copy_if_scenario() {
  let input = [1, 2, 3];
  let mut out = [0; 3];
  replace_copy_if(&UNSEQ, &input, &mut out, |e| e % 2 == 0, &0).unwrap();
  assert_eq!(input, [1, 2, 3]);
  assert_eq!(out, [1, 0, 3]);
}

#[test]
fn non_copy_elements() {
  let mut words: Vec<String> = ["alpha", "beta", "alpha"].iter().map(|s| s.to_string()).collect();
  replace(&PAR_UNSEQ, &mut words, &"alpha".to_string(), &"omega".to_string()).unwrap();
  assert_eq!(words, ["omega", "beta", "omega"]);
}

#[test]
#[should_panic(expected = "replace_copy_if requires an output range at least as long as the input")]
fn short_output_panics_before_writing() {
  let input = [1, 2, 3];
  let mut out = [0; 2];
  let _ = replace_copy_if(&PAR, &input, &mut out, |_| true, &9);
}
