//! Completion-returning algorithms.
//!
//! These are the building blocks behind the public wrappers. Each one asks the
//! policy's [`Backend`] registry for a kernel and supplies the generic fallback
//! used when none is registered. Failures travel upward as `Err(Exhausted)`
//! through every level of composition; nothing here panics on exhaustion or
//! converts it into another error.
//!
//! Backends implementing one algorithm in terms of another should call these
//! functions rather than the public wrappers.

use backend::traits::{Completion, Traversal};
use backend::{Backend, ReplaceCopyIfSlot, ReplaceCopySlot, ReplaceIfSlot, ReplaceSlot};

/// Overwrite every element of `data` satisfying `pred` with a clone of `new_value`.
///
/// Generic path: one [`Traversal::for_each`] over `data`.
pub fn replace_if<E, T, F>(policy: &E, data: &mut [T], pred: F, new_value: &T) -> Completion
where
  E: Backend,
  T: Clone + Send + Sync,
  F: Fn(&T) -> bool + Send + Sync,
{
  <E::ReplaceIf as ReplaceIfSlot<E>>::dispatch(policy, data, pred, new_value, |data: &mut [T], pred: F, new_value: &T| {
    policy.for_each(data, |e| {
      if pred(&*e) {
        *e = new_value.clone();
      }
    })
  })
}

/// Overwrite every element of `data` equal to `old_value` with a clone of `new_value`.
///
/// Generic path: [`replace_if`] with an equality predicate, dispatched again so
/// a kernel registered for `replace_if` serves this algorithm too.
pub fn replace<E, T>(policy: &E, data: &mut [T], old_value: &T, new_value: &T) -> Completion
where
  E: Backend,
  T: Clone + PartialEq + Send + Sync,
{
  <E::Replace as ReplaceSlot<E>>::dispatch(policy, data, old_value, new_value, |data: &mut [T], old: &T, new: &T| {
    replace_if(policy, data, move |e: &T| e == old, new)
  })
}

/// Write `input` into the front of `output`, substituting `new_value` for
/// elements satisfying `pred`.
///
/// Trailing positions of `output` are left untouched. Generic path: one
/// [`Traversal::transform`].
///
/// # Panics
///
/// If `output` is shorter than `input`. The check runs before dispatch, so
/// registered kernels never see a short output.
pub fn replace_copy_if<E, T, F>(policy: &E, input: &[T], output: &mut [T], pred: F, new_value: &T) -> Completion
where
  E: Backend,
  T: Clone + Send + Sync,
  F: Fn(&T) -> bool + Send + Sync,
{
  check_output("replace_copy_if", input.len(), output.len());
  <E::ReplaceCopyIf as ReplaceCopyIfSlot<E>>::dispatch(
    policy,
    input,
    output,
    pred,
    new_value,
    |input: &[T], output: &mut [T], pred: F, new_value: &T| {
      policy.transform(input, output, |e: &T| if pred(e) { new_value.clone() } else { e.clone() })
    },
  )
}

/// Write `input` into the front of `output`, substituting `new_value` for
/// elements equal to `old_value`.
///
/// Generic path: [`replace_copy_if`] with an equality predicate.
///
/// # Panics
///
/// If `output` is shorter than `input`.
pub fn replace_copy<E, T>(policy: &E, input: &[T], output: &mut [T], old_value: &T, new_value: &T) -> Completion
where
  E: Backend,
  T: Clone + PartialEq + Send + Sync,
{
  check_output("replace_copy", input.len(), output.len());
  <E::ReplaceCopy as ReplaceCopySlot<E>>::dispatch(
    policy,
    input,
    output,
    old_value,
    new_value,
    |input: &[T], output: &mut [T], old: &T, new: &T| replace_copy_if(policy, input, output, move |e: &T| e == old, new),
  )
}

#[inline]
#[track_caller]
fn check_output(algorithm: &'static str, input: usize, output: usize) {
  assert!(
    output >= input,
    "{algorithm} requires an output range at least as long as the input (input {input}, output {output})"
  );
}

#[cfg(test)]
mod tests {
  use backend::traits::{Exhausted, ExecutionPolicy, PolicyKind};
  use execution::{PAR, PAR_UNSEQ, SEQ, UNSEQ};

  use super::*;

  /// Policy whose primitives refuse any non-empty range.
  #[derive(Clone, Copy, Debug)]
  struct Starved;

  impl ExecutionPolicy for Starved {
    const KIND: PolicyKind = PolicyKind::Parallel;
  }

  impl Traversal for Starved {
    fn for_each<T, F>(&self, data: &mut [T], _f: F) -> Completion
    where
      T: Send,
      F: Fn(&mut T) + Send + Sync,
    {
      if data.is_empty() { Ok(()) } else { Err(Exhausted) }
    }

    fn transform<T, U, F>(&self, input: &[T], _output: &mut [U], _f: F) -> Completion
    where
      T: Sync,
      U: Send,
      F: Fn(&T) -> U + Send + Sync,
    {
      if input.is_empty() { Ok(()) } else { Err(Exhausted) }
    }
  }

  backend::generic_backend!(Starved);

  #[test]
  fn replace_substitutes_matches() {
    let mut data = [1, 2, 3, 2, 5];
    assert_eq!(replace(&SEQ, &mut data, &2, &9), Ok(()));
    assert_eq!(data, [1, 9, 3, 9, 5]);
  }

  #[test]
  fn replace_if_uses_predicate() {
    let mut data: Vec<i32> = (0..10).collect();
    assert_eq!(replace_if(&UNSEQ, &mut data, |e| e % 3 == 0, &-1), Ok(()));
    assert_eq!(data, [-1, 1, 2, -1, 4, 5, -1, 7, 8, -1]);
  }

  #[test]
  fn replace_copy_if_leaves_input_alone() {
    let input = [1, 2, 3];
    let mut output = [7; 3];
    assert_eq!(replace_copy_if(&PAR, &input, &mut output, |e| e % 2 == 0, &0), Ok(()));
    assert_eq!(input, [1, 2, 3]);
    assert_eq!(output, [1, 0, 3]);
  }

  #[test]
  fn replace_copy_writes_only_prefix() {
    let input = [4, 4, 1];
    let mut output = [8; 5];
    assert_eq!(replace_copy(&PAR_UNSEQ, &input, &mut output, &4, &6), Ok(()));
    assert_eq!(output, [6, 6, 1, 8, 8]);
  }

  #[test]
  fn no_match_is_identity() {
    let mut data = vec![String::from("a"), String::from("b")];
    assert_eq!(replace(&SEQ, &mut data, &String::from("z"), &String::new()), Ok(()));
    assert_eq!(data, ["a", "b"]);
  }

  #[test]
  fn exhaustion_propagates_through_lattice() {
    let mut data = [1u8, 2, 3];
    let mut out = [0u8; 3];
    assert_eq!(replace_if(&Starved, &mut data, |_| true, &0), Err(Exhausted));
    assert_eq!(replace(&Starved, &mut data, &1, &0), Err(Exhausted));
    assert_eq!(replace_copy_if(&Starved, &data, &mut out, |_| true, &0), Err(Exhausted));
    assert_eq!(replace_copy(&Starved, &data, &mut out, &1, &0), Err(Exhausted));
    assert_eq!(data, [1, 2, 3]);
  }

  #[test]
  #[should_panic(expected = "replace_copy_if requires an output range at least as long as the input")]
  fn short_output_rejected_before_dispatch() {
    let mut out = [0; 2];
    let _ = replace_copy_if(&SEQ, &[1, 2, 3], &mut out, |e| *e == 2, &9);
  }

  #[test]
  #[should_panic(expected = "replace_copy requires an output range at least as long as the input")]
  fn short_output_rejected_under_parallel_policy() {
    let mut out = [0; 2];
    let _ = replace_copy(&PAR, &[1, 2, 3], &mut out, &2, &9);
  }

  #[test]
  fn empty_ranges_complete_under_starved_policy() {
    let mut data: [u8; 0] = [];
    let mut out: [u8; 0] = [];
    assert_eq!(replace(&Starved, &mut data, &1, &0), Ok(()));
    assert_eq!(replace_copy(&Starved, &data, &mut out, &1, &0), Ok(()));
  }
}
