//! Per-algorithm customization points.
//!
//! Each algorithm gets two traits:
//!
//! - a **kernel trait** (`ReplaceIfKernel<E>`, ...) that a backend implements to
//!   supply its own version of the algorithm for policy `E`;
//! - a **slot trait** (`ReplaceIfSlot<E>`, ...) implemented by [`Absent`] and
//!   [`Registered<K>`], whose `dispatch` receives the algorithm arguments plus
//!   the generic fallback and runs exactly one of the two.
//!
//! Kernel methods are generic over the element type and the predicate, so a
//! kernel registered once serves every instantiation of the algorithm.

use traits::{Completion, Traversal};

use crate::dispatch::{Absent, Algorithm, Registered, record};

// ─────────────────────────────────────────────────────────────────────────────
// replace_if
// ─────────────────────────────────────────────────────────────────────────────

/// Backend implementation of `replace_if` for policy `E`.
pub trait ReplaceIfKernel<E: Traversal>: crate::Kernel {
  /// Overwrite every element of `data` satisfying `pred` with `new_value`.
  fn replace_if<T, F>(policy: &E, data: &mut [T], pred: F, new_value: &T) -> Completion
  where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Send + Sync;
}

/// Dispatch for the `replace_if` customization point.
pub trait ReplaceIfSlot<E: Traversal>: crate::Slot {
  /// Run the registered kernel, or `fallback` when nothing is registered.
  fn dispatch<T, F, G>(policy: &E, data: &mut [T], pred: F, new_value: &T, fallback: G) -> Completion
  where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Send + Sync,
    G: FnOnce(&mut [T], F, &T) -> Completion;
}

impl<E: Traversal> ReplaceIfSlot<E> for Absent {
  #[inline]
  fn dispatch<T, F, G>(_policy: &E, data: &mut [T], pred: F, new_value: &T, fallback: G) -> Completion
  where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Send + Sync,
    G: FnOnce(&mut [T], F, &T) -> Completion,
  {
    record::<Self>(Algorithm::ReplaceIf, E::NAME);
    fallback(data, pred, new_value)
  }
}

impl<E: Traversal, K: ReplaceIfKernel<E>> ReplaceIfSlot<E> for Registered<K> {
  #[inline]
  fn dispatch<T, F, G>(policy: &E, data: &mut [T], pred: F, new_value: &T, _fallback: G) -> Completion
  where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Send + Sync,
    G: FnOnce(&mut [T], F, &T) -> Completion,
  {
    record::<Self>(Algorithm::ReplaceIf, E::NAME);
    K::replace_if(policy, data, pred, new_value)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// replace
// ─────────────────────────────────────────────────────────────────────────────

/// Backend implementation of `replace` for policy `E`.
pub trait ReplaceKernel<E: Traversal>: crate::Kernel {
  /// Overwrite every element of `data` equal to `old_value` with `new_value`.
  fn replace<T>(policy: &E, data: &mut [T], old_value: &T, new_value: &T) -> Completion
  where
    T: Clone + PartialEq + Send + Sync;
}

/// Dispatch for the `replace` customization point.
pub trait ReplaceSlot<E: Traversal>: crate::Slot {
  /// Run the registered kernel, or `fallback` when nothing is registered.
  fn dispatch<T, G>(policy: &E, data: &mut [T], old_value: &T, new_value: &T, fallback: G) -> Completion
  where
    T: Clone + PartialEq + Send + Sync,
    G: FnOnce(&mut [T], &T, &T) -> Completion;
}

impl<E: Traversal> ReplaceSlot<E> for Absent {
  #[inline]
  fn dispatch<T, G>(_policy: &E, data: &mut [T], old_value: &T, new_value: &T, fallback: G) -> Completion
  where
    T: Clone + PartialEq + Send + Sync,
    G: FnOnce(&mut [T], &T, &T) -> Completion,
  {
    record::<Self>(Algorithm::Replace, E::NAME);
    fallback(data, old_value, new_value)
  }
}

impl<E: Traversal, K: ReplaceKernel<E>> ReplaceSlot<E> for Registered<K> {
  #[inline]
  fn dispatch<T, G>(policy: &E, data: &mut [T], old_value: &T, new_value: &T, _fallback: G) -> Completion
  where
    T: Clone + PartialEq + Send + Sync,
    G: FnOnce(&mut [T], &T, &T) -> Completion,
  {
    record::<Self>(Algorithm::Replace, E::NAME);
    K::replace(policy, data, old_value, new_value)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// replace_copy_if
// ─────────────────────────────────────────────────────────────────────────────

/// Backend implementation of `replace_copy_if` for policy `E`.
pub trait ReplaceCopyIfKernel<E: Traversal>: crate::Kernel {
  /// Write `input` to `output`, substituting `new_value` where `pred` holds.
  ///
  /// Called only with `output.len() >= input.len()`.
  fn replace_copy_if<T, F>(policy: &E, input: &[T], output: &mut [T], pred: F, new_value: &T) -> Completion
  where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Send + Sync;
}

/// Dispatch for the `replace_copy_if` customization point.
pub trait ReplaceCopyIfSlot<E: Traversal>: crate::Slot {
  /// Run the registered kernel, or `fallback` when nothing is registered.
  fn dispatch<T, F, G>(policy: &E, input: &[T], output: &mut [T], pred: F, new_value: &T, fallback: G) -> Completion
  where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Send + Sync,
    G: FnOnce(&[T], &mut [T], F, &T) -> Completion;
}

impl<E: Traversal> ReplaceCopyIfSlot<E> for Absent {
  #[inline]
  fn dispatch<T, F, G>(_policy: &E, input: &[T], output: &mut [T], pred: F, new_value: &T, fallback: G) -> Completion
  where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Send + Sync,
    G: FnOnce(&[T], &mut [T], F, &T) -> Completion,
  {
    record::<Self>(Algorithm::ReplaceCopyIf, E::NAME);
    fallback(input, output, pred, new_value)
  }
}

impl<E: Traversal, K: ReplaceCopyIfKernel<E>> ReplaceCopyIfSlot<E> for Registered<K> {
  #[inline]
  fn dispatch<T, F, G>(policy: &E, input: &[T], output: &mut [T], pred: F, new_value: &T, _fallback: G) -> Completion
  where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Send + Sync,
    G: FnOnce(&[T], &mut [T], F, &T) -> Completion,
  {
    record::<Self>(Algorithm::ReplaceCopyIf, E::NAME);
    K::replace_copy_if(policy, input, output, pred, new_value)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// replace_copy
// ─────────────────────────────────────────────────────────────────────────────

/// Backend implementation of `replace_copy` for policy `E`.
pub trait ReplaceCopyKernel<E: Traversal>: crate::Kernel {
  /// Write `input` to `output`, substituting `new_value` for elements equal to `old_value`.
  ///
  /// Called only with `output.len() >= input.len()`.
  fn replace_copy<T>(policy: &E, input: &[T], output: &mut [T], old_value: &T, new_value: &T) -> Completion
  where
    T: Clone + PartialEq + Send + Sync;
}

/// Dispatch for the `replace_copy` customization point.
pub trait ReplaceCopySlot<E: Traversal>: crate::Slot {
  /// Run the registered kernel, or `fallback` when nothing is registered.
  fn dispatch<T, G>(policy: &E, input: &[T], output: &mut [T], old_value: &T, new_value: &T, fallback: G) -> Completion
  where
    T: Clone + PartialEq + Send + Sync,
    G: FnOnce(&[T], &mut [T], &T, &T) -> Completion;
}

impl<E: Traversal> ReplaceCopySlot<E> for Absent {
  #[inline]
  fn dispatch<T, G>(_policy: &E, input: &[T], output: &mut [T], old_value: &T, new_value: &T, fallback: G) -> Completion
  where
    T: Clone + PartialEq + Send + Sync,
    G: FnOnce(&[T], &mut [T], &T, &T) -> Completion,
  {
    record::<Self>(Algorithm::ReplaceCopy, E::NAME);
    fallback(input, output, old_value, new_value)
  }
}

impl<E: Traversal, K: ReplaceCopyKernel<E>> ReplaceCopySlot<E> for Registered<K> {
  #[inline]
  fn dispatch<T, G>(policy: &E, input: &[T], output: &mut [T], old_value: &T, new_value: &T, _fallback: G) -> Completion
  where
    T: Clone + PartialEq + Send + Sync,
    G: FnOnce(&[T], &mut [T], &T, &T) -> Completion,
  {
    record::<Self>(Algorithm::ReplaceCopy, E::NAME);
    K::replace_copy(policy, input, output, old_value, new_value)
  }
}
