//! Element-wise traversal primitives.

use crate::{Completion, ExecutionPolicy};

/// The primitives an execution policy provides to the algorithm layer.
///
/// Algorithms never spawn threads themselves: they hand the policy's
/// primitives a per-element function and let the policy decide how the range
/// is walked. Under a parallel policy `f` may run concurrently for different
/// elements, hence the `Send + Sync` bounds.
///
/// Both primitives return `Err(Exhausted)` when they cannot obtain the
/// resources they need. Implementations must not report exhaustion for an
/// empty range.
///
/// [`Exhausted`]: crate::Exhausted
pub trait Traversal: ExecutionPolicy {
  /// Apply `f` to every element of `data`.
  ///
  /// Under [`PolicyKind::Sequenced`](crate::PolicyKind::Sequenced) elements are
  /// visited in range order; other kinds give no ordering guarantee.
  fn for_each<T, F>(&self, data: &mut [T], f: F) -> Completion
  where
    T: Send,
    F: Fn(&mut T) + Send + Sync;

  /// Write `f(&input[i])` to `output[i]` for every `i < input.len()`.
  ///
  /// `output` must be at least as long as `input`; positions past
  /// `input.len()` are left untouched. The borrow rules guarantee `input` and
  /// `output` never overlap.
  fn transform<T, U, F>(&self, input: &[T], output: &mut [U], f: F) -> Completion
  where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Send + Sync;
}
