//! Per-policy customization registry.

use traits::Traversal;

use crate::points::{ReplaceCopyIfSlot, ReplaceCopySlot, ReplaceIfSlot, ReplaceSlot};

/// Maps each algorithm to the slot registered for this policy.
///
/// Set a slot to [`Absent`](crate::Absent) to use the generic fallback, or to
/// [`Registered<K>`](crate::Registered) to route the algorithm to kernel `K`.
/// Policies that customize nothing implement this trait with
/// [`generic_backend!`](crate::generic_backend).
pub trait Backend: Traversal {
  /// Slot for `replace_if`.
  type ReplaceIf: ReplaceIfSlot<Self>;
  /// Slot for `replace`.
  type Replace: ReplaceSlot<Self>;
  /// Slot for `replace_copy_if`.
  type ReplaceCopyIf: ReplaceCopyIfSlot<Self>;
  /// Slot for `replace_copy`.
  type ReplaceCopy: ReplaceCopySlot<Self>;
}

/// Implement [`Backend`] with every slot [`Absent`](crate::Absent).
///
/// ```ignore
/// backend::generic_backend!(Sequenced, Parallel);
/// ```
#[macro_export]
macro_rules! generic_backend {
  ($($policy:ty),+ $(,)?) => {
    $(
      impl $crate::Backend for $policy {
        type ReplaceIf = $crate::Absent;
        type Replace = $crate::Absent;
        type ReplaceCopyIf = $crate::Absent;
        type ReplaceCopy = $crate::Absent;
      }
    )+
  };
}
