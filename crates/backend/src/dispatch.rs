//! Customization slots: compile-time kernel selection.
//!
//! This module provides the core dispatch primitives:
//!
//! - [`Algorithm`]: which customization point is being resolved
//! - [`Kernel`]: a registered backend implementation
//! - [`Slot`]: the registration state of one (policy, algorithm) pair
//! - [`Absent`] / [`Registered`]: the two slot states
//!
//! # Design
//!
//! A slot is a type, not a value. `Absent` and `Registered<K>` implement the
//! per-algorithm slot traits in [`points`](crate::points): `Absent` forwards to
//! the generic fallback it is handed, `Registered<K>` forwards to `K` and drops
//! the fallback unused. Because the policy's [`Backend`](crate::Backend)
//! registry names the slot type, the choice is made during monomorphization and
//! exactly one of the two paths exists in the compiled call.

use core::{fmt, marker::PhantomData};

// ─────────────────────────────────────────────────────────────────────────────
// Algorithm identity
// ─────────────────────────────────────────────────────────────────────────────

/// Identity of a customization point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Algorithm {
  /// Overwrite elements that satisfy a predicate.
  ReplaceIf = 0,
  /// Overwrite elements equal to a value.
  Replace = 1,
  /// Copy a range, substituting elements that satisfy a predicate.
  ReplaceCopyIf = 2,
  /// Copy a range, substituting elements equal to a value.
  ReplaceCopy = 3,
}

impl Algorithm {
  /// All customization points, in declaration order.
  pub const ALL: [Self; 4] = [Self::ReplaceIf, Self::Replace, Self::ReplaceCopyIf, Self::ReplaceCopy];

  /// The algorithm's public name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::ReplaceIf => "replace_if",
      Self::Replace => "replace",
      Self::ReplaceCopyIf => "replace_copy_if",
      Self::ReplaceCopy => "replace_copy",
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernels and slots
// ─────────────────────────────────────────────────────────────────────────────

/// A backend-supplied implementation of one or more algorithms.
///
/// Kernels are usually zero-sized tags. The implementation itself lives in the
/// per-algorithm kernel traits ([`ReplaceIfKernel`](crate::ReplaceIfKernel), ...).
pub trait Kernel: 'static {
  /// Human-readable name for diagnostics (e.g., `"offload/replace_if"`).
  const NAME: &'static str;
}

/// Registration state of one (policy, algorithm) pair.
pub trait Slot: 'static {
  /// `true` when a kernel is registered in this slot.
  const REGISTERED: bool;

  /// Name of the implementation this slot resolves to.
  const NAME: &'static str;
}

/// Nothing registered: the generic fallback runs.
///
/// This is a valid, distinguishable state rather than an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Absent;

impl Slot for Absent {
  const REGISTERED: bool = false;
  const NAME: &'static str = "generic";
}

/// Kernel `K` is registered: it runs instead of the generic fallback.
pub struct Registered<K>(PhantomData<fn() -> K>);

impl<K: Kernel> Slot for Registered<K> {
  const REGISTERED: bool = true;
  const NAME: &'static str = K::NAME;
}

impl<K: Kernel> fmt::Debug for Registered<K> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Registered").field(&K::NAME).finish()
  }
}

/// Record a dispatch decision.
///
/// Called by every slot implementation right before it hands control to the
/// selected path.
#[inline]
pub(crate) fn record<S: Slot>(algorithm: Algorithm, policy: &'static str) {
  if S::REGISTERED {
    tracing::trace!(algorithm = algorithm.name(), policy, kernel = S::NAME, "dispatching to registered kernel");
  } else {
    tracing::trace!(algorithm = algorithm.name(), policy, "dispatching to generic fallback");
  }
}
