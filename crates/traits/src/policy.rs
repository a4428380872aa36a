//! Execution policy tags.

use core::fmt;

/// How an algorithm may traverse its range.
///
/// Ordered from the most to the least constrained execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PolicyKind {
  /// One thread, elements visited in range order.
  Sequenced = 0,
  /// One thread, element accesses may be interleaved for vectorization.
  Unsequenced = 1,
  /// Elements may be visited concurrently on several threads.
  Parallel = 2,
  /// Concurrent across threads and vectorized within each thread.
  ParallelUnsequenced = 3,
}

impl PolicyKind {
  /// All kinds, in declaration order.
  pub const ALL: [Self; 4] = [Self::Sequenced, Self::Unsequenced, Self::Parallel, Self::ParallelUnsequenced];

  /// Human-readable name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Sequenced => "sequenced",
      Self::Unsequenced => "unsequenced",
      Self::Parallel => "parallel",
      Self::ParallelUnsequenced => "parallel-unsequenced",
    }
  }

  /// Whether work may be spread across threads.
  #[inline]
  #[must_use]
  pub const fn is_parallel(self) -> bool {
    matches!(self, Self::Parallel | Self::ParallelUnsequenced)
  }

  /// Whether element accesses within one thread may be interleaved.
  #[inline]
  #[must_use]
  pub const fn is_vectorized(self) -> bool {
    matches!(self, Self::Unsequenced | Self::ParallelUnsequenced)
  }
}

impl fmt::Display for PolicyKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// A caller-supplied execution policy.
///
/// Policies are stateless tags: their identity selects primitives and
/// customizations at compile time and nothing is stored in the value. A policy
/// is borrowed for the duration of one algorithm call.
///
/// # Example
///
/// ```
/// use traits::{ExecutionPolicy, PolicyKind};
///
/// #[derive(Clone, Copy, Debug)]
/// struct Offload;
///
/// impl ExecutionPolicy for Offload {
///   const KIND: PolicyKind = PolicyKind::Parallel;
///   const NAME: &'static str = "offload";
/// }
///
/// assert!(Offload::KIND.is_parallel());
/// ```
pub trait ExecutionPolicy: Copy + Send + Sync + 'static {
  /// Execution semantics promised by this policy.
  const KIND: PolicyKind;

  /// Diagnostic name, defaults to the kind's name.
  const NAME: &'static str = Self::KIND.name();
}
