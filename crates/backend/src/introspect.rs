//! Dispatch introspection for verifying customization.
//!
//! These helpers read the registry at compile time; they never run a kernel.
//!
//! # Examples
//!
//! ```ignore
//! use backend::DispatchReport;
//!
//! println!("{}", DispatchReport::of::<execution::Parallel>());
//! // parallel: replace_if=generic replace=generic replace_copy_if=generic replace_copy=generic
//! ```

use core::fmt;

use crate::{Algorithm, Backend, Slot};

/// Which implementation each algorithm resolves to under one policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatchReport {
  /// Policy name.
  pub policy: &'static str,
  replace_if: &'static str,
  replace: &'static str,
  replace_copy_if: &'static str,
  replace_copy: &'static str,
}

impl DispatchReport {
  /// Build the report for policy `E`.
  #[inline]
  #[must_use]
  pub const fn of<E: Backend>() -> Self {
    Self {
      policy: E::NAME,
      replace_if: <E::ReplaceIf as Slot>::NAME,
      replace: <E::Replace as Slot>::NAME,
      replace_copy_if: <E::ReplaceCopyIf as Slot>::NAME,
      replace_copy: <E::ReplaceCopy as Slot>::NAME,
    }
  }

  /// Implementation name selected for `algorithm`.
  #[inline]
  #[must_use]
  pub const fn kernel(&self, algorithm: Algorithm) -> &'static str {
    match algorithm {
      Algorithm::ReplaceIf => self.replace_if,
      Algorithm::Replace => self.replace,
      Algorithm::ReplaceCopyIf => self.replace_copy_if,
      Algorithm::ReplaceCopy => self.replace_copy,
    }
  }
}

impl fmt::Display for DispatchReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.policy)?;
    f.write_str(":")?;
    for algorithm in Algorithm::ALL {
      write!(f, " {}={}", algorithm.name(), self.kernel(algorithm))?;
    }
    Ok(())
  }
}

/// Whether policy `E` registers its own kernel for `algorithm`.
#[inline]
#[must_use]
pub const fn is_customized<E: Backend>(algorithm: Algorithm) -> bool {
  match algorithm {
    Algorithm::ReplaceIf => <E::ReplaceIf as Slot>::REGISTERED,
    Algorithm::Replace => <E::Replace as Slot>::REGISTERED,
    Algorithm::ReplaceCopyIf => <E::ReplaceCopyIf as Slot>::REGISTERED,
    Algorithm::ReplaceCopy => <E::ReplaceCopy as Slot>::REGISTERED,
  }
}
