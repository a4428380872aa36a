//! Internal failure signaling.
//!
//! Every internal algorithm step returns a [`Completion`]. The marker carries
//! no payload: it only records whether the whole range was processed.

use core::fmt;

/// A traversal primitive could not obtain the resources it needed.
///
/// Returned when, e.g., the parallel worker pool could not be created. The
/// range may have been partially processed; no progress is tracked.
///
/// # Examples
///
/// ```
/// use traits::{Completion, Exhausted};
///
/// fn traverse(workers_available: bool) -> Completion {
///   if workers_available { Ok(()) } else { Err(Exhausted::new()) }
/// }
///
/// assert!(traverse(true).is_ok());
/// assert_eq!(traverse(false), Err(Exhausted));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exhausted;

impl Exhausted {
  /// Create a new exhaustion marker.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for Exhausted {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for Exhausted {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("resources exhausted")
  }
}

impl core::error::Error for Exhausted {}

/// Optional completion marker.
///
/// `Ok(())` means the operation completed over the whole range; `Err(Exhausted)`
/// means some internal step could not complete.
pub type Completion = Result<(), Exhausted>;

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(Exhausted::new().to_string(), "resources exhausted");
  }

  #[test]
  fn debug_impl() {
    assert_eq!(format!("{:?}", Exhausted::new()), "Exhausted");
  }

  #[test]
  fn default_matches_new() {
    let err: Exhausted = Default::default();
    assert_eq!(err, Exhausted::new());
  }

  #[test]
  fn size_is_zero() {
    assert_eq!(core::mem::size_of::<Exhausted>(), 0);
  }

  #[test]
  fn completion_propagates_with_question_mark() {
    fn leaf(ok: bool) -> Completion {
      if ok { Ok(()) } else { Err(Exhausted) }
    }

    fn composed(ok: bool) -> Completion {
      leaf(true)?;
      leaf(ok)?;
      Ok(())
    }

    assert_eq!(composed(true), Ok(()));
    assert_eq!(composed(false), Err(Exhausted));
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send::<Exhausted>();
    assert_sync::<Exhausted>();
    assert_error::<Exhausted>();
  }
}
