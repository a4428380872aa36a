//! Caller-visible error type.

use thiserror::Error;

/// Failure reported by the public algorithm entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
  /// A traversal primitive could not obtain the resources it needed.
  ///
  /// The range may have been partially updated.
  #[error("{algorithm}: resources exhausted")]
  ResourceExhausted {
    /// Public name of the algorithm that failed.
    algorithm: &'static str,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_names_algorithm() {
    let err = Error::ResourceExhausted { algorithm: "replace_copy" };
    assert_eq!(err.to_string(), "replace_copy: resources exhausted");
  }

  #[test]
  fn is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<Error>();
  }
}
