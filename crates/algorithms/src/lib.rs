//! Element-replacement algorithms under a caller-supplied execution policy.
//!
//! | Function | Effect |
//! |----------|--------|
//! | [`replace_if`] | Overwrite elements satisfying a predicate |
//! | [`replace`] | Overwrite elements equal to a value |
//! | [`replace_copy_if`] | Copy, substituting elements satisfying a predicate |
//! | [`replace_copy`] | Copy, substituting elements equal to a value |
//!
//! Each algorithm first consults the policy's [`Backend`](backend::Backend)
//! registry. A registered kernel runs instead of the generic implementation;
//! otherwise the generic implementation is composed from lower-level pieces:
//!
//! ```text
//! replace       ──> replace_if      ──> Traversal::for_each
//! replace_copy  ──> replace_copy_if ──> Traversal::transform
//! ```
//!
//! Each arrow is itself a dispatch, so a kernel registered for `replace_if`
//! also serves the generic `replace`.
//!
//! # Example
//!
//! ```
//! use algorithms::replace;
//! use execution::SEQ;
//!
//! let mut data = [1, 2, 3, 2, 5];
//! replace(&SEQ, &mut data, &2, &9)?;
//! assert_eq!(data, [1, 9, 3, 9, 5]);
//! # Ok::<(), algorithms::Error>(())
//! ```
//!
//! # Errors
//!
//! The only recoverable failure is resource exhaustion inside a traversal
//! primitive, reported as [`Error::ResourceExhausted`]. The range may be left
//! partially updated. Precondition violations (an output shorter than the
//! input) panic before any element is touched.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

mod error;
pub mod frontend;
mod replace;

pub use error::Error;
pub use replace::{replace, replace_copy, replace_copy_if, replace_if};
