//! Core contracts for rsalgo.
//!
//! This crate defines the vocabulary shared by every other rsalgo crate. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Contracts
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`ExecutionPolicy`] | Stateless tag selecting how a range is traversed |
//! | [`PolicyKind`] | Sequenced / unsequenced / parallel / parallel-unsequenced |
//! | [`Traversal`] | The element-wise `for_each` and `transform` primitives a policy provides |
//! | [`Completion`] | Binary success marker threaded through internal composition |
//!
//! # Failure Signaling
//!
//! Internal layers never panic or unwind to report a failed traversal. They
//! return [`Completion`], which is either `Ok(())` (the whole range was
//! processed) or `Err(`[`Exhausted`]`)` (a primitive could not obtain the
//! resources it needed). Conversion into a caller-facing error happens only at
//! the public algorithm entry points.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod policy;
mod traversal;

pub use error::{Completion, Exhausted};
pub use policy::{ExecutionPolicy, PolicyKind};
pub use traversal::Traversal;
