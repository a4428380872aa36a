//! Built-in execution policies for rsalgo.
//!
//! | Policy | Constant | Traversal |
//! |--------|----------|-----------|
//! | [`Sequenced`] | [`SEQ`] | In-order loop on the calling thread |
//! | [`Unsequenced`] | [`UNSEQ`] | Chunked loop on the calling thread |
//! | [`Parallel`] | [`PAR`] | rayon work-stealing over the worker pool |
//! | [`ParallelUnsequenced`] | [`PAR_UNSEQ`] | rayon over chunks, chunked inner loop |
//!
//! None of the built-in policies registers a custom kernel: every algorithm
//! runs its generic fallback over these primitives.
//!
//! # Worker Pool
//!
//! Parallel policies share one rayon pool, built on first use. If it cannot
//! be built, every parallel traversal of a non-empty range reports
//! [`Exhausted`](traits::Exhausted). Ranges below the parallel threshold run on
//! the calling thread and never touch the pool.
//!
//! # Configuration
//!
//! See [`config`] for the `RSALGO_*` environment overrides.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

pub mod config;
mod parallel;
mod policy;
mod pool;
mod serial;

pub use config::{ExecutionConfig, ExecutionForce, ExecutionTunables};
pub use policy::{PAR, PAR_UNSEQ, Parallel, ParallelUnsequenced, SEQ, Sequenced, UNSEQ, Unsequenced};
pub use pool::worker_threads;
