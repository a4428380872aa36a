//! Parallel element-replacement algorithms with pluggable execution backends.
//!
//! `rsalgo` runs `replace`, `replace_if`, `replace_copy` and `replace_copy_if`
//! under a caller-chosen execution policy. A policy may register its own
//! kernel for any algorithm; otherwise a portable implementation built on the
//! policy's traversal primitives runs.
//!
//! # Quick Start
//!
//! ```
//! use rsalgo::{PAR, SEQ, replace, replace_copy_if};
//!
//! let mut data = [1, 2, 3, 2, 5];
//! replace(&SEQ, &mut data, &2, &9)?;
//! assert_eq!(data, [1, 9, 3, 9, 5]);
//!
//! let input = [1, 2, 3];
//! let mut output = [0; 3];
//! replace_copy_if(&PAR, &input, &mut output, |e| e % 2 == 0, &0)?;
//! assert_eq!(output, [1, 0, 3]);
//! # Ok::<(), rsalgo::Error>(())
//! ```
//!
//! # Policies
//!
//! | Constant | Traversal |
//! |----------|-----------|
//! | [`SEQ`] | In order, calling thread |
//! | [`UNSEQ`] | Calling thread, chunked for vectorization |
//! | [`PAR`] | rayon worker pool |
//! | [`PAR_UNSEQ`] | rayon worker pool, chunked per task |
//!
//! # Custom Backends
//!
//! Implement [`Traversal`] and [`Backend`] for your own policy type. Slots set
//! to [`Registered<K>`](crate::backend::Registered) route that algorithm to kernel
//! `K`; [`Absent`](crate::backend::Absent) slots use the generic path. See the
//! [`backend`](crate::backend) module for the kernel traits.
//!
//! # Errors
//!
//! Every entry point returns `Result<(), Error>`. The only error today is
//! [`Error::ResourceExhausted`], raised when a traversal primitive could not
//! obtain the resources it needed (for example, the worker pool failed to
//! start).
//!
//! # Configuration
//!
//! | Variable | Default | Effect |
//! |----------|---------|--------|
//! | `RSALGO_FORCE` | `auto` | `sequential` runs parallel policies on the calling thread |
//! | `RSALGO_THREADS` | rayon default | Worker pool size |
//! | `RSALGO_PARALLEL_THRESHOLD` | 2048 | Minimum range length that uses the pool |
//! | `RSALGO_MIN_LEN` | 512 | Minimum elements per parallel task |
//! | `RSALGO_CHUNK` | 64 | Elements per unsequenced chunk |

pub use algorithms::{Error, frontend, replace, replace_copy, replace_copy_if, replace_if};
pub use execution::{
  ExecutionConfig, ExecutionForce, ExecutionTunables, PAR, PAR_UNSEQ, Parallel, ParallelUnsequenced, SEQ, Sequenced,
  UNSEQ, Unsequenced, config, worker_threads,
};
pub use traits::{Completion, ExecutionPolicy, Exhausted, PolicyKind, Traversal};

/// Customization-point machinery for writing backends.
pub mod backend {
  pub use ::backend::{
    Absent, Algorithm, Backend, DispatchReport, Kernel, Registered, ReplaceCopyIfKernel, ReplaceCopyIfSlot,
    ReplaceCopyKernel, ReplaceCopySlot, ReplaceIfKernel, ReplaceIfSlot, ReplaceKernel, ReplaceSlot, Slot,
    generic_backend, is_customized,
  };
}

pub use self::backend::Backend;
