//! Lazily built worker pool shared by the parallel policies.

use std::sync::OnceLock;

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use traits::Exhausted;

use crate::config;

static POOL: OnceLock<Result<ThreadPool, ThreadPoolBuildError>> = OnceLock::new();

fn build(threads: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
  report(ThreadPoolBuilder::new().num_threads(threads).thread_name(|i| format!("rsalgo-worker-{i}")).build())
}

/// Log the outcome of a pool build. Runs once per process for the shared pool.
fn report(built: Result<ThreadPool, ThreadPoolBuildError>) -> Result<ThreadPool, ThreadPoolBuildError> {
  match &built {
    Ok(pool) => tracing::debug!(threads = pool.current_num_threads(), "worker pool ready"),
    Err(err) => tracing::warn!(error = %err, "worker pool could not be built; parallel traversals will report exhaustion"),
  }
  built
}

/// Map a cached build result to what a traversal sees.
#[inline]
pub(crate) fn outcome(built: &Result<ThreadPool, ThreadPoolBuildError>) -> Result<&ThreadPool, Exhausted> {
  built.as_ref().map_err(|_| Exhausted)
}

/// The shared pool, built on first call.
///
/// A failed build is cached: the pool is attempted once per process.
pub(crate) fn pool() -> Result<&'static ThreadPool, Exhausted> {
  outcome(POOL.get_or_init(|| build(config::get().tunables.threads)))
}

/// Number of worker threads, or `None` if the pool is unavailable.
///
/// Builds the pool if no parallel traversal has done so yet.
#[must_use]
pub fn worker_threads() -> Option<usize> {
  pool().ok().map(ThreadPool::current_num_threads)
}
