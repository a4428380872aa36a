//! Built-in execution policy tags and their primitives.

use rayon::ThreadPool;
use traits::{Completion, ExecutionPolicy, PolicyKind, Traversal};

use crate::{ExecutionConfig, ExecutionTunables, config, parallel, pool, serial};

/// Elements are visited one at a time, in range order, on the calling thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequenced;

/// Calling thread only; element accesses may be interleaved for vectorization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unsequenced;

/// Elements may be visited concurrently on the worker pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Parallel;

/// Concurrent across workers, vectorizable within each worker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParallelUnsequenced;

/// The [`Sequenced`] policy value.
pub const SEQ: Sequenced = Sequenced;
/// The [`Unsequenced`] policy value.
pub const UNSEQ: Unsequenced = Unsequenced;
/// The [`Parallel`] policy value.
pub const PAR: Parallel = Parallel;
/// The [`ParallelUnsequenced`] policy value.
pub const PAR_UNSEQ: ParallelUnsequenced = ParallelUnsequenced;

impl ExecutionPolicy for Sequenced {
  const KIND: PolicyKind = PolicyKind::Sequenced;
}

impl ExecutionPolicy for Unsequenced {
  const KIND: PolicyKind = PolicyKind::Unsequenced;
}

impl ExecutionPolicy for Parallel {
  const KIND: PolicyKind = PolicyKind::Parallel;
}

impl ExecutionPolicy for ParallelUnsequenced {
  const KIND: PolicyKind = PolicyKind::ParallelUnsequenced;
}

backend::generic_backend!(Sequenced, Unsequenced, Parallel, ParallelUnsequenced);

// ─────────────────────────────────────────────────────────────────────────────
// Primitives
// ─────────────────────────────────────────────────────────────────────────────

impl Traversal for Sequenced {
  #[inline]
  fn for_each<T, F>(&self, data: &mut [T], f: F) -> Completion
  where
    T: Send,
    F: Fn(&mut T) + Send + Sync,
  {
    serial::for_each(data, f);
    Ok(())
  }

  #[inline]
  fn transform<T, U, F>(&self, input: &[T], output: &mut [U], f: F) -> Completion
  where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Send + Sync,
  {
    serial::transform(input, output, f);
    Ok(())
  }
}

impl Traversal for Unsequenced {
  #[inline]
  fn for_each<T, F>(&self, data: &mut [T], f: F) -> Completion
  where
    T: Send,
    F: Fn(&mut T) + Send + Sync,
  {
    serial::for_each_chunked(data, config::get().tunables.chunk_len, f);
    Ok(())
  }

  #[inline]
  fn transform<T, U, F>(&self, input: &[T], output: &mut [U], f: F) -> Completion
  where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Send + Sync,
  {
    serial::transform_chunked(input, output, config::get().tunables.chunk_len, f);
    Ok(())
  }
}

/// Where a parallel policy runs a range of a given length.
enum Plan<'p> {
  /// Calling thread: empty, short, or forced-sequential ranges.
  Inline(ExecutionTunables),
  /// The shared worker pool.
  Pool(&'p ThreadPool, ExecutionTunables),
}

/// Pick the execution site for `len` elements on the shared pool.
fn plan(len: usize) -> Result<Plan<'static>, traits::Exhausted> {
  plan_with(config::get(), len, pool::pool)
}

/// The pool is only consulted (and built) when it will actually be used, so
/// short ranges never report exhaustion.
fn plan_with<'p>(
  config: ExecutionConfig,
  len: usize,
  pool: impl FnOnce() -> Result<&'p ThreadPool, traits::Exhausted>,
) -> Result<Plan<'p>, traits::Exhausted> {
  if !config.uses_pool(len) {
    return Ok(Plan::Inline(config.tunables));
  }
  Ok(Plan::Pool(pool()?, config.tunables))
}

impl Traversal for Parallel {
  fn for_each<T, F>(&self, data: &mut [T], f: F) -> Completion
  where
    T: Send,
    F: Fn(&mut T) + Send + Sync,
  {
    match plan(data.len())? {
      Plan::Inline(_) => serial::for_each(data, f),
      Plan::Pool(pool, tunables) => parallel::for_each(pool, &tunables, data, f),
    }
    Ok(())
  }

  fn transform<T, U, F>(&self, input: &[T], output: &mut [U], f: F) -> Completion
  where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Send + Sync,
  {
    match plan(input.len())? {
      Plan::Inline(_) => serial::transform(input, output, f),
      Plan::Pool(pool, tunables) => parallel::transform(pool, &tunables, input, output, f),
    }
    Ok(())
  }
}

impl Traversal for ParallelUnsequenced {
  fn for_each<T, F>(&self, data: &mut [T], f: F) -> Completion
  where
    T: Send,
    F: Fn(&mut T) + Send + Sync,
  {
    match plan(data.len())? {
      Plan::Inline(tunables) => serial::for_each_chunked(data, tunables.chunk_len, f),
      Plan::Pool(pool, tunables) => parallel::for_each_chunked(pool, &tunables, data, f),
    }
    Ok(())
  }

  fn transform<T, U, F>(&self, input: &[T], output: &mut [U], f: F) -> Completion
  where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Send + Sync,
  {
    match plan(input.len())? {
      Plan::Inline(tunables) => serial::transform_chunked(input, output, tunables.chunk_len, f),
      Plan::Pool(pool, tunables) => parallel::transform_chunked(pool, &tunables, input, output, f),
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kinds_match_tags() {
    assert_eq!(Sequenced::KIND, PolicyKind::Sequenced);
    assert_eq!(Unsequenced::KIND, PolicyKind::Unsequenced);
    assert_eq!(Parallel::KIND, PolicyKind::Parallel);
    assert_eq!(ParallelUnsequenced::KIND, PolicyKind::ParallelUnsequenced);
    assert_eq!(PAR_UNSEQ, ParallelUnsequenced);
    assert_eq!(Parallel::NAME, "parallel");
  }

  #[test]
  fn policies_are_stateless() {
    assert_eq!(core::mem::size_of::<Sequenced>(), 0);
    assert_eq!(core::mem::size_of::<Unsequenced>(), 0);
    assert_eq!(core::mem::size_of::<Parallel>(), 0);
    assert_eq!(core::mem::size_of::<ParallelUnsequenced>(), 0);
  }

  #[test]
  fn empty_range_plans_inline() {
    assert!(matches!(plan(0), Ok(Plan::Inline(_))));
  }

  fn auto_config() -> ExecutionConfig {
    ExecutionConfig::from_lookup(|_: &str| None, 8)
  }

  #[test]
  fn failed_pool_exhausts_large_ranges() {
    let config = auto_config();
    let failed = pool::tests::failed_build();
    let threshold = config.tunables.parallel_threshold;

    assert!(matches!(plan_with(config, threshold, || pool::outcome(&failed)), Err(traits::Exhausted)));
    assert!(matches!(plan_with(config, threshold * 4, || pool::outcome(&failed)), Err(traits::Exhausted)));
  }

  #[test]
  fn failed_pool_leaves_short_ranges_inline() {
    let config = auto_config();
    let failed = pool::tests::failed_build();

    assert!(matches!(plan_with(config, 0, || pool::outcome(&failed)), Ok(Plan::Inline(_))));
    let below = config.tunables.parallel_threshold - 1;
    assert!(matches!(plan_with(config, below, || pool::outcome(&failed)), Ok(Plan::Inline(_))));
  }

  #[test]
  fn short_ranges_never_consult_pool() {
    let plan = plan_with(auto_config(), 1, || panic!("pool consulted for a short range"));
    assert!(matches!(plan, Ok(Plan::Inline(_))));
  }

  #[test]
  fn forced_sequential_never_consults_pool() {
    let config = ExecutionConfig::from_lookup(|name: &str| (name == "RSALGO_FORCE").then(|| "sequential".to_string()), 8);
    let plan = plan_with(config, 1 << 20, || panic!("pool consulted under forced sequential"));
    assert!(matches!(plan, Ok(Plan::Inline(_))));
  }

  #[test]
  fn built_in_policies_customize_nothing() {
    use backend::{Algorithm, is_customized};

    for algorithm in Algorithm::ALL {
      assert!(!is_customized::<Sequenced>(algorithm));
      assert!(!is_customized::<Unsequenced>(algorithm));
      assert!(!is_customized::<Parallel>(algorithm));
      assert!(!is_customized::<ParallelUnsequenced>(algorithm));
    }
  }
}
