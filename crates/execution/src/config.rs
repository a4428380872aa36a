//! Execution runtime configuration (overrides + thresholds).
//!
//! This module centralizes the knobs of the built-in policies:
//! - worker pool size
//! - range length below which parallel policies stay on the calling thread
//! - per-task and per-chunk granularity
//! - optional forced sequential execution
//!
//! # Environment
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `RSALGO_FORCE` | `auto` or `sequential` (`serial`, `seq`) | `auto` |
//! | `RSALGO_THREADS` | Worker pool size, `0` = rayon default | `0` |
//! | `RSALGO_PARALLEL_THRESHOLD` | Minimum elements for the pool to be used | `2048` |
//! | `RSALGO_MIN_LEN` | Minimum elements per parallel task | `512` |
//! | `RSALGO_CHUNK` | Elements per unsequenced chunk | `64` |
//!
//! Values that fail to parse are ignored. Overrides are read once per process.
//!
//! Forcing sequential execution never changes results: every algorithm
//! produces the same output under every policy.

use std::sync::OnceLock;

/// Forced execution mode for parallel policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExecutionForce {
  /// Parallel policies use the worker pool for large ranges.
  #[default]
  Auto,
  /// Parallel policies traverse on the calling thread.
  Sequential,
}

impl ExecutionForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Sequential => "sequential",
    }
  }

  /// Parse a force mode name (case-insensitive).
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("sequential") || value.eq_ignore_ascii_case("serial") || value.eq_ignore_ascii_case("seq")
    {
      return Some(Self::Sequential);
    }
    None
  }
}

/// Granularity tunables for the built-in policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionTunables {
  /// Worker pool size; `0` lets rayon pick.
  pub threads: usize,
  /// Ranges shorter than this run on the calling thread under parallel policies.
  pub parallel_threshold: usize,
  /// Minimum elements handed to one parallel task.
  pub min_len: usize,
  /// Elements per chunk for unsequenced traversal. Always at least 1.
  pub chunk_len: usize,
}

impl ExecutionTunables {
  /// Defaults used when no override is present.
  pub const DEFAULT: Self = Self { threads: 0, parallel_threshold: 2048, min_len: 512, chunk_len: 64 };

  /// Minimum number of chunks handed to one parallel task.
  #[inline]
  #[must_use]
  pub const fn min_chunks(&self) -> usize {
    match self.min_len.checked_div(self.chunk_len) {
      Some(0) | None => 1,
      Some(chunks) => chunks,
    }
  }
}

impl Default for ExecutionTunables {
  fn default() -> Self {
    Self::DEFAULT
  }
}

/// Full execution configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionConfig {
  /// Requested force mode (env/programmatic).
  pub requested_force: ExecutionForce,
  /// Force mode after accounting for the available parallelism.
  pub effective_force: ExecutionForce,
  /// Thresholds and pool settings used by the traversal primitives.
  pub tunables: ExecutionTunables,
}

impl ExecutionConfig {
  /// Build a configuration from an arbitrary variable lookup.
  ///
  /// `available` is the hardware parallelism; with a single hardware thread
  /// (or a one-thread pool) parallel policies are clamped to sequential.
  #[must_use]
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, available: usize) -> Self {
    resolve(Overrides::from_lookup(lookup), available)
  }

  /// Whether parallel policies should use the worker pool for a range of `len` elements.
  #[inline]
  #[must_use]
  pub const fn uses_pool(&self, len: usize) -> bool {
    matches!(self.effective_force, ExecutionForce::Auto) && len >= self.tunables.parallel_threshold && len > 0
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: ExecutionForce,
  threads: Option<usize>,
  parallel_threshold: Option<usize>,
  min_len: Option<usize>,
  chunk_len: Option<usize>,
}

impl Overrides {
  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let parse_usize = |name: &str| -> Option<usize> {
      let value = lookup(name)?;
      let value = value.trim();
      if value.is_empty() {
        return None;
      }
      value.parse::<usize>().ok()
    };

    Self {
      force: lookup("RSALGO_FORCE").and_then(|v| ExecutionForce::parse(&v)).unwrap_or_default(),
      threads: parse_usize("RSALGO_THREADS"),
      parallel_threshold: parse_usize("RSALGO_PARALLEL_THRESHOLD"),
      min_len: parse_usize("RSALGO_MIN_LEN"),
      chunk_len: parse_usize("RSALGO_CHUNK"),
    }
  }
}

fn overrides() -> Overrides {
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(|| Overrides::from_lookup(|name| std::env::var(name).ok()))
}

fn available_parallelism() -> usize {
  std::thread::available_parallelism().map_or(1, |n| n.get())
}

#[must_use]
fn resolve(ov: Overrides, available: usize) -> ExecutionConfig {
  let mut tunables = ExecutionTunables::DEFAULT;
  if let Some(v) = ov.threads {
    tunables.threads = v;
  }
  if let Some(v) = ov.parallel_threshold {
    tunables.parallel_threshold = v;
  }
  if let Some(v) = ov.min_len {
    tunables.min_len = v;
  }
  if let Some(v) = ov.chunk_len {
    tunables.chunk_len = v;
  }

  // Zero-length chunks are meaningless.
  if tunables.chunk_len == 0 {
    tunables.chunk_len = 1;
  }
  if tunables.min_len == 0 {
    tunables.min_len = 1;
  }

  let requested_force = ov.force;
  let single_worker = tunables.threads == 1 || (tunables.threads == 0 && available <= 1);
  let effective_force = if single_worker { ExecutionForce::Sequential } else { requested_force };

  ExecutionConfig { requested_force, effective_force, tunables }
}

/// Get the effective execution configuration for this process.
#[inline]
#[must_use]
pub fn get() -> ExecutionConfig {
  static CONFIG: OnceLock<ExecutionConfig> = OnceLock::new();
  *CONFIG.get_or_init(|| {
    let config = resolve(overrides(), available_parallelism());
    tracing::debug!(
      requested_force = config.requested_force.as_str(),
      effective_force = config.effective_force.as_str(),
      threads = config.tunables.threads,
      parallel_threshold = config.tunables.parallel_threshold,
      min_len = config.tunables.min_len,
      chunk_len = config.tunables.chunk_len,
      "execution config resolved"
    );
    config
  })
}
