//! Pool-backed traversal.

use rayon::{ThreadPool, prelude::*};

use crate::ExecutionTunables;

#[inline]
pub(crate) fn for_each<T, F>(pool: &ThreadPool, tunables: &ExecutionTunables, data: &mut [T], f: F)
where
  T: Send,
  F: Fn(&mut T) + Send + Sync,
{
  let min_len = tunables.min_len;
  pool.install(|| data.par_iter_mut().with_min_len(min_len).for_each(&f));
}

/// Work is split at chunk granularity; each chunk runs a serial inner loop.
#[inline]
pub(crate) fn for_each_chunked<T, F>(pool: &ThreadPool, tunables: &ExecutionTunables, data: &mut [T], f: F)
where
  T: Send,
  F: Fn(&mut T) + Send + Sync,
{
  let chunk_len = tunables.chunk_len.max(1);
  let min_chunks = tunables.min_chunks();
  pool.install(|| {
    data.par_chunks_mut(chunk_len).with_min_len(min_chunks).for_each(|chunk| chunk.iter_mut().for_each(&f));
  });
}

#[inline]
pub(crate) fn transform<T, U, F>(pool: &ThreadPool, tunables: &ExecutionTunables, input: &[T], output: &mut [U], f: F)
where
  T: Sync,
  U: Send,
  F: Fn(&T) -> U + Send + Sync,
{
  let min_len = tunables.min_len;
  pool.install(|| {
    output.par_iter_mut().zip(input.par_iter()).with_min_len(min_len).for_each(|(out, value)| *out = f(value));
  });
}

#[inline]
pub(crate) fn transform_chunked<T, U, F>(
  pool: &ThreadPool,
  tunables: &ExecutionTunables,
  input: &[T],
  output: &mut [U],
  f: F,
) where
  T: Sync,
  U: Send,
  F: Fn(&T) -> U + Send + Sync,
{
  let chunk_len = tunables.chunk_len.max(1);
  let min_chunks = tunables.min_chunks();
  pool.install(|| {
    output.par_chunks_mut(chunk_len).zip(input.par_chunks(chunk_len)).with_min_len(min_chunks).for_each(
      |(outs, values)| {
        for (out, value) in outs.iter_mut().zip(values) {
          *out = f(value);
        }
      },
    );
  });
}
