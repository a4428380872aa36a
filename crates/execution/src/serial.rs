//! Calling-thread traversal.

#[inline]
pub(crate) fn for_each<T, F>(data: &mut [T], f: F)
where
  F: Fn(&mut T),
{
  data.iter_mut().for_each(f);
}

/// Fixed-size chunks with a tight inner loop the compiler can vectorize.
#[inline]
pub(crate) fn for_each_chunked<T, F>(data: &mut [T], chunk_len: usize, f: F)
where
  F: Fn(&mut T),
{
  for chunk in data.chunks_mut(chunk_len.max(1)) {
    chunk.iter_mut().for_each(&f);
  }
}

#[inline]
pub(crate) fn transform<T, U, F>(input: &[T], output: &mut [U], f: F)
where
  F: Fn(&T) -> U,
{
  for (out, value) in output.iter_mut().zip(input) {
    *out = f(value);
  }
}

#[inline]
pub(crate) fn transform_chunked<T, U, F>(input: &[T], output: &mut [U], chunk_len: usize, f: F)
where
  F: Fn(&T) -> U,
{
  let chunk_len = chunk_len.max(1);
  for (outs, values) in output.chunks_mut(chunk_len).zip(input.chunks(chunk_len)) {
    for (out, value) in outs.iter_mut().zip(values) {
      *out = f(value);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn for_each_visits_in_order() {
    let mut data: Vec<usize> = (0..5).collect();
    let seen = std::cell::RefCell::new(Vec::new());
    for_each(&mut data, |e| seen.borrow_mut().push(*e));
    assert_eq!(seen.into_inner(), vec![0, 1, 2, 3, 4]);
  }

  #[test]
  fn chunked_covers_ragged_tail() {
    let mut data: Vec<u32> = (0..10).collect();
    for_each_chunked(&mut data, 4, |e| *e *= 2);
    assert_eq!(data, (0..10).map(|x| x * 2).collect::<Vec<_>>());
  }

  #[test]
  fn chunked_tolerates_zero_chunk() {
    let mut data = [1, 2, 3];
    for_each_chunked(&mut data, 0, |e| *e += 1);
    assert_eq!(data, [2, 3, 4]);
  }

  #[test]
  fn transform_leaves_output_tail_untouched() {
    let input = [1, 2, 3];
    let mut output = [0, 0, 0, 7, 7];
    transform(&input, &mut output, |x| x * 10);
    assert_eq!(output, [10, 20, 30, 7, 7]);

    let mut output = [0, 0, 0, 7, 7];
    transform_chunked(&input, &mut output, 2, |x| x * 10);
    assert_eq!(output, [10, 20, 30, 7, 7]);
  }
}
