//! Public entry points.
//!
//! Each wrapper runs the matching [`frontend`] algorithm, which checks the
//! output-length precondition before dispatch, and turns `Err(Exhausted)` into
//! [`Error::ResourceExhausted`].
//! This is the only place the internal completion marker becomes a
//! caller-visible error.

use backend::Backend;
use backend::traits::{Completion, ExecutionPolicy};

use crate::{Error, frontend};

/// Replace every element of `data` for which `pred` returns `true` with `new_value`.
///
/// `pred` may be called more than once per element and, under a parallel
/// policy, concurrently from several threads.
///
/// # Errors
///
/// [`Error::ResourceExhausted`] if the policy could not run the traversal.
/// `data` may be partially updated in that case.
pub fn replace_if<E, T, F>(policy: &E, data: &mut [T], pred: F, new_value: &T) -> Result<(), Error>
where
  E: Backend,
  T: Clone + Send + Sync,
  F: Fn(&T) -> bool + Send + Sync,
{
  finish::<E>("replace_if", frontend::replace_if(policy, data, pred, new_value))
}

/// Replace every element of `data` equal to `old_value` with `new_value`.
///
/// # Errors
///
/// [`Error::ResourceExhausted`] if the policy could not run the traversal.
/// `data` may be partially updated in that case.
pub fn replace<E, T>(policy: &E, data: &mut [T], old_value: &T, new_value: &T) -> Result<(), Error>
where
  E: Backend,
  T: Clone + PartialEq + Send + Sync,
{
  finish::<E>("replace", frontend::replace(policy, data, old_value, new_value))
}

/// Copy `input` into the front of `output`, writing `new_value` in place of
/// every element for which `pred` returns `true`.
///
/// `input` is never modified. Positions of `output` past `input.len()` are
/// left untouched.
///
/// # Panics
///
/// If `output` is shorter than `input`.
///
/// # Errors
///
/// [`Error::ResourceExhausted`] if the policy could not run the traversal.
/// `output` may be partially written in that case.
pub fn replace_copy_if<E, T, F>(policy: &E, input: &[T], output: &mut [T], pred: F, new_value: &T) -> Result<(), Error>
where
  E: Backend,
  T: Clone + Send + Sync,
  F: Fn(&T) -> bool + Send + Sync,
{
  finish::<E>("replace_copy_if", frontend::replace_copy_if(policy, input, output, pred, new_value))
}

/// Copy `input` into the front of `output`, writing `new_value` in place of
/// every element equal to `old_value`.
///
/// # Panics
///
/// If `output` is shorter than `input`.
///
/// # Errors
///
/// [`Error::ResourceExhausted`] if the policy could not run the traversal.
/// `output` may be partially written in that case.
pub fn replace_copy<E, T>(policy: &E, input: &[T], output: &mut [T], old_value: &T, new_value: &T) -> Result<(), Error>
where
  E: Backend,
  T: Clone + PartialEq + Send + Sync,
{
  finish::<E>("replace_copy", frontend::replace_copy(policy, input, output, old_value, new_value))
}

#[inline]
fn finish<E: ExecutionPolicy>(algorithm: &'static str, completion: Completion) -> Result<(), Error> {
  completion.map_err(|_| {
    tracing::debug!(algorithm, policy = E::NAME, "resources exhausted");
    Error::ResourceExhausted { algorithm }
  })
}
