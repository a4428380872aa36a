//! Backend crate: customization-point dispatch for rsalgo.
//!
//! Every rsalgo algorithm first asks the active execution policy whether a
//! specialized kernel is registered for it. If one is, the kernel runs and the
//! portable implementation is never invoked; otherwise the algorithm's generic
//! fallback runs. The decision is made by the type system, not at run time.
//!
//! # Architecture
//!
//! - [`Algorithm`]: identity of each customization point
//! - [`Slot`]: compile-time registration state, either [`Absent`] or [`Registered<K>`]
//! - Kernel traits ([`ReplaceIfKernel`], ...): the signature a registered kernel implements
//! - Slot traits ([`ReplaceIfSlot`], ...): `dispatch(args, fallback)` for one algorithm
//! - [`Backend`]: the per-policy registry, one slot type per algorithm
//!
//! # Registering a Kernel
//!
//! ```ignore
//! use backend::{Absent, Backend, Kernel, Registered, ReplaceIfKernel};
//!
//! struct OffloadReplaceIf;
//!
//! impl Kernel for OffloadReplaceIf {
//!   const NAME: &'static str = "offload/replace_if";
//! }
//!
//! impl ReplaceIfKernel<Offload> for OffloadReplaceIf {
//!   fn replace_if<T, F>(policy: &Offload, data: &mut [T], pred: F, new_value: &T) -> Completion
//!   where
//!     T: Clone + Send + Sync,
//!     F: Fn(&T) -> bool + Send + Sync,
//!   {
//!     // hand-tuned implementation
//!   }
//! }
//!
//! impl Backend for Offload {
//!   type ReplaceIf = Registered<OffloadReplaceIf>;
//!   type Replace = Absent;
//!   type ReplaceCopyIf = Absent;
//!   type ReplaceCopy = Absent;
//! }
//! ```
//!
//! Policies without any customization use [`generic_backend!`].
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

pub mod dispatch;
pub mod introspect;
pub mod points;
mod registry;

pub use dispatch::{Absent, Algorithm, Kernel, Registered, Slot};
pub use introspect::{DispatchReport, is_customized};
pub use points::{
  ReplaceCopyIfKernel, ReplaceCopyIfSlot, ReplaceCopyKernel, ReplaceCopySlot, ReplaceIfKernel, ReplaceIfSlot,
  ReplaceKernel, ReplaceSlot,
};
pub use registry::Backend;
// Re-export the contracts so algorithm and backend crates need one import.
pub use traits;
