//! The facade exposes everything needed to call and extend the algorithms.

use rsalgo::backend::{Algorithm, DispatchReport, is_customized};
use rsalgo::{PAR_UNSEQ, PolicyKind, Sequenced, UNSEQ, replace_copy, replace_if};

#[test]
fn builtin_policies_are_generic() {
  for algorithm in Algorithm::ALL {
    assert!(!is_customized::<Sequenced>(algorithm));
    assert!(!is_customized::<rsalgo::ParallelUnsequenced>(algorithm));
  }
  let report = DispatchReport::of::<rsalgo::Parallel>();
  assert_eq!(report.policy, "parallel");
  assert_eq!(report.kernel(Algorithm::ReplaceCopy), "generic");
}

#[test]
fn policy_kinds() {
  use rsalgo::ExecutionPolicy;
  assert_eq!(rsalgo::Unsequenced::KIND, PolicyKind::Unsequenced);
  assert!(rsalgo::Parallel::KIND.is_parallel());
}

#[test]
fn end_to_end() {
  let mut data: Vec<u64> = (0..10_000).collect();
  replace_if(&PAR_UNSEQ, &mut data, |e| e % 2 == 1, &0).unwrap();
  assert!(data.iter().enumerate().all(|(i, &e)| if i % 2 == 1 { e == 0 } else { e == i as u64 }));

  let mut out = vec![1u64; data.len()];
  replace_copy(&UNSEQ, &data, &mut out, &0, &7).unwrap();
  assert_eq!(out.iter().filter(|&&e| e == 7).count(), 5_000 + 1);
}
