use rand::Rng;

use super::{pages, random_sequence, rng};
use crate::config::PagingConfig;
use crate::memory::{PageId, PagingManager, ReplacementPolicyKind, SimulationTrace};
use crate::workload::{DEFAULT_REFERENCE_STRING, parse_reference_string};

fn run(policy: ReplacementPolicyKind, frames: usize, sequence: &[PageId]) -> SimulationTrace {
    let config = PagingConfig::new(policy, frames).unwrap();
    PagingManager::run(&config, sequence).unwrap()
}

#[test]
fn fifo_golden_trace() {
    let trace = run(ReplacementPolicyKind::Fifo, 3, &pages(&[7, 0, 1, 2, 0, 3, 0, 4]));

    assert_eq!(trace.fault_steps(), vec![1, 2, 3, 4, 6, 7, 8]);
    assert_eq!(trace.cumulative_faults(), vec![1, 2, 3, 4, 4, 5, 6, 7]);

    let last = &trace.steps[7];
    assert_eq!(last.frames, vec![Some(PageId(4)), Some(PageId(3)), Some(PageId(0))]);
    assert_eq!(last.evicted, Some(PageId(2)));
    assert_eq!(last.action, "replaced 2 with 4");
    assert!(trace.steps[4].action.is_empty());
}

#[test]
fn lru_evicts_least_recently_used() {
    let trace = run(ReplacementPolicyKind::Lru, 3, &pages(&[1, 2, 3, 1, 4]));
    let last = &trace.steps[4];
    assert!(last.faulted);
    assert_eq!(last.evicted, Some(PageId(2)));
    assert_eq!(last.frames, vec![Some(PageId(1)), Some(PageId(4)), Some(PageId(3))]);
}

#[test]
fn optimal_prefers_pages_never_used_again() {
    let trace = run(ReplacementPolicyKind::Optimal, 3, &pages(&[1, 2, 3, 4, 1, 2]));
    assert_eq!(trace.steps[3].evicted, Some(PageId(3)));
    assert_eq!(trace.fault_count(), 4);
}

#[test]
fn default_reference_string_fault_counts() {
    let sequence = parse_reference_string(DEFAULT_REFERENCE_STRING).unwrap();
    let faults = |policy| run(policy, 3, &sequence).fault_count();

    assert_eq!(faults(ReplacementPolicyKind::Fifo), 15);
    assert_eq!(faults(ReplacementPolicyKind::Lru), 12);
    assert_eq!(faults(ReplacementPolicyKind::Optimal), 9);
}

#[test]
fn empty_sequence_yields_empty_trace() {
    for policy in ReplacementPolicyKind::ALL {
        let trace = run(policy, 3, &[]);
        assert!(trace.is_empty());
        assert_eq!(trace.fault_count(), 0);
        assert_eq!(trace.fault_rate(), 0.0);
    }
}

#[test]
fn single_frame_faults_on_every_change() {
    let sequence = pages(&[1, 1, 2, 2, 1, 3]);
    for policy in ReplacementPolicyKind::ALL {
        assert_eq!(run(policy, 1, &sequence).fault_steps(), vec![1, 3, 5, 6], "{}", policy);
    }
}

#[test]
fn faults_plus_hits_equal_length() {
    let mut rng = rng(0x5eed);
    for _ in 0..50 {
        let sequence = random_sequence(&mut rng, 40, 8);
        for frames in 1..=5 {
            for trace in PagingManager::compare(frames, &sequence).unwrap() {
                assert_eq!(trace.fault_count() + trace.hit_count(), sequence.len());
                assert!((trace.fault_rate() + trace.hit_rate() - 100.0).abs() < 1e-9);
                for step in &trace.steps {
                    let occupied = step.frames.iter().filter(|f| f.is_some()).count();
                    assert!(occupied <= frames);
                    assert_eq!(step.frames.len(), frames);
                    assert!(step.frames.contains(&Some(step.page)));
                }
            }
        }
    }
}

#[test]
fn hits_never_move_pages() {
    let mut rng = rng(11);
    for _ in 0..30 {
        let sequence = random_sequence(&mut rng, 30, 5);
        for trace in PagingManager::compare(3, &sequence).unwrap() {
            for pair in trace.steps.windows(2) {
                if !pair[1].faulted {
                    assert_eq!(pair[0].frames, pair[1].frames, "{}", trace.policy);
                    assert_eq!(pair[1].evicted, None);
                }
            }
        }
    }
}

#[test]
fn optimal_is_never_beaten() {
    let mut rng = rng(1966);
    for _ in 0..200 {
        let len = rng.gen_range(0..60);
        let sequence = random_sequence(&mut rng, len, 10);
        for frames in 1..=6 {
            let traces = PagingManager::compare(frames, &sequence).unwrap();
            let optimal = traces
                .iter()
                .find(|t| t.policy == ReplacementPolicyKind::Optimal)
                .map(SimulationTrace::fault_count)
                .unwrap();
            for trace in &traces {
                assert!(
                    optimal <= trace.fault_count(),
                    "{} beat Optimal with {} frames on {:?}",
                    trace.policy,
                    frames,
                    sequence
                );
            }
        }
    }
}
