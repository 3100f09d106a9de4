use super::{random_sequence, random_workload, rng};
use crate::config::{MlfqConfig, SelectorConfig};
use crate::memory::PagingManager;
use crate::metrics::MetricsCalculator;
use crate::scheduler::SchedulerManager;

#[test]
fn page_traces_serialize_identically() {
    let mut rng = rng(3);
    for _ in 0..20 {
        let sequence = random_sequence(&mut rng, 50, 9);
        let first = PagingManager::compare(4, &sequence).unwrap();
        let second = PagingManager::compare(4, &sequence).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn timelines_and_metrics_serialize_identically() {
    let mut rng = rng(5);
    for _ in 0..20 {
        let workload = random_workload(&mut rng);
        let first = SchedulerManager::compare(&workload, 2, MlfqConfig::default()).unwrap();
        let second = SchedulerManager::compare(&workload, 2, MlfqConfig::default()).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );

        for (a, b) in first.iter().zip(&second) {
            let ma = MetricsCalculator::compute(a, &workload);
            let mb = MetricsCalculator::compute(b, &workload);
            assert_eq!(
                serde_json::to_vec(&ma).unwrap(),
                serde_json::to_vec(&mb).unwrap()
            );
        }
    }
}

#[test]
fn auto_mode_is_stable() {
    let mut rng = rng(9);
    for _ in 0..20 {
        let workload = random_workload(&mut rng);
        let (sel_a, tl_a) = SchedulerManager::run_auto(&SelectorConfig::default(), &workload).unwrap();
        let (sel_b, tl_b) = SchedulerManager::run_auto(&SelectorConfig::default(), &workload).unwrap();
        assert_eq!(sel_a, sel_b);
        assert_eq!(tl_a, tl_b);
    }
}
