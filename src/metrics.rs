/*
 * Scheduling Metrics
 *
 * Derives per-process and aggregate figures from a finished timeline. All
 * per-process values are extrema over the process's slices:
 *
 *   start      = first slice start
 *   finish     = last slice end
 *   turnaround = finish - arrival
 *   waiting    = turnaround - burst
 *   response   = start - arrival
 */

use serde::{Deserialize, Serialize};

use crate::scheduler::{ExecutionTimeline, Pid, SchedulingPolicy, Workload};
use crate::utils::stats::{mean, percent};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival: u64,
    pub burst: u64,
    pub start: u64,
    pub finish: u64,
    pub waiting: u64,
    pub turnaround: u64,
    pub response: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Mean completion time
    pub avg_finish: f64,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,

    /// Busy time over makespan, in percent
    pub cpu_utilization: f64,
    pub makespan: u64,
    pub busy_time: u64,

    /// Completed processes per time unit
    pub throughput: f64,
    pub context_switches: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub policy: SchedulingPolicy,

    /// In workload submission order
    pub processes: Vec<ProcessMetrics>,
    pub aggregate: AggregateMetrics,
}

impl Metrics {
    pub fn process(&self, pid: &Pid) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| &m.pid == pid)
    }
}

pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Compute metrics for `timeline`, which must come from running `workload`
    ///
    /// A process with no slice in the timeline is skipped with a warning.
    /// Figures that would go negative for a mismatched timeline clamp to 0.
    pub fn compute(timeline: &ExecutionTimeline, workload: &Workload) -> Metrics {
        let mut processes = Vec::with_capacity(workload.len());

        for (_, process) in workload.tasks() {
            let mut slices = timeline.slices_for(&process.pid).peekable();
            let Some(first) = slices.peek() else {
                log::warn!("[Metrics] {} never ran, skipping", process.pid);
                continue;
            };
            let mut start = first.start;
            let mut finish = first.end;
            for slice in slices {
                start = start.min(slice.start);
                finish = finish.max(slice.end);
            }

            let turnaround = finish.saturating_sub(process.arrival);
            processes.push(ProcessMetrics {
                pid: process.pid.clone(),
                arrival: process.arrival,
                burst: process.burst,
                start,
                finish,
                waiting: turnaround.saturating_sub(process.burst),
                turnaround,
                response: start.saturating_sub(process.arrival),
            });
        }

        let makespan = processes.iter().map(|m| m.finish).max().unwrap_or(0);
        let busy_time = timeline.busy_time();
        let avg = |field: fn(&ProcessMetrics) -> u64| mean(processes.iter().map(|m| field(m) as f64));

        let aggregate = AggregateMetrics {
            avg_finish: avg(|m| m.finish),
            avg_waiting: avg(|m| m.waiting),
            avg_turnaround: avg(|m| m.turnaround),
            avg_response: avg(|m| m.response),
            cpu_utilization: percent(busy_time as f64, makespan as f64),
            makespan,
            busy_time,
            throughput: if makespan == 0 {
                0.0
            } else {
                processes.len() as f64 / makespan as f64
            },
            context_switches: timeline.context_switches(),
        };

        log::debug!(
            "[Metrics] {}: avg waiting {:.2}, avg turnaround {:.2}, utilization {:.1}%",
            timeline.policy(),
            aggregate.avg_waiting,
            aggregate.avg_turnaround,
            aggregate.cpu_utilization
        );

        Metrics {
            policy: timeline.policy(),
            processes,
            aggregate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulingConfig;
    use crate::scheduler::{ProcessSpec, SchedulerManager};

    fn metrics(config: SchedulingConfig, specs: Vec<ProcessSpec>) -> Metrics {
        let workload = Workload::new(specs).unwrap();
        let timeline = SchedulerManager::run(&config, &workload).unwrap();
        MetricsCalculator::compute(&timeline, &workload)
    }

    #[test]
    fn fcfs_waiting_and_turnaround() {
        let m = metrics(
            SchedulingConfig::new(SchedulingPolicy::Fcfs).unwrap(),
            vec![ProcessSpec::new("A", 0, 5), ProcessSpec::new("B", 1, 3)],
        );

        let a = m.process(&Pid::from("A")).unwrap();
        let b = m.process(&Pid::from("B")).unwrap();
        assert_eq!((a.waiting, a.turnaround, a.response), (0, 5, 0));
        assert_eq!((b.start, b.finish), (5, 8));
        assert_eq!((b.waiting, b.turnaround, b.response), (4, 7, 4));

        assert_eq!(m.aggregate.avg_waiting, 2.0);
        assert_eq!(m.aggregate.avg_turnaround, 6.0);
        assert_eq!(m.aggregate.avg_finish, 6.5);
        assert_eq!(m.aggregate.makespan, 8);
        assert_eq!(m.aggregate.cpu_utilization, 100.0);
        assert_eq!(m.aggregate.throughput, 0.25);
        assert_eq!(m.aggregate.context_switches, 1);
    }

    #[test]
    fn idle_gap_lowers_utilization() {
        let m = metrics(
            SchedulingConfig::new(SchedulingPolicy::Fcfs).unwrap(),
            vec![ProcessSpec::new("A", 0, 2), ProcessSpec::new("B", 4, 2)],
        );
        assert_eq!(m.aggregate.makespan, 6);
        assert_eq!(m.aggregate.busy_time, 4);
        assert!((m.aggregate.cpu_utilization - 66.666).abs() < 0.01);
        assert_eq!(m.process(&Pid::from("B")).unwrap().waiting, 0);
    }

    #[test]
    fn round_robin_response_uses_first_slice() {
        let m = metrics(
            SchedulingConfig::with_quantum(SchedulingPolicy::RoundRobin, 2).unwrap(),
            vec![ProcessSpec::new("A", 0, 4), ProcessSpec::new("B", 1, 3)],
        );

        let a = m.process(&Pid::from("A")).unwrap();
        let b = m.process(&Pid::from("B")).unwrap();
        assert_eq!((a.start, a.finish, a.waiting), (0, 6, 2));
        assert_eq!((b.start, b.finish, b.response, b.waiting), (2, 7, 1, 3));
        assert_eq!(m.aggregate.context_switches, 3);
    }

    #[test]
    fn mismatched_timeline_clamps_instead_of_underflowing() {
        let early = Workload::new(vec![ProcessSpec::new("A", 0, 2)]).unwrap();
        let late = Workload::new(vec![ProcessSpec::new("A", 5, 2)]).unwrap();
        let config = SchedulingConfig::new(SchedulingPolicy::Fcfs).unwrap();
        let timeline = SchedulerManager::run(&config, &early).unwrap();

        let m = MetricsCalculator::compute(&timeline, &late);
        let a = m.process(&Pid::from("A")).unwrap();
        assert_eq!((a.turnaround, a.waiting, a.response), (0, 0, 0));
    }
}
