/*
 * Scheduling Policies Module
 *
 * This module contains the scheduling policy implementations. Each policy
 * implements the Scheduler trait and is plugged into a SchedulerCore for
 * one run.
 *
 * Available policies:
 * - Fcfs: first come, first served
 * - ShortestJob: SJF (non-preemptive) and SRTF (preemptive)
 * - Priority: non-preemptive and preemptive
 * - RoundRobin: fixed quantum rotation
 * - Mlfq: multi-level feedback queue with aging
 */

pub mod fcfs;
pub mod mlfq;
pub mod priority;
pub mod ready_set;
pub mod round_robin;
pub mod shortest_job;

pub use fcfs::FcfsPolicy;
pub use mlfq::{MAX_MLFQ_LEVELS, MlfqPolicy};
pub use priority::PriorityPolicy;
pub use round_robin::RoundRobinPolicy;
pub use shortest_job::ShortestJobPolicy;

use super::{traits::Scheduler, types::SchedulingPolicy};
use crate::config::SchedulingConfig;

/// Instantiate the policy a validated config asks for
pub fn create(config: &SchedulingConfig) -> Box<dyn Scheduler> {
    let quantum = config.quantum_or_default();
    match config.policy {
        SchedulingPolicy::Fcfs => Box::new(FcfsPolicy::new()),
        SchedulingPolicy::SjfNonPreemptive => Box::new(ShortestJobPolicy::non_preemptive()),
        SchedulingPolicy::SjfPreemptive => Box::new(ShortestJobPolicy::preemptive()),
        SchedulingPolicy::PriorityNonPreemptive => Box::new(PriorityPolicy::new(false)),
        SchedulingPolicy::PriorityPreemptive => Box::new(PriorityPolicy::new(true)),
        SchedulingPolicy::RoundRobin => Box::new(RoundRobinPolicy::new(quantum)),
        SchedulingPolicy::Mlfq => Box::new(MlfqPolicy::new(
            config.mlfq.levels,
            quantum,
            config.mlfq.aging_threshold,
        )),
    }
}
