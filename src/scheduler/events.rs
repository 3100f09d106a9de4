/*
 * Scheduler Event Definitions
 *
 * This module defines the events that the scheduler mechanism reports to
 * scheduling policies. Policies react to these events to maintain their
 * ready structures and to ask for preemption.
 *
 * This design decouples the policy (what to schedule) from the mechanism
 * (advancing the simulated clock, accounting, recording the timeline).
 */

use super::types::TaskId;

/// Events that the scheduler mechanism reports to policies
///
/// The SchedulerCore translates the simulated clock into these events and
/// forwards them to the active policy, in this order within one tick:
/// arrivals, then Tick, then at most one of ProcessExited / SliceExpired /
/// ProcessPreempted for the running task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedEvent {
    /// A process reached its arrival time and is ready to run
    ///
    /// Arrivals at the same instant are reported in submission order.
    ProcessArrived { task: TaskId },

    /// One unit of simulated time elapsed with `current` on the CPU
    ///
    /// Preemptive policies inspect their ready structures here and call
    /// `request_reschedule` if someone should take over.
    Tick { now: u64, current: TaskId },

    /// The running task used up its time slice without finishing
    ///
    /// The policy decides where it goes next (tail of a queue, lower level).
    SliceExpired { task: TaskId },

    /// The running task was interrupted after a reschedule request
    ///
    /// The policy should put it back into its ready structures.
    ProcessPreempted { task: TaskId },

    /// The running task finished its burst and will not run again
    ProcessExited { task: TaskId, finish: u64 },
}

impl SchedEvent {
    /// Get a short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            SchedEvent::ProcessArrived { .. } => "ProcessArrived",
            SchedEvent::Tick { .. } => "Tick",
            SchedEvent::SliceExpired { .. } => "SliceExpired",
            SchedEvent::ProcessPreempted { .. } => "ProcessPreempted",
            SchedEvent::ProcessExited { .. } => "ProcessExited",
        }
    }
}
