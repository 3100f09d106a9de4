/*
 * Scheduler Type Definitions
 *
 * This module defines the core types used throughout the scheduler subsystem.
 * These types are designed to be lightweight, Copy-able, and suitable for
 * use in both policy and mechanism layers.
 */

use core::fmt;

use serde::{Deserialize, Serialize};

/// Internal handle of a process during a run
///
/// The index of the process in its Workload (submission order). Policies
/// work with TaskIds; the caller-visible Pid is only looked up for
/// tie-breaks and output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub usize);

impl TaskId {
    /// Get the task ID as a usize for indexing
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// How long a dispatched process may run before the policy is consulted
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimeSlice {
    /// At most this many ticks
    Ticks(u64),

    /// Until completion (or preemption)
    Unbounded,
}

impl TimeSlice {
    /// Whether `used` ticks use up the slice
    pub fn is_exhausted(self, used: u64) -> bool {
        match self {
            TimeSlice::Ticks(limit) => used >= limit,
            TimeSlice::Unbounded => false,
        }
    }
}

/// Dispatch decision made by a scheduling policy
///
/// After evaluating its ready structures, a policy returns this decision
/// indicating what to run next and for how long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchDecision {
    /// Task to run next (None = idle the CPU for one tick)
    pub next: Option<TaskId>,

    /// Time slice for the selected task
    pub timeslice: TimeSlice,
}

impl DispatchDecision {
    /// Create a decision to run a specific task
    pub fn run_task(task: TaskId, timeslice: TimeSlice) -> Self {
        Self {
            next: Some(task),
            timeslice,
        }
    }

    /// Create a decision to idle the CPU
    pub fn idle() -> Self {
        Self {
            next: None,
            timeslice: TimeSlice::Unbounded,
        }
    }
}

/// CPU scheduling policy selector
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulingPolicy {
    /// First come, first served
    Fcfs,
    /// Shortest job first, run to completion
    SjfNonPreemptive,
    /// Shortest remaining time first
    SjfPreemptive,
    PriorityNonPreemptive,
    PriorityPreemptive,
    RoundRobin,
    /// Multilevel feedback queue
    Mlfq,
}

impl SchedulingPolicy {
    pub const ALL: [SchedulingPolicy; 7] = [
        SchedulingPolicy::Fcfs,
        SchedulingPolicy::SjfNonPreemptive,
        SchedulingPolicy::SjfPreemptive,
        SchedulingPolicy::PriorityNonPreemptive,
        SchedulingPolicy::PriorityPreemptive,
        SchedulingPolicy::RoundRobin,
        SchedulingPolicy::Mlfq,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SchedulingPolicy::Fcfs => "FCFS",
            SchedulingPolicy::SjfNonPreemptive => "SJF",
            SchedulingPolicy::SjfPreemptive => "SRTF",
            SchedulingPolicy::PriorityNonPreemptive => "Priority",
            SchedulingPolicy::PriorityPreemptive => "Priority (preemptive)",
            SchedulingPolicy::RoundRobin => "Round-Robin",
            SchedulingPolicy::Mlfq => "MLFQ",
        }
    }

    /// Whether a running process can lose the CPU before its slice ends
    pub fn is_preemptive(self) -> bool {
        matches!(
            self,
            SchedulingPolicy::SjfPreemptive
                | SchedulingPolicy::PriorityPreemptive
                | SchedulingPolicy::RoundRobin
                | SchedulingPolicy::Mlfq
        )
    }

    /// Whether the policy cannot run without a quantum
    pub fn needs_quantum(self) -> bool {
        matches!(self, SchedulingPolicy::RoundRobin | SchedulingPolicy::Mlfq)
    }
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        SchedulingPolicy::Fcfs
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
