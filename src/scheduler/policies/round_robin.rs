/*
 * Round-Robin Scheduling Policy
 *
 * This module implements a preemptive round-robin scheduling policy.
 * It maintains a FIFO queue of ready processes and rotates through them,
 * giving each process an equal time slice.
 *
 * Features:
 * - Simple FIFO ready queue
 * - Equal time slices for all processes
 * - Preemptive (processes are rotated when their quantum expires)
 *
 * The core reports arrivals before slice expiry, so a process that arrives
 * during (or exactly at the end of) a slice queues ahead of the process
 * whose slice just ended.
 */

use std::collections::VecDeque;

use super::super::{
    events::SchedEvent,
    traits::{Scheduler, SimSchedCtx},
    types::{DispatchDecision, TaskId, TimeSlice},
};

/// Round-Robin scheduling policy
///
/// Maintains a simple FIFO queue of ready processes. On each scheduling
/// decision (pick_next), it pops the front process and runs it for at most
/// one quantum; an unfinished process comes back through SliceExpired and
/// goes to the back of the queue.
pub struct RoundRobinPolicy {
    /// FIFO queue of processes ready to run
    ready_queue: VecDeque<TaskId>,

    /// Ticks per dispatch
    quantum: u64,
}

impl RoundRobinPolicy {
    /// Create a new Round-Robin policy
    ///
    /// `quantum` must be non-zero; SchedulingConfig::validate guarantees it.
    pub fn new(quantum: u64) -> Self {
        Self {
            ready_queue: VecDeque::new(),
            quantum,
        }
    }

    pub fn quantum(&self) -> u64 {
        self.quantum
    }
}

impl Scheduler for RoundRobinPolicy {
    fn on_event(&mut self, ctx: &mut dyn SimSchedCtx, event: SchedEvent) {
        match event {
            SchedEvent::ProcessArrived { task } => {
                // Add new process to ready queue
                self.ready_queue.push_back(task);
            }

            SchedEvent::SliceExpired { task } | SchedEvent::ProcessPreempted { task } => {
                // Quantum used up, rotate to the back of the queue
                if !self.ready_queue.contains(&task) {
                    ctx.log(
                        log::Level::Debug,
                        &format!("[RR Policy] {} back to ready queue", ctx.pid(task)),
                    );
                    self.ready_queue.push_back(task);
                }
            }

            SchedEvent::ProcessExited { task, .. } => {
                self.ready_queue.retain(|&id| id != task);
            }

            SchedEvent::Tick { .. } => {
                // Expiry is detected by the core from the time slice
            }
        }
    }

    fn pick_next(&mut self, _ctx: &mut dyn SimSchedCtx) -> DispatchDecision {
        match self.ready_queue.pop_front() {
            Some(task) => DispatchDecision::run_task(task, TimeSlice::Ticks(self.quantum)),
            // No runnable processes, idle
            None => DispatchDecision::idle(),
        }
    }

    fn name(&self) -> &'static str {
        "Round-Robin"
    }
}
