/*
 * First-Come, First-Served Scheduling Policy
 *
 * Non-preemptive: processes run to completion in arrival order. The core
 * admits simultaneous arrivals in submission order, so a plain FIFO queue
 * gives the required tie-break.
 */

use std::collections::VecDeque;

use super::super::{
    events::SchedEvent,
    traits::{Scheduler, SimSchedCtx},
    types::{DispatchDecision, TaskId, TimeSlice},
};

pub struct FcfsPolicy {
    ready_queue: VecDeque<TaskId>,
}

impl FcfsPolicy {
    pub fn new() -> Self {
        Self {
            ready_queue: VecDeque::new(),
        }
    }
}

impl Scheduler for FcfsPolicy {
    fn on_event(&mut self, _ctx: &mut dyn SimSchedCtx, event: SchedEvent) {
        match event {
            SchedEvent::ProcessArrived { task } => self.ready_queue.push_back(task),
            // Unbounded slices never expire; keep the head position if one does.
            SchedEvent::SliceExpired { task } | SchedEvent::ProcessPreempted { task } => {
                self.ready_queue.push_front(task)
            }
            SchedEvent::Tick { .. } | SchedEvent::ProcessExited { .. } => {}
        }
    }

    fn pick_next(&mut self, _ctx: &mut dyn SimSchedCtx) -> DispatchDecision {
        match self.ready_queue.pop_front() {
            Some(task) => DispatchDecision::run_task(task, TimeSlice::Unbounded),
            None => DispatchDecision::idle(),
        }
    }

    fn name(&self) -> &'static str {
        "FCFS"
    }
}

impl Default for FcfsPolicy {
    fn default() -> Self {
        Self::new()
    }
}
