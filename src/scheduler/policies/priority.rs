/*
 * Priority Scheduling Policy
 *
 * Lower priority value = higher priority. Ties go to the earlier arrival,
 * then to the smaller pid. In preemptive mode a ready process with a
 * strictly better priority takes the CPU at the next tick boundary.
 */

use core::cmp::Ordering;

use super::{
    super::{
        events::SchedEvent,
        traits::{Scheduler, SimSchedCtx},
        types::{DispatchDecision, TaskId, TimeSlice},
    },
    ready_set::ReadySet,
};

pub struct PriorityPolicy {
    ready: ReadySet,
    preemptive: bool,
}

impl PriorityPolicy {
    pub fn new(preemptive: bool) -> Self {
        Self {
            ready: ReadySet::new(),
            preemptive,
        }
    }
}

fn by_priority(ctx: &dyn SimSchedCtx, a: TaskId, b: TaskId) -> Ordering {
    ctx.priority(a)
        .cmp(&ctx.priority(b))
        .then_with(|| ctx.arrival(a).cmp(&ctx.arrival(b)))
        .then_with(|| ctx.pid(a).cmp(ctx.pid(b)))
}

impl Scheduler for PriorityPolicy {
    fn on_event(&mut self, ctx: &mut dyn SimSchedCtx, event: SchedEvent) {
        match event {
            SchedEvent::ProcessArrived { task }
            | SchedEvent::SliceExpired { task }
            | SchedEvent::ProcessPreempted { task } => self.ready.insert(task),

            SchedEvent::Tick { current, .. } if self.preemptive => {
                let view: &dyn SimSchedCtx = ctx;
                let better = self
                    .ready
                    .best_by(|a, b| by_priority(view, a, b))
                    .filter(|&best| view.priority(best) < view.priority(current));
                if let Some(best) = better {
                    ctx.log(
                        log::Level::Debug,
                        &format!(
                            "[Priority Policy] {} (priority {}) preempts {}",
                            ctx.pid(best),
                            ctx.priority(best),
                            ctx.pid(current)
                        ),
                    );
                    ctx.request_reschedule();
                }
            }

            SchedEvent::Tick { .. } | SchedEvent::ProcessExited { .. } => {}
        }
    }

    fn pick_next(&mut self, ctx: &mut dyn SimSchedCtx) -> DispatchDecision {
        let view: &dyn SimSchedCtx = ctx;
        match self.ready.take_best_by(|a, b| by_priority(view, a, b)) {
            Some(task) => DispatchDecision::run_task(task, TimeSlice::Unbounded),
            None => DispatchDecision::idle(),
        }
    }

    fn name(&self) -> &'static str {
        if self.preemptive {
            "Priority (preemptive)"
        } else {
            "Priority"
        }
    }
}
