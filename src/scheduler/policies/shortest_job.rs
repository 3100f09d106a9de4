/*
 * Shortest-Job-First Scheduling Policy
 *
 * Picks the ready process with the least remaining CPU demand, breaking
 * ties by earlier arrival, then by pid.
 *
 * - Non-preemptive (SJF): the chosen process runs to completion.
 * - Preemptive (SRTF): on every tick a ready process with strictly smaller
 *   remaining time takes over; equal remaining time never preempts.
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

pub struct ShortestJobPolicy {
    ready: ReadySet,
    preemptive: bool,
}

impl ShortestJobPolicy {
    pub fn new(preemptive: bool) -> Self {
        Self {
            ready: ReadySet::new(),
            preemptive,
        }
    }

    pub fn non_preemptive() -> Self {
        Self::new(false)
    }

    pub fn preemptive() -> Self {
        Self::new(true)
    }
}

fn by_remaining(ctx: &dyn SimSchedCtx, a: TaskId, b: TaskId) -> Ordering {
    ctx.remaining(a)
        .cmp(&ctx.remaining(b))
        .then_with(|| ctx.arrival(a).cmp(&ctx.arrival(b)))
        .then_with(|| ctx.pid(a).cmp(ctx.pid(b)))
}

impl Scheduler for ShortestJobPolicy {
    fn on_event(&mut self, ctx: &mut dyn SimSchedCtx, event: SchedEvent) {
        match event {
            SchedEvent::ProcessArrived { task }
            | SchedEvent::SliceExpired { task }
            | SchedEvent::ProcessPreempted { task } => self.ready.insert(task),

            SchedEvent::Tick { current, .. } if self.preemptive => {
                let view: &dyn SimSchedCtx = ctx;
                let Some(best) = self.ready.best_by(|a, b| by_remaining(view, a, b)) else {
                    return;
                };
                if ctx.remaining(best) < ctx.remaining(current) {
                    ctx.log(
                        log::Level::Debug,
                        &format!(
                            "[{} Policy] {} ({} left) preempts {} ({} left)",
                            self.name(),
                            ctx.pid(best),
                            ctx.remaining(best),
                            ctx.pid(current),
                            ctx.remaining(current)
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
        match self.ready.take_best_by(|a, b| by_remaining(view, a, b)) {
            Some(task) => DispatchDecision::run_task(task, TimeSlice::Unbounded),
            None => DispatchDecision::idle(),
        }
    }

    fn name(&self) -> &'static str {
        if self.preemptive { "SRTF" } else { "SJF" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{ProcessSpec, SchedulerCore, SchedulingPolicy, Workload};

    fn run(policy: ShortestJobPolicy, kind: SchedulingPolicy, specs: Vec<ProcessSpec>) -> Vec<(String, u64, u64)> {
        let workload = Workload::new(specs).unwrap();
        SchedulerCore::new(kind, Box::new(policy))
            .run(&workload)
            .slices()
            .map(|s| (s.pid.to_string(), s.start, s.end))
            .collect()
    }

    fn slice(pid: &str, start: u64, end: u64) -> (String, u64, u64) {
        (pid.to_string(), start, end)
    }

    #[test]
    fn sjf_breaks_ties_by_arrival() {
        let slices = run(
            ShortestJobPolicy::non_preemptive(),
            SchedulingPolicy::SjfNonPreemptive,
            vec![
                ProcessSpec::new("A", 0, 7),
                ProcessSpec::new("D", 5, 4),
                ProcessSpec::new("B", 2, 4),
                ProcessSpec::new("C", 4, 1),
            ],
        );
        assert_eq!(
            slices,
            vec![slice("A", 0, 7), slice("C", 7, 8), slice("B", 8, 12), slice("D", 12, 16)]
        );
    }

    #[test]
    fn srtf_preempts_on_strictly_shorter_remaining() {
        let slices = run(
            ShortestJobPolicy::preemptive(),
            SchedulingPolicy::SjfPreemptive,
            vec![
                ProcessSpec::new("A", 0, 8),
                ProcessSpec::new("B", 1, 4),
                ProcessSpec::new("C", 2, 9),
                ProcessSpec::new("D", 3, 5),
            ],
        );
        assert_eq!(
            slices,
            vec![
                slice("A", 0, 1),
                slice("B", 1, 5),
                slice("D", 5, 10),
                slice("A", 10, 17),
                slice("C", 17, 26),
            ]
        );
    }

    #[test]
    fn srtf_equal_remaining_does_not_preempt() {
        let slices = run(
            ShortestJobPolicy::preemptive(),
            SchedulingPolicy::SjfPreemptive,
            vec![ProcessSpec::new("A", 0, 4), ProcessSpec::new("B", 1, 3)],
        );
        assert_eq!(slices, vec![slice("A", 0, 4), slice("B", 4, 7)]);
    }
}
