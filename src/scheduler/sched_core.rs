/*
 * Scheduler Core - Mechanism Layer
 *
 * This module implements SchedulerCore, the mechanism layer that:
 * 1. Holds the active scheduling policy (Box<dyn Scheduler>)
 * 2. Owns the run state (clock, remaining demand, CPU accounting)
 * 3. Admits arrivals and translates the simulated clock into SchedEvents
 * 4. Executes the policy's DispatchDecisions one tick at a time
 * 5. Records the resulting ExecutionTimeline
 *
 * The SchedulerCore separates "mechanism" (how time advances) from
 * "policy" (which process runs next). Swapping algorithms never touches
 * this file.
 */

use std::collections::VecDeque;

use super::{
    context::SchedContext,
    events::SchedEvent,
    process::Workload,
    timeline::{ExecutionSlice, ExecutionTimeline},
    traits::Scheduler,
    types::{DispatchDecision, SchedulingPolicy, TaskId},
};

/// Simulated CPU state
///
/// One CPU, one clock. Exposed to policies through SchedContext.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CpuState {
    /// Current simulated time
    pub now: u64,

    /// Task holding the CPU (None while idle)
    pub current: Option<TaskId>,

    /// Set by a policy to end the current dispatch after this tick
    pub need_resched: bool,

    /// Ticks consumed in the current dispatch
    pub slice_used: u64,

    pub busy_ticks: u64,
    pub idle_ticks: u64,

    /// Number of dispatch decisions executed
    pub dispatches: u64,

    /// Dispatches ended by a reschedule request
    pub preemptions: u64,
}

impl CpuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the CPU reschedule at the end of this tick
    pub fn request_reschedule(&mut self) {
        self.need_resched = true;
    }

    /// Reset reschedule flag
    pub fn clear_reschedule(&mut self) {
        self.need_resched = false;
    }
}

/// Scheduler Core - The Mechanism Layer
///
/// Runs one workload under one policy. The policy must be fresh: its ready
/// structures are assumed empty when `run` starts.
pub struct SchedulerCore {
    /// Which algorithm the policy implements, stamped on the timeline
    kind: SchedulingPolicy,

    /// The active scheduling policy
    policy: Box<dyn Scheduler>,

    cpu: CpuState,
}

impl SchedulerCore {
    pub fn new(kind: SchedulingPolicy, policy: Box<dyn Scheduler>) -> Self {
        log::debug!("SchedulerCore initialized with policy: {}", policy.name());
        Self {
            kind,
            policy,
            cpu: CpuState::new(),
        }
    }

    /// Get the name of the active policy
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// CPU accounting of the last run
    pub fn cpu(&self) -> &CpuState {
        &self.cpu
    }

    // ========================================================================
    // RUN LOOP
    // ========================================================================

    /// Simulate `workload` to completion
    ///
    /// Each loop iteration either idles the CPU for one tick or executes one
    /// dispatch, which becomes exactly one run slice.
    pub fn run(&mut self, workload: &Workload) -> ExecutionTimeline {
        self.cpu = CpuState::new();

        let mut remaining: Vec<u64> = workload.bursts().collect();
        let mut pending = arrival_order(workload);
        let mut unfinished = workload.len();
        let mut timeline = ExecutionTimeline::new(self.kind);

        log::info!(
            "[{}] simulating {} process(es), total burst {}",
            self.policy.name(),
            workload.len(),
            workload.total_burst()
        );

        self.admit(workload, &remaining, &mut pending);

        while unfinished > 0 {
            let decision = self.pick_next(workload, &remaining);

            let Some(task) = decision.next else {
                if pending.is_empty() {
                    log::error!(
                        "[{}] idle with {} unfinished process(es) and no pending arrivals",
                        self.policy.name(),
                        unfinished
                    );
                    break;
                }
                let start = self.cpu.now;
                self.cpu.now += 1;
                self.cpu.idle_ticks += 1;
                log::trace!("[{}] idle at {}", self.policy.name(), start);
                timeline.push_idle(start, self.cpu.now);
                self.admit(workload, &remaining, &mut pending);
                continue;
            };

            debug_assert!(remaining[task.as_usize()] > 0);

            let start = self.cpu.now;
            self.cpu.current = Some(task);
            self.cpu.clear_reschedule();
            self.cpu.slice_used = 0;
            self.cpu.dispatches += 1;

            let process = workload.get(task);
            log::debug!(
                "[{}] dispatch {} at {} ({:?}, {} left)",
                self.policy.name(),
                process.pid,
                start,
                decision.timeslice,
                remaining[task.as_usize()]
            );

            loop {
                remaining[task.as_usize()] -= 1;
                self.cpu.now += 1;
                self.cpu.slice_used += 1;
                self.cpu.busy_ticks += 1;

                self.admit(workload, &remaining, &mut pending);
                self.deliver(
                    workload,
                    &remaining,
                    SchedEvent::Tick {
                        now: self.cpu.now,
                        current: task,
                    },
                );

                if remaining[task.as_usize()] == 0 {
                    unfinished -= 1;
                    let finish = self.cpu.now;
                    self.deliver(workload, &remaining, SchedEvent::ProcessExited { task, finish });
                    break;
                }
                if decision.timeslice.is_exhausted(self.cpu.slice_used) {
                    self.deliver(workload, &remaining, SchedEvent::SliceExpired { task });
                    break;
                }
                if self.cpu.need_resched {
                    self.cpu.preemptions += 1;
                    self.deliver(workload, &remaining, SchedEvent::ProcessPreempted { task });
                    break;
                }
            }

            self.cpu.current = None;
            timeline.push_run(ExecutionSlice {
                pid: process.pid.clone(),
                start,
                end: self.cpu.now,
                arrival: process.arrival,
                burst: process.burst,
            });
        }

        log::info!(
            "[{}] finished at {}: {} dispatch(es), {} preemption(s), {} idle tick(s)",
            self.policy.name(),
            self.cpu.now,
            self.cpu.dispatches,
            self.cpu.preemptions,
            self.cpu.idle_ticks
        );

        timeline
    }

    // ========================================================================
    // POLICY PLUMBING
    // ========================================================================

    /// Report every pending process whose arrival time has come
    fn admit(&mut self, workload: &Workload, remaining: &[u64], pending: &mut VecDeque<TaskId>) {
        while let Some(&task) = pending.front() {
            if workload.get(task).arrival > self.cpu.now {
                break;
            }
            pending.pop_front();
            log::trace!(
                "[{}] {} arrived at {}",
                self.policy.name(),
                workload.get(task).pid,
                self.cpu.now
            );
            self.deliver(workload, remaining, SchedEvent::ProcessArrived { task });
        }
    }

    fn deliver(&mut self, workload: &Workload, remaining: &[u64], event: SchedEvent) {
        let mut ctx = SchedContext::new(workload, remaining, &mut self.cpu);
        self.policy.on_event(&mut ctx, event);
    }

    fn pick_next(&mut self, workload: &Workload, remaining: &[u64]) -> DispatchDecision {
        let mut ctx = SchedContext::new(workload, remaining, &mut self.cpu);
        self.policy.pick_next(&mut ctx)
    }
}

/// Tasks sorted by arrival, submission order breaking ties
fn arrival_order(workload: &Workload) -> VecDeque<TaskId> {
    let mut order: Vec<TaskId> = workload.tasks().map(|(task, _)| task).collect();
    order.sort_by_key(|&task| (workload.get(task).arrival, task));
    order.into()
}

// ============================================================================
// DEBUG IMPLEMENTATION
// ============================================================================

impl core::fmt::Debug for SchedulerCore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SchedulerCore")
            .field("kind", &self.kind)
            .field("policy", &self.policy.name())
            .field("cpu", &self.cpu)
            .finish()
    }
}
