/*
 * CPU Scheduling Engine
 *
 * Unit-time simulation of one CPU under a pluggable scheduling policy.
 *
 * POLICY / MECHANISM SPLIT:
 * =========================
 *
 * - SchedulerCore (mechanism) owns the clock, the remaining demand of every
 *   process and the timeline. It admits arrivals, runs the dispatched
 *   process one tick at a time and reports what happened as SchedEvents.
 * - Scheduler (policy) owns its ready structures and answers pick_next
 *   with a DispatchDecision: which process, and for how long.
 * - SchedContext is the only window a policy has onto the run state.
 *
 * RUN LIFECYCLE:
 * ==============
 *
 *   pending --arrival--> ready (policy) --pick_next--> running
 *                          ^                              |
 *                          +--- SliceExpired / Preempted -+--> exited
 *
 * Each dispatch becomes one ExecutionSlice; idle ticks merge into gaps.
 */

pub mod context;
pub mod events;
pub mod policies;
pub mod process;
pub mod sched_core;
pub mod scheduler_manager;
pub mod timeline;
pub mod traits;
pub mod types;

pub use context::SchedContext;
pub use events::SchedEvent;
pub use process::{Pid, Process, ProcessSpec, ProcessType, Workload};
pub use sched_core::{CpuState, SchedulerCore};
pub use scheduler_manager::SchedulerManager;
pub use timeline::{ExecutionSlice, ExecutionTimeline, TimelineEntry};
pub use traits::{Scheduler, SimSchedCtx};
pub use types::{DispatchDecision, SchedulingPolicy, TaskId, TimeSlice};
