/*
 * Scheduler Trait Definitions
 *
 * This module defines the traits that separate scheduling policy from mechanism:
 *
 * - Scheduler: The policy interface that different algorithms implement
 * - SimSchedCtx: The mechanism interface that policies use to query the run
 *
 * This separation allows:
 * 1. Swapping scheduling algorithms without touching the simulation loop
 * 2. Testing policies in isolation against a mock context
 * 3. Clear ownership boundaries (policies never touch the process table)
 */

use super::{
    events::SchedEvent,
    process::Pid,
    types::{DispatchDecision, TaskId},
};

/// Scheduling policy trait
///
/// FCFS, SJF, Priority, Round Robin and MLFQ implement this trait. The
/// SchedulerCore (mechanism) holds a Box<dyn Scheduler> and forwards events
/// to it.
///
/// Policies are responsible for:
/// - Deciding which task to run next (pick_next)
/// - Reacting to simulation events (on_event)
/// - Managing internal structures (ready queues, levels, etc.)
///
/// A task returned by `pick_next` is owned by the CPU until the mechanism
/// hands it back through SliceExpired or ProcessPreempted, so policies must
/// drop it from their ready structures when they pick it.
pub trait Scheduler {
    /// React to a scheduling event
    ///
    /// # Arguments
    /// - `ctx`: Access to run state (remaining time, arrival, priority, ...)
    /// - `event`: The event that occurred
    fn on_event(&mut self, ctx: &mut dyn SimSchedCtx, event: SchedEvent);

    /// Choose the next task to run
    ///
    /// Called whenever the CPU is free. Returning `DispatchDecision::idle()`
    /// idles the CPU for one tick.
    fn pick_next(&mut self, ctx: &mut dyn SimSchedCtx) -> DispatchDecision;

    /// Get the policy name for debugging
    fn name(&self) -> &'static str;
}

/// Run context interface for scheduling policies
///
/// This trait is the ONLY way policies can query or influence the run. The
/// mechanism (SchedulerCore) provides the implementation.
pub trait SimSchedCtx {
    // ========== QUERY OPERATIONS ==========

    /// Current simulated time
    fn now(&self) -> u64;

    /// Task currently holding the CPU
    fn current_task(&self) -> Option<TaskId>;

    /// Remaining CPU demand of a task
    fn remaining(&self, task: TaskId) -> u64;

    /// Arrival time of a task
    fn arrival(&self, task: TaskId) -> u64;

    /// Full CPU demand of a task
    fn burst(&self, task: TaskId) -> u64;

    /// Priority of a task (lower value = higher priority)
    fn priority(&self, task: TaskId) -> u64;

    /// Caller-visible identifier of a task
    fn pid(&self, task: TaskId) -> &Pid;

    // ========== STATE MODIFICATION ==========

    /// Ask the mechanism to take the CPU away from the running task at the
    /// end of the current tick
    fn request_reschedule(&mut self);

    // ========== DEBUGGING ==========

    /// Log a message from the policy
    ///
    /// Policies should use this instead of log::debug! directly so the
    /// mechanism can tag messages with the simulated time.
    fn log(&self, level: log::Level, message: &str);
}
