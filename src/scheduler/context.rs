/*
 * Scheduler Context - SimSchedCtx Implementation
 *
 * This module provides SchedContext, the bridge between scheduling policies
 * and the run state owned by the SchedulerCore. It implements the
 * SimSchedCtx trait, giving policies read access to the process table and
 * remaining demand, plus the single write they are allowed: asking for a
 * reschedule.
 */

use super::{
    process::{Pid, Workload},
    sched_core::CpuState,
    traits::SimSchedCtx,
    types::TaskId,
};

/// Scheduling context for policy access
///
/// Borrows the run state for the duration of one policy call. The 'a
/// lifetime ensures it cannot outlive the SchedulerCore's data.
pub struct SchedContext<'a> {
    workload: &'a Workload,
    remaining: &'a [u64],
    cpu: &'a mut CpuState,
}

impl<'a> SchedContext<'a> {
    pub fn new(workload: &'a Workload, remaining: &'a [u64], cpu: &'a mut CpuState) -> Self {
        Self {
            workload,
            remaining,
            cpu,
        }
    }
}

impl SimSchedCtx for SchedContext<'_> {
    fn now(&self) -> u64 {
        self.cpu.now
    }

    fn current_task(&self) -> Option<TaskId> {
        self.cpu.current
    }

    fn remaining(&self, task: TaskId) -> u64 {
        self.remaining[task.as_usize()]
    }

    fn arrival(&self, task: TaskId) -> u64 {
        self.workload.get(task).arrival
    }

    fn burst(&self, task: TaskId) -> u64 {
        self.workload.get(task).burst
    }

    fn priority(&self, task: TaskId) -> u64 {
        self.workload.get(task).priority
    }

    fn pid(&self, task: TaskId) -> &Pid {
        &self.workload.get(task).pid
    }

    fn request_reschedule(&mut self) {
        self.cpu.request_reschedule();
    }

    fn log(&self, level: log::Level, message: &str) {
        log::log!(level, "[t={}] {}", self.cpu.now, message);
    }
}
