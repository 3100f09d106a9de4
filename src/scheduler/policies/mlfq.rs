/*
 * Multi-Level Feedback Queue Scheduling Policy
 *
 * A fixed number of FIFO levels, level 0 being the most urgent:
 *
 * - New processes enter level 0
 * - Level i runs with a quantum of base * 2^i; the last level is unbounded
 * - Using up a quantum demotes the process one level
 * - A ready process in a higher level preempts a running lower-level
 *   process, which returns to the tail of its own level
 * - Aging: a process waiting in level > 0 for `aging_threshold` consecutive
 *   ticks is promoted one level
 */

use std::collections::{HashMap, VecDeque};

use super::super::{
    events::SchedEvent,
    traits::{Scheduler, SimSchedCtx},
    types::{DispatchDecision, TaskId, TimeSlice},
};

/// Upper bound on the number of levels
pub const MAX_MLFQ_LEVELS: usize = 8;

pub struct MlfqPolicy {
    queues: heapless::Vec<VecDeque<TaskId>, MAX_MLFQ_LEVELS>,

    /// Quantum of level 0
    base_quantum: u64,

    aging_threshold: Option<u64>,

    /// Level each live process belongs to
    level_of: HashMap<TaskId, usize>,

    /// Consecutive ticks spent waiting in the current level
    waited: HashMap<TaskId, u64>,
}

impl MlfqPolicy {
    /// `levels` is clamped to 1..=MAX_MLFQ_LEVELS; configs are validated
    /// before they get here.
    pub fn new(levels: usize, base_quantum: u64, aging_threshold: Option<u64>) -> Self {
        let queues = (0..levels.clamp(1, MAX_MLFQ_LEVELS))
            .map(|_| VecDeque::new())
            .collect();
        Self {
            queues,
            base_quantum,
            aging_threshold,
            level_of: HashMap::new(),
            waited: HashMap::new(),
        }
    }

    pub fn levels(&self) -> usize {
        self.queues.len()
    }

    fn last_level(&self) -> usize {
        self.queues.len() - 1
    }

    /// Time slice granted at `level`
    pub fn quantum_for(&self, level: usize) -> TimeSlice {
        if level >= self.last_level() {
            TimeSlice::Unbounded
        } else {
            TimeSlice::Ticks(self.base_quantum.saturating_mul(1 << level))
        }
    }

    pub fn level(&self, task: TaskId) -> usize {
        self.level_of.get(&task).copied().unwrap_or(0)
    }

    fn enqueue(&mut self, task: TaskId, level: usize) {
        let level = level.min(self.last_level());
        self.level_of.insert(task, level);
        self.waited.insert(task, 0);
        self.queues[level].push_back(task);
    }

    /// Count one waiting tick for every queued process below level 0 and
    /// promote those that reached the threshold
    fn age(&mut self, ctx: &dyn SimSchedCtx) {
        let Some(threshold) = self.aging_threshold else {
            return;
        };

        for level in 1..self.queues.len() {
            let mut promoted = Vec::new();
            let waited = &mut self.waited;
            self.queues[level].retain(|&task| {
                let ticks = waited.entry(task).or_insert(0);
                *ticks += 1;
                if *ticks >= threshold {
                    promoted.push(task);
                    false
                } else {
                    true
                }
            });

            for task in promoted {
                ctx.log(
                    log::Level::Debug,
                    &format!("[MLFQ Policy] aging promotes {} to level {}", ctx.pid(task), level - 1),
                );
                self.enqueue(task, level - 1);
            }
        }
    }

    fn has_ready_above(&self, level: usize) -> bool {
        self.queues[..level].iter().any(|queue| !queue.is_empty())
    }
}

impl Scheduler for MlfqPolicy {
    fn on_event(&mut self, ctx: &mut dyn SimSchedCtx, event: SchedEvent) {
        match event {
            SchedEvent::ProcessArrived { task } => self.enqueue(task, 0),

            SchedEvent::Tick { current, .. } => {
                self.age(ctx);
                let level = self.level(current);
                if self.has_ready_above(level) {
                    ctx.log(
                        log::Level::Debug,
                        &format!("[MLFQ Policy] higher level ready, preempting {}", ctx.pid(current)),
                    );
                    ctx.request_reschedule();
                }
            }

            SchedEvent::SliceExpired { task } => {
                let level = (self.level(task) + 1).min(self.last_level());
                ctx.log(
                    log::Level::Debug,
                    &format!("[MLFQ Policy] {} used its quantum, now at level {}", ctx.pid(task), level),
                );
                self.enqueue(task, level);
            }

            SchedEvent::ProcessPreempted { task } => {
                let level = self.level(task);
                self.enqueue(task, level);
            }

            SchedEvent::ProcessExited { task, .. } => {
                self.level_of.remove(&task);
                self.waited.remove(&task);
            }
        }
    }

    fn pick_next(&mut self, _ctx: &mut dyn SimSchedCtx) -> DispatchDecision {
        for level in 0..self.queues.len() {
            if let Some(task) = self.queues[level].pop_front() {
                self.waited.insert(task, 0);
                return DispatchDecision::run_task(task, self.quantum_for(level));
            }
        }
        DispatchDecision::idle()
    }

    fn name(&self) -> &'static str {
        "MLFQ"
    }
}
