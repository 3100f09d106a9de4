/*
 * Ready Set
 *
 * Unordered pool of ready tasks with comparator-driven selection. Shared by
 * the key-ordered policies (SJF, SRTF, Priority) whose keys change as tasks
 * run, so a heap keyed at insertion time would go stale.
 */

use core::cmp::Ordering;

use super::super::types::TaskId;

#[derive(Debug, Default)]
pub struct ReadySet {
    tasks: Vec<TaskId>,
}

impl ReadySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, task: TaskId) {
        if !self.tasks.contains(&task) {
            self.tasks.push(task);
        }
    }

    pub fn remove(&mut self, task: TaskId) {
        self.tasks.retain(|&t| t != task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Smallest task under `cmp`
    pub fn best_by<F>(&self, mut cmp: F) -> Option<TaskId>
    where
        F: FnMut(TaskId, TaskId) -> Ordering,
    {
        self.tasks.iter().copied().min_by(|&a, &b| cmp(a, b))
    }

    /// Remove and return the smallest task under `cmp`
    pub fn take_best_by<F>(&mut self, cmp: F) -> Option<TaskId>
    where
        F: FnMut(TaskId, TaskId) -> Ordering,
    {
        let best = self.best_by(cmp)?;
        self.remove(best);
        Some(best)
    }
}
