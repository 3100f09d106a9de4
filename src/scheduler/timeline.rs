/*
 * Execution Timeline
 *
 * The result of one scheduling run: an ordered list of run slices and idle
 * gaps covering [0, makespan) with no overlap. Each dispatch of a process
 * produces exactly one run slice; consecutive idle ticks are merged into a
 * single gap.
 */

use serde::{Deserialize, Serialize};

use super::{process::Pid, types::SchedulingPolicy};

/// One contiguous CPU allocation, half-open `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    pub pid: Pid,
    pub start: u64,
    pub end: u64,
    /// Arrival of the owning process, copied for display
    pub arrival: u64,
    /// Full burst of the owning process, copied for display
    pub burst: u64,
}

impl ExecutionSlice {
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineEntry {
    Run(ExecutionSlice),
    Idle { start: u64, end: u64 },
}

impl TimelineEntry {
    pub fn start(&self) -> u64 {
        match self {
            TimelineEntry::Run(slice) => slice.start,
            TimelineEntry::Idle { start, .. } => *start,
        }
    }

    pub fn end(&self) -> u64 {
        match self {
            TimelineEntry::Run(slice) => slice.end,
            TimelineEntry::Idle { end, .. } => *end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionTimeline {
    policy: SchedulingPolicy,
    entries: Vec<TimelineEntry>,
}

impl ExecutionTimeline {
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
        }
    }

    pub fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a run slice
    pub(crate) fn push_run(&mut self, slice: ExecutionSlice) {
        debug_assert!(slice.start < slice.end);
        debug_assert_eq!(slice.start, self.makespan());
        self.entries.push(TimelineEntry::Run(slice));
    }

    /// Append `[start, end)` as idle, extending a trailing gap if there is one
    pub(crate) fn push_idle(&mut self, start: u64, end: u64) {
        debug_assert!(start < end);
        if let Some(TimelineEntry::Idle { end: gap_end, .. }) = self.entries.last_mut() {
            if *gap_end == start {
                *gap_end = end;
                return;
            }
        }
        self.entries.push(TimelineEntry::Idle { start, end });
    }

    /// Run slices in time order
    pub fn slices(&self) -> impl Iterator<Item = &ExecutionSlice> {
        self.entries.iter().filter_map(|entry| match entry {
            TimelineEntry::Run(slice) => Some(slice),
            TimelineEntry::Idle { .. } => None,
        })
    }

    /// Idle gaps as `(start, end)` pairs
    pub fn idle_gaps(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            TimelineEntry::Idle { start, end } => Some((*start, *end)),
            TimelineEntry::Run(_) => None,
        })
    }

    pub fn slices_for<'a>(&'a self, pid: &'a Pid) -> impl Iterator<Item = &'a ExecutionSlice> + 'a {
        self.slices().filter(move |slice| &slice.pid == pid)
    }

    /// End of the last entry (0 for an empty timeline)
    pub fn makespan(&self) -> u64 {
        self.entries.last().map_or(0, TimelineEntry::end)
    }

    /// Ticks spent running processes
    pub fn busy_time(&self) -> u64 {
        self.slices().map(ExecutionSlice::duration).sum()
    }

    pub fn idle_time(&self) -> u64 {
        self.idle_gaps().map(|(start, end)| end - start).sum()
    }

    /// Run slices whose preceding run slice belongs to another pid
    ///
    /// Idle gaps do not count; back-to-back slices of one pid are not a
    /// switch.
    pub fn context_switches(&self) -> usize {
        let mut previous: Option<&Pid> = None;
        let mut switches = 0;
        for slice in self.slices() {
            if let Some(prev) = previous {
                if prev != &slice.pid {
                    switches += 1;
                }
            }
            previous = Some(&slice.pid);
        }
        switches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(pid: &str, start: u64, end: u64) -> ExecutionSlice {
        ExecutionSlice {
            pid: Pid::from(pid),
            start,
            end,
            arrival: 0,
            burst: end - start,
        }
    }

    #[test]
    fn idle_ticks_merge() {
        let mut timeline = ExecutionTimeline::new(SchedulingPolicy::Fcfs);
        timeline.push_idle(0, 1);
        timeline.push_idle(1, 2);
        timeline.push_run(slice("A", 2, 4));
        timeline.push_idle(4, 5);

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.idle_gaps().collect::<Vec<_>>(), vec![(0, 2), (4, 5)]);
        assert_eq!(timeline.idle_time(), 3);
        assert_eq!(timeline.busy_time(), 2);
        assert_eq!(timeline.makespan(), 5);
    }

    #[test]
    fn context_switches_skip_same_pid_and_idle() {
        let mut timeline = ExecutionTimeline::new(SchedulingPolicy::RoundRobin);
        timeline.push_run(slice("A", 0, 2));
        timeline.push_run(slice("A", 2, 4));
        timeline.push_idle(4, 6);
        timeline.push_run(slice("B", 6, 7));
        timeline.push_run(slice("A", 7, 8));

        assert_eq!(timeline.context_switches(), 2);
        assert_eq!(timeline.slices_for(&Pid::from("A")).count(), 3);
    }

    #[test]
    fn entries_serialize_with_kind_tag() {
        let mut timeline = ExecutionTimeline::new(SchedulingPolicy::Fcfs);
        timeline.push_idle(0, 1);
        let json = serde_json::to_string(&timeline).unwrap();
        assert!(json.contains(r#""kind":"idle""#));
        assert!(json.contains(r#""policy":"fcfs""#));
    }
}
