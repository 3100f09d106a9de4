/*
 * Memory Types
 *
 * This module defines the core types used by the page replacement engine:
 * page identifiers, frame slots and their flags, and the trace records the
 * engine hands back to callers.
 */

use core::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Page identifier
///
/// Pages carry no payload; the engine only compares them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl PageId {
    /// Get the raw identifier
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PageId {
    fn from(value: u64) -> Self {
        PageId(value)
    }
}

/// Index of a slot in the frame pool
///
/// The pool is a fixed-size array of frames; a slot is an index into it.
pub type FrameSlot = usize;

bitflags! {
    /// Per-frame hardware-style flags
    ///
    /// Only the reference ("use") bit is consumed today, by the Clock policy.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct FrameFlags: u8 {
        /// Frame was referenced since the clock hand last passed it
        const REFERENCED = 1 << 0;
    }
}

/// Page replacement policy selector
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementPolicyKind {
    Fifo,
    Lru,
    Optimal,
    Lfu,
    Clock,
    Mru,
}

impl ReplacementPolicyKind {
    /// Every policy, in display order
    pub const ALL: [ReplacementPolicyKind; 6] = [
        ReplacementPolicyKind::Fifo,
        ReplacementPolicyKind::Lru,
        ReplacementPolicyKind::Optimal,
        ReplacementPolicyKind::Lfu,
        ReplacementPolicyKind::Clock,
        ReplacementPolicyKind::Mru,
    ];

    /// Short display name
    pub fn name(self) -> &'static str {
        match self {
            ReplacementPolicyKind::Fifo => "FIFO",
            ReplacementPolicyKind::Lru => "LRU",
            ReplacementPolicyKind::Optimal => "Optimal",
            ReplacementPolicyKind::Lfu => "LFU",
            ReplacementPolicyKind::Clock => "Clock",
            ReplacementPolicyKind::Mru => "MRU",
        }
    }
}

impl Default for ReplacementPolicyKind {
    fn default() -> Self {
        ReplacementPolicyKind::Fifo
    }
}

impl fmt::Display for ReplacementPolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One reference of the simulation
///
/// `frames` is a snapshot of every slot after the reference was served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based position in the reference sequence
    pub index: usize,

    /// Page that was referenced
    pub page: PageId,

    /// Slot contents after this step (None = free slot)
    pub frames: Vec<Option<PageId>>,

    /// Whether the reference missed
    pub faulted: bool,

    /// Page evicted to make room, if any
    pub evicted: Option<PageId>,

    /// Human-readable note, empty unless a page was replaced
    pub action: String,
}

/// Ordered record of a complete page replacement run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationTrace {
    pub policy: ReplacementPolicyKind,
    pub frame_count: usize,
    pub steps: Vec<Step>,
}

impl SimulationTrace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of references that missed
    pub fn fault_count(&self) -> usize {
        self.steps.iter().filter(|s| s.faulted).count()
    }

    /// Number of references served from a resident frame
    pub fn hit_count(&self) -> usize {
        self.len() - self.fault_count()
    }

    /// Fault rate in percent (0 for an empty trace)
    pub fn fault_rate(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.fault_count() as f64 / self.len() as f64 * 100.0
    }

    /// Hit rate in percent (0 for an empty trace)
    pub fn hit_rate(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        100.0 - self.fault_rate()
    }

    /// 1-based indices of the steps that faulted
    pub fn fault_steps(&self) -> Vec<usize> {
        self.steps
            .iter()
            .filter(|s| s.faulted)
            .map(|s| s.index)
            .collect()
    }

    /// Running fault total after each step
    pub fn cumulative_faults(&self) -> Vec<usize> {
        self.steps
            .iter()
            .scan(0usize, |total, step| {
                if step.faulted {
                    *total += 1;
                }
                Some(*total)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(index: usize, faulted: bool) -> Step {
        Step {
            index,
            page: PageId(index as u64),
            frames: vec![Some(PageId(index as u64))],
            faulted,
            evicted: None,
            action: String::new(),
        }
    }

    #[test]
    fn empty_trace_rates_are_zero() {
        let trace = SimulationTrace {
            policy: ReplacementPolicyKind::Lru,
            frame_count: 2,
            steps: Vec::new(),
        };
        assert_eq!(trace.fault_count(), 0);
        assert_eq!(trace.fault_rate(), 0.0);
        assert_eq!(trace.hit_rate(), 0.0);
        assert!(trace.cumulative_faults().is_empty());
    }

    #[test]
    fn cumulative_faults_track_fault_steps() {
        let trace = SimulationTrace {
            policy: ReplacementPolicyKind::Fifo,
            frame_count: 1,
            steps: vec![step(1, true), step(2, false), step(3, true), step(4, false)],
        };
        assert_eq!(trace.fault_steps(), vec![1, 3]);
        assert_eq!(trace.cumulative_faults(), vec![1, 1, 2, 2]);
        assert_eq!(trace.hit_count(), 2);
        assert_eq!(trace.fault_rate(), 50.0);
    }

    #[test]
    fn policy_names_deserialize_lowercase() {
        let kind: ReplacementPolicyKind = toml::from_str::<Wrapper>("policy = \"clock\"")
            .map(|w| w.policy)
            .unwrap();
        assert_eq!(kind, ReplacementPolicyKind::Clock);
    }

    #[derive(Deserialize)]
    struct Wrapper {
        policy: ReplacementPolicyKind,
    }
}
