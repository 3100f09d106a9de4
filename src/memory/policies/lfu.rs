/*
 * LFU Page Replacement
 *
 * Evicts the page with the fewest references since it was loaded. Ties go
 * to the page whose last reference is oldest.
 *
 * Candidates live in an ordered index keyed by (frequency, last_used), so
 * the victim is always the first entry. `last_used` is the step number and
 * is unique per resident page, which keeps the keys unique too.
 */

use std::collections::BTreeMap;

use super::super::{
    frame_table::FrameTable,
    traits::{ReferenceCtx, ReplacementPolicy},
    types::FrameSlot,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct UsageKey {
    frequency: u64,
    last_used: usize,
}

/// Least-frequently-used replacement
pub struct LfuPolicy {
    /// Current key of each slot (None = not tracked)
    usage: Vec<Option<UsageKey>>,

    /// Eviction order
    index: BTreeMap<UsageKey, FrameSlot>,
}

impl LfuPolicy {
    pub fn new(capacity: usize) -> Self {
        Self {
            usage: vec![None; capacity],
            index: BTreeMap::new(),
        }
    }

    fn set(&mut self, slot: FrameSlot, key: UsageKey) {
        if let Some(old) = self.usage[slot].replace(key) {
            self.index.remove(&old);
        }
        self.index.insert(key, slot);
    }

    /// Reference count of the page in `slot`
    pub fn frequency(&self, slot: FrameSlot) -> Option<u64> {
        self.usage.get(slot).copied().flatten().map(|k| k.frequency)
    }
}

impl ReplacementPolicy for LfuPolicy {
    fn on_hit(&mut self, ctx: &ReferenceCtx<'_>, slot: FrameSlot) {
        let frequency = self.frequency(slot).unwrap_or(0) + 1;
        self.set(
            slot,
            UsageKey {
                frequency,
                last_used: ctx.step(),
            },
        );
    }

    fn select_victim(&mut self, _ctx: &ReferenceCtx<'_>, _frames: &FrameTable) -> FrameSlot {
        match self.index.pop_first() {
            Some((_, slot)) => {
                self.usage[slot] = None;
                slot
            }
            None => 0,
        }
    }

    fn on_load(&mut self, ctx: &ReferenceCtx<'_>, slot: FrameSlot) {
        self.set(
            slot,
            UsageKey {
                frequency: 1,
                last_used: ctx.step(),
            },
        );
    }

    fn name(&self) -> &'static str {
        "LFU"
    }
}
