/*
 * MRU Page Replacement
 *
 * Evicts the most recently touched page. Counter-intuitive for general
 * workloads but optimal for cyclic scans larger than the pool.
 */

use super::super::{
    frame_table::FrameTable,
    traits::{ReferenceCtx, ReplacementPolicy},
    types::FrameSlot,
};

/// Most-recently-used replacement
pub struct MruPolicy {
    /// Step of the last touch of each slot
    last_used: Vec<Option<usize>>,
}

impl MruPolicy {
    pub fn new(capacity: usize) -> Self {
        Self {
            last_used: vec![None; capacity],
        }
    }
}

impl ReplacementPolicy for MruPolicy {
    fn on_hit(&mut self, ctx: &ReferenceCtx<'_>, slot: FrameSlot) {
        self.last_used[slot] = Some(ctx.step());
    }

    fn select_victim(&mut self, _ctx: &ReferenceCtx<'_>, _frames: &FrameTable) -> FrameSlot {
        self.last_used
            .iter()
            .enumerate()
            .filter_map(|(slot, used)| used.map(|step| (step, slot)))
            .max()
            .map(|(_, slot)| slot)
            .unwrap_or(0)
    }

    fn on_load(&mut self, ctx: &ReferenceCtx<'_>, slot: FrameSlot) {
        self.last_used[slot] = Some(ctx.step());
    }

    fn name(&self) -> &'static str {
        "MRU"
    }
}
