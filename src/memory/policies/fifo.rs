/*
 * FIFO Page Replacement
 *
 * Evicts the page that has been resident the longest. Residency order is
 * fixed at load time; hits do not refresh it.
 */

use std::collections::VecDeque;

use super::super::{
    frame_table::FrameTable,
    traits::{ReferenceCtx, ReplacementPolicy},
    types::FrameSlot,
};

/// First-in first-out replacement
pub struct FifoPolicy {
    /// Slots in load order, oldest at the front
    load_order: VecDeque<FrameSlot>,
}

impl FifoPolicy {
    pub fn new(capacity: usize) -> Self {
        Self {
            load_order: VecDeque::with_capacity(capacity),
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn on_hit(&mut self, _ctx: &ReferenceCtx<'_>, _slot: FrameSlot) {}

    fn select_victim(&mut self, _ctx: &ReferenceCtx<'_>, _frames: &FrameTable) -> FrameSlot {
        // The pool is full, so every slot is queued exactly once
        self.load_order.pop_front().unwrap_or(0)
    }

    fn on_load(&mut self, _ctx: &ReferenceCtx<'_>, slot: FrameSlot) {
        self.load_order.push_back(slot);
    }

    fn name(&self) -> &'static str {
        "FIFO"
    }
}
