/*
 * Clock (Second Chance) Page Replacement
 *
 * Slots form a circle with a persistent hand. On a fault with a full pool
 * the hand sweeps forward:
 *
 * - REFERENCED clear: evict here, stop
 * - REFERENCED set:   clear it, advance, keep sweeping
 *
 * Loading a page sets its REFERENCED bit and leaves the hand just past it.
 * Since every pass clears bits, a sweep needs at most 2 x F advances.
 */

use super::super::{
    frame_table::FrameTable,
    traits::{ReferenceCtx, ReplacementPolicy},
    types::{FrameFlags, FrameSlot},
};

/// Second-chance replacement
pub struct ClockPolicy {
    flags: Vec<FrameFlags>,

    /// Clock hand
    hand: FrameSlot,

    /// Hand advances spent by the most recent victim search
    last_sweep: usize,
}

impl ClockPolicy {
    pub fn new(capacity: usize) -> Self {
        Self {
            flags: vec![FrameFlags::empty(); capacity],
            hand: 0,
            last_sweep: 0,
        }
    }

    fn advance(&mut self) {
        self.hand = (self.hand + 1) % self.flags.len();
    }

    /// Current hand position
    pub fn hand(&self) -> FrameSlot {
        self.hand
    }

    /// Advances taken by the last victim search, including the one past the
    /// victim itself
    pub fn last_sweep(&self) -> usize {
        self.last_sweep
    }

    /// Whether `slot` has its use bit set
    pub fn is_referenced(&self, slot: FrameSlot) -> bool {
        self.flags
            .get(slot)
            .is_some_and(|f| f.contains(FrameFlags::REFERENCED))
    }
}

impl ReplacementPolicy for ClockPolicy {
    fn on_hit(&mut self, _ctx: &ReferenceCtx<'_>, slot: FrameSlot) {
        self.flags[slot].insert(FrameFlags::REFERENCED);
    }

    fn select_victim(&mut self, _ctx: &ReferenceCtx<'_>, _frames: &FrameTable) -> FrameSlot {
        let mut cleared = 0;
        while self.flags[self.hand].contains(FrameFlags::REFERENCED) {
            self.flags[self.hand].remove(FrameFlags::REFERENCED);
            self.advance();
            cleared += 1;
        }

        // on_load moves the hand past the victim
        self.last_sweep = cleared + 1;
        log::trace!("[Clock] victim slot {} after clearing {} bits", self.hand, cleared);
        self.hand
    }

    fn on_load(&mut self, _ctx: &ReferenceCtx<'_>, slot: FrameSlot) {
        self.flags[slot].insert(FrameFlags::REFERENCED);
        self.hand = slot;
        self.advance();
    }

    fn name(&self) -> &'static str {
        "Clock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::types::PageId;

    #[test]
    fn full_sweep_clears_every_bit_then_evicts_at_start() {
        let seq = [PageId(0)];
        let ctx = ReferenceCtx::new(0, &seq);
        let frames = FrameTable::new(3);
        let mut clock = ClockPolicy::new(3);
        for slot in 0..3 {
            clock.on_load(&ctx, slot);
        }
        assert_eq!(clock.hand(), 0);

        let victim = clock.select_victim(&ctx, &frames);
        assert_eq!(victim, 0);
        assert_eq!(clock.last_sweep(), 4);
        assert!(!clock.is_referenced(1));
        assert!(!clock.is_referenced(2));

        clock.on_load(&ctx, victim);
        assert!(clock.is_referenced(0));
        assert_eq!(clock.hand(), 1);
    }

    #[test]
    fn unreferenced_slot_is_taken_immediately() {
        let seq = [PageId(0)];
        let ctx = ReferenceCtx::new(0, &seq);
        let frames = FrameTable::new(2);
        let mut clock = ClockPolicy::new(2);
        clock.on_load(&ctx, 0);
        clock.on_load(&ctx, 1);
        clock.select_victim(&ctx, &frames);
        clock.on_load(&ctx, 0);

        // slot 1 was cleared by the previous sweep
        assert_eq!(clock.select_victim(&ctx, &frames), 1);
        assert_eq!(clock.last_sweep(), 1);
    }
}
