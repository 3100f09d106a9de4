/*
 * Optimal (Belady) Page Replacement
 *
 * Evicts the resident page whose next reference lies farthest in the
 * future. A page that is never referenced again is infinitely far away and
 * wins immediately. Ties go to the lowest slot.
 *
 * Needs the whole reference sequence, so it is only usable in simulation.
 */

use super::super::{
    frame_table::FrameTable,
    traits::{ReferenceCtx, ReplacementPolicy},
    types::FrameSlot,
};

/// Clairvoyant replacement
#[derive(Default)]
pub struct OptimalPolicy;

impl OptimalPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for OptimalPolicy {
    fn on_hit(&mut self, _ctx: &ReferenceCtx<'_>, _slot: FrameSlot) {}

    fn select_victim(&mut self, ctx: &ReferenceCtx<'_>, frames: &FrameTable) -> FrameSlot {
        let upcoming = ctx.upcoming();
        let mut victim = None;
        let mut farthest = 0usize;

        for (slot, page) in frames.resident() {
            match upcoming.iter().position(|&p| p == page) {
                None => return slot,
                Some(distance) => {
                    if victim.is_none() || distance > farthest {
                        farthest = distance;
                        victim = Some(slot);
                    }
                }
            }
        }

        victim.unwrap_or(0)
    }

    fn on_load(&mut self, _ctx: &ReferenceCtx<'_>, _slot: FrameSlot) {}

    fn name(&self) -> &'static str {
        "Optimal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::types::PageId;

    fn table(pages: &[u64]) -> FrameTable {
        let mut frames = FrameTable::new(pages.len());
        for (slot, &p) in pages.iter().enumerate() {
            frames.load(slot, PageId(p));
        }
        frames
    }

    #[test]
    fn never_referenced_again_is_preferred() {
        let frames = table(&[1, 2, 3]);
        let seq: Vec<PageId> = [9, 1, 3].iter().map(|&p| PageId(p)).collect();
        let ctx = ReferenceCtx::new(0, &seq);
        assert_eq!(OptimalPolicy::new().select_victim(&ctx, &frames), 1);
    }

    #[test]
    fn farthest_next_use_wins() {
        let frames = table(&[1, 2, 3]);
        let seq: Vec<PageId> = [9, 2, 1, 3].iter().map(|&p| PageId(p)).collect();
        let ctx = ReferenceCtx::new(0, &seq);
        assert_eq!(OptimalPolicy::new().select_victim(&ctx, &frames), 2);
    }

    #[test]
    fn tie_goes_to_first_slot() {
        let frames = table(&[4, 5]);
        let seq: Vec<PageId> = [9].iter().map(|&p| PageId(p)).collect();
        let ctx = ReferenceCtx::new(0, &seq);
        assert_eq!(OptimalPolicy::new().select_victim(&ctx, &frames), 0);
    }
}
