/*
 * Page Replacement Trait Definitions
 *
 * Mirrors the scheduler split between policy and mechanism:
 *
 * - ReplacementPolicy: the eviction algorithm (FIFO, LRU, Clock, ...)
 * - ReferenceCtx: what the mechanism tells a policy about the reference
 *   currently being served
 *
 * The PagingCore owns the frame table and performs every slot mutation. A
 * policy only keeps its own bookkeeping and names a victim slot when the
 * pool is full.
 */

use super::frame_table::FrameTable;
use super::types::{FrameSlot, PageId};

/// The reference currently being served
#[derive(Debug, Copy, Clone)]
pub struct ReferenceCtx<'a> {
    step: usize,
    sequence: &'a [PageId],
}

impl<'a> ReferenceCtx<'a> {
    /// Context for reference number `step` (0-based) of `sequence`
    pub fn new(step: usize, sequence: &'a [PageId]) -> Self {
        debug_assert!(step < sequence.len());
        Self { step, sequence }
    }

    /// 0-based position of the reference; doubles as a logical clock
    pub fn step(&self) -> usize {
        self.step
    }

    /// Page being referenced
    pub fn page(&self) -> PageId {
        self.sequence[self.step]
    }

    /// References still to come after this one
    pub fn upcoming(&self) -> &'a [PageId] {
        &self.sequence[self.step + 1..]
    }
}

/// Page replacement policy
///
/// The mechanism drives a policy through three notifications:
///
/// 1. `on_hit` when the referenced page is already resident
/// 2. `select_victim` when the page missed and no slot is free
/// 3. `on_load` once the page has been written into a slot, whether that
///    slot was free or just vacated by the victim
///
/// `select_victim` is only called on a full pool and must return an occupied
/// slot. Policies must not depend on anything but their own bookkeeping and
/// the arguments they receive, so that runs stay deterministic.
pub trait ReplacementPolicy {
    /// A resident page in `slot` was referenced again
    fn on_hit(&mut self, ctx: &ReferenceCtx<'_>, slot: FrameSlot);

    /// Choose the slot to evict for `ctx.page()`
    fn select_victim(&mut self, ctx: &ReferenceCtx<'_>, frames: &FrameTable) -> FrameSlot;

    /// `ctx.page()` now lives in `slot`
    fn on_load(&mut self, ctx: &ReferenceCtx<'_>, slot: FrameSlot);

    /// Policy name for logs
    fn name(&self) -> &'static str;
}
