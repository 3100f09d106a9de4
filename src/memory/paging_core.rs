/*
 * Paging Core - Mechanism Layer
 *
 * PagingCore is the mechanism half of the page replacement engine. It:
 * 1. Owns the frame table for the duration of one run
 * 2. Classifies each reference as hit, cold miss (free slot) or eviction
 * 3. Performs every slot mutation and records the resulting Step
 * 4. Forwards hits, victim searches and loads to the active policy
 *
 * Policies decide *which* slot to reuse; the core decides *when* a decision
 * is needed and keeps the frame table consistent.
 */

use super::{
    frame_table::FrameTable,
    traits::{ReferenceCtx, ReplacementPolicy},
    types::{PageId, Step},
};

/// Page replacement mechanism
pub struct PagingCore<P: ?Sized + ReplacementPolicy = dyn ReplacementPolicy> {
    /// The active replacement policy
    policy: Box<P>,

    /// Memory state being simulated
    frames: FrameTable,

    /// Faults recorded so far
    faults: usize,
}

impl<P: ?Sized + ReplacementPolicy> PagingCore<P> {
    /// Create a core with an empty pool of `frame_count` slots
    ///
    /// `frame_count` has already been validated by PagingConfig.
    pub fn new(policy: Box<P>, frame_count: usize) -> Self {
        log::debug!(
            "PagingCore initialized with policy {} and {} frame(s)",
            policy.name(),
            frame_count
        );
        Self {
            policy,
            frames: FrameTable::new(frame_count),
            faults: 0,
        }
    }

    /// Name of the active policy
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    pub fn fault_count(&self) -> usize {
        self.faults
    }

    /// Serve reference `step` (0-based) of `sequence`
    pub fn serve(&mut self, sequence: &[PageId], step: usize) -> Step {
        let ctx = ReferenceCtx::new(step, sequence);
        let page = ctx.page();

        if let Some(slot) = self.frames.lookup(page) {
            self.policy.on_hit(&ctx, slot);
            log::trace!("[{}] step {}: hit {} in slot {}", self.policy.name(), step + 1, page, slot);
            return self.record(&ctx, false, None);
        }

        self.faults += 1;

        let (slot, evicted) = match self.frames.first_free() {
            Some(free) => (free, self.frames.load(free, page)),
            None => {
                let victim = self.policy.select_victim(&ctx, &self.frames);
                (victim, self.frames.load(victim, page))
            }
        };
        self.policy.on_load(&ctx, slot);

        match evicted {
            Some(old) => log::debug!(
                "[{}] step {}: replaced {} with {} in slot {}",
                self.policy.name(),
                step + 1,
                old,
                page,
                slot
            ),
            None => log::trace!("[{}] step {}: loaded {} into slot {}", self.policy.name(), step + 1, page, slot),
        }

        self.record(&ctx, true, evicted)
    }

    /// Serve every reference of `sequence` in order
    pub fn run(&mut self, sequence: &[PageId]) -> Vec<Step> {
        (0..sequence.len()).map(|step| self.serve(sequence, step)).collect()
    }

    fn record(&self, ctx: &ReferenceCtx<'_>, faulted: bool, evicted: Option<PageId>) -> Step {
        let action = match evicted {
            Some(old) => format!("replaced {} with {}", old, ctx.page()),
            None => String::new(),
        };

        Step {
            index: ctx.step() + 1,
            page: ctx.page(),
            frames: self.frames.snapshot(),
            faulted,
            evicted,
            action,
        }
    }
}
