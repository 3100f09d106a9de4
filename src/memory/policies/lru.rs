/*
 * LRU Page Replacement
 *
 * Evicts the least recently touched page. Both hits and loads count as a
 * touch.
 *
 * Recency is kept in an intrusive doubly linked list threaded through the
 * slots themselves: `prev`/`next` are indexed by slot, so moving a slot to
 * the most-recent end and popping the least-recent one are both O(1). The
 * frame table's page->slot index plays the role of the hash index.
 */

use super::super::{
    frame_table::FrameTable,
    traits::{ReferenceCtx, ReplacementPolicy},
    types::FrameSlot,
};

/// Link node for one slot
#[derive(Debug, Copy, Clone, Default)]
struct Link {
    prev: Option<FrameSlot>,
    next: Option<FrameSlot>,
    linked: bool,
}

/// Least-recently-used replacement
pub struct LruPolicy {
    links: Vec<Link>,

    /// Least recently used slot
    head: Option<FrameSlot>,

    /// Most recently used slot
    tail: Option<FrameSlot>,
}

impl LruPolicy {
    pub fn new(capacity: usize) -> Self {
        Self {
            links: vec![Link::default(); capacity],
            head: None,
            tail: None,
        }
    }

    fn unlink(&mut self, slot: FrameSlot) {
        let Link { prev, next, linked } = self.links[slot];
        if !linked {
            return;
        }

        match prev {
            Some(p) => self.links[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.links[n].prev = prev,
            None => self.tail = prev,
        }

        self.links[slot] = Link::default();
    }

    fn push_back(&mut self, slot: FrameSlot) {
        self.links[slot] = Link {
            prev: self.tail,
            next: None,
            linked: true,
        };
        match self.tail {
            Some(t) => self.links[t].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    /// Move `slot` to the most-recent end
    fn touch(&mut self, slot: FrameSlot) {
        if self.tail == Some(slot) {
            return;
        }
        self.unlink(slot);
        self.push_back(slot);
    }

    /// Slots from least to most recently used
    pub fn recency_order(&self) -> Vec<FrameSlot> {
        let mut order = Vec::with_capacity(self.links.len());
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            order.push(slot);
            cursor = self.links[slot].next;
        }
        order
    }
}

impl ReplacementPolicy for LruPolicy {
    fn on_hit(&mut self, _ctx: &ReferenceCtx<'_>, slot: FrameSlot) {
        self.touch(slot);
    }

    fn select_victim(&mut self, _ctx: &ReferenceCtx<'_>, _frames: &FrameTable) -> FrameSlot {
        // Full pool: every slot is linked, the head is the LRU one
        let victim = self.head.unwrap_or(0);
        self.unlink(victim);
        victim
    }

    fn on_load(&mut self, _ctx: &ReferenceCtx<'_>, slot: FrameSlot) {
        self.touch(slot);
    }

    fn name(&self) -> &'static str {
        "LRU"
    }
}
