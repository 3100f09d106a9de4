/*
 * Frame Table
 *
 * The frame table is the memory state of one page replacement run: a
 * fixed-size pool of slots, each holding at most one page, plus a reverse
 * index from page to slot so residency checks are O(1).
 *
 * Only the PagingCore mutates it. Policies get a shared reference when they
 * have to pick a victim and keep any metadata of their own on the side.
 */

use std::collections::HashMap;

use super::types::{FrameSlot, PageId};

/// Fixed-size pool of page frames
#[derive(Debug, Clone)]
pub struct FrameTable {
    /// Slot contents (None = free)
    slots: Vec<Option<PageId>>,

    /// Reverse index: resident page -> slot
    index: HashMap<PageId, FrameSlot>,
}

impl FrameTable {
    /// Create an empty pool with `capacity` slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Number of slots in the pool
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.index.len()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == self.capacity()
    }

    /// Slot holding `page`, if it is resident
    pub fn lookup(&self, page: PageId) -> Option<FrameSlot> {
        self.index.get(&page).copied()
    }

    /// Page held by `slot`
    pub fn page(&self, slot: FrameSlot) -> Option<PageId> {
        self.slots.get(slot).copied().flatten()
    }

    /// Lowest-index free slot
    pub fn first_free(&self) -> Option<FrameSlot> {
        self.slots.iter().position(Option::is_none)
    }

    /// Iterate over occupied slots in slot order
    pub fn resident(&self) -> impl Iterator<Item = (FrameSlot, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, page)| page.map(|p| (slot, p)))
    }

    /// Place `page` in `slot`, returning the page it displaced
    ///
    /// The caller guarantees `page` is not already resident.
    pub fn load(&mut self, slot: FrameSlot, page: PageId) -> Option<PageId> {
        debug_assert!(!self.index.contains_key(&page), "page {} already resident", page);

        let evicted = self.slots[slot].replace(page);
        if let Some(old) = evicted {
            self.index.remove(&old);
        }
        self.index.insert(page, slot);
        evicted
    }

    /// Copy of every slot, in slot order
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}
