/*
 * Page Replacement Policies
 *
 * Each policy implements the ReplacementPolicy trait and is plugged into
 * the PagingCore for one run.
 *
 * Available policies:
 * - FifoPolicy:    evict the oldest load
 * - LruPolicy:     evict the least recently touched page
 * - OptimalPolicy: evict the page needed farthest in the future
 * - LfuPolicy:     evict the least frequently used page
 * - ClockPolicy:   second chance with a circular hand
 * - MruPolicy:     evict the most recently touched page
 */

pub mod clock;
pub mod fifo;
pub mod lfu;
pub mod lru;
pub mod mru;
pub mod optimal;

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
pub use mru::MruPolicy;
pub use optimal::OptimalPolicy;

use super::{traits::ReplacementPolicy, types::ReplacementPolicyKind};

/// Build a fresh policy instance for a pool of `capacity` frames
pub fn create(kind: ReplacementPolicyKind, capacity: usize) -> Box<dyn ReplacementPolicy> {
    match kind {
        ReplacementPolicyKind::Fifo => Box::new(FifoPolicy::new(capacity)),
        ReplacementPolicyKind::Lru => Box::new(LruPolicy::new(capacity)),
        ReplacementPolicyKind::Optimal => Box::new(OptimalPolicy::new()),
        ReplacementPolicyKind::Lfu => Box::new(LfuPolicy::new(capacity)),
        ReplacementPolicyKind::Clock => Box::new(ClockPolicy::new(capacity)),
        ReplacementPolicyKind::Mru => Box::new(MruPolicy::new(capacity)),
    }
}
