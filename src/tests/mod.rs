/*
 * Scenario Test Suite
 *
 * Cross-module tests that drive the public entry points end to end:
 *
 * - `paging`      - golden traces and invariants of the replacement engine
 * - `scheduling`  - golden timelines and invariants of the CPU engine
 * - `determinism` - identical inputs serialize to identical outputs
 *
 * Randomized properties use a seeded StdRng so failures reproduce.
 */

mod determinism;
mod paging;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::memory::PageId;
use crate::scheduler::{ProcessSpec, Workload};

pub(crate) fn pages(raw: &[u64]) -> Vec<PageId> {
    raw.iter().copied().map(PageId).collect()
}

pub(crate) fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random reference sequence over a small page universe
pub(crate) fn random_sequence(rng: &mut StdRng, len: usize, universe: u64) -> Vec<PageId> {
    (0..len).map(|_| PageId(rng.gen_range(0..universe))).collect()
}

/// Random workload of 1..=8 processes named P1, P2, ...
pub(crate) fn random_workload(rng: &mut StdRng) -> Workload {
    let count = rng.gen_range(1..=8);
    let specs = (1..=count)
        .map(|i| {
            ProcessSpec::new(
                format!("P{}", i),
                rng.gen_range(0..12),
                rng.gen_range(1..9),
            )
            .with_priority(rng.gen_range(0..5))
        })
        .collect();
    match Workload::new(specs) {
        Ok(workload) => workload,
        Err(err) => panic!("generated workload is invalid: {}", err),
    }
}
