/*
 * Paging Manager
 *
 * This module provides the PagingManager ZST, the public entry point of the
 * page replacement engine. It validates the run configuration, builds the
 * policy, drives a PagingCore over the reference sequence and packages the
 * result as a SimulationTrace.
 */

use super::{
    paging_core::PagingCore,
    policies,
    types::{PageId, ReplacementPolicyKind, SimulationTrace},
};
use crate::config::PagingConfig;
use crate::error::Result;

/// Page replacement control
///
/// # Examples
///
/// ```rust
/// use cluu_sim::{PageId, PagingConfig, PagingManager, ReplacementPolicyKind};
///
/// let config = PagingConfig::new(ReplacementPolicyKind::Fifo, 3).unwrap();
/// let refs: Vec<PageId> = [7, 0, 1, 2].into_iter().map(PageId).collect();
/// let trace = PagingManager::run(&config, &refs).unwrap();
/// assert_eq!(trace.fault_count(), 4);
/// ```
pub struct PagingManager;

impl PagingManager {
    /// Run one policy over `sequence`
    ///
    /// Fails only if the configuration is invalid (frame count below 1).
    pub fn run(config: &PagingConfig, sequence: &[PageId]) -> Result<SimulationTrace> {
        config.validate()?;

        log::info!(
            "Page replacement run: policy={}, frames={}, references={}",
            config.policy,
            config.frame_count,
            sequence.len()
        );

        let mut core = PagingCore::new(
            policies::create(config.policy, config.frame_count),
            config.frame_count,
        );
        let steps = core.run(sequence);

        log::info!(
            "[{}] finished: {} fault(s) out of {} reference(s)",
            core.policy_name(),
            core.fault_count(),
            sequence.len()
        );

        Ok(SimulationTrace {
            policy: config.policy,
            frame_count: config.frame_count,
            steps,
        })
    }

    /// Run every policy over the same sequence, in `ReplacementPolicyKind::ALL` order
    pub fn compare(frame_count: usize, sequence: &[PageId]) -> Result<Vec<SimulationTrace>> {
        ReplacementPolicyKind::ALL
            .iter()
            .map(|&policy| PagingManager::run(&PagingConfig::new(policy, frame_count)?, sequence))
            .collect()
    }
}
