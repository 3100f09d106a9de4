/*
 * Scheduler Manager
 *
 * This module provides the SchedulerManager ZST, the public entry point of
 * the CPU scheduling engine. It validates the run configuration, builds the
 * policy, plugs it into a fresh SchedulerCore and returns the timeline.
 */

use super::{
    policies,
    process::Workload,
    sched_core::SchedulerCore,
    timeline::ExecutionTimeline,
    types::SchedulingPolicy,
};
use crate::config::{MlfqConfig, SchedulingConfig, SelectorConfig};
use crate::error::Result;
use crate::selector::{AlgorithmSelector, Selection};

/// Scheduling control
///
/// SchedulerManager is a Zero-Sized Type (ZST) that groups the scheduling
/// entry points under a clear namespace. Every call builds its own core and
/// policy, so runs never share state.
///
/// # Examples
///
/// ```rust
/// use cluu_sim::{ProcessSpec, SchedulerManager, SchedulingConfig, SchedulingPolicy, Workload};
///
/// let workload = Workload::new(vec![
///     ProcessSpec::new("A", 0, 4),
///     ProcessSpec::new("B", 1, 3),
/// ])
/// .unwrap();
/// let config = SchedulingConfig::with_quantum(SchedulingPolicy::RoundRobin, 2).unwrap();
/// let timeline = SchedulerManager::run(&config, &workload).unwrap();
/// assert_eq!(timeline.makespan(), 7);
/// ```
pub struct SchedulerManager;

impl SchedulerManager {
    /// Simulate `workload` under the configured policy
    ///
    /// Fails only if the configuration is invalid; a Workload is valid by
    /// construction.
    pub fn run(config: &SchedulingConfig, workload: &Workload) -> Result<ExecutionTimeline> {
        config.validate()?;

        log::info!(
            "Scheduling run: policy={}, quantum={:?}, processes={}",
            config.policy,
            config.quantum,
            workload.len()
        );

        let mut core = SchedulerCore::new(config.policy, policies::create(config));
        Ok(core.run(workload))
    }

    /// Let the selector pick a policy, then run it
    pub fn run_auto(
        selector: &SelectorConfig,
        workload: &Workload,
    ) -> Result<(Selection, ExecutionTimeline)> {
        let selection = AlgorithmSelector::new(*selector)?.select(workload);
        log::info!(
            "Auto mode picked {} (mean burst {:.2}, variance {:.2})",
            selection.policy,
            selection.mean,
            selection.variance
        );

        let timeline = SchedulerManager::run(&selection.config()?, workload)?;
        Ok((selection, timeline))
    }

    /// Run every policy over the same workload, in `SchedulingPolicy::ALL` order
    ///
    /// `quantum` serves Round Robin and MLFQ; the other policies ignore it.
    pub fn compare(
        workload: &Workload,
        quantum: u64,
        mlfq: MlfqConfig,
    ) -> Result<Vec<ExecutionTimeline>> {
        SchedulingPolicy::ALL
            .iter()
            .map(|&policy| {
                let config = SchedulingConfig {
                    policy,
                    quantum: Some(quantum),
                    mlfq,
                };
                SchedulerManager::run(&config, workload)
            })
            .collect()
    }
}
