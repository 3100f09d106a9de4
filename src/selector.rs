/*
 * Algorithm Selector ("auto mode")
 *
 * Picks a scheduling policy from the burst distribution of a workload:
 *
 *   variance >= high threshold and more than `min_processes` processes
 *       -> Round Robin
 *   variance <  low threshold and mean < `low_mean`
 *       -> SJF (non-preemptive)
 *   otherwise
 *       -> FCFS
 *
 * Variance is the population variance of the burst times.
 */

use serde::{Deserialize, Serialize};

use crate::config::{SchedulingConfig, SelectorConfig};
use crate::error::Result;
use crate::scheduler::{SchedulingPolicy, Workload};
use crate::utils::stats::{mean, population_variance};

/// Outcome of the heuristic and the statistics behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub policy: SchedulingPolicy,

    /// Quantum to run with (Round Robin only)
    pub quantum: Option<u64>,

    pub mean: f64,
    pub variance: f64,
    pub process_count: usize,
}

impl Selection {
    /// Scheduling configuration that runs the chosen policy
    pub fn config(&self) -> Result<SchedulingConfig> {
        match self.quantum {
            Some(quantum) => SchedulingConfig::with_quantum(self.policy, quantum),
            None => SchedulingConfig::new(self.policy),
        }
    }
}

pub struct AlgorithmSelector {
    config: SelectorConfig,
}

impl AlgorithmSelector {
    pub fn new(config: SelectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn select(&self, workload: &Workload) -> Selection {
        let bursts: Vec<f64> = workload.bursts().map(|b| b as f64).collect();
        let mean = mean(bursts.iter().copied());
        let variance = population_variance(&bursts);
        let process_count = workload.len();

        let policy = if variance >= self.config.high_variance
            && process_count > self.config.min_processes
        {
            SchedulingPolicy::RoundRobin
        } else if variance < self.config.low_variance && mean < self.config.low_mean {
            SchedulingPolicy::SjfNonPreemptive
        } else {
            SchedulingPolicy::Fcfs
        };

        log::debug!(
            "[Selector] n={}, mean={:.3}, variance={:.3} -> {}",
            process_count,
            mean,
            variance,
            policy
        );

        Selection {
            policy,
            quantum: policy.needs_quantum().then_some(self.config.quantum),
            mean,
            variance,
            process_count,
        }
    }
}

impl Default for AlgorithmSelector {
    fn default() -> Self {
        Self {
            config: SelectorConfig::default(),
        }
    }
}
