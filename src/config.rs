/*
 * Simulation Configuration
 *
 * Every run takes an explicit, immutable configuration struct instead of
 * reading shared mutable state. Constructors validate eagerly; structs that
 * arrive through serde (TOML files, JSON from a front end) are validated
 * again by the engines before a run starts.
 *
 * Defaults: 3 frames, FIFO, quantum 2.
 *
 * Example TOML:
 *
 * ```toml
 * [paging]
 * policy = "lru"
 * frame_count = 4
 *
 * [scheduling]
 * policy = "mlfq"
 * quantum = 2
 *
 * [scheduling.mlfq]
 * levels = 3
 * aging_threshold = 16
 * ```
 */

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};
use crate::memory::ReplacementPolicyKind;
use crate::scheduler::SchedulingPolicy;
use crate::scheduler::policies::mlfq::MAX_MLFQ_LEVELS;

/// Page replacement run configuration
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    pub policy: ReplacementPolicyKind,
    pub frame_count: usize,
}

impl PagingConfig {
    pub const DEFAULT_FRAME_COUNT: usize = 3;

    pub fn new(policy: ReplacementPolicyKind, frame_count: usize) -> Result<Self> {
        let config = Self { policy, frame_count };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_count < 1 {
            return Err(ConfigurationError::InvalidFrameCount(self.frame_count).into());
        }
        Ok(())
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            policy: ReplacementPolicyKind::Fifo,
            frame_count: Self::DEFAULT_FRAME_COUNT,
        }
    }
}

/// Multilevel feedback queue shape
///
/// Level `i` gets a quantum of `quantum << i`; the last level runs FCFS.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MlfqConfig {
    /// Number of queues, 2..=MAX_MLFQ_LEVELS
    pub levels: usize,

    /// Ticks a process may wait below the top level before it is promoted
    /// one level (None disables aging)
    pub aging_threshold: Option<u64>,
}

impl MlfqConfig {
    pub const DEFAULT_LEVELS: usize = 3;
    pub const DEFAULT_AGING_THRESHOLD: u64 = 16;

    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_MLFQ_LEVELS).contains(&self.levels) {
            return Err(ConfigurationError::InvalidMlfqLevels {
                got: self.levels,
                max: MAX_MLFQ_LEVELS,
            }
            .into());
        }
        if self.aging_threshold == Some(0) {
            return Err(ConfigurationError::InvalidAgingThreshold.into());
        }
        Ok(())
    }
}

impl Default for MlfqConfig {
    fn default() -> Self {
        Self {
            levels: Self::DEFAULT_LEVELS,
            aging_threshold: Some(Self::DEFAULT_AGING_THRESHOLD),
        }
    }
}

/// CPU scheduling run configuration
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingConfig {
    pub policy: SchedulingPolicy,

    /// Time slice for Round Robin, base slice for MLFQ; ignored otherwise
    pub quantum: Option<u64>,

    pub mlfq: MlfqConfig,
}

impl SchedulingConfig {
    pub const DEFAULT_QUANTUM: u64 = 2;

    /// Configuration without a quantum
    pub fn new(policy: SchedulingPolicy) -> Result<Self> {
        let config = Self {
            policy,
            quantum: None,
            mlfq: MlfqConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration with an explicit quantum
    pub fn with_quantum(policy: SchedulingPolicy, quantum: u64) -> Result<Self> {
        let config = Self {
            policy,
            quantum: Some(quantum),
            mlfq: MlfqConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// MLFQ configuration with an explicit shape
    pub fn mlfq(quantum: u64, mlfq: MlfqConfig) -> Result<Self> {
        let config = Self {
            policy: SchedulingPolicy::Mlfq,
            quantum: Some(quantum),
            mlfq,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.quantum {
            Some(0) => return Err(ConfigurationError::InvalidQuantum.into()),
            None if self.policy.needs_quantum() => {
                return Err(ConfigurationError::MissingQuantum {
                    policy: self.policy,
                }
                .into());
            }
            _ => {}
        }

        if self.policy == SchedulingPolicy::Mlfq {
            self.mlfq.validate()?;
        }
        Ok(())
    }

    /// Quantum, for policies that need one (validated to be present)
    pub fn quantum_or_default(&self) -> u64 {
        self.quantum.unwrap_or(Self::DEFAULT_QUANTUM)
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            policy: SchedulingPolicy::Fcfs,
            quantum: Some(Self::DEFAULT_QUANTUM),
            mlfq: MlfqConfig::default(),
        }
    }
}

/// Thresholds of the auto-mode heuristic
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Burst variance at or above which a workload counts as high variance
    pub high_variance: f64,

    /// Burst variance below which a workload counts as low variance
    pub low_variance: f64,

    /// Mean burst below which a workload counts as short
    pub low_mean: f64,

    /// Round Robin is only picked for more processes than this
    pub min_processes: usize,

    /// Quantum used when the heuristic picks Round Robin
    pub quantum: u64,
}

impl SelectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.quantum == 0 {
            return Err(ConfigurationError::InvalidQuantum.into());
        }
        Ok(())
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            high_variance: 2.0,
            low_variance: 2.0,
            low_mean: 5.0,
            min_processes: 5,
            quantum: SchedulingConfig::DEFAULT_QUANTUM,
        }
    }
}

/// Everything a front end needs to drive both engines
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub paging: PagingConfig,
    pub scheduling: SchedulingConfig,
    pub selector: SelectorConfig,
}

impl SimulationConfig {
    /// Parse and validate a TOML document; missing keys take defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.paging.validate()?;
        self.scheduling.validate()?;
        self.selector.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn zero_frames_is_a_configuration_error() {
        assert_eq!(
            PagingConfig::new(ReplacementPolicyKind::Lru, 0),
            Err(SimError::Configuration(ConfigurationError::InvalidFrameCount(0)))
        );
    }

    #[test]
    fn round_robin_requires_a_positive_quantum() {
        assert_eq!(
            SchedulingConfig::new(SchedulingPolicy::RoundRobin),
            Err(SimError::Configuration(ConfigurationError::MissingQuantum {
                policy: SchedulingPolicy::RoundRobin
            }))
        );
        assert_eq!(
            SchedulingConfig::with_quantum(SchedulingPolicy::RoundRobin, 0),
            Err(SimError::Configuration(ConfigurationError::InvalidQuantum))
        );
        assert!(SchedulingConfig::new(SchedulingPolicy::Fcfs).is_ok());
    }

    #[test]
    fn mlfq_level_count_is_bounded() {
        let shape = MlfqConfig {
            levels: 1,
            aging_threshold: None,
        };
        assert!(matches!(
            SchedulingConfig::mlfq(2, shape),
            Err(SimError::Configuration(ConfigurationError::InvalidMlfqLevels { got: 1, .. }))
        ));

        let shape = MlfqConfig {
            levels: MAX_MLFQ_LEVELS + 1,
            aging_threshold: None,
        };
        assert!(SchedulingConfig::mlfq(2, shape).is_err());
    }

    #[test]
    fn toml_document_fills_in_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            [paging]
            policy = "clock"
            frame_count = 4

            [scheduling]
            policy = "round_robin"
            quantum = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.paging.policy, ReplacementPolicyKind::Clock);
        assert_eq!(config.paging.frame_count, 4);
        assert_eq!(config.scheduling.policy, SchedulingPolicy::RoundRobin);
        assert_eq!(config.scheduling.quantum, Some(3));
        assert_eq!(config.scheduling.mlfq, MlfqConfig::default());
        assert_eq!(config.selector, SelectorConfig::default());
    }

    #[test]
    fn toml_document_is_validated() {
        let err = SimulationConfig::from_toml_str("[paging]\nframe_count = 0\n").unwrap_err();
        assert_eq!(err, SimError::Configuration(ConfigurationError::InvalidFrameCount(0)));

        let err = SimulationConfig::from_toml_str("[paging]\nframe_count = \"x\"\n").unwrap_err();
        assert!(matches!(err, SimError::ConfigFile(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
