/*
 * Process Abstraction
 *
 * This module defines the processes a scheduling run works on:
 *
 * - ProcessSpec: raw caller input, signed so that bad values can be
 *   reported instead of silently wrapping
 * - Process: a validated, immutable description (arrival, burst, priority)
 * - Workload: the validated process set in submission order
 *
 * Remaining time is run state and lives in the SchedulerCore, not here, so
 * one Workload can be replayed under any number of policies.
 */

use core::fmt;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::types::TaskId;
use crate::error::{ConfigurationError, Field, Result, ValidationError};

/// Caller-visible process identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pid(pub String);

impl Pid {
    pub fn new(id: impl Into<String>) -> Self {
        Pid(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Pid {
    fn from(id: &str) -> Self {
        Pid(id.to_string())
    }
}

impl From<String> for Pid {
    fn from(id: String) -> Self {
        Pid(id)
    }
}

/// Workload category
///
/// Informational only: no policy looks at it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessType {
    #[default]
    CpuBound,
    IoBound,
    Interactive,
    Batch,
    System,
}

impl ProcessType {
    /// Parse the short names used in process tables
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "cpu" | "cpu_bound" => Some(ProcessType::CpuBound),
            "io" | "io_bound" => Some(ProcessType::IoBound),
            "interactive" => Some(ProcessType::Interactive),
            "batch" => Some(ProcessType::Batch),
            "system" => Some(ProcessType::System),
            _ => None,
        }
    }
}

/// Unvalidated process description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub pid: Pid,
    pub arrival: i64,
    pub burst: i64,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub kind: ProcessType,
}

impl ProcessSpec {
    /// Spec with priority 0 and the default kind
    pub fn new(pid: impl Into<Pid>, arrival: i64, burst: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
            priority: 0,
            kind: ProcessType::default(),
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_kind(mut self, kind: ProcessType) -> Self {
        self.kind = kind;
        self
    }

    fn non_negative(&self, field: Field, value: i64) -> core::result::Result<u64, ValidationError> {
        u64::try_from(value).map_err(|_| ValidationError::Negative {
            pid: self.pid.clone(),
            field,
            value,
        })
    }

    /// Check field ranges and produce the immutable Process
    pub fn validate(&self) -> Result<Process> {
        let arrival = self.non_negative(Field::Arrival, self.arrival)?;
        let burst = self.non_negative(Field::Burst, self.burst)?;
        let priority = self.non_negative(Field::Priority, self.priority)?;

        if burst == 0 {
            return Err(ValidationError::ZeroBurst {
                pid: self.pid.clone(),
            }
            .into());
        }

        Ok(Process {
            pid: self.pid.clone(),
            arrival,
            burst,
            priority,
            kind: self.kind,
        })
    }
}

/// Validated process
///
/// `burst` is the total CPU demand and never changes. Lower `priority`
/// values mean higher priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub pid: Pid,
    pub arrival: u64,
    pub burst: u64,
    pub priority: u64,
    pub kind: ProcessType,
}

/// Validated process set, in submission order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workload {
    processes: Vec<Process>,
}

impl Workload {
    /// Validate `specs`
    ///
    /// Fails on an empty set or duplicate pid (ConfigurationError), and on
    /// negative fields or a zero burst (ValidationError).
    pub fn new(specs: Vec<ProcessSpec>) -> Result<Self> {
        if specs.is_empty() {
            return Err(ConfigurationError::EmptyWorkload.into());
        }

        let mut seen = HashSet::with_capacity(specs.len());
        let mut processes = Vec::with_capacity(specs.len());
        for spec in &specs {
            if !seen.insert(spec.pid.clone()) {
                return Err(ConfigurationError::DuplicatePid(spec.pid.clone()).into());
            }
            processes.push(spec.validate()?);
        }

        Ok(Self { processes })
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Process submitted at position `task`
    pub fn get(&self, task: TaskId) -> &Process {
        &self.processes[task.as_usize()]
    }

    pub fn find(&self, pid: &Pid) -> Option<&Process> {
        self.processes.iter().find(|p| &p.pid == pid)
    }

    /// Iterate with submission indices
    pub fn tasks(&self) -> impl Iterator<Item = (TaskId, &Process)> {
        self.processes
            .iter()
            .enumerate()
            .map(|(i, p)| (TaskId(i), p))
    }

    pub fn bursts(&self) -> impl Iterator<Item = u64> + '_ {
        self.processes.iter().map(|p| p.burst)
    }

    pub fn total_burst(&self) -> u64 {
        self.bursts().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn empty_workload_is_rejected() {
        assert_eq!(
            Workload::new(Vec::new()),
            Err(SimError::Configuration(ConfigurationError::EmptyWorkload))
        );
    }

    #[test]
    fn duplicate_pid_is_rejected() {
        let err = Workload::new(vec![ProcessSpec::new("A", 0, 1), ProcessSpec::new("A", 2, 3)]);
        assert_eq!(
            err,
            Err(SimError::Configuration(ConfigurationError::DuplicatePid(Pid::from("A"))))
        );
    }

    #[test]
    fn negative_fields_name_the_offender() {
        let err = Workload::new(vec![ProcessSpec::new("B", 0, 4).with_priority(-1)]);
        assert_eq!(
            err,
            Err(SimError::Validation(ValidationError::Negative {
                pid: Pid::from("B"),
                field: Field::Priority,
                value: -1,
            }))
        );

        let err = Workload::new(vec![ProcessSpec::new("C", -3, 4)]);
        assert!(matches!(
            err,
            Err(SimError::Validation(ValidationError::Negative { field: Field::Arrival, .. }))
        ));
    }

    #[test]
    fn zero_burst_is_rejected() {
        assert_eq!(
            Workload::new(vec![ProcessSpec::new("Z", 0, 0)]),
            Err(SimError::Validation(ValidationError::ZeroBurst { pid: Pid::from("Z") }))
        );
    }

    #[test]
    fn valid_workload_keeps_submission_order() {
        let workload = Workload::new(vec![
            ProcessSpec::new("B", 3, 2).with_kind(ProcessType::IoBound),
            ProcessSpec::new("A", 0, 5).with_priority(2),
        ])
        .unwrap();

        assert_eq!(workload.len(), 2);
        assert_eq!(workload.get(TaskId(0)).pid, Pid::from("B"));
        assert_eq!(workload.get(TaskId(1)).priority, 2);
        assert_eq!(workload.total_burst(), 7);
        assert_eq!(workload.find(&Pid::from("B")).map(|p| p.kind), Some(ProcessType::IoBound));
    }
}
