/*
 * Error Taxonomy
 *
 * Two families of failure exist, and both are detected before a simulation
 * starts:
 *
 * - ConfigurationError: the run itself is malformed (frame count, quantum,
 *   empty workload, duplicate pid, MLFQ shape)
 * - ValidationError: a single input field is out of range or unreadable
 *
 * Engines never fail mid-run: once inputs are validated every policy has a
 * total decision at every step.
 */

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scheduler::{Pid, SchedulingPolicy};

/// Input field that failed validation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Arrival,
    Burst,
    Priority,
    Page,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Arrival => "arrival",
            Field::Burst => "burst",
            Field::Priority => "priority",
            Field::Page => "page",
        };
        f.write_str(name)
    }
}

/// The run is malformed as a whole
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("frame count must be at least 1 (got {0})")]
    InvalidFrameCount(usize),

    #[error("quantum must be greater than 0")]
    InvalidQuantum,

    #[error("{policy} requires a quantum")]
    MissingQuantum { policy: SchedulingPolicy },

    #[error("MLFQ needs between 2 and {max} levels (got {got})")]
    InvalidMlfqLevels { got: usize, max: usize },

    #[error("MLFQ aging threshold must be greater than 0")]
    InvalidAgingThreshold,

    #[error("workload contains no processes")]
    EmptyWorkload,

    #[error("duplicate pid {0}")]
    DuplicatePid(Pid),
}

/// A single field of the input is out of range or unreadable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("process {pid}: {field} must not be negative (got {value})")]
    Negative { pid: Pid, field: Field, value: i64 },

    #[error("process {pid}: burst must be greater than 0")]
    ZeroBurst { pid: Pid },

    #[error("{field} is not a number: {token:?}")]
    NotNumeric { field: Field, token: String },

    #[error("line {line}: expected `pid arrival burst [priority [kind]]`")]
    MalformedLine { line: usize },

    #[error("line {line}: unknown process kind {token:?}")]
    UnknownKind { line: usize, token: String },
}

/// Any failure the simulator can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("config file error: {0}")]
    ConfigFile(#[from] toml::de::Error),
}

pub type Result<T> = core::result::Result<T, SimError>;
