/*
 * CLUU Policy Simulator
 *
 * Host-side library that replays two families of operating-system
 * resource-management policy against a synthetic workload:
 *
 * - Page replacement (memory): FIFO, LRU, Optimal, LFU, Clock, MRU
 * - CPU scheduling (scheduler): FCFS, SJF, SRTF, Priority (both flavours),
 *   Round Robin, Multilevel Feedback Queue
 *
 * Every run is single-threaded and deterministic. The engines follow the
 * same policy/mechanism split as the kernel scheduler: a core owns the
 * simulated state and forwards events to a pluggable policy, which answers
 * with decisions. Results (traces, timelines, metrics) are plain values that
 * a presentation layer consumes read-only.
 *
 * Module map:
 * - `memory`    - page replacement engine and policies
 * - `scheduler` - CPU scheduling engine and policies
 * - `metrics`   - per-process and aggregate metrics over a timeline
 * - `selector`  - the "auto mode" policy heuristic
 * - `workload`  - text input helpers (reference strings, process tables)
 * - `config`    - validated configuration structs
 * - `error`     - error taxonomy
 * - `utils`     - logger and small numeric helpers
 */

pub mod config;
pub mod error;
pub mod memory;
pub mod metrics;
pub mod scheduler;
pub mod selector;
pub mod utils;
pub mod workload;

#[cfg(test)]
mod tests;

pub use config::{MlfqConfig, PagingConfig, SchedulingConfig, SelectorConfig, SimulationConfig};
pub use error::{ConfigurationError, Field, Result, SimError, ValidationError};
pub use memory::{PageId, PagingManager, ReplacementPolicyKind, SimulationTrace, Step};
pub use metrics::{AggregateMetrics, Metrics, MetricsCalculator, ProcessMetrics};
pub use scheduler::{
    ExecutionSlice, ExecutionTimeline, Pid, ProcessSpec, ProcessType, SchedulerManager,
    SchedulingPolicy, TimelineEntry, Workload,
};
pub use selector::{AlgorithmSelector, Selection};
