/*!
 * Process Types
 * The unit of work flowing through admission and dispatch
 */

use crate::core::types::{ArrivalTime, CpuHint, Priority, Ram, Ticks};
use crate::core::ProcessId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ingestion operation result
pub type IngestResult<T> = Result<T, IngestError>;

/// Reasons a single input line is skipped
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum IngestError {
    #[error("expected 6 comma-separated fields, found {found}")]
    #[diagnostic(
        code(ingest::field_count),
        help("Records have the form id,arrival_time,priority,burst_time,ram,cpu")
    )]
    FieldCount { found: usize },

    #[error("field `{field}` is not a valid integer: {value:?}")]
    #[diagnostic(code(ingest::invalid_integer))]
    InvalidInteger { field: &'static str, value: String },

    #[error("process id is empty")]
    #[diagnostic(code(ingest::empty_id))]
    EmptyId,

    #[error("line is not valid UTF-8")]
    #[diagnostic(code(ingest::invalid_encoding))]
    InvalidEncoding,
}

/// A process as known to the simulator
///
/// Everything except `burst_time` is fixed once the record is read;
/// `burst_time` is the remaining CPU time and only Round-Robin lanes
/// decrement it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: ArrivalTime,
    pub priority: Priority,
    pub burst_time: Ticks,
    pub ram: Ram,
    /// CPU hint carried from the input record; not used for routing
    pub cpu: CpuHint,
}

impl Process {
    pub fn new(
        id: impl Into<ProcessId>,
        arrival_time: ArrivalTime,
        priority: Priority,
        burst_time: Ticks,
        ram: Ram,
    ) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            priority,
            burst_time,
            ram,
            cpu: 0,
        }
    }

    pub fn with_cpu(mut self, cpu: CpuHint) -> Self {
        self.cpu = cpu;
        self
    }

    /// Run for at most `quantum` ticks, returning the ticks actually used
    #[inline]
    pub fn run_slice(&mut self, quantum: Ticks) -> Ticks {
        let ran = self.burst_time.min(quantum);
        self.burst_time -= ran;
        ran
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.burst_time == 0
    }
}
