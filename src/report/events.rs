/*!
 * Simulation Events
 * The ordered event stream handed to reporters
 *
 * `Display` renders each event as one line of the text report. Events that
 * open a new report section start with a blank line.
 */

use crate::admission::{AdmissionError, RamPool};
use crate::core::types::Ticks;
use crate::core::ProcessId;
use crate::scheduler::{Algorithm, LaneId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One observable step of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    // Admission phase, one per process in arrival order
    Admitted {
        id: ProcessId,
        lane: LaneId,
    },
    Rejected {
        id: ProcessId,
        reason: AdmissionError,
    },

    // Queue status, one header then one summary per lane
    QueueStatus,
    LaneSummary {
        lane: LaneId,
        algorithm: Algorithm,
        members: Vec<ProcessId>,
    },

    // Dispatch phase, one section per lane
    LaneStarted {
        lane: LaneId,
        algorithm: Algorithm,
    },
    Assigned {
        id: ProcessId,
        lane: LaneId,
    },
    /// Run-to-completion step (FCFS, SJF)
    Completed {
        id: ProcessId,
        lane: LaneId,
    },
    /// Round-Robin slice that left work remaining
    Requeued {
        id: ProcessId,
        lane: LaneId,
        ran: Ticks,
        remaining: Ticks,
    },
    /// Round-Robin slice that finished the process
    Finished {
        id: ProcessId,
        lane: LaneId,
        ran: Ticks,
    },
}

impl SimEvent {
    /// Whether this event is a process's single terminal completion
    #[inline]
    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Finished { .. })
    }

    /// Whether this event belongs to the queue-status block
    #[inline]
    pub fn is_queue_status(&self) -> bool {
        matches!(self, Self::QueueStatus | Self::LaneSummary { .. })
    }

    /// Process the event is about, if any
    pub fn process_id(&self) -> Option<&ProcessId> {
        match self {
            Self::Admitted { id, .. }
            | Self::Rejected { id, .. }
            | Self::Assigned { id, .. }
            | Self::Completed { id, .. }
            | Self::Requeued { id, .. }
            | Self::Finished { id, .. } => Some(id),
            Self::QueueStatus | Self::LaneSummary { .. } | Self::LaneStarted { .. } => None,
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admitted { id, lane } if lane.is_reserved() => {
                write!(f, "Process {} is queued to be assigned to {}.", id, lane.cpu_label())
            }
            Self::Admitted { id, lane } => write!(
                f,
                "Process {} is placed in the queue{} (priority-{}) to be assigned to {}.",
                id,
                lane,
                lane,
                lane.cpu_label()
            ),
            Self::Rejected { id, reason } => match reason {
                AdmissionError::InsufficientRam {
                    pool: RamPool::Reserved,
                    ..
                } => write!(
                    f,
                    "Process {} cannot be queued to {} due to insufficient RAM.",
                    id,
                    LaneId::PRIORITY_0.cpu_label()
                ),
                AdmissionError::InsufficientRam { .. } => {
                    write!(f, "Process {} cannot be queued due to insufficient RAM.", id)
                }
                AdmissionError::UnroutablePriority(priority) => write!(
                    f,
                    "Process {} cannot be queued due to invalid priority {}.",
                    id, priority
                ),
            },
            Self::QueueStatus => write!(f, "\nQueue status:"),
            Self::LaneSummary {
                lane,
                algorithm,
                members,
            } => {
                write!(
                    f,
                    "{} queue (priority-{}) ({}) : ",
                    lane.cpu_label(),
                    lane,
                    algorithm.short_label()
                )?;
                for (i, id) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(crate::core::limits::LANE_MEMBER_SEPARATOR)?;
                    }
                    write!(f, "{}", id)?;
                }
                Ok(())
            }
            Self::LaneStarted { lane, algorithm } => write!(
                f,
                "\n{} ({}) Processing:",
                lane.cpu_label(),
                algorithm.processing_label(*lane)
            ),
            Self::Assigned { id, lane } => {
                write!(f, "Process {} is assigned to {}.", id, lane.cpu_label())
            }
            Self::Completed { id, .. } => write!(f, "Process {} is completed and terminated.", id),
            Self::Requeued { id, ran, .. } => write!(
                f,
                "Process {} run for {} time units and is queued again.",
                id, ran
            ),
            Self::Finished { id, ran, .. } => write!(
                f,
                "Process {} run for {} time units and is completed.",
                id, ran
            ),
        }
    }
}
