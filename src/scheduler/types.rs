/*!
 * Scheduler Types
 * Lane identifiers and the closed set of lane algorithms
 */

use crate::core::limits::LANE_COUNT;
use crate::core::types::{Priority, Ticks};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four priority lanes
///
/// Lane `n` serves exactly priority `n`. Lane 0 runs on the logical
/// CPU-1, lanes 1-3 share the logical CPU-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LaneId(u8);

impl LaneId {
    pub const PRIORITY_0: LaneId = LaneId(0);
    pub const PRIORITY_1: LaneId = LaneId(1);
    pub const PRIORITY_2: LaneId = LaneId(2);
    pub const PRIORITY_3: LaneId = LaneId(3);

    /// All lanes in dispatch order
    pub const ALL: [LaneId; LANE_COUNT] = [
        Self::PRIORITY_0,
        Self::PRIORITY_1,
        Self::PRIORITY_2,
        Self::PRIORITY_3,
    ];

    /// Route a priority to its lane, `None` if the priority is unroutable
    #[inline]
    pub fn from_priority(priority: Priority) -> Option<Self> {
        match priority {
            0..=3 => Some(Self(priority as u8)),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Priority served by this lane
    #[inline(always)]
    pub const fn priority(self) -> Priority {
        self.0 as Priority
    }

    /// Whether this lane draws from the reserved RAM partition
    #[inline(always)]
    pub const fn is_reserved(self) -> bool {
        self.0 == 0
    }

    /// Logical CPU label used in reports
    pub const fn cpu_label(self) -> &'static str {
        if self.is_reserved() {
            "CPU-1"
        } else {
            "CPU-2"
        }
    }
}

impl TryFrom<u8> for LaneId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_priority(value as Priority)
            .ok_or_else(|| format!("Invalid lane {}. Valid: 0-{}", value, LANE_COUNT - 1))
    }
}

impl From<LaneId> for u8 {
    fn from(lane: LaneId) -> Self {
        lane.0
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scheduling algorithm bound to a lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-come-first-served, run to completion
    Fcfs,
    /// Shortest-job-first, non-preemptive, stable on ties
    Sjf,
    /// Round robin with a fixed time quantum
    RoundRobin { quantum: Ticks },
}

impl Algorithm {
    /// Short label used in the queue-status block
    pub fn short_label(&self) -> String {
        match self {
            Self::Fcfs => "FCFS".to_string(),
            Self::Sjf => "SJF".to_string(),
            Self::RoundRobin { quantum } => format!("RR-q{}", quantum),
        }
    }

    /// Label used in a lane's processing header
    pub fn processing_label(&self, lane: LaneId) -> String {
        match self {
            Self::Fcfs => "FCFS".to_string(),
            Self::Sjf => format!("SJF for priority-{}", lane),
            Self::RoundRobin { .. } => format!("Round Robin for priority-{}", lane),
        }
    }

    /// Time slice granted per turn, `None` for run-to-completion algorithms
    #[inline]
    pub const fn quantum(&self) -> Option<Ticks> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }
}
