/*!
 * Run Summary
 * Aggregate counts for a finished simulation
 */

use super::events::SimEvent;
use crate::admission::RamStats;
use crate::core::limits::LANE_COUNT;
use crate::scheduler::{Algorithm, LaneId};
use serde::{Deserialize, Serialize};

/// Per-lane totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneStats {
    pub lane: LaneId,
    pub algorithm: Algorithm,
    pub admitted: usize,
    /// Scheduling steps taken (one per `Assigned` event)
    pub steps: usize,
    pub requeues: usize,
    pub completions: usize,
}

impl LaneStats {
    fn empty(lane: LaneId, algorithm: Algorithm) -> Self {
        Self {
            lane,
            algorithm,
            admitted: 0,
            steps: 0,
            requeues: 0,
            completions: 0,
        }
    }
}

/// Totals for a whole run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub processes: usize,
    pub admitted: usize,
    pub rejected: usize,
    pub lanes: Vec<LaneStats>,
    pub ram: RamStats,
}

impl RunSummary {
    /// Fold an event stream into totals
    pub fn from_events(events: &[SimEvent], ram: RamStats) -> Self {
        let mut summary = Self {
            processes: 0,
            admitted: 0,
            rejected: 0,
            lanes: Vec::with_capacity(LANE_COUNT),
            ram,
        };

        for event in events {
            match event {
                SimEvent::Admitted { .. } => {
                    summary.processes += 1;
                    summary.admitted += 1;
                }
                SimEvent::Rejected { .. } => {
                    summary.processes += 1;
                    summary.rejected += 1;
                }
                SimEvent::LaneSummary {
                    lane,
                    algorithm,
                    members,
                } => {
                    let mut stats = LaneStats::empty(*lane, *algorithm);
                    stats.admitted = members.len();
                    summary.lanes.push(stats);
                }
                SimEvent::Assigned { lane, .. } => {
                    if let Some(stats) = summary.lane_mut(*lane) {
                        stats.steps += 1;
                    }
                }
                SimEvent::Requeued { lane, .. } => {
                    if let Some(stats) = summary.lane_mut(*lane) {
                        stats.requeues += 1;
                    }
                }
                SimEvent::Completed { lane, .. } | SimEvent::Finished { lane, .. } => {
                    if let Some(stats) = summary.lane_mut(*lane) {
                        stats.completions += 1;
                    }
                }
                SimEvent::QueueStatus | SimEvent::LaneStarted { .. } => {}
            }
        }

        summary
    }

    fn lane_mut(&mut self, lane: LaneId) -> Option<&mut LaneStats> {
        self.lanes.iter_mut().find(|s| s.lane == lane)
    }

    /// Scheduling steps across all lanes
    pub fn total_steps(&self) -> usize {
        self.lanes.iter().map(|s| s.steps).sum()
    }

    /// Completions across all lanes
    pub fn total_completions(&self) -> usize {
        self.lanes.iter().map(|s| s.completions).sum()
    }
}
