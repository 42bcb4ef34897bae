/*!
 * Admission Controller
 * Classifies processes into lanes, strictly in arrival order, under the RAM budget
 */

use super::budget::RamBudget;
use super::types::{AdmissionError, AdmissionResult, RamPool, RamStats};
use crate::config::SimConfig;
use crate::process::Process;
use crate::report::SimEvent;
use crate::scheduler::{LaneId, LaneSet};
use tracing::{debug, info};

/// Owns the RAM counters and the lanes they fill
///
/// Each process is evaluated exactly once; there is no backtracking,
/// no reordering for best fit, and no retry of a rejected process.
#[derive(Debug, Clone)]
pub struct AdmissionController {
    budget: RamBudget,
    lanes: LaneSet,
    admitted: usize,
    rejected: usize,
}

impl AdmissionController {
    pub fn new(config: &SimConfig) -> Self {
        info!(
            total_ram = config.total_ram,
            reserved_ram = config.reserved_ram,
            "Admission controller initialized"
        );
        Self {
            budget: RamBudget::new(config.total_ram, config.reserved_ram),
            lanes: LaneSet::new(config),
            admitted: 0,
            rejected: 0,
        }
    }

    /// Decide one process, enqueueing it on admission
    pub fn admit(&mut self, process: Process) -> SimEvent {
        let id = process.id.clone();
        match self.place(process) {
            Ok(lane) => {
                self.admitted += 1;
                debug!(pid = %id, lane = %lane, "Process admitted");
                SimEvent::Admitted { id, lane }
            }
            Err(reason) => {
                self.rejected += 1;
                debug!(pid = %id, %reason, "Process rejected");
                SimEvent::Rejected { id, reason }
            }
        }
    }

    /// Decide every process in input order
    pub fn admit_all(&mut self, processes: impl IntoIterator<Item = Process>) -> Vec<SimEvent> {
        processes.into_iter().map(|p| self.admit(p)).collect()
    }

    fn place(&mut self, process: Process) -> AdmissionResult<LaneId> {
        let lane = LaneId::from_priority(process.priority)
            .ok_or(AdmissionError::UnroutablePriority(process.priority))?;
        let pool = if lane.is_reserved() {
            RamPool::Reserved
        } else {
            RamPool::Shared
        };

        self.budget.commit(pool, process.ram)?;
        self.lanes.get_mut(lane).push(process);
        Ok(lane)
    }

    #[inline]
    pub fn lanes(&self) -> &LaneSet {
        &self.lanes
    }

    #[inline]
    pub fn budget(&self) -> &RamBudget {
        &self.budget
    }

    pub fn ram_stats(&self) -> RamStats {
        self.budget.stats()
    }

    #[inline]
    pub fn admitted(&self) -> usize {
        self.admitted
    }

    #[inline]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Hand the filled lanes to the dispatch phase
    pub fn into_lanes(self) -> LaneSet {
        self.lanes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProcessId;

    #[test]
    fn test_reserved_pool_rejection() {
        let mut controller = AdmissionController::new(&SimConfig::default());

        let first = controller.admit(Process::new("A", 0, 0, 10, 400));
        let second = controller.admit(Process::new("B", 1, 0, 10, 200));

        assert_eq!(
            first,
            SimEvent::Admitted {
                id: ProcessId::from("A"),
                lane: LaneId::PRIORITY_0
            }
        );
        assert!(matches!(
            second,
            SimEvent::Rejected {
                reason: AdmissionError::InsufficientRam {
                    pool: RamPool::Reserved,
                    ..
                },
                ..
            }
        ));
        assert_eq!(controller.budget().reserved_used(), 400);
        assert_eq!(controller.lanes().get(LaneId::PRIORITY_0).len(), 1);
    }

    #[test]
    fn test_shared_pool_routes_by_priority() {
        let mut controller = AdmissionController::new(&SimConfig::default());
        controller.admit_all(vec![
            Process::new("P1", 0, 1, 5, 500),
            Process::new("P2", 1, 2, 5, 500),
            Process::new("P3", 2, 3, 5, 500),
            Process::new("P4", 3, 3, 5, 100),
        ]);

        assert_eq!(controller.lanes().get(LaneId::PRIORITY_1).joined_ids(), "P1");
        assert_eq!(controller.lanes().get(LaneId::PRIORITY_2).joined_ids(), "P2");
        assert_eq!(controller.lanes().get(LaneId::PRIORITY_3).joined_ids(), "P3");
        assert_eq!(controller.budget().shared_remaining(), 36);
        assert_eq!(controller.rejected(), 1);
    }

    #[test]
    fn test_later_small_process_fits_after_rejection() {
        let mut controller = AdmissionController::new(&SimConfig::default());
        let events = controller.admit_all(vec![
            Process::new("big", 0, 2, 5, 2000),
            Process::new("small", 1, 2, 5, 10),
        ]);
        assert!(matches!(events[0], SimEvent::Rejected { .. }));
        assert!(matches!(events[1], SimEvent::Admitted { .. }));
    }

    #[test]
    fn test_unroutable_priority_consumes_no_ram() {
        let mut controller = AdmissionController::new(&SimConfig::default());
        let event = controller.admit(Process::new("X", 0, 9, 5, 100));

        assert_eq!(
            event,
            SimEvent::Rejected {
                id: ProcessId::from("X"),
                reason: AdmissionError::UnroutablePriority(9)
            }
        );
        assert_eq!(controller.budget().shared_remaining(), 1536);
        assert_eq!(controller.lanes().total_len(), 0);
    }
}
