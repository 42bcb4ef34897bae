/*!
 * Lanes
 * Ordered queues of admitted processes, one per priority
 */

use super::types::{Algorithm, LaneId};
use crate::config::SimConfig;
use crate::core::limits::LANE_MEMBER_SEPARATOR;
use crate::core::ProcessId;
use crate::process::Process;
use std::collections::VecDeque;

/// A single priority lane
///
/// FIFO by enqueue order; algorithms that reorder (SJF) do so when the
/// lane is drained, never on insert.
#[derive(Debug, Clone)]
pub struct Lane {
    id: LaneId,
    algorithm: Algorithm,
    queue: VecDeque<Process>,
}

impl Lane {
    pub fn new(id: LaneId, algorithm: Algorithm) -> Self {
        Self {
            id,
            algorithm,
            queue: VecDeque::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> LaneId {
        self.id
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn push(&mut self, process: Process) {
        self.queue.push_back(process);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.queue.iter()
    }

    /// Member ids in lane order
    pub fn member_ids(&self) -> Vec<ProcessId> {
        self.queue.iter().map(|p| p.id.clone()).collect()
    }

    /// Members joined for the queue-status line, e.g. `A-B-C`
    pub fn joined_ids(&self) -> String {
        self.queue
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>()
            .join(LANE_MEMBER_SEPARATOR)
    }

    pub(super) fn into_queue(self) -> VecDeque<Process> {
        self.queue
    }
}

/// The four lanes, indexed by `LaneId`
#[derive(Debug, Clone)]
pub struct LaneSet {
    lanes: [Lane; 4],
}

impl LaneSet {
    /// Build empty lanes with the algorithms configured for each priority
    pub fn new(config: &SimConfig) -> Self {
        Self {
            lanes: LaneId::ALL.map(|id| Lane::new(id, config.algorithm_for(id))),
        }
    }

    #[inline]
    pub fn get(&self, id: LaneId) -> &Lane {
        &self.lanes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: LaneId) -> &mut Lane {
        &mut self.lanes[id.index()]
    }

    /// Lanes in dispatch order
    pub fn iter(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter()
    }

    /// Total admitted processes across all lanes
    pub fn total_len(&self) -> usize {
        self.lanes.iter().map(Lane::len).sum()
    }
}

impl IntoIterator for LaneSet {
    type Item = Lane;
    type IntoIter = std::array::IntoIter<Lane, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.lanes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_fifo_and_join() {
        let mut lane = Lane::new(LaneId::PRIORITY_0, Algorithm::Fcfs);
        assert_eq!(lane.joined_ids(), "");

        lane.push(Process::new("A", 0, 0, 5, 10));
        lane.push(Process::new("B", 1, 0, 3, 10));
        lane.push(Process::new("C", 2, 0, 1, 10));

        assert_eq!(lane.len(), 3);
        assert_eq!(lane.joined_ids(), "A-B-C");
    }

    #[test]
    fn test_lane_set_algorithms_follow_config() {
        let lanes = LaneSet::new(&SimConfig::default());
        let algorithms: Vec<Algorithm> = lanes.iter().map(Lane::algorithm).collect();
        assert_eq!(
            algorithms,
            vec![
                Algorithm::Fcfs,
                Algorithm::Sjf,
                Algorithm::RoundRobin { quantum: 8 },
                Algorithm::RoundRobin { quantum: 16 },
            ]
        );
        assert_eq!(lanes.total_len(), 0);
    }
}
