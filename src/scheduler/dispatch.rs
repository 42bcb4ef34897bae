/*!
 * Lane Dispatch
 * Drains one lane with its algorithm and records every scheduling step
 */

use super::lane::Lane;
use super::types::{Algorithm, LaneId};
use crate::core::types::Ticks;
use crate::process::Process;
use crate::report::SimEvent;
use std::collections::VecDeque;
use tracing::trace;

/// Drain `lane` to empty, returning its processing section
///
/// The first event is always the lane's `LaneStarted` header. Dispatch has
/// no failure path: an empty lane yields only the header.
pub fn run_lane(lane: Lane) -> Vec<SimEvent> {
    let id = lane.id();
    let algorithm = lane.algorithm();
    let queue = lane.into_queue();

    let mut events = Vec::with_capacity(1 + queue.len() * 2);
    events.push(SimEvent::LaneStarted {
        lane: id,
        algorithm,
    });

    match algorithm {
        Algorithm::Fcfs => run_to_completion(id, queue, &mut events),
        Algorithm::Sjf => run_to_completion(id, shortest_first(queue), &mut events),
        Algorithm::RoundRobin { quantum } => round_robin(id, queue, quantum, &mut events),
    }

    events
}

/// Stable ascending sort by remaining burst; ties keep arrival order
fn shortest_first(queue: VecDeque<Process>) -> VecDeque<Process> {
    let mut ordered: Vec<Process> = queue.into();
    ordered.sort_by_key(|p| p.burst_time);
    ordered.into()
}

/// Non-preemptive drain: each process finishes in a single step
fn run_to_completion(lane: LaneId, queue: VecDeque<Process>, events: &mut Vec<SimEvent>) {
    for process in queue {
        trace!(pid = %process.id, lane = %lane, burst = process.burst_time, "run to completion");
        events.push(SimEvent::Assigned {
            id: process.id.clone(),
            lane,
        });
        events.push(SimEvent::Completed {
            id: process.id,
            lane,
        });
    }
}

/// Round-robin drain with O(1) head removal and tail reinsertion
fn round_robin(
    lane: LaneId,
    mut queue: VecDeque<Process>,
    quantum: Ticks,
    events: &mut Vec<SimEvent>,
) {
    while let Some(mut process) = queue.pop_front() {
        events.push(SimEvent::Assigned {
            id: process.id.clone(),
            lane,
        });

        let ran = process.run_slice(quantum);
        if process.is_finished() {
            trace!(pid = %process.id, lane = %lane, ran, "slice completed process");
            events.push(SimEvent::Finished {
                id: process.id,
                lane,
                ran,
            });
        } else {
            trace!(pid = %process.id, lane = %lane, ran, remaining = process.burst_time, "requeued");
            events.push(SimEvent::Requeued {
                id: process.id.clone(),
                lane,
                ran,
                remaining: process.burst_time,
            });
            queue.push_back(process);
        }
    }
}
