/*!
 * Scheduler Module
 * Lane definitions and the per-lane dispatch algorithms
 */

mod dispatch;
pub mod lane;
pub mod types;

pub use dispatch::run_lane;
pub use lane::{Lane, LaneSet};
pub use types::{Algorithm, LaneId};

use crate::config::DispatchMode;
use crate::report::SimEvent;
use tracing::{debug, info};

/// Drains every lane after admission has finished
///
/// Lanes share no mutable state once admission is done, so they may be
/// simulated concurrently. Output is always reassembled in lane order
/// 0 through 3 and is identical in either mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    mode: DispatchMode,
}

impl Dispatcher {
    pub fn new(mode: DispatchMode) -> Self {
        Self { mode }
    }

    /// Drain all lanes, returning their processing sections in lane order
    pub fn dispatch(&self, lanes: LaneSet) -> Vec<SimEvent> {
        info!(
            mode = ?self.mode,
            admitted = lanes.total_len(),
            "Dispatching lanes"
        );

        let sections = match self.mode {
            DispatchMode::Sequential => lanes.into_iter().map(run_lane).collect::<Vec<_>>(),
            DispatchMode::Parallel => Self::dispatch_parallel(lanes),
        };

        for section in &sections {
            if let Some(SimEvent::LaneStarted { lane, algorithm }) = section.first() {
                debug!(lane = %lane, algorithm = ?algorithm, events = section.len(), "Lane drained");
            }
        }

        sections.into_iter().flatten().collect()
    }

    fn dispatch_parallel(lanes: LaneSet) -> Vec<Vec<SimEvent>> {
        std::thread::scope(|scope| {
            let pending: Vec<_> = lanes
                .into_iter()
                .map(|lane| {
                    // An empty lane is only its header
                    if lane.is_empty() {
                        Section::Ready(run_lane(lane))
                    } else {
                        Section::Running(scope.spawn(move || run_lane(lane)))
                    }
                })
                .collect();

            // Joining in spawn order restores lane order
            pending
                .into_iter()
                .map(|section| match section {
                    Section::Ready(events) => events,
                    Section::Running(handle) => match handle.join() {
                        Ok(events) => events,
                        Err(panic) => std::panic::resume_unwind(panic),
                    },
                })
                .collect()
        })
    }
}

/// One lane's processing section during a parallel drain
enum Section<'scope> {
    Ready(Vec<SimEvent>),
    Running(std::thread::ScopedJoinHandle<'scope, Vec<SimEvent>>),
}
