/*!
 * Simulation
 * Wires admission, queue status, and dispatch into one ordered event stream
 */

use crate::admission::{AdmissionController, RamPool};
use crate::config::SimConfig;
use crate::core::errors::SimResult;
use crate::process::Process;
use crate::report::{Reporter, RunSummary, SimEvent};
use crate::scheduler::{Dispatcher, LaneSet};
use tracing::{debug, info, info_span};

/// Events and totals from one run
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub events: Vec<SimEvent>,
    pub summary: RunSummary,
}

/// Deterministic batch simulator
///
/// The same processes and configuration always produce the same event
/// stream, whichever dispatch mode is configured.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
}

impl Simulation {
    /// Create a simulation after validating its configuration
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run admission and dispatch over processes in arrival order
    pub fn run(&self, processes: impl IntoIterator<Item = Process>) -> SimulationRun {
        let span = info_span!("simulation", dispatch = ?self.config.dispatch);
        let _entered = span.enter();

        let mut controller = AdmissionController::new(&self.config);
        let mut events = controller.admit_all(processes);
        info!(
            admitted = controller.admitted(),
            rejected = controller.rejected(),
            "Admission complete"
        );

        events.extend(queue_status(controller.lanes()));

        let ram = controller.ram_stats();
        let dispatcher = Dispatcher::new(self.config.dispatch);
        events.extend(dispatcher.dispatch(controller.into_lanes()));

        let summary = RunSummary::from_events(&events, ram);
        log_summary(&summary);

        SimulationRun { events, summary }
    }

    /// Run and stream every event to `reporter`
    pub fn run_with<R: Reporter>(
        &self,
        processes: impl IntoIterator<Item = Process>,
        reporter: &mut R,
    ) -> SimResult<RunSummary> {
        let run = self.run(processes);
        reporter.report_all(&run.events)?;
        reporter.finish()?;
        Ok(run.summary)
    }
}

fn log_summary(summary: &RunSummary) {
    for lane in &summary.lanes {
        debug!(
            lane = %lane.lane,
            algorithm = %lane.algorithm.short_label(),
            quantum = ?lane.algorithm.quantum(),
            admitted = lane.admitted,
            steps = lane.steps,
            requeues = lane.requeues,
            completions = lane.completions,
            "Lane totals"
        );
    }

    let ram = &summary.ram;
    info!(
        processes = summary.processes,
        admitted = summary.admitted,
        rejected = summary.rejected,
        steps = summary.total_steps(),
        completions = summary.total_completions(),
        reserved_used = ram.reserved_used,
        reserved_available = ram.reserved_available(),
        reserved_pct = ram.usage_percentage(RamPool::Reserved),
        shared_used = ram.shared_used(),
        shared_remaining = ram.shared_remaining,
        shared_pct = ram.usage_percentage(RamPool::Shared),
        "Simulation complete"
    );
}

/// Queue-status block: header plus one membership line per lane
fn queue_status(lanes: &LaneSet) -> Vec<SimEvent> {
    std::iter::once(SimEvent::QueueStatus)
        .chain(lanes.iter().map(|lane| SimEvent::LaneSummary {
            lane: lane.id(),
            algorithm: lane.algorithm(),
            members: lane.member_ids(),
        }))
        .collect()
}
