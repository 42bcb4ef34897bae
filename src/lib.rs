/*!
 * Lane Scheduler Library
 * Offline batch scheduling across priority lanes under RAM admission control
 */

pub mod admission;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use admission::{AdmissionController, AdmissionError, RamBudget, RamPool, RamStats};
pub use config::{DispatchMode, SimConfig};
pub use crate::core::{ProcessId, SimError, SimResult};
pub use monitoring::init_tracing;
pub use process::{load_processes, read_processes, IngestError, Process};
pub use report::{
    CollectingReporter, JsonLinesReporter, Reporter, RunSummary, SimEvent, TextReporter,
};
pub use scheduler::{run_lane, Algorithm, Dispatcher, Lane, LaneId, LaneSet};
pub use simulation::{Simulation, SimulationRun};
