/*!
 * Lane Scheduler - Main Entry Point
 *
 * Reads a process list, runs admission and lane dispatch, and writes the
 * report:
 * - Report file (text or JSON lines) at --output
 * - Queue-status block echoed to stdout
 * - Diagnostics on stderr
 */

use clap::{Parser, ValueEnum};
use lane_scheduler::core::limits::*;
use lane_scheduler::monitoring::span_phase;
use lane_scheduler::{
    init_tracing, load_processes, DispatchMode, JsonLinesReporter, Reporter, SimConfig, SimError,
    Simulation, TextReporter,
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;

/// Report encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Plain-text report, one line per event
    Text,
    /// One JSON object per event
    Json,
}

/// Simulate priority-lane scheduling of a process list under a RAM budget
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input file of `id,arrival_time,priority,burst_time,ram,cpu` records
    input: PathBuf,

    /// Report output path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Report encoding
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Total RAM pool
    #[arg(long, env = "LANE_SCHED_TOTAL_RAM", default_value_t = DEFAULT_TOTAL_RAM)]
    total_ram: u32,

    /// RAM reserved for priority-0 processes
    #[arg(long, env = "LANE_SCHED_RESERVED_RAM", default_value_t = DEFAULT_RESERVED_RAM)]
    reserved_ram: u32,

    /// Round-Robin quantum for the priority-2 lane
    #[arg(long, default_value_t = DEFAULT_QUANTUM_PRIORITY_2)]
    quantum_p2: u32,

    /// Round-Robin quantum for the priority-3 lane
    #[arg(long, default_value_t = DEFAULT_QUANTUM_PRIORITY_3)]
    quantum_p3: u32,

    /// Simulate lanes on parallel threads (output is unchanged)
    #[arg(long)]
    parallel: bool,

    /// Do not echo the queue status to stdout
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> SimConfig {
        let dispatch = if self.parallel {
            DispatchMode::Parallel
        } else {
            DispatchMode::Sequential
        };
        SimConfig::new()
            .with_ram(self.total_ram, self.reserved_ram)
            .with_quanta(self.quantum_p2, self.quantum_p3)
            .with_dispatch(dispatch)
    }
}

fn main() -> miette::Result<()> {
    init_tracing();
    let args = Args::parse();

    let simulation = Simulation::new(args.config())?;
    let config = simulation.config();
    info!(
        total_ram = config.total_ram,
        reserved_ram = config.reserved_ram,
        shared_ram = config.shared_ram(),
        quantum_p2 = config.quantum_priority_2,
        quantum_p3 = config.quantum_priority_3,
        dispatch = ?config.dispatch,
        "Configuration loaded"
    );

    let processes = {
        let span = span_phase("ingest");
        let _entered = span.enter();
        let outcome = load_processes(&args.input)?;
        span.record_items(outcome.processes.len());
        outcome.processes
    };

    let file = File::create(&args.output).map_err(|source| SimError::OutputUnavailable {
        path: args.output.clone(),
        source,
    })?;
    info!(path = %args.output.display(), "Successfully opened output file");

    let writer = BufWriter::new(file);
    let mut sink: Box<dyn Reporter> = match args.format {
        Format::Text => Box::new(TextReporter::new(writer)),
        Format::Json => Box::new(JsonLinesReporter::new(writer)),
    };

    let summary = {
        let span = span_phase("simulate");
        let _entered = span.enter();
        span.record_items(processes.len());
        if args.quiet {
            simulation.run_with(processes, &mut sink)?
        } else {
            let mut tee = (sink, TextReporter::queue_status(io::stdout().lock()));
            simulation.run_with(processes, &mut tee)?
        }
    };

    info!(
        path = %args.output.display(),
        steps = summary.total_steps(),
        "Successfully written to output file"
    );
    Ok(())
}
