/*!
 * Simulation Tests
 * End-to-end report output, determinism, and completion coverage
 */

use lane_scheduler::{
    read_processes, CollectingReporter, DispatchMode, JsonLinesReporter, Process, SimConfig,
    SimEvent, Simulation, TextReporter,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::io::Cursor;

const SAMPLE_INPUT: &str = include_str!("data/sample_input.txt");
const EXPECTED_REPORT: &str = include_str!("data/expected_report.txt");

fn sample_processes() -> Vec<Process> {
    read_processes(Cursor::new(SAMPLE_INPUT)).unwrap().processes
}

fn render(config: SimConfig, processes: Vec<Process>) -> String {
    let simulation = Simulation::new(config).unwrap();
    let mut reporter = TextReporter::new(Vec::new());
    simulation.run_with(processes, &mut reporter).unwrap();
    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn test_sample_report_matches_expected() {
    let report = render(SimConfig::default(), sample_processes());
    assert_eq!(report, EXPECTED_REPORT);
}

#[test]
fn test_parallel_report_is_byte_identical() {
    let sequential = render(SimConfig::default(), sample_processes());
    let parallel = render(
        SimConfig::default().with_dispatch(DispatchMode::Parallel),
        sample_processes(),
    );
    assert_eq!(sequential, parallel);
}

#[test]
fn test_rerun_is_idempotent() {
    let first = render(SimConfig::default(), sample_processes());
    let second = render(SimConfig::default(), sample_processes());
    assert_eq!(first, second);
}

#[test]
fn test_every_admitted_process_completes_once() {
    let simulation = Simulation::new(SimConfig::default()).unwrap();
    let run = simulation.run(sample_processes());

    let admitted: Vec<String> = run
        .events
        .iter()
        .filter_map(|e| match e {
            SimEvent::Admitted { id, .. } => Some(id.to_string()),
            _ => None,
        })
        .collect();

    let mut completions: HashMap<String, usize> = HashMap::new();
    for event in run.events.iter().filter(|e| e.is_completion()) {
        let id = event.process_id().unwrap().to_string();
        *completions.entry(id).or_default() += 1;
    }

    assert_eq!(completions.len(), admitted.len());
    for id in &admitted {
        assert_eq!(completions.get(id), Some(&1), "process {} completions", id);
    }
}

#[test]
fn test_rejected_processes_never_dispatched() {
    let simulation = Simulation::new(SimConfig::default()).unwrap();
    let run = simulation.run(sample_processes());

    let rejected: Vec<String> = run
        .events
        .iter()
        .filter_map(|e| match e {
            SimEvent::Rejected { id, .. } => Some(id.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(rejected, vec!["P5", "P7", "P8"]);

    let dispatched_rejected = run.events.iter().any(|e| {
        matches!(e, SimEvent::Assigned { id, .. } if rejected.contains(&id.to_string()))
    });
    assert!(!dispatched_rejected);
}

#[test]
fn test_custom_quanta_change_labels_and_slices() {
    let processes = vec![Process::new("R", 0, 2, 10, 10)];
    let report = render(SimConfig::default().with_quanta(5, 16), processes);

    assert!(report.contains("CPU-2 queue (priority-2) (RR-q5) : R"));
    assert!(report.contains("Process R run for 5 time units and is queued again."));
    assert!(report.contains("Process R run for 5 time units and is completed."));
}

#[test]
fn test_empty_input_still_reports_all_sections() {
    let report = render(SimConfig::default(), Vec::new());
    assert_eq!(
        report,
        "\nQueue status:\n\
         CPU-1 queue (priority-0) (FCFS) : \n\
         CPU-2 queue (priority-1) (SJF) : \n\
         CPU-2 queue (priority-2) (RR-q8) : \n\
         CPU-2 queue (priority-3) (RR-q16) : \n\
         \n\
         CPU-1 (FCFS) Processing:\n\
         \n\
         CPU-2 (SJF for priority-1) Processing:\n\
         \n\
         CPU-2 (Round Robin for priority-2) Processing:\n\
         \n\
         CPU-2 (Round Robin for priority-3) Processing:\n"
    );
}

#[test]
fn test_json_lines_round_trip_event_stream() {
    let simulation = Simulation::new(SimConfig::default()).unwrap();
    let run = simulation.run(sample_processes());

    let mut reporter = JsonLinesReporter::new(Vec::new());
    simulation.run_with(sample_processes(), &mut reporter).unwrap();
    let text = String::from_utf8(reporter.into_inner()).unwrap();

    let parsed: Vec<SimEvent> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(parsed, run.events);
}

#[test]
fn test_streamed_events_match_run_and_summary() {
    let simulation = Simulation::new(SimConfig::default()).unwrap();
    let run = simulation.run(sample_processes());

    let mut collector = CollectingReporter::new();
    let summary = simulation
        .run_with(sample_processes(), &mut collector)
        .unwrap();

    assert_eq!(collector.events(), run.events.as_slice());
    assert_eq!(summary, run.summary);

    let queue_status: Vec<SimEvent> = collector
        .into_events()
        .into_iter()
        .filter(SimEvent::is_queue_status)
        .collect();
    assert_eq!(queue_status.len(), 5);
}

#[test]
fn test_tee_reporter_feeds_both_sinks() {
    let simulation = Simulation::new(SimConfig::default()).unwrap();
    let mut tee = (
        CollectingReporter::new(),
        TextReporter::queue_status(Vec::new()),
    );
    simulation.run_with(sample_processes(), &mut tee).unwrap();

    let (collector, echo) = tee;
    let echoed = String::from_utf8(echo.into_inner()).unwrap();
    assert!(echoed.starts_with("\nQueue status:\n"));
    assert_eq!(echoed.lines().filter(|l| l.contains(" queue (priority-")).count(), 4);
    assert!(collector.events().len() > 5);
}
