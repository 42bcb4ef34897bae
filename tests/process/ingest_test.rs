/*!
 * Ingestion Tests
 * Loading process records from files on disk
 */

use lane_scheduler::{load_processes, IngestError, SimError};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file_in_input_order() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "P3,0,2,20,100,2").unwrap();
    writeln!(file, "P1,1,0,5,50,1").unwrap();
    writeln!(file, "P2,2,1,9,70,2").unwrap();

    let outcome = load_processes(file.path()).unwrap();
    let ids: Vec<&str> = outcome.processes.iter().map(|p| p.id.as_str()).collect();

    assert_eq!(ids, vec!["P3", "P1", "P2"]);
    assert!(outcome.skipped.is_empty());
}

#[test]
fn test_malformed_lines_are_skipped_with_reason() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "P1,0,0,5,50,1").unwrap();
    writeln!(file, "P2,0,0,5").unwrap();
    writeln!(file, "P3,0,x,5,50,1").unwrap();
    writeln!(file, "P4,1,3,12,80,2").unwrap();

    let outcome = load_processes(file.path()).unwrap();

    assert_eq!(outcome.processes.len(), 2);
    assert_eq!(outcome.skipped.len(), 2);
    assert_eq!(outcome.skipped[0].line_number, 2);
    assert_eq!(outcome.skipped[0].error, IngestError::FieldCount { found: 4 });
    assert!(matches!(
        outcome.skipped[1].error,
        IngestError::InvalidInteger { field: "priority", .. }
    ));
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.txt");

    let result = load_processes(&missing);
    assert!(matches!(result, Err(SimError::InputUnavailable { .. })));
}
