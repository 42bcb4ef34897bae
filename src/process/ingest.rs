/*!
 * Process Ingestion
 * Reads `id,arrival_time,priority,burst_time,ram,cpu` records into processes
 *
 * Malformed lines are skipped with a warning and never reach admission.
 * An input source that cannot be opened aborts the run.
 */

use super::types::{IngestError, IngestResult, Process};
use crate::core::errors::{SimError, SimResult};
use crate::core::ProcessId;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// Number of comma-separated fields in one record
const FIELD_COUNT: usize = 6;

/// A line that was rejected during ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source
    pub line_number: usize,
    pub content: String,
    pub error: IngestError,
}

/// Processes read from a source, in input order
#[derive(Debug, Clone, Default)]
pub struct IngestOutcome {
    pub processes: Vec<Process>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a single record line
pub fn parse_record(line: &str) -> IngestResult<Process> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(IngestError::FieldCount {
            found: fields.len(),
        });
    }

    let id = ProcessId::from(fields[0]);
    if id.is_empty() {
        return Err(IngestError::EmptyId);
    }

    let process = Process::new(
        id,
        parse_field("arrival_time", fields[1])?,
        parse_field("priority", fields[2])?,
        parse_field("burst_time", fields[3])?,
        parse_field("ram", fields[4])?,
    );
    Ok(process.with_cpu(parse_field("cpu", fields[5])?))
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> IngestResult<T> {
    value.parse().map_err(|_| IngestError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

/// Read every record from a buffered source
///
/// Blank lines are ignored silently; any other unparsable line, including
/// one that is not valid UTF-8, is logged and recorded in `skipped`. Only
/// a failing read aborts.
pub fn read_processes<R: BufRead>(reader: R) -> SimResult<IngestOutcome> {
    let mut outcome = IngestOutcome::default();

    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line_number = index + 1;

        let parsed = match std::str::from_utf8(&raw) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => parse_record(line),
            Err(_) => Err(IngestError::InvalidEncoding),
        };

        match parsed {
            Ok(process) => outcome.processes.push(process),
            Err(error) => {
                let content = String::from_utf8_lossy(&raw).trim_end_matches('\r').to_string();
                warn!(line = line_number, %error, "Failed to parse line: {}", content);
                outcome.skipped.push(SkippedLine {
                    line_number,
                    content,
                    error,
                });
            }
        }
    }

    Ok(outcome)
}

/// Open `path` and read every record from it
pub fn load_processes(path: impl AsRef<Path>) -> SimResult<IngestOutcome> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SimError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Successfully opened input file");

    let outcome = read_processes(BufReader::new(file))?;
    info!(
        processes = outcome.processes.len(),
        skipped = outcome.skipped.len(),
        "Successfully read {} processes from input file",
        outcome.processes.len()
    );
    Ok(outcome)
}
