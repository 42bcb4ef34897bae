/*!
 * Process Module
 * Process records and ingestion from the line-oriented input format
 */

pub mod ingest;
pub mod types;

// Re-export for convenience
pub use ingest::{load_processes, parse_record, read_processes, IngestOutcome, SkippedLine};
pub use types::{IngestError, IngestResult, Process};
