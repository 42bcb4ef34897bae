/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

// Re-export AdmissionError from admission module
pub use crate::admission::AdmissionError;

// Re-export IngestError from process module
pub use crate::process::IngestError;

/// Unified simulator error type with miette diagnostics
///
/// Rejections are not errors at this level: an `AdmissionError` only ever
/// becomes a rejection event. Everything here aborts the run.
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Failed to open input file {}: {source}", path.display())]
    #[diagnostic(
        code(sim::input_unavailable),
        help("Check that the input path exists and is readable.")
    )]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open output file {}: {source}", path.display())]
    #[diagnostic(
        code(sim::output_unavailable),
        help("Check that the output directory exists and is writable.")
    )]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(sim::io_error),
        help("Reading input or writing the report failed mid-run.")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(sim::configuration_error),
        help("The reserved partition must be smaller than total RAM and quanta must be non-zero.")
    )]
    Configuration(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(sim::serialization_error))]
    Serialization(#[from] serde_json::Error),
}

/// Result type for simulator operations
pub type SimResult<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let error = SimError::Configuration("reserved_ram 600 >= total_ram 512".into());
        assert_eq!(
            error.to_string(),
            "Configuration error: reserved_ram 600 >= total_ram 512"
        );
    }

    #[test]
    fn test_input_unavailable_names_path() {
        let error = SimError::InputUnavailable {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(error.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: SimError = io.into();
        assert!(matches!(error, SimError::Io(_)));
    }
}
