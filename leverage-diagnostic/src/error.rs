//! Loader error types.
//!
//! Diagnosis itself cannot fail; only reading batch input can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagnosticError {
    #[error("Failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error at line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV header error: {0}")]
    CsvHeader(#[source] csv::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object or an array of objects, got {0}")]
    UnexpectedJsonShape(&'static str),
}

/// Result type alias for loader operations.
pub type DiagnosticResult<T> = Result<T, DiagnosticError>;
