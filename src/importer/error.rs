// ==========================================
// Compliance Import - Importer Error Types
// ==========================================
// thiserror derive macros. Only caller-side failures live here;
// data-quality problems in uploaded rows are reported through
// ValidationResult, never through this enum.
// ==========================================

use thiserror::Error;

/// Importer module error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Schema errors (fatal, programming errors) =====
    #[error("unknown import data type: {0}")]
    UnknownDataType(String),

    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .csv is supported)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("CSV parse failed: {0}")]
    CsvParseError(String),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result type alias
pub type ImportResult<T> = Result<T, ImportError>;
