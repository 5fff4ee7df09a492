// ==========================================
// Compliance Import - Core Library
// ==========================================
// Bulk CSV import validation for kitchen compliance data:
// schema registry, field validators, duplicate detection,
// and status aggregation. Persistence of accepted rows is
// the caller's responsibility.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - shared types
pub mod domain;

// Schema registry - catalog + template generation
pub mod registry;

// Importer layer - parsing and validation
pub mod importer;

// Logging
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

pub use domain::report::{ImportSummary, ValidationResult};
pub use domain::schema::{ImportColumn, ImportSchema};
pub use domain::types::{ColumnType, ImportDataType, Pillar, RowStatus};

pub use importer::{validate_import_data, CsvParser, ImportError, ImportResult};
pub use registry::{all_import_schemas, generate_template_csv, import_schema};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Compliance Import";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
