// ==========================================
// Compliance Import - Domain Layer
// ==========================================
// Types shared by the schema registry and validation engine.
// ==========================================

pub mod report;
pub mod schema;
pub mod types;

pub use report::{ImportSummary, ValidationResult};
pub use schema::{ImportColumn, ImportSchema};
pub use types::{ColumnType, ImportDataType, Pillar, RowStatus};
