// ==========================================
// Compliance Import - Importer Layer
// ==========================================
// CSV parsing, field validation, derivation, duplicate
// detection, and batch orchestration.
// ==========================================

// Module declarations
pub mod dedupe;
pub mod derivation;
pub mod engine;
pub mod error;
pub mod field;
pub mod file_parser;

// Re-export core functions and types
pub use dedupe::{dedupe_key, DuplicateTracker};
pub use derivation::{assign_equipment_pillar, pillar_for_equipment_type};
pub use engine::validate_import_data;
pub use error::{ImportError, ImportResult};
pub use field::{normalize_enum_value, parse_date, validate_field, FieldCheck};
pub use file_parser::CsvParser;
