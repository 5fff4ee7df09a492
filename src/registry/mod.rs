// ==========================================
// Compliance Import - Schema Registry
// ==========================================
// Fixed catalog of import schemas + template CSV generation.
// The registry owns schema definitions for the process lifetime;
// nothing mutates them after startup.
// ==========================================

pub mod catalog;
pub mod template;

pub use catalog::{all_import_schemas, import_schema};
pub use template::generate_template_csv;
