// ==========================================
// Compliance Import - Schema Domain Model
// ==========================================
// Column and schema definitions for the six importable data
// types. Written once by the registry catalog at startup,
// read-only everywhere else.
// ==========================================

use crate::domain::types::{ColumnType, ImportDataType};
use serde::{Deserialize, Serialize};

// ==========================================
// ImportColumn - one field of a data type
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportColumn {
    pub header: String, // CSV display header, used to match uploaded columns
    pub field: String,  // canonical internal key
    pub required: bool,
    pub column_type: ColumnType,
    /// Allowed values for `ColumnType::Enum` columns, in canonical
    /// registry casing. Empty for every other column type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    /// Optional tooltip text for the column-mapping UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ==========================================
// ImportSchema - one per data type
// ==========================================
// Invariant: every example row has exactly one cell per column
// (checked by the registry catalog tests).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSchema {
    pub data_type: ImportDataType,
    pub label: String,
    pub description: String,
    pub columns: Vec<ImportColumn>,
    /// Sample rows rendered into the downloadable template CSV.
    /// Never consulted during validation.
    pub example_rows: Vec<Vec<String>>,
}

impl ImportSchema {
    /// Looks up a column by its canonical field name.
    pub fn column(&self, field: &str) -> Option<&ImportColumn> {
        self.columns.iter().find(|c| c.field == field)
    }

    pub fn required_columns(&self) -> impl Iterator<Item = &ImportColumn> {
        self.columns.iter().filter(|c| c.required)
    }
}
