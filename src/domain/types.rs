// ==========================================
// Compliance Import - Domain Type Definitions
// ==========================================
// Closed enumerations shared by the schema registry
// and the validation engine.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::importer::error::ImportError;

// ==========================================
// Import Data Type
// ==========================================
// The six importable record kinds. Closed set: adding a kind
// means adding a schema to the registry catalog as well.
// Serialization format: snake_case (matches CSV template names
// and the frontend data-type tokens)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportDataType {
    Equipment,       // kitchen equipment, coolers, hoods
    Vendors,         // service providers and suppliers
    Team,            // staff, managers, admins
    TemperatureLogs, // historical temperature readings
    Documents,       // permits, licenses, reports
    Locations,       // restaurant sites
}

impl ImportDataType {
    /// All data types, in the order they appear in the selection UI.
    pub const ALL: [ImportDataType; 6] = [
        ImportDataType::Equipment,
        ImportDataType::Vendors,
        ImportDataType::Team,
        ImportDataType::TemperatureLogs,
        ImportDataType::Documents,
        ImportDataType::Locations,
    ];

    /// Snake_case token, as used in template filenames and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportDataType::Equipment => "equipment",
            ImportDataType::Vendors => "vendors",
            ImportDataType::Team => "team",
            ImportDataType::TemperatureLogs => "temperature_logs",
            ImportDataType::Documents => "documents",
            ImportDataType::Locations => "locations",
        }
    }
}

impl fmt::Display for ImportDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImportDataType {
    type Err = ImportError;

    /// Parses a data-type token. Unknown tokens are a caller
    /// programming error, not a data-quality problem.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equipment" => Ok(ImportDataType::Equipment),
            "vendors" => Ok(ImportDataType::Vendors),
            "team" => Ok(ImportDataType::Team),
            "temperature_logs" => Ok(ImportDataType::TemperatureLogs),
            "documents" => Ok(ImportDataType::Documents),
            "locations" => Ok(ImportDataType::Locations),
            other => Err(ImportError::UnknownDataType(other.to_string())),
        }
    }
}

// ==========================================
// Column Type
// ==========================================
// Primitive type of a schema column; drives validator dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    Email,
    Phone,
    Date,
    Number,
    Enum,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::String => write!(f, "string"),
            ColumnType::Email => write!(f, "email"),
            ColumnType::Phone => write!(f, "phone"),
            ColumnType::Date => write!(f, "date"),
            ColumnType::Number => write!(f, "number"),
            ColumnType::Enum => write!(f, "enum"),
        }
    }
}

// ==========================================
// Row Status
// ==========================================
// Derived per row, never set directly: error wins over warning,
// warning wins over valid. Valid and warning rows are importable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Valid,
    Warning,
    Error,
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowStatus::Valid => write!(f, "valid"),
            RowStatus::Warning => write!(f, "warning"),
            RowStatus::Error => write!(f, "error"),
        }
    }
}

// ==========================================
// Compliance Pillar
// ==========================================
// Derived for equipment rows from the equipment type; routes the
// record to the food-safety or facility-safety dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    FoodSafety,
    FacilitySafety,
}

impl Pillar {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::FoodSafety => "food_safety",
            Pillar::FacilitySafety => "facility_safety",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
