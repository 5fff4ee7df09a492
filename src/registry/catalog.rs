// ==========================================
// Compliance Import - Schema Registry Catalog
// ==========================================
// Fixed catalog of the six import schemas: column definitions,
// enum value sets, and the example rows rendered into the
// downloadable templates. Built once, immutable for the
// process lifetime.
// ==========================================

use crate::domain::schema::{ImportColumn, ImportSchema};
use crate::domain::types::{ColumnType, ImportDataType};
use std::sync::OnceLock;

// ==========================================
// Column constructors
// ==========================================

fn required(header: &str, field: &str, column_type: ColumnType) -> ImportColumn {
    ImportColumn {
        header: header.to_string(),
        field: field.to_string(),
        required: true,
        column_type,
        enum_values: Vec::new(),
        description: None,
    }
}

fn optional(header: &str, field: &str, column_type: ColumnType) -> ImportColumn {
    ImportColumn {
        required: false,
        ..required(header, field, column_type)
    }
}

fn required_enum(header: &str, field: &str, values: &[&str]) -> ImportColumn {
    ImportColumn {
        enum_values: values.iter().map(|v| v.to_string()).collect(),
        ..required(header, field, ColumnType::Enum)
    }
}

fn optional_enum(header: &str, field: &str, values: &[&str]) -> ImportColumn {
    ImportColumn {
        required: false,
        ..required_enum(header, field, values)
    }
}

fn describe(mut column: ImportColumn, text: &str) -> ImportColumn {
    column.description = Some(text.to_string());
    column
}

fn example_rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

// ==========================================
// Catalog construction
// ==========================================

fn equipment_schema() -> ImportSchema {
    ImportSchema {
        data_type: ImportDataType::Equipment,
        label: "Equipment".to_string(),
        description: "Import kitchen equipment, coolers, hoods, and other assets".to_string(),
        columns: vec![
            describe(
                required("Name", "name", ColumnType::String),
                "Equipment name or label",
            ),
            describe(
                required_enum(
                    "Type",
                    "type",
                    &[
                        "walk_in_cooler",
                        "walk_in_freezer",
                        "hood",
                        "fire_suppression",
                        "grease_trap",
                        "grease_interceptor",
                        "backflow_preventer",
                        "extinguisher",
                        "prep_cooler",
                        "hot_holding",
                        "ice_machine",
                        "dishwasher",
                        "fryer",
                        "oven",
                        "elevator",
                        "wood_fired_oven",
                        "charcoal_grill",
                        "wood_smoker",
                        "pellet_smoker",
                        "other",
                    ],
                ),
                "Equipment type",
            ),
            describe(
                optional("Location Area", "location_area", ColumnType::String),
                "Where the equipment is located",
            ),
            optional("Manufacturer", "manufacturer", ColumnType::String),
            optional("Model", "model", ColumnType::String),
            optional("Serial Number", "serial_number", ColumnType::String),
            optional("Install Date", "install_date", ColumnType::Date),
            optional("Last Service Date", "last_service_date", ColumnType::Date),
            optional_enum(
                "Service Frequency",
                "service_frequency",
                &["monthly", "quarterly", "semi_annual", "annual"],
            ),
            describe(
                optional("Temp Min", "temp_min", ColumnType::Number),
                "Minimum acceptable temperature",
            ),
            describe(
                optional("Temp Max", "temp_max", ColumnType::Number),
                "Maximum acceptable temperature",
            ),
            optional("Notes", "notes", ColumnType::String),
        ],
        example_rows: example_rows(&[
            &[
                "Walk-in Cooler #1",
                "walk_in_cooler",
                "Kitchen",
                "True Manufacturing",
                "TWT-48SD",
                "SN-44821",
                "2022-06-15",
                "2024-11-01",
                "quarterly",
                "33",
                "40",
                "Primary produce storage",
            ],
            &[
                "Main Hood System",
                "hood",
                "Cooking Line",
                "Captive-Aire",
                "A5424",
                "SN-88102",
                "2021-03-10",
                "2024-09-15",
                "semi_annual",
                "",
                "",
                "Covers fryer and grill stations",
            ],
        ]),
    }
}

fn vendors_schema() -> ImportSchema {
    ImportSchema {
        data_type: ImportDataType::Vendors,
        label: "Vendors".to_string(),
        description: "Import vendor and service provider contacts".to_string(),
        columns: vec![
            required("Company Name", "company_name", ColumnType::String),
            optional("Contact Name", "contact_name", ColumnType::String),
            optional("Email", "email", ColumnType::Email),
            optional("Phone", "phone", ColumnType::Phone),
            required_enum(
                "Service Type",
                "service_type",
                &[
                    "hood_cleaning",
                    "fire_suppression",
                    "pest_control",
                    "grease_trap",
                    "equipment_repair",
                    "food_supply",
                    "plumbing",
                    "hvac",
                    "other",
                ],
            ),
            optional("License Number", "license_number", ColumnType::String),
            optional("Insurance Expiry", "insurance_expiry", ColumnType::Date),
            optional("Contract Start", "contract_start", ColumnType::Date),
            optional("Contract End", "contract_end", ColumnType::Date),
            optional("Notes", "notes", ColumnType::String),
        ],
        example_rows: example_rows(&[
            &[
                "CleanAir Hoods LLC",
                "Mike Rivera",
                "mike@cleanairhoods.com",
                "(555) 234-5678",
                "hood_cleaning",
                "HC-2024-1190",
                "2025-08-15",
                "2024-01-01",
                "2025-12-31",
                "Quarterly hood cleaning service",
            ],
            &[
                "SafeGuard Fire Systems",
                "Dana Chen",
                "dana@safeguardfire.com",
                "555-876-5432",
                "fire_suppression",
                "FS-1102",
                "2025-11-30",
                "2024-06-01",
                "2026-05-31",
                "Annual inspection and recharge",
            ],
        ]),
    }
}

fn team_schema() -> ImportSchema {
    ImportSchema {
        data_type: ImportDataType::Team,
        label: "Team Members".to_string(),
        description: "Import staff, managers, and admin users".to_string(),
        columns: vec![
            required("Full Name", "full_name", ColumnType::String),
            required("Email", "email", ColumnType::Email),
            required_enum("Role", "role", &["admin", "manager", "staff"]),
            optional("Phone", "phone", ColumnType::Phone),
            optional("Hire Date", "hire_date", ColumnType::Date),
            optional(
                "Food Handler Cert Expiry",
                "food_handler_cert_expiry",
                ColumnType::Date,
            ),
            optional(
                "Food Manager Cert Expiry",
                "food_manager_cert_expiry",
                ColumnType::Date,
            ),
            optional("Position", "position", ColumnType::String),
        ],
        example_rows: example_rows(&[
            &[
                "Maria Santos",
                "maria@example.com",
                "manager",
                "(555) 111-2233",
                "2021-04-10",
                "2026-04-10",
                "2026-04-10",
                "Kitchen Manager",
            ],
            &[
                "James Park",
                "james@example.com",
                "staff",
                "555-444-5566",
                "2023-09-01",
                "2025-09-01",
                "",
                "Line Cook",
            ],
        ]),
    }
}

fn temperature_logs_schema() -> ImportSchema {
    ImportSchema {
        data_type: ImportDataType::TemperatureLogs,
        label: "Temperature Logs".to_string(),
        description: "Import historical temperature readings for equipment".to_string(),
        columns: vec![
            describe(
                required("Equipment Name", "equipment_name", ColumnType::String),
                "Must match an existing equipment name",
            ),
            describe(
                required("Temperature", "temperature", ColumnType::Number),
                "Temperature reading in degrees F",
            ),
            required("Date", "date", ColumnType::Date),
            describe(
                optional("Time", "time", ColumnType::String),
                "Time of reading (e.g. 08:00 AM)",
            ),
            optional("Recorded By", "recorded_by", ColumnType::String),
            optional("Notes", "notes", ColumnType::String),
        ],
        example_rows: example_rows(&[
            &[
                "Walk-in Cooler #1",
                "36.5",
                "2024-12-01",
                "08:00 AM",
                "Maria Santos",
                "Morning check",
            ],
            &[
                "Walk-in Cooler #1",
                "37.2",
                "2024-12-01",
                "04:00 PM",
                "James Park",
                "Afternoon check",
            ],
        ]),
    }
}

fn documents_schema() -> ImportSchema {
    ImportSchema {
        data_type: ImportDataType::Documents,
        label: "Documents".to_string(),
        description: "Import document records such as permits, licenses, and reports".to_string(),
        columns: vec![
            required("Document Name", "document_name", ColumnType::String),
            required_enum(
                "Type",
                "type",
                &[
                    "inspection_report",
                    "insurance",
                    "license",
                    "permit",
                    "certification",
                    "cleaning_report",
                    "training_record",
                    "other",
                ],
            ),
            optional("Issue Date", "issue_date", ColumnType::Date),
            optional("Expiry Date", "expiry_date", ColumnType::Date),
            optional("Issuing Authority", "issuing_authority", ColumnType::String),
            optional("Related Vendor", "related_vendor", ColumnType::String),
            optional("Related Equipment", "related_equipment", ColumnType::String),
            optional("Notes", "notes", ColumnType::String),
        ],
        example_rows: example_rows(&[
            &[
                "Health Permit 2024",
                "permit",
                "2024-01-15",
                "2025-01-14",
                "County Health Dept",
                "",
                "",
                "Annual health permit renewal",
            ],
            &[
                "Hood Cleaning Report - Dec",
                "cleaning_report",
                "2024-12-10",
                "",
                "",
                "CleanAir Hoods LLC",
                "Main Hood System",
                "Quarterly cleaning completed",
            ],
        ]),
    }
}

fn locations_schema() -> ImportSchema {
    ImportSchema {
        data_type: ImportDataType::Locations,
        label: "Locations".to_string(),
        description: "Import restaurant locations and sites".to_string(),
        columns: vec![
            describe(
                required("Name", "name", ColumnType::String),
                "Location name or identifier",
            ),
            optional("Address", "address", ColumnType::String),
            optional("City", "city", ColumnType::String),
            optional_enum(
                "State",
                "state",
                &["CA", "TX", "FL", "NY", "WA", "OR", "AZ", "OTHER"],
            ),
            optional("Zip", "zip", ColumnType::String),
            optional("Phone", "phone", ColumnType::Phone),
            optional("Manager Email", "manager_email", ColumnType::Email),
        ],
        example_rows: example_rows(&[
            &[
                "Downtown Flagship",
                "123 Main St",
                "Los Angeles",
                "CA",
                "90012",
                "(555) 100-2000",
                "manager.downtown@example.com",
            ],
            &[
                "Airport Terminal B",
                "1 World Way",
                "Los Angeles",
                "CA",
                "90045",
                "(555) 300-4000",
                "manager.airport@example.com",
            ],
        ]),
    }
}

fn build_catalog() -> Vec<ImportSchema> {
    // Same order as ImportDataType::ALL
    vec![
        equipment_schema(),
        vendors_schema(),
        team_schema(),
        temperature_logs_schema(),
        documents_schema(),
        locations_schema(),
    ]
}

static CATALOG: OnceLock<Vec<ImportSchema>> = OnceLock::new();

fn catalog() -> &'static [ImportSchema] {
    CATALOG.get_or_init(build_catalog)
}

// ==========================================
// Public lookup API
// ==========================================

/// Returns the schema for a data type.
///
/// Infallible: `ImportDataType` is a closed enum and the catalog
/// covers every variant. The fallible edge is parsing a data-type
/// token with `ImportDataType::from_str`.
pub fn import_schema(data_type: ImportDataType) -> &'static ImportSchema {
    catalog()
        .iter()
        .find(|s| s.data_type == data_type)
        .expect("registry catalog covers every data type")
}

/// All schemas, in selection-UI order.
pub fn all_import_schemas() -> &'static [ImportSchema] {
    catalog()
}
