// ==========================================
// Compliance Import - Validation Engine
// ==========================================
// Row orchestration: per-column validation, pillar derivation,
// duplicate detection, status aggregation. Pure per invocation:
// no state survives between calls, so independent batches may be
// validated concurrently without locking.
// ==========================================

use crate::domain::report::{ImportSummary, ValidationResult};
use crate::domain::types::ImportDataType;
use crate::importer::dedupe::{dedupe_key, DuplicateTracker};
use crate::importer::derivation::assign_equipment_pillar;
use crate::importer::field::{validate_field, FieldCheck};
use crate::registry::catalog::import_schema;
use std::collections::HashMap;
use tracing::{debug, info};

/// Validates one batch of raw CSV rows against the schema for
/// `data_type`.
///
/// Every row produces a `ValidationResult`; malformed data never
/// fails the call. `existing_names` is the caller's set of already
/// persisted identifiers, used only for advisory duplicate
/// warnings (pass an empty slice to skip the check).
pub fn validate_import_data(
    data_type: ImportDataType,
    rows: &[HashMap<String, String>],
    existing_names: &[String],
) -> ImportSummary {
    debug!(
        data_type = %data_type,
        rows = rows.len(),
        existing = existing_names.len(),
        "validating import batch"
    );

    let mut tracker = DuplicateTracker::new(existing_names);

    let results: Vec<ValidationResult> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| validate_row(data_type, row, idx + 1, &mut tracker))
        .collect();

    let summary = ImportSummary::from_results(results);
    info!(
        data_type = %data_type,
        total = summary.total,
        valid = summary.valid,
        warnings = summary.warnings,
        errors = summary.errors,
        "import batch validated"
    );
    summary
}

/// Validates a single row. All columns run regardless of earlier
/// failures so every issue in the row surfaces in one pass.
fn validate_row(
    data_type: ImportDataType,
    row: &HashMap<String, String>,
    row_number: usize,
    tracker: &mut DuplicateTracker,
) -> ValidationResult {
    let schema = import_schema(data_type);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut data: HashMap<String, String> = HashMap::new();

    for column in &schema.columns {
        let raw_value = lookup_raw_value(row, &column.header, &column.field);
        match validate_field(column, raw_value) {
            FieldCheck::Accepted(value) => {
                data.insert(column.field.clone(), value);
            }
            FieldCheck::AcceptedWithWarning { value, warning } => {
                warnings.push(warning);
                data.insert(column.field.clone(), value);
            }
            FieldCheck::Rejected(error) => errors.push(error),
            FieldCheck::Absent => {}
        }
    }

    // Data-type-specific derivation: equipment pillar
    if data_type == ImportDataType::Equipment {
        assign_equipment_pillar(&mut data);
    }

    // Advisory duplicate checks; never escalate past warning
    if let Some(key) = dedupe_key(data_type, &data) {
        warnings.extend(tracker.check(&key, row_number));
    }

    let status = ValidationResult::derive_status(&errors, &warnings);
    ValidationResult {
        row: row_number,
        status,
        errors,
        warnings,
        data,
    }
}

/// Raw value lookup for a column: exact header match first, then
/// the canonical field name, then the lowercased header. Tolerates
/// CSV files with slightly different header casing.
fn lookup_raw_value<'a>(row: &'a HashMap<String, String>, header: &str, field: &str) -> &'a str {
    row.get(header)
        .or_else(|| row.get(field))
        .or_else(|| row.get(&header.to_lowercase()))
        .map(String::as_str)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::RowStatus;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_header_fallback_matching() {
        let rows = vec![
            // exact header
            row(&[("Name", "Cooler A"), ("Type", "walk_in_cooler")]),
            // canonical field names
            row(&[("name", "Cooler B"), ("type", "walk_in_cooler")]),
        ];
        let summary = validate_import_data(ImportDataType::Equipment, &rows, &[]);

        assert_eq!(summary.errors, 0);
        assert_eq!(summary.results[0].data.get("name").unwrap(), "Cooler A");
        assert_eq!(summary.results[1].data.get("name").unwrap(), "Cooler B");
    }

    #[test]
    fn test_lowercased_header_fallback() {
        let rows = vec![row(&[
            ("full name", "Maria Santos"),
            ("email", "maria@example.com"),
            ("role", "manager"),
        ])];
        let summary = validate_import_data(ImportDataType::Team, &rows, &[]);

        assert_eq!(summary.errors, 0);
        assert_eq!(
            summary.results[0].data.get("full_name").unwrap(),
            "Maria Santos"
        );
    }

    #[test]
    fn test_all_columns_run_despite_failures() {
        // Both required fields missing: both errors surface at once.
        let rows = vec![row(&[("Notes", "nothing else")])];
        let summary = validate_import_data(ImportDataType::Equipment, &rows, &[]);

        let result = &summary.results[0];
        assert_eq!(result.status, RowStatus::Error);
        assert!(result.errors.contains(&"Name is required".to_string()));
        assert!(result.errors.contains(&"Type is required".to_string()));
    }

    #[test]
    fn test_equipment_duplicate_with_pillar_scenario() {
        let rows = vec![
            row(&[("name", "Walk-in Cooler #1"), ("type", "Walk-In_Cooler")]),
            row(&[("name", "Walk-in Cooler #1"), ("type", "hood")]),
        ];
        let summary = validate_import_data(ImportDataType::Equipment, &rows, &[]);

        let first = &summary.results[0];
        assert_eq!(first.status, RowStatus::Valid);
        assert_eq!(first.data.get("type").unwrap(), "walk_in_cooler");
        assert_eq!(first.data.get("pillar").unwrap(), "food_safety");

        // Duplicate name downgrades to warning; hood still maps to
        // facility_safety independently of the duplicate.
        let second = &summary.results[1];
        assert_eq!(second.status, RowStatus::Warning);
        assert_eq!(
            second.warnings,
            vec!["Duplicate of row 1 in this file".to_string()]
        );
        assert_eq!(second.data.get("pillar").unwrap(), "facility_safety");
    }

    #[test]
    fn test_vendor_missing_name_and_bad_enum() {
        let rows = vec![row(&[("Service Type", "laundry")])];
        let summary = validate_import_data(ImportDataType::Vendors, &rows, &[]);

        let result = &summary.results[0];
        assert_eq!(result.status, RowStatus::Error);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors.contains(&"Company Name is required".to_string()));
        assert!(result
            .errors
            .iter()
            .any(|e| e.starts_with("Service Type: must be one of [")));
    }

    #[test]
    fn test_existing_names_warning() {
        let rows = vec![row(&[("Name", "Downtown Flagship")])];
        let existing = vec!["downtown flagship".to_string()];
        let summary = validate_import_data(ImportDataType::Locations, &rows, &existing);

        let result = &summary.results[0];
        assert_eq!(result.status, RowStatus::Warning);
        assert_eq!(
            result.warnings,
            vec!["\"downtown flagship\" may already exist in your account".to_string()]
        );
    }

    #[test]
    fn test_temperature_logs_never_dedupe() {
        let rows = vec![
            row(&[
                ("Equipment Name", "Walk-in Cooler #1"),
                ("Temperature", "36.5"),
                ("Date", "2024-12-01"),
            ]),
            row(&[
                ("Equipment Name", "Walk-in Cooler #1"),
                ("Temperature", "37.2"),
                ("Date", "2024-12-02"),
            ]),
        ];
        let summary = validate_import_data(ImportDataType::TemperatureLogs, &rows, &[]);

        assert_eq!(summary.valid, 2);
        assert_eq!(summary.warnings, 0);
    }

    #[test]
    fn test_field_errors_and_duplicate_warning_combine_to_error() {
        let rows = vec![
            row(&[("Name", "Cooler A"), ("Type", "walk_in_cooler")]),
            // Duplicate name AND invalid type: status stays error.
            row(&[("Name", "Cooler A"), ("Type", "time_machine")]),
        ];
        let summary = validate_import_data(ImportDataType::Equipment, &rows, &[]);

        let second = &summary.results[1];
        assert_eq!(second.status, RowStatus::Error);
        assert_eq!(second.errors.len(), 1);
        assert_eq!(
            second.warnings,
            vec!["Duplicate of row 1 in this file".to_string()]
        );
    }

    #[test]
    fn test_summary_counts_sum_to_total() {
        let rows = vec![
            row(&[("Name", "A"), ("Type", "hood")]),
            row(&[("Name", "A"), ("Type", "hood")]),
            row(&[("Name", ""), ("Type", "hood")]),
        ];
        let summary = validate_import_data(ImportDataType::Equipment, &rows, &[]);

        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.total,
            summary.valid + summary.warnings + summary.errors
        );
    }

    #[test]
    fn test_empty_batch() {
        let summary = validate_import_data(ImportDataType::Documents, &[], &[]);
        assert_eq!(summary.total, 0);
        assert!(summary.results.is_empty());
    }
}
