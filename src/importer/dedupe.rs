// ==========================================
// Compliance Import - Duplicate Detection
// ==========================================
// Data-type-specific dedupe keys plus in-batch and
// against-existing duplicate checks. Duplicates are advisory:
// they produce warnings, never errors.
// ==========================================

use crate::domain::types::ImportDataType;
use std::collections::{HashMap, HashSet};

/// Derives the case-insensitive dedupe key for a validated row.
///
/// Temperature logs have no key: repeated equipment names on
/// different days are expected, not duplicates.
pub fn dedupe_key(
    data_type: ImportDataType,
    data: &HashMap<String, String>,
) -> Option<String> {
    let field = match data_type {
        ImportDataType::Equipment | ImportDataType::Locations => "name",
        ImportDataType::Vendors => "company_name",
        ImportDataType::Team => "email",
        ImportDataType::Documents => "document_name",
        ImportDataType::TemperatureLogs => return None,
    };
    data.get(field).map(|v| v.to_lowercase())
}

// ==========================================
// DuplicateTracker - per-batch dedupe state
// ==========================================
// Fresh per validation run; tracks the first row that produced
// each key and the caller's set of already-persisted names.
pub struct DuplicateTracker {
    seen_keys: HashMap<String, usize>, // key -> first 1-based row number
    existing: HashSet<String>,
}

impl DuplicateTracker {
    pub fn new(existing_names: &[String]) -> Self {
        DuplicateTracker {
            seen_keys: HashMap::new(),
            existing: existing_names.iter().map(|n| n.to_lowercase()).collect(),
        }
    }

    /// Records a row's dedupe key and returns the duplicate warnings
    /// it triggers, if any.
    ///
    /// The first occurrence of a key gets no in-batch warning; every
    /// later occurrence references the first row's 1-based number.
    pub fn check(&mut self, key: &str, row_number: usize) -> Vec<String> {
        let mut warnings = Vec::new();

        match self.seen_keys.get(key) {
            Some(first_row) => {
                warnings.push(format!("Duplicate of row {} in this file", first_row));
            }
            None => {
                self.seen_keys.insert(key.to_string(), row_number);
            }
        }

        if self.existing.contains(key) {
            warnings.push(format!("\"{}\" may already exist in your account", key));
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_dedupe_key_per_data_type() {
        let row = data(&[
            ("name", "Walk-in Cooler #1"),
            ("company_name", "CleanAir Hoods LLC"),
            ("email", "Maria@Example.com"),
            ("document_name", "Health Permit 2024"),
        ]);

        assert_eq!(
            dedupe_key(ImportDataType::Equipment, &row),
            Some("walk-in cooler #1".to_string())
        );
        assert_eq!(
            dedupe_key(ImportDataType::Locations, &row),
            Some("walk-in cooler #1".to_string())
        );
        assert_eq!(
            dedupe_key(ImportDataType::Vendors, &row),
            Some("cleanair hoods llc".to_string())
        );
        assert_eq!(
            dedupe_key(ImportDataType::Team, &row),
            Some("maria@example.com".to_string())
        );
        assert_eq!(
            dedupe_key(ImportDataType::Documents, &row),
            Some("health permit 2024".to_string())
        );
        assert_eq!(dedupe_key(ImportDataType::TemperatureLogs, &row), None);
    }

    #[test]
    fn test_dedupe_key_missing_field() {
        let row = data(&[("notes", "no name here")]);
        assert_eq!(dedupe_key(ImportDataType::Equipment, &row), None);
    }

    #[test]
    fn test_in_batch_duplicate_references_first_row() {
        let mut tracker = DuplicateTracker::new(&[]);

        assert!(tracker.check("walk-in cooler #1", 1).is_empty());
        assert_eq!(
            tracker.check("walk-in cooler #1", 2),
            vec!["Duplicate of row 1 in this file".to_string()]
        );
        // Third occurrence still points at the first row.
        assert_eq!(
            tracker.check("walk-in cooler #1", 5),
            vec!["Duplicate of row 1 in this file".to_string()]
        );
    }

    #[test]
    fn test_existing_names_matched_case_insensitively() {
        let mut tracker = DuplicateTracker::new(&["Walk-in Cooler #1".to_string()]);

        assert_eq!(
            tracker.check("walk-in cooler #1", 1),
            vec!["\"walk-in cooler #1\" may already exist in your account".to_string()]
        );
    }

    #[test]
    fn test_duplicate_and_existing_stack() {
        let mut tracker = DuplicateTracker::new(&["Main Hood System".to_string()]);

        assert_eq!(tracker.check("main hood system", 1).len(), 1); // existing only
        assert_eq!(tracker.check("main hood system", 2).len(), 2); // both
    }

    #[test]
    fn test_distinct_keys_no_warnings() {
        let mut tracker = DuplicateTracker::new(&[]);
        assert!(tracker.check("cooler a", 1).is_empty());
        assert!(tracker.check("cooler b", 2).is_empty());
    }
}
