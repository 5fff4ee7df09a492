// ==========================================
// Compliance Import - Validation Report Model
// ==========================================
// Per-row results and the batch summary returned by the
// validation engine. Created once per run, immutable after
// creation; persistence of accepted rows is the caller's job.
// ==========================================

use crate::domain::types::RowStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// ValidationResult - one per input row
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub row: usize, // 1-based input row number
    pub status: RowStatus,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Canonical field name → normalized value, populated only for
    /// fields that passed validation.
    pub data: HashMap<String, String>,
}

impl ValidationResult {
    /// Derives the row status: any error → Error, else any
    /// warning → Warning, else Valid.
    pub fn derive_status(errors: &[String], warnings: &[String]) -> RowStatus {
        if !errors.is_empty() {
            RowStatus::Error
        } else if !warnings.is_empty() {
            RowStatus::Warning
        } else {
            RowStatus::Valid
        }
    }

    /// Valid and warning rows are importable; error rows are not
    /// unless the caller explicitly overrides.
    pub fn is_importable(&self) -> bool {
        self.status != RowStatus::Error
    }
}

// ==========================================
// ImportSummary - aggregate over one run
// ==========================================
// Counts partition the result set by status: a row is counted in
// exactly one of valid / warnings / errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total: usize,
    pub valid: usize,
    pub warnings: usize,
    pub errors: usize,
    pub results: Vec<ValidationResult>,
}

impl ImportSummary {
    /// Folds per-row results into the summary counts.
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let valid = results
            .iter()
            .filter(|r| r.status == RowStatus::Valid)
            .count();
        let warnings = results
            .iter()
            .filter(|r| r.status == RowStatus::Warning)
            .count();
        let errors = results
            .iter()
            .filter(|r| r.status == RowStatus::Error)
            .count();

        ImportSummary {
            total: results.len(),
            valid,
            warnings,
            errors,
            results,
        }
    }

    /// Number of rows the caller may import without overriding.
    pub fn importable(&self) -> usize {
        self.valid + self.warnings
    }
}
