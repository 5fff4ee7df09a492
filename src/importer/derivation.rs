// ==========================================
// Compliance Import - Field Derivation
// ==========================================
// Post-validation derived fields. Currently one rule: equipment
// rows get a compliance pillar derived from the equipment type.
// Derived fields join the row's data but never affect its status.
// ==========================================

use crate::domain::types::Pillar;
use std::collections::HashMap;

/// Equipment types that belong to the facility-safety pillar;
/// everything else is food safety.
const FACILITY_SAFETY_TYPES: &[&str] = &[
    "hood",
    "fire_suppression",
    "grease_trap",
    "extinguisher",
];

/// Maps a canonical equipment type to its compliance pillar.
pub fn pillar_for_equipment_type(equipment_type: &str) -> Pillar {
    if FACILITY_SAFETY_TYPES.contains(&equipment_type.to_lowercase().as_str()) {
        Pillar::FacilitySafety
    } else {
        Pillar::FoodSafety
    }
}

/// Derives the `pillar` field for an equipment row, if its `type`
/// field survived validation.
pub fn assign_equipment_pillar(data: &mut HashMap<String, String>) {
    if let Some(equipment_type) = data.get("type") {
        let pillar = pillar_for_equipment_type(equipment_type);
        data.insert("pillar".to_string(), pillar.as_str().to_string());
    }
}
