// ==========================================
// Compliance Import - Template CSV Generation
// ==========================================
// Renders a schema's headers plus its example rows as a
// downloadable CSV. Pure formatter, no validation.
// ==========================================

use crate::domain::types::ImportDataType;
use crate::registry::catalog::import_schema;

/// RFC-4180-style escaping: fields containing a comma, quote, or
/// newline are wrapped in double quotes with internal quotes
/// doubled. No other escaping.
fn escape_csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Generates the downloadable template CSV for a data type:
/// header line plus the schema's example rows, joined with `\n`.
pub fn generate_template_csv(data_type: ImportDataType) -> String {
    let schema = import_schema(data_type);

    let header_line = schema
        .columns
        .iter()
        .map(|col| escape_csv_field(&col.header))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = vec![header_line];
    for row in &schema.example_rows {
        lines.push(
            row.iter()
                .map(|cell| escape_csv_field(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}
