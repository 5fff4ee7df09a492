// ==========================================
// Compliance Import - Template/Registry Tests
// ==========================================
// The downloadable templates must themselves pass validation:
// a user who downloads a template, keeps the example rows, and
// re-uploads it should see an all-green preview.
// ==========================================

use compliance_import::{
    all_import_schemas, generate_template_csv, validate_import_data, CsvParser, ImportDataType,
};

#[test]
fn test_every_template_validates_cleanly() {
    for schema in all_import_schemas() {
        let csv = generate_template_csv(schema.data_type);
        let rows = CsvParser::parse_reader(csv.as_bytes())
            .unwrap_or_else(|e| panic!("{} template failed to parse: {e}", schema.data_type));

        assert_eq!(
            rows.len(),
            schema.example_rows.len(),
            "{} template row count",
            schema.data_type
        );

        let summary = validate_import_data(schema.data_type, &rows, &[]);
        assert_eq!(
            summary.valid, summary.total,
            "{} template should be all valid, got {:?}",
            schema.data_type,
            summary
                .results
                .iter()
                .flat_map(|r| r.errors.iter().chain(r.warnings.iter()))
                .collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_template_headers_match_schema_order() {
    for schema in all_import_schemas() {
        let csv = generate_template_csv(schema.data_type);
        let header_line = csv.split('\n').next().unwrap();
        let headers: Vec<&str> = header_line.split(',').collect();

        // No schema header currently needs CSV quoting, so a plain
        // split-on-comma must reproduce the column order.
        let expected: Vec<&str> = schema.columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, expected, "{} template headers", schema.data_type);
    }
}

#[test]
fn test_equipment_template_example_values() {
    let csv = generate_template_csv(ImportDataType::Equipment);
    let lines: Vec<&str> = csv.split('\n').collect();

    assert_eq!(lines.len(), 3); // header + 2 example rows
    assert!(lines[1].starts_with("Walk-in Cooler #1,walk_in_cooler,Kitchen"));
    assert!(lines[2].starts_with("Main Hood System,hood,Cooking Line"));
}

#[test]
fn test_registry_listing_order_is_stable() {
    let labels: Vec<&str> = all_import_schemas()
        .iter()
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Equipment",
            "Vendors",
            "Team Members",
            "Temperature Logs",
            "Documents",
            "Locations"
        ]
    );
}
