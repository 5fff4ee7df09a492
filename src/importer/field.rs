// ==========================================
// Compliance Import - Field Validators
// ==========================================
// Per-column validation of raw string values: required check,
// then type dispatch (string/email/phone/date/number/enum).
// Each check is a pure function of the column and the raw value.
// ==========================================

use crate::domain::schema::ImportColumn;
use crate::domain::types::ColumnType;
use chrono::NaiveDate;

/// Fields carrying a Fahrenheit reading; values outside this range
/// are treated as sensor/typo errors, not warnings.
pub const TEMPERATURE_FIELDS: [&str; 3] = ["temperature", "temp_min", "temp_max"];

pub const TEMP_MIN_F: f64 = -20.0;
pub const TEMP_MAX_F: f64 = 250.0;

// ==========================================
// FieldCheck - outcome of validating one field
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    /// Value accepted: normalized value to store under the field key.
    Accepted(String),
    /// Value stored despite a non-blocking format issue (phone).
    AcceptedWithWarning { value: String, warning: String },
    /// Value rejected; nothing stored for this field.
    Rejected(String),
    /// Empty optional field: no error, simply absent from the data.
    Absent,
}

/// Validates one raw CSV cell against its column definition.
///
/// The required check runs before type dispatch and short-circuits
/// further validation for this field only; other columns of the
/// same row still run.
pub fn validate_field(column: &ImportColumn, raw_value: &str) -> FieldCheck {
    let value = raw_value.trim();

    if value.is_empty() {
        if column.required {
            return FieldCheck::Rejected(format!("{} is required", column.header));
        }
        return FieldCheck::Absent;
    }

    match column.column_type {
        ColumnType::String => FieldCheck::Accepted(value.to_string()),

        ColumnType::Email => {
            if is_valid_email(value) {
                FieldCheck::Accepted(value.to_string())
            } else {
                FieldCheck::Rejected(format!("{}: invalid email format", column.header))
            }
        }

        ColumnType::Phone => {
            // Format issues never block import: the trimmed original
            // value is stored either way.
            let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
            if !(10..=11).contains(&digits) {
                FieldCheck::AcceptedWithWarning {
                    value: value.to_string(),
                    warning: format!(
                        "{}: phone number should be 10-11 digits",
                        column.header
                    ),
                }
            } else {
                FieldCheck::Accepted(value.to_string())
            }
        }

        ColumnType::Date => match parse_date(value) {
            Some(iso) => FieldCheck::Accepted(iso),
            None => FieldCheck::Rejected(format!(
                "{}: unrecognized date format (use YYYY-MM-DD or MM/DD/YYYY)",
                column.header
            )),
        },

        ColumnType::Number => match value.parse::<f64>() {
            Ok(num) if !num.is_nan() => {
                if TEMPERATURE_FIELDS.contains(&column.field.as_str())
                    && !(TEMP_MIN_F..=TEMP_MAX_F).contains(&num)
                {
                    FieldCheck::Rejected(format!(
                        "{}: temperature must be between -20 and 250",
                        column.header
                    ))
                } else {
                    // Stored in original string form, not re-formatted.
                    FieldCheck::Accepted(value.to_string())
                }
            }
            _ => FieldCheck::Rejected(format!("{}: must be a number", column.header)),
        },

        ColumnType::Enum => match normalize_enum_value(value, &column.enum_values) {
            Some(canonical) => FieldCheck::Accepted(canonical),
            None => FieldCheck::Rejected(format!(
                "{}: must be one of [{}]",
                column.header,
                column.enum_values.join(", ")
            )),
        },
    }
}

// ==========================================
// Date parsing
// ==========================================
// Accepts ISO YYYY-MM-DD and US M/D/YYYY or M/D/YY. Two-digit
// years pivot at 50: >=50 maps to 19xx, <50 maps to 20xx.
// Normalized output is always canonical YYYY-MM-DD.

/// Parses a date string to canonical `YYYY-MM-DD`, or `None` if the
/// shape is unrecognized or the calendar date does not exist.
pub fn parse_date(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // YYYY-MM-DD (month/day may be unpadded on input)
    if let Some((y, m, d)) = split_date(trimmed, '-') {
        if y.len() != 4 || m.len() > 2 || d.len() > 2 {
            return None;
        }
        return format_valid_date(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?);
    }

    // M/D/YYYY or M/D/YY
    if let Some((m, d, y)) = split_date(trimmed, '/') {
        if m.len() > 2 || d.len() > 2 || y.len() < 2 || y.len() > 4 {
            return None;
        }
        let mut year: i32 = y.parse().ok()?;
        if y.len() == 2 {
            year = if year >= 50 { 1900 + year } else { 2000 + year };
        }
        return format_valid_date(year, m.parse().ok()?, d.parse().ok()?);
    }

    None
}

/// Splits into exactly three all-digit segments, or `None`.
fn split_date(value: &str, sep: char) -> Option<(&str, &str, &str)> {
    let mut parts = value.split(sep);
    let a = parts.next()?;
    let b = parts.next()?;
    let c = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    for part in [a, b, c] {
        if part.is_empty() || !part.chars().all(|ch| ch.is_ascii_digit()) {
            return None;
        }
    }
    Some((a, b, c))
}

/// Calendar validity via round-trip construction; years outside
/// [1900, 2100] are rejected as data-entry mistakes.
fn format_valid_date(year: i32, month: u32, day: u32) -> Option<String> {
    if !(1900..=2100).contains(&year) {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}

// ==========================================
// Email validation
// ==========================================

/// Permissive email shape check: no whitespace, exactly one `@`
/// with a non-empty local part, and a `.` in the domain with at
/// least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false, // zero or multiple '@'
    };

    if local.is_empty() {
        return false;
    }

    let chars: Vec<char> = domain.chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(i, c)| *c == '.' && i > 0 && i + 1 < chars.len())
}

// ==========================================
// Enum normalization
// ==========================================

/// Normalizes user input against the canonical enum values:
/// lowercased, with runs of whitespace or hyphens collapsed to a
/// single underscore, then matched case-insensitively. Returns the
/// canonical registry value on match.
pub fn normalize_enum_value(value: &str, allowed: &[String]) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut token = String::with_capacity(trimmed.len());
    let mut in_separator = false;
    for c in trimmed.chars() {
        if c.is_whitespace() || c == '-' {
            if !in_separator {
                token.push('_');
                in_separator = true;
            }
        } else {
            token.extend(c.to_lowercase());
            in_separator = false;
        }
    }

    allowed
        .iter()
        .find(|option| option.to_lowercase() == token)
        .cloned()
}
