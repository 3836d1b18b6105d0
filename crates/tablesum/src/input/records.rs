//! Building tables from string records with type inference.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TableSummaryError};
use super::table::{Column, ColumnValues, Table, EXACT_INTEGER_LIMIT};
use super::types::ColumnType;

// Date patterns compiled once on first use.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(),  // ISO date
        Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap(),  // US date
        Regex::new(r"^\d{2}-\d{2}-\d{4}").unwrap(),  // European date
        Regex::new(r"^\d{4}/\d{2}/\d{2}").unwrap(),  // Alt ISO
    ]
});

static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}(:\d{2}(\.\d+)?)?$").unwrap());

/// Configuration for turning records into a [`Table`].
#[derive(Debug, Clone)]
pub struct RecordsConfig {
    /// Treat common null tokens (`NA`, `null`, `-`, ...) as missing.
    /// Empty cells are always missing.
    pub detect_null_tokens: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            detect_null_tokens: true,
            max_rows: None,
        }
    }
}

impl Table {
    /// Build a table from row-major string records, inferring column types.
    ///
    /// # Example
    ///
    /// ```
    /// use tablesum::{ColumnType, Table};
    ///
    /// let table = Table::from_records(
    ///     vec!["age".to_string(), "city".to_string()],
    ///     vec![
    ///         vec!["25".to_string(), "NYC".to_string()],
    ///         vec!["NA".to_string(), "LA".to_string()],
    ///     ],
    /// ).unwrap();
    ///
    /// assert_eq!(table.column("age").unwrap().dtype(), ColumnType::Integer);
    /// assert_eq!(table.column("age").unwrap().missing_count(), 1);
    /// ```
    pub fn from_records(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        Self::from_records_with(&RecordsConfig::default(), headers, rows)
    }

    /// Build a table from records with a custom configuration.
    pub fn from_records_with(
        config: &RecordsConfig,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Result<Self> {
        if headers.is_empty() {
            return Err(TableSummaryError::InvalidInput(
                "No columns found".to_string(),
            ));
        }

        let limit = config.max_rows.unwrap_or(usize::MAX);
        let expected_cols = headers.len();
        let mut reshaped = 0usize;

        // Transpose into columns, padding short rows and truncating long ones
        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); expected_cols];
        for row in rows.into_iter().take(limit) {
            if row.len() != expected_cols {
                reshaped += 1;
            }
            let mut row = row.into_iter();
            for column in cells.iter_mut() {
                let cell = row
                    .next()
                    .filter(|v| !is_missing(v, config.detect_null_tokens));
                column.push(cell);
            }
        }

        if reshaped > 0 {
            log::warn!(
                "{} of the records did not have {} fields and were padded or truncated",
                reshaped,
                expected_cols
            );
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, values)| build_column(name, values))
            .collect();

        Table::new(columns)
    }
}

/// Check if a value represents a missing/null value.
pub fn is_null_value(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nil")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed == "."
        || trimmed == "-"
}

fn is_missing(value: &str, detect_null_tokens: bool) -> bool {
    if detect_null_tokens {
        is_null_value(value)
    } else {
        value.trim().is_empty()
    }
}

/// Infer the column type and convert its cells into typed values.
fn build_column(name: String, values: Vec<Option<String>>) -> Column {
    match infer_type(values.iter().flatten().map(String::as_str)) {
        ColumnType::Integer => Column::new(
            name,
            ColumnType::Integer,
            ColumnValues::Numeric(parse_numbers(values)),
        ),
        ColumnType::Float => Column::float(name, parse_numbers(values)),
        ColumnType::String => Column::new(
            name,
            ColumnType::String,
            ColumnValues::Categorical(values),
        ),
        ColumnType::Boolean => {
            let flags = values.iter().map(|v| v.as_deref().map(parse_flag));
            Column::boolean(name, flags)
        }
        other => Column::new(name, other, ColumnValues::Other(values)),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "yes")
}

fn parse_numbers(values: Vec<Option<String>>) -> Vec<Option<f64>> {
    values
        .into_iter()
        .map(|v| v.and_then(|s| s.trim().parse::<f64>().ok()))
        .collect()
}

/// Infer a single type that every non-missing value conforms to.
fn infer_type<'a>(values: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut inferred: Option<ColumnType> = None;

    for value in values {
        let detected = detect_value_type(value);
        inferred = Some(match (inferred, detected) {
            (None, t) => t,
            (Some(a), b) if a == b => a,
            (Some(ColumnType::Integer), ColumnType::Float)
            | (Some(ColumnType::Float), ColumnType::Integer) => ColumnType::Float,
            (Some(ColumnType::Date), ColumnType::DateTime)
            | (Some(ColumnType::DateTime), ColumnType::Date) => ColumnType::DateTime,
            _ => return ColumnType::String,
        });
    }

    inferred.unwrap_or(ColumnType::Unknown)
}

/// Detect the type of a single value.
fn detect_value_type(value: &str) -> ColumnType {
    let trimmed = value.trim();

    if matches!(
        trimmed.to_lowercase().as_str(),
        "true" | "false" | "yes" | "no"
    ) {
        return ColumnType::Boolean;
    }

    // Integers too large to store exactly are identifiers, not numbers
    if let Ok(n) = trimmed.parse::<i64>() {
        if n.unsigned_abs() < EXACT_INTEGER_LIMIT {
            return ColumnType::Integer;
        }
        return ColumnType::String;
    }

    // Float check; digit-only text that overflowed i64 is not a float
    if trimmed.parse::<f64>().is_ok_and(f64::is_finite)
        && trimmed.contains(['.', 'e', 'E'])
    {
        return ColumnType::Float;
    }

    // Date/DateTime check
    if DATE_PATTERNS.iter().any(|pattern| pattern.is_match(trimmed)) {
        if trimmed.contains(':') || trimmed.contains('T') {
            return ColumnType::DateTime;
        }
        return ColumnType::Date;
    }

    if TIME_PATTERN.is_match(trimmed) {
        return ColumnType::Time;
    }

    ColumnType::String
}
