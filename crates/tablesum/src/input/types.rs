//! Declared column types and the value kinds they map to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared data type of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers (no decimal point).
    Integer,
    /// Floating-point numbers.
    Float,
    /// Text/string values.
    String,
    /// Boolean values (true/false).
    Boolean,
    /// Date and/or time values.
    DateTime,
    /// Date only (no time component).
    Date,
    /// Time only (no date component).
    Time,
    /// Unable to determine type.
    #[default]
    Unknown,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Returns true if this type is temporal.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            ColumnType::DateTime | ColumnType::Date | ColumnType::Time
        )
    }

    /// The value kind a column of this type is stored as.
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnType::Integer | ColumnType::Float => ColumnKind::Numeric,
            ColumnType::String => ColumnKind::Categorical,
            _ => ColumnKind::Other,
        }
    }

    /// Short lowercase name, as shown in info tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::String => "string",
            ColumnType::Boolean => "boolean",
            ColumnType::DateTime => "date_time",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a column's values are stored and summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Numbers supporting arithmetic statistics.
    Numeric,
    /// Discrete text labels.
    Categorical,
    /// Anything else (booleans, dates, untyped).
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ColumnType::Integer.kind(), ColumnKind::Numeric);
        assert_eq!(ColumnType::Float.kind(), ColumnKind::Numeric);
        assert_eq!(ColumnType::String.kind(), ColumnKind::Categorical);
        assert_eq!(ColumnType::Boolean.kind(), ColumnKind::Other);
        assert_eq!(ColumnType::Date.kind(), ColumnKind::Other);
        assert_eq!(ColumnType::Unknown.kind(), ColumnKind::Other);
    }

    #[test]
    fn test_display_matches_serde_name() {
        let json = serde_json::to_string(&ColumnType::DateTime).unwrap();
        assert_eq!(json, format!("\"{}\"", ColumnType::DateTime));
    }
}
