//! Table attributes and the short overview writeup built from them.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableSummaryError};
use crate::input::{ColumnKind, Table};

/// Shape and column-kind breakdown of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSummary {
    /// Number of rows.
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// All column names, in table order.
    pub columns: Vec<String>,
    /// Names of categorical columns.
    pub categorical: Vec<String>,
    /// Names of numeric columns.
    pub numeric: Vec<String>,
}

impl AttributeSummary {
    /// Extract the attributes of a table.
    ///
    /// Columns that are neither categorical nor numeric (booleans, dates)
    /// appear in `columns` only.
    pub fn from_table(table: &Table) -> Self {
        let names_of = |kind| {
            table
                .columns_of_kind(kind)
                .map(|c| c.name().to_string())
                .collect::<Vec<_>>()
        };

        let summary = Self {
            row_count: table.row_count(),
            column_count: table.column_count(),
            columns: table.column_names().into_iter().map(String::from).collect(),
            categorical: names_of(ColumnKind::Categorical),
            numeric: names_of(ColumnKind::Numeric),
        };

        log::debug!(
            "attributes: {} rows, {} columns ({} categorical, {} numeric)",
            summary.row_count,
            summary.column_count,
            summary.categorical.len(),
            summary.numeric.len()
        );

        summary
    }

    /// Check that the counts and name lists agree with each other.
    pub fn validate(&self) -> Result<()> {
        if self.columns.len() != self.column_count {
            return Err(TableSummaryError::MalformedInput(format!(
                "column_count is {} but {} column names are listed",
                self.column_count,
                self.columns.len()
            )));
        }

        let unknown = self
            .categorical
            .iter()
            .chain(&self.numeric)
            .find(|name| !self.columns.contains(name));
        if let Some(name) = unknown {
            return Err(TableSummaryError::MalformedInput(format!(
                "feature '{}' is not among the listed columns",
                name
            )));
        }

        if self.categorical.len() + self.numeric.len() > self.column_count {
            return Err(TableSummaryError::MalformedInput(format!(
                "{} categorical and {} numeric features exceed {} columns",
                self.categorical.len(),
                self.numeric.len(),
                self.column_count
            )));
        }

        Ok(())
    }
}

/// Write a one-paragraph overview of a table's attributes.
///
/// # Example
///
/// ```
/// use tablesum::{overview_writeup, AttributeSummary, Column, Table};
///
/// let table = Table::new(vec![
///     Column::float("age", [Some(25.0), Some(30.0), None]),
///     Column::categorical("city", [Some("NYC"), Some("LA"), Some("NYC")]),
/// ]).unwrap();
///
/// let text = overview_writeup("Demo", &AttributeSummary::from_table(&table)).unwrap();
/// assert!(text.contains("3 nobs and 2 ndim"));
/// ```
pub fn overview_writeup(report_name: &str, attributes: &AttributeSummary) -> Result<String> {
    attributes.validate()?;

    Ok(format!(
        "Report name: {} Your dataframe has {} nobs and {} ndim. \
         There are {} categorical features, and {} numeric features.",
        report_name,
        attributes.row_count,
        attributes.column_count,
        attributes.categorical.len(),
        attributes.numeric.len()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Column;

    fn demo_table() -> Table {
        Table::new(vec![
            Column::float("age", [Some(25.0), Some(30.0), None]),
            Column::categorical("city", [Some("NYC"), Some("LA"), Some("NYC")]),
            Column::boolean("member", [Some(true), None, Some(false)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_table() {
        let attrs = AttributeSummary::from_table(&demo_table());
        assert_eq!(attrs.row_count, 3);
        assert_eq!(attrs.column_count, 3);
        assert_eq!(attrs.columns, vec!["age", "city", "member"]);
        assert_eq!(attrs.categorical, vec!["city"]);
        assert_eq!(attrs.numeric, vec!["age"]);
    }

    #[test]
    fn test_writeup_text() {
        let attrs = AttributeSummary::from_table(&demo_table());
        let text = overview_writeup("Demo", &attrs).unwrap();
        assert_eq!(
            text,
            "Report name: Demo Your dataframe has 3 nobs and 3 ndim. \
             There are 1 categorical features, and 1 numeric features."
        );
    }

    #[test]
    fn test_writeup_rejects_count_mismatch() {
        let mut attrs = AttributeSummary::from_table(&demo_table());
        attrs.column_count = 7;
        assert!(matches!(
            overview_writeup("Demo", &attrs),
            Err(TableSummaryError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_writeup_rejects_unknown_feature() {
        let mut attrs = AttributeSummary::from_table(&demo_table());
        attrs.numeric.push("height".to_string());
        assert!(matches!(
            overview_writeup("Demo", &attrs),
            Err(TableSummaryError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_deserialized_missing_field_fails() {
        let json = r#"{"row_count": 3, "column_count": 2, "columns": ["a", "b"]}"#;
        assert!(serde_json::from_str::<AttributeSummary>(json).is_err());
    }
}
