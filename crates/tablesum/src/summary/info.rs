//! Per-column info table: declared type, cardinality and missingness.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableSummaryError};
use crate::input::{ColumnType, Table};

/// One row of an [`InfoTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoRow {
    /// Column name.
    pub column: String,
    /// Declared type.
    pub dtype: ColumnType,
    /// Number of distinct non-missing values.
    pub unique_count: usize,
    /// Percentage of missing values (0-100, 3 decimals).
    pub missing_pct: f64,
}

/// Info rows for every column, most-missing first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoTable {
    pub rows: Vec<InfoRow>,
}

impl InfoTable {
    /// Build the info table for `table`.
    ///
    /// Rows are sorted by missing percentage, descending; columns with equal
    /// percentages keep their table order.
    ///
    /// Fails with [`TableSummaryError::EmptyInput`] when the table has no
    /// rows, since the missing percentage is undefined.
    pub fn from_table(table: &Table) -> Result<Self> {
        if table.is_empty() {
            return Err(TableSummaryError::EmptyInput(
                "cannot compute missing percentages for a table with no rows".to_string(),
            ));
        }

        let row_count = table.row_count() as f64;
        let mut rows: Vec<InfoRow> = table
            .columns()
            .iter()
            .map(|column| InfoRow {
                column: column.name().to_string(),
                dtype: column.dtype(),
                unique_count: column.distinct_count(),
                missing_pct: round3(100.0 * column.missing_count() as f64 / row_count),
            })
            .collect();

        // sort_by is stable
        rows.sort_by(|a, b| b.missing_pct.total_cmp(&a.missing_pct));

        Ok(Self { rows })
    }

    /// Get the row for a column.
    pub fn get(&self, column: &str) -> Option<&InfoRow> {
        self.rows.iter().find(|r| r.column == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Column;

    #[test]
    fn test_demo_table() {
        let table = Table::new(vec![
            Column::categorical("city", [Some("NYC"), Some("LA"), Some("NYC")]),
            Column::float("age", [Some(25.0), Some(30.0), Some(f64::NAN)]),
        ])
        .unwrap();

        let info = InfoTable::from_table(&table).unwrap();
        assert_eq!(info.len(), 2);
        assert_eq!(info.rows[0].column, "age");
        assert_eq!(info.rows[0].missing_pct, 33.333);
        assert_eq!(info.rows[0].unique_count, 2);
        assert_eq!(info.rows[0].dtype, ColumnType::Float);
        assert_eq!(info.rows[1].column, "city");
        assert_eq!(info.rows[1].missing_pct, 0.0);
        assert_eq!(info.rows[1].unique_count, 2);
    }

    #[test]
    fn test_ties_keep_column_order() {
        let table = Table::new(vec![
            Column::integer("a", [Some(1), None, Some(3), Some(4)]),
            Column::integer("b", [None, None, Some(3), Some(4)]),
            Column::categorical("c", [Some("x"), Some("y"), None, Some("z")]),
            Column::integer("d", [Some(1), Some(2), Some(3), Some(4)]),
        ])
        .unwrap();

        let info = InfoTable::from_table(&table).unwrap();
        let order: Vec<_> = info.rows.iter().map(|r| r.column.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c", "d"]);
        assert_eq!(info.get("a").unwrap().missing_pct, 25.0);
        assert_eq!(info.get("b").unwrap().missing_pct, 50.0);
    }

    #[test]
    fn test_all_missing_column() {
        let table = Table::new(vec![Column::categorical("x", [None::<&str>, None])]).unwrap();
        let info = InfoTable::from_table(&table).unwrap();
        assert_eq!(info.rows[0].missing_pct, 100.0);
        assert_eq!(info.rows[0].unique_count, 0);
    }

    #[test]
    fn test_empty_table_rejected() {
        let table = Table::new(vec![Column::integer("a", Vec::new())]).unwrap();
        assert!(matches!(
            InfoTable::from_table(&table),
            Err(TableSummaryError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(100.0 / 3.0), 33.333);
        assert_eq!(round3(200.0 / 3.0), 66.667);
    }
}
