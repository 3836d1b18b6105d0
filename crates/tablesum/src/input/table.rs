//! The in-memory table model.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Result, TableSummaryError};
use super::types::{ColumnKind, ColumnType};

/// Integers at or beyond this magnitude cannot be stored exactly as `f64`.
pub(crate) const EXACT_INTEGER_LIMIT: u64 = 1 << 53;

/// Column values, tagged by kind. `None` marks a missing value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum ColumnValues {
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
    Other(Vec<Option<String>>),
}

impl ColumnValues {
    /// The kind of values stored.
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnValues::Numeric(_) => ColumnKind::Numeric,
            ColumnValues::Categorical(_) => ColumnKind::Categorical,
            ColumnValues::Other(_) => ColumnKind::Other,
        }
    }

    /// Number of entries, missing ones included.
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Categorical(v) | ColumnValues::Other(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of missing entries.
    pub fn missing_count(&self) -> usize {
        match self {
            ColumnValues::Numeric(v) => v.iter().filter(|x| x.is_none()).count(),
            ColumnValues::Categorical(v) | ColumnValues::Other(v) => {
                v.iter().filter(|x| x.is_none()).count()
            }
        }
    }

    /// Number of distinct non-missing values.
    pub fn distinct_count(&self) -> usize {
        match self {
            ColumnValues::Numeric(v) => v
                .iter()
                .flatten()
                // -0.0 and 0.0 compare equal, so they count once
                .map(|x| if *x == 0.0 { 0.0f64.to_bits() } else { x.to_bits() })
                .collect::<HashSet<u64>>()
                .len(),
            ColumnValues::Categorical(v) | ColumnValues::Other(v) => v
                .iter()
                .flatten()
                .map(String::as_str)
                .collect::<HashSet<&str>>()
                .len(),
        }
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    name: String,
    dtype: ColumnType,
    values: ColumnValues,
}

impl Column {
    /// Create a column from raw parts. NaN numeric entries are stored as missing.
    ///
    /// The pairing of `dtype` and value kind is checked by [`Table::new`].
    pub fn new(name: impl Into<String>, dtype: ColumnType, values: ColumnValues) -> Self {
        let values = match values {
            ColumnValues::Numeric(v) => ColumnValues::Numeric(
                v.into_iter().map(|x| x.filter(|x| !x.is_nan())).collect(),
            ),
            other => other,
        };

        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// An integer column.
    ///
    /// Values with a magnitude of 2^53 or more are rejected by [`Table::new`].
    pub fn integer(name: impl Into<String>, values: impl IntoIterator<Item = Option<i64>>) -> Self {
        let values = values.into_iter().map(|v| v.map(|x| x as f64)).collect();
        Self::new(name, ColumnType::Integer, ColumnValues::Numeric(values))
    }

    /// A floating-point column. NaN entries are stored as missing.
    pub fn float(name: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        let values = values.into_iter().collect();
        Self::new(name, ColumnType::Float, ColumnValues::Numeric(values))
    }

    /// A categorical (text) column.
    pub fn categorical<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        let values = values.into_iter().map(|v| v.map(Into::into)).collect();
        Self::new(name, ColumnType::String, ColumnValues::Categorical(values))
    }

    /// A boolean column, stored as `"true"`/`"false"` labels.
    pub fn boolean(name: impl Into<String>, values: impl IntoIterator<Item = Option<bool>>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.map(|b| b.to_string()))
            .collect();
        Self::new(name, ColumnType::Boolean, ColumnValues::Other(values))
    }

    /// A column of some other declared type (dates, unknown), stored as text.
    pub fn other<S: Into<String>>(
        name: impl Into<String>,
        dtype: ColumnType,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        let values = values.into_iter().map(|v| v.map(Into::into)).collect();
        Self::new(name, dtype, ColumnValues::Other(values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type.
    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    pub fn values(&self) -> &ColumnValues {
        &self.values
    }

    pub fn kind(&self) -> ColumnKind {
        self.values.kind()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.values.missing_count()
    }

    pub fn distinct_count(&self) -> usize {
        self.values.distinct_count()
    }
}

/// An ordered collection of equal-length named columns.
///
/// # Example
///
/// ```
/// use tablesum::{Column, Table};
///
/// let table = Table::new(vec![
///     Column::float("age", [Some(25.0), Some(30.0), None]),
///     Column::categorical("city", [Some("NYC"), Some("LA"), Some("NYC")]),
/// ]).unwrap();
///
/// assert_eq!(table.shape(), (3, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Create a table, validating its shape.
    ///
    /// Fails with [`TableSummaryError::InvalidInput`] when columns differ in
    /// length, names repeat, a declared type does not match the stored
    /// value kind, or an integer column holds a value that is fractional or
    /// too large to store exactly.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);
        let mut seen = HashSet::new();

        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(TableSummaryError::InvalidInput(format!(
                    "duplicate column name '{}'",
                    column.name
                )));
            }
            if column.len() != row_count {
                return Err(TableSummaryError::InvalidInput(format!(
                    "column '{}' has {} rows, expected {}",
                    column.name,
                    column.len(),
                    row_count
                )));
            }
            if column.dtype.kind() != column.kind() {
                return Err(TableSummaryError::InvalidInput(format!(
                    "column '{}' is declared {} but holds {:?} values",
                    column.name,
                    column.dtype,
                    column.kind()
                )));
            }
            if let Some(value) = inexact_integer(column) {
                return Err(TableSummaryError::InvalidInput(format!(
                    "column '{}' is declared integer but holds {}",
                    column.name, value
                )));
            }
        }

        log::debug!(
            "built table with {} rows and {} columns",
            row_count,
            columns.len()
        );

        Ok(Self { columns, row_count })
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.columns.len())
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get all column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns of the given kind, in table order.
    pub fn columns_of_kind(&self, kind: ColumnKind) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(move |c| c.kind() == kind)
    }
}

/// First value of an integer column that is not an exactly stored integer.
fn inexact_integer(column: &Column) -> Option<f64> {
    let ColumnValues::Numeric(values) = &column.values else {
        return None;
    };
    if column.dtype != ColumnType::Integer {
        return None;
    }

    values
        .iter()
        .flatten()
        .copied()
        .find(|x| x.fract() != 0.0 || x.abs() >= EXACT_INTEGER_LIMIT as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_table() -> Table {
        Table::new(vec![
            Column::float("age", [Some(25.0), Some(30.0), Some(f64::NAN)]),
            Column::categorical("city", [Some("NYC"), Some("LA"), Some("NYC")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_shape() {
        let table = demo_table();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_names(), vec!["age", "city"]);
    }

    #[test]
    fn test_nan_is_missing() {
        let table = demo_table();
        let age = table.column("age").unwrap();
        assert_eq!(age.missing_count(), 1);
        assert_eq!(age.distinct_count(), 2);
    }

    #[test]
    fn test_distinct_excludes_missing() {
        let column = Column::categorical("c", [Some("a"), None, Some("a"), Some("b")]);
        assert_eq!(column.distinct_count(), 2);
    }

    #[test]
    fn test_signed_zero_counts_once() {
        let column = Column::float("z", [Some(0.0), Some(-0.0)]);
        assert_eq!(column.distinct_count(), 1);
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let result = Table::new(vec![
            Column::integer("a", [Some(1), Some(2)]),
            Column::integer("b", [Some(1)]),
        ]);
        assert!(matches!(result, Err(TableSummaryError::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Table::new(vec![
            Column::integer("a", [Some(1)]),
            Column::categorical("a", [Some("x")]),
        ]);
        assert!(matches!(result, Err(TableSummaryError::InvalidInput(_))));
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let column = Column::new(
            "n",
            ColumnType::Float,
            ColumnValues::Categorical(vec![Some("1".to_string())]),
        );
        assert!(matches!(
            Table::new(vec![column]),
            Err(TableSummaryError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_other_column_kind() {
        let table = Table::new(vec![Column::other(
            "visit",
            ColumnType::Date,
            [Some("2024-01-02"), None],
        )])
        .unwrap();

        let visit = table.column("visit").unwrap();
        assert_eq!(visit.kind(), ColumnKind::Other);
        assert!(visit.dtype().is_temporal());
        assert_eq!(table.columns_of_kind(ColumnKind::Numeric).count(), 0);

        let mislabeled = Column::other("n", ColumnType::Integer, [Some("1")]);
        assert!(Table::new(vec![mislabeled]).is_err());
    }

    #[test]
    fn test_raw_numeric_nan_is_missing() {
        let column = Column::new(
            "x",
            ColumnType::Float,
            ColumnValues::Numeric(vec![Some(1.0), Some(f64::NAN), Some(3.0)]),
        );
        assert_eq!(column.missing_count(), 1);
        assert_eq!(column.distinct_count(), 2);

        let table = Table::new(vec![column]).unwrap();
        let info = crate::summary::info_table(&table).unwrap();
        assert_eq!(info.rows[0].missing_pct, 33.333);

        let stats = crate::summary::describe_columns(&table);
        let x = stats.get("x").unwrap().as_numeric().unwrap();
        assert_eq!(x.count, 2);
        assert_eq!(x.mean, Some(2.0));
        assert_eq!(x.q3, Some(2.5));
    }

    #[test]
    fn test_large_integers_rejected() {
        let column = Column::integer(
            "id",
            [Some(9_007_199_254_740_992), Some(9_007_199_254_740_993)],
        );
        assert!(matches!(
            Table::new(vec![column]),
            Err(TableSummaryError::InvalidInput(_))
        ));

        let column = Column::integer(
            "id",
            [Some(9_007_199_254_740_991), Some(-9_007_199_254_740_991)],
        );
        let table = Table::new(vec![column]).unwrap();
        assert_eq!(table.columns()[0].distinct_count(), 2);
    }

    #[test]
    fn test_fractional_integer_rejected() {
        let column = Column::new(
            "n",
            ColumnType::Integer,
            ColumnValues::Numeric(vec![Some(1.0), Some(2.5)]),
        );
        assert!(matches!(
            Table::new(vec![column]),
            Err(TableSummaryError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_no_columns() {
        let table = Table::new(Vec::new()).unwrap();
        assert_eq!(table.shape(), (0, 0));
        assert!(table.is_empty());
    }
}
