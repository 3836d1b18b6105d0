//! Per-column descriptive statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::{Column, ColumnValues, Table};

// =============================================================================
// STREAMING STATISTICS
// =============================================================================
// Welford's online algorithm for computing mean and variance in a single pass.

/// Running count, mean, variance and extremes of a numeric column.
#[derive(Debug, Clone)]
struct StreamingStats {
    count: usize,
    mean: f64,
    m2: f64, // Sum of squared differences from mean
    min: f64,
    max: f64,
}

impl StreamingStats {
    fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a value using Welford's online algorithm.
    fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Sample standard deviation (n - 1 denominator).
    fn std(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some((self.m2 / (self.count - 1) as f64).sqrt()).filter(|s| !s.is_nan())
        }
    }
}

/// Quantile of sorted values, interpolating linearly between closest ranks.
fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let position = p * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let fraction = position - lower as f64;

    // Interpolating between infinities of opposite sign is undefined
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction).filter(|q| !q.is_nan())
}

// =============================================================================
// DESCRIPTIONS
// =============================================================================

/// Descriptive statistics of a numeric column.
///
/// Values that are undefined for the number of observations are `None`:
/// everything but `count` for an all-missing column, and `std` for a
/// column with a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericDescription {
    /// Number of non-missing values.
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    /// First quartile (25th percentile).
    #[serde(rename = "25%")]
    pub q1: Option<f64>,
    #[serde(rename = "50%")]
    pub median: Option<f64>,
    /// Third quartile (75th percentile).
    #[serde(rename = "75%")]
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

impl NumericDescription {
    /// Describe a sequence of optional numbers. Missing values are skipped.
    pub fn from_values(values: &[Option<f64>]) -> Self {
        let mut stats = StreamingStats::new();
        let mut sorted: Vec<f64> = values.iter().flatten().copied().collect();
        for &value in &sorted {
            stats.add(value);
        }
        sorted.sort_by(f64::total_cmp);

        let present = stats.count > 0;
        Self {
            count: stats.count,
            mean: present.then_some(stats.mean).filter(|m| !m.is_nan()),
            std: stats.std(),
            min: present.then_some(stats.min),
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: present.then_some(stats.max),
        }
    }

    /// Calculate the interquartile range.
    pub fn iqr(&self) -> Option<f64> {
        Some(self.q3? - self.q1?)
    }
}

/// Descriptive statistics of a categorical (or other label) column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalDescription {
    /// Number of non-missing values.
    pub count: usize,
    /// Number of distinct non-missing values.
    pub unique: usize,
    /// Most frequent value; the first one encountered wins ties.
    pub top: Option<String>,
    /// Frequency of `top`.
    pub freq: usize,
}

impl CategoricalDescription {
    /// Describe a sequence of optional labels. Missing values are skipped.
    pub fn from_values(values: &[Option<String>]) -> Self {
        let mut value_counts: IndexMap<&str, usize> = IndexMap::new();
        for v in values.iter().flatten() {
            *value_counts.entry(v.as_str()).or_insert(0) += 1;
        }

        let mut top: Option<(&str, usize)> = None;
        for (&value, &count) in &value_counts {
            if top.is_none_or(|(_, best)| count > best) {
                top = Some((value, count));
            }
        }

        Self {
            count: value_counts.values().sum(),
            unique: value_counts.len(),
            top: top.map(|(value, _)| value.to_string()),
            freq: top.map_or(0, |(_, count)| count),
        }
    }
}

/// Statistics for one column, by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnDescription {
    Numeric(NumericDescription),
    Categorical(CategoricalDescription),
}

impl ColumnDescription {
    /// Describe a single column according to its kind.
    ///
    /// Columns of other kinds (booleans, dates) are described as labels.
    pub fn from_column(column: &Column) -> Self {
        match column.values() {
            ColumnValues::Numeric(values) => {
                ColumnDescription::Numeric(NumericDescription::from_values(values))
            }
            ColumnValues::Categorical(values) | ColumnValues::Other(values) => {
                ColumnDescription::Categorical(CategoricalDescription::from_values(values))
            }
        }
    }

    /// Number of non-missing values.
    pub fn count(&self) -> usize {
        match self {
            ColumnDescription::Numeric(d) => d.count,
            ColumnDescription::Categorical(d) => d.count,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericDescription> {
        match self {
            ColumnDescription::Numeric(d) => Some(d),
            ColumnDescription::Categorical(_) => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalDescription> {
        match self {
            ColumnDescription::Categorical(d) => Some(d),
            ColumnDescription::Numeric(_) => None,
        }
    }
}

/// Descriptions of every column, keyed by name in table order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnStats {
    columns: IndexMap<String, ColumnDescription>,
}

impl ColumnStats {
    /// Describe each column of `table` independently.
    pub fn from_table(table: &Table) -> Self {
        let columns = table
            .columns()
            .iter()
            .map(|column| {
                (
                    column.name().to_string(),
                    ColumnDescription::from_column(column),
                )
            })
            .collect();

        log::debug!("described {} columns", table.column_count());

        Self { columns }
    }

    /// Get the description of a column.
    pub fn get(&self, column: &str) -> Option<&ColumnDescription> {
        self.columns.get(column)
    }

    /// Iterate over `(name, description)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnDescription)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Column names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
