//! Summarizer struct bundling every summary of a table.

use serde::Serialize;

use crate::branding::BrandingPalette;
use crate::error::Result;
use crate::input::Table;
use crate::summary::{overview_writeup, AttributeSummary, ColumnStats, InfoTable};

/// Configuration for summarizing tables.
#[derive(Debug, Clone, Default)]
pub struct SummaryConfig {
    /// Palette handed to report renderers along with the summary.
    pub palette: BrandingPalette,
}

/// Every summary of one table, ready for a report.
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    /// Name the report was built under.
    pub report_name: String,
    /// One-paragraph overview text.
    pub overview: String,
    /// Shape and column-kind breakdown.
    pub attributes: AttributeSummary,
    /// Per-column type, cardinality and missingness.
    pub info: InfoTable,
    /// Per-column descriptive statistics.
    pub statistics: ColumnStats,
    /// Colors to render the report with.
    pub palette: BrandingPalette,
}

impl TableSummary {
    /// Serialize the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Computes table summaries with a fixed configuration.
///
/// # Example
///
/// ```
/// use tablesum::{Column, Summarizer, Table};
///
/// let table = Table::new(vec![
///     Column::float("age", [Some(25.0), Some(30.0), None]),
///     Column::categorical("city", [Some("NYC"), Some("LA"), Some("NYC")]),
/// ]).unwrap();
///
/// let summary = Summarizer::new().summarize("Demo", &table).unwrap();
/// assert_eq!(summary.info.rows[0].column, "age");
/// assert_eq!(summary.statistics.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummaryConfig,
}

impl Summarizer {
    /// Create a summarizer with default configuration.
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    /// Create a summarizer with custom configuration.
    pub fn with_config(config: SummaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Compute all summaries of `table`.
    ///
    /// Fails as a whole if any summary fails, e.g. with
    /// [`EmptyInput`](crate::TableSummaryError::EmptyInput) for a table with
    /// no rows.
    pub fn summarize(&self, report_name: &str, table: &Table) -> Result<TableSummary> {
        let attributes = AttributeSummary::from_table(table);
        let overview = overview_writeup(report_name, &attributes)?;
        let info = InfoTable::from_table(table)?;
        let statistics = ColumnStats::from_table(table);

        log::debug!("summarized table for report '{}'", report_name);

        Ok(TableSummary {
            report_name: report_name.to_string(),
            overview,
            attributes,
            info,
            statistics,
            palette: self.config.palette,
        })
    }
}
