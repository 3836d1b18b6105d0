//! Summaries computed from a single table.
//!
//! Each summary is computed independently from the table; none depends on
//! another's result except the overview, which formats an
//! [`AttributeSummary`].

mod attributes;
mod describe;
mod info;

pub use attributes::{overview_writeup, AttributeSummary};
pub use describe::{CategoricalDescription, ColumnDescription, ColumnStats, NumericDescription};
pub use info::{InfoRow, InfoTable};

use crate::error::Result;
use crate::input::Table;

/// Extract shape, column names and column-kind breakdown.
pub fn table_attributes(table: &Table) -> AttributeSummary {
    AttributeSummary::from_table(table)
}

/// Build the per-column info table, most-missing column first.
pub fn info_table(table: &Table) -> Result<InfoTable> {
    InfoTable::from_table(table)
}

/// Describe every column, keyed by name in table order.
pub fn describe_columns(table: &Table) -> ColumnStats {
    ColumnStats::from_table(table)
}
