//! tablesum: descriptive statistics for tabular datasets, shaped for reports.
//!
//! Given one in-memory [`Table`], tablesum computes:
//!
//! - **Attributes**: shape, column names, categorical and numeric subsets
//! - **Overview**: a one-paragraph writeup of those attributes
//! - **Info table**: declared type, distinct count and missing percentage per column
//! - **Column statistics**: count/mean/std/quartiles for numbers, count/unique/top/freq for labels
//!
//! plus helpers for the report's `assets` output directory and the branding
//! palette reports are themed with.
//!
//! # Example
//!
//! ```
//! use tablesum::{info_table, overview_writeup, table_attributes, Column, Table};
//!
//! let table = Table::new(vec![
//!     Column::float("age", [Some(25.0), Some(30.0), None]),
//!     Column::categorical("city", [Some("NYC"), Some("LA"), Some("NYC")]),
//! ]).unwrap();
//!
//! let attributes = table_attributes(&table);
//! println!("{}", overview_writeup("Demo", &attributes).unwrap());
//!
//! let info = info_table(&table).unwrap();
//! assert_eq!(info.rows[0].column, "age");
//! assert_eq!(info.rows[0].missing_pct, 33.333);
//! ```

pub mod assets;
pub mod branding;
pub mod error;
pub mod input;
pub mod summary;

mod summarizer;

pub use crate::summarizer::{Summarizer, SummaryConfig, TableSummary};
pub use assets::{remove_dir, remove_dir_in, reset_assets_dir, reset_assets_dir_in, ASSETS_DIR};
pub use branding::BrandingPalette;
pub use error::{Result, TableSummaryError};
pub use input::{Column, ColumnKind, ColumnType, ColumnValues, RecordsConfig, Table};
pub use summary::{
    describe_columns, info_table, overview_writeup, table_attributes, AttributeSummary,
    CategoricalDescription, ColumnDescription, ColumnStats, InfoRow, InfoTable,
    NumericDescription,
};
