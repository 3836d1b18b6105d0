//! The table model and construction from string records.

mod records;
mod table;
mod types;

pub use records::{is_null_value, RecordsConfig};
pub use table::{Column, ColumnValues, Table};
pub use types::{ColumnKind, ColumnType};
