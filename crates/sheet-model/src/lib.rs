//! Data model shared by the sample sheet reader, validator and CLI.

pub mod columns;
pub mod error;
pub mod report;
pub mod sheet;
pub mod table;

pub use columns::{ColumnMap, ColumnRole, normalize_column_name};
pub use error::{ModelError, Result};
pub use report::{ErrorCategory, ErrorReport};
pub use sheet::{HeaderLines, SampleSheet};
pub use table::{CellValue, MISSING_DISPLAY, Row, SampleTable};
