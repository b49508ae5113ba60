//! Reads sample sheets from disk into the shared model.

pub mod error;
pub mod patterns;
pub mod reader;

pub use error::{IngestError, Result};
pub use patterns::{parse_name_patterns, read_name_patterns};
pub use reader::{COLUMN_HEADER_PREFIX, parse_sample_sheet, read_sample_sheet};
