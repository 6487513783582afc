//! Catalog file loading.
//!
//! [`load`] turns a spreadsheet (`.xlsx`, `.xls`) or delimited text file
//! (`.csv`) into a [`catalog_model::Dataset`]. Delimited files are decoded
//! by trying each [`TextEncoding`] against each [`Delimiter`] until one
//! combination parses into more than one column.

pub mod delimited;
pub mod error;
pub mod header;
pub mod loader;
pub mod spreadsheet;

pub use delimited::{CsvLoad, Delimiter, TextEncoding, parse_delimited, read_delimited};
pub use error::{IngestError, Result};
pub use header::{build_headers, is_anonymous, normalize_header, rename_anonymous};
pub use loader::{FileFormat, load};
pub use spreadsheet::read_spreadsheet;
