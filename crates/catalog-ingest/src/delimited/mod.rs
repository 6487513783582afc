//! Delimited text files.

mod encoding;
mod reader;

pub use encoding::TextEncoding;
pub use reader::{CsvLoad, Delimiter, parse_delimited, read_delimited};
