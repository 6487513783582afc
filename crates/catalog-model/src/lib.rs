//! Product catalog data model.
//!
//! This crate provides the types shared by the loader and the validator:
//!
//! - [`dataset`]: the in-memory table ([`Dataset`], [`CellValue`]) and the
//!   [`Corrections`] overlay used for cleaned copies
//! - [`schema`]: the fixed expected schema, numeric columns and default values
//! - [`normalize`]: canonical keys for accent/punctuation-insensitive column matching
//! - [`numeric`]: comma-or-period decimal parsing
//! - [`transcript`]: the per-run log transcript and its [`LogSink`]

pub mod dataset;
pub mod normalize;
pub mod numeric;
pub mod schema;
pub mod transcript;

pub use dataset::{CellValue, Corrections, Dataset, line_number};
pub use normalize::{CanonicalSet, canonical_key};
pub use numeric::{as_integral, format_number, is_decimal, parse_decimal};
pub use schema::{
    DEFAULT_VALUES, DefaultValue, EXPECTED_COLUMNS, NCM_COLUMN, NUMERIC_COLUMNS, ORIGIN_CODES,
    ORIGIN_COLUMN, SENTINEL_COLUMN, default_for, is_numeric_column,
};
pub use transcript::{LogSink, Status, Transcript};
