//! Product catalog validation.
//!
//! This crate checks a loaded catalog file against the fixed product schema:
//!
//! - **Schema check**: missing expected columns (errors) and unknown columns (warnings)
//! - **Presence**: every expected column populated in every row
//! - **Defaults**: suggested values for empty cells in columns that have one
//! - **Origin code**: `pOrigem CST` restricted to `0` or `2`
//! - **Classification code**: `pNCM` numeric-only, with a cleaned copy
//! - **Numeric format**: comma-or-period decimals in numeric columns
//!
//! Row-level rules only run when no expected column is missing.
//!
//! # Example
//!
//! ```ignore
//! use catalog_validate::{CatalogValidator, ValidatorOptions};
//!
//! let outcome = CatalogValidator::with_sink("uploads/produtos.xlsx", |line: &str| println!("{line}"))
//!     .with_options(ValidatorOptions::new().with_report_file(false))
//!     .run();
//!
//! println!("{} errors", outcome.report.error_count());
//! ```

pub mod checks;
pub mod error;
pub mod finding;
pub mod report;
pub mod schema_check;
pub mod transcript_file;
pub mod validator;

pub use checks::RuleOutcome;
pub use error::{ReportError, Result};
pub use finding::{Finding, NcmCase, NcmProblem, OriginCase, Severity, invalid_rows};
pub use report::{Summary, TIMESTAMP_FORMAT, ValidationReport};
pub use schema_check::SchemaCheck;
pub use validator::{CatalogValidator, ValidationOutcome, ValidatorOptions, execute};
