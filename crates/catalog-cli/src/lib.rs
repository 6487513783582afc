//! CLI library components for the catalog checker.

pub mod logging;
