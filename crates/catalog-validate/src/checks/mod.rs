//! Row-level field rules.
//!
//! Each rule is column-scoped and skips silently when its column is absent;
//! the schema check has already reported that.

pub mod defaults;
pub mod ncm;
pub mod numeric;
pub mod origin;
pub mod required;

use catalog_model::{Corrections, Dataset, Transcript};

use crate::finding::Finding;

/// Findings and cleaned cells produced by the field rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutcome {
    pub findings: Vec<Finding>,
    pub corrections: Corrections,
}

/// Run every field rule in order: presence, defaults, origin code,
/// classification code, numeric format.
pub fn run_all(dataset: &Dataset, transcript: &mut Transcript<'_>) -> RuleOutcome {
    let mut findings = Vec::new();
    findings.extend(required::check(dataset, transcript));
    findings.extend(defaults::check(dataset, transcript));
    findings.extend(origin::check(dataset, transcript));

    let ncm = ncm::check(dataset, transcript);
    findings.extend(ncm.findings);

    findings.extend(numeric::check(dataset, transcript));

    RuleOutcome {
        findings,
        corrections: ncm.corrections,
    }
}

/// Row indices of empty cells in a column.
pub(crate) fn empty_rows(dataset: &Dataset, column: usize) -> Vec<usize> {
    dataset
        .column_cells(column)
        .filter(|(_, cell)| cell.is_empty())
        .map(|(row, _)| row)
        .collect()
}
