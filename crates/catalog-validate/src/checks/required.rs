//! Required-field presence rule.
//!
//! Every expected column must be populated in every row.

use catalog_model::{Dataset, EXPECTED_COLUMNS, Status, Transcript};

use super::empty_rows;
use crate::finding::Finding;

/// Check that expected columns have no empty cells.
pub fn check(dataset: &Dataset, transcript: &mut Transcript<'_>) -> Vec<Finding> {
    transcript.log(Status::Info, "Validando colunas obrigatórias...");
    let mut findings = Vec::new();

    for column in EXPECTED_COLUMNS {
        let Some(index) = dataset.resolve_column(column) else {
            continue;
        };
        let rows = empty_rows(dataset, index);
        if rows.is_empty() {
            transcript.success(format!("{column}: Todas as células preenchidas"));
            continue;
        }
        let finding = Finding::EmptyCells {
            column: (*column).to_string(),
            rows,
        };
        transcript.failure(finding.message());
        findings.push(finding);
    }

    findings
}
