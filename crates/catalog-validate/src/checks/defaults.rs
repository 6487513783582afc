//! Default-value suggestions for empty cells. Advisory only.

use catalog_model::{DEFAULT_VALUES, Dataset, Status, Transcript};

use super::empty_rows;
use crate::finding::Finding;

/// Suggest defaults for columns with a known default and empty cells.
pub fn check(dataset: &Dataset, transcript: &mut Transcript<'_>) -> Vec<Finding> {
    transcript.log(
        Status::Fix,
        "Verificando campos que podem usar valores padrão...",
    );
    let mut findings = Vec::new();

    for (column, default) in DEFAULT_VALUES {
        let Some(index) = dataset.resolve_column(column) else {
            continue;
        };
        let rows = empty_rows(dataset, index);
        if rows.is_empty() {
            continue;
        }
        let finding = Finding::DefaultSuggestion {
            column: (*column).to_string(),
            default: *default,
            rows,
        };
        transcript.log(Status::Hint, finding.message());
        findings.push(finding);
    }

    if findings.is_empty() {
        transcript.success("Todos os campos com valores padrão estão preenchidos");
    }
    findings
}
