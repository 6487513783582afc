//! Numeric-format rule for the fixed list of numeric columns.
//!
//! Empty cells are left to the presence rule. Offending cells are not
//! listed individually in the transcript.

use catalog_model::{Dataset, NUMERIC_COLUMNS, Status, Transcript, is_decimal};

use crate::finding::Finding;

/// Check that numeric columns hold comma-or-period decimals.
pub fn check(dataset: &Dataset, transcript: &mut Transcript<'_>) -> Vec<Finding> {
    transcript.log(Status::Inspect, "Validando campos numéricos...");
    let mut findings = Vec::new();

    for column in NUMERIC_COLUMNS {
        let Some(index) = dataset.resolve_column(column) else {
            continue;
        };
        let rows: Vec<usize> = dataset
            .column_cells(index)
            .filter(|(_, cell)| !cell.is_empty() && !is_decimal(&cell.render()))
            .map(|(row, _)| row)
            .collect();
        if rows.is_empty() {
            continue;
        }
        tracing::debug!(column = %column, invalid = rows.len(), "non-numeric values");
        let finding = Finding::NonNumeric {
            column: (*column).to_string(),
            rows,
        };
        transcript.failure(finding.message());
        findings.push(finding);
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::CellValue;

    #[test]
    fn comma_decimals_pass_text_fails_empty_skipped() {
        let dataset = Dataset::new(
            vec!["pPercIPI".into(), "pCusto".into()],
            vec![
                vec![CellValue::text("1,5"), CellValue::text("abc")],
                vec![CellValue::text("abc"), CellValue::text("abc")],
                vec![CellValue::Empty, CellValue::text("x")],
                vec![CellValue::Float(2.5), CellValue::Empty],
            ],
        );
        let mut transcript = Transcript::new();
        let findings = check(&dataset, &mut transcript);

        // pCusto is not a numeric column.
        assert_eq!(
            findings,
            vec![Finding::NonNumeric {
                column: "pPercIPI".into(),
                rows: vec![1],
            }]
        );
        insta::assert_snapshot!(findings[0].message(), @"pPercIPI: 1 valores não numéricos");
        assert_eq!(
            transcript.lines(),
            &[
                "🔍 Validando campos numéricos...",
                "❌ pPercIPI: 1 valores não numéricos",
            ]
        );
    }
}
