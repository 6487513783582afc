//! Structural check of the file's columns against the expected schema.

use catalog_model::{CanonicalSet, Dataset, Status, Transcript};

use crate::finding::Finding;

/// Outcome of the structural check.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaCheck {
    pub findings: Vec<Finding>,
    /// True when no expected column is missing. Extra columns do not count.
    pub structure_ok: bool,
}

/// Compare dataset columns with `expected` by canonical key.
///
/// Every missing expected column yields an error, every unknown dataset
/// column a warning.
pub fn check(dataset: &Dataset, expected: &[&str], transcript: &mut Transcript<'_>) -> SchemaCheck {
    transcript.log(Status::Inspect, "Verificando estrutura das colunas...");

    let present: CanonicalSet = dataset.columns().iter().collect();
    let known: CanonicalSet = expected.iter().collect();

    let mut findings = Vec::new();
    let mut missing = 0usize;
    for column in expected {
        if present.contains(column) {
            continue;
        }
        let finding = Finding::MissingColumn {
            column: (*column).to_string(),
        };
        transcript.failure(finding.message());
        findings.push(finding);
        missing += 1;
    }

    let mut extra = 0usize;
    for column in dataset.columns() {
        if known.contains(column) {
            continue;
        }
        let finding = Finding::ExtraColumn {
            column: column.clone(),
        };
        transcript.warning(finding.message());
        findings.push(finding);
        extra += 1;
    }

    if missing == 0 && extra == 0 {
        transcript.success("Estrutura de colunas está correta");
    }
    tracing::debug!(missing, extra, "schema check finished");

    SchemaCheck {
        findings,
        structure_ok: missing == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::CellValue;

    fn dataset(columns: &[&str]) -> Dataset {
        Dataset::new(
            columns.iter().map(|c| c.to_string()).collect(),
            vec![vec![CellValue::Empty; columns.len()]],
        )
    }

    #[test]
    fn matching_ignores_case_accents_and_punctuation() {
        let data = dataset(&["PPRECOVENDA", "pm2_pallet", "pOrigem-CST"]);
        let mut transcript = Transcript::new();
        let result = check(&data, &["pPreçoVenda", "pM²/Pallet", "pOrigem CST"], &mut transcript);
        assert!(result.structure_ok);
        assert!(result.findings.is_empty());
        assert_eq!(
            transcript.lines().last().map(String::as_str),
            Some("✅ Estrutura de colunas está correta")
        );
    }

    #[test]
    fn missing_columns_fail_extra_columns_warn() {
        let data = dataset(&["pCodigo", "pObservacao"]);
        let mut transcript = Transcript::new();
        let result = check(&data, &["pCodigo", "pNCM"], &mut transcript);
        assert!(!result.structure_ok);
        assert_eq!(
            result.findings,
            vec![
                Finding::MissingColumn {
                    column: "pNCM".into()
                },
                Finding::ExtraColumn {
                    column: "pObservacao".into()
                },
            ]
        );
    }

    #[test]
    fn extra_columns_alone_keep_structure_ok() {
        let data = dataset(&["pCodigo", "pCodigo.1"]);
        let mut transcript = Transcript::new();
        let result = check(&data, &["pCodigo"], &mut transcript);
        assert!(result.structure_ok);
        assert_eq!(result.findings.len(), 1);
        assert!(!result.findings[0].is_error());
    }
}
