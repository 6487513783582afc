//! Origin / tax-situation code rule.
//!
//! Cells are compared as trimmed strings against the accepted codes; an
//! empty cell is itself a violation here.

use catalog_model::{Dataset, ORIGIN_CODES, ORIGIN_COLUMN, Status, Transcript};

use crate::finding::{Finding, OriginCase};

/// Check the origin-code column.
pub fn check(dataset: &Dataset, transcript: &mut Transcript<'_>) -> Vec<Finding> {
    let Some(index) = dataset.resolve_column(ORIGIN_COLUMN) else {
        return Vec::new();
    };
    transcript.log(Status::Inspect, format!("Validando {ORIGIN_COLUMN}..."));

    let cases: Vec<OriginCase> = dataset
        .column_cells(index)
        .filter_map(|(row, cell)| {
            if cell.is_empty() {
                return Some(OriginCase { row, value: None });
            }
            let raw = cell.render();
            if ORIGIN_CODES.iter().any(|code| *code == raw.trim()) {
                None
            } else {
                Some(OriginCase {
                    row,
                    value: Some(raw),
                })
            }
        })
        .collect();

    if cases.is_empty() {
        transcript.success(format!(
            "{ORIGIN_COLUMN}: Todos os valores estão corretos ({})",
            ORIGIN_CODES.join(" ou ")
        ));
        return Vec::new();
    }

    let finding = Finding::InvalidOrigin {
        column: ORIGIN_COLUMN.to_string(),
        cases,
    };
    transcript.failure(finding.message());
    for line in finding.details() {
        transcript.detail(line);
    }
    vec![finding]
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::CellValue;

    fn origin_dataset(values: Vec<CellValue>) -> Dataset {
        Dataset::new(
            vec!["pOrigem CST".into()],
            values.into_iter().map(|v| vec![v]).collect(),
        )
    }

    #[test]
    fn accepts_trimmed_codes_and_numeric_cells() {
        let dataset = origin_dataset(vec![
            CellValue::text("0"),
            CellValue::text(" 2 "),
            CellValue::text(" 0 "),
            CellValue::Float(2.0),
            CellValue::Integer(0),
        ]);
        let mut transcript = Transcript::new();
        assert!(check(&dataset, &mut transcript).is_empty());
        assert_eq!(
            transcript.lines().last().map(String::as_str),
            Some("✅ pOrigem CST: Todos os valores estão corretos (0 ou 2)")
        );
    }

    #[test]
    fn rejects_other_codes_and_empty_cells() {
        let dataset = origin_dataset(vec![
            CellValue::text("1"),
            CellValue::text("0"),
            CellValue::Empty,
        ]);
        let mut transcript = Transcript::new();
        let findings = check(&dataset, &mut transcript);
        assert_eq!(
            findings,
            vec![Finding::InvalidOrigin {
                column: "pOrigem CST".into(),
                cases: vec![
                    OriginCase {
                        row: 0,
                        value: Some("1".into()),
                    },
                    OriginCase { row: 2, value: None },
                ],
            }]
        );
        assert_eq!(
            &transcript.lines()[1..],
            &[
                "❌ pOrigem CST com valores incorretos: 2 casos",
                "   • Linha 2: '1' (deve ser 0 ou 2)",
                "   • Linha 4: valor vazio",
            ]
        );
    }

    #[test]
    fn header_variants_resolve() {
        let dataset = Dataset::new(vec!["PORIGEM_CST".into()], vec![vec![CellValue::text("3")]]);
        let mut transcript = Transcript::new();
        assert_eq!(check(&dataset, &mut transcript).len(), 1);
    }
}
