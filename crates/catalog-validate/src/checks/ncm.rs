//! Classification-code (`pNCM`) rule.
//!
//! Codes must be numeric. Cells containing text, or that do not parse,
//! are errors and are blanked in the cleaned copy. Integral values written
//! with a decimal part (`1234,0`) are normalised to integers.

use catalog_model::{
    CellValue, Corrections, Dataset, NCM_COLUMN, Status, Transcript, as_integral, parse_decimal,
};

use crate::finding::{Finding, NcmCase, NcmProblem};

/// Findings plus the corrected cells of the classification-code column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NcmCheck {
    pub findings: Vec<Finding>,
    pub corrections: Corrections,
}

/// What to do with one cell.
#[derive(Debug, Clone, PartialEq)]
enum Verdict {
    Keep,
    Normalize(i64),
    Reject(NcmProblem),
}

fn classify(raw: &str) -> Verdict {
    let digits_only = raw.replace(['.', ','], "");
    let is_digits = !digits_only.is_empty() && digits_only.chars().all(|ch| ch.is_ascii_digit());
    if !is_digits && raw.chars().any(char::is_alphabetic) {
        return Verdict::Reject(NcmProblem::ContainsText);
    }
    let Some(value) = parse_decimal(raw) else {
        return Verdict::Reject(NcmProblem::BadFormat);
    };
    match as_integral(value) {
        Some(int) if int.to_string() != raw => Verdict::Normalize(int),
        _ => Verdict::Keep,
    }
}

/// Check the classification-code column and collect its corrections.
pub fn check(dataset: &Dataset, transcript: &mut Transcript<'_>) -> NcmCheck {
    let Some(index) = dataset.resolve_column(NCM_COLUMN) else {
        let finding = Finding::NcmColumnMissing;
        transcript.warning(finding.message());
        return NcmCheck {
            findings: vec![finding],
            corrections: Corrections::new(),
        };
    };
    transcript.log(Status::Inspect, format!("Validando coluna {NCM_COLUMN}..."));

    let mut cases = Vec::new();
    let mut corrections = Corrections::new();
    for (row, cell) in dataset.column_cells(index) {
        if cell.is_empty() {
            continue;
        }
        let rendered = cell.render();
        let raw = rendered.trim();
        match classify(raw) {
            Verdict::Keep => {}
            Verdict::Normalize(int) => corrections.insert(row, index, CellValue::Integer(int)),
            Verdict::Reject(problem) => {
                cases.push(NcmCase {
                    row,
                    value: raw.to_string(),
                    problem,
                });
                corrections.insert(row, index, CellValue::Empty);
            }
        }
    }

    let mut findings = Vec::new();
    let invalid = cases.len();
    if !cases.is_empty() {
        let finding = Finding::InvalidNcm {
            column: NCM_COLUMN.to_string(),
            cases,
        };
        transcript.failure(finding.message());
        for line in finding.details() {
            transcript.detail(line);
        }
        findings.push(finding);
    }

    if !corrections.is_empty() {
        let rows = corrections.iter().map(|(&(row, _), _)| row).collect();
        let finding = Finding::NcmCleaned {
            column: NCM_COLUMN.to_string(),
            rows,
        };
        transcript.log(
            Status::Fix,
            format!(
                "{} valores na coluna {NCM_COLUMN} foram corrigidos",
                corrections.len()
            ),
        );
        findings.push(finding);
    }

    if invalid == 0 {
        transcript.success(format!(
            "Coluna {NCM_COLUMN} validada - todos os valores são numéricos"
        ));
    }

    NcmCheck {
        findings,
        corrections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ncm_dataset(values: &[&str]) -> Dataset {
        Dataset::new(
            vec!["pNCM".into()],
            values.iter().map(|v| vec![CellValue::text(*v)]).collect(),
        )
    }

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify("BATATAS"), Verdict::Reject(NcmProblem::ContainsText));
        assert_eq!(classify("12AB34"), Verdict::Reject(NcmProblem::ContainsText));
        assert_eq!(classify("1234,0"), Verdict::Normalize(1234));
        assert_eq!(classify("1234.00"), Verdict::Normalize(1234));
        assert_eq!(classify("1234.5"), Verdict::Keep);
        assert_eq!(classify("12345678"), Verdict::Keep);
        assert_eq!(classify("12-34"), Verdict::Reject(NcmProblem::BadFormat));
        assert_eq!(classify("1.234.567"), Verdict::Reject(NcmProblem::BadFormat));
    }

    #[test]
    fn text_cells_are_rejected_and_blanked() {
        let dataset = ncm_dataset(&["BATATAS", "1234,0", "1234.5", "", "39269090"]);
        let mut transcript = Transcript::new();
        let result = check(&dataset, &mut transcript);

        assert_eq!(result.corrections.len(), 2);
        assert_eq!(result.corrections.get(0, 0), Some(&CellValue::Empty));
        assert_eq!(result.corrections.get(1, 0), Some(&CellValue::Integer(1234)));
        assert_eq!(result.corrections.get(2, 0), None);

        let messages: Vec<String> = result.findings.iter().map(Finding::message).collect();
        assert_eq!(
            messages,
            vec![
                "pNCM: 1 valores com texto/formato inválido encontrados",
                "pNCM: 2 valores foram limpos/corrigidos",
            ]
        );
        assert_eq!(result.findings[0].rows(), vec![0]);
        assert!(!result.findings[1].is_error());

        // The loaded dataset is never touched.
        assert_eq!(dataset.cell(0, 0), &CellValue::text("BATATAS"));
    }

    #[test]
    fn clean_column_logs_success() {
        let dataset = ncm_dataset(&["39269090", "69089000"]);
        let mut transcript = Transcript::new();
        let result = check(&dataset, &mut transcript);
        assert!(result.findings.is_empty());
        assert!(result.corrections.is_empty());
        assert_eq!(
            transcript.lines(),
            &[
                "🔍 Validando coluna pNCM...",
                "✅ Coluna pNCM validada - todos os valores são numéricos",
            ]
        );
    }

    #[test]
    fn spreadsheet_floats_render_as_codes() {
        let dataset = Dataset::new(vec!["pNCM".into()], vec![vec![CellValue::Float(39269090.0)]]);
        let mut transcript = Transcript::new();
        let result = check(&dataset, &mut transcript);
        assert!(result.findings.is_empty());
    }

    #[test]
    fn missing_column_is_a_warning() {
        let dataset = Dataset::new(vec!["pCodigo".into()], Vec::new());
        let mut transcript = Transcript::new();
        let result = check(&dataset, &mut transcript);
        assert_eq!(result.findings, vec![Finding::NcmColumnMissing]);
        assert_eq!(transcript.lines(), &["⚠️ Coluna pNCM não encontrada"]);
    }
}
