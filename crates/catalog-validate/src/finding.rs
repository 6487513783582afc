//! Validation finding types.
//!
//! Each variant carries only the data its rule collected. The report's
//! error and warning strings are rendered from these, and row counts are
//! derived from [`Finding::rows`], never from the rendered text.

use std::collections::BTreeSet;

use catalog_model::{DefaultValue, NCM_COLUMN, ORIGIN_CODES, line_number};
use serde::{Deserialize, Serialize};

/// Lines listed inline in an empty-cells message.
const MAX_LISTED_LINES: usize = 10;

/// Offending cells logged individually under a failure.
pub const MAX_DETAIL_LINES: usize = 5;

/// Finding severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Makes the file unfit for import
    Error,
    /// Advisory only
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Erro",
            Self::Warning => "Aviso",
        }
    }
}

/// Offending cell of the origin-code column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginCase {
    pub row: usize,
    /// Raw value; `None` for an empty cell.
    pub value: Option<String>,
}

/// Why a classification-code cell was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NcmProblem {
    /// Contains alphabetic characters.
    ContainsText,
    /// Neither text nor a parseable number.
    BadFormat,
}

/// Offending cell of the classification-code column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NcmCase {
    pub row: usize,
    pub value: String,
    pub problem: NcmProblem,
}

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    // Load
    /// The file could not be loaded at all.
    LoadFailed { message: String },

    // Structure
    /// Expected column absent from the file.
    MissingColumn { column: String },
    /// File column not part of the expected schema.
    ExtraColumn { column: String },

    // Row checks
    /// Required column with empty cells.
    EmptyCells { column: String, rows: Vec<usize> },
    /// Empty cells in a column that has a known default.
    DefaultSuggestion {
        column: String,
        default: DefaultValue,
        rows: Vec<usize>,
    },
    /// Origin codes outside the accepted set, empty cells included.
    InvalidOrigin {
        column: String,
        cases: Vec<OriginCase>,
    },
    /// Non-empty cells that do not parse as decimals.
    NonNumeric { column: String, rows: Vec<usize> },
    /// Classification codes containing text or badly formatted.
    InvalidNcm { column: String, cases: Vec<NcmCase> },
    /// Classification codes rewritten in the cleaned copy.
    NcmCleaned { column: String, rows: Vec<usize> },
    /// The classification-code column is absent.
    NcmColumnMissing,
}

impl Finding {
    /// Column this finding refers to, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            Finding::LoadFailed { .. } => None,
            Finding::NcmColumnMissing => Some(NCM_COLUMN),
            Finding::MissingColumn { column }
            | Finding::ExtraColumn { column }
            | Finding::EmptyCells { column, .. }
            | Finding::DefaultSuggestion { column, .. }
            | Finding::InvalidOrigin { column, .. }
            | Finding::NonNumeric { column, .. }
            | Finding::InvalidNcm { column, .. }
            | Finding::NcmCleaned { column, .. } => Some(column),
        }
    }

    /// Severity for this finding type.
    pub fn severity(&self) -> Severity {
        match self {
            Finding::ExtraColumn { .. }
            | Finding::DefaultSuggestion { .. }
            | Finding::NcmCleaned { .. }
            | Finding::NcmColumnMissing => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    /// 0-based indices of the data rows this finding covers.
    pub fn rows(&self) -> Vec<usize> {
        match self {
            Finding::EmptyCells { rows, .. }
            | Finding::DefaultSuggestion { rows, .. }
            | Finding::NonNumeric { rows, .. }
            | Finding::NcmCleaned { rows, .. } => rows.clone(),
            Finding::InvalidOrigin { cases, .. } => cases.iter().map(|case| case.row).collect(),
            Finding::InvalidNcm { cases, .. } => cases.iter().map(|case| case.row).collect(),
            _ => Vec::new(),
        }
    }

    /// Number of offending cells (if applicable).
    pub fn count(&self) -> Option<usize> {
        match self {
            Finding::LoadFailed { .. }
            | Finding::MissingColumn { .. }
            | Finding::ExtraColumn { .. }
            | Finding::NcmColumnMissing => None,
            Finding::EmptyCells { rows, .. }
            | Finding::DefaultSuggestion { rows, .. }
            | Finding::NonNumeric { rows, .. }
            | Finding::NcmCleaned { rows, .. } => Some(rows.len()),
            Finding::InvalidOrigin { cases, .. } => Some(cases.len()),
            Finding::InvalidNcm { cases, .. } => Some(cases.len()),
        }
    }

    /// Format message with finding-specific data.
    pub fn message(&self) -> String {
        match self {
            Finding::LoadFailed { message } => format!("Falha ao carregar arquivo: {message}"),

            Finding::MissingColumn { column } => {
                format!("Coluna obrigatória '{column}' não encontrada no arquivo")
            }

            Finding::ExtraColumn { column } => {
                format!("Coluna extra '{column}' encontrada (será ignorada)")
            }

            Finding::EmptyCells { column, rows } => {
                let lines: Vec<String> = rows
                    .iter()
                    .take(MAX_LISTED_LINES)
                    .map(|row| line_number(*row).to_string())
                    .collect();
                let more = if rows.len() > MAX_LISTED_LINES { "..." } else { "" };
                format!(
                    "{column}: {} células vazias (linhas: [{}]{more})",
                    rows.len(),
                    lines.join(", ")
                )
            }

            Finding::DefaultSuggestion {
                column,
                default,
                rows,
            } => format!(
                "{column}: {} células vazias podem usar valor padrão '{default}'",
                rows.len()
            ),

            Finding::InvalidOrigin { column, cases } => {
                format!("{column} com valores incorretos: {} casos", cases.len())
            }

            Finding::NonNumeric { column, rows } => {
                format!("{column}: {} valores não numéricos", rows.len())
            }

            Finding::InvalidNcm { column, cases } => format!(
                "{column}: {} valores com texto/formato inválido encontrados",
                cases.len()
            ),

            Finding::NcmCleaned { column, rows } => {
                format!("{column}: {} valores foram limpos/corrigidos", rows.len())
            }

            Finding::NcmColumnMissing => format!("Coluna {NCM_COLUMN} não encontrada"),
        }
    }

    /// Per-cell lines logged under the finding: the first
    /// [`MAX_DETAIL_LINES`] cases and a tail counting the rest.
    ///
    /// Only the origin and classification-code rules list cells.
    pub fn details(&self) -> Vec<String> {
        match self {
            Finding::InvalidOrigin { cases, .. } => {
                let codes = ORIGIN_CODES.join(" ou ");
                let mut lines: Vec<String> = cases
                    .iter()
                    .take(MAX_DETAIL_LINES)
                    .map(|case| match &case.value {
                        None => format!("Linha {}: valor vazio", line_number(case.row)),
                        Some(value) => format!(
                            "Linha {}: '{value}' (deve ser {codes})",
                            line_number(case.row)
                        ),
                    })
                    .collect();
                if cases.len() > MAX_DETAIL_LINES {
                    lines.push(format!("... e mais {} casos", cases.len() - MAX_DETAIL_LINES));
                }
                lines
            }
            Finding::InvalidNcm { cases, .. } => {
                let mut lines: Vec<String> = cases
                    .iter()
                    .take(MAX_DETAIL_LINES)
                    .map(|case| {
                        let reason = match case.problem {
                            NcmProblem::ContainsText => "contém texto - deve ser apenas numérico",
                            NcmProblem::BadFormat => "formato inválido",
                        };
                        format!("Linha {}: '{}' ({reason})", line_number(case.row), case.value)
                    })
                    .collect();
                if cases.len() > MAX_DETAIL_LINES {
                    lines.push(format!("... e mais {} erros", cases.len() - MAX_DETAIL_LINES));
                }
                lines
            }
            _ => Vec::new(),
        }
    }
}

/// Distinct row indices covered by error findings.
pub fn invalid_rows<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> BTreeSet<usize> {
    findings
        .into_iter()
        .filter(|finding| finding.is_error())
        .flat_map(Finding::rows)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(row: usize, value: Option<&str>) -> OriginCase {
        OriginCase {
            row,
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn empty_cells_list_line_numbers() {
        let finding = Finding::EmptyCells {
            column: "pCodigo".into(),
            rows: vec![3, 7],
        };
        insta::assert_snapshot!(finding.message(), @"pCodigo: 2 células vazias (linhas: [5, 9])");
    }

    #[test]
    fn empty_cells_truncate_after_ten_lines() {
        let finding = Finding::EmptyCells {
            column: "pUN".into(),
            rows: (0..12).collect(),
        };
        insta::assert_snapshot!(
            finding.message(),
            @"pUN: 12 células vazias (linhas: [2, 3, 4, 5, 6, 7, 8, 9, 10, 11]...)"
        );
    }

    #[test]
    fn origin_details_cap_at_five() {
        let mut cases = vec![origin(0, None), origin(1, Some("1"))];
        cases.extend((2..7).map(|row| origin(row, Some("9"))));
        let finding = Finding::InvalidOrigin {
            column: "pOrigem CST".into(),
            cases,
        };
        assert_eq!(finding.message(), "pOrigem CST com valores incorretos: 7 casos");
        assert_eq!(
            finding.details(),
            vec![
                "Linha 2: valor vazio",
                "Linha 3: '1' (deve ser 0 ou 2)",
                "Linha 4: '9' (deve ser 0 ou 2)",
                "Linha 5: '9' (deve ser 0 ou 2)",
                "Linha 6: '9' (deve ser 0 ou 2)",
                "... e mais 2 casos",
            ]
        );
    }

    #[test]
    fn ncm_details_name_the_problem() {
        let finding = Finding::InvalidNcm {
            column: "pNCM".into(),
            cases: vec![
                NcmCase {
                    row: 0,
                    value: "BATATAS".into(),
                    problem: NcmProblem::ContainsText,
                },
                NcmCase {
                    row: 4,
                    value: "12-34".into(),
                    problem: NcmProblem::BadFormat,
                },
            ],
        };
        insta::assert_snapshot!(
            finding.message(),
            @"pNCM: 2 valores com texto/formato inválido encontrados"
        );
        assert_eq!(
            finding.details(),
            vec![
                "Linha 2: 'BATATAS' (contém texto - deve ser apenas numérico)",
                "Linha 6: '12-34' (formato inválido)",
            ]
        );
    }

    #[test]
    fn severities() {
        assert_eq!(
            Finding::MissingColumn { column: "pNCM".into() }.severity(),
            Severity::Error
        );
        assert_eq!(Finding::NcmColumnMissing.severity(), Severity::Warning);
        assert_eq!(
            Finding::DefaultSuggestion {
                column: "pUN".into(),
                default: DefaultValue::Text("UN"),
                rows: vec![1],
            }
            .message(),
            "pUN: 1 células vazias podem usar valor padrão 'UN'"
        );
    }

    #[test]
    fn invalid_rows_are_distinct_and_error_only() {
        let findings = vec![
            Finding::EmptyCells {
                column: "pCodigo".into(),
                rows: vec![1, 2],
            },
            Finding::NonNumeric {
                column: "pFrete".into(),
                rows: vec![2, 3],
            },
            Finding::DefaultSuggestion {
                column: "pUN".into(),
                default: DefaultValue::Text("UN"),
                rows: vec![7],
            },
        ];
        let rows: Vec<usize> = invalid_rows(&findings).into_iter().collect();
        assert_eq!(rows, vec![1, 2, 3]);
    }
}
