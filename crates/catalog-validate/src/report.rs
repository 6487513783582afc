//! Validation report and row-count aggregation.

use std::path::Path;

use catalog_model::{EXPECTED_COLUMNS, Status, Transcript};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::finding::{Finding, Severity, invalid_rows};

/// Timestamp format of [`Summary::timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const BANNER_WIDTH: usize = 80;

/// Row totals of one validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub file_name: String,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    /// Percentage of valid rows, rounded to 2 decimals; 0 for an empty file.
    pub valid_percent: f64,
    pub timestamp: String,
}

impl Summary {
    /// Build the summary from structured findings.
    ///
    /// A row is invalid when any error finding covers it.
    pub fn from_findings(
        path: &Path,
        total_rows: usize,
        findings: &[Finding],
        now: &DateTime<Local>,
    ) -> Self {
        let invalid_rows = invalid_rows(findings).len().min(total_rows);
        let valid_rows = total_rows - invalid_rows;
        Self {
            file_name: file_name(path),
            total_rows,
            valid_rows,
            invalid_rows,
            valid_percent: percent(valid_rows, total_rows),
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Report returned by every validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub summary: Summary,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub logs: Vec<String>,
}

impl ValidationReport {
    /// Render findings into the error and warning sequences, keeping order.
    pub fn new(summary: Summary, findings: &[Finding]) -> Self {
        let messages = |severity: Severity| -> Vec<String> {
            findings
                .iter()
                .filter(|finding| finding.severity() == severity)
                .map(Finding::message)
                .collect()
        };
        Self {
            summary,
            errors: messages(Severity::Error),
            warnings: messages(Severity::Warning),
            logs: Vec::new(),
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Append the closing summary block to the transcript.
pub fn log_final_report(report: &ValidationReport, transcript: &mut Transcript<'_>) {
    let banner = "=".repeat(BANNER_WIDTH);
    transcript.plain(&banner);
    transcript.log(Status::Report, "RELATÓRIO FINAL DE VALIDAÇÃO - PRODUTOS");
    transcript.plain(&banner);

    let summary = &report.summary;
    transcript.log(Status::File, format!("Arquivo: {}", summary.file_name));
    transcript.log(
        Status::Report,
        format!("Total de linhas: {}", summary.total_rows),
    );
    transcript.info(format!("Colunas esperadas: {}", EXPECTED_COLUMNS.len()));
    transcript.failure(format!("Total de erros: {}", report.error_count()));
    transcript.warning(format!("Total de avisos: {}", report.warning_count()));

    if report.is_valid() {
        transcript.plain("🎉 ARQUIVO VÁLIDO");
    } else {
        transcript.failure("ARQUIVO COM PROBLEMAS");
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let value = part as f64 / total as f64 * 100.0;
    (value * 100.0).round() / 100.0
}
