//! Plain-text report file written at the end of a run.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::error::{ReportError, Result};
use crate::report::ValidationReport;

const TITLE: &str = "RELATÓRIO DE VALIDAÇÃO - PLANILHA DE PRODUTOS";
const RULE_WIDTH: usize = 60;
/// Attempts at a unique name before giving up.
const MAX_ATTEMPTS: usize = 3;

/// File name for a report produced at `now`.
pub fn report_file_name(now: &DateTime<Local>) -> String {
    format!("relatorio_produtos_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// Render the report file contents.
///
/// `source` is shown as given by the caller, not reduced to its file name.
/// Every line, including the last, ends with a newline.
pub fn render(source: &Path, report: &ValidationReport, now: &DateTime<Local>) -> String {
    let summary = &report.summary;
    let mut lines = vec![
        TITLE.to_string(),
        "=".repeat(RULE_WIDTH),
        String::new(),
        format!("Arquivo: {}", source.display()),
        format!("Data da validação: {}", now.format("%d/%m/%Y %H:%M:%S")),
        format!("Total de linhas: {}", summary.total_rows),
        format!("Linhas válidas: {}", summary.valid_rows),
        format!("Linhas inválidas: {}", summary.invalid_rows),
        format!("Percentual válido: {}%", summary.valid_percent),
        format!("Total de erros: {}", report.error_count()),
        format!("Total de avisos: {}", report.warning_count()),
        String::new(),
    ];
    push_section(&mut lines, "ERROS CRÍTICOS ENCONTRADOS:", &report.errors);
    push_section(&mut lines, "AVISOS E SUGESTÕES:", &report.warnings);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_section(lines: &mut Vec<String>, heading: &str, messages: &[String]) {
    if messages.is_empty() {
        return;
    }
    lines.push(heading.to_string());
    lines.extend(messages.iter().cloned());
}

/// Write `contents` to a new report file in `dir`.
///
/// An existing file is never overwritten: when the timestamped name is
/// taken, a random 8-hex-digit suffix is appended.
pub fn write_report_file(dir: &Path, contents: &str, now: &DateTime<Local>) -> Result<PathBuf> {
    let base = report_file_name(now);
    let mut path = dir.join(&base);
    let mut attempt = 1;
    let mut file = loop {
        match create_new(&path) {
            Ok(file) => break file,
            Err(source) if source.kind() == ErrorKind::AlreadyExists && attempt < MAX_ATTEMPTS => {
                tracing::debug!(path = %path.display(), "report file exists, retrying");
                path = dir.join(suffixed(&base));
                attempt += 1;
            }
            Err(source) => return Err(ReportError::Create { path, source }),
        }
    };

    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

fn create_new(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

fn suffixed(base: &str) -> String {
    let stem = base.trim_end_matches(".txt");
    let id = Uuid::new_v4().simple().to_string();
    format!("{stem}_{}.txt", &id[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Finding;
    use crate::report::Summary;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).single().unwrap()
    }

    #[test]
    fn file_name_uses_compact_timestamp() {
        assert_eq!(report_file_name(&fixed_time()), "relatorio_produtos_20240305_140709.txt");
    }

    #[test]
    fn renders_fixed_layout() {
        let findings = vec![
            Finding::EmptyCells {
                column: "pCodigo".into(),
                rows: vec![0],
            },
            Finding::ExtraColumn {
                column: "pObs".into(),
            },
        ];
        let path = Path::new("uploads/produtos.csv");
        let summary = Summary::from_findings(path, 2, &findings, &fixed_time());
        let report = ValidationReport::new(summary, &findings);
        insta::assert_snapshot!(render(path, &report, &fixed_time()), @r"
        RELATÓRIO DE VALIDAÇÃO - PLANILHA DE PRODUTOS
        ============================================================

        Arquivo: uploads/produtos.csv
        Data da validação: 05/03/2024 14:07:09
        Total de linhas: 2
        Linhas válidas: 1
        Linhas inválidas: 1
        Percentual válido: 50%
        Total de erros: 1
        Total de avisos: 1

        ERROS CRÍTICOS ENCONTRADOS:
        pCodigo: 1 células vazias (linhas: [2])
        AVISOS E SUGESTÕES:
        Coluna extra 'pObs' encontrada (será ignorada)
        ");
    }

    #[test]
    fn clean_report_has_no_sections() {
        let path = Path::new("produtos.xlsx");
        let summary = Summary::from_findings(path, 3, &[], &fixed_time());
        let report = ValidationReport::new(summary, &[]);
        let text = render(path, &report, &fixed_time());

        assert!(text.ends_with("Total de avisos: 0\n\n"));
        assert!(!text.contains("ERROS CRÍTICOS"));
        assert!(!text.contains("AVISOS E SUGESTÕES"));
        assert_eq!(text.lines().count(), 12);
    }

    #[test]
    fn collisions_get_a_random_suffix() {
        let dir = TempDir::new().unwrap();
        let first = write_report_file(dir.path(), "a", &fixed_time()).unwrap();
        let second = write_report_file(dir.path(), "b", &fixed_time()).unwrap();

        assert_ne!(first, second);
        assert_eq!(std::fs::read_to_string(&first).unwrap(), "a");
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "b");
        let name = second.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("relatorio_produtos_20240305_140709_"));
        assert_eq!(name.len(), "relatorio_produtos_20240305_140709_".len() + 8 + 4);
    }

    #[test]
    fn missing_directory_is_a_create_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let error = write_report_file(&missing, "a", &fixed_time()).unwrap_err();
        assert!(matches!(error, ReportError::Create { .. }));
    }
}
