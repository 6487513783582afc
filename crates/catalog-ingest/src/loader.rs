//! Format detection and the load entry point.

use std::path::Path;

use catalog_model::{Dataset, SENTINEL_COLUMN, Status, Transcript};

use crate::delimited::read_delimited;
use crate::error::{IngestError, Result};
use crate::header::rename_anonymous;
use crate::spreadsheet::read_spreadsheet;

/// Source format, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Xlsx,
    Xls,
    Csv,
}

impl FileFormat {
    /// Detects the format from the (case-insensitive) extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "xls" => Ok(Self::Xls),
            "csv" => Ok(Self::Csv),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: if extension.is_empty() {
                    String::new()
                } else {
                    format!(".{extension}")
                },
            }),
        }
    }

    pub fn is_spreadsheet(self) -> bool {
        matches!(self, Self::Xlsx | Self::Xls)
    }

    /// Engine label reported in the transcript for spreadsheets.
    pub fn engine(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
            Self::Csv => "csv",
        }
    }
}

/// Loads a catalog file into a [`Dataset`], narrating into `transcript`.
///
/// Anonymous header cells are renamed to [`SENTINEL_COLUMN`]. Failures are
/// logged to the transcript before being returned.
pub fn load(path: &Path, transcript: &mut Transcript<'_>) -> Result<Dataset> {
    transcript.log(
        Status::Load,
        format!("Tentando carregar arquivo {}...", path.display()),
    );
    match load_inner(path, transcript) {
        Ok(dataset) => Ok(dataset),
        Err(error) => {
            transcript.failure(failure_line(&error));
            Err(error)
        }
    }
}

fn load_inner(path: &Path, transcript: &mut Transcript<'_>) -> Result<Dataset> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = FileFormat::from_path(path)?;
    tracing::debug!(path = %path.display(), format = format.engine(), "detected format");

    let mut dataset = if format.is_spreadsheet() {
        let dataset = read_spreadsheet(path)?;
        transcript.success(format!(
            "Arquivo Excel carregado com sucesso usando engine {}",
            format.engine()
        ));
        dataset
    } else {
        let loaded = read_delimited(path)?;
        transcript.success(format!(
            "CSV carregado com sucesso - Separador: '{}', Encoding: {}",
            loaded.delimiter, loaded.encoding
        ));
        loaded.dataset
    };

    let renamed = rename_anonymous(&mut dataset);
    match renamed.as_slice() {
        [] => {}
        [single] => transcript.log(
            Status::Rename,
            format!("Coluna renomeada: '{single}' -> '{SENTINEL_COLUMN}'"),
        ),
        many => transcript.log(
            Status::Rename,
            format!(
                "{} colunas Unnamed renomeadas para {SENTINEL_COLUMN}",
                many.len()
            ),
        ),
    }

    transcript.log(
        Status::Report,
        format!("Total de linhas: {}", dataset.height()),
    );
    transcript.info(format!(
        "Colunas encontradas: {}",
        quoted_list(dataset.columns())
    ));
    Ok(dataset)
}

fn failure_line(error: &IngestError) -> String {
    match error {
        IngestError::FileNotFound { path } => format!("Arquivo não encontrado: {}", path.display()),
        IngestError::UnsupportedFormat { extension, .. } => {
            format!("Formato de arquivo não suportado: {extension}")
        }
        IngestError::Spreadsheet { source, .. } => format!("Falha ao ler arquivo Excel: {source}"),
        IngestError::CsvParse { .. } => {
            "Falha ao ler arquivo CSV - Tentou todos os encodings e separadores".to_string()
        }
        other => format!("Erro ao carregar arquivo: {other}"),
    }
}

/// Renders column names as `['a', 'b']`.
fn quoted_list(columns: &[String]) -> String {
    let items: Vec<String> = columns.iter().map(|name| format!("'{name}'")).collect();
    format!("[{}]", items.join(", "))
}
