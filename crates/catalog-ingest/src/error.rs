//! Error types for catalog file loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a load attempt.
///
/// Messages are user-facing: they end up verbatim in validation reports.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Path does not resolve to an existing file.
    #[error("arquivo não encontrado: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file bytes.
    #[error("falha ao ler arquivo {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// Extension is neither a spreadsheet nor delimited text.
    #[error("formato de arquivo não suportado: {extension}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// File has no content at all.
    #[error("arquivo vazio: {path}")]
    EmptyFile { path: PathBuf },

    // === Parsing Errors ===
    /// The spreadsheet reader rejected the file.
    #[error("falha ao ler planilha {path}: {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Spreadsheet opened but has no worksheet.
    #[error("planilha sem abas: {path}")]
    NoWorksheet { path: PathBuf },

    /// Every encoding × delimiter combination failed.
    #[error("falha ao ler CSV {path} com todos os encodings e separadores: {message}")]
    CsvParse { path: PathBuf, message: String },
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/uploads/produtos.csv"),
        };
        assert_eq!(err.to_string(), "arquivo não encontrado: /uploads/produtos.csv");

        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("produtos.txt"),
            extension: ".txt".to_string(),
        };
        assert_eq!(err.to_string(), "formato de arquivo não suportado: .txt");
    }
}
