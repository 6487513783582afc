//! Delimited-text reading with encoding and delimiter recovery.

use std::fmt;
use std::fs;
use std::path::Path;

use catalog_model::{CellValue, Dataset};
use csv::{ReaderBuilder, StringRecord};

use super::encoding::TextEncoding;
use crate::error::{IngestError, Result};
use crate::header::build_headers;

/// Candidate field delimiter, tried in [`Delimiter::CANDIDATES`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Semicolon,
    Comma,
    Tab,
}

impl Delimiter {
    pub const CANDIDATES: [Self; 3] = [Self::Semicolon, Self::Comma, Self::Tab];

    pub fn as_byte(self) -> u8 {
        match self {
            Self::Semicolon => b';',
            Self::Comma => b',',
            Self::Tab => b'\t',
        }
    }

    /// Printable form used in log lines (`'\t'` for tab).
    pub fn display(self) -> &'static str {
        match self {
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Tab => "\\t",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// A successfully parsed delimited file and the combination that parsed it.
#[derive(Debug, Clone)]
pub struct CsvLoad {
    pub dataset: Dataset,
    pub encoding: TextEncoding,
    pub delimiter: Delimiter,
}

/// Parses decoded text with a single delimiter.
///
/// Fails when there is no header, or when a record has more fields than
/// the header. Shorter records are padded with empty cells. Lines holding
/// nothing but whitespace are skipped; a record made only of delimiters
/// is a row of empty cells.
pub fn parse_delimited(text: &str, delimiter: Delimiter) -> std::result::Result<Dataset, String> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader
        .records()
        .filter(|record| !matches!(record, Ok(record) if is_blank_line(record)));
    let header = match records.next() {
        Some(Ok(record)) => record,
        Some(Err(error)) => return Err(error.to_string()),
        None => return Err("nenhum cabeçalho encontrado".to_string()),
    };
    let columns = build_headers(header.iter());
    let width = columns.len();

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|error| error.to_string())?;
        if record.len() > width {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(format!(
                "esperados {width} campos na linha {line}, encontrados {}",
                record.len()
            ));
        }
        rows.push(record.iter().map(CellValue::text).collect());
    }

    Ok(Dataset::new(columns, rows))
}

/// A line without any delimiter and nothing but whitespace.
fn is_blank_line(record: &StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(|field| field.trim().is_empty())
}

/// Reads a delimited file, trying every encoding × delimiter combination.
///
/// Encodings are the outer loop and delimiters the inner one. The first
/// combination that parses without error wins, whatever its column count.
pub fn read_delimited(path: &Path) -> Result<CsvLoad> {
    let bytes = fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let mut last_error = String::new();

    for encoding in TextEncoding::CANDIDATES {
        let Some(text) = encoding.decode(&bytes) else {
            tracing::debug!(encoding = %encoding, "decode failed");
            last_error = format!("conteúdo inválido para {encoding}");
            continue;
        };
        for delimiter in Delimiter::CANDIDATES {
            match parse_delimited(&text, delimiter) {
                Ok(dataset) => {
                    tracing::debug!(
                        encoding = %encoding,
                        delimiter = %delimiter,
                        columns = dataset.width(),
                        "parse succeeded"
                    );
                    return Ok(CsvLoad {
                        dataset,
                        encoding,
                        delimiter,
                    });
                }
                Err(message) => {
                    tracing::debug!(encoding = %encoding, delimiter = %delimiter, %message, "parse failed");
                    last_error = message;
                }
            }
        }
    }

    Err(IngestError::CsvParse {
        path: path.to_path_buf(),
        message: last_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_semicolon_text() {
        let dataset = parse_delimited("a;b\n1;2\n3;4\n", Delimiter::Semicolon).unwrap();
        assert_eq!(dataset.columns(), &["a", "b"]);
        assert_eq!(dataset.height(), 2);
        assert_eq!(dataset.cell(1, 1), &CellValue::text("4"));
    }

    #[test]
    fn short_records_are_padded() {
        let dataset = parse_delimited("a,b,c\n1\n", Delimiter::Comma).unwrap();
        assert_eq!(dataset.rows()[0].len(), 3);
        assert!(dataset.cell(0, 2).is_empty());
    }

    #[test]
    fn long_records_fail() {
        let result = parse_delimited("a,b\n1,2,3\n", Delimiter::Comma);
        assert!(result.is_err());
    }

    #[test]
    fn delimiter_only_records_are_empty_rows() {
        let dataset = parse_delimited("a;b\n;\n1;2\n", Delimiter::Semicolon).unwrap();
        assert_eq!(dataset.height(), 2);
        assert!(dataset.rows()[0].iter().all(CellValue::is_empty));
        assert_eq!(dataset.cell(1, 0), &CellValue::text("1"));
    }

    #[test]
    fn empty_and_whitespace_lines_are_skipped() {
        let dataset = parse_delimited("\na;b\n\n   \n1;2\n", Delimiter::Semicolon).unwrap();
        assert_eq!(dataset.columns(), &["a", "b"]);
        assert_eq!(dataset.height(), 1);
    }

    #[test]
    fn other_delimiters_parse_as_one_column() {
        let dataset = parse_delimited("a,b\n1,2\n", Delimiter::Semicolon).unwrap();
        assert_eq!(dataset.columns(), &["a,b"]);
        assert_eq!(dataset.cell(0, 0), &CellValue::text("1,2"));
    }

    #[test]
    fn empty_text_has_no_header() {
        assert!(parse_delimited("", Delimiter::Comma).is_err());
    }

    #[test]
    fn quoted_fields_keep_delimiters() {
        let dataset = parse_delimited("a;b\n\"x;y\";2\n", Delimiter::Semicolon).unwrap();
        assert_eq!(dataset.cell(0, 0), &CellValue::text("x;y"));
    }
}
