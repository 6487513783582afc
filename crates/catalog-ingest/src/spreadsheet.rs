//! Spreadsheet reading (`.xlsx`, `.xls`) via calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use catalog_model::{CellValue, Dataset};

use crate::error::{IngestError, Result};
use crate::header::build_headers;

/// Reads the first worksheet of a workbook.
///
/// The first row is the header. Empty rows between data rows are kept
/// so that line numbers match the sheet; trailing empty rows are dropped.
pub fn read_spreadsheet(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Err(IngestError::NoWorksheet {
            path: path.to_path_buf(),
        });
    };
    tracing::debug!(sheet = %sheet_name, "reading worksheet");

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| IngestError::Spreadsheet {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    let columns = build_headers(header.iter().map(header_text));

    let mut rows: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    // Formatted but empty cells can stretch the used range past the data.
    while rows.last().is_some_and(|row| row.iter().all(CellValue::is_empty)) {
        rows.pop();
    }

    Ok(Dataset::new(columns, rows))
}

fn header_text(data: &Data) -> String {
    match data {
        Data::Empty | Data::Error(_) => String::new(),
        other => cell_value(other).render(),
    }
}

/// Maps a calamine cell to a [`CellValue`].
pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Int(value) => CellValue::Integer(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::String(text) => CellValue::text(text.as_str()),
        Data::Bool(true) => CellValue::text("True"),
        Data::Bool(false) => CellValue::text("False"),
        other => CellValue::text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_cell_types() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_value(&Data::Int(7)), CellValue::Integer(7));
        assert_eq!(cell_value(&Data::Float(2.5)), CellValue::Float(2.5));
        assert_eq!(cell_value(&Data::String(String::new())), CellValue::Empty);
        assert_eq!(cell_value(&Data::Bool(true)), CellValue::text("True"));
    }

    #[test]
    fn integral_float_headers_render_without_fraction() {
        assert_eq!(header_text(&Data::Float(2024.0)), "2024");
        assert_eq!(header_text(&Data::Empty), "");
    }
}
