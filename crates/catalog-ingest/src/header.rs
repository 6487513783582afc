//! Header cleanup shared by the CSV and spreadsheet readers.

use std::collections::HashMap;

use catalog_model::{Dataset, SENTINEL_COLUMN};

/// Marker found in generated names of header cells left blank.
const ANONYMOUS_MARKER: &str = "Unnamed";

/// Normalizes a raw header value: trims whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_start_matches('\u{feff}').trim().to_string()
}

/// Builds final header names from raw header cells.
///
/// Blank cells are named `Unnamed: <position>`; repeated names get a
/// `.1`, `.2`, ... suffix so that every column stays distinguishable.
pub fn build_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashMap<String, usize> = HashMap::new();
    raw.into_iter()
        .enumerate()
        .map(|(idx, value)| {
            let name = normalize_header(value.as_ref());
            let name = if name.is_empty() {
                format!("{ANONYMOUS_MARKER}: {idx}")
            } else {
                name
            };
            let count = seen.entry(name.clone()).or_insert(0);
            let unique = if *count == 0 {
                name
            } else {
                format!("{name}.{count}")
            };
            *count += 1;
            unique
        })
        .collect()
}

/// Check if a header name is an anonymous placeholder.
pub fn is_anonymous(name: &str) -> bool {
    name.contains(ANONYMOUS_MARKER)
}

/// Renames every anonymous column to the sentinel name.
///
/// Returns the original names of the renamed columns, in column order.
pub fn rename_anonymous(dataset: &mut Dataset) -> Vec<String> {
    let anonymous: Vec<(usize, String)> = dataset
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, name)| is_anonymous(name))
        .map(|(idx, name)| (idx, name.clone()))
        .collect();
    for (idx, _) in &anonymous {
        dataset.rename_column(*idx, SENTINEL_COLUMN);
    }
    anonymous.into_iter().map(|(_, name)| name).collect()
}
