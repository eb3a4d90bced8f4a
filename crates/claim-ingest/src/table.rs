//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Raw claim table: one header row followed by data rows.
///
/// Every row has exactly `headers.len()` cells; short rows are padded with
/// empty strings and extra cells are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

impl CsvTable {
    /// Read a table from comma-separated text.
    ///
    /// The first non-blank row is the header. Rows whose cells are all blank
    /// are skipped.
    pub fn from_reader<R: Read>(reader: R) -> std::result::Result<Self, csv::Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(|value| value.trim().is_empty()) {
                continue;
            }
            let Some(headers) = headers.as_ref() else {
                headers = Some(record.iter().map(normalize_header).collect());
                continue;
            };
            let mut row = Vec::with_capacity(headers.len());
            for idx in 0..headers.len() {
                row.push(record.get(idx).map(normalize_cell).unwrap_or_default());
            }
            rows.push(row);
        }
        Ok(Self {
            headers: headers.unwrap_or_default(),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a claim CSV file from disk.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let table = CsvTable::from_reader(file).map_err(|source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.len(),
        "csv table read"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_header_whitespace() {
        assert_eq!(normalize_header("  Member   First\tName "), "Member First Name");
        assert_eq!(normalize_header("\u{feff}MemberID"), "MemberID");
    }

    #[test]
    fn pads_short_rows_and_skips_blank_rows() {
        let table = CsvTable::from_reader("A,B,C\n\n1,2\n,,\n4,5,6,7\n".as_bytes())
            .expect("read csv");
        assert_eq!(table.headers, vec!["A", "B", "C"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["1".to_string(), "2".to_string(), String::new()],
                vec!["4".to_string(), "5".to_string(), "6".to_string()],
            ]
        );
    }
}
