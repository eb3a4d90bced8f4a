use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::error::{MappingLoadError, Result};

/// Immutable lookup from an original name to its replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: HashMap<String, String>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

impl MappingTable {
    /// Build a table from rows of fields.
    ///
    /// When `has_header` is set the first row is discarded without being
    /// checked. Every other row must have exactly two fields
    /// `(original, replacement)`; on duplicate originals the last row wins.
    pub fn from_rows<I, R, S>(rows: I, has_header: bool) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();
        let mut duplicates = 0usize;
        let skip = usize::from(has_header);
        for (index, row) in rows.into_iter().enumerate().skip(skip) {
            let fields = row.as_ref();
            let [original, replacement] = fields else {
                return Err(MappingLoadError::FieldCount {
                    row: index + 1,
                    found: fields.len(),
                });
            };
            let original = normalize_cell(original.as_ref());
            let replacement = normalize_cell(replacement.as_ref());
            if entries.insert(original, replacement).is_some() {
                duplicates += 1;
            }
        }
        if duplicates > 0 {
            debug!(duplicates, "duplicate mapping keys replaced by later rows");
        }
        Ok(Self { entries })
    }

    /// Load a table from comma-separated text.
    pub fn from_reader<R: Read>(reader: R, has_header: bool) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Self::from_rows(rows, has_header)
    }

    /// Load a table from a mapping file on disk.
    pub fn load(path: &Path, has_header: bool) -> Result<Self> {
        let file = File::open(path).map_err(|source| MappingLoadError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file, has_header)?;
        info!(
            path = %path.display(),
            entries = table.len(),
            "mapping table loaded"
        );
        Ok(table)
    }

    /// Replacement for `name`, or `None` when it has no (non-empty) mapping.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name.trim())
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
