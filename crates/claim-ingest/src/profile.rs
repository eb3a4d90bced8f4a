//! Dataset profiling for the raw input table.
//!
//! Columns are loaded into a Polars `DataFrame` as nullable strings (blank
//! cells are null). A column whose non-null values all cast to `Float64` is
//! reported as numeric with summary statistics.
//!
//! Blank headers are named `Unnamed: <index>` and repeated headers get a
//! `.N` suffix, so any table the reader accepts can be profiled.

use std::collections::HashSet;

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::table::CsvTable;

/// Inferred column kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Text => "text",
        }
    }
}

/// Summary statistics for a numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    pub non_null: usize,
    pub null_count: usize,
    pub summary: Option<NumericSummary>,
}

/// Row count and per-column statistics of an input table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetProfile {
    pub row_count: usize,
    pub columns: Vec<ColumnProfile>,
}

impl DatasetProfile {
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|column| column.name == name)
    }
}

/// Unique, non-empty column names for `headers`, in order.
fn frame_column_names(headers: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let base = if header.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                header.clone()
            };
            let mut name = base.clone();
            let mut suffix = 1usize;
            while !seen.insert(name.clone()) {
                name = format!("{base}.{suffix}");
                suffix += 1;
            }
            name
        })
        .collect()
}

fn table_to_frame(table: &CsvTable) -> Result<DataFrame> {
    let columns: Vec<Column> = frame_column_names(&table.headers)
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<Option<&str>> = table
                .rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str).filter(|v| !v.is_empty()))
                .collect();
            Series::new(name.as_str().into(), values).into_column()
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}

fn profile_column(column: &Column) -> Result<ColumnProfile> {
    let null_count = column.null_count();
    let non_null = column.len() - null_count;
    let numeric = column.cast(&DataType::Float64)?;
    let is_numeric = non_null > 0 && numeric.null_count() == null_count;
    let summary = if is_numeric {
        let values = numeric.f64()?;
        Some(NumericSummary {
            count: non_null,
            mean: values.mean(),
            std: values.std(1),
            min: values.min(),
            max: values.max(),
        })
    } else {
        None
    };
    Ok(ColumnProfile {
        name: column.name().to_string(),
        kind: if is_numeric {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        },
        non_null,
        null_count,
        summary,
    })
}

/// Compute the profile of a raw table.
pub fn profile_table(table: &CsvTable) -> Result<DatasetProfile> {
    let frame = table_to_frame(table)?;
    let mut columns = Vec::with_capacity(frame.width());
    for column in frame.get_columns() {
        columns.push(profile_column(column)?);
    }
    debug!(
        rows = frame.height(),
        columns = columns.len(),
        "dataset profiled"
    );
    Ok(DatasetProfile {
        row_count: frame.height(),
        columns,
    })
}
