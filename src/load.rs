//! Loading files into a Polars [`DataFrame`] for the command-line front end.
//!
//! The normalizer and the reporter never read files themselves; this module is the collaborator
//! that turns a path into a table. Column types are whatever the Polars readers infer.
//!
//! - If [`LoadOptions::format`] is `None`, the format is inferred from the file extension.

use std::fs::File;
use std::path::Path;

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use tracing::debug;

use crate::error::{TableError, TableResult};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// A JSON array of objects.
    Json,
    /// Newline-delimited JSON objects.
    NdJson,
    /// Apache Parquet.
    Parquet,
}

impl TableFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "ndjson" | "jsonl" => Some(Self::NdJson),
            "parquet" | "pq" => Some(Self::Parquet),
            _ => None,
        }
    }
}

/// Options controlling [`load_frame`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// If `None`, infer the format from the file extension.
    pub format: Option<TableFormat>,
    /// Rows scanned by the CSV reader to infer column types.
    pub infer_schema_length: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            infer_schema_length: Some(10_000),
        }
    }
}

/// Read `path` into a [`DataFrame`].
pub fn load_frame(path: impl AsRef<Path>, options: &LoadOptions) -> TableResult<DataFrame> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };
    debug!(path = %path.display(), ?format, "loading table");

    let df = match format {
        TableFormat::Csv => CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(options.infer_schema_length)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?,
        TableFormat::Json => JsonReader::new(File::open(path)?)
            .with_json_format(JsonFormat::Json)
            .finish()?,
        TableFormat::NdJson => JsonReader::new(File::open(path)?)
            .with_json_format(JsonFormat::JsonLines)
            .finish()?,
        TableFormat::Parquet => ParquetReader::new(File::open(path)?).finish()?,
    };

    debug!(rows = df.height(), columns = df.width(), "table loaded");
    Ok(df)
}

fn infer_format_from_path(path: &Path) -> TableResult<TableFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| TableError::UnsupportedFormat {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    TableFormat::from_extension(ext).ok_or_else(|| TableError::UnsupportedFormat {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}
