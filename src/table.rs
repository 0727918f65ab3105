//! The table seam shared by the normalizer and the glimpse reporter.
//!
//! Both components only need a handful of read operations (shape, labels, per-column type tag,
//! per-cell display text) plus, for the normalizer, a way to replace every column label at once.
//! This module implements them for the crate's own [`DataSet`] and for a Polars [`DataFrame`].

use std::collections::HashSet;
use std::fmt::Write as _;

use polars::prelude::{AnyValue, DataFrame};

use crate::error::{TableError, TableResult};
use crate::types::DataSet;

/// Read-only view of an in-memory table.
pub trait Table {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Column labels in table order.
    fn column_labels(&self) -> Vec<String>;

    /// The container's own type tag for `column` (never re-derived from values).
    fn type_tag(&self, column: usize) -> String;

    /// Display text of one cell; `Ok(None)` for a missing value.
    fn cell_text(&self, row: usize, column: usize) -> TableResult<Option<String>>;
}

/// Tables whose column labels can be replaced wholesale.
pub trait RenameColumns: Table {
    /// Replace every column label, in order. Data and column order are untouched.
    ///
    /// On error no label has been changed.
    fn rename_columns(&mut self, labels: Vec<String>) -> TableResult<()>;
}

impl Table for DataSet {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.schema.fields.len()
    }

    fn column_labels(&self) -> Vec<String> {
        self.schema.field_names().map(str::to_owned).collect()
    }

    fn type_tag(&self, column: usize) -> String {
        self.schema
            .fields
            .get(column)
            .map(|f| f.data_type.type_tag().to_owned())
            .unwrap_or_default()
    }

    fn cell_text(&self, row: usize, column: usize) -> TableResult<Option<String>> {
        let value = self.cell(row, column).ok_or_else(|| TableError::MissingCell {
            row,
            column: column_name(self, column),
        })?;
        if value.is_missing() {
            return Ok(None);
        }
        let mut out = String::new();
        write!(out, "{value}").map_err(|e| TableError::Format {
            column: column_name(self, column),
            message: e.to_string(),
        })?;
        Ok(Some(out))
    }
}

fn column_name(ds: &DataSet, column: usize) -> String {
    ds.schema
        .fields
        .get(column)
        .map(|f| f.name.clone())
        .unwrap_or_else(|| format!("#{column}"))
}

impl RenameColumns for DataSet {
    /// Duplicate labels are accepted.
    fn rename_columns(&mut self, labels: Vec<String>) -> TableResult<()> {
        check_label_count(self.schema.fields.len(), labels.len())?;
        for (field, label) in self.schema.fields.iter_mut().zip(labels) {
            field.name = label;
        }
        Ok(())
    }
}

impl Table for DataFrame {
    fn row_count(&self) -> usize {
        self.height()
    }

    fn column_count(&self) -> usize {
        self.width()
    }

    fn column_labels(&self) -> Vec<String> {
        self.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn type_tag(&self, column: usize) -> String {
        self.select_at_idx(column)
            .map(|c| c.dtype().to_string())
            .unwrap_or_default()
    }

    fn cell_text(&self, row: usize, column: usize) -> TableResult<Option<String>> {
        let col = self
            .select_at_idx(column)
            .ok_or_else(|| TableError::MissingCell {
                row,
                column: format!("#{column}"),
            })?;
        let value = col.get(row)?;
        let text = match value {
            AnyValue::Null => return Ok(None),
            AnyValue::Float64(v) if v.is_nan() => return Ok(None),
            AnyValue::Float32(v) if v.is_nan() => return Ok(None),
            AnyValue::String(s) => s.to_owned(),
            AnyValue::StringOwned(s) => s.to_string(),
            other => {
                let mut out = String::new();
                write!(out, "{other}").map_err(|e| TableError::Format {
                    column: col.name().to_string(),
                    message: e.to_string(),
                })?;
                out
            }
        };
        Ok(Some(text))
    }
}

impl RenameColumns for DataFrame {
    /// Polars frames cannot hold duplicate labels; the first duplicate is reported as
    /// [`TableError::DuplicateColumn`].
    fn rename_columns(&mut self, labels: Vec<String>) -> TableResult<()> {
        check_label_count(self.width(), labels.len())?;
        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(TableError::DuplicateColumn {
                    label: label.clone(),
                });
            }
        }
        self.set_column_names(&labels)?;
        Ok(())
    }
}

fn check_label_count(expected: usize, actual: usize) -> TableResult<()> {
    if expected != actual {
        return Err(TableError::LabelCountMismatch { expected, actual });
    }
    Ok(())
}
