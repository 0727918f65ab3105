//! Report model and its text rendering.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, warn};

use crate::table::Table;

use super::options::GlimpseOptions;
use super::sample::{preview_column, sample_rows};

/// Width of the rule under the "Column preview:" title.
pub const RULE_WIDTH: usize = 80;

/// Number of lines printed before the first column line.
pub const FRAMING_LINES: usize = 5;

/// Outcome of previewing one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum Preview {
    /// Comma-joined sample values.
    Values(String),
    /// Description of the failure that replaced the sample.
    Error(String),
}

impl Preview {
    /// Text placed after the type tag on the column line.
    pub fn text(&self) -> String {
        match self {
            Self::Values(s) => s.clone(),
            Self::Error(e) => format!("Error: {e}"),
        }
    }
}

/// One line of the per-column listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnPreview {
    /// Column label.
    pub name: String,
    /// The container's type tag for the column.
    pub type_tag: String,
    /// Sample values or failure.
    pub preview: Preview,
}

/// Everything a glimpse prints, before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlimpseReport {
    /// Row count of the table.
    pub rows: usize,
    /// Column count of the table.
    pub columns: usize,
    /// One entry per column, in table order.
    pub entries: Vec<ColumnPreview>,
}

/// Build the report model for `table`.
///
/// Never fails: a column whose sample cannot be fetched or formatted gets a
/// [`Preview::Error`] and the remaining columns are still previewed.
pub fn build_report<T: Table + ?Sized>(table: &T, options: &GlimpseOptions) -> GlimpseReport {
    let rows = table.row_count();
    let sample = sample_rows(rows, options);
    debug!(rows, random = options.random, sampled = ?sample, "selected preview rows");

    let entries = table
        .column_labels()
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let preview = match preview_column(table, idx, &sample, options.max_value_chars) {
                Ok(text) => Preview::Values(text),
                Err(e) => {
                    warn!(column = %name, error = %e, "column preview failed");
                    Preview::Error(e.to_string())
                }
            };
            ColumnPreview {
                type_tag: table.type_tag(idx),
                name,
                preview,
            }
        })
        .collect();

    GlimpseReport {
        rows,
        columns: table.column_count(),
        entries,
    }
}

/// Write the text form of `report`.
///
/// ```text
/// Rows: 3
/// Columns: 2
///
/// Column preview:
/// --------------------------------------------------------------------------------
/// id                        <int64> 1, 2, 3
/// name                      <str> Ada, None, Grace
/// ```
pub fn render_report<W: Write + ?Sized>(
    report: &GlimpseReport,
    options: &GlimpseOptions,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "Rows: {}", report.rows)?;
    writeln!(out, "Columns: {}", report.columns)?;
    writeln!(out)?;
    writeln!(out, "Column preview:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for entry in &report.entries {
        writeln!(
            out,
            "{:<width$} <{}> {}",
            entry.name,
            entry.type_tag,
            entry.preview.text(),
            width = options.name_width
        )?;
    }
    Ok(())
}
