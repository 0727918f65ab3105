//! Glimpse-style table previews.
//!
//! A glimpse prints the table shape followed by one line per column: the label (right-padded),
//! the container's own type tag, and a comma-joined sample of values. Missing values print as
//! `None`; values longer than [`GlimpseOptions::max_value_chars`] characters are cut and end in
//! `...`.
//!
//! Reporting is best-effort per column: if sampling one column fails, that column's preview
//! becomes `Error: <description>` and the rest of the report is still produced.
//!
//! ## Example
//!
//! ```rust
//! use data_glimpse::glimpse::{glimpse_to, GlimpseOptions};
//! use data_glimpse::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let ds = DataSet::new(
//!     Schema::new(vec![
//!         Field::new("id", DataType::Int64),
//!         Field::new("score", DataType::Float64),
//!     ]),
//!     vec![
//!         vec![Value::Int64(1), Value::Float64(10.0)],
//!         vec![Value::Int64(2), Value::Null],
//!     ],
//! );
//!
//! let mut out = Vec::new();
//! glimpse_to(&ds, &GlimpseOptions::default(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("Rows: 2\nColumns: 2\n"));
//! assert!(text.contains("<float64> 10.0, None"));
//! ```

pub mod options;
pub mod report;
pub mod sample;

use std::io::Write;

use tracing::error;

use crate::table::Table;

pub use options::GlimpseOptions;
pub use report::{build_report, render_report, ColumnPreview, GlimpseReport, Preview};
pub use sample::{sample_rows, truncate_value};

/// Build and render a glimpse of `table` into `out`.
///
/// Only write failures on `out` are returned; per-column failures are rendered inline.
pub fn glimpse_to<T, W>(table: &T, options: &GlimpseOptions, out: &mut W) -> std::io::Result<()>
where
    T: Table + ?Sized,
    W: Write + ?Sized,
{
    let report = build_report(table, options);
    render_report(&report, options, out)
}

/// Print a glimpse of `table` to standard output.
///
/// Nothing is returned; a failed write to stdout is logged and otherwise ignored.
pub fn glimpse<T: Table + ?Sized>(table: &T, options: &GlimpseOptions) {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_glimpse(table, options, &mut lock);
}

// Returns whether the report was fully written and flushed.
fn write_glimpse<T, W>(table: &T, options: &GlimpseOptions, out: &mut W) -> bool
where
    T: Table + ?Sized,
    W: Write + ?Sized,
{
    match glimpse_to(table, options, out).and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, "failed to write glimpse");
            false
        }
    }
}
