//! Row selection and value formatting for previews.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::TableResult;
use crate::table::Table;

use super::options::GlimpseOptions;

/// Text shown for a missing value.
pub const NULL_TEXT: &str = "None";

/// Row indices to preview, shared by every column of one report.
///
/// Sequential mode takes the first `min(sample_size, row_count)` rows. Random mode draws that
/// many distinct rows from a [`StdRng`] seeded with `options.seed`, in draw order.
pub fn sample_rows(row_count: usize, options: &GlimpseOptions) -> Vec<usize> {
    let amount = options.sample_size.min(row_count);
    if !options.random {
        return (0..amount).collect();
    }
    let mut rng = StdRng::seed_from_u64(options.seed);
    rand::seq::index::sample(&mut rng, row_count, amount).into_vec()
}

/// Cut `text` to `max_chars` characters and append `...` if it was longer.
pub fn truncate_value(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_owned(),
    }
}

/// Comma-joined preview of `column` at `rows`. The first failing cell fails the whole preview.
pub fn preview_column<T: Table + ?Sized>(
    table: &T,
    column: usize,
    rows: &[usize],
    max_chars: usize,
) -> TableResult<String> {
    let mut values = Vec::with_capacity(rows.len());
    for &row in rows {
        let text = table.cell_text(row, column)?;
        let shown = text.as_deref().unwrap_or(NULL_TEXT);
        values.push(truncate_value(shown, max_chars));
    }
    Ok(values.join(", "))
}
