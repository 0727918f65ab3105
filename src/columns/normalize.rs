//! Renaming whole tables.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{TableError, TableResult};
use crate::table::RenameColumns;

use super::map::known_label;
use super::sanitize::sanitize_label;

/// What to do when two original labels normalize to the same canonical label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Rename anyway. The table ends up with duplicate labels if the container allows it
    /// (a warning is logged per collision).
    #[default]
    Allow,
    /// Fail with [`TableError::LabelCollision`] before renaming anything.
    Reject,
}

/// Options controlling [`clean_column_names`].
#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Collision handling; defaults to [`CollisionPolicy::Allow`].
    pub on_collision: CollisionPolicy,
}

/// A canonical label produced by more than one original label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCollision {
    /// The shared canonical label.
    pub label: String,
    /// Original labels (in column order) that all map to `label`.
    pub sources: Vec<String>,
}

/// Canonical label for one header: the known-map target if present, otherwise
/// [`sanitize_label`].
pub fn canonical_label(label: &str) -> String {
    match known_label(label) {
        Some(target) => target.to_owned(),
        None => sanitize_label(label),
    }
}

/// [`canonical_label`] applied to every label, preserving order and length.
pub fn normalize_labels<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    labels
        .iter()
        .map(|l| canonical_label(l.as_ref()))
        .collect()
}

/// Groups of original labels that share a renamed label.
///
/// `original` and `renamed` are parallel slices. Groups are ordered by first occurrence.
pub fn find_collisions<S: AsRef<str>>(original: &[S], renamed: &[String]) -> Vec<LabelCollision> {
    let mut groups: BTreeMap<usize, LabelCollision> = BTreeMap::new();
    let mut first_seen: Vec<(&str, usize)> = Vec::new();

    for (idx, (orig, new)) in original.iter().zip(renamed).enumerate() {
        match first_seen.iter().find(|(label, _)| *label == new.as_str()) {
            Some(&(_, first)) => {
                groups
                    .entry(first)
                    .or_insert_with(|| LabelCollision {
                        label: new.clone(),
                        sources: vec![original[first].as_ref().to_owned()],
                    })
                    .sources
                    .push(orig.as_ref().to_owned());
            }
            None => first_seen.push((new.as_str(), idx)),
        }
    }

    groups.into_values().collect()
}

/// Rename every column of `table` to its canonical label.
///
/// Row data, row order, and column order are untouched. On error the table keeps its original
/// labels.
///
/// Collisions are handled per [`NormalizeOptions::on_collision`]. Note that containers which
/// refuse duplicate labels (Polars frames) fail with [`TableError::DuplicateColumn`] even under
/// [`CollisionPolicy::Allow`].
pub fn clean_column_names<T: RenameColumns>(
    table: &mut T,
    options: &NormalizeOptions,
) -> TableResult<()> {
    let original = table.column_labels();
    let renamed = normalize_labels(&original);

    for (from, to) in original.iter().zip(&renamed) {
        if from != to {
            debug!(from = %from, to = %to, "renaming column");
        }
    }

    let collisions = find_collisions(&original, &renamed);
    if let Some(first) = collisions.first() {
        match options.on_collision {
            CollisionPolicy::Reject => {
                return Err(TableError::LabelCollision {
                    label: first.label.clone(),
                    sources: first.sources.clone(),
                });
            }
            CollisionPolicy::Allow => {
                for c in &collisions {
                    warn!(
                        label = %c.label,
                        sources = ?c.sources,
                        "column labels collide after normalization"
                    );
                }
            }
        }
    }

    table.rename_columns(renamed)
}
