//! Column-label normalization.
//!
//! Every label is looked up (exactly, case- and whitespace-sensitive) in a fixed map of known
//! headers from the structure-damage inspection export. Unknown labels fall back to
//! [`sanitize_label`]: non-alphanumeric ASCII characters become `_`, the result is lowercased,
//! and leading/trailing `_` are stripped.
//!
//! - [`canonical_label()`]: one label
//! - [`normalize_labels()`]: a list of labels, in order
//! - [`clean_column_names()`]: rename every column of a [`crate::table::RenameColumns`] table
//!
//! ## Example
//!
//! ```rust
//! use data_glimpse::columns::{clean_column_names, NormalizeOptions};
//! use data_glimpse::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let mut ds = DataSet::new(
//!     Schema::new(vec![
//!         Field::new("OBJECTID", DataType::Int64),
//!         Field::new("* Damage", DataType::Utf8),
//!         Field::new("Hello World!", DataType::Utf8),
//!     ]),
//!     vec![vec![
//!         Value::Int64(1),
//!         Value::Utf8("Destroyed (>50%)".to_string()),
//!         Value::Null,
//!     ]],
//! );
//!
//! clean_column_names(&mut ds, &NormalizeOptions::default()).unwrap();
//! let names: Vec<&str> = ds.schema.field_names().collect();
//! assert_eq!(names, vec!["object_id", "damage", "hello_world"]);
//! ```

pub mod map;
pub mod normalize;
pub mod sanitize;

pub use map::{known_label, COLUMN_MAP};
pub use normalize::{
    canonical_label, clean_column_names, find_collisions, normalize_labels, CollisionPolicy,
    LabelCollision, NormalizeOptions,
};
pub use sanitize::sanitize_label;
