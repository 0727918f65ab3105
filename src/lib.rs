//! `data-glimpse` is a small library for first contact with a tabular dataset:
//!
//! - [`columns`]: rename column labels to canonical snake-case identifiers, using a fixed map of
//!   known headers and a generic sanitization rule for everything else;
//! - [`glimpse`]: print a compact per-column preview (type tag plus sample values), in the
//!   manner of R's `glimpse()`.
//!
//! Both work on anything implementing the [`table::Table`] seam, which this crate provides for
//! its own row-major [`types::DataSet`] and for a Polars `DataFrame`.
//!
//! ## Quick example
//!
//! ```rust
//! use data_glimpse::columns::{clean_column_names, NormalizeOptions};
//! use data_glimpse::glimpse::{glimpse_to, GlimpseOptions};
//! use data_glimpse::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let mut ds = DataSet::new(
//!     Schema::new(vec![
//!         Field::new("OBJECTID", DataType::Int64),
//!         Field::new("* City", DataType::Utf8),
//!     ]),
//!     vec![
//!         vec![Value::Int64(1), Value::Utf8("Paradise".to_string())],
//!         vec![Value::Int64(2), Value::Null],
//!     ],
//! );
//!
//! clean_column_names(&mut ds, &NormalizeOptions::default()).unwrap();
//!
//! let mut out = Vec::new();
//! glimpse_to(&ds, &GlimpseOptions::default(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("object_id"));
//! assert!(text.contains("<str> Paradise, None"));
//! ```
//!
//! ## Modules
//!
//! - [`columns`]: label normalization
//! - [`glimpse`]: preview reports
//! - [`table`]: the `Table` / `RenameColumns` traits and their implementations
//! - [`types`]: the in-memory dataset types
//! - [`load`]: file loading used by the `data-glimpse` binary
//! - [`error`]: error types

pub mod columns;
pub mod error;
pub mod glimpse;
pub mod load;
pub mod table;
pub mod types;

pub use error::{TableError, TableResult};
pub use table::{RenameColumns, Table};
