use thiserror::Error;

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Error type returned by normalization, loading, and (internally) per-column sampling.
///
/// The glimpse reporter never returns these to the caller: a failure while sampling a column
/// is rendered inline into that column's preview line instead.
#[derive(Debug, Error)]
pub enum TableError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by the Polars container.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// The input format could not be determined or is not supported.
    #[error("unsupported format: {message}")]
    UnsupportedFormat { message: String },

    /// A row is shorter than the schema and has no cell for `column`.
    #[error("row {row} has no value for column '{column}'")]
    MissingCell { row: usize, column: String },

    /// A cell could not be rendered to its display form.
    #[error("failed to format value in column '{column}': {message}")]
    Format { column: String, message: String },

    /// Two or more original labels normalize to the same canonical label.
    #[error("label collision: {sources:?} all normalize to '{label}'")]
    LabelCollision { label: String, sources: Vec<String> },

    /// The container refused a duplicate column label.
    #[error("duplicate column label '{label}'")]
    DuplicateColumn { label: String },

    /// A rename list does not match the number of columns.
    #[error("expected {expected} column labels, got {actual}")]
    LabelCountMismatch { expected: usize, actual: usize },
}
