//! Error types for the microavg-eval library.

use thiserror::Error;

/// Result type for microavg-eval operations.
pub type Result<T> = std::result::Result<T, MicroEvalError>;

/// Error types that can occur during detection scoring.
#[derive(Error, Debug)]
pub enum MicroEvalError {
    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from Polars DataFrame operations.
    #[error("Polars error: {0}")]
    PolarsError(#[from] polars::error::PolarsError),

    /// Invalid IoU or confidence threshold.
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// A class id outside the configured class index space.
    ///
    /// Indicates an upstream mismatch between the class list and the
    /// detector's weights or the dataset labels, so it is surfaced rather
    /// than clamped.
    #[error("Class id {class_id} out of range for {num_classes} classes")]
    ClassIdOutOfRange { class_id: usize, num_classes: usize },

    /// Empty class list provided.
    #[error("Empty class list: {0}")]
    EmptyClassList(String),

    /// Duplicate class name in the class list.
    #[error("Duplicate class name: {0}")]
    DuplicateClass(String),

    /// Class name not present in the class list.
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    /// Invalid bounding box coordinates.
    #[error("Invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    /// A padded ground-truth label row that cannot be decoded.
    #[error("Invalid label row: {0}")]
    InvalidLabelRow(String),

    /// Mismatched per-image detection and ground-truth batch lengths.
    #[error("Batch mismatch: {0}")]
    BatchMismatch(String),

    /// Attempt to merge tallies with different class counts.
    #[error("Tally size mismatch: {0} vs {1} classes")]
    TallySizeMismatch(usize, usize),

    /// Missing required column in a DataFrame.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Malformed DataFrame contents.
    #[error("Invalid DataFrame: {0}")]
    InvalidDataFrame(String),
}
