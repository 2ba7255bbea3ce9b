//! Error type shared by every learner in the crate.
use std::io;

use thiserror::Error;

/// Failures raised by training, classification, preprocessing and the
/// file readers.
#[derive(Error, Debug)]
pub enum LearnError {
    /// Out-of-range hyper-parameter, mismatched dimensions, empty or ragged input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A decision tree met a feature value that no training row had at that split.
    #[error("feature '{feature}' has no branch for value {value}")]
    UnseenFeatureValue { feature: String, value: String },

    /// Min-max normalization of a column whose values are all equal.
    #[error("column {column} has zero range and cannot be normalized")]
    ZeroRange { column: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// Malformed line in one of the text formats read by [`crate::io`].
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl LearnError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LearnError::InvalidArgument(msg.into())
    }
}

impl From<serde_json::Error> for LearnError {
    fn from(err: serde_json::Error) -> Self {
        LearnError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LearnError>;
