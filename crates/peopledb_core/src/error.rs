//! Error types for PeopleDB core.

use crate::chart::ChartError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// A record field violated its allowed range.
///
/// Returned before anything is written; the store is unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Age is negative or greater than the maximum.
    #[error("age must be between {min} and {max}, got {age}")]
    AgeOutOfRange {
        /// The rejected age.
        age: i32,
        /// Smallest accepted age.
        min: i32,
        /// Largest accepted age.
        max: i32,
    },

    /// Weight is negative, greater than the maximum, or not a finite number.
    #[error("weight must be between {min} and {max}, got {weight}")]
    WeightOutOfRange {
        /// The rejected weight.
        weight: f64,
        /// Smallest accepted weight.
        min: f64,
        /// Largest accepted weight.
        max: f64,
    },
}

/// Errors that can occur in PeopleDB core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record was rejected by validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Line codec error.
    #[error("codec error: {0}")]
    Codec(#[from] peopledb_codec::CodecError),

    /// Chart projection error.
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),

    /// A persistence file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    FileOpen {
        /// The file that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error while reading or writing an open file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Storage for the records could not be reserved.
    ///
    /// This is the only unrecoverable error; the embedding application
    /// decides how to terminate.
    #[error("allocation failed: cannot reserve room for {requested} records")]
    Allocation {
        /// Capacity that was requested, in records.
        requested: usize,
    },
}

impl CoreError {
    /// Creates a file open error.
    pub fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Creates an allocation error.
    pub fn allocation(requested: usize) -> Self {
        Self::Allocation { requested }
    }

    /// Returns true if the error leaves the process unable to continue.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }

    /// Returns the validation error, if this is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
