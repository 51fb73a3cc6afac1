use std::{num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Failures while reading item records from an instance store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read store file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// `line` is 1-based, matching what an editor shows.
    #[error("Malformed record {content:?} at {}:{line}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        content: String,
    },
    #[error("Missing record at {}:{line}", path.display())]
    MissingRecord { path: PathBuf, line: usize },
    #[error("Store files disagree on item count: {values} values, {weights} weights")]
    LengthMismatch { values: usize, weights: usize },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InstanceError {
    #[error("Got {values} values for {weights} weights")]
    LengthMismatch { values: usize, weights: usize },
    #[error("Item {index} must have a positive value and weight")]
    NonPositiveItem { index: usize },
    #[error("Upper bound for generated {field} must be positive")]
    InvalidBound { field: &'static str },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CapacityError {
    #[error("Capacity is empty")]
    Empty,
    #[error("Capacity {input:?} is not an integer")]
    Invalid {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Capacity must be positive, got {0}")]
    NonPositive(i64),
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid bit {found:?} at position {position}, expected '0' or '1'")]
pub struct ParseCandidateError {
    pub position: usize,
    pub found: char,
}

#[derive(Error, Debug)]
pub enum SolverError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Failed to build the evaluation thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
