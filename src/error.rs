use std::error::Error;
use std::fmt;

/// Custom error type for chain construction, validation, and lifecycle failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// A supplied chain-order entry is not a usable label-column index.
    NonIndexChainOrder(i64),
    /// The supplied chain order does not cover every label column exactly once.
    ChainOrderMismatch { expected: usize, got: usize },
    /// The supplied chain order repeats or exceeds the label columns.
    NotAPermutation(usize),
    /// The feature and label matrices disagree on the number of samples.
    SampleCountMismatch { x_rows: usize, y_rows: usize },
    /// Prediction input width differs from the width seen at fit time.
    FeatureCountMismatch { expected: usize, got: usize },
    /// Prediction was requested before the chain was fitted.
    NotFitted,
    /// The chain was already fitted; orders are resolved exactly once.
    AlreadyFitted,
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChainError::NonIndexChainOrder(entry) => {
                write!(f, "chain_order entry {} is not a valid label column index", entry)
            }
            ChainError::ChainOrderMismatch { expected, got } => write!(
                f,
                "chain_order length {} must equal the number of label columns {}",
                got, expected
            ),
            ChainError::NotAPermutation(entry) => write!(
                f,
                "chain_order must visit every label column exactly once; entry {} repeats or is out of range",
                entry
            ),
            ChainError::SampleCountMismatch { x_rows, y_rows } => write!(
                f,
                "feature matrix has {} rows but label matrix has {}",
                x_rows, y_rows
            ),
            ChainError::FeatureCountMismatch { expected, got } => write!(
                f,
                "prediction input has {} columns but the chain was fitted on {}",
                got, expected
            ),
            ChainError::NotFitted => write!(f, "chain must be fitted before predicting"),
            ChainError::AlreadyFitted => write!(f, "chain is already fitted"),
        }
    }
}

impl Error for ChainError {}
