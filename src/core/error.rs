// src/core/error.rs

use thiserror::Error;

/// Failures surfaced before (or between) the stages of a reduction.
///
/// None of these can be raised from inside a pairwise algorithm; the
/// algorithms are total over non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GcdError {
    #[error("Value `{0}` is not a number.")]
    InvalidNumber(String),

    #[error("At least two numbers are required, found {found}.")]
    InsufficientOperands { found: usize },

    #[error("Unknown algorithm `{0}` (expected euclidean, prime or stein).")]
    UnknownAlgorithm(String),

    #[error("Reduction cancelled after {completed_stages} of {stage_count} stages.")]
    Cancelled {
        completed_stages: usize,
        stage_count: usize,
    },
}

pub type Result<T> = std::result::Result<T, GcdError>;
