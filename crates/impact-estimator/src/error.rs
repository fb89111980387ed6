use std::fmt;

use thiserror::Error;

/// Which side of the treatment cutoff a lookup targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Pre,
    Post,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Pre => write!(f, "pre"),
            Period::Post => write!(f, "post"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("cannot take the mean of an empty sample")]
    EmptySample,
    #[error("sample variance needs at least 2 observations, got {count}")]
    InsufficientObservations { count: usize },
    #[error("region '{region}' has no {period}-period observation")]
    RegionNotFound { region: String, period: Period },
    #[error("no control regions available to weight")]
    NoControlRegions,
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
