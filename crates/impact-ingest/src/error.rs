use impact_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },
    #[error("row {row}: missing value for column '{column}'")]
    MissingValue { row: usize, column: &'static str },
    #[error("row {row}: column '{column}' has non-numeric value '{value}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}: treatment flag must be 0 or 1, got {value}")]
    InvalidTreatmentFlag { row: usize, value: f64 },
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
