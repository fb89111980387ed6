use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate observation for region '{region}' at time {time}")]
    DuplicateObservation { region: String, time: f64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
