use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("invalid weight config: {0}")]
    InvalidWeightConfig(String),
}

pub type ScoreResult<T> = Result<T, ScoreError>;
