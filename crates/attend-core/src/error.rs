use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("answers must be a JSON object of question id to integer, got: {0}")]
    InvalidAnswers(String),
}
