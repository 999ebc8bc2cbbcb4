use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
