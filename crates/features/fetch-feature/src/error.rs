use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchFeatureError {
    #[error("Fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
