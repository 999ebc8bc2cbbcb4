use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Domain error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] fetch_feature::FetchFeatureError),

    #[error("Unknown demo '{name}', expected one of: {expected}")]
    UnknownDemo { name: String, expected: String },
}
