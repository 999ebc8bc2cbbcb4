pub mod error;
pub mod service;

pub use error::FetchFeatureError;
pub use service::{FetchService, LabeledFetch, PairReport};
