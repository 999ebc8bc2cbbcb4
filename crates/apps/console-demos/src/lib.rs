pub mod config;
pub mod demos;
pub mod error;

pub use config::{ConfigError, DemoConfig};
pub use demos::{Demo, Selection, run_demo, run_selection};
pub use error::AppError;
