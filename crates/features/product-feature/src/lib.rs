pub mod catalog;
pub mod error;
pub mod flaky;
pub mod service;

pub use catalog::{Catalog, LookupError};
pub use error::{InternalServerError, ProductError};
pub use flaky::{
    AlwaysFail, FailureInjector, FlakyError, FlakyInternalError, FlakyProductService, NeverFail,
    RandomFailures,
};
pub use service::ProductService;
