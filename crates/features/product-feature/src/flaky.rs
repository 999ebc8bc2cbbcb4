//! Product lookup with injected intermittent failures.
//!
//! Keeps its own error taxonomy: [`FlakyError`] and [`FlakyInternalError`]
//! are unrelated to the types in [`crate::error`].

use std::backtrace::{Backtrace, BacktraceStatus};
use std::sync::Arc;
use std::time::Duration;

use domain::{Console, Product};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Simulated latency of one lookup
pub const LOOKUP_LATENCY: Duration = Duration::from_millis(10);

pub const NOT_FOUND_MESSAGE: &str = "Produto não encontrado";
pub const CONNECTION_FAILED_MESSAGE: &str = "Conexão com o banco falhou";
pub const DEFAULT_FAILURE_PROBABILITY: f64 = 0.5;

/// Decides whether the next lookup should hit a simulated technical failure
pub trait FailureInjector: Send + Sync {
    fn should_fail(&self) -> bool;
}

/// Fails independently on each call with the given probability
#[derive(Debug, Clone, Copy)]
pub struct RandomFailures {
    probability: f64,
}

impl RandomFailures {
    /// `probability` is clamped into `0.0..=1.0`
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for RandomFailures {
    fn default() -> Self {
        Self::new(DEFAULT_FAILURE_PROBABILITY)
    }
}

impl FailureInjector for RandomFailures {
    fn should_fail(&self) -> bool {
        rand::random::<f64>() < self.probability
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFail;

impl FailureInjector for AlwaysFail {
    fn should_fail(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverFail;

impl FailureInjector for NeverFail {
    fn should_fail(&self) -> bool {
        false
    }
}

/// Failures of the intermittent lookup
#[derive(Error, Debug, Clone)]
pub enum FlakyError {
    /// Business failure: the id is unknown
    #[error("{0}")]
    NotFound(String),

    /// Technical failure, with the trace captured where it was raised
    #[error("{message}")]
    Technical {
        message: String,
        trace: Arc<Backtrace>,
    },
}

impl FlakyError {
    pub fn technical(message: impl Into<String>) -> Self {
        FlakyError::Technical {
            message: message.into(),
            trace: Arc::new(Backtrace::force_capture()),
        }
    }

    /// Whether trying again could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, FlakyError::Technical { .. })
    }

    /// Text describing where the failure was raised
    ///
    /// The backtrace captured when a technical failure was raised. Falls back
    /// to the debug rendering of the failure when there is no trace to show,
    /// either because the platform cannot capture one or because the failure
    /// is a business one.
    pub fn diagnostic_trace(&self) -> String {
        match self {
            FlakyError::Technical { trace, .. } if trace.status() == BacktraceStatus::Captured => {
                trace.to_string()
            }
            _ => format!("{self:?}"),
        }
    }
}

/// Technical failure re-raised to the outer caller
#[derive(Error, Debug)]
#[error("{message}")]
pub struct FlakyInternalError {
    pub message: String,
    #[source]
    pub source: FlakyError,
}

impl FlakyInternalError {
    pub const MESSAGE: &'static str = "Falha técnica ao buscar produto";

    pub fn wrap(source: FlakyError) -> Self {
        Self {
            message: Self::MESSAGE.to_string(),
            source,
        }
    }
}

/// Product lookups backed by an unreliable connection
pub struct FlakyProductService<I> {
    injector: I,
}

impl<I: FailureInjector> FlakyProductService<I> {
    pub fn new(injector: I) -> Self {
        Self { injector }
    }

    /// Get a product by id
    ///
    /// Unknown ids fail as not-found. A known id may still fail with a
    /// technical error when the injector says so.
    pub async fn get_product(&self, id: i32) -> Result<Product, FlakyError> {
        sleep(LOOKUP_LATENCY).await;

        if id != domain::product::SAMPLE_PRODUCT_ID {
            return Err(FlakyError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        if self.injector.should_fail() {
            warn!(product_id = id, "Injected connection failure");
            return Err(FlakyError::technical(CONNECTION_FAILED_MESSAGE));
        }

        Ok(Product::sample())
    }

    /// Look up one product and classify the outcome
    ///
    /// Technical failures print their trace before being re-raised as a
    /// [`FlakyInternalError`].
    pub async fn run(
        &self,
        id: i32,
        console: &dyn Console,
    ) -> Result<Option<Product>, FlakyInternalError> {
        match self.get_product(id).await {
            Ok(product) => {
                console.line(&format!("Sucesso: {}", product.name));
                Ok(Some(product))
            }
            Err(error @ FlakyError::NotFound(_)) => {
                console.line(&format!("Erro de negócio: {error}"));
                Ok(None)
            }
            Err(error) => {
                console.line(&format!("Erro técnico capturado: {error}"));
                console.line(&error.diagnostic_trace());
                debug!(transient = error.is_transient(), "Re-raising technical failure");
                Err(FlakyInternalError::wrap(error))
            }
        }
    }

    /// Outermost handler: reports an internal error instead of propagating it
    pub async fn run_and_report(&self, id: i32, console: &dyn Console) -> Option<FlakyInternalError> {
        match self.run(id, console).await {
            Ok(_) => None,
            Err(error) => {
                console.line(&format!("InternalServerError: {error}"));
                Some(error)
            }
        }
    }
}
