use std::time::Duration;

use domain::{Console, Product};
use tokio::time::sleep;
use tracing::debug;

use crate::error::{InternalServerError, ProductError};

/// Simulated latency of one lookup
pub const LOOKUP_LATENCY: Duration = Duration::from_millis(10);

/// Service for asynchronous product lookups
pub struct ProductService;

impl ProductService {
    /// Get a product by id
    pub async fn get_product(id: i32) -> Result<Product, ProductError> {
        sleep(LOOKUP_LATENCY).await;

        if id != domain::product::SAMPLE_PRODUCT_ID {
            return Err(ProductError::not_found(id));
        }

        Ok(Product::sample())
    }

    /// Report a lookup outcome
    ///
    /// Successes and not-found failures are handled here. Anything else is
    /// re-raised as an [`InternalServerError`] wrapping the original failure.
    pub fn handle(
        outcome: Result<Product, ProductError>,
        console: &dyn Console,
    ) -> Result<Option<Product>, InternalServerError> {
        match outcome {
            Ok(product) => {
                console.line(&format!("Sucesso: {}", product.name));
                Ok(Some(product))
            }
            Err(error) if error.is_business() => {
                console.line(&format!("Erro de negócio: {error}"));
                Ok(None)
            }
            Err(error) => {
                debug!(%error, "Technical failure during lookup");
                Err(InternalServerError::wrap(error))
            }
        }
    }

    /// Look up one product and classify the outcome
    pub async fn run(id: i32, console: &dyn Console) -> Result<Option<Product>, InternalServerError> {
        Self::handle(Self::get_product(id).await, console)
    }
}
