//! Synchronous product lookup with a single catch-all failure.

use domain::{Console, Product};
use thiserror::Error;
use tracing::debug;

/// Message carried by every failed lookup
pub const NOT_FOUND_MESSAGE: &str = "Produto não encontrado";

/// Generic lookup failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LookupError {
    pub message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// In-process product catalog that only knows id 1
pub struct Catalog;

impl Catalog {
    /// Look up a product by id
    pub fn get_product(id: i32) -> Result<Product, LookupError> {
        debug!(product_id = id, "Synchronous lookup");

        if id != domain::product::SAMPLE_PRODUCT_ID {
            return Err(LookupError::new(NOT_FOUND_MESSAGE));
        }

        Ok(Product::sample())
    }

    /// Look up every id in order, printing each success
    ///
    /// Stops at the first failure; later ids are never looked up.
    pub fn lookup_all(ids: &[i32], console: &dyn Console) -> Result<Vec<Product>, LookupError> {
        let mut found = Vec::with_capacity(ids.len());

        for &id in ids {
            let product = Self::get_product(id)?;
            console.line(&format!("Sucesso: {}", product.name));
            found.push(product);
        }

        Ok(found)
    }

    /// Run the lookups inside one handler that reports the first failure
    ///
    /// A failed lookup is printed and handed back instead of propagated, so
    /// the caller always carries on.
    pub fn run(ids: &[i32], console: &dyn Console) -> Option<LookupError> {
        match Self::lookup_all(ids, console) {
            Ok(_) => None,
            Err(error) => {
                console.line(&format!("Erro capturado: {error}"));
                Some(error)
            }
        }
    }
}
