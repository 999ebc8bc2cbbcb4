use thiserror::Error;

/// Failures of the asynchronous product lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// Business failure: the id is unknown
    #[error("{0}")]
    NotFound(String),

    /// Any unclassified technical failure
    #[error("{0}")]
    Technical(String),
}

impl ProductError {
    pub fn not_found(id: i32) -> Self {
        ProductError::NotFound(format!("Produto ID: {id} não encontrado"))
    }

    pub fn is_business(&self) -> bool {
        matches!(self, ProductError::NotFound(_))
    }
}

/// Technical failure re-raised to the caller, keeping the original as its source
#[derive(Error, Debug)]
#[error("{message}")]
pub struct InternalServerError {
    pub message: String,
    #[source]
    pub source: ProductError,
}

impl InternalServerError {
    pub const MESSAGE: &'static str = "Falha técnica ao buscar produto";

    pub fn wrap(source: ProductError) -> Self {
        Self {
            message: Self::MESSAGE.to_string(),
            source,
        }
    }
}
