/// The only product id every catalog knows about
pub const SAMPLE_PRODUCT_ID: i32 = 1;

/// Name of the sample product
pub const SAMPLE_PRODUCT_NAME: &str = "Produto Exemplo";

/// Product record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub name: String,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The product returned for a successful lookup
    pub fn sample() -> Self {
        Self::new(SAMPLE_PRODUCT_ID, SAMPLE_PRODUCT_NAME)
    }
}
