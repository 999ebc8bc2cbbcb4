//! Behavior tests for the asynchronous lookup that separates business
//! failures from technical ones

use std::error::Error as _;

use domain::{Product, Transcript};
use product_feature::{InternalServerError, ProductError, ProductService};

// =============================================================================
// Lookup Rules
// =============================================================================

#[tokio::test(start_paused = true)]
async fn id_one_resolves_to_the_example_product() -> Result<(), ProductError> {
    let product = ProductService::get_product(1).await?;

    assert_eq!(product, Product::sample());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn unknown_id_is_a_not_found_naming_the_id() {
    let err = ProductService::get_product(2).await.unwrap_err();

    assert_eq!(err, ProductError::NotFound("Produto ID: 2 não encontrado".to_string()));
    assert!(err.is_business());
}

// =============================================================================
// Classification
// =============================================================================

#[tokio::test(start_paused = true)]
async fn not_found_is_reported_as_a_business_error_without_reraising()
-> Result<(), InternalServerError> {
    let transcript = Transcript::new();

    let product = ProductService::run(2, &transcript).await?;

    assert!(product.is_none());
    assert_eq!(
        transcript.lines(),
        vec!["Erro de negócio: Produto ID: 2 não encontrado"]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn success_is_reported_and_returned() -> Result<(), InternalServerError> {
    let transcript = Transcript::new();

    let product = ProductService::run(1, &transcript).await?;

    assert_eq!(product, Some(Product::sample()));
    assert_eq!(transcript.lines(), vec!["Sucesso: Produto Exemplo"]);
    Ok(())
}

#[test]
fn technical_failure_is_wrapped_in_an_internal_error() {
    let transcript = Transcript::new();
    let original = ProductError::Technical("timeout na consulta".to_string());

    // When an unclassified failure reaches the handler
    let err = ProductService::handle(Err(original.clone()), &transcript).unwrap_err();

    // Then it is re-raised as an internal error keeping the original as cause
    assert_eq!(err.to_string(), "Falha técnica ao buscar produto");
    assert_eq!(err.source, original);
    assert_eq!(
        err.source().map(ToString::to_string),
        Some("timeout na consulta".to_string())
    );

    // And the cause is not printed
    assert!(transcript.lines().is_empty());
}
