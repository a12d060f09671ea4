use storefront_api::{CatalogApiError, CatalogClient};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn catalog_body() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "description": "Slim-fitting style, contrast raglan long sleeve",
            "category": "men's clothing",
            "image": "https://example.com/1.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        },
        {
            "id": 2,
            "title": "WD 2TB Elements Portable External Hard Drive",
            "price": 64.0,
            "description": "USB 3.0 and USB 2.0 compatibility",
            "category": "electronics",
            "image": "https://example.com/2.jpg",
            "rating": { "rate": 3.3, "count": 203 }
        }
    ])
}

async fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::with_base_url(server.uri(), None).unwrap()
}

// ============================================================================
// Catalog Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_products_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let products = client.fetch_products().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[1].category, "electronics");
    assert_eq!(products[1].rating.count, 203);
}

#[tokio::test]
async fn test_fetch_products_empty_catalog() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let products = client.fetch_products().await.unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn test_fetch_products_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let result = client.fetch_products().await;

    match result {
        Err(CatalogApiError::RequestFailed(msg)) => assert!(msg.contains("500")),
        other => panic!("Expected RequestFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_products_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let result = client.fetch_products().await;

    assert!(matches!(result, Err(CatalogApiError::NotFound(_))));
}

#[tokio::test]
async fn test_fetch_products_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let result = client.fetch_products().await;

    assert!(matches!(result, Err(CatalogApiError::RateLimitExceeded)));
}

#[tokio::test]
async fn test_fetch_products_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let result = client.fetch_products().await;

    assert!(matches!(result, Err(CatalogApiError::ParseError(_))));
}
