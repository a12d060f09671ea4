use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const CATALOG_API_BASE: &str = "https://fakestoreapi.com";

#[derive(Error, Debug)]
pub enum CatalogApiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Catalog endpoint not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogApiError>;

/// Client for a Fake Store style catalog API
///
/// The whole catalog comes back from a single `GET /products`; the client
/// never sends filtering or paging parameters.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(CATALOG_API_BASE.to_string(), None)
    }

    /// For mirrors, self-hosted fixtures, or a mock server in tests
    pub fn with_base_url(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("Storefront/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every product in the catalog
    pub async fn fetch_products(&self) -> Result<Vec<ApiProduct>> {
        let url = format!("{}/products", self.base_url);
        debug!("Fetching catalog from {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == 404 {
            return Err(CatalogApiError::NotFound(url));
        }

        if status == 429 {
            return Err(CatalogApiError::RateLimitExceeded);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogApiError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        // Read as text first so a malformed body surfaces as a ParseError
        let body = response.text().await?;
        let products: Vec<ApiProduct> = serde_json::from_str(&body)?;
        debug!("Catalog returned {} products", products.len());
        Ok(products)
    }
}

/// Product record exactly as the catalog API sends it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiProduct {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: ApiRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApiRating {
    pub rate: f64,
    pub count: u32,
}
