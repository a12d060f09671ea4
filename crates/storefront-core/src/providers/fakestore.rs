// Fake Store provider - bridges the HTTP client with the CatalogSource trait
use async_trait::async_trait;
use std::time::Duration;
use storefront_api::{ApiProduct, CatalogClient};

use crate::{
    catalog::CatalogSource,
    models::{Product, Rating},
    Result,
};

/// Wrapper around CatalogClient that implements CatalogSource
pub struct FakeStoreProvider {
    client: CatalogClient,
}

impl FakeStoreProvider {
    pub fn new(api_url: &str, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            client: CatalogClient::with_base_url(api_url.to_string(), timeout)?,
        })
    }
}

#[async_trait]
impl CatalogSource for FakeStoreProvider {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let products = self.client.fetch_products().await?;
        Ok(products.into_iter().map(api_to_product).collect())
    }
}

/// Convert the wire record to our internal Product model
fn api_to_product(api: ApiProduct) -> Product {
    Product {
        id: api.id,
        title: api.title,
        price: api.price,
        description: api.description,
        category: api.category,
        image: api.image,
        rating: Rating {
            rate: api.rating.rate,
            count: api.rating.count,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_api::ApiRating;

    #[test]
    fn test_api_to_product_keeps_every_field() {
        let api = ApiProduct {
            id: 14,
            title: "Samsung 49-Inch Monitor".to_string(),
            price: 999.99,
            description: "Super ultrawide".to_string(),
            category: "electronics".to_string(),
            image: "https://example.com/14.jpg".to_string(),
            rating: ApiRating { rate: 2.2, count: 140 },
        };

        let product = api_to_product(api);
        assert_eq!(product.id, 14);
        assert_eq!(product.category, "electronics");
        assert_eq!(product.image, "https://example.com/14.jpg");
        assert_eq!(product.rating, Rating { rate: 2.2, count: 140 });
    }
}
