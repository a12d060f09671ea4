use crate::{filter, models::Product, Result};
use async_trait::async_trait;
use tracing::{error, info};

#[cfg(test)]
use mockall::automock;

/// Where products come from
///
/// One implementation per backend; tests swap in a mock.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}

/// The full product list as fetched, before any filtering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories, alphabetically
    pub fn categories(&self) -> Vec<String> {
        filter::unique_categories(&self.products)
    }
}

/// Fetch the catalog once; a failed fetch becomes an empty catalog
pub async fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    match source.fetch_products().await {
        Ok(products) => {
            info!("Loaded {} products", products.len());
            Catalog::new(products)
        }
        Err(e) => {
            error!("Error fetching products: {}", e);
            Catalog::default()
        }
    }
}
