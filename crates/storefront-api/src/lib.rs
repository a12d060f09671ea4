// API client for the remote product catalog
pub mod catalog;

// Re-export common types
pub use catalog::{ApiProduct, ApiRating, CatalogApiError, CatalogClient};
