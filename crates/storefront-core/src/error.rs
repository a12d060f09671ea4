use thiserror::Error;

/// All the ways things can go wrong in Storefront
///
/// Most of these never reach the user: catalog and favorites failures are
/// logged and folded into an empty result at the boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Storage operation failed: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<storefront_api::CatalogApiError> for Error {
    fn from(err: storefront_api::CatalogApiError) -> Self {
        Error::ApiError(err.to_string())
    }
}

impl From<storefront_cache::CacheError> for Error {
    fn from(err: storefront_cache::CacheError) -> Self {
        Error::StorageError(err.to_string())
    }
}
