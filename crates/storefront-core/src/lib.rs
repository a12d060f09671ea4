// Core browsing logic: the filter → sort → paginate → page-window pipeline,
// favorites, and the state the presentation layer renders from
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod providers;
pub mod state;
pub mod store;

pub use catalog::{load_catalog, Catalog, CatalogSource};
pub use config::Config;
pub use error::Error;
pub use favorites::{FavoriteSet, FavoritesStore, FAVORITES_KEY};
pub use filter::{filter_and_sort, unique_categories};
pub use models::{CategoryFilter, FilterCriteria, PageLabel, Product, ProductId, Rating, SortOrder};
pub use pagination::{page_window, paginate, total_pages};
pub use state::{BrowserState, CatalogView, Intent};
pub use store::{KeyValueStore, MemoryStore};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
