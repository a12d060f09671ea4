// Favorites - a persisted set of product ids
use crate::models::ProductId;
use crate::store::KeyValueStore;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Storage key the whole favorites set lives under
pub const FAVORITES_KEY: &str = "@product_catalog_favorites";

/// Ids the user has flagged
///
/// Ordered so the persisted JSON array is deterministic; nothing relies on
/// the order otherwise.
pub type FavoriteSet = BTreeSet<ProductId>;

/// Pure membership test, no I/O
pub fn contains(favorites: &FavoriteSet, id: ProductId) -> bool {
    favorites.contains(&id)
}

/// Loads and persists the favorites set through a key-value store
///
/// Every mutation writes the entire resulting set. Storage failures are
/// logged and swallowed: the returned set is what the caller should treat
/// as current, whether or not the write landed.
#[derive(Clone)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored set, or an empty one if nothing is stored or it can't be read
    pub async fn load(&self) -> FavoriteSet {
        let raw = match self.store.get(FAVORITES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored favorites");
                return FavoriteSet::new();
            }
            Err(e) => {
                error!("Error loading favorites: {}", e);
                return FavoriteSet::new();
            }
        };

        match serde_json::from_str::<Vec<ProductId>>(&raw) {
            Ok(ids) => {
                let favorites: FavoriteSet = ids.into_iter().collect();
                debug!("Loaded {} favorites", favorites.len());
                favorites
            }
            Err(e) => {
                warn!("Stored favorites are unreadable, starting empty: {}", e);
                FavoriteSet::new()
            }
        }
    }

    /// `favorites` plus `id`, persisted before returning
    pub async fn add(&self, favorites: &FavoriteSet, id: ProductId) -> FavoriteSet {
        let mut updated = favorites.clone();
        updated.insert(id);
        self.save(&updated).await;
        updated
    }

    /// `favorites` without `id`, persisted before returning
    pub async fn remove(&self, favorites: &FavoriteSet, id: ProductId) -> FavoriteSet {
        let mut updated = favorites.clone();
        updated.remove(&id);
        self.save(&updated).await;
        updated
    }

    /// Add `id` if it's missing, remove it otherwise
    pub async fn toggle(&self, favorites: &FavoriteSet, id: ProductId) -> FavoriteSet {
        if contains(favorites, id) {
            self.remove(favorites, id).await
        } else {
            self.add(favorites, id).await
        }
    }

    /// Drop the stored set entirely
    pub async fn clear(&self) -> FavoriteSet {
        if let Err(e) = self.store.delete(FAVORITES_KEY).await {
            error!("Error clearing favorites: {}", e);
        }
        FavoriteSet::new()
    }

    async fn save(&self, favorites: &FavoriteSet) {
        let ids: Vec<ProductId> = favorites.iter().copied().collect();

        let encoded = match serde_json::to_string(&ids) {
            Ok(encoded) => encoded,
            Err(e) => {
                error!("Error encoding favorites: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(FAVORITES_KEY, &encoded).await {
            error!("Error saving favorites: {}", e);
        }
    }
}
