//! In-memory catalog store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use partsmith::{catalog::CatalogItem, ids::ItemId};
use tokio::sync::RwLock;

use crate::domain::catalog::{errors::CatalogError, store::CatalogStore};

/// A catalog collection held in process memory. Used by tests and by the
/// server when no database is configured.
#[derive(Debug)]
pub struct MemoryCatalogStore<T> {
    items: RwLock<BTreeMap<String, T>>,
}

impl<T: CatalogItem> MemoryCatalogStore<T> {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_items([])
    }

    /// A store pre-filled with `items`.
    pub fn with_items(items: impl IntoIterator<Item = T>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.id().to_string(), item))
            .collect();

        Self {
            items: RwLock::new(items),
        }
    }
}

impl<T: CatalogItem> Default for MemoryCatalogStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: CatalogItem> CatalogStore<T> for MemoryCatalogStore<T> {
    async fn get(&self, id: &ItemId<T>) -> Result<Option<T>, CatalogError> {
        Ok(self.items.read().await.get(id.as_str()).cloned())
    }

    async fn list_all(&self) -> Result<Vec<T>, CatalogError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn exists(&self, id: &ItemId<T>) -> Result<bool, CatalogError> {
        Ok(self.items.read().await.contains_key(id.as_str()))
    }

    async fn save(&self, item: T) -> Result<T, CatalogError> {
        self.items
            .write()
            .await
            .insert(item.id().to_string(), item.clone());

        Ok(item)
    }

    async fn delete(&self, id: &ItemId<T>) -> Result<bool, CatalogError> {
        Ok(self.items.write().await.remove(id.as_str()).is_some())
    }
}
