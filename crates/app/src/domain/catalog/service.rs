//! Catalog service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use partsmith::{
    catalog::{CatalogItem, NameMap, names_with_prices},
    ids::ItemId,
};
use tracing::{debug, info};

use crate::{
    domain::catalog::{assembler::Assembler, errors::CatalogServiceError, store::CatalogStore},
    photos::{PhotoUpload, PhotoUploader},
};

/// CRUD, photos and name listings for one catalog collection.
#[async_trait]
pub trait CatalogService<T: CatalogItem>: Send + Sync {
    /// Retrieves all items.
    async fn list(&self) -> Result<Vec<T>, CatalogServiceError>;

    /// Retrieve a single item.
    async fn get(&self, id: &ItemId<T>) -> Result<T, CatalogServiceError>;

    /// Creates an item under a fresh id.
    async fn create(&self, draft: T::Draft) -> Result<T, CatalogServiceError>;

    /// Replaces an item, keeping its id and photos.
    async fn update(&self, id: &ItemId<T>, draft: T::Draft) -> Result<T, CatalogServiceError>;

    /// Deletes an item.
    async fn delete(&self, id: &ItemId<T>) -> Result<(), CatalogServiceError>;

    /// Uploads a photo and puts its URL first in the item's photo list.
    async fn add_photo(&self, id: &ItemId<T>, photo: PhotoUpload) -> Result<T, CatalogServiceError>;

    /// Every item rendered as id → `"<name> ($<price>)"`.
    async fn names_with_prices(&self) -> Result<NameMap, CatalogServiceError>;
}

/// [`CatalogService`] over a [`CatalogStore`].
pub struct StoreCatalogService<T: CatalogItem> {
    store: Arc<dyn CatalogStore<T>>,
    assembler: Arc<dyn Assembler<T>>,
    photos: Arc<dyn PhotoUploader>,
}

impl<T: CatalogItem> StoreCatalogService<T> {
    #[must_use]
    pub fn new(
        store: Arc<dyn CatalogStore<T>>,
        assembler: Arc<dyn Assembler<T>>,
        photos: Arc<dyn PhotoUploader>,
    ) -> Self {
        Self {
            store,
            assembler,
            photos,
        }
    }

    async fn existing(&self, id: &ItemId<T>) -> Result<T, CatalogServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or(CatalogServiceError::NotFound)
    }
}

impl<T: CatalogItem> Debug for StoreCatalogService<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StoreCatalogService")
            .field("collection", &T::COLLECTION)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: CatalogItem> CatalogService<T> for StoreCatalogService<T> {
    async fn list(&self) -> Result<Vec<T>, CatalogServiceError> {
        Ok(self.store.list_all().await?)
    }

    async fn get(&self, id: &ItemId<T>) -> Result<T, CatalogServiceError> {
        self.existing(id).await
    }

    async fn create(&self, draft: T::Draft) -> Result<T, CatalogServiceError> {
        let item = self.assembler.assemble(ItemId::generate(), draft).await?;
        let item = self.store.save(item).await?;

        info!(collection = T::COLLECTION, id = %item.id(), "created catalog item");

        Ok(item)
    }

    async fn update(&self, id: &ItemId<T>, draft: T::Draft) -> Result<T, CatalogServiceError> {
        let mut existing = self.existing(id).await?;

        let mut item = self.assembler.assemble(id.clone(), draft).await?;

        *item.photos_mut() = std::mem::take(existing.photos_mut());

        let item = self.store.save(item).await?;

        debug!(collection = T::COLLECTION, %id, "updated catalog item");

        Ok(item)
    }

    async fn delete(&self, id: &ItemId<T>) -> Result<(), CatalogServiceError> {
        if !self.store.delete(id).await? {
            return Err(CatalogServiceError::NotFound);
        }

        info!(collection = T::COLLECTION, %id, "deleted catalog item");

        Ok(())
    }

    async fn add_photo(&self, id: &ItemId<T>, photo: PhotoUpload) -> Result<T, CatalogServiceError> {
        let mut item = self.existing(id).await?;

        let url = self.photos.upload(T::COLLECTION, photo).await?;

        item.prepend_photo(url);

        Ok(self.store.save(item).await?)
    }

    async fn names_with_prices(&self) -> Result<NameMap, CatalogServiceError> {
        let items = self.store.list_all().await?;

        Ok(names_with_prices(&items))
    }
}
