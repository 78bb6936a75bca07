//! `PostgreSQL` catalog store.

use std::marker::PhantomData;

use async_trait::async_trait;
use partsmith::{catalog::CatalogItem, ids::ItemId};
use sqlx::{Row, query, query_scalar, types::Json};
use tracing::debug;

use crate::{
    database::Db,
    domain::catalog::{errors::CatalogError, store::CatalogStore},
};

const LIST_ITEMS_SQL: &str = include_str!("sql/list_items.sql");
const GET_ITEM_SQL: &str = include_str!("sql/get_item.sql");
const ITEM_EXISTS_SQL: &str = include_str!("sql/item_exists.sql");
const SAVE_ITEM_SQL: &str = include_str!("sql/save_item.sql");
const DELETE_ITEM_SQL: &str = include_str!("sql/delete_item.sql");

/// Stores items of one collection as JSONB documents in `catalog_items`.
#[derive(Debug, Clone)]
pub struct PgCatalogStore<T> {
    db: Db,
    item: PhantomData<fn() -> T>,
}

impl<T: CatalogItem> PgCatalogStore<T> {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            item: PhantomData,
        }
    }
}

#[async_trait]
impl<T: CatalogItem> CatalogStore<T> for PgCatalogStore<T> {
    async fn get(&self, id: &ItemId<T>) -> Result<Option<T>, CatalogError> {
        let row = query(GET_ITEM_SQL)
            .bind(T::COLLECTION)
            .bind(id.as_str())
            .fetch_optional(self.db.pool())
            .await?;

        row.map(|row| row.try_get::<Json<T>, _>("document").map(|Json(item)| item))
            .transpose()
            .map_err(CatalogError::from)
    }

    async fn list_all(&self) -> Result<Vec<T>, CatalogError> {
        let rows = query(LIST_ITEMS_SQL)
            .bind(T::COLLECTION)
            .fetch_all(self.db.pool())
            .await?;

        let items = rows
            .iter()
            .map(|row| row.try_get::<Json<T>, _>("document").map(|Json(item)| item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }

    async fn exists(&self, id: &ItemId<T>) -> Result<bool, CatalogError> {
        let exists = query_scalar::<_, bool>(ITEM_EXISTS_SQL)
            .bind(T::COLLECTION)
            .bind(id.as_str())
            .fetch_one(self.db.pool())
            .await?;

        Ok(exists)
    }

    async fn save(&self, item: T) -> Result<T, CatalogError> {
        query(SAVE_ITEM_SQL)
            .bind(T::COLLECTION)
            .bind(item.id().as_str())
            .bind(Json(&item))
            .execute(self.db.pool())
            .await?;

        debug!(collection = T::COLLECTION, id = %item.id(), "saved catalog item");

        Ok(item)
    }

    async fn delete(&self, id: &ItemId<T>) -> Result<bool, CatalogError> {
        let result = query(DELETE_ITEM_SQL)
            .bind(T::COLLECTION)
            .bind(id.as_str())
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
