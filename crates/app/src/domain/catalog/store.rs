//! Catalog store.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use partsmith::{
    builds::{Pc, Workstation},
    catalog::CatalogItem,
    hardware::{Cpu, Gpu, Hdd, Motherboard, PcCase, PowerSupply, Ram, Ssd},
    ids::ItemId,
};

use crate::{
    database::Db,
    domain::catalog::{errors::CatalogError, memory::MemoryCatalogStore, postgres::PgCatalogStore},
};

/// Persistence for one catalog collection.
#[async_trait]
pub trait CatalogStore<T: CatalogItem>: Send + Sync {
    /// Fetches an item, `None` when the id is unknown.
    async fn get(&self, id: &ItemId<T>) -> Result<Option<T>, CatalogError>;

    /// Every item of the collection, ordered by id.
    async fn list_all(&self) -> Result<Vec<T>, CatalogError>;

    /// Whether an item with this id exists.
    async fn exists(&self, id: &ItemId<T>) -> Result<bool, CatalogError>;

    /// Inserts or replaces the item stored under its id.
    async fn save(&self, item: T) -> Result<T, CatalogError>;

    /// Deletes an item, returning whether it existed.
    async fn delete(&self, id: &ItemId<T>) -> Result<bool, CatalogError>;
}

/// One store per catalog collection.
#[derive(Clone)]
pub struct CatalogStores {
    /// Processors
    pub cpus: Arc<dyn CatalogStore<Cpu>>,

    /// Graphics cards
    pub gpus: Arc<dyn CatalogStore<Gpu>>,

    /// Motherboards
    pub motherboards: Arc<dyn CatalogStore<Motherboard>>,

    /// Memory
    pub rams: Arc<dyn CatalogStore<Ram>>,

    /// Solid state drives
    pub ssds: Arc<dyn CatalogStore<Ssd>>,

    /// Hard disk drives
    pub hdds: Arc<dyn CatalogStore<Hdd>>,

    /// Power supplies
    pub power_supplies: Arc<dyn CatalogStore<PowerSupply>>,

    /// Cases
    pub pc_cases: Arc<dyn CatalogStore<PcCase>>,

    /// Prebuilt PCs
    pub pcs: Arc<dyn CatalogStore<Pc>>,

    /// Workstations
    pub workstations: Arc<dyn CatalogStore<Workstation>>,
}

impl CatalogStores {
    /// Stores backed by the `catalog_items` table.
    #[must_use]
    pub fn postgres(db: &Db) -> Self {
        Self {
            cpus: Arc::new(PgCatalogStore::<Cpu>::new(db.clone())),
            gpus: Arc::new(PgCatalogStore::<Gpu>::new(db.clone())),
            motherboards: Arc::new(PgCatalogStore::<Motherboard>::new(db.clone())),
            rams: Arc::new(PgCatalogStore::<Ram>::new(db.clone())),
            ssds: Arc::new(PgCatalogStore::<Ssd>::new(db.clone())),
            hdds: Arc::new(PgCatalogStore::<Hdd>::new(db.clone())),
            power_supplies: Arc::new(PgCatalogStore::<PowerSupply>::new(db.clone())),
            pc_cases: Arc::new(PgCatalogStore::<PcCase>::new(db.clone())),
            pcs: Arc::new(PgCatalogStore::<Pc>::new(db.clone())),
            workstations: Arc::new(PgCatalogStore::<Workstation>::new(db.clone())),
        }
    }

    /// Empty in-process stores.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            cpus: Arc::new(MemoryCatalogStore::<Cpu>::new()),
            gpus: Arc::new(MemoryCatalogStore::<Gpu>::new()),
            motherboards: Arc::new(MemoryCatalogStore::<Motherboard>::new()),
            rams: Arc::new(MemoryCatalogStore::<Ram>::new()),
            ssds: Arc::new(MemoryCatalogStore::<Ssd>::new()),
            hdds: Arc::new(MemoryCatalogStore::<Hdd>::new()),
            power_supplies: Arc::new(MemoryCatalogStore::<PowerSupply>::new()),
            pc_cases: Arc::new(MemoryCatalogStore::<PcCase>::new()),
            pcs: Arc::new(MemoryCatalogStore::<Pc>::new()),
            workstations: Arc::new(MemoryCatalogStore::<Workstation>::new()),
        }
    }
}

impl Debug for CatalogStores {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CatalogStores").finish_non_exhaustive()
    }
}
