//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use partsmith::{
    builds::{Pc, Workstation},
    hardware::{Cpu, Gpu, Hdd, Motherboard, PcCase, PowerSupply, Ram, Ssd},
};
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        catalog::{
            BuildAssembler, CatalogService, CatalogStores, HardwareAssembler, StoreCatalogService,
        },
        configurator::{CatalogConfiguratorService, ConfiguratorService},
        specs::SpecsResolver,
    },
    photos::PhotoUploader,
    recommender::Recommender,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub cpus: Arc<dyn CatalogService<Cpu>>,
    pub gpus: Arc<dyn CatalogService<Gpu>>,
    pub motherboards: Arc<dyn CatalogService<Motherboard>>,
    pub rams: Arc<dyn CatalogService<Ram>>,
    pub ssds: Arc<dyn CatalogService<Ssd>>,
    pub hdds: Arc<dyn CatalogService<Hdd>>,
    pub power_supplies: Arc<dyn CatalogService<PowerSupply>>,
    pub pc_cases: Arc<dyn CatalogService<PcCase>>,
    pub pcs: Arc<dyn CatalogService<Pc>>,
    pub workstations: Arc<dyn CatalogService<Workstation>>,
    pub configurator: Arc<dyn ConfiguratorService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        recommender: Arc<dyn Recommender>,
        photos: Arc<dyn PhotoUploader>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self::from_stores(
            CatalogStores::postgres(&db),
            recommender,
            photos,
        ))
    }

    /// Wire every service over the given stores.
    #[must_use]
    pub fn from_stores(
        stores: CatalogStores,
        recommender: Arc<dyn Recommender>,
        photos: Arc<dyn PhotoUploader>,
    ) -> Self {
        let hardware = Arc::new(HardwareAssembler);
        let builds = Arc::new(BuildAssembler::new(SpecsResolver::new(stores.clone())));

        Self {
            cpus: Arc::new(StoreCatalogService::new(
                stores.cpus.clone(),
                hardware.clone(),
                photos.clone(),
            )),
            gpus: Arc::new(StoreCatalogService::new(
                stores.gpus.clone(),
                hardware.clone(),
                photos.clone(),
            )),
            motherboards: Arc::new(StoreCatalogService::new(
                stores.motherboards.clone(),
                hardware.clone(),
                photos.clone(),
            )),
            rams: Arc::new(StoreCatalogService::new(
                stores.rams.clone(),
                hardware.clone(),
                photos.clone(),
            )),
            ssds: Arc::new(StoreCatalogService::new(
                stores.ssds.clone(),
                hardware.clone(),
                photos.clone(),
            )),
            hdds: Arc::new(StoreCatalogService::new(
                stores.hdds.clone(),
                hardware.clone(),
                photos.clone(),
            )),
            power_supplies: Arc::new(StoreCatalogService::new(
                stores.power_supplies.clone(),
                hardware.clone(),
                photos.clone(),
            )),
            pc_cases: Arc::new(StoreCatalogService::new(
                stores.pc_cases.clone(),
                hardware,
                photos.clone(),
            )),
            pcs: Arc::new(StoreCatalogService::new(
                stores.pcs.clone(),
                builds.clone(),
                photos.clone(),
            )),
            workstations: Arc::new(StoreCatalogService::new(
                stores.workstations.clone(),
                builds,
                photos,
            )),
            configurator: Arc::new(CatalogConfiguratorService::new(stores, recommender)),
        }
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
