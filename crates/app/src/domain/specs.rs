//! Specs resolution.

use partsmith::{
    catalog::CatalogItem,
    ids::ItemId,
    specs::{Specs, SpecsForEnergyConsumption, SpecsIds, SpecsIdsForEnergyConsumption},
};
use thiserror::Error;
use tracing::debug;

use crate::domain::catalog::{CatalogError, CatalogStore, CatalogStores};

/// Specs resolution error variants.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The ids to resolve were not supplied.
    #[error("{0} must be provided")]
    InvalidArgument(&'static str),

    /// A referenced component does not exist.
    #[error("{collection} item '{id}' not found")]
    NotFound {
        /// Collection the id was looked up in
        collection: &'static str,

        /// The unresolved id
        id: String,
    },

    /// Reading the catalog failed.
    #[error("catalog storage failed")]
    Store(#[from] CatalogError),
}

/// Turns component ids into the components they reference.
#[derive(Debug, Clone)]
pub struct SpecsResolver {
    stores: CatalogStores,
}

impl SpecsResolver {
    #[must_use]
    pub fn new(stores: CatalogStores) -> Self {
        Self { stores }
    }

    /// Resolves all eight components.
    ///
    /// Lookups run in category order and stop at the first missing id.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidArgument`]: `ids` is `None`; no store is read.
    /// - [`ResolveError::NotFound`]: an id does not resolve.
    pub async fn resolve(&self, ids: Option<&SpecsIds>) -> Result<Specs, ResolveError> {
        let ids = ids.ok_or(ResolveError::InvalidArgument("specs_ids"))?;

        debug!(?ids, "resolving specs");

        Ok(Specs {
            cpu: fetch(&*self.stores.cpus, &ids.cpu).await?,
            gpu: fetch(&*self.stores.gpus, &ids.gpu).await?,
            motherboard: fetch(&*self.stores.motherboards, &ids.motherboard).await?,
            ram: fetch(&*self.stores.rams, &ids.ram).await?,
            ssd: fetch(&*self.stores.ssds, &ids.ssd).await?,
            hdd: fetch(&*self.stores.hdds, &ids.hdd).await?,
            power_supply: fetch(&*self.stores.power_supplies, &ids.power_supply).await?,
            pc_case: fetch(&*self.stores.pc_cases, &ids.pc_case).await?,
        })
    }

    /// Resolves the six power drawing components.
    ///
    /// # Errors
    ///
    /// Same as [`SpecsResolver::resolve`].
    pub async fn resolve_for_energy(
        &self,
        ids: Option<&SpecsIdsForEnergyConsumption>,
    ) -> Result<SpecsForEnergyConsumption, ResolveError> {
        let ids = ids.ok_or(ResolveError::InvalidArgument("specs_ids"))?;

        Ok(SpecsForEnergyConsumption {
            cpu: fetch(&*self.stores.cpus, &ids.cpu).await?,
            gpu: fetch(&*self.stores.gpus, &ids.gpu).await?,
            motherboard: fetch(&*self.stores.motherboards, &ids.motherboard).await?,
            ram: fetch(&*self.stores.rams, &ids.ram).await?,
            ssd: fetch(&*self.stores.ssds, &ids.ssd).await?,
            hdd: fetch(&*self.stores.hdds, &ids.hdd).await?,
        })
    }
}

async fn fetch<T: CatalogItem>(
    store: &dyn CatalogStore<T>,
    id: &ItemId<T>,
) -> Result<T, ResolveError> {
    store
        .get(id)
        .await?
        .ok_or_else(|| ResolveError::NotFound {
            collection: T::COLLECTION,
            id: id.to_string(),
        })
}
