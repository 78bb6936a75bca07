//! Catalog seeding.
//!
//! Loads a JSON document holding one array of drafts per hardware category:
//!
//! ```json
//! { "cpus": [{ "hardware_spec": { ... }, "performance": 27000, ... }], "gpus": [] }
//! ```
//!
//! Categories may be omitted. Every draft is stored under a fresh id.

use std::sync::Arc;

use partsmith::{
    catalog::{CatalogItem, HardwareError},
    hardware::{
        Attributes, CpuAttributes, GpuAttributes, Hardware, HddAttributes, MotherboardAttributes,
        NewHardware, PcCaseAttributes, PowerSupplyAttributes, RamAttributes, SsdAttributes,
    },
    ids::ItemId,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::catalog::{CatalogError, CatalogStore, CatalogStores};

/// Seed error variants.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed document is not valid JSON for the catalog.
    #[error("invalid seed document")]
    Document(#[from] serde_json::Error),

    /// A draft failed validation.
    #[error("invalid {collection} entry: {source}")]
    InvalidData {
        /// Collection the draft belongs to
        collection: &'static str,

        /// Validation failure
        source: HardwareError,
    },

    /// Writing the catalog failed.
    #[error("catalog storage failed")]
    Store(#[from] CatalogError),
}

/// Hardware drafts to load, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSeed {
    /// Processors
    pub cpus: Vec<NewHardware<CpuAttributes>>,

    /// Graphics cards
    pub gpus: Vec<NewHardware<GpuAttributes>>,

    /// Motherboards
    pub motherboards: Vec<NewHardware<MotherboardAttributes>>,

    /// Memory
    pub rams: Vec<NewHardware<RamAttributes>>,

    /// Solid state drives
    pub ssds: Vec<NewHardware<SsdAttributes>>,

    /// Hard disk drives
    pub hdds: Vec<NewHardware<HddAttributes>>,

    /// Power supplies
    pub power_supplies: Vec<NewHardware<PowerSupplyAttributes>>,

    /// Cases
    pub pc_cases: Vec<NewHardware<PcCaseAttributes>>,
}

impl CatalogSeed {
    /// Parses a seed document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not a valid seed.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Stores every draft, returning how many items were created.
    ///
    /// Drafts are validated per category before that category is written.
    ///
    /// # Errors
    ///
    /// Returns an error when a draft is invalid or a write fails.
    pub async fn load(self, stores: &CatalogStores) -> Result<usize, SeedError> {
        let mut created = 0;

        created += load_collection(&stores.cpus, self.cpus).await?;
        created += load_collection(&stores.gpus, self.gpus).await?;
        created += load_collection(&stores.motherboards, self.motherboards).await?;
        created += load_collection(&stores.rams, self.rams).await?;
        created += load_collection(&stores.ssds, self.ssds).await?;
        created += load_collection(&stores.hdds, self.hdds).await?;
        created += load_collection(&stores.power_supplies, self.power_supplies).await?;
        created += load_collection(&stores.pc_cases, self.pc_cases).await?;

        Ok(created)
    }
}

async fn load_collection<A: Attributes>(
    store: &Arc<dyn CatalogStore<Hardware<A>>>,
    drafts: Vec<NewHardware<A>>,
) -> Result<usize, SeedError> {
    let items = drafts
        .into_iter()
        .map(|draft| Hardware::assemble(ItemId::generate(), draft))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| SeedError::InvalidData {
            collection: Hardware::<A>::COLLECTION,
            source,
        })?;

    let count = items.len();

    for item in items {
        store.save(item).await?;
    }

    if count > 0 {
        info!(collection = Hardware::<A>::COLLECTION, count, "seeded catalog items");
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const SEED: &str = r#"{
        "cpus": [{
            "hardware_spec": { "name": "Ryzen 5 7600", "description": "6 cores", "price": 229, "rating": 4.7 },
            "performance": 27000,
            "energy_consumption": 65,
            "socket": "AM5"
        }],
        "motherboards": [
            {
                "hardware_spec": { "name": "B650 Tomahawk", "description": "ATX", "price": 150, "rating": 4.5 },
                "energy_consumption": 25,
                "socket": "AM5"
            },
            {
                "hardware_spec": { "name": "Z790 Aorus", "description": "ATX", "price": "220.50", "rating": 4.4 },
                "energy_consumption": 30,
                "socket": "LGA1700"
            }
        ]
    }"#;

    #[tokio::test]
    async fn seed_creates_items_under_fresh_ids() -> TestResult {
        let stores = CatalogStores::in_memory();

        let created = CatalogSeed::from_json(SEED)?.load(&stores).await?;

        assert_eq!(created, 3);
        assert_eq!(stores.cpus.list_all().await?.len(), 1);
        assert_eq!(stores.motherboards.list_all().await?.len(), 2);
        assert!(stores.gpus.list_all().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn invalid_drafts_abort_their_collection() -> TestResult {
        let stores = CatalogStores::in_memory();
        let seed = CatalogSeed::from_json(
            r#"{ "pc_cases": [{
                "hardware_spec": { "name": "Broken", "description": "", "price": -1, "rating": 1.0 },
                "dimensions": "1 x 1 x 1"
            }] }"#,
        )?;

        let result = seed.load(&stores).await;

        assert!(matches!(
            result,
            Err(SeedError::InvalidData { collection: "pc_cases", .. })
        ));
        assert!(stores.pc_cases.list_all().await?.is_empty());

        Ok(())
    }

    #[test]
    fn unknown_categories_are_rejected() {
        assert!(CatalogSeed::from_json(r#"{ "pcs": [] }"#).is_err());
    }
}
