//! Test support.

mod db;

use partsmith::fixtures;

use crate::domain::catalog::{CatalogError, CatalogStores};

pub(crate) use db::TestDb;

/// In-memory stores holding every component of [`fixtures::specs`].
pub(crate) async fn seeded_stores() -> Result<CatalogStores, CatalogError> {
    let stores = CatalogStores::in_memory();
    let specs = fixtures::specs();

    stores.cpus.save(specs.cpu).await?;
    stores.gpus.save(specs.gpu).await?;
    stores.motherboards.save(specs.motherboard).await?;
    stores.rams.save(specs.ram).await?;
    stores.ssds.save(specs.ssd).await?;
    stores.hdds.save(specs.hdd).await?;
    stores.power_supplies.save(specs.power_supply).await?;
    stores.pc_cases.save(specs.pc_case).await?;

    Ok(stores)
}
