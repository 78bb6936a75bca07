//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use partsmith::fixtures;
use partsmith_app::{
    context::AppContext,
    domain::{
        catalog::{CatalogError, CatalogStore as _, CatalogStores},
        configurator::MockConfiguratorService,
    },
    photos::MockPhotoUploader,
    recommender::MockRecommender,
};

use crate::state::State;

pub(crate) fn strict_recommender() -> MockRecommender {
    let mut recommender = MockRecommender::new();

    recommender.expect_complete().never();

    recommender
}

pub(crate) fn strict_photos() -> MockPhotoUploader {
    let mut photos = MockPhotoUploader::new();

    photos.expect_upload().never();

    photos
}

/// Stores holding every component of [`fixtures::specs`].
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

pub(crate) fn app_with_photos(stores: CatalogStores, photos: MockPhotoUploader) -> AppContext {
    AppContext::from_stores(stores, Arc::new(strict_recommender()), Arc::new(photos))
}

pub(crate) fn app(stores: CatalogStores) -> AppContext {
    app_with_photos(stores, strict_photos())
}

pub(crate) fn app_with_configurator(configurator: MockConfiguratorService) -> AppContext {
    let mut app = app(CatalogStores::in_memory());

    app.configurator = Arc::new(configurator);

    app
}

pub(crate) fn service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::new(app).shared()))
            .push(route),
    )
}
