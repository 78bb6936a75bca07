//! Partsmith JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info, warn};

use partsmith_app::{
    context::AppContext,
    domain::catalog::CatalogStores,
    photos::{DisabledPhotoUploader, HttpPhotoUploader, PhotoUploader},
    recommender::{ChatCompletionsRecommender, DisabledRecommender, Recommender},
};

use crate::{
    config::ServerConfig,
    router::app_router,
    state::{Integrations, State},
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod catalog;
mod config;
mod configurator;
mod errors;
mod extensions;
mod healthcheck;
mod logging;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Partsmith JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = logging::init_subscriber(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let integrations = Integrations {
        recommendations: config.recommender.config().is_some(),
        photo_uploads: config.photos.config().is_some(),
    };

    let recommender: Arc<dyn Recommender> = match config.recommender.config() {
        Some(recommender) => Arc::new(ChatCompletionsRecommender::new(recommender)),
        None => {
            warn!("RECOMMENDER_BASE_URL not set, recommendations are disabled");

            Arc::new(DisabledRecommender)
        }
    };

    let photos: Arc<dyn PhotoUploader> = match config.photos.config() {
        Some(photos) => Arc::new(HttpPhotoUploader::new(photos)),
        None => {
            warn!("PHOTO_STORE_ENDPOINT not set, photo uploads are disabled");

            Arc::new(DisabledPhotoUploader)
        }
    };

    let app = match &config.database.database_url {
        Some(url) => match AppContext::from_database_url(url, recommender, photos).await {
            Ok(app) => app,
            Err(init_error) => {
                error!("failed to initialize app context: {init_error}");

                process::exit(1);
            }
        },
        None => {
            warn!("DATABASE_URL not set, the catalog is kept in memory");

            AppContext::from_stores(CatalogStores::in_memory(), recommender, photos)
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(
            State::new(app)
                .with_max_photo_bytes(config.server.max_photo_bytes)
                .with_integrations(integrations)
                .shared(),
        ))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(app_router());

    let doc = OpenApi::new("Partsmith API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();
    let grace = config.server.shutdown_grace();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
