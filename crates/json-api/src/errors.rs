//! Service error to HTTP status mapping

use salvo::http::StatusError;
use tracing::{error, warn};

use partsmith_app::{
    domain::{
        catalog::CatalogServiceError, configurator::ConfiguratorServiceError, specs::ResolveError,
    },
    photos::PhotoUploadError,
    recommender::RecommenderError,
};

pub(crate) fn catalog_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::NotFound => StatusError::not_found().brief("Item not found"),
        CatalogServiceError::InvalidData(source) => StatusError::bad_request()
            .brief("Invalid item payload")
            .detail(source.to_string()),
        CatalogServiceError::Resolve(source) => resolve_status_error(source),
        CatalogServiceError::Upload(PhotoUploadError::NotConfigured) => {
            StatusError::service_unavailable().brief("Photo store is not configured")
        }
        CatalogServiceError::Upload(source) => {
            error!("failed to upload photo: {source}");

            StatusError::internal_server_error()
        }
        CatalogServiceError::Store(source) => {
            error!("catalog storage failed: {source:?}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn configurator_status_error(error: ConfiguratorServiceError) -> StatusError {
    match error {
        ConfiguratorServiceError::Resolve(source) => resolve_status_error(source),
        ConfiguratorServiceError::Derivation(source) => StatusError::bad_request()
            .brief("Build is out of range")
            .detail(source.to_string()),
        ConfiguratorServiceError::MalformedResponse(source) => {
            warn!("rejected recommendation reply: {source}");

            StatusError::bad_gateway()
                .brief("Malformed recommendation")
                .detail(source.to_string())
        }
        ConfiguratorServiceError::Recommender(RecommenderError::NotConfigured) => {
            StatusError::service_unavailable().brief("Recommender is not configured")
        }
        ConfiguratorServiceError::Recommender(source) => {
            error!("recommender failed: {source}");

            StatusError::bad_gateway().brief("Recommender unavailable")
        }
        ConfiguratorServiceError::Store(source) => {
            error!("catalog storage failed: {source:?}");

            StatusError::internal_server_error()
        }
    }
}

fn resolve_status_error(error: ResolveError) -> StatusError {
    match error {
        ResolveError::InvalidArgument(_) => StatusError::bad_request()
            .brief("Missing component ids")
            .detail(error.to_string()),
        ResolveError::NotFound { .. } => StatusError::not_found()
            .brief("Component not found")
            .detail(error.to_string()),
        ResolveError::Store(source) => {
            error!("catalog storage failed while resolving specs: {source:?}");

            StatusError::internal_server_error()
        }
    }
}
