//! Configurator service errors.

use partsmith::{derivation::DerivationError, recommendation::MalformedResponse};
use thiserror::Error;

use crate::{
    domain::{catalog::CatalogError, specs::ResolveError},
    recommender::RecommenderError,
};

/// Configurator service error variants.
#[derive(Debug, Error)]
pub enum ConfiguratorServiceError {
    /// The build's component ids could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The build's price or energy consumption is out of range.
    #[error(transparent)]
    Derivation(#[from] DerivationError),

    /// The language model reply did not hold one id per category.
    #[error("malformed recommendation: {0}")]
    MalformedResponse(#[from] MalformedResponse),

    /// The language model could not be reached.
    #[error("recommender failed")]
    Recommender(#[from] RecommenderError),

    /// Reading the catalog failed.
    #[error("catalog storage failed")]
    Store(#[from] CatalogError),
}
