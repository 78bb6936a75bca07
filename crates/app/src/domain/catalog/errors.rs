//! Catalog errors.

use partsmith::catalog::HardwareError;
use thiserror::Error;

use crate::{domain::specs::ResolveError, photos::PhotoUploadError};

/// Catalog store error variants.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}

/// Catalog service error variants.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// The item does not exist.
    #[error("item not found")]
    NotFound,

    /// The draft failed validation.
    #[error("invalid data: {0}")]
    InvalidData(#[from] HardwareError),

    /// The draft's component ids could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Storing the photo failed.
    #[error("photo upload failed")]
    Upload(#[from] PhotoUploadError),

    /// Reading or writing the catalog failed.
    #[error("catalog storage failed")]
    Store(#[from] CatalogError),
}
