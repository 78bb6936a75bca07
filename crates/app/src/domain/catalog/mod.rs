//! Catalog

pub mod assembler;
pub mod errors;
pub mod memory;
pub mod postgres;
pub mod service;
pub mod store;

pub use assembler::*;
pub use errors::{CatalogError, CatalogServiceError};
pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;
pub use service::*;
pub use store::{CatalogStore, CatalogStores};
