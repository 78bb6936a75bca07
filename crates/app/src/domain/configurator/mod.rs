//! Configurator

pub mod errors;
pub mod service;

pub use errors::ConfiguratorServiceError;
pub use service::*;
