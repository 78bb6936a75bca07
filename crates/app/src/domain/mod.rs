//! Partsmith Domain Concerns

pub mod catalog;
pub mod configurator;
pub mod specs;
