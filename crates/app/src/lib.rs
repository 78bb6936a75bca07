//! Shared application services, persistence and outbound clients.

pub mod context;
pub mod database;
pub mod domain;
pub mod photos;
pub mod recommender;
pub mod seed;

#[cfg(test)]
mod test;
