//! Partsmith
//!
//! Catalog and configurator domain for PC hardware: components, prebuilt PCs
//! and workstations, derived prices and energy figures, and the recommendation
//! prompt/reply format.

pub mod builds;
pub mod catalog;
pub mod configurator;
pub mod derivation;
pub mod energy;
pub mod fixtures;
pub mod hardware;
pub mod ids;
pub mod prelude;
pub mod pricing;
pub mod recommendation;
pub mod specs;
