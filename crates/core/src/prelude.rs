//! Prelude
//!
//! The types most callers need to work with the catalog.

pub use crate::{
    builds::{NewPc, NewWorkstation, Pc, Workstation},
    catalog::{CatalogItem, Category, HardwareError, HardwareSpec, NameMap, names_with_prices},
    configurator::{BuildQuote, ConfiguratorComponents},
    derivation::DerivationError,
    hardware::{
        Attributes, Cpu, Gpu, Hardware, Hdd, Motherboard, NewHardware, PcCase, PowerSupply, Ram,
        Ssd,
    },
    ids::ItemId,
    recommendation::{MalformedResponse, RecommendationRequest},
    specs::{Multiplicity, Specs, SpecsForEnergyConsumption, SpecsIds, SpecsIdsForEnergyConsumption},
};
