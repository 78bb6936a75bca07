//! Configurator

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer, ser::SerializeSeq};

use crate::{
    catalog::{CatalogItem, Category, NameMap, names_with_prices},
    derivation::DerivationError,
    energy::workstation_energy_consumption,
    hardware::{Cpu, Motherboard, PowerSupply},
    pricing::workstation_total_price,
    specs::{Multiplicity, Specs},
};

/// Every catalog item rendered as id → `"<name> ($<price>)"`, one map per
/// category.
///
/// Serializes as a list of eight maps in [`Category::ALL`] order, so each
/// entry lines up with the matching [`SpecsIds`](crate::specs::SpecsIds)
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfiguratorComponents {
    /// Processors
    pub cpus: NameMap,

    /// Graphics cards
    pub gpus: NameMap,

    /// Motherboards
    pub motherboards: NameMap,

    /// Memory
    pub rams: NameMap,

    /// Solid state drives
    pub ssds: NameMap,

    /// Hard disk drives
    pub hdds: NameMap,

    /// Power supplies
    pub power_supplies: NameMap,

    /// Cases
    pub pc_cases: NameMap,
}

impl ConfiguratorComponents {
    /// The maps paired with their categories, in positional order.
    pub fn entries(&self) -> [(Category, &NameMap); 8] {
        [
            (Category::Cpu, &self.cpus),
            (Category::Gpu, &self.gpus),
            (Category::Motherboard, &self.motherboards),
            (Category::Ram, &self.rams),
            (Category::Ssd, &self.ssds),
            (Category::Hdd, &self.hdds),
            (Category::PowerSupply, &self.power_supplies),
            (Category::PcCase, &self.pc_cases),
        ]
    }

    /// The maps alone, in positional order.
    pub fn into_list(self) -> [NameMap; 8] {
        [
            self.cpus,
            self.gpus,
            self.motherboards,
            self.rams,
            self.ssds,
            self.hdds,
            self.power_supplies,
            self.pc_cases,
        ]
    }
}

impl Serialize for ConfiguratorComponents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut seq = serializer.serialize_seq(Some(entries.len()))?;

        for (_, names) in entries {
            seq.serialize_element(names)?;
        }

        seq.end()
    }
}

/// Motherboards whose socket equals `socket` exactly (case-sensitive).
pub fn motherboards_by_socket<'a>(
    motherboards: impl IntoIterator<Item = &'a Motherboard>,
    socket: &str,
) -> NameMap {
    names_with_prices(
        motherboards
            .into_iter()
            .filter(|motherboard| motherboard.attributes.socket == socket),
    )
}

/// Motherboards grouped by socket.
pub fn motherboards_grouped_by_socket<'a>(
    motherboards: impl IntoIterator<Item = &'a Motherboard>,
) -> BTreeMap<String, NameMap> {
    motherboards
        .into_iter()
        .fold(BTreeMap::new(), |mut sockets, motherboard| {
            sockets
                .entry(motherboard.attributes.socket.clone())
                .or_insert_with(NameMap::new)
                .insert(motherboard.id().to_string(), motherboard.display_name());

            sockets
        })
}

/// Whether the CPU fits the motherboard's socket. Advisory only: builds with
/// mismatched sockets can still be saved.
pub fn socket_compatible(cpu: &Cpu, motherboard: &Motherboard) -> bool {
    cpu.attributes.socket == motherboard.attributes.socket
}

/// Whether the power supply covers `energy_consumption` watts. Advisory only.
pub fn power_sufficient(power_supply: &PowerSupply, energy_consumption: u32) -> bool {
    power_supply.attributes.power >= energy_consumption
}

/// Price, energy and compatibility of a prospective build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildQuote {
    /// Retail price
    pub price: Decimal,

    /// Energy consumption in watts
    pub energy_consumption: u32,

    /// Whether the CPU and motherboard share a socket
    pub socket_compatible: bool,

    /// Whether the power supply covers the energy consumption
    pub power_sufficient: bool,
}

/// Quotes a build without saving it.
///
/// # Errors
///
/// Returns a [`DerivationError`] when the scaled price or energy consumption
/// is out of range.
pub fn quote(specs: &Specs, multiplicity: Multiplicity) -> Result<BuildQuote, DerivationError> {
    let energy_consumption = workstation_energy_consumption(&specs.for_energy(), multiplicity)?;

    Ok(BuildQuote {
        price: workstation_total_price(specs, multiplicity)?,
        energy_consumption,
        socket_compatible: socket_compatible(&specs.cpu, &specs.motherboard),
        power_sufficient: power_sufficient(&specs.power_supply, energy_consumption),
    })
}
