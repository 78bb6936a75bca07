//! Specs

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::Category,
    hardware::{Cpu, Gpu, Hdd, Motherboard, PcCase, PowerSupply, Ram, Ssd},
    ids::ItemId,
};

/// One component id per category, in positional order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecsIds {
    /// Processor id
    pub cpu: ItemId<Cpu>,

    /// Graphics card id
    pub gpu: ItemId<Gpu>,

    /// Motherboard id
    pub motherboard: ItemId<Motherboard>,

    /// Memory id
    pub ram: ItemId<Ram>,

    /// Solid state drive id
    pub ssd: ItemId<Ssd>,

    /// Hard disk drive id
    pub hdd: ItemId<Hdd>,

    /// Power supply id
    pub power_supply: ItemId<PowerSupply>,

    /// Case id
    pub pc_case: ItemId<PcCase>,
}

impl SpecsIds {
    /// Maps eight positional ids onto the categories in [`Category::ALL`] order.
    pub fn from_positional(ids: [String; 8]) -> Self {
        let [cpu, gpu, motherboard, ram, ssd, hdd, power_supply, pc_case] = ids;

        Self {
            cpu: cpu.into(),
            gpu: gpu.into(),
            motherboard: motherboard.into(),
            ram: ram.into(),
            ssd: ssd.into(),
            hdd: hdd.into(),
            power_supply: power_supply.into(),
            pc_case: pc_case.into(),
        }
    }

    /// Pairs every id with its category, in positional order.
    pub fn entries(&self) -> [(Category, &str); 8] {
        [
            (Category::Cpu, self.cpu.as_str()),
            (Category::Gpu, self.gpu.as_str()),
            (Category::Motherboard, self.motherboard.as_str()),
            (Category::Ram, self.ram.as_str()),
            (Category::Ssd, self.ssd.as_str()),
            (Category::Hdd, self.hdd.as_str()),
            (Category::PowerSupply, self.power_supply.as_str()),
            (Category::PcCase, self.pc_case.as_str()),
        ]
    }

    /// The six power drawing component ids.
    #[must_use]
    pub fn for_energy(&self) -> SpecsIdsForEnergyConsumption {
        SpecsIdsForEnergyConsumption {
            cpu: self.cpu.clone(),
            gpu: self.gpu.clone(),
            motherboard: self.motherboard.clone(),
            ram: self.ram.clone(),
            ssd: self.ssd.clone(),
            hdd: self.hdd.clone(),
        }
    }
}

/// Component ids of the categories that draw power.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecsIdsForEnergyConsumption {
    /// Processor id
    pub cpu: ItemId<Cpu>,

    /// Graphics card id
    pub gpu: ItemId<Gpu>,

    /// Motherboard id
    pub motherboard: ItemId<Motherboard>,

    /// Memory id
    pub ram: ItemId<Ram>,

    /// Solid state drive id
    pub ssd: ItemId<Ssd>,

    /// Hard disk drive id
    pub hdd: ItemId<Hdd>,
}

/// A resolved build: one item per category.
///
/// This is a snapshot. Later catalog edits do not reach a `Specs` that has
/// already been resolved; a build picks them up only when its ids are resolved
/// again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specs {
    /// Processor
    pub cpu: Cpu,

    /// Graphics card
    pub gpu: Gpu,

    /// Motherboard
    pub motherboard: Motherboard,

    /// Memory
    pub ram: Ram,

    /// Solid state drive
    pub ssd: Ssd,

    /// Hard disk drive
    pub hdd: Hdd,

    /// Power supply
    pub power_supply: PowerSupply,

    /// Case
    pub pc_case: PcCase,
}

impl Specs {
    /// Ids of the resolved components.
    pub fn ids(&self) -> SpecsIds {
        SpecsIds {
            cpu: self.cpu.id.clone(),
            gpu: self.gpu.id.clone(),
            motherboard: self.motherboard.id.clone(),
            ram: self.ram.id.clone(),
            ssd: self.ssd.id.clone(),
            hdd: self.hdd.id.clone(),
            power_supply: self.power_supply.id.clone(),
            pc_case: self.pc_case.id.clone(),
        }
    }

    /// The power drawing subset of the build.
    #[must_use]
    pub fn for_energy(&self) -> SpecsForEnergyConsumption {
        SpecsForEnergyConsumption {
            cpu: self.cpu.clone(),
            gpu: self.gpu.clone(),
            motherboard: self.motherboard.clone(),
            ram: self.ram.clone(),
            ssd: self.ssd.clone(),
            hdd: self.hdd.clone(),
        }
    }
}

/// The resolved components that draw power. Power supply and case are left
/// out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecsForEnergyConsumption {
    /// Processor
    pub cpu: Cpu,

    /// Graphics card
    pub gpu: Gpu,

    /// Motherboard
    pub motherboard: Motherboard,

    /// Memory
    pub ram: Ram,

    /// Solid state drive
    pub ssd: Ssd,

    /// Hard disk drive
    pub hdd: Hdd,
}

/// How many CPUs and GPUs a build carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Multiplicity {
    /// Number of processors
    #[serde(default = "one")]
    pub cpu_number: NonZeroU32,

    /// Number of graphics cards
    #[serde(default = "one")]
    pub gpu_number: NonZeroU32,
}

impl Multiplicity {
    /// One CPU and one GPU, as in every PC.
    pub const SINGLE: Self = Self {
        cpu_number: NonZeroU32::MIN,
        gpu_number: NonZeroU32::MIN,
    };

    /// Creates a multiplicity from the given counts.
    pub const fn new(cpu_number: NonZeroU32, gpu_number: NonZeroU32) -> Self {
        Self {
            cpu_number,
            gpu_number,
        }
    }
}

impl Default for Multiplicity {
    fn default() -> Self {
        Self::SINGLE
    }
}

pub(crate) const fn one() -> NonZeroU32 {
    NonZeroU32::MIN
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn ids() -> SpecsIds {
        SpecsIds::from_positional(["a", "b", "c", "d", "e", "f", "g", "h"].map(ToString::to_string))
    }

    #[test]
    fn positional_ids_follow_category_order() {
        let ids = ids();

        let categories: Vec<Category> = ids.entries().iter().map(|(c, _)| *c).collect();
        let values: Vec<&str> = ids.entries().iter().map(|(_, id)| *id).collect();

        assert_eq!(categories, Category::ALL);
        assert_eq!(values, ["a", "b", "c", "d", "e", "f", "g", "h"]);
    }

    #[test]
    fn energy_ids_drop_power_supply_and_case() {
        let energy = ids().for_energy();

        assert_eq!(energy.cpu.as_str(), "a");
        assert_eq!(energy.hdd.as_str(), "f");
    }

    #[test]
    fn multiplicity_defaults_to_one_each() -> TestResult {
        let multiplicity: Multiplicity = serde_json::from_str("{}")?;

        assert_eq!(multiplicity, Multiplicity::SINGLE);

        let multiplicity: Multiplicity = serde_json::from_str(r#"{"cpu_number": 2}"#)?;

        assert_eq!(multiplicity.cpu_number.get(), 2);
        assert_eq!(multiplicity.gpu_number.get(), 1);

        Ok(())
    }

    #[test]
    fn multiplicity_rejects_zero() {
        assert!(serde_json::from_str::<Multiplicity>(r#"{"cpu_number": 0}"#).is_err());
    }
}
