//! Hardware

use std::fmt::Debug;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    catalog::{CatalogItem, Category, HardwareError, HardwareSpec},
    ids::ItemId,
};

pub mod attributes;

pub use attributes::*;

/// Category specific attributes of a hardware item.
pub trait Attributes:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The category these attributes describe.
    const CATEGORY: Category;
}

/// A hardware item of the category described by `A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "A: Attributes")]
pub struct Hardware<A> {
    /// Item id
    pub id: ItemId<Hardware<A>>,

    /// Name, description, price and rating
    #[serde(rename = "hardware_spec")]
    pub spec: HardwareSpec,

    /// Category specific attributes
    #[serde(flatten)]
    pub attributes: A,

    /// Photo URLs, most recent first
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Data used to create or replace a hardware item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "A: Attributes")]
pub struct NewHardware<A> {
    /// Name, description, price and rating
    pub hardware_spec: HardwareSpec,

    /// Category specific attributes
    #[serde(flatten)]
    pub attributes: A,
}

impl<A: Attributes> Hardware<A> {
    /// Builds an item with no photos from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns a [`HardwareError`] when the draft's spec is invalid.
    pub fn assemble(id: ItemId<Self>, draft: NewHardware<A>) -> Result<Self, HardwareError> {
        draft.hardware_spec.validate()?;

        Ok(Self {
            id,
            spec: draft.hardware_spec,
            attributes: draft.attributes,
            photos: Vec::new(),
        })
    }

    /// The category of this item.
    pub const fn category(&self) -> Category {
        A::CATEGORY
    }
}

impl<A: Attributes> CatalogItem for Hardware<A> {
    const COLLECTION: &'static str = A::CATEGORY.collection();

    type Draft = NewHardware<A>;

    fn id(&self) -> &ItemId<Self> {
        &self.id
    }

    fn spec(&self) -> &HardwareSpec {
        &self.spec
    }

    fn photos(&self) -> &[String] {
        &self.photos
    }

    fn photos_mut(&mut self) -> &mut Vec<String> {
        &mut self.photos
    }
}

/// Processor
pub type Cpu = Hardware<CpuAttributes>;

/// Graphics card
pub type Gpu = Hardware<GpuAttributes>;

/// Motherboard
pub type Motherboard = Hardware<MotherboardAttributes>;

/// Memory
pub type Ram = Hardware<RamAttributes>;

/// Solid state drive
pub type Ssd = Hardware<SsdAttributes>;

/// Hard disk drive
pub type Hdd = Hardware<HddAttributes>;

/// Power supply unit
pub type PowerSupply = Hardware<PowerSupplyAttributes>;

/// Computer case
pub type PcCase = Hardware<PcCaseAttributes>;

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn draft() -> NewHardware<CpuAttributes> {
        NewHardware {
            hardware_spec: HardwareSpec {
                name: "Ryzen 5 7600".to_string(),
                description: "6 cores".to_string(),
                price: Decimal::from(229),
                rating: 4.7,
            },
            attributes: CpuAttributes {
                performance: 27_000,
                energy_consumption: 65,
                socket: "AM5".to_string(),
            },
        }
    }

    #[test]
    fn assemble_starts_without_photos() -> TestResult {
        let cpu = Cpu::assemble(ItemId::new("cpu-1"), draft())?;

        assert_eq!(cpu.id.as_str(), "cpu-1");
        assert!(cpu.photos.is_empty());
        assert_eq!(cpu.category(), Category::Cpu);

        Ok(())
    }

    #[test]
    fn assemble_rejects_negative_price() {
        let mut draft = draft();
        draft.hardware_spec.price = Decimal::from(-5);

        assert!(matches!(
            Cpu::assemble(ItemId::new("cpu-1"), draft),
            Err(HardwareError::NegativePrice(_))
        ));
    }

    #[test]
    fn prepend_photo_puts_newest_first_and_keeps_duplicates() -> TestResult {
        let mut cpu = Cpu::assemble(ItemId::new("cpu-1"), draft())?;

        cpu.prepend_photo("a.png".to_string());
        cpu.prepend_photo("b.png".to_string());
        cpu.prepend_photo("a.png".to_string());

        assert_eq!(cpu.photos(), ["a.png", "b.png", "a.png"]);

        Ok(())
    }

    #[test]
    fn attributes_are_flattened_in_json() -> TestResult {
        let cpu = Cpu::assemble(ItemId::new("cpu-1"), draft())?;

        let value = serde_json::to_value(&cpu)?;

        assert_eq!(value["socket"], json!("AM5"));
        assert_eq!(value["energy_consumption"], json!(65));
        assert_eq!(value["hardware_spec"]["name"], json!("Ryzen 5 7600"));

        let decoded: Cpu = serde_json::from_value(value)?;

        assert_eq!(decoded, cpu);

        Ok(())
    }

    #[test]
    fn collections_follow_categories() {
        assert_eq!(Cpu::COLLECTION, "cpus");
        assert_eq!(PowerSupply::COLLECTION, "power_supplies");
        assert_eq!(PcCase::COLLECTION, "pc_cases");
    }
}
