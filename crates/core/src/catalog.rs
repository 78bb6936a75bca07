//! Catalog

use std::{
    collections::BTreeMap,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::{derivation::DerivationError, ids::ItemId};

/// Map of item id to its `"<name> ($<price>)"` display string.
pub type NameMap = BTreeMap<String, String>;

/// Errors raised while validating catalog data.
#[derive(Debug, Error, PartialEq)]
pub enum HardwareError {
    /// Prices must be zero or greater.
    #[error("price must not be negative, got {0}")]
    NegativePrice(Decimal),

    /// Ratings must be finite numbers.
    #[error("rating must be a finite number")]
    InvalidRating,

    /// A build's derived price or energy consumption is out of range.
    #[error(transparent)]
    Derivation(#[from] DerivationError),
}

/// Hardware categories, in the fixed order used by spec ids, configurator
/// listings and recommendation replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Processor
    Cpu,

    /// Graphics card
    Gpu,

    /// Motherboard
    Motherboard,

    /// Memory
    Ram,

    /// Solid state drive
    Ssd,

    /// Hard disk drive
    Hdd,

    /// Power supply unit
    PowerSupply,

    /// Computer case
    PcCase,
}

impl Category {
    /// Every category, in positional order.
    pub const ALL: [Category; 8] = [
        Category::Cpu,
        Category::Gpu,
        Category::Motherboard,
        Category::Ram,
        Category::Ssd,
        Category::Hdd,
        Category::PowerSupply,
        Category::PcCase,
    ];

    /// Storage collection and route name for the category.
    pub const fn collection(self) -> &'static str {
        match self {
            Category::Cpu => "cpus",
            Category::Gpu => "gpus",
            Category::Motherboard => "motherboards",
            Category::Ram => "rams",
            Category::Ssd => "ssds",
            Category::Hdd => "hdds",
            Category::PowerSupply => "power_supplies",
            Category::PcCase => "pc_cases",
        }
    }

    /// Human readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Gpu => "GPU",
            Category::Motherboard => "Motherboard",
            Category::Ram => "RAM",
            Category::Ssd => "SSD",
            Category::Hdd => "HDD",
            Category::PowerSupply => "Power supply",
            Category::PcCase => "PC case",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Name, description, price and rating shared by every catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareSpec {
    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Price in currency units
    pub price: Decimal,

    /// Customer rating, usually between 0.0 and 5.0
    pub rating: f64,
}

impl HardwareSpec {
    /// Checks the price is non-negative and the rating is a finite number.
    ///
    /// # Errors
    ///
    /// - [`HardwareError::NegativePrice`]: the price is below zero.
    /// - [`HardwareError::InvalidRating`]: the rating is `NaN` or infinite.
    pub fn validate(&self) -> Result<(), HardwareError> {
        if self.price < Decimal::ZERO {
            return Err(HardwareError::NegativePrice(self.price));
        }

        if !self.rating.is_finite() {
            return Err(HardwareError::InvalidRating);
        }

        Ok(())
    }

    /// Renders `"<name> ($<price>)"`.
    pub fn display_name(&self) -> String {
        format!("{} (${})", self.name, self.price)
    }
}

/// Anything stored in a catalog collection: the eight hardware categories
/// and the PC/Workstation builds composed from them.
pub trait CatalogItem:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Storage collection name.
    const COLLECTION: &'static str;

    /// Client supplied data used to create or replace an item.
    type Draft: Clone + Debug + PartialEq + DeserializeOwned + Send + Sync + 'static;

    /// The item's id.
    fn id(&self) -> &ItemId<Self>;

    /// The item's name, description, price and rating.
    fn spec(&self) -> &HardwareSpec;

    /// Photo URLs, most recent first.
    fn photos(&self) -> &[String];

    /// Mutable access to the photo URLs.
    fn photos_mut(&mut self) -> &mut Vec<String>;

    /// Display string used by name/price listings.
    fn display_name(&self) -> String {
        self.spec().display_name()
    }

    /// Adds a photo URL in front of the existing ones.
    fn prepend_photo(&mut self, url: String) {
        self.photos_mut().insert(0, url);
    }
}

/// Renders every item as an id → `"<name> ($<price>)"` entry.
pub fn names_with_prices<'a, T: CatalogItem>(items: impl IntoIterator<Item = &'a T>) -> NameMap {
    items
        .into_iter()
        .map(|item| (item.id().to_string(), item.display_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn spec(price: Decimal, rating: f64) -> HardwareSpec {
        HardwareSpec {
            name: "Ryzen 7".to_string(),
            description: "8 cores".to_string(),
            price,
            rating,
        }
    }

    #[test]
    fn display_name_includes_price() {
        assert_eq!(
            spec(Decimal::new(29999, 2), 4.5).display_name(),
            "Ryzen 7 ($299.99)"
        );
    }

    #[test]
    fn negative_price_is_rejected() {
        assert_eq!(
            spec(Decimal::from(-1), 4.5).validate(),
            Err(HardwareError::NegativePrice(Decimal::from(-1)))
        );
    }

    #[test]
    fn zero_price_is_accepted() {
        assert_eq!(spec(Decimal::ZERO, 0.0).validate(), Ok(()));
    }

    #[test]
    fn non_finite_rating_is_rejected() {
        assert_eq!(
            spec(Decimal::ONE, f64::NAN).validate(),
            Err(HardwareError::InvalidRating)
        );
    }

    #[test]
    fn categories_are_in_positional_order() {
        let collections: Vec<&str> = Category::ALL.iter().map(|c| c.collection()).collect();

        assert_eq!(
            collections,
            [
                "cpus",
                "gpus",
                "motherboards",
                "rams",
                "ssds",
                "hdds",
                "power_supplies",
                "pc_cases"
            ]
        );
    }
}
