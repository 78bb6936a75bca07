//! Builds
//!
//! PCs and workstations are assembled from a resolved [`Specs`] snapshot. Their
//! price and energy consumption are derived once, at assembly, and stored with
//! the build.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{CatalogItem, HardwareError, HardwareSpec},
    energy::{total_energy_consumption, workstation_energy_consumption},
    ids::ItemId,
    pricing::workstation_total_price,
    specs::{Multiplicity, Specs, SpecsIds, one},
};

/// A prebuilt PC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pc {
    /// Build id
    pub id: ItemId<Pc>,

    /// Name, description, derived price and rating
    pub hardware_spec: HardwareSpec,

    /// Resolved components
    pub specs: Specs,

    /// Derived energy consumption in watts
    pub energy_consumption: u32,

    /// Photo URLs, most recent first
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Data used to create or replace a PC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPc {
    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Customer rating
    pub rating: f64,

    /// Components to resolve
    #[serde(default)]
    pub specs_ids: Option<SpecsIds>,
}

impl Pc {
    /// Derives price and energy consumption from `specs`.
    ///
    /// # Errors
    ///
    /// - [`HardwareError::InvalidRating`]: the rating is not finite.
    /// - [`HardwareError::Derivation`]: the price or energy consumption is out
    ///   of range.
    pub fn assemble(id: ItemId<Self>, draft: NewPc, specs: Specs) -> Result<Self, HardwareError> {
        let hardware_spec = derived_spec(
            draft.name,
            draft.description,
            draft.rating,
            &specs,
            Multiplicity::SINGLE,
        )?;

        Ok(Self {
            id,
            hardware_spec,
            energy_consumption: total_energy_consumption(&specs.for_energy())?,
            specs,
            photos: Vec::new(),
        })
    }
}

impl CatalogItem for Pc {
    const COLLECTION: &'static str = "pcs";

    type Draft = NewPc;

    fn id(&self) -> &ItemId<Self> {
        &self.id
    }

    fn spec(&self) -> &HardwareSpec {
        &self.hardware_spec
    }

    fn photos(&self) -> &[String] {
        &self.photos
    }

    fn photos_mut(&mut self) -> &mut Vec<String> {
        &mut self.photos
    }
}

/// A workstation: a build that may carry several CPUs and GPUs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workstation {
    /// Build id
    pub id: ItemId<Workstation>,

    /// Name, description, derived price and rating
    pub hardware_spec: HardwareSpec,

    /// Resolved components
    pub specs: Specs,

    /// Derived energy consumption in watts
    pub energy_consumption: u32,

    /// Number of processors
    pub cpu_number: NonZeroU32,

    /// Number of graphics cards
    pub gpu_number: NonZeroU32,

    /// Photo URLs, most recent first
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Data used to create or replace a workstation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkstation {
    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Customer rating
    pub rating: f64,

    /// Number of processors, 1 when omitted
    #[serde(default = "one")]
    pub cpu_number: NonZeroU32,

    /// Number of graphics cards, 1 when omitted
    #[serde(default = "one")]
    pub gpu_number: NonZeroU32,

    /// Components to resolve
    #[serde(default)]
    pub specs_ids: Option<SpecsIds>,
}

impl NewWorkstation {
    /// CPU and GPU counts of the draft.
    pub const fn multiplicity(&self) -> Multiplicity {
        Multiplicity::new(self.cpu_number, self.gpu_number)
    }
}

impl Workstation {
    /// Derives price and energy consumption from `specs`, scaled by the
    /// draft's CPU and GPU counts.
    ///
    /// # Errors
    ///
    /// - [`HardwareError::InvalidRating`]: the rating is not finite.
    /// - [`HardwareError::Derivation`]: the scaled price or energy consumption
    ///   is out of range.
    pub fn assemble(
        id: ItemId<Self>,
        draft: NewWorkstation,
        specs: Specs,
    ) -> Result<Self, HardwareError> {
        let multiplicity = draft.multiplicity();

        let hardware_spec = derived_spec(
            draft.name,
            draft.description,
            draft.rating,
            &specs,
            multiplicity,
        )?;

        Ok(Self {
            id,
            hardware_spec,
            energy_consumption: workstation_energy_consumption(&specs.for_energy(), multiplicity)?,
            cpu_number: multiplicity.cpu_number,
            gpu_number: multiplicity.gpu_number,
            specs,
            photos: Vec::new(),
        })
    }

    /// CPU and GPU counts of the workstation.
    pub const fn multiplicity(&self) -> Multiplicity {
        Multiplicity::new(self.cpu_number, self.gpu_number)
    }
}

impl CatalogItem for Workstation {
    const COLLECTION: &'static str = "workstations";

    type Draft = NewWorkstation;

    fn id(&self) -> &ItemId<Self> {
        &self.id
    }

    fn spec(&self) -> &HardwareSpec {
        &self.hardware_spec
    }

    fn photos(&self) -> &[String] {
        &self.photos
    }

    fn photos_mut(&mut self) -> &mut Vec<String> {
        &mut self.photos
    }
}

fn derived_spec(
    name: String,
    description: String,
    rating: f64,
    specs: &Specs,
    multiplicity: Multiplicity,
) -> Result<HardwareSpec, HardwareError> {
    let spec = HardwareSpec {
        name,
        description,
        price: workstation_total_price(specs, multiplicity)?,
        rating,
    };

    spec.validate()?;

    Ok(spec)
}
