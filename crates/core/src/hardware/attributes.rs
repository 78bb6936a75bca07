//! Category attributes

use serde::{Deserialize, Serialize};

use crate::{catalog::Category, hardware::Attributes};

/// Processor attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuAttributes {
    /// Benchmark performance score
    pub performance: u32,

    /// Power draw in watts
    pub energy_consumption: u32,

    /// Socket the processor fits, e.g. `"AM5"`
    pub socket: String,
}

impl Attributes for CpuAttributes {
    const CATEGORY: Category = Category::Cpu;
}

/// Graphics card attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuAttributes {
    /// Benchmark performance score
    pub performance: u32,

    /// Power draw in watts
    pub energy_consumption: u32,
}

impl Attributes for GpuAttributes {
    const CATEGORY: Category = Category::Gpu;
}

/// Memory attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamAttributes {
    /// Memory generation, e.g. `"DDR5"`
    #[serde(rename = "type")]
    pub memory_type: String,

    /// Power draw in watts
    pub energy_consumption: u32,

    /// Size in gigabytes
    pub memory_size: u32,
}

impl Attributes for RamAttributes {
    const CATEGORY: Category = Category::Ram;
}

/// Solid state drive attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsdAttributes {
    /// Capacity in gigabytes
    pub capacity: u32,

    /// Power draw in watts
    pub energy_consumption: u32,
}

impl Attributes for SsdAttributes {
    const CATEGORY: Category = Category::Ssd;
}

/// Hard disk drive attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HddAttributes {
    /// Capacity in gigabytes
    pub capacity: u32,

    /// Power draw in watts
    pub energy_consumption: u32,
}

impl Attributes for HddAttributes {
    const CATEGORY: Category = Category::Hdd;
}

/// Motherboard attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotherboardAttributes {
    /// Power draw in watts
    pub energy_consumption: u32,

    /// CPU socket, compared case-sensitively with [`CpuAttributes::socket`]
    pub socket: String,
}

impl Attributes for MotherboardAttributes {
    const CATEGORY: Category = Category::Motherboard;
}

/// Power supply attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerSupplyAttributes {
    /// Rated output in watts
    pub power: u32,
}

impl Attributes for PowerSupplyAttributes {
    const CATEGORY: Category = Category::PowerSupply;
}

/// Computer case attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcCaseAttributes {
    /// Free-form dimensions, e.g. `"445 x 230 x 464 mm"`
    pub dimensions: String,
}

impl Attributes for PcCaseAttributes {
    const CATEGORY: Category = Category::PcCase;
}
