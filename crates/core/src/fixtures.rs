//! Fixtures
//!
//! Small, hand-built catalog items for tests and local demos.

use rust_decimal::Decimal;

use crate::{
    catalog::HardwareSpec,
    hardware::{
        Cpu, CpuAttributes, Gpu, GpuAttributes, Hardware, Hdd, HddAttributes, Motherboard,
        MotherboardAttributes, PcCase, PcCaseAttributes, PowerSupply, PowerSupplyAttributes, Ram,
        RamAttributes, Ssd, SsdAttributes,
    },
    ids::ItemId,
    specs::Specs,
};

fn item<A>(id: &str, name: &str, price: i64, attributes: A) -> Hardware<A> {
    Hardware {
        id: ItemId::new(id),
        spec: HardwareSpec {
            name: name.to_string(),
            description: format!("{name} fixture"),
            price: Decimal::from(price),
            rating: 4.5,
        },
        attributes,
        photos: Vec::new(),
    }
}

/// A processor on the given socket.
pub fn cpu(id: &str, price: i64, energy_consumption: u32, socket: &str) -> Cpu {
    item(
        id,
        "Ryzen 7 7700",
        price,
        CpuAttributes {
            performance: 29_000,
            energy_consumption,
            socket: socket.to_string(),
        },
    )
}

/// A graphics card.
pub fn gpu(id: &str, price: i64, energy_consumption: u32) -> Gpu {
    item(
        id,
        "Radeon RX 7800 XT",
        price,
        GpuAttributes {
            performance: 20_000,
            energy_consumption,
        },
    )
}

/// A motherboard on the given socket.
pub fn motherboard(id: &str, name: &str, price: i64, socket: &str) -> Motherboard {
    item(
        id,
        name,
        price,
        MotherboardAttributes {
            energy_consumption: 25,
            socket: socket.to_string(),
        },
    )
}

/// A 32 GB memory kit.
pub fn ram(id: &str, price: i64, energy_consumption: u32) -> Ram {
    item(
        id,
        "DDR5 32GB",
        price,
        RamAttributes {
            memory_type: "DDR5".to_string(),
            energy_consumption,
            memory_size: 32,
        },
    )
}

/// A 1 TB solid state drive.
pub fn ssd(id: &str, price: i64, energy_consumption: u32) -> Ssd {
    item(
        id,
        "NVMe 1TB",
        price,
        SsdAttributes {
            capacity: 1_000,
            energy_consumption,
        },
    )
}

/// A 2 TB hard disk drive.
pub fn hdd(id: &str, price: i64, energy_consumption: u32) -> Hdd {
    item(
        id,
        "Barracuda 2TB",
        price,
        HddAttributes {
            capacity: 2_000,
            energy_consumption,
        },
    )
}

/// A power supply with the given rating.
pub fn power_supply(id: &str, price: i64, power: u32) -> PowerSupply {
    item(id, "Focus 650W", price, PowerSupplyAttributes { power })
}

/// A mid tower case.
pub fn pc_case(id: &str, price: i64) -> PcCase {
    item(
        id,
        "Meshify C",
        price,
        PcCaseAttributes {
            dimensions: "453 x 217 x 440 mm".to_string(),
        },
    )
}

/// A complete build whose parts cost 1452 and draw 312 W.
pub fn specs() -> Specs {
    Specs {
        cpu: cpu("cpu-1", 300, 65, "AM5"),
        gpu: gpu("gpu-1", 500, 200),
        motherboard: motherboard("motherboard-1", "B650 Tomahawk", 150, "AM5"),
        ram: ram("ram-1", 100, 5),
        ssd: ssd("ssd-1", 120, 5),
        hdd: hdd("hdd-1", 60, 12),
        power_supply: power_supply("power-supply-1", 140, 650),
        pc_case: pc_case("pc-case-1", 82),
    }
}
