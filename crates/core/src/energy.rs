//! Energy consumption

use crate::{
    derivation::DerivationError,
    specs::{Multiplicity, SpecsForEnergyConsumption},
};

/// Consumption figures are reported in steps of this many watts.
pub const ENERGY_STEP: u32 = 50;

/// Raw power draw of the components, with the CPU and GPU draw multiplied by
/// their counts.
///
/// # Errors
///
/// Returns [`DerivationError::EnergyOverflow`] when the draw does not fit in a
/// `u32`.
pub fn raw_energy_consumption(
    specs: &SpecsForEnergyConsumption,
    multiplicity: Multiplicity,
) -> Result<u32, DerivationError> {
    let cpus = specs
        .cpu
        .attributes
        .energy_consumption
        .checked_mul(multiplicity.cpu_number.get());

    let gpus = specs
        .gpu
        .attributes
        .energy_consumption
        .checked_mul(multiplicity.gpu_number.get());

    [
        cpus,
        gpus,
        Some(specs.motherboard.attributes.energy_consumption),
        Some(specs.ram.attributes.energy_consumption),
        Some(specs.ssd.attributes.energy_consumption),
        Some(specs.hdd.attributes.energy_consumption),
    ]
    .into_iter()
    .try_fold(0_u32, |acc, watts| acc.checked_add(watts?))
    .ok_or(DerivationError::EnergyOverflow)
}

/// Rounds a draw up to the next multiple of [`ENERGY_STEP`]. A draw that is
/// already a multiple is returned unchanged.
///
/// # Errors
///
/// Returns [`DerivationError::EnergyOverflow`] when the rounded draw does not
/// fit in a `u32`.
pub fn round_up_energy(watts: u32) -> Result<u32, DerivationError> {
    match watts % ENERGY_STEP {
        0 => Ok(watts),
        remainder => watts
            .checked_add(ENERGY_STEP - remainder)
            .ok_or(DerivationError::EnergyOverflow),
    }
}

/// Energy consumption of a PC: one CPU and one GPU.
///
/// # Errors
///
/// Returns [`DerivationError::EnergyOverflow`] when the draw does not fit in a
/// `u32`.
pub fn total_energy_consumption(specs: &SpecsForEnergyConsumption) -> Result<u32, DerivationError> {
    workstation_energy_consumption(specs, Multiplicity::SINGLE)
}

/// Energy consumption of a build carrying several CPUs and/or GPUs.
///
/// # Errors
///
/// Returns [`DerivationError::EnergyOverflow`] when the scaled draw does not
/// fit in a `u32`.
pub fn workstation_energy_consumption(
    specs: &SpecsForEnergyConsumption,
    multiplicity: Multiplicity,
) -> Result<u32, DerivationError> {
    round_up_energy(raw_energy_consumption(specs, multiplicity)?)
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use testresult::TestResult;

    use crate::fixtures;

    use super::*;

    #[test]
    fn exact_multiples_are_unchanged() -> TestResult {
        assert_eq!(round_up_energy(0)?, 0);
        assert_eq!(round_up_energy(50)?, 50);
        assert_eq!(round_up_energy(300)?, 300);

        Ok(())
    }

    #[test]
    fn remainders_round_up_to_next_step() -> TestResult {
        assert_eq!(round_up_energy(1)?, 50);
        assert_eq!(round_up_energy(312)?, 350);
        assert_eq!(round_up_energy(349)?, 350);
        assert_eq!(round_up_energy(351)?, 400);

        Ok(())
    }

    #[test]
    fn rounding_past_u32_max_overflows() {
        // u32::MAX = 4_294_967_295, the last multiple of 50 is 4_294_967_250
        assert_eq!(
            round_up_energy(u32::MAX),
            Err(DerivationError::EnergyOverflow)
        );
        assert_eq!(round_up_energy(4_294_967_250), Ok(4_294_967_250));
    }

    #[test]
    fn pc_energy_ignores_power_supply_and_case() -> TestResult {
        // 65 + 200 + 25 + 5 + 5 + 12 = 312
        let specs = fixtures::specs().for_energy();

        assert_eq!(raw_energy_consumption(&specs, Multiplicity::SINGLE)?, 312);
        assert_eq!(total_energy_consumption(&specs)?, 350);

        Ok(())
    }

    #[test]
    fn workstation_multiplies_cpu_and_gpu_draw() -> TestResult {
        let specs = fixtures::specs().for_energy();
        let three = NonZeroU32::MIN.saturating_add(2);

        let multiplicity = Multiplicity::new(three, NonZeroU32::MIN);

        // 312 + 2 * 65 = 442
        assert_eq!(raw_energy_consumption(&specs, multiplicity)?, 442);
        assert_eq!(workstation_energy_consumption(&specs, multiplicity)?, 450);

        let multiplicity = Multiplicity::new(NonZeroU32::MIN, three);

        // 312 + 2 * 200 = 712
        assert_eq!(workstation_energy_consumption(&specs, multiplicity)?, 750);

        Ok(())
    }

    #[test]
    fn huge_cpu_counts_overflow_instead_of_wrapping() {
        let specs = fixtures::specs().for_energy();

        // 70_000_000 * 65 W is past u32::MAX
        let multiplicity = Multiplicity::new(
            NonZeroU32::MIN.saturating_add(69_999_999),
            NonZeroU32::MIN,
        );

        assert_eq!(
            workstation_energy_consumption(&specs, multiplicity),
            Err(DerivationError::EnergyOverflow)
        );
    }

    #[test]
    fn overflow_boundary_is_the_sum_not_just_the_product() -> TestResult {
        let specs = fixtures::specs().for_energy();

        // 66_076_419 * 65 = 4_294_967_235 fits, adding the other 247 W does not
        let largest_product = Multiplicity::new(
            NonZeroU32::MIN.saturating_add(66_076_418),
            NonZeroU32::MIN,
        );

        assert_eq!(
            raw_energy_consumption(&specs, largest_product),
            Err(DerivationError::EnergyOverflow)
        );

        // 66_076_415 * 65 + 247 = 4_294_967_222, rounds to 4_294_967_250
        let fits = Multiplicity::new(
            NonZeroU32::MIN.saturating_add(66_076_414),
            NonZeroU32::MIN,
        );

        assert_eq!(raw_energy_consumption(&specs, fits)?, 4_294_967_222);
        assert_eq!(workstation_energy_consumption(&specs, fits)?, 4_294_967_250);

        // 66_076_416 * 65 + 247 = 4_294_967_287 fits, but rounds past u32::MAX
        let rounds_over = Multiplicity::new(
            NonZeroU32::MIN.saturating_add(66_076_415),
            NonZeroU32::MIN,
        );

        assert_eq!(raw_energy_consumption(&specs, rounds_over)?, 4_294_967_287);
        assert_eq!(
            workstation_energy_consumption(&specs, rounds_over),
            Err(DerivationError::EnergyOverflow)
        );

        Ok(())
    }
}
