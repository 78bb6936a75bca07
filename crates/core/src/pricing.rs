//! Pricing

use rust_decimal::Decimal;

use crate::{
    derivation::DerivationError,
    specs::{Multiplicity, Specs},
};

/// Fixed assembly markup added to the sum of the parts.
pub const ASSEMBLY_MARKUP: Decimal = Decimal::from_parts(350, 0, 0, false, 0);

/// Sum of the component prices, with the CPU and GPU prices multiplied by
/// their counts.
///
/// # Errors
///
/// Returns [`DerivationError::PriceOverflow`] when the sum does not fit in a
/// [`Decimal`].
pub fn parts_price(specs: &Specs, multiplicity: Multiplicity) -> Result<Decimal, DerivationError> {
    let cpus = specs
        .cpu
        .spec
        .price
        .checked_mul(Decimal::from(multiplicity.cpu_number.get()));

    let gpus = specs
        .gpu
        .spec
        .price
        .checked_mul(Decimal::from(multiplicity.gpu_number.get()));

    [
        cpus,
        gpus,
        Some(specs.motherboard.spec.price),
        Some(specs.ram.spec.price),
        Some(specs.ssd.spec.price),
        Some(specs.hdd.spec.price),
        Some(specs.power_supply.spec.price),
        Some(specs.pc_case.spec.price),
    ]
    .into_iter()
    .try_fold(Decimal::ZERO, |acc, price| acc.checked_add(price?))
    .ok_or(DerivationError::PriceOverflow)
}

/// Turns a parts sum into a retail price ending in 99.
///
/// Adds [`ASSEMBLY_MARKUP`], rounds up to the next hundred (a sum already on
/// a hundred stays there) and takes one off: `1452` becomes `1899`, and so
/// does `1550`.
///
/// # Errors
///
/// Returns [`DerivationError::PriceOverflow`] when the marked-up price does
/// not fit in a [`Decimal`].
pub fn retail_price(parts: Decimal) -> Result<Decimal, DerivationError> {
    parts
        .checked_add(ASSEMBLY_MARKUP)
        .and_then(|marked_up| marked_up.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|hundreds| hundreds.ceil().checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|rounded| rounded.checked_sub(Decimal::ONE))
        .ok_or(DerivationError::PriceOverflow)
}

/// Retail price of a PC: one of each component.
///
/// # Errors
///
/// Returns [`DerivationError::PriceOverflow`] when the price does not fit in a
/// [`Decimal`].
pub fn total_price(specs: &Specs) -> Result<Decimal, DerivationError> {
    workstation_total_price(specs, Multiplicity::SINGLE)
}

/// Retail price of a build carrying several CPUs and/or GPUs.
///
/// # Errors
///
/// Returns [`DerivationError::PriceOverflow`] when the scaled price does not
/// fit in a [`Decimal`].
pub fn workstation_total_price(
    specs: &Specs,
    multiplicity: Multiplicity,
) -> Result<Decimal, DerivationError> {
    retail_price(parts_price(specs, multiplicity)?)
}
