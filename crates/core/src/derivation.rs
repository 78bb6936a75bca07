//! Derivation errors

use thiserror::Error;

/// Errors that can occur while deriving a build's price or energy
/// consumption.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DerivationError {
    /// The price of the parts, scaled by the CPU and GPU counts, does not fit
    /// in a decimal.
    #[error("build price is too large to compute")]
    PriceOverflow,

    /// The power draw, scaled by the CPU and GPU counts, does not fit in a
    /// `u32` wattage.
    #[error("build energy consumption is too large to compute")]
    EnergyOverflow,
}
