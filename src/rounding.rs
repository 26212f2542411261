//! Rounding structures and subroutines

use crate::*;

pub use bigdecimal::RoundingMode;


/// Rounding mode of [`Number::round`]
///
/// Half toward zero, unlike the half-up default of `BigDecimal`:
///
/// * 2.5 → 2
/// * -2.5 → -2
/// * 2.51 → 3
///
pub const DEFAULT_ROUNDING_MODE: RoundingMode = RoundingMode::HalfDown;


/// Round n to `precision` fractional digits
///
/// Negative precision rounds to tens, hundreds, ...; the result then has
/// scale zero.
///
pub(crate) fn round(n: &BigDecimal, precision: i64, mode: RoundingMode) -> BigDecimal {
    let rounded = n.with_scale_round(precision, mode);
    if precision < 0 {
        arithmetic::to_scale(&rounded, 0)
    } else {
        rounded
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test_round {
    use super::*;

    include!("rounding.tests.rs");
}
