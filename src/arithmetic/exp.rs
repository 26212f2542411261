//! exponential function e^x

use crate::*;


/// Number of Taylor terms evaluated, beyond the leading 1
pub(crate) const EXP_SERIES_TERMS: u32 = 299;

/// Evaluate e^x at the fixed working scale
///
/// Horner evaluation of the Taylor series truncated at degree 299:
///
/// ```math
/// e^x ≈ 1 + x/1·(1 + x/2·(1 + x/3·(… (1 + x/299))))
/// ```
///
/// Iterating from the innermost term outward, each step divides and
/// multiplies at [`WORKING_SCALE`] digits then adds one exactly. The term
/// count and order are fixed; results are reproducible digit-for-digit.
///
pub(crate) fn exp(x: &BigDecimal) -> BigDecimal {
    let scale = WORKING_SCALE;
    let one = BigDecimal::one();

    let mut result = one.clone();
    for i in (1..=EXP_SERIES_TERMS).rev() {
        let term = arithmetic::div_small(&result, i, scale);
        result = arithmetic::mul(&term, x, scale) + &one;
    }

    impl_fmt::trim_trailing_zeros(result)
}
