//! square root implementation

use crate::*;


/// Square root truncated to scale
///
/// Computed with integer square root of n·10^(2·scale), so every digit
/// kept is exact.
pub(crate) fn sqrt(n: &BigDecimal, scale: u64) -> Result<BigDecimal, Error> {
    if n.is_negative() {
        return Err(Error::undefined(format!("sqrt({})", impl_fmt::format_plain(n))));
    }

    let scale_i = arithmetic::scale_to_i64(scale);

    // n·10^(2·scale), truncated to an integer
    let (radicand, _) = n.with_scale(scale_i.saturating_mul(2)).into_bigint_and_exponent();

    Ok(BigDecimal::new(radicand.sqrt(), scale_i))
}
