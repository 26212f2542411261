//! natural logarithm

use crate::*;

use stdlib::f64::consts::LN_10;


/// Give up on a series that has not converged after this many terms
pub(crate) const MAX_SERIES_TERMS: u32 = 10_000;

/// Leading digits used for the floating point estimate of large values
const ESTIMATE_DIGITS: usize = 17;


/// Natural logarithm of a strictly positive value
///
/// A floating point estimate `m ≈ ln(x)` reduces the argument to
/// `y = x / e^m - 1`, close to zero, and the alternating series
///
/// ```math
/// ln(1 + y) = y - y²/2 + y³/3 - …
/// ```
///
/// is summed at [`WORKING_SCALE`] digits until a term truncates to zero.
/// The result is `m + ln(1 + y)`.
///
pub(crate) fn ln_positive(x: &BigDecimal) -> BigDecimal {
    debug_assert!(x.is_positive());

    let scale = WORKING_SCALE;
    let m = estimate(x);
    let e_m = arithmetic::exp::exp(&m);

    // only reachable for estimates far outside the exponential's range
    if !e_m.is_positive() {
        tracing::warn!(estimate = %m, "exponential of logarithm estimate is not positive");
        return impl_fmt::trim_trailing_zeros(m);
    }

    let y = match arithmetic::div(x, &e_m, scale) {
        Ok(q) => arithmetic::sub(&q, &BigDecimal::one(), scale),
        Err(_) => return impl_fmt::trim_trailing_zeros(m),
    };

    // series only converges for |y| < 1
    if y.abs() >= BigDecimal::one() {
        tracing::warn!(estimate = %m, "logarithm series would diverge");
        return impl_fmt::trim_trailing_zeros(m);
    }

    let mut sum = BigDecimal::zero();
    let mut power = BigDecimal::one();
    let mut i = 1u32;
    loop {
        power = arithmetic::mul(&power, &y, scale);
        let term = arithmetic::div_small(&power, i, scale);

        sum = if i % 2 == 1 {
            arithmetic::add(&sum, &term, scale)
        } else {
            arithmetic::sub(&sum, &term, scale)
        };

        if term.is_zero() {
            break;
        }
        if i >= MAX_SERIES_TERMS {
            tracing::warn!(terms = i, "logarithm series did not converge");
            break;
        }
        i += 1;
    }
    tracing::trace!(terms = i, "logarithm series converged");

    impl_fmt::trim_trailing_zeros(arithmetic::add(&sum, &m, scale))
}

/// Floating point approximation of ln(x), as shortest decimal
///
/// Uses `f64::ln` when x is within the normal float range, otherwise
/// estimates from the leading digits and the decimal exponent.
///
fn estimate(x: &BigDecimal) -> BigDecimal {
    let native = x.to_f64()
                  .filter(|f| f.is_normal() && *f > 0.0)
                  .map(f64::ln);

    let m = match native {
        Some(m) => m,
        None => estimate_from_digits(x),
    };

    parsing::minimal_decimal_from_f64(m).unwrap_or_else(BigDecimal::zero)
}

/// ln(d · 10^k) = ln(d) + k · ln(10), d from the leading digits
fn estimate_from_digits(x: &BigDecimal) -> f64 {
    let (int, scale) = x.as_bigint_and_exponent();
    let digits = int.magnitude().to_str_radix(10);
    let lead_len = digits.len().min(ESTIMATE_DIGITS);
    let lead: f64 = digits[..lead_len].parse().unwrap_or(1.0);
    let exponent = digits.len() as i64 - lead_len as i64 - scale;
    lead.ln() + exponent as f64 * LN_10
}


#[cfg(test)]
mod test {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    fn assert_close(a: &BigDecimal, b: &BigDecimal, digits: i64) {
        let tolerance = BigDecimal::new(1.into(), digits);
        let diff = (a - b).abs();
        assert!(diff < tolerance, "{} != {} (diff {})", a, b, diff);
    }

    #[test]
    fn ln_one_is_zero() {
        assert!(ln_positive(&BigDecimal::one()).is_zero());
    }

    #[test]
    fn ln_two() {
        let expected = dec("0.6931471805599453094172321214581765680755001343602552541206800094933936219696947156058633269964186875");
        assert_close(&ln_positive(&dec("2")), &expected, 98);
    }

    #[test]
    fn ln_ten() {
        let expected = dec("2.302585092994045684017991454684364207601101488628772976033327900967572609677352480235997205089598298");
        assert_close(&ln_positive(&dec("10")), &expected, 97);
    }

    #[test]
    fn ln_thousandth() {
        let expected = dec("-6.907755278982137052053974364053092622803304465886318928099983702902717829032057440707991615268794895");
        assert_close(&ln_positive(&dec("0.001")), &expected, 90);
    }

    #[test]
    fn ln_of_value_beyond_float_range() {
        // 10^400 overflows f64
        let x = BigDecimal::new(1.into(), -400);
        let expected = dec("921.0340371976182736071965818737456830404");
        let result = ln_positive(&x);
        assert_close(&result, &expected, 0);
    }

    #[test]
    fn estimate_from_digits_matches_native() {
        let x = dec("123456.789");
        let native = 123456.789f64.ln();
        assert!((estimate_from_digits(&x) - native).abs() < 1e-12);
    }
}
