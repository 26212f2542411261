//! arithmetic routines
//!
//! Scale-bounded operations on `BigDecimal`. Every result is truncated
//! (rounded toward zero) to the requested scale, never rounded to nearest.

use crate::*;

pub(crate) mod exp;
pub(crate) mod factorial;
pub(crate) mod ln;
pub(crate) mod modulo;
pub(crate) mod pow;
pub(crate) mod sqrt;


/// Convert a requested scale to the primitive's signed scale
#[inline]
pub(crate) fn scale_to_i64(scale: u64) -> i64 {
    i64::try_from(scale).unwrap_or(i64::MAX)
}

/// Digits after the decimal point, zero for values with negative scale
#[inline]
pub(crate) fn scale_of(n: &BigDecimal) -> u64 {
    let (_, scale) = n.as_bigint_and_exponent();
    scale.max(0) as u64
}

/// Return n truncated, or zero-padded, to exactly `scale` fractional digits
#[inline]
pub(crate) fn to_scale(n: &BigDecimal, scale: u64) -> BigDecimal {
    n.with_scale(scale_to_i64(scale))
}

/// Return the integer value of n, truncating any fractional digits
pub(crate) fn integer_part(n: &BigDecimal) -> BigInt {
    let (int, _) = n.with_scale(0).into_bigint_and_exponent();
    int
}

/// True if n has non-zero digits after the decimal point
#[inline]
pub(crate) fn has_fractional_part(n: &BigDecimal) -> bool {
    !n.is_integer()
}

/// a + b, truncated to scale
pub(crate) fn add(a: &BigDecimal, b: &BigDecimal, scale: u64) -> BigDecimal {
    to_scale(&(a + b), scale)
}

/// a - b, truncated to scale
pub(crate) fn sub(a: &BigDecimal, b: &BigDecimal, scale: u64) -> BigDecimal {
    to_scale(&(a - b), scale)
}

/// a * b, truncated to scale
pub(crate) fn mul(a: &BigDecimal, b: &BigDecimal, scale: u64) -> BigDecimal {
    to_scale(&(a * b), scale)
}

/// num / den, truncated to scale
pub(crate) fn div(num: &BigDecimal, den: &BigDecimal, scale: u64) -> Result<BigDecimal, Error> {
    if den.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let (n, n_scale) = num.as_bigint_and_exponent();
    let (d, d_scale) = den.as_bigint_and_exponent();
    Ok(impl_truncating_division(n, n_scale, &d, d_scale, scale))
}

/// num / den for a small non-zero integer divisor, truncated to scale
pub(crate) fn div_small(num: &BigDecimal, den: u32, scale: u64) -> BigDecimal {
    debug_assert_ne!(den, 0);
    let (n, n_scale) = num.as_bigint_and_exponent();
    impl_truncating_division(n, n_scale, &BigInt::from(den), 0, scale)
}

/// Quotient of (n·10^-n_scale) / (d·10^-d_scale) with `scale` digits
///
/// Denominator must not be zero.
fn impl_truncating_division(
    n: BigInt,
    n_scale: i64,
    d: &BigInt,
    d_scale: i64,
    scale: u64,
) -> BigDecimal {
    let scale = scale_to_i64(scale);

    // q·10^-scale = n·10^(d_scale - n_scale) / d
    let shifted = BigDecimal::new(n, n_scale.saturating_sub(d_scale)).with_scale(scale);
    let (numerator, _) = shifted.into_bigint_and_exponent();

    BigDecimal::new(numerator / d, scale)
}

/// Largest integer not greater than n
#[inline]
pub(crate) fn floor(n: &BigDecimal) -> BigDecimal {
    n.with_scale_round(0, RoundingMode::Floor)
}

/// Smallest integer not less than n
#[inline]
pub(crate) fn ceil(n: &BigDecimal) -> BigDecimal {
    n.with_scale_round(0, RoundingMode::Ceiling)
}

/// Compare a and b, after truncating both to scale when given
pub(crate) fn compare(a: &BigDecimal, b: &BigDecimal, scale: Option<u64>) -> Ordering {
    match scale {
        Some(scale) => to_scale(a, scale).cmp(&to_scale(b, scale)),
        None => a.cmp(b),
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    macro_rules! impl_case {
        ($name:ident: $op:ident($a:literal, $b:literal, $scale:literal) => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $op _ $name >]() {
                    let result = $op(&dec($a), &dec($b), $scale);
                    assert_eq!(impl_fmt::format_plain(&result), $expected);
                }
            }
        };
    }

    impl_case!(exact: add("1.25", "2.5", 2) => "3.75");
    impl_case!(truncates: add("1.259", "0.001", 1) => "1.2");
    impl_case!(pads: add("1", "2", 3) => "3.000");
    impl_case!(negative_truncates_toward_zero: sub("0", "1.999", 2) => "-1.99");
    impl_case!(truncated: mul("1.5", "1.5", 1) => "2.2");
    impl_case!(negative: mul("-1.5", "1.5", 1) => "-2.2");

    macro_rules! impl_div_case {
        ($name:ident: $a:literal / $b:literal, $scale:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let result = div(&dec($a), &dec($b), $scale).unwrap();
                assert_eq!(impl_fmt::format_plain(&result), $expected);
            }
        };
    }

    impl_div_case!(case_1_3: "1" / "3", 5 => "0.33333");
    impl_div_case!(case_2_3_scale_0: "2" / "3", 0 => "0");
    impl_div_case!(case_n2_3: "-2" / "3", 3 => "-0.666");
    impl_div_case!(case_scaled_divisor: "1" / "0.003", 2 => "333.33");
    impl_div_case!(case_negative_exponent: "1e3" / "7", 1 => "142.8");
    impl_div_case!(case_large_dividend_scale: "0.000123456" / "2", 2 => "0.00");

    #[test]
    fn div_by_zero() {
        assert_eq!(div(&dec("1"), &dec("0.000"), 4), Err(Error::DivisionByZero));
    }

    #[test]
    fn div_small_matches_div() {
        let n = dec("12345.6789");
        assert_eq!(div_small(&n, 7, 30), div(&n, &dec("7"), 30).unwrap());
    }

    #[test]
    fn floor_and_ceil() {
        for &(input, f, c) in &[
            ("1.5", "1", "2"),
            ("-1.5", "-2", "-1"),
            ("3", "3", "3"),
            ("-0.001", "-1", "0"),
            ("12e2", "1200", "1200"),
        ] {
            assert_eq!(impl_fmt::format_plain(&floor(&dec(input))), f, "floor({})", input);
            assert_eq!(impl_fmt::format_plain(&ceil(&dec(input))), c, "ceil({})", input);
        }
    }

    #[test]
    fn compare_truncated() {
        let a = dec("1.00001");
        let b = dec("1.00002");
        assert_eq!(compare(&a, &b, None), Ordering::Less);
        assert_eq!(compare(&a, &b, Some(4)), Ordering::Equal);
        assert_eq!(compare(&b, &a, Some(5)), Ordering::Greater);
    }

    #[test]
    fn integer_part_and_fraction() {
        assert_eq!(integer_part(&dec("-12.9")), BigInt::from(-12));
        assert_eq!(integer_part(&dec("4e3")), BigInt::from(4000));
        assert!(has_fractional_part(&dec("0.5")));
        assert!(!has_fractional_part(&dec("2.000")));
    }

    #[test]
    fn to_scale_truncates_and_pads() {
        assert_eq!(impl_fmt::format_plain(&to_scale(&dec("-1.999"), 1)), "-1.9");
        assert_eq!(impl_fmt::format_plain(&to_scale(&dec("2.5"), 3)), "2.500");
        assert_eq!(impl_fmt::format_plain(&to_scale(&dec("12e2"), 0)), "1200");
    }

    #[test]
    fn div_keeps_every_digit_of_large_operands() {
        let n = dec("1e400");
        let q = div(&n, &dec("3"), 2).unwrap();
        let plain = impl_fmt::format_plain(&q);
        assert_eq!(plain.len(), 400 + 3);
        assert!(plain.starts_with("3333") && plain.ends_with(".33"));
    }
}
