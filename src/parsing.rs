//! Routines for parsing values into BigDecimals
//!
//! Two text grammars are supported. The strict grammar backs `FromStr`
//! and reports malformed input, the lenient grammar is the canonical
//! formatter's: it understands scientific notation and sanitizes
//! anything else, reading unrecognizable text as zero.

use crate::*;

use lazy_static::lazy_static;
use regex::Regex;


/// Largest decimal exponent accepted in scientific notation
pub(crate) const MAX_SCIENTIFIC_EXPONENT: u64 = 1 << 20;

lazy_static! {
    static ref STRICT_NUMBER: Regex = Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]*))?$").unwrap();
    static ref SCIENTIFIC_NOTATION: Regex = Regex::new(r"(?i)(-?([0-9]+\.)?[0-9]+)E([+-]?)([0-9]+)").unwrap();
    static ref SANITIZED_NUMBER: Regex = Regex::new(r"^-?([0-9]+(\.[0-9]*)?|\.[0-9]+)$").unwrap();
}


/// Build decimal from sign and digit strings, scale is the fraction length
fn from_digit_parts(negative: bool, int: &str, frac: &str) -> Result<BigDecimal, Error> {
    let digits = format!("{}{}", int, frac);
    let digits: &str = if digits.is_empty() { "0" } else { &digits };

    let mut value = BigInt::parse_bytes(digits.as_bytes(), 10)
                           .ok_or_else(|| Error::malformed(digits))?;
    if negative {
        value = -value;
    }

    let scale = i64::try_from(frac.len()).map_err(|_| Error::malformed(digits))?;
    Ok(BigDecimal::new(value, scale))
}

/// Parse `[+-]digits[.digits]`, keeping every fractional digit as scale
pub(crate) fn parse_strict(s: &str) -> Result<BigDecimal, Error> {
    let caps = STRICT_NUMBER.captures(s).ok_or_else(|| Error::malformed(s))?;

    let int = caps.get(2).map_or("", |m| m.as_str());
    let frac = caps.get(3).map_or("", |m| m.as_str());
    if int.is_empty() && frac.is_empty() {
        return Err(Error::malformed(s));
    }

    from_digit_parts(&caps[1] == "-", int, frac)
}

/// Parse text the way the canonical formatter does
///
/// * scientific notation `mantissa E [+|-] exponent` anywhere in the
///   text is expanded exactly, then trailing zeros are trimmed
/// * otherwise every character other than digits, `-` and `.` is
///   dropped; `-0` and text still not numeric read as zero
///
pub(crate) fn parse_lenient(s: &str) -> Result<BigDecimal, Error> {
    if s.contains(|c: char| c == 'e' || c == 'E') {
        if let Some(caps) = SCIENTIFIC_NOTATION.captures(s) {
            return parse_scientific(&caps[1], &caps[3] == "-", &caps[4]);
        }
    }

    let sanitized: String = s.chars()
                             .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
                             .collect();

    if sanitized == "-0" || !SANITIZED_NUMBER.is_match(&sanitized) {
        return Ok(BigDecimal::zero());
    }

    let (negative, unsigned) = match sanitized.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, &sanitized[..]),
    };
    let (int, frac) = match unsigned.find('.') {
        Some(point) => (&unsigned[..point], &unsigned[point + 1..]),
        None => (unsigned, ""),
    };
    from_digit_parts(negative, int, frac)
}

/// mantissa · 10^(±exponent), at scale exponent + decimals of mantissa
fn parse_scientific(mantissa: &str, negative_exponent: bool, exponent: &str) -> Result<BigDecimal, Error> {
    let exponent: u64 = exponent.parse()
                                .map_err(|_| Error::malformed(exponent))?;
    if exponent > MAX_SCIENTIFIC_EXPONENT {
        return Err(Error::invalid(format!("Exponent {} is too large", exponent)));
    }

    let mantissa = parse_strict(mantissa)?;
    let decimals = arithmetic::scale_of(&mantissa);
    let scale = exponent + decimals;
    let power = BigDecimal::new(BigInt::one(), -(exponent as i64));

    let value = if negative_exponent {
        arithmetic::div(&mantissa, &power, scale)?
    } else {
        arithmetic::mul(&power, &mantissa, scale)
    };

    Ok(impl_fmt::trim_trailing_zeros(value))
}


/// Exact value of a subnormal float, `frac · 2^-1074`
///
/// The primitive's float conversion assumes an implicit leading bit,
/// which subnormals do not have.
///
fn exact_from_subnormal_f64(n: f64) -> BigDecimal {
    const SUBNORMAL_EXPONENT: u32 = 1074;

    let bits = n.to_bits();
    let frac = bits & ((1 << 52) - 1);

    // frac · 2^-k = (frac · 5^k) · 10^-k
    let trailing_zeros = frac.trailing_zeros();
    let reduced_frac = frac >> trailing_zeros;
    let pow = SUBNORMAL_EXPONENT - trailing_zeros;
    let magnitude = BigUint::from(reduced_frac) * BigUint::from(5u8).pow(pow);

    let sign = if n.is_sign_negative() { Sign::Minus } else { Sign::Plus };
    BigDecimal::new(BigInt::from_biguint(sign, magnitude), pow as i64)
}

/// Exact decimal value of a finite float
pub(crate) fn exact_from_f64(n: f64) -> Result<BigDecimal, Error> {
    use stdlib::num::FpCategory::*;

    match n.classify() {
        Nan => Err(Error::malformed("NAN")),
        Infinite => Err(Error::malformed(if n > 0.0 { "INF" } else { "-INF" })),
        Zero => Ok(BigDecimal::zero()),
        Subnormal => Ok(exact_from_subnormal_f64(n)),
        Normal => BigDecimal::try_from(n).map_err(Error::from),
    }
}

/// Exact decimal value of a finite f32
#[inline]
pub(crate) fn exact_from_f32(n: f32) -> Result<BigDecimal, Error> {
    exact_from_f64(n as f64)
}

/// Round the exact value of a float to the fewest fractional digits that
/// still read back as the same float
///
/// Precision increases from zero, rounding half toward zero, so the
/// result is minimal among non-negative precisions.
///
fn minimal_round_trip<F>(exact: BigDecimal, target: F) -> BigDecimal
where
    F: FromStr + PartialEq,
{
    let max_scale = arithmetic::scale_of(&exact);

    for precision in 0..max_scale {
        let candidate = exact.with_scale_round(precision as i64, RoundingMode::HalfDown);
        let round_trips = impl_fmt::format_plain(&candidate)
                                    .parse::<F>()
                                    .map_or(false, |f| f == target);
        if round_trips {
            return impl_fmt::trim_trailing_zeros(candidate);
        }
    }

    impl_fmt::trim_trailing_zeros(exact)
}

/// Shortest decimal reading back as the given f64
pub(crate) fn float_to_decimal_f64(n: f64) -> Result<BigDecimal, Error> {
    let exact = exact_from_f64(n)?;
    Ok(minimal_round_trip(exact, n))
}

/// Shortest decimal reading back as the given f32
pub(crate) fn float_to_decimal_f32(n: f32) -> Result<BigDecimal, Error> {
    let exact = exact_from_f32(n)?;
    Ok(minimal_round_trip(exact, n))
}

/// Shortest decimal of a float, None when it is not finite
#[inline]
pub(crate) fn minimal_decimal_from_f64(n: f64) -> Option<BigDecimal> {
    float_to_decimal_f64(n).ok()
}
