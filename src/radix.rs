//! Conversion between decimals and digit strings of other bases
//!
//! Digits are bytes, most significant first; base 256 makes the byte
//! string the big-endian binary representation of the value.

use crate::*;


/// Largest base a digit byte can hold
pub(crate) const MAX_BASE: u32 = 256;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";


/// Digits of a non-negative integer in the given base
///
/// Division runs at scale zero under a scale override of a copy of ctx.
/// Zero is the single digit `[0]`.
///
pub(crate) fn decimal_to_bytes(n: &BigDecimal, base: u32, ctx: &Context) -> Result<Vec<u8>, Error> {
    if !(2..=MAX_BASE).contains(&base) {
        return Err(Error::invalid(format!("Invalid Base: {}", base)));
    }
    if n.is_negative() || arithmetic::has_fractional_part(n) {
        return Err(Error::invalid("Number has to be a non-negative integer"));
    }

    let mut local = *ctx;
    let ctx = local.override_scale(0);

    let base = BigDecimal::from(base);
    let mut n = arithmetic::to_scale(n, ctx.scale());
    if n.is_zero() {
        return Ok(vec![0]);
    }

    let mut digits = Vec::new();
    while !n.is_zero() {
        let digit = arithmetic::modulo::modulo(&n, &base, ctx.scale())?;
        n = arithmetic::div(&n, &base, ctx.scale())?;

        let digit = arithmetic::integer_part(&digit)
                               .to_u8()
                               .ok_or_else(|| Error::invalid("digit out of range"))?;
        digits.push(digit);
    }
    digits.reverse();
    Ok(digits)
}

/// Value of digits in the given base, `Σ digit[i] · base^(len-1-i)`
pub(crate) fn bytes_to_decimal(bytes: &[u8], base: u32) -> Result<BigDecimal, Error> {
    if !(2..=MAX_BASE).contains(&base) {
        return Err(Error::invalid(format!("Invalid Base: {}", base)));
    }

    let value = bytes.iter().fold(BigInt::zero(), |acc, &digit| acc * base + digit);
    Ok(BigDecimal::from(value))
}

/// Lowercase hexadecimal of a non-negative integer, `"0"` for zero
pub(crate) fn to_hex(n: &BigDecimal) -> Result<String, Error> {
    if n.is_negative() || arithmetic::has_fractional_part(n) {
        return Err(Error::invalid("Number has to be a non-negative integer"));
    }

    let sixteen = BigInt::from(16u8);
    let mut quotient = arithmetic::integer_part(n);
    let mut digits = Vec::new();
    loop {
        let (q, r) = quotient.div_rem(&sixteen);
        let index = r.to_usize().unwrap_or(0);
        digits.push(HEX_DIGITS[index]);
        quotient = q;
        if quotient.is_zero() {
            break;
        }
    }
    digits.reverse();

    String::from_utf8(digits).map_err(|err| Error::invalid(err.to_string()))
}

/// Value of hexadecimal digits, either case, with optional `0x` prefix
pub(crate) fn from_hex(hex: &str) -> Result<BigDecimal, Error> {
    let digits = hex.strip_prefix("0x")
                    .or_else(|| hex.strip_prefix("0X"))
                    .unwrap_or(hex);

    if digits.is_empty() {
        return Err(Error::malformed(hex));
    }

    let mut acc = BigInt::zero();
    for c in digits.chars() {
        let digit = c.to_digit(16).ok_or_else(|| Error::malformed(hex))?;
        acc = acc * 16u8 + digit;
    }
    Ok(BigDecimal::from(acc))
}
