//! pow implementation

use crate::*;

use num_traits::Pow;


/// Dispatch pow on whether the exponent has a fractional part
///
/// Trailing zeros follow the policy in ctx.
pub(crate) fn pow(base: &BigDecimal, exponent: &BigDecimal, ctx: &Context) -> Result<BigDecimal, Error> {
    let result = if arithmetic::has_fractional_part(exponent) {
        pow_fractional(base, exponent, ctx)?
    } else {
        pow_integer(base, &arithmetic::integer_part(exponent), ctx.scale())?
    };
    Ok(ctx.format_trailing_zeros(result))
}

/// base^exp for an integer exponent, truncated to scale
///
/// Positive powers are exact before truncation; negative powers divide
/// one by the exact positive power.
pub(crate) fn pow_integer(base: &BigDecimal, exp: &BigInt, scale: u64) -> Result<BigDecimal, Error> {
    let exp = exp.to_i64().ok_or_else(|| Error::invalid("Exponent is too large"))?;

    if exp == 0 {
        return Ok(arithmetic::to_scale(&BigDecimal::one(), scale));
    }

    let magnitude = exp.unsigned_abs();
    let (int, base_scale) = base.as_bigint_and_exponent();
    let power_scale = i64::try_from(magnitude)
                         .ok()
                         .and_then(|m| base_scale.checked_mul(m))
                         .ok_or_else(|| Error::invalid("Exponent is too large"))?;
    let power = BigDecimal::new(Pow::pow(int, magnitude), power_scale);

    if exp > 0 {
        Ok(arithmetic::to_scale(&power, scale))
    } else {
        arithmetic::div(&BigDecimal::one(), &power, scale)
    }
}

/// base^exponent = e^(exponent · ln(base)) for fractional exponents
///
/// Calculated at the working scale (twice the context scale) to absorb
/// rounding error, then truncated back to the context scale.
pub(crate) fn pow_fractional(base: &BigDecimal, exponent: &BigDecimal, ctx: &Context) -> Result<BigDecimal, Error> {
    let scale = ctx.scale();
    let increased_scale = ctx.working_scale();

    if base.is_zero() {
        return if exponent.is_positive() {
            Ok(arithmetic::to_scale(&BigDecimal::zero(), scale))
        } else {
            Err(Error::DivisionByZero)
        };
    }
    if base.is_negative() {
        return Err(Error::undefined(format!(
            "{}^{}", impl_fmt::format_plain(base), impl_fmt::format_plain(exponent)
        )));
    }

    tracing::trace!(scale, increased_scale, "fractional power");

    let log_base = arithmetic::ln::ln_positive(base);
    let product = arithmetic::mul(exponent, &log_base, increased_scale);
    let result = arithmetic::exp::exp(&product);

    // add zero at the original scale
    Ok(arithmetic::add(&result, &BigDecimal::zero(), scale))
}

/// (base^exponent) mod modulus
///
/// Integer operands use modular exponentiation; any fractional operand
/// falls back to pow followed by the floored modulo. Remainders of
/// integer operands take the sign of the base.
pub(crate) fn powmod(
    base: &BigDecimal,
    exponent: &BigDecimal,
    modulus: &BigDecimal,
    ctx: &Context,
) -> Result<BigDecimal, Error> {
    if exponent.is_negative() {
        return Err(Error::invalid("Exponent can't be negative"));
    }
    if modulus.is_zero() {
        return Err(Error::invalid("Modulus can't be zero"));
    }

    let any_fractional = [base, exponent, modulus]
                            .iter()
                            .any(|n| arithmetic::has_fractional_part(n));

    let result = if any_fractional {
        tracing::debug!("fractional operand to powmod, using pow and modulo");
        let power = pow(base, exponent, ctx)?;
        arithmetic::modulo::modulo(&power, modulus, ctx.scale())?
    } else {
        let remainder = impl_powmod_integer(
            &arithmetic::integer_part(base),
            &arithmetic::integer_part(exponent),
            &arithmetic::integer_part(modulus),
        );
        arithmetic::to_scale(&BigDecimal::from(remainder), ctx.scale())
    };

    Ok(ctx.format_trailing_zeros(result))
}

/// Modular exponentiation with truncated remainder semantics
///
/// The sign of the result follows the sign of base^exp, the sign of the
/// modulus is ignored.
fn impl_powmod_integer(base: &BigInt, exp: &BigInt, modulus: &BigInt) -> BigInt {
    let magnitude = base.magnitude().modpow(exp.magnitude(), modulus.magnitude());
    let negative = base.is_negative() && exp.is_odd();
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, magnitude)
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;

    include!("pow.tests.rs");
}
