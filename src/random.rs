//! Random numbers in a range
//!
//! The random fraction comes from a single integer draw in
//! `0..=RAND_MAX`, so results have at most that many distinct values
//! whatever the scale.

use crate::*;

use rand::Rng;


/// Largest value of a single integer draw
pub const RAND_MAX: u32 = 2147483647;


/// Random number near `[min, max + 1]`, from the thread-local generator
///
/// `min` is clamped to at least zero and `max` to at most [`RAND_MAX`].
/// A range still inverted after clamping is an
/// [`Error::InvalidArgument`].
///
/// ```
/// # use bigdecimal_ext::{random::random_in_range, Number};
/// let n = random_in_range(1, 6).unwrap();
/// assert!(n >= Number::from(1) && n <= Number::from(7));
/// ```
pub fn random_in_range<A, B>(min: A, max: B) -> Result<Number, Error>
where
    A: IntoNumber,
    B: IntoNumber,
{
    random_in_range_with_context(min, max, &Context::default())
}

/// Random number in range, fraction calculated at the working scale of ctx
pub fn random_in_range_with_context<A, B>(min: A, max: B, ctx: &Context) -> Result<Number, Error>
where
    A: IntoNumber,
    B: IntoNumber,
{
    random_in_range_with_rng(min, max, ctx, &mut rand::thread_rng())
}

/// Random number in range, drawing from the given generator
///
/// `result = (draw / RAND_MAX) · (max - min + 1) + min`
///
pub fn random_in_range_with_rng<A, B, R>(min: A, max: B, ctx: &Context, rng: &mut R) -> Result<Number, Error>
where
    A: IntoNumber,
    B: IntoNumber,
    R: Rng + ?Sized,
{
    let rand_max = BigDecimal::from(RAND_MAX);

    let min = cmp::max(min.into_number()?.value, BigDecimal::zero());
    let max = cmp::min(max.into_number()?.value, rand_max.clone());
    if min > max {
        return Err(Error::invalid("Minimum has to be less than or equal to maximum"));
    }

    let draw: u32 = rng.gen_range(0..=RAND_MAX);
    tracing::trace!(draw, "random draw");

    let scale = ctx.working_scale();
    let fraction = arithmetic::div(&BigDecimal::from(draw), &rand_max, scale)?;
    let difference = &max - &min + BigDecimal::one();
    let result = arithmetic::mul(&difference, &fraction, scale) + min;

    Ok(Number::new(ctx.format_trailing_zeros(result)))
}
