// Copyright 2016 Adam Sunderland
//           2016-2023 Andrew Kubera
//           2017 Ruben De Smet
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Extended Decimal Arithmetic
//!
//! `Number` wraps a `BigDecimal` and adds the algorithms a plain
//! arbitrary-precision decimal does not provide: exponential and natural
//! logarithm by series evaluation, powers with fractional exponents,
//! modular exponentiation over non-integer operands, bitwise logic on
//! signed integers of any size, hexadecimal conversion, factorial, and a
//! canonical string form for integers, floats and numeric text.
//!
//! Scale-bounded operations keep a fixed number of digits after the
//! decimal point and *truncate* toward zero, they never round to nearest.
//! The scale and the trailing-zero policy are carried by a [`Context`].
//!
//! # Example
//!
//! ```
//! use bigdecimal_ext::{normalize, Number};
//!
//! assert_eq!(normalize("1.50").unwrap(), "1.5");
//! assert_eq!(normalize("1E3").unwrap(), "1000");
//! assert_eq!(normalize(0.1f64).unwrap(), "0.1");
//!
//! let n = Number::from(255);
//! assert_eq!(n.to_hex().unwrap(), "ff");
//! assert_eq!(n.bit_and(-2).unwrap().to_string(), "254");
//!
//! let root = Number::from(3).pow("0.5").unwrap();
//! assert_eq!(root.to_string(), "1.73205080756887729352");
//! ```
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


pub extern crate bigdecimal;
pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde_crate;

include!("./with_std.rs");

// make available some standard items
use self::stdlib::cmp::{self, Ordering};
use self::stdlib::convert::TryFrom;
use self::stdlib::ops::{Add, Mul, Neg, Sub};
use self::stdlib::str::FromStr;
use self::stdlib::string::{String, ToString};
use self::stdlib::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
pub use num_traits::{One, Signed, ToPrimitive, Zero};

pub use bigdecimal::BigDecimal;


#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

// scale-bounded primitives and series kernels
mod arithmetic;

// From<T>, IntoNumber
mod impl_convert;
pub use impl_convert::IntoNumber;

// Add, Sub, Mul, Neg
mod impl_ops;

// compare, min, max
mod impl_cmp;
pub use impl_cmp::{compare, compare_with_context, max, min};

// Display, Debug
mod impl_fmt;

#[cfg(feature = "serde")]
mod impl_serde;

mod error;
pub use error::Error;

mod parsing;
pub mod rounding;
pub use rounding::{RoundingMode, DEFAULT_ROUNDING_MODE};

// Mathematical context
mod context;
pub use context::{Context, ScaleOverride, WORKING_SCALE};

mod radix;
mod bitwise;
pub use bitwise::BitOp;

pub mod random;


/// Arbitrary precision decimal with non-negative scale
///
/// Equality, ordering and hashing are by numeric value, so `1.50` and
/// `1.5` are the same number.
///
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number {
    value: BigDecimal,
}

impl Number {
    /// Wrap a decimal, expanding a negative scale to zero
    pub fn new(value: BigDecimal) -> Number {
        let (_, scale) = value.as_bigint_and_exponent();
        if scale < 0 {
            Number { value: arithmetic::to_scale(&value, 0) }
        } else {
            Number { value }
        }
    }

    /// Convert any supported value, the way [`normalize`] reads it
    ///
    /// Text is read leniently: scientific notation is expanded and
    /// unrecognizable text is zero. Use `str::parse` to reject malformed
    /// text instead.
    ///
    /// ```
    /// # use bigdecimal_ext::Number;
    /// assert_eq!(Number::parse("2.5E2").unwrap(), Number::from(250));
    /// assert_eq!(Number::parse("n/a").unwrap(), Number::from(0));
    /// assert!("n/a".parse::<Number>().is_err());
    /// ```
    pub fn parse<T: IntoNumber>(value: T) -> Result<Number, Error> {
        value.into_number()
    }

    /// Digits at the stored scale, without exponent
    #[inline]
    pub fn value(&self) -> String {
        impl_fmt::format_plain(&self.value)
    }

    /// Number of digits after the decimal point
    #[inline]
    pub fn scale(&self) -> u64 {
        arithmetic::scale_of(&self.value)
    }

    #[inline]
    pub fn as_bigdecimal(&self) -> &BigDecimal {
        &self.value
    }

    #[inline]
    pub fn into_bigdecimal(self) -> BigDecimal {
        self.value
    }

    /// Nearest float, None if out of range
    pub fn to_f64(&self) -> Option<f64> {
        self.value().parse::<f64>().ok().filter(|f| f.is_finite())
    }

    /// Text in canonical form: no trailing fractional zeros, no `-0`
    pub fn to_canonical_string(&self) -> String {
        impl_fmt::format_plain(&impl_fmt::trim_trailing_zeros(self.value.clone()))
    }

    /// True if the value has no non-zero fractional digit (`2.00` is an integer)
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.value.is_integer()
    }

    #[inline]
    pub fn has_fractional_part(&self) -> bool {
        arithmetic::has_fractional_part(&self.value)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.value.is_positive()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    pub fn abs(&self) -> Number {
        Number { value: self.value.abs() }
    }

    /// Sum truncated to the context scale
    ///
    /// The `+`, `-` and `*` operators give exact results.
    ///
    /// ```
    /// # use bigdecimal_ext::{Context, Number};
    /// let a: Number = "1.259".parse().unwrap();
    /// let b: Number = "0.001".parse().unwrap();
    /// assert_eq!((&a + &b).value(), "1.260");
    /// assert_eq!(a.add_with_context(&b, &Context::default().with_scale(1)).value(), "1.2");
    /// ```
    pub fn add_with_context(&self, other: &Number, ctx: &Context) -> Number {
        let sum = arithmetic::add(&self.value, &other.value, ctx.scale());
        Number::new(ctx.format_trailing_zeros(sum))
    }

    /// Difference truncated to the context scale
    pub fn sub_with_context(&self, other: &Number, ctx: &Context) -> Number {
        let difference = arithmetic::sub(&self.value, &other.value, ctx.scale());
        Number::new(ctx.format_trailing_zeros(difference))
    }

    /// Product truncated to the context scale
    pub fn mul_with_context(&self, other: &Number, ctx: &Context) -> Number {
        let product = arithmetic::mul(&self.value, &other.value, ctx.scale());
        Number::new(ctx.format_trailing_zeros(product))
    }

    /// Quotient truncated to the default scale
    pub fn div<T: IntoNumber>(&self, divisor: T) -> Result<Number, Error> {
        self.div_with_context(divisor, &Context::default())
    }

    pub fn div_with_context<T: IntoNumber>(&self, divisor: T, ctx: &Context) -> Result<Number, Error> {
        let divisor = divisor.into_number()?;
        let quotient = arithmetic::div(&self.value, &divisor.value, ctx.scale())?;
        Ok(Number::new(ctx.format_trailing_zeros(quotient)))
    }

    /// Floor modulo `self - m · floor(self / m)`, sign follows the modulus
    ///
    /// ```
    /// # use bigdecimal_ext::Number;
    /// assert_eq!(Number::from(-7).rem(3).unwrap(), Number::from(2));
    /// assert_eq!(Number::from(7).rem(-3).unwrap(), Number::from(-2));
    /// ```
    pub fn rem<T: IntoNumber>(&self, modulus: T) -> Result<Number, Error> {
        self.rem_with_context(modulus, &Context::default())
    }

    pub fn rem_with_context<T: IntoNumber>(&self, modulus: T, ctx: &Context) -> Result<Number, Error> {
        let modulus = modulus.into_number()?;
        let remainder = arithmetic::modulo::modulo(&self.value, &modulus.value, ctx.scale())?;
        Ok(Number::new(ctx.format_trailing_zeros(remainder)))
    }

    /// Floor quotient and floor modulo
    pub fn div_rem<T: IntoNumber>(&self, divisor: T) -> Result<(Number, Number), Error> {
        self.div_rem_with_context(divisor, &Context::default())
    }

    pub fn div_rem_with_context<T: IntoNumber>(&self, divisor: T, ctx: &Context) -> Result<(Number, Number), Error> {
        let divisor = divisor.into_number()?;
        let (q, r) = arithmetic::modulo::div_rem(&self.value, &divisor.value, ctx.scale())?;
        Ok((Number::new(q), Number::new(ctx.format_trailing_zeros(r))))
    }

    /// Square root truncated to the default scale
    ///
    /// Negative values have no real square root, and return
    /// [`Error::UndefinedResult`].
    ///
    pub fn sqrt(&self) -> Result<Number, Error> {
        self.sqrt_with_context(&Context::default())
    }

    pub fn sqrt_with_context(&self, ctx: &Context) -> Result<Number, Error> {
        let root = arithmetic::sqrt::sqrt(&self.value, ctx.scale())?;
        Ok(Number::new(ctx.format_trailing_zeros(root)))
    }

    /// Raise to a power, integer or fractional
    ///
    /// Integer exponents are exact before truncation. Fractional
    /// exponents are calculated as `e^(exponent · ln(self))` at twice the
    /// scale, and need a non-negative base.
    ///
    pub fn pow<T: IntoNumber>(&self, exponent: T) -> Result<Number, Error> {
        self.pow_with_context(exponent, &Context::default())
    }

    pub fn pow_with_context<T: IntoNumber>(&self, exponent: T, ctx: &Context) -> Result<Number, Error> {
        let exponent = exponent.into_number()?;
        arithmetic::pow::pow(&self.value, &exponent.value, ctx).map(Number::new)
    }

    /// `(self ^ exponent) mod modulus`
    ///
    /// The exponent must not be negative and the modulus must not be zero.
    /// Integer operands use modular exponentiation, where the remainder
    /// takes the sign of the base; any fractional operand calculates the
    /// power first and takes the floor modulo.
    ///
    /// ```
    /// # use bigdecimal_ext::Number;
    /// let r = Number::from(4).powmod(13, 497).unwrap();
    /// assert_eq!(r, Number::from(445));
    /// ```
    pub fn powmod<E: IntoNumber, M: IntoNumber>(&self, exponent: E, modulus: M) -> Result<Number, Error> {
        self.powmod_with_context(exponent, modulus, &Context::default())
    }

    pub fn powmod_with_context<E, M>(&self, exponent: E, modulus: M, ctx: &Context) -> Result<Number, Error>
    where
        E: IntoNumber,
        M: IntoNumber,
    {
        let exponent = exponent.into_number()?;
        let modulus = modulus.into_number()?;
        arithmetic::pow::powmod(&self.value, &exponent.value, &modulus.value, ctx).map(Number::new)
    }

    /// Round to `precision` digits, ties toward zero ([`DEFAULT_ROUNDING_MODE`])
    ///
    /// ```
    /// # use bigdecimal_ext::Number;
    /// let n: Number = "2.5".parse().unwrap();
    /// assert_eq!(n.round(0).to_string(), "2");
    /// assert_eq!(n.round_half_even(0).to_string(), "2");
    /// assert_eq!(n.round_up(0).to_string(), "3");
    /// ```
    #[inline]
    pub fn round(&self, precision: i64) -> Number {
        self.round_with_mode(precision, DEFAULT_ROUNDING_MODE)
    }

    pub fn round_with_mode(&self, precision: i64, mode: RoundingMode) -> Number {
        Number::new(rounding::round(&self.value, precision, mode))
    }

    /// Round, ties to the even neighbor
    #[inline]
    pub fn round_half_even(&self, precision: i64) -> Number {
        self.round_with_mode(precision, RoundingMode::HalfEven)
    }

    /// Round toward +∞
    #[inline]
    pub fn round_up(&self, precision: i64) -> Number {
        self.round_with_mode(precision, RoundingMode::Ceiling)
    }

    /// Round toward -∞
    #[inline]
    pub fn round_down(&self, precision: i64) -> Number {
        self.round_with_mode(precision, RoundingMode::Floor)
    }

    /// Largest integer not greater than self
    pub fn floor(&self) -> Number {
        Number::new(arithmetic::floor(&self.value))
    }

    /// Smallest integer not less than self
    pub fn ceil(&self) -> Number {
        Number::new(arithmetic::ceil(&self.value))
    }

    /// e^self, accurate to about a hundred digits for moderate values
    ///
    /// The series is the same 299 terms for every input, so large
    /// arguments lose relative accuracy.
    ///
    pub fn exp(&self) -> Number {
        Number::new(arithmetic::exp::exp(&self.value))
    }

    /// Natural logarithm
    ///
    /// Zero is negative infinity, negative values are not a number.
    ///
    /// ```
    /// # use bigdecimal_ext::{Logarithm, Number};
    /// assert_eq!(Number::from(1).ln(), Logarithm::Value(Number::from(0)));
    /// assert_eq!(Number::from(0).ln().to_string(), "-INF");
    /// assert_eq!(Number::from(-1).ln().to_string(), "NAN");
    /// ```
    pub fn ln(&self) -> Logarithm {
        if self.value.is_zero() {
            Logarithm::NegativeInfinity
        } else if self.value.is_negative() {
            Logarithm::NotANumber
        } else {
            Logarithm::Value(Number::new(arithmetic::ln::ln_positive(&self.value)))
        }
    }

    /// Bitwise AND in two's complement
    #[inline]
    pub fn bit_and<T: IntoNumber>(&self, other: T) -> Result<Number, Error> {
        self.bit_op(other, BitOp::And)
    }

    /// Bitwise OR in two's complement
    #[inline]
    pub fn bit_or<T: IntoNumber>(&self, other: T) -> Result<Number, Error> {
        self.bit_op(other, BitOp::Or)
    }

    /// Bitwise XOR in two's complement
    #[inline]
    pub fn bit_xor<T: IntoNumber>(&self, other: T) -> Result<Number, Error> {
        self.bit_op(other, BitOp::Xor)
    }

    /// Apply bitwise operation to integer operands
    ///
    /// Both operands must be integers. Negative operands are represented
    /// in two's complement over as many bytes as the larger magnitude
    /// needs.
    ///
    pub fn bit_op<T: IntoNumber>(&self, other: T, op: BitOp) -> Result<Number, Error> {
        let other = other.into_number()?;
        bitwise::bit_op(&self.value, &other.value, op).map(Number::new)
    }

    /// Lowercase hexadecimal digits of a non-negative integer
    pub fn to_hex(&self) -> Result<String, Error> {
        radix::to_hex(&self.value)
    }

    /// Read hexadecimal digits, with optional `0x` prefix, of any length
    ///
    /// ```
    /// # use bigdecimal_ext::Number;
    /// let n = Number::from_hex("0xFFFFFFFFFFFFFFFFFFFF").unwrap();
    /// assert_eq!(n.to_string(), "1208925819614629174706175");
    /// ```
    pub fn from_hex(hex: &str) -> Result<Number, Error> {
        radix::from_hex(hex).map(Number::new)
    }

    /// Product of the integers from one to self
    pub fn factorial(&self) -> Result<Number, Error> {
        arithmetic::factorial::factorial(&self.value).map(Number::new)
    }
}


/// Result of [`Number::ln`]
///
/// The non-finite variants display as `-INF` and `NAN`.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Logarithm {
    Value(Number),

    /// Logarithm of zero
    NegativeInfinity,

    /// Logarithm of a negative number
    NotANumber,
}

impl Logarithm {
    /// The finite value, if any
    pub fn value(&self) -> Option<&Number> {
        match self {
            Logarithm::Value(n) => Some(n),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<Number> {
        match self {
            Logarithm::Value(n) => Some(n),
            _ => None,
        }
    }
}


/// Canonical string of an integer, float, numeric text or decimal
///
/// * integers have no fractional part
/// * floats get the fewest digits that read back as the same float
/// * text in scientific notation is expanded; other text is stripped to
///   digits, `-` and `.`, and is `0` if that is still not a number
/// * trailing fractional zeros are removed and `-0` is `0`
///
/// ```
/// # use bigdecimal_ext::normalize;
/// assert_eq!(normalize(42).unwrap(), "42");
/// assert_eq!(normalize(1.50).unwrap(), "1.5");
/// assert_eq!(normalize("-1.25E-1").unwrap(), "-0.125");
/// assert_eq!(normalize("+3.400").unwrap(), "3.4");
/// assert_eq!(normalize("-0").unwrap(), "0");
/// ```
pub fn normalize<T: IntoNumber>(value: T) -> Result<String, Error> {
    value.into_number().map(|n| n.to_canonical_string())
}


impl FromStr for Number {
    type Err = Error;

    /// Read `[+-]digits[.digits]`, keeping the scale of the text
    #[inline]
    fn from_str(s: &str) -> Result<Number, Error> {
        parsing::parse_strict(s).map(Number::new)
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod number_tests {
    use super::*;
    use paste::paste;

    include!("lib.tests.rs");
}


#[cfg(all(test, property_tests))]
extern crate proptest;
