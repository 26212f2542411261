//! Code for implementing From/To Numbers
//!
//! [`IntoNumber`] is the conversion shared by every operation accepting
//! "any number": integers, floats, text, decimals and numbers.

use crate::*;


/// Value convertible to a [`Number`] by the canonical formatter
///
/// Integers and decimals always convert. Floats convert to the shortest
/// decimal reading back as the same float, and fail when not finite.
/// Text is read leniently, see [`normalize`].
///
pub trait IntoNumber {
    fn into_number(self) -> Result<Number, Error>;
}


macro_rules! impl_from_int_primitive {
    ($t:ty) => {
        impl From<$t> for Number {
            fn from(n: $t) -> Self {
                Number { value: BigDecimal::from(n) }
            }
        }

        impl From<&$t> for Number {
            fn from(n: &$t) -> Self {
                Number { value: BigDecimal::from(*n) }
            }
        }

        impl IntoNumber for $t {
            #[inline]
            fn into_number(self) -> Result<Number, Error> {
                Ok(Number::from(self))
            }
        }
    };
}

impl_from_int_primitive!(u8);
impl_from_int_primitive!(u16);
impl_from_int_primitive!(u32);
impl_from_int_primitive!(u64);
impl_from_int_primitive!(u128);
impl_from_int_primitive!(i8);
impl_from_int_primitive!(i16);
impl_from_int_primitive!(i32);
impl_from_int_primitive!(i64);
impl_from_int_primitive!(i128);

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::from(n as u64)
    }
}

impl From<isize> for Number {
    fn from(n: isize) -> Self {
        Number::from(n as i64)
    }
}

impl IntoNumber for usize {
    fn into_number(self) -> Result<Number, Error> {
        Ok(Number::from(self))
    }
}

impl IntoNumber for isize {
    fn into_number(self) -> Result<Number, Error> {
        Ok(Number::from(self))
    }
}


impl TryFrom<f64> for Number {
    type Error = Error;

    #[inline]
    fn try_from(n: f64) -> Result<Self, Error> {
        parsing::float_to_decimal_f64(n).map(Number::new)
    }
}

impl TryFrom<f32> for Number {
    type Error = Error;

    #[inline]
    fn try_from(n: f32) -> Result<Self, Error> {
        parsing::float_to_decimal_f32(n).map(Number::new)
    }
}

impl IntoNumber for f64 {
    fn into_number(self) -> Result<Number, Error> {
        Number::try_from(self)
    }
}

impl IntoNumber for f32 {
    fn into_number(self) -> Result<Number, Error> {
        Number::try_from(self)
    }
}


impl IntoNumber for &str {
    fn into_number(self) -> Result<Number, Error> {
        parsing::parse_lenient(self).map(Number::new)
    }
}

impl IntoNumber for String {
    fn into_number(self) -> Result<Number, Error> {
        self.as_str().into_number()
    }
}

impl IntoNumber for &String {
    fn into_number(self) -> Result<Number, Error> {
        self.as_str().into_number()
    }
}


impl From<BigDecimal> for Number {
    #[inline]
    fn from(value: BigDecimal) -> Self {
        Number::new(value)
    }
}

impl From<&BigDecimal> for Number {
    #[inline]
    fn from(value: &BigDecimal) -> Self {
        Number::new(value.clone())
    }
}

impl From<BigInt> for Number {
    #[inline]
    fn from(value: BigInt) -> Self {
        Number { value: BigDecimal::from(value) }
    }
}

impl From<Number> for BigDecimal {
    #[inline]
    fn from(n: Number) -> Self {
        n.value
    }
}

impl IntoNumber for BigDecimal {
    fn into_number(self) -> Result<Number, Error> {
        Ok(Number::new(self))
    }
}

impl IntoNumber for &BigDecimal {
    fn into_number(self) -> Result<Number, Error> {
        Ok(Number::from(self))
    }
}

impl IntoNumber for BigInt {
    fn into_number(self) -> Result<Number, Error> {
        Ok(Number::from(self))
    }
}

impl IntoNumber for Number {
    #[inline]
    fn into_number(self) -> Result<Number, Error> {
        Ok(self)
    }
}

impl IntoNumber for &Number {
    #[inline]
    fn into_number(self) -> Result<Number, Error> {
        Ok(self.clone())
    }
}
