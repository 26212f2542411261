//! Bitwise logic on integers of any size
//!
//! Operands are converted to big-endian byte strings of equal length.
//! Negative operands are emulated in two's complement over that length,
//! with no extra sign byte: a negative result whose two's complement
//! overflows the common length reads back modulo `256^len`.
//!
//! ```
//! # use bigdecimal_ext::Number;
//! let a = Number::from(-6);
//! assert_eq!(a.bit_and(3).unwrap(), Number::from(2));
//! assert_eq!(a.bit_or(3).unwrap(), Number::from(-5));
//! assert_eq!(a.bit_xor(3).unwrap(), Number::from(-7));
//! ```

use crate::*;


/// Boolean operation applied byte by byte
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    /// Combine a pair of bytes
    #[inline]
    pub fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            BitOp::And => a & b,
            BitOp::Or => a | b,
            BitOp::Xor => a ^ b,
        }
    }

    /// Sign of the result from the signs of the operands
    #[inline]
    pub fn is_negative(self, a_negative: bool, b_negative: bool) -> bool {
        match self {
            BitOp::And => a_negative && b_negative,
            BitOp::Or => a_negative || b_negative,
            BitOp::Xor => a_negative != b_negative,
        }
    }
}

impl fmt::Display for BitOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            BitOp::And => "and",
            BitOp::Or => "or",
            BitOp::Xor => "xor",
        };
        f.pad(name)
    }
}


/// Negate a big-endian byte string in place: invert, then add one
///
/// The carry stops at the first byte that does not wrap to zero.
///
pub(crate) fn twos_complement(bytes: &mut [u8]) {
    for byte in bytes.iter_mut() {
        *byte = !*byte;
    }
    for byte in bytes.iter_mut().rev() {
        let (sum, overflow) = byte.overflowing_add(1);
        *byte = sum;
        if !overflow {
            break;
        }
    }
}

/// Left-pad with zero bytes to len
fn align_length(mut bytes: Vec<u8>, len: usize) -> Vec<u8> {
    if bytes.len() < len {
        let mut padded = vec![0u8; len - bytes.len()];
        padded.append(&mut bytes);
        padded
    } else {
        bytes
    }
}

/// Apply op to two integers in two's complement
pub(crate) fn bit_op(a: &BigDecimal, b: &BigDecimal, op: BitOp) -> Result<BigDecimal, Error> {
    if arithmetic::has_fractional_part(a) {
        return Err(Error::invalid("Left operator has to be an integer"));
    }
    if arithmetic::has_fractional_part(b) {
        return Err(Error::invalid("Right operator has to be an integer"));
    }

    let a_negative = a.is_negative();
    let b_negative = b.is_negative();

    let ctx = Context::default();
    let a_bytes = radix::decimal_to_bytes(&a.abs(), radix::MAX_BASE, &ctx)?;
    let b_bytes = radix::decimal_to_bytes(&b.abs(), radix::MAX_BASE, &ctx)?;

    let len = cmp::max(a_bytes.len(), b_bytes.len());
    let mut a_bytes = align_length(a_bytes, len);
    let mut b_bytes = align_length(b_bytes, len);

    if a_negative {
        twos_complement(&mut a_bytes);
    }
    if b_negative {
        twos_complement(&mut b_bytes);
    }

    let mut result: Vec<u8> = a_bytes.iter()
                                     .zip(b_bytes.iter())
                                     .map(|(&x, &y)| op.apply(x, y))
                                     .collect();

    let negative = op.is_negative(a_negative, b_negative);
    if negative {
        twos_complement(&mut result);
    }

    tracing::trace!(%op, bytes = len, negative, "bitwise operation");

    let magnitude = radix::bytes_to_decimal(&result, radix::MAX_BASE)?;
    Ok(if negative { -magnitude } else { magnitude })
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:literal $op:ident $b:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a: BigDecimal = $a.parse().unwrap();
                    let b: BigDecimal = $b.parse().unwrap();
                    let result = bit_op(&a, &b, BitOp::$op).unwrap();
                    assert_eq!(impl_fmt::format_plain(&result), $expected);
                }
            }
        };
    }

    impl_case!(and_5_3: "5" And "3" => "1");
    impl_case!(or_5_3: "5" Or "3" => "7");
    impl_case!(xor_5_3: "5" Xor "3" => "6");
    impl_case!(and_zero: "0" And "255" => "0");
    impl_case!(and_unequal_lengths: "65535" And "255" => "255");
    impl_case!(or_integral_scale: "4.00" Or "1" => "5");
    impl_case!(and_wide: "340282366920938463463374607431768211455" And "18446744073709551616" => "18446744073709551616");

    impl_case!(and_n1_1: "-1" And "1" => "1");
    impl_case!(or_n128_0: "-128" Or "0" => "-128");
    impl_case!(and_n129_n1: "-129" And "-1" => "-129");
    impl_case!(or_200_n1: "200" Or "-1" => "-1");
    impl_case!(xor_200_n1: "200" Xor "-1" => "-201");
    impl_case!(and_n200_100: "-200" And "100" => "32");
    impl_case!(and_n256_n256: "-256" And "-256" => "-256");
    impl_case!(and_n6_3: "-6" And "3" => "2");
    impl_case!(or_n6_3: "-6" Or "3" => "-5");
    impl_case!(xor_n6_3: "-6" Xor "3" => "-7");
    impl_case!(and_n5_n3: "-5" And "-3" => "-7");

    // two's complement of -256 needs a ninth bit in one byte
    impl_case!(and_n255_n2_wraps: "-255" And "-2" => "0");

    #[test]
    fn rejects_fractional_operands() {
        let a: BigDecimal = "1.5".parse().unwrap();
        let b: BigDecimal = "1".parse().unwrap();
        assert_eq!(bit_op(&a, &b, BitOp::And), Err(Error::invalid("Left operator has to be an integer")));
        assert_eq!(bit_op(&b, &a, BitOp::Or), Err(Error::invalid("Right operator has to be an integer")));
    }

    #[test]
    fn twos_complement_carries() {
        let mut bytes = vec![0x01, 0x00];
        twos_complement(&mut bytes);
        assert_eq!(bytes, vec![0xff, 0x00]);

        let mut bytes = vec![0x00, 0x05];
        twos_complement(&mut bytes);
        assert_eq!(bytes, vec![0xff, 0xfb]);

        let mut bytes = vec![0x00];
        twos_complement(&mut bytes);
        assert_eq!(bytes, vec![0x00]);
    }

    #[test]
    fn op_signs() {
        assert!(BitOp::And.is_negative(true, true));
        assert!(!BitOp::And.is_negative(true, false));
        assert!(BitOp::Or.is_negative(false, true));
        assert!(!BitOp::Xor.is_negative(true, true));
        assert_eq!(BitOp::Xor.to_string(), "xor");
    }
}
