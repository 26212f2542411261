//! floored division and remainder

use crate::*;


/// Bring a and b to a common scale, returning (a_int, b_int, scale)
fn align_scales(a: &BigDecimal, b: &BigDecimal) -> (BigInt, BigInt, i64) {
    let scale = a.as_bigint_and_exponent().1.max(b.as_bigint_and_exponent().1);
    let (a_int, _) = a.with_scale(scale).into_bigint_and_exponent();
    let (b_int, _) = b.with_scale(scale).into_bigint_and_exponent();
    (a_int, b_int, scale)
}

/// floor(a / m), computed exactly
pub(crate) fn div_floor(a: &BigDecimal, m: &BigDecimal) -> Result<BigInt, Error> {
    if m.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let (a_int, m_int, _) = align_scales(a, m);
    Ok(a_int.div_floor(&m_int))
}

/// Remainder `a - m * floor(a / m)`, truncated to scale
///
/// The result takes the sign of the modulus.
pub(crate) fn modulo(a: &BigDecimal, m: &BigDecimal, scale: u64) -> Result<BigDecimal, Error> {
    let quotient = BigDecimal::from(div_floor(a, m)?);
    let remainder = a - m * quotient;
    Ok(arithmetic::to_scale(&remainder, scale))
}

/// Integer quotient and remainder of a divided by m
///
/// Quotient is `floor(a / m)` with scale zero, remainder as [`modulo`].
pub(crate) fn div_rem(a: &BigDecimal, m: &BigDecimal, scale: u64) -> Result<(BigDecimal, BigDecimal), Error> {
    let quotient = BigDecimal::from(div_floor(a, m)?);
    let remainder = arithmetic::to_scale(&(a - m * &quotient), scale);
    Ok((quotient, remainder))
}


#[cfg(test)]
mod test {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    macro_rules! impl_case {
        ($name:ident: $a:literal mod $m:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let r = modulo(&dec($a), &dec($m), 10).unwrap();
                assert_eq!(r, dec($expected));
            }
        };
    }

    impl_case!(case_7_3: "7" mod "3" => "1");
    impl_case!(case_n7_3: "-7" mod "3" => "2");
    impl_case!(case_7_n3: "7" mod "-3" => "-2");
    impl_case!(case_n7_n3: "-7" mod "-3" => "-1");
    impl_case!(case_5d5_2: "5.5" mod "2" => "1.5");
    impl_case!(case_3d375_2: "3.375" mod "2" => "1.375");
    impl_case!(case_1_0d3: "1" mod "0.3" => "0.1");
    impl_case!(case_large: "123456789012345678901234567890" mod "97" => "52");
    impl_case!(case_1e3_7: "1e3" mod "7" => "6");
    impl_case!(case_2d25_0d5: "2.25" mod "0.5" => "0.25");

    #[test]
    fn modulo_by_zero() {
        assert_eq!(modulo(&dec("1"), &dec("0"), 0), Err(Error::DivisionByZero));
    }

    #[test]
    fn div_rem_floored() {
        let (q, r) = div_rem(&dec("-7.5"), &dec("2"), 3).unwrap();
        assert_eq!(q, dec("-4"));
        assert_eq!(r, dec("0.5"));
        assert_eq!(r.as_bigint_and_exponent().1, 3);
    }

    #[test]
    fn remainder_is_truncated_to_scale() {
        let r = modulo(&dec("1"), &dec("0.0003"), 2).unwrap();
        assert_eq!(r, dec("0.00"));
        let r = modulo(&dec("1.23456"), &dec("1"), 3).unwrap();
        assert_eq!(r, dec("0.234"));
    }
}
