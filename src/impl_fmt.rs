//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;


impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&format_plain(&self.value))
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Number(\"{}\")", self)
    }
}

impl fmt::Display for Logarithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Logarithm::Value(n) => fmt::Display::fmt(n, f),
            Logarithm::NegativeInfinity => f.pad("-INF"),
            Logarithm::NotANumber => f.pad("NAN"),
        }
    }
}


/// Format decimal without exponent, keeping every digit of its scale
///
/// Negative scales are expanded with zeros; zero never carries a sign.
///
pub(crate) fn format_plain(n: &BigDecimal) -> String {
    let (int, scale) = n.as_bigint_and_exponent();

    let (int, scale) = if scale < 0 {
        (n.with_scale(0).into_bigint_and_exponent().0, 0u64)
    } else {
        (int, scale as u64)
    };

    let mut digits = int.magnitude().to_str_radix(10);
    let scale = scale as usize;

    if scale > 0 {
        if digits.len() <= scale {
            let zeros = scale - digits.len() + 1;
            digits.insert_str(0, &"0".repeat(zeros));
        }
        let point = digits.len() - scale;
        digits.insert(point, '.');
    }

    if int.sign() == Sign::Minus {
        digits.insert(0, '-');
    }

    digits
}

/// Remove trailing zeros after the decimal point
///
/// The result has minimal non-negative scale: `1.2500 → 1.25`,
/// `3.000 → 3`, `1E+3 → 1000`.
///
pub(crate) fn trim_trailing_zeros(n: BigDecimal) -> BigDecimal {
    if n.is_zero() {
        return BigDecimal::zero();
    }

    // normalized() strips integer zeros too, into a negative scale
    let trimmed = n.normalized();
    if trimmed.as_bigint_and_exponent().1 < 0 {
        trimmed.with_scale(0)
    } else {
        trimmed
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $int:literal e $exp:literal => $plain:literal, $trimmed:literal) => {
            paste! {
                #[test]
                fn [< format_plain_ $name >]() {
                    let n = BigDecimal::new(BigInt::from($int), -$exp);
                    assert_eq!(format_plain(&n), $plain);
                }

                #[test]
                fn [< trim_trailing_zeros_ $name >]() {
                    let n = BigDecimal::new(BigInt::from($int), -$exp);
                    assert_eq!(format_plain(&trim_trailing_zeros(n)), $trimmed);
                }
            }
        };
    }

    impl_case!(case_0: 0 e 0 => "0", "0");
    impl_case!(case_0d000: 0 e -3 => "0.000", "0");
    impl_case!(case_1: 1 e 0 => "1", "1");
    impl_case!(case_1000: 1 e 3 => "1000", "1000");
    impl_case!(case_1d50: 150 e -2 => "1.50", "1.5");
    impl_case!(case_n1d50: -150 e -2 => "-1.50", "-1.5");
    impl_case!(case_0d0012: 12 e -4 => "0.0012", "0.0012");
    impl_case!(case_0d1: 1 e -1 => "0.1", "0.1");
    impl_case!(case_n0d001: -1 e -3 => "-0.001", "-0.001");
    impl_case!(case_12d000: 12000 e -3 => "12.000", "12");
    impl_case!(case_100d10: 10010 e -2 => "100.10", "100.1");
    impl_case!(case_12000: 12000 e 0 => "12000", "12000");
    impl_case!(case_n12000d00: -1200000 e -2 => "-12000.00", "-12000");

    #[test]
    fn display_number() {
        let n = Number::new("-12.340".parse().unwrap());
        assert_eq!(n.to_string(), "-12.340");
        assert_eq!(format!("{:>8}", Number::from(42)), "      42");
        assert_eq!(format!("{:?}", n), "Number(\"-12.340\")");
    }

    #[test]
    fn display_logarithm() {
        assert_eq!(Logarithm::NegativeInfinity.to_string(), "-INF");
        assert_eq!(Logarithm::NotANumber.to_string(), "NAN");
        assert_eq!(Logarithm::Value(Number::from(3)).to_string(), "3");
    }
}
