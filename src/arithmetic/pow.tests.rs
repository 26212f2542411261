// Test pow, pow_fractional and powmod, included by arithmetic/pow.rs

use paste::paste;


fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

fn assert_close(a: &BigDecimal, b: &BigDecimal, digits: i64) {
    let tolerance = BigDecimal::new(1.into(), digits);
    let diff = (a - b).abs();
    assert!(diff < tolerance, "{} != {} (diff {})", a, b, diff);
}

mod pow_integer {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $base:literal ^ $exp:literal, scale=$scale:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let result = pow_integer(&dec($base), &BigInt::from($exp), $scale).unwrap();
                    assert_eq!(impl_fmt::format_plain(&result), $expected);
                }
            }
        };
    }

    impl_case!(two_ten: "2" ^ 10, scale=0 => "1024");
    impl_case!(padded: "2" ^ 3, scale=2 => "8.00");
    impl_case!(one_and_half_squared: "1.5" ^ 2, scale=5 => "2.25000");
    impl_case!(truncated: "1.5" ^ 3, scale=1 => "3.3");
    impl_case!(negative_base_odd: "-3" ^ 3, scale=0 => "-27");
    impl_case!(negative_exponent: "2" ^ -2, scale=4 => "0.2500");
    impl_case!(negative_exponent_repeating: "3" ^ -1, scale=6 => "0.333333");
    impl_case!(zero_exponent: "123.456" ^ 0, scale=2 => "1.00");
    impl_case!(large: "10" ^ 30, scale=0 => "1000000000000000000000000000000");

    #[test]
    fn zero_to_negative_power() {
        assert_eq!(pow_integer(&dec("0"), &BigInt::from(-1), 5), Err(Error::DivisionByZero));
    }

    #[test]
    fn exponent_out_of_range() {
        let exp = BigInt::from(i64::MAX) * 2;
        assert!(matches!(pow_integer(&dec("2"), &exp, 0), Err(Error::InvalidArgument(_))));
    }
}

mod pow_fractional {
    use super::*;

    #[test]
    fn sqrt_two() {
        let ctx = Context::default().with_scale(30);
        let result = pow(&dec("2"), &dec("0.5"), &ctx).unwrap();
        assert_close(&result, &dec("1.414213562373095048801688724209698"), 29);
    }

    #[test]
    fn cube_root_of_27() {
        let ctx = Context::default().with_scale(10);
        let third = arithmetic::div(&dec("1"), &dec("3"), 40).unwrap();
        let result = pow(&dec("27"), &third, &ctx).unwrap();
        assert_close(&result, &dec("3"), 9);
    }

    #[test]
    fn result_has_requested_scale() {
        let ctx = Context::default().with_scale(8).with_trim_trailing_zeros(false);
        let result = pow(&dec("10"), &dec("1.5"), &ctx).unwrap();
        assert_eq!(impl_fmt::format_plain(&result), "31.62277660");
    }

    #[test]
    fn negative_exponent() {
        let ctx = Context::default().with_scale(12);
        let result = pow(&dec("4"), &dec("-0.5"), &ctx).unwrap();
        assert_close(&result, &dec("0.5"), 11);
    }

    #[test]
    fn zero_base() {
        let ctx = Context::default();
        assert_eq!(pow(&dec("0"), &dec("0.5"), &ctx).unwrap(), BigDecimal::zero());
        assert_eq!(pow(&dec("0"), &dec("-0.5"), &ctx), Err(Error::DivisionByZero));
    }

    #[test]
    fn negative_base() {
        let ctx = Context::default();
        assert!(matches!(pow(&dec("-8"), &dec("0.5"), &ctx), Err(Error::UndefinedResult(_))));
    }

    #[test]
    fn integral_exponent_with_zero_fraction_uses_integer_path() {
        let ctx = Context::default().with_scale(3).with_trim_trailing_zeros(false);
        let result = pow(&dec("3"), &dec("2.000"), &ctx).unwrap();
        assert_eq!(impl_fmt::format_plain(&result), "9.000");
    }
}

mod powmod {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $base:literal ^ $exp:literal mod $m:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let ctx = Context::default();
                    let result = powmod(&dec($base), &dec($exp), &dec($m), &ctx).unwrap();
                    assert_eq!(impl_fmt::format_plain(&result), $expected);
                }
            }
        };
    }

    impl_case!(small: "4" ^ "13" mod "497" => "445");
    impl_case!(zero_exponent: "7" ^ "0" mod "5" => "1");
    impl_case!(negative_base_odd: "-2" ^ "3" mod "5" => "-3");
    impl_case!(negative_base_even: "-2" ^ "2" mod "5" => "4");
    impl_case!(negative_modulus: "2" ^ "3" mod "-5" => "3");
    impl_case!(large: "2" ^ "100" mod "1000000007" => "976371285");
    impl_case!(fractional_base: "1.5" ^ "3" mod "2" => "1.375");
    impl_case!(fractional_modulus: "3" ^ "2" mod "2.5" => "1.5");

    #[test]
    fn negative_exponent() {
        let ctx = Context::default();
        assert_eq!(
            powmod(&dec("2"), &dec("-1"), &dec("5"), &ctx),
            Err(Error::invalid("Exponent can't be negative"))
        );
    }

    #[test]
    fn zero_modulus() {
        let ctx = Context::default();
        assert_eq!(
            powmod(&dec("2"), &dec("3"), &dec("0.00"), &ctx),
            Err(Error::invalid("Modulus can't be zero"))
        );
    }

    #[test]
    fn fractional_exponent() {
        let ctx = Context::default().with_scale(20);
        let result = powmod(&dec("4"), &dec("1.5"), &dec("5"), &ctx).unwrap();
        assert_close(&result, &dec("3"), 18);
    }

    #[test]
    fn untrimmed_result_keeps_scale() {
        let ctx = Context::default().with_scale(4).with_trim_trailing_zeros(false);
        let result = powmod(&dec("4"), &dec("13"), &dec("497"), &ctx).unwrap();
        assert_eq!(impl_fmt::format_plain(&result), "445.0000");
    }
}
