// Tests of the Number API, included by lib.rs

fn num(s: &str) -> Number {
    s.parse().unwrap()
}

fn assert_close(a: &Number, b: &Number, digits: i64) {
    let tolerance = BigDecimal::new(1.into(), digits);
    let diff = (&a.value - &b.value).abs();
    assert!(diff < tolerance, "{} != {} (diff {})", a, b, diff);
}


mod normalize {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:expr => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    assert_eq!(normalize($input).unwrap(), $expected);
                }
            }
        };
    }

    impl_case!(int: 42 => "42");
    impl_case!(negative_int: -7i64 => "-7");
    impl_case!(u128_max: u128::MAX => "340282366920938463463374607431768211455");
    impl_case!(float: 1.50 => "1.5");
    impl_case!(float_tenth: 0.1 => "0.1");
    impl_case!(float_negative_zero: -0.0 => "0");
    impl_case!(float_f32: 0.2f32 => "0.2");
    impl_case!(float_integral: 100.0 => "100");
    impl_case!(text_trailing_zeros: "1.50" => "1.5");
    impl_case!(text_all_zeros: "3.000" => "3");
    impl_case!(text_scientific: "1E3" => "1000");
    impl_case!(text_scientific_negative: "-2.5e-3" => "-0.0025");
    impl_case!(text_plus: "+3.400" => "3.4");
    impl_case!(text_negative_zero: "-0" => "0");
    impl_case!(text_negative_zero_fraction: "-0.000" => "0");
    impl_case!(text_garbage: "twelve" => "0");
    impl_case!(text_leading_zeros: "007" => "7");
    impl_case!(decimal: BigDecimal::new(12.into(), -2) => "1200");
    impl_case!(number: num("0.500") => "0.5");

    #[test]
    fn rejects_non_finite_float() {
        assert!(matches!(normalize(f64::INFINITY), Err(Error::MalformedNumber(_))));
    }
}

mod construction {
    use super::*;

    #[test]
    fn strict_parse_rejects_malformed() {
        assert_eq!("1.2.3".parse::<Number>(), Err(Error::malformed("1.2.3")));
        assert!("1E3".parse::<Number>().is_err());
        assert!("".parse::<Number>().is_err());
    }

    #[test]
    fn value_and_scale() {
        let n = num("-12.3400");
        assert_eq!(n.value(), "-12.3400");
        assert_eq!(n.scale(), 4);
        assert_eq!(n.to_canonical_string(), "-12.34");
        assert_eq!(n.to_f64(), Some(-12.34));
        assert_eq!(n.as_bigdecimal(), &BigDecimal::new((-123400).into(), 4));
        assert_eq!(n.into_bigdecimal(), BigDecimal::new((-1234).into(), 2));
    }

    #[test]
    fn negative_scale_is_expanded() {
        let n = Number::new(BigDecimal::new(5.into(), -3));
        assert_eq!(n.scale(), 0);
        assert_eq!(n.value(), "5000");
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(num("1.50"), num("1.5"));
        assert!(num("-1") < num("0.001"));

        let mut a = stdlib::DefaultHasher::new();
        let mut b = stdlib::DefaultHasher::new();
        stdlib::hash::Hash::hash(&num("2.000"), &mut a);
        stdlib::hash::Hash::hash(&num("2"), &mut b);
        assert_eq!(stdlib::hash::Hasher::finish(&a), stdlib::hash::Hasher::finish(&b));
    }

    #[test]
    fn predicates() {
        assert!(num("2.00").is_integer());
        assert!(!num("2.00").has_fractional_part());
        assert!(num("2.01").has_fractional_part());
        assert!(num("-0.1").is_negative());
        assert!(num("0.1").is_positive());
        assert!(num("0.000").is_zero());
        assert!(!num("0").is_negative() && !num("0").is_positive());
    }
}

mod arithmetic_ops {
    use super::*;

    #[test]
    fn exact_and_truncated() {
        let a = num("1.259");
        let b = num("0.001");
        let ctx = Context::default().with_scale(1);
        assert_eq!((&a + &b).value(), "1.260");
        assert_eq!(a.add_with_context(&b, &ctx).value(), "1.2");
        assert_eq!(a.sub_with_context(&b, &ctx).value(), "1.2");
        assert_eq!((&a * &b).value(), "0.001259");
        assert_eq!(a.mul_with_context(&b, &ctx).value(), "0");
    }

    #[test]
    fn owned_operands_stay_usable_with_context() {
        let a = num("2.5");
        let b = num("0.25");
        let ctx = Context::default().with_scale(1);
        let sum = a.add_with_context(&b, &ctx);
        let product = a.mul_with_context(&b, &ctx);
        assert_eq!(sum.value(), "2.7");
        assert_eq!(product.value(), "0.6");
        assert_eq!(a.clone() - b.clone(), num("2.25"));
        assert_eq!(a + b, num("2.75"));
    }

    #[test]
    fn trailing_zero_policy() {
        let ctx = Context::default().with_scale(4).with_trim_trailing_zeros(false);
        assert_eq!(num("1").add_with_context(&num("2"), &ctx).value(), "3.0000");
        assert_eq!(num("1").add_with_context(&num("2"), &ctx.with_trim_trailing_zeros(true)).value(), "3");
    }

    #[test]
    fn division() {
        assert_eq!(num("1").div(3).unwrap().value(), "0.33333333333333333333");
        assert_eq!(num("-2").div_with_context("3", &Context::default().with_scale(3)).unwrap().value(), "-0.666");
        assert_eq!(num("10").div(4).unwrap().value(), "2.5");
        assert_eq!(num("1").div(0), Err(Error::DivisionByZero));
    }

    #[test]
    fn floor_modulo() {
        assert_eq!(num("7").rem(3).unwrap(), Number::from(1));
        assert_eq!(num("-7").rem(3).unwrap(), Number::from(2));
        assert_eq!(num("7").rem(-3).unwrap(), Number::from(-2));
        assert_eq!(num("5.5").rem("2").unwrap(), num("1.5"));
        assert_eq!(num("1").rem("0.00"), Err(Error::DivisionByZero));
    }

    #[test]
    fn div_rem() {
        let (q, r) = num("-7.5").div_rem(2).unwrap();
        assert_eq!(q, Number::from(-4));
        assert_eq!(r, num("0.5"));
    }

    #[test]
    fn sqrt() {
        assert_eq!(num("2").sqrt().unwrap().value(), "1.4142135623730950488");
        assert_eq!(num("16").sqrt().unwrap(), Number::from(4));
        let ctx = Context::default().with_scale(2).with_trim_trailing_zeros(false);
        assert_eq!(num("16").sqrt_with_context(&ctx).unwrap().value(), "4.00");
        assert!(matches!(num("-1").sqrt(), Err(Error::UndefinedResult(_))));
    }

    #[test]
    fn abs_and_neg() {
        assert_eq!(num("-3.5").abs(), num("3.5"));
        assert_eq!(-num("3.5"), num("-3.5"));
    }
}

mod rounding_methods {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $precision:literal => $round:literal, $half_even:literal, $up:literal, $down:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let n = num($input);
                    assert_eq!(n.round($precision).value(), $round);
                    assert_eq!(n.round_half_even($precision).value(), $half_even);
                    assert_eq!(n.round_up($precision).value(), $up);
                    assert_eq!(n.round_down($precision).value(), $down);
                }
            }
        };
    }

    impl_case!(tie_odd: "2.5", 0 => "2", "2", "3", "2");
    impl_case!(tie_even: "3.5", 0 => "3", "4", "4", "3");
    impl_case!(negative_tie: "-2.5", 0 => "-2", "-2", "-2", "-3");
    impl_case!(above_tie: "1.2351", 2 => "1.24", "1.24", "1.24", "1.23");
    impl_case!(hundreds: "1250", -2 => "1200", "1200", "1300", "1200");

    #[test]
    fn with_mode() {
        assert_eq!(num("2.5").round_with_mode(0, RoundingMode::HalfUp).value(), "3");
    }

    #[test]
    fn floor_and_ceil() {
        assert_eq!(num("-1.5").floor(), Number::from(-2));
        assert_eq!(num("-1.5").ceil(), Number::from(-1));
        assert_eq!(num("1.0001").ceil(), Number::from(2));
        assert_eq!(num("7").floor().scale(), 0);
    }
}

mod transcendental {
    use super::*;

    #[test]
    fn exp_of_one() {
        let e = num("2.718281828459045235360287471352662497757247093699959574966967627724076630353547594571382178525166427");
        assert_close(&Number::from(1).exp(), &e, 95);
    }

    #[test]
    fn exp_of_zero() {
        assert_eq!(Number::from(0).exp(), Number::from(1));
    }

    #[test]
    fn ln_sentinels() {
        assert_eq!(Number::from(0).ln(), Logarithm::NegativeInfinity);
        assert_eq!(num("-0.5").ln(), Logarithm::NotANumber);
        assert_eq!(Number::from(0).ln().to_string(), "-INF");
        assert_eq!(num("-2").ln().to_string(), "NAN");
        assert_eq!(num("-2").ln().value(), None);
    }

    #[test]
    fn ln_of_e_squared() {
        let x = Number::from(2).exp();
        let ln = x.ln().into_value().unwrap();
        assert_close(&ln, &Number::from(2), 90);
    }

    #[test]
    fn fractional_pow() {
        let ctx = Context::default().with_scale(10);
        let result = num("2").pow_with_context("0.5", &ctx).unwrap();
        assert_eq!(result.value(), "1.4142135623");
        assert_eq!(num("2").pow(10).unwrap(), Number::from(1024));
        assert!(matches!(num("-2").pow("0.5"), Err(Error::UndefinedResult(_))));
    }
}

mod powmod {
    use super::*;

    #[test]
    fn integer_operands() {
        assert_eq!(Number::from(4).powmod(13, 497).unwrap(), Number::from(445));
        assert_eq!(Number::from(2).powmod("100", "1000000007").unwrap(), Number::from(976371285));
    }

    #[test]
    fn fractional_operand() {
        assert_eq!(num("1.5").powmod(3, 2).unwrap(), num("1.375"));
    }

    #[test]
    fn invalid_arguments() {
        assert_eq!(Number::from(2).powmod(-1, 5), Err(Error::invalid("Exponent can't be negative")));
        assert_eq!(Number::from(2).powmod(3, "0.000"), Err(Error::invalid("Modulus can't be zero")));
    }

    #[test]
    fn context_scale() {
        let ctx = Context::default().with_scale(2).with_trim_trailing_zeros(false);
        assert_eq!(Number::from(3).powmod_with_context(4, 7, &ctx).unwrap().value(), "4.00");
    }
}

mod bitwise_ops {
    use super::*;

    #[test]
    fn and_or_xor() {
        assert_eq!(Number::from(5).bit_and(3).unwrap(), Number::from(1));
        assert_eq!(Number::from(5).bit_or(3).unwrap(), Number::from(7));
        assert_eq!(Number::from(5).bit_xor(3).unwrap(), Number::from(6));
        assert_eq!(Number::from(-1).bit_and(1).unwrap(), Number::from(1));
        assert_eq!(Number::from(12).bit_op("10", BitOp::Xor).unwrap(), Number::from(6));
    }

    #[test]
    fn beyond_native_width() {
        let a = Number::from_hex("ffffffffffffffffffffffffffffffffff").unwrap();
        let b = Number::from_hex("100000000000000000000000000000000").unwrap();
        assert_eq!(a.bit_and(&b).unwrap(), b);
        assert_eq!(a.bit_xor(&b).unwrap().to_hex().unwrap(), "feffffffffffffffffffffffffffffffff");
    }

    #[test]
    fn fractional_operand() {
        assert!(matches!(num("1.5").bit_or(1), Err(Error::InvalidArgument(_))));
        assert_eq!(num("4.00").bit_or(1).unwrap(), Number::from(5));
    }
}

mod hex {
    use super::*;

    #[test]
    fn to_and_from_hex() {
        assert_eq!(Number::from(255).to_hex().unwrap(), "ff");
        assert_eq!(Number::from_hex("ff").unwrap().to_string(), "255");
        assert_eq!(Number::from_hex("0x10").unwrap(), Number::from(16));
        assert_eq!(Number::from(0).to_hex().unwrap(), "0");
    }

    #[test]
    fn errors() {
        assert!(matches!(Number::from(-1).to_hex(), Err(Error::InvalidArgument(_))));
        assert!(matches!(Number::from_hex("xyz"), Err(Error::MalformedNumber(_))));
    }
}

mod factorial {
    use super::*;

    #[test]
    fn values() {
        assert_eq!(Number::from(5).factorial().unwrap().to_string(), "120");
        assert_eq!(Number::from(0).factorial().unwrap(), Number::from(1));
        assert_eq!(num("20.0").factorial().unwrap().to_string(), "2432902008176640000");
    }

    #[test]
    fn errors() {
        assert!(matches!(Number::from(-1).factorial(), Err(Error::InvalidArgument(_))));
        assert!(matches!(num("2.5").factorial(), Err(Error::InvalidArgument(_))));
    }
}
