// Property tests to be included by lib.rs (if enabled)


mod canonical_form {
    use super::*;

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "[-+]?[0-9]{0,12}(\\.[0-9]{0,8})?") {
            let once = normalize(s.as_str()).unwrap();
            let twice = normalize(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalize_scientific_is_idempotent(m in -99999i32..99999, e in 0u32..40, negative_exponent: bool) {
            let sign = if negative_exponent { "-" } else { "" };
            let s = format!("{}E{}{}", m, sign, e);
            let once = normalize(s.as_str()).unwrap();
            let twice = normalize(once.as_str()).unwrap();
            prop_assert_eq!(&once, &twice);
            prop_assert!(!once.ends_with('.') && once != "-0");
        }

        #[test]
        fn normalized_text_has_no_trailing_zeros(n: i64, scale in 0i64..30) {
            let s = normalize(BigDecimal::new(n.into(), scale)).unwrap();
            if s.contains('.') {
                prop_assert!(!s.ends_with('0'), "{}", s);
            }
        }
    }
}

mod float_conversion {
    use super::*;

    proptest! {
        #[test]
        fn float_round_trips(f in -1e15f64..1e15f64) {
            let s = normalize(f).unwrap();
            prop_assert_eq!(s.parse::<f64>().unwrap(), f);
        }

        #[test]
        fn float_is_minimal(f in -1e15f64..1e15f64) {
            let n = Number::try_from(f).unwrap();
            let scale = n.scale();
            if scale > 0 {
                let exact = parsing::exact_from_f64(f).unwrap();
                let shorter = exact.with_scale_round(scale as i64 - 1, RoundingMode::HalfDown);
                let reread = impl_fmt::format_plain(&shorter).parse::<f64>().unwrap();
                prop_assert_ne!(reread, f);
            }
        }
    }
}

mod comparison {
    use super::*;

    proptest! {
        #[test]
        fn compare_is_antisymmetric(a: i64, a_scale in 0i64..20, b: i64, b_scale in 0i64..20) {
            let a = BigDecimal::new(a.into(), a_scale);
            let b = BigDecimal::new(b.into(), b_scale);
            prop_assert_eq!(compare(&a, &b).unwrap(), compare(&b, &a).unwrap().reverse());
            prop_assert_eq!(compare(&a, &a).unwrap(), Ordering::Equal);
        }

        #[test]
        fn max_is_not_less_than_min(values in proptest::collection::vec(any::<i32>(), 1..20)) {
            let largest = max(values.iter().copied()).unwrap().unwrap();
            let smallest = min(values.iter().copied()).unwrap().unwrap();
            prop_assert!(smallest <= largest);
            prop_assert_eq!(largest, Number::from(*values.iter().max().unwrap()));
        }
    }
}

mod bitwise_logic {
    use super::*;

    macro_rules! impl_test {
        ($op:ident, $native:tt) => {
            paste! { proptest! {
                #[test]
                fn [< $op:lower _matches_native >](a: u64, b: u64) {
                    let result = Number::from(a).bit_op(b, BitOp::$op).unwrap();
                    prop_assert_eq!(result, Number::from(a $native b));
                }

                #[test]
                fn [< $op:lower _matches_native_u128 >](a: u128, b: u128) {
                    let result = Number::from(a).bit_op(b, BitOp::$op).unwrap();
                    prop_assert_eq!(result, Number::from(a $native b));
                }
            } }
        };
    }

    impl_test!(And, &);
    impl_test!(Or, |);
    impl_test!(Xor, ^);

    /// Bytes needed for the larger magnitude, at least one
    fn common_byte_length(a: i16, b: i16) -> u32 {
        let widest = cmp::max(a.unsigned_abs(), b.unsigned_abs());
        cmp::max(1, (16 - widest.leading_zeros() + 7) / 8)
    }

    macro_rules! impl_signed_test {
        ($op:ident, $native:tt) => {
            paste! { proptest! {
                #[test]
                fn [< $op:lower _matches_native_signed >](a: i16, b: i16) {
                    let native = (a $native b) as i32;
                    // a negative result of exactly -256^len has no sign byte to live in
                    let wrapped = -(1i32 << (8 * common_byte_length(a, b)));
                    prop_assume!(native != wrapped);

                    let result = Number::from(a).bit_op(b, BitOp::$op).unwrap();
                    prop_assert_eq!(result, Number::from(native));
                }
            } }
        };
    }

    impl_signed_test!(And, &);
    impl_signed_test!(Or, |);
    impl_signed_test!(Xor, ^);

    #[test]
    fn negative_wrap_is_the_only_mismatch() {
        let result = Number::from(-255).bit_and(-2).unwrap();
        assert_eq!(result, Number::from(0));
        assert_eq!(-255i32 & -2, -(1 << 8));
    }
}

mod hexadecimal {
    use super::*;

    proptest! {
        #[test]
        fn hex_round_trips(n: u128) {
            let hex = Number::from(n).to_hex().unwrap();
            prop_assert_eq!(&hex, &format!("{:x}", n));
            prop_assert_eq!(Number::from_hex(&hex).unwrap(), Number::from(n));
        }

        #[test]
        fn hex_round_trips_beyond_native_width(hi: u128, lo: u128) {
            let n = (BigInt::from(hi) << 128) + BigInt::from(lo);
            let number = Number::from(n);
            let hex = number.to_hex().unwrap();
            prop_assert_eq!(Number::from_hex(&hex).unwrap(), number);
        }
    }
}

mod modular_exponentiation {
    use super::*;

    proptest! {
        #[test]
        fn powmod_matches_pow_then_mod(b: i32, e in 0u32..64, m in prop::num::i32::ANY.prop_filter("non-zero", |m| *m != 0)) {
            let result = Number::from(b).powmod(e, m).unwrap();
            let expected = BigInt::from(b).pow(e) % BigInt::from(m);
            prop_assert_eq!(result, Number::from(expected));
        }
    }
}

mod transcendental_kernel {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn ln_inverts_exp(k in -5000i32..=5000) {
            let x = Number::new(BigDecimal::new(k.into(), 2));
            let ln = x.exp().ln().into_value().unwrap();
            let diff = (&ln.value - &x.value).abs();
            prop_assert!(diff < BigDecimal::new(1.into(), 40), "ln(exp({})) = {}", x, ln);
        }
    }
}
