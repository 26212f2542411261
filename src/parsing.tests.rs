// Test strict and lenient text parsing and float conversion,
// included by parsing.rs

use paste::paste;


mod strict {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let d = parse_strict($input).unwrap();
                    assert_eq!(impl_fmt::format_plain(&d), $expected);
                }
            }
        };
        ($name:ident: $input:literal => Err) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    assert_eq!(parse_strict($input), Err(Error::malformed($input)));
                }
            }
        };
    }

    impl_case!(int: "123" => "123");
    impl_case!(keeps_scale: "1.500" => "1.500");
    impl_case!(plus_sign: "+7" => "7");
    impl_case!(negative: "-0.25" => "-0.25");
    impl_case!(negative_zero: "-0.0" => "0.0");
    impl_case!(leading_point: ".5" => "0.5");
    impl_case!(trailing_point: "5." => "5");
    impl_case!(leading_zeros: "007.10" => "7.10");

    impl_case!(empty: "" => Err);
    impl_case!(only_point: "." => Err);
    impl_case!(only_sign: "-" => Err);
    impl_case!(letters: "12a" => Err);
    impl_case!(exponent: "1e3" => Err);
    impl_case!(spaces: " 1" => Err);
    impl_case!(two_points: "1.2.3" => Err);
    impl_case!(non_ascii_digit: "\u{663}" => Err);
}

mod lenient {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let d = parse_lenient($input).unwrap();
                    assert_eq!(impl_fmt::format_plain(&d), $expected);
                }
            }
        };
    }

    impl_case!(plain: "1.50" => "1.50");
    impl_case!(scientific: "1E3" => "1000");
    impl_case!(scientific_lowercase: "2.5e2" => "250");
    impl_case!(scientific_plus: "1E+2" => "100");
    impl_case!(scientific_negative_exponent: "1.5E-3" => "0.0015");
    impl_case!(scientific_negative_mantissa: "-1.25E-1" => "-0.125");
    impl_case!(scientific_trims: "1.000E1" => "10");
    impl_case!(scientific_in_text: "value: 4E2!" => "400");
    impl_case!(strips_plus: "+12.5" => "12.5");
    impl_case!(strips_letters: "12abc" => "12");
    impl_case!(strips_separators: "1,234,567" => "1234567");
    impl_case!(negative_zero: "-0" => "0");
    impl_case!(garbage: "abc" => "0");
    impl_case!(empty: "" => "0");
    impl_case!(misplaced_sign: "1-2" => "0");
    impl_case!(leading_point: "-.5" => "-0.5");
    impl_case!(non_ascii_digit: "\u{663}" => "0");
    impl_case!(non_ascii_digit_scientific: "\u{663}E2" => "0");
    impl_case!(non_ascii_digit_mantissa: "1\u{663}E2" => "12");

    #[test]
    fn scientific_exponent_overflow() {
        let input = "1E99999999999999999999999";
        assert!(matches!(parse_lenient(input), Err(Error::MalformedNumber(_))));
    }

    #[test]
    fn scientific_exponent_too_large() {
        assert!(matches!(parse_lenient("1E2000000"), Err(Error::InvalidArgument(_))));
    }
}

mod float {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exact:literal, $minimal:literal) => {
            paste! {
                #[test]
                fn [< exact_ $name >]() {
                    let d = exact_from_f64($input).unwrap();
                    assert_eq!(impl_fmt::format_plain(&d), $exact);
                }

                #[test]
                fn [< minimal_ $name >]() {
                    let d = float_to_decimal_f64($input).unwrap();
                    assert_eq!(impl_fmt::format_plain(&d), $minimal);
                }
            }
        };
    }

    impl_case!(case_1d5: 1.5 => "1.5", "1.5");
    impl_case!(case_n2d5: -2.5 => "-2.5", "-2.5");
    impl_case!(case_0d1: 0.1 => "0.1000000000000000055511151231257827021181583404541015625", "0.1");
    impl_case!(case_1e21: 1e21 => "1000000000000000000000", "1000000000000000000000");
    impl_case!(case_1en7: 1e-7 => "0.0000000999999999999999954748111825886258685613938723690807819366455078125", "0.0000001");
    impl_case!(case_zero: 0.0 => "0", "0");
    impl_case!(case_negative_zero: -0.0 => "0", "0");

    #[test]
    fn sum_of_tenths_keeps_error_digits() {
        let d = float_to_decimal_f64(0.1 + 0.2).unwrap();
        assert_eq!(impl_fmt::format_plain(&d), "0.30000000000000004");
    }

    #[test]
    fn smallest_subnormal() {
        let d = exact_from_f64(5e-324).unwrap();
        let (int, scale) = d.as_bigint_and_exponent();
        assert_eq!(scale, 1074);
        assert_eq!(int, BigInt::from(5u8).pow(1074u32));
        let minimal = float_to_decimal_f64(5e-324).unwrap();
        assert_eq!(minimal, BigDecimal::new(5.into(), 324));
    }

    #[test]
    fn subnormal_with_trailing_zero_bits() {
        // 4 · 2^-1074 = 2^-1072
        let d = exact_from_f64(f64::from_bits(4)).unwrap();
        assert_eq!(d, BigDecimal::new(BigInt::from(5u8).pow(1072u32), 1072));

        let negative = exact_from_f64(-f64::from_bits(4)).unwrap();
        assert_eq!(negative, -d);
    }

    #[test]
    fn largest_subnormal_is_below_smallest_normal() {
        let largest_subnormal = exact_from_f64(f64::from_bits((1 << 52) - 1)).unwrap();
        let smallest_normal = exact_from_f64(f64::MIN_POSITIVE).unwrap();
        assert!(largest_subnormal < smallest_normal);
        assert!(largest_subnormal.is_positive());
    }

    #[test]
    fn negative_zero() {
        assert_eq!(exact_from_f64(-0.0).unwrap(), BigDecimal::zero());
        assert_eq!(impl_fmt::format_plain(&float_to_decimal_f64(-0.0).unwrap()), "0");
    }

    #[test]
    fn not_finite() {
        assert!(matches!(exact_from_f64(f64::NAN), Err(Error::MalformedNumber(_))));
        assert!(matches!(exact_from_f64(f64::INFINITY), Err(Error::MalformedNumber(_))));
        assert!(matches!(float_to_decimal_f32(f32::NEG_INFINITY), Err(Error::MalformedNumber(_))));
        assert_eq!(minimal_decimal_from_f64(f64::NAN), None);
    }

    #[test]
    fn case_f32() {
        for &(input, exact, minimal) in &[
            (21509.2f32, "21509.19921875", "21509.2"),
            (0.1f32, "0.100000001490116119384765625", "0.1"),
            (123456789f32, "123456792", "123456792"),
            (-0.15625f32, "-0.15625", "-0.15625"),
        ] {
            assert_eq!(impl_fmt::format_plain(&exact_from_f32(input).unwrap()), exact);
            assert_eq!(impl_fmt::format_plain(&float_to_decimal_f32(input).unwrap()), minimal);
        }
    }
}
