// Rounding a decimal to a precision, for each mode

use paste::paste;

macro_rules! impl_test {
    ( $($mode:ident),+ => $expected:literal) => {
        $(
            paste! {
                #[test]
                fn [< mode_ $mode >]() {
                    let (input, precision) = test_input();
                    let n: BigDecimal = input.parse().unwrap();
                    let result = round(&n, precision, RoundingMode::$mode);
                    assert_eq!(impl_fmt::format_plain(&result), $expected);
                }
            }
        )*
    }
}

macro_rules! define_test_input {
    ( $input:literal, precision=$precision:literal ) => {
        fn test_input() -> (&'static str, i64) { ($input, $precision) }
    };
}

mod case_2d5 {
    use super::*;

    define_test_input!("2.5", precision=0);

    impl_test!(HalfDown, HalfEven, Floor => "2");
    impl_test!(Ceiling, HalfUp => "3");
}

mod case_neg_2d5 {
    use super::*;

    define_test_input!("-2.5", precision=0);

    impl_test!(HalfDown, HalfEven, Ceiling => "-2");
    impl_test!(Floor, HalfUp => "-3");
}

mod case_2d51 {
    use super::*;

    define_test_input!("2.51", precision=0);

    impl_test!(HalfDown, HalfEven, HalfUp, Ceiling => "3");
    impl_test!(Floor => "2");
}

mod case_3d5 {
    use super::*;

    define_test_input!("3.5", precision=0);

    impl_test!(HalfEven, HalfUp, Ceiling => "4");
    // ties round toward zero, not to even
    impl_test!(Floor, HalfDown => "3");
}

mod case_1d2345 {
    use super::*;

    define_test_input!("1.2345", precision=3);

    impl_test!(HalfDown, HalfEven, Floor => "1.234");
    impl_test!(HalfUp, Ceiling => "1.235");
}

mod case_neg_1d2345 {
    use super::*;

    define_test_input!("-1.2345", precision=3);

    impl_test!(HalfDown, HalfEven, Ceiling => "-1.234");
    impl_test!(HalfUp, Floor => "-1.235");
}

mod case_1d5_pads {
    use super::*;

    define_test_input!("1.5", precision=3);

    impl_test!(HalfDown, HalfEven, HalfUp, Ceiling, Floor => "1.500");
}

mod case_1250_tens {
    use super::*;

    define_test_input!("1250", precision=-2);

    impl_test!(HalfDown, HalfEven, Floor => "1200");
    impl_test!(HalfUp, Ceiling => "1300");
}

#[test]
fn default_mode_is_half_toward_zero() {
    assert_eq!(DEFAULT_ROUNDING_MODE, RoundingMode::HalfDown);
}
