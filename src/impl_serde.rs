//!
//! Support for serde implementations
//!
use crate::*;
use serde_crate::{de, ser};


impl ser::Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a Number
struct NumberVisitor;

impl<'de> de::Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a number or formatted decimal string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Number, E>
    where
        E: de::Error,
    {
        value.into_number().map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Number, E>
    where
        E: de::Error,
    {
        Ok(Number::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Number, E>
    where
        E: de::Error,
    {
        Ok(Number::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Number, E>
    where
        E: de::Error,
    {
        Ok(Number::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<Number, E>
    where
        E: de::Error,
    {
        Ok(Number::from(value))
    }

    fn visit_f32<E>(self, value: f32) -> Result<Number, E>
    where
        E: de::Error,
    {
        Number::try_from(value).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Number, E>
    where
        E: de::Error,
    {
        Number::try_from(value).map_err(|err| E::custom(format!("{}", err)))
    }
}

impl<'de> de::Deserialize<'de> for Number {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(NumberVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens, assert_de_tokens_error
    };

    mod serde_serialize_deserialize_str {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $input:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let expected = Token::Str($output);
                    let number: Number = $input.parse().unwrap();
                    assert_tokens(&number, &[expected]);
                }
            }
        }

        impl_case!(case_1d0: "1.0" => "1.0");
        impl_case!(case_0d5: "0.5" => "0.5");
        impl_case!(case_50: "50" => "50");
        impl_case!(case_50000: "50000" => "50000");
        impl_case!(case_d25: ".25" => "0.25");
        impl_case!(case_n0d001: "-0.001" => "-0.001");
        impl_case!(case_40d0010: "40.0010" => "40.0010");
    }

    mod serde_deserialize_scientific {
        use super::*;

        #[test]
        fn case_1e3() {
            assert_de_tokens(&Number::from(1000), &[Token::Str("1E3")]);
        }

        #[test]
        fn case_12d34e1() {
            let expected: Number = "123.4".parse().unwrap();
            assert_de_tokens(&expected, &[Token::Str("12.34e1")]);
        }
    }

    mod serde_deserialize_int {
        use super::*;

        macro_rules! impl_case {
            ( $( $ttype:ident ),+ : -$input:literal ) => {
                $( paste! { impl_case!([< case_n $input _ $ttype:lower >] : $ttype : -$input); } )*
            };
            ( $( $ttype:ident ),+ : $input:literal ) => {
                $( paste! { impl_case!([< case_ $input _ $ttype:lower >] : $ttype : $input); } )*
            };
            ($name:ident : $type:ident : $input:literal) => {
                #[test]
                fn $name() {
                    let expected = Number::from($input);
                    let token = Token::$type($input);
                    assert_de_tokens(&expected, &[token]);
                }
            };
        }

        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 0);
        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 1);
        impl_case!(I8, I16, I32, I64 : -1);
        impl_case!(I64: -99999999999i64);
        impl_case!(I64: -9_223_372_036_854_775_808i64);
    }

    mod serde_deserialize_float {
        use super::*;

        macro_rules! impl_case {
            ( $name:ident : $input:literal => $ttype:ident : $expected:literal ) => {
                paste! {
                    #[test]
                    fn [< $name _ $ttype:lower >]() {
                        let expected: Number = $expected.parse().unwrap();
                        let token = Token::$ttype($input);
                        assert_de_tokens(&expected, &[token]);
                    }
                }
            };
            ( $name:ident : $input:literal => $( $ttype:ident ),+ : $expected:literal ) => {
                $( impl_case!($name : $input => $ttype : $expected); )*
            };
        }

        impl_case!(case_1d0 : 1.0 => F32, F64 : "1");
        impl_case!(case_1d1 : 1.1 => F32, F64 : "1.1");
        impl_case!(case_n869651d9375 : -869651.9375 => F64 : "-869651.9375");
        impl_case!(case_n869651d9131236838 : -869651.9131236838 => F32 : "-869651.94");
        impl_case!(case_0d001834988943300 : 0.001834988943300 => F64 : "0.0018349889433");
    }

    mod serde_deserialize_nan {
        use super::*;

        #[test]
        fn case_f32() {
            let tokens = [ Token::F32(f32::NAN) ];
            assert_de_tokens_error::<Number>(&tokens, "malformed number \"NAN\"");
        }

        #[test]
        fn case_f64() {
            let tokens = [ Token::F64(f64::NAN) ];
            assert_de_tokens_error::<Number>(&tokens, "malformed number \"NAN\"");
        }
    }
}
