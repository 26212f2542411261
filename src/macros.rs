// \file src/macros.rs
//! macros for operator forwarding and variadic reductions

/// Largest of any number of values convertible to [`Number`](crate::Number)
///
/// ```
/// # use bigdecimal_ext::{max, Number};
/// assert_eq!(max!(3, "1E1", 2.5).unwrap(), Some(Number::from(10)));
/// ```
#[macro_export]
macro_rules! max {
    ($($value:expr),+ $(,)?) => {
        (|| -> Result<Option<$crate::Number>, $crate::Error> {
            $crate::max([$($crate::IntoNumber::into_number($value)?),+])
        })()
    };
}

/// Smallest of any number of values convertible to [`Number`](crate::Number)
///
/// ```
/// # use bigdecimal_ext::{min, Number};
/// assert_eq!(min!("-0.5", 2, 1u8).unwrap(), Some("-0.5".parse().unwrap()));
/// ```
#[macro_export]
macro_rules! min {
    ($($value:expr),+ $(,)?) => {
        (|| -> Result<Option<$crate::Number>, $crate::Error> {
            $crate::min([$($crate::IntoNumber::into_number($value)?),+])
        })()
    };
}


macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, &other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(self, &other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, other)
            }
        }
    };
}

// Forward everything to ref-ref, when reusing storage is not helpful
macro_rules! forward_all_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
    };
}

macro_rules! forward_primitive_binop {
    (impl $imp:ident<$($t:ty),+> for Number, $method:ident) => {
        $(
            impl $imp<$t> for Number {
                type Output = Number;

                #[inline]
                fn $method(self, other: $t) -> Number {
                    $imp::$method(&self, &Number::from(other))
                }
            }

            impl<'a> $imp<$t> for &'a Number {
                type Output = Number;

                #[inline]
                fn $method(self, other: $t) -> Number {
                    $imp::$method(self, &Number::from(other))
                }
            }
        )*
    };
}
