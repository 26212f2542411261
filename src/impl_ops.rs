//! Implement math operations: Add,Sub, etc
//!
//! Operators are exact, like `BigDecimal`'s. Use the `_with_context`
//! methods of [`Number`] for scale-bounded results.

use crate::*;


impl<'a, 'b> Add<&'b Number> for &'a Number {
    type Output = Number;

    #[inline]
    fn add(self, rhs: &Number) -> Number {
        Number::new(&self.value + &rhs.value)
    }
}

impl<'a, 'b> Sub<&'b Number> for &'a Number {
    type Output = Number;

    #[inline]
    fn sub(self, rhs: &Number) -> Number {
        Number::new(&self.value - &rhs.value)
    }
}

impl<'a, 'b> Mul<&'b Number> for &'a Number {
    type Output = Number;

    #[inline]
    fn mul(self, rhs: &Number) -> Number {
        Number::new(&self.value * &rhs.value)
    }
}

forward_all_binop_to_ref_ref!(impl Add for Number, add);
forward_all_binop_to_ref_ref!(impl Sub for Number, sub);
forward_all_binop_to_ref_ref!(impl Mul for Number, mul);

forward_primitive_binop!(impl Add<i32, i64, u32, u64> for Number, add);
forward_primitive_binop!(impl Sub<i32, i64, u32, u64> for Number, sub);
forward_primitive_binop!(impl Mul<i32, i64, u32, u64> for Number, mul);


impl Neg for Number {
    type Output = Number;

    #[inline]
    fn neg(self) -> Number {
        Number { value: -self.value }
    }
}

impl<'a> Neg for &'a Number {
    type Output = Number;

    #[inline]
    fn neg(self) -> Number {
        Number { value: -&self.value }
    }
}
