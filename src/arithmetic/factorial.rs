//! factorial of non-negative integers

use crate::*;


/// n! as iterative product 1·2·…·n
pub(crate) fn factorial(n: &BigDecimal) -> Result<BigDecimal, Error> {
    if arithmetic::has_fractional_part(n) {
        return Err(Error::invalid("Number has to be an integer"));
    }
    if n.is_negative() {
        return Err(Error::invalid("Number has to be greater than or equal to 0"));
    }

    let n = arithmetic::integer_part(n)
                       .to_u64()
                       .ok_or_else(|| Error::invalid("Number is too large for factorial"))?;

    let mut product = BigInt::one();
    for i in 2..=n {
        product *= i;
    }
    Ok(BigDecimal::from(product))
}
