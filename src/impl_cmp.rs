//! Implementation of comparison operations
//!
//! `Number` is `Ord` by value. The free functions here accept any
//! [`IntoNumber`] operand, converting each the way [`normalize`] does.
//!

use crate::*;


/// Three-way exact comparison of two values
///
/// `Ordering::Less` when the left operand is smaller; `ordering as i8`
/// gives the `-1`, `0`, `1` convention.
///
/// ```
/// # use bigdecimal_ext::compare;
/// # use std::cmp::Ordering;
/// assert_eq!(compare("1.50", 1.5).unwrap(), Ordering::Equal);
/// assert_eq!(compare(-2, "1E1").unwrap() as i8, -1);
/// ```
pub fn compare<A, B>(a: A, b: B) -> Result<Ordering, Error>
where
    A: IntoNumber,
    B: IntoNumber,
{
    let a = a.into_number()?;
    let b = b.into_number()?;
    Ok(arithmetic::compare(&a.value, &b.value, None))
}

/// Compare after truncating both values to the context scale
///
/// ```
/// # use bigdecimal_ext::{compare_with_context, Context};
/// # use std::cmp::Ordering;
/// let ctx = Context::default().with_scale(2);
/// assert_eq!(compare_with_context("1.001", "1.009", &ctx).unwrap(), Ordering::Equal);
/// ```
pub fn compare_with_context<A, B>(a: A, b: B, ctx: &Context) -> Result<Ordering, Error>
where
    A: IntoNumber,
    B: IntoNumber,
{
    let a = a.into_number()?;
    let b = b.into_number()?;
    Ok(arithmetic::compare(&a.value, &b.value, Some(ctx.scale())))
}

/// Largest of the values, None if there are none
///
/// Of equal values the first is kept. See also the variadic [`max!`].
///
pub fn max<I>(values: I) -> Result<Option<Number>, Error>
where
    I: IntoIterator,
    I::Item: IntoNumber,
{
    reduce(values, Ordering::Greater)
}

/// Smallest of the values, None if there are none
///
/// Of equal values the first is kept. See also the variadic [`min!`].
///
pub fn min<I>(values: I) -> Result<Option<Number>, Error>
where
    I: IntoIterator,
    I::Item: IntoNumber,
{
    reduce(values, Ordering::Less)
}

/// Keep the value that compares `replace_when` to the one kept so far
fn reduce<I>(values: I, replace_when: Ordering) -> Result<Option<Number>, Error>
where
    I: IntoIterator,
    I::Item: IntoNumber,
{
    let mut kept: Option<Number> = None;
    for value in values {
        let number = value.into_number()?;
        kept = match kept {
            Some(current) if number.cmp(&current) != replace_when => Some(current),
            _ => Some(number),
        };
    }
    Ok(kept)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compare_is_exact() {
        assert_eq!(compare("1.00001", "1.00002").unwrap(), Ordering::Less);
        assert_eq!(compare(3, "3.000").unwrap(), Ordering::Equal);
        assert_eq!(compare("-0.5", -1).unwrap(), Ordering::Greater);
    }

    #[test]
    fn compare_truncates_with_context() {
        let ctx = Context::default().with_scale(4);
        assert_eq!(compare_with_context("1.00001", "1.00002", &ctx).unwrap(), Ordering::Equal);

        let ctx = ctx.with_scale(0);
        assert_eq!(compare_with_context("-1.9", "-1.1", &ctx).unwrap(), Ordering::Equal);
    }

    #[test]
    fn compare_rejects_non_finite() {
        assert!(compare(f64::NAN, 1).is_err());
    }

    #[test]
    fn max_and_min() {
        let values = ["3", "-1.5", "1E1", "7.25"];
        assert_eq!(max(values.iter().copied()).unwrap(), Some(Number::from(10)));
        assert_eq!(min(values.iter().copied()).unwrap(), Some("-1.5".parse().unwrap()));
    }

    #[test]
    fn max_of_numbers_by_ref() {
        let numbers: Vec<Number> = vec![Number::from(2), Number::from(9), Number::from(4)];
        assert_eq!(max(&numbers).unwrap(), Some(Number::from(9)));
        assert_eq!(min(&numbers).unwrap(), Some(Number::from(2)));
    }

    #[test]
    fn empty_input() {
        assert_eq!(max(Vec::<i32>::new()).unwrap(), None);
        assert_eq!(min(Vec::<&str>::new()).unwrap(), None);
    }

    #[test]
    fn equal_values_keep_first() {
        let result = max(vec!["2.0", "2"]).unwrap().unwrap();
        assert_eq!(result.value(), "2.0");

        let result = min(vec!["2", "2.00"]).unwrap().unwrap();
        assert_eq!(result.value(), "2");
    }

    #[test]
    fn error_stops_reduction() {
        assert!(max(vec![1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn variadic_macros() {
        assert_eq!(max!(1, 5, 3).unwrap(), Some(Number::from(5)));
        assert_eq!(min!("4", "0.5", "2").unwrap(), Some("0.5".parse().unwrap()));
    }
}
