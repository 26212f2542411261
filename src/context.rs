// \file src/context.rs

//! A `Context` object is the set of parameters that define otherwise
//! ambiguous arithmetical operations.
//!
//! Operations taking a context follow its scale (the number of digits kept
//! after the decimal point) and its trailing-zero policy. Operations
//! without a `_with_context` suffix use `Context::default()`.

use crate::*;

use stdlib::ops::Deref;


// const DEFAULT_SCALE: u64 = ${RUST_BIGDECIMAL_EXT_DEFAULT_SCALE} or 20;
include!(concat!(env!("OUT_DIR"), "/default_scale.rs"));

/// Fixed scale at which the exponential and logarithm series are evaluated
pub const WORKING_SCALE: u64 = 100;

/// Trailing zeros are trimmed from results unless disabled
pub const DEFAULT_TRIM_TRAILING_ZEROS: bool = true;


/// Parameters that define scale-bounded arithmetic
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    /// Number of digits retained after the decimal point
    scale: u64,

    /// Strip redundant fractional zeros from results
    trim_trailing_zeros: bool,
}

impl Context {
    /// Create context with explicit scale and trailing-zero policy
    pub fn new(scale: u64, trim_trailing_zeros: bool) -> Self {
        Self {
            scale,
            trim_trailing_zeros,
        }
    }

    /// Copy context with new scale
    pub fn with_scale(&self, scale: u64) -> Self {
        Self {
            scale,
            ..*self
        }
    }

    /// Copy context with new trailing-zero policy
    pub fn with_trim_trailing_zeros(&self, trim_trailing_zeros: bool) -> Self {
        Self {
            trim_trailing_zeros,
            ..*self
        }
    }

    /// Digits retained after the decimal point
    pub fn scale(&self) -> u64 {
        self.scale
    }

    /// True if results have their trailing fractional zeros removed
    pub fn trim_trailing_zeros(&self) -> bool {
        self.trim_trailing_zeros
    }

    /// Inflated scale used mid-computation: twice the requested scale
    pub fn working_scale(&self) -> u64 {
        self.scale.saturating_mul(2)
    }

    /// Temporarily replace the scale of this context
    ///
    /// The previous scale is restored when the returned guard is dropped,
    /// on every exit path of the enclosing scope.
    ///
    /// ```
    /// use bigdecimal_ext::Context;
    ///
    /// let mut ctx = Context::default().with_scale(12);
    /// {
    ///     let integer_ctx = ctx.override_scale(0);
    ///     assert_eq!(integer_ctx.scale(), 0);
    /// }
    /// assert_eq!(ctx.scale(), 12);
    /// ```
    pub fn override_scale(&mut self, scale: u64) -> ScaleOverride<'_> {
        let previous = self.scale;
        tracing::trace!(previous, scale, "overriding context scale");
        self.scale = scale;
        ScaleOverride {
            ctx: self,
            previous,
        }
    }

    /// Apply trailing-zero policy to value
    pub(crate) fn format_trailing_zeros(&self, value: BigDecimal) -> BigDecimal {
        if self.trim_trailing_zeros {
            impl_fmt::trim_trailing_zeros(value)
        } else {
            value
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            trim_trailing_zeros: DEFAULT_TRIM_TRAILING_ZEROS,
        }
    }
}


/// Guard returned by [`Context::override_scale`]
///
/// Dereferences to the overridden context.
#[derive(Debug)]
pub struct ScaleOverride<'a> {
    ctx: &'a mut Context,
    previous: u64,
}

impl Deref for ScaleOverride<'_> {
    type Target = Context;

    fn deref(&self) -> &Context {
        self.ctx
    }
}

impl Drop for ScaleOverride<'_> {
    fn drop(&mut self) {
        tracing::trace!(restored = self.previous, "restoring context scale");
        self.ctx.scale = self.previous;
    }
}


#[cfg(test)]
mod test_context {
    use super::*;

    #[test]
    fn default_values() {
        let ctx = Context::default();
        assert_eq!(ctx.scale(), DEFAULT_SCALE);
        assert!(ctx.trim_trailing_zeros());
        assert_eq!(ctx.working_scale(), DEFAULT_SCALE * 2);
    }

    #[test]
    fn builders_copy() {
        let ctx = Context::default();
        let ctx2 = ctx.with_scale(3).with_trim_trailing_zeros(false);
        assert_eq!(ctx.scale(), DEFAULT_SCALE);
        assert_eq!(ctx2.scale(), 3);
        assert!(!ctx2.trim_trailing_zeros());
        assert_eq!(ctx2, Context::new(3, false));
    }

    #[test]
    fn working_scale_saturates() {
        let ctx = Context::default().with_scale(u64::MAX);
        assert_eq!(ctx.working_scale(), u64::MAX);
    }

    #[test]
    fn override_restores_on_drop() {
        let mut ctx = Context::new(7, true);
        {
            let guard = ctx.override_scale(0);
            assert_eq!(guard.scale(), 0);
            assert!(guard.trim_trailing_zeros());
        }
        assert_eq!(ctx.scale(), 7);
    }

    #[test]
    fn override_restores_on_early_return() {
        fn fails(ctx: &mut Context) -> Result<(), Error> {
            let guard = ctx.override_scale(0);
            if guard.scale() == 0 {
                return Err(Error::DivisionByZero);
            }
            Ok(())
        }

        let mut ctx = Context::new(9, false);
        assert_eq!(fails(&mut ctx), Err(Error::DivisionByZero));
        assert_eq!(ctx.scale(), 9);
    }

    #[test]
    fn override_restores_on_unwind() {
        let mut ctx = Context::new(4, true);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = ctx.override_scale(0);
            panic!("unwinding");
        }));
        assert!(result.is_err());
        assert_eq!(ctx.scale(), 4);
    }

    #[test]
    fn trailing_zero_policy() {
        let value: BigDecimal = "1.2500".parse().unwrap();
        let trimmed = Context::default().format_trailing_zeros(value.clone());
        assert_eq!(trimmed.as_bigint_and_exponent().1, 2);

        let kept = Context::default().with_trim_trailing_zeros(false).format_trailing_zeros(value);
        assert_eq!(kept.as_bigint_and_exponent().1, 4);
    }
}
