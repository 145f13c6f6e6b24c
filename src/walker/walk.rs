// ============================================================================
// Walk Trait
// Shape dispatch for the recursive rounder, plus the numeric leaves
// ============================================================================

use super::context::Context;
use super::errors::{PathSegment, RoundError};
use crate::numeric::{decimal, round_decimal};
use rust_decimal::Decimal;

/// A value the rounder can descend into.
///
/// Each implementation decides which shape the type has:
/// - indirection (`Box`, `Option`, `&mut`, cells and locks) forwards `ctx` unchanged
/// - composites (`#[derive(Walk)]` structs and enums) call [`walk_member`] per field
/// - sequences and maps walk every element with the inherited `ctx`
/// - float leaves are rounded, everything else is left alone
///
/// Implementations stop at the first error and return it with their own
/// path segment prepended.
pub trait Walk {
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError>;
}

/// Round every float reachable from `value`.
///
/// `precision` applies wherever no member tag overrides it. The walk is
/// fail-fast: values visited before an error keep their rounded state, the
/// rest are untouched.
///
/// ```
/// let mut rates = vec![0.12345, 2.0f64.sqrt()];
/// round_tree::recursive(&mut rates, 2).unwrap();
/// assert_eq!(rates, vec![0.12, 1.41]);
/// ```
pub fn recursive<T: Walk + ?Sized>(value: &mut T, precision: i32) -> Result<(), RoundError> {
    let span = tracing::debug_span!("round_recursive", precision);
    let _guard = span.enter();

    value.walk(Context::new(precision)).map_err(|err| {
        tracing::debug!("Rounding stopped: {}", err);
        err
    })
}

/// Walk one composite member.
///
/// `tag`, when present, is parsed and applied to `ctx` for this member and
/// everything beneath it. Errors are prefixed with `.name`.
pub fn walk_member<T: Walk + ?Sized>(
    name: &str,
    tag: Option<&str>,
    member: &mut T,
    ctx: Context,
) -> Result<(), RoundError> {
    let ctx = match tag {
        Some(tag) => ctx
            .with_tag(tag)
            .map_err(|cause| RoundError::malformed_tag(tag, cause).within(PathSegment::field(name)))?,
        None => ctx,
    };

    member
        .walk(ctx)
        .map_err(|err| err.within(PathSegment::field(name)))
}

// ============================================================================
// Numeric Leaves
// ============================================================================

impl Walk for f64 {
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        if self.is_nan() {
            return Err(RoundError::not_a_number());
        }

        // Infinities pass through untouched.
        if self.is_infinite() {
            return Ok(());
        }

        let value = if ctx.percent { *self * 100.0 } else { *self };
        let rounded = decimal(value, ctx.precision);
        if !rounded.is_finite() {
            return Err(RoundError::overflow());
        }
        tracing::trace!(from = *self, to = rounded, precision = ctx.precision, "Rounded leaf");
        *self = rounded;
        Ok(())
    }
}

impl Walk for f32 {
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        let mut wide = f64::from(*self);
        wide.walk(ctx)?;

        let narrowed = wide as f32;
        if !narrowed.is_finite() {
            return Err(RoundError::overflow());
        }
        *self = narrowed;
        Ok(())
    }
}

impl Walk for Decimal {
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        let value = if ctx.percent {
            self.checked_mul(Decimal::ONE_HUNDRED)
                .ok_or_else(RoundError::overflow)?
        } else {
            *self
        };

        let rounded = round_decimal(value, ctx.precision).ok_or_else(RoundError::overflow)?;
        tracing::trace!(from = %self, to = %rounded, precision = ctx.precision, "Rounded leaf");
        *self = rounded;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::ErrorKind;
    use std::str::FromStr;

    #[test]
    fn test_float() {
        let mut float = 9.87654321;
        recursive(&mut float, 3).unwrap();
        assert_eq!(float, 9.877);
    }

    #[test]
    fn test_infinity_is_untouched() {
        for inf in [f64::INFINITY, f64::NEG_INFINITY] {
            let mut float = inf;
            recursive(&mut float, 3).unwrap();
            assert_eq!(float.to_bits(), inf.to_bits(), "it should not be changed");
        }
    }

    #[test]
    fn test_nan_at_root() {
        let mut float = f64::NAN;
        let err = recursive(&mut float, 3).unwrap_err();
        assert_eq!(err.to_string(), " is not a number (but should be)");
        assert!(float.is_nan());
    }

    #[test]
    fn test_percent_context() {
        let mut rate = 0.998765f64;
        rate.walk(Context::new(2).with_tag("2,percent").unwrap())
            .unwrap();
        assert_eq!(rate, 99.88);
    }

    #[test]
    fn test_f32_leaf() {
        let mut float = 1.23456f32;
        recursive(&mut float, 2).unwrap();
        assert_eq!(float, 1.23f32);

        let mut nan = f32::NAN;
        assert!(recursive(&mut nan, 2).is_err());
    }

    #[test]
    fn test_float_leaf_overflow_keeps_value() {
        let mut huge = 1e300f64;
        let err = recursive(&mut huge, 10).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Overflow);
        assert_eq!(err.to_string(), " left the representable range");
        assert_eq!(huge, 1e300);

        let mut max = f64::MAX;
        let err = max.walk(Context::new(0).with_tag(",percent").unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Overflow);
        assert_eq!(max, f64::MAX);
    }

    #[test]
    fn test_extreme_precision_never_writes_nan() {
        for precision in [400, -400] {
            let mut zero = 0.0f64;
            let err = recursive(&mut zero, precision).unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::Overflow);
            assert_eq!(zero, 0.0);
        }
    }

    #[test]
    fn test_f32_leaf_narrowing_overflow() {
        let mut float = f32::MAX;
        let err = float.walk(Context::new(0).with_tag(",percent").unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Overflow);
        assert_eq!(float, f32::MAX);
    }

    #[test]
    fn test_decimal_leaf() {
        let mut d = Decimal::from_str("0.998765").unwrap();
        d.walk(Context::new(2).with_tag("2,percent").unwrap())
            .unwrap();
        assert_eq!(d, Decimal::from_str("99.88").unwrap());
    }

    #[test]
    fn test_decimal_leaf_overflow() {
        let mut d = Decimal::MAX;
        let err = d.walk(Context::new(0).with_tag(",percent").unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Overflow);
        assert_eq!(d, Decimal::MAX);
    }

    #[test]
    fn test_walk_member_tag_error() {
        let mut float = 1.5;
        let err = walk_member("Float", Some("abc"), &mut float, Context::new(0)).unwrap_err();
        assert!(err.to_string().starts_with(".Float: failed to parse precision tag: "));
        assert_eq!(float, 1.5);
    }

    #[test]
    fn test_walk_member_without_tag_inherits() {
        let mut float = 1.23456;
        walk_member("Float", None, &mut float, Context::new(1)).unwrap();
        assert_eq!(float, 1.2);
    }
}
