// ============================================================================
// Decimal Rounding
// Scale-multiply-round-rescale with a half-away-from-zero tie-break
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};

/// Largest power of ten a `Decimal` can hold (10^28).
const MAX_DECIMAL_EXP: u32 = 28;

/// Round `num` to `precision` decimal places.
///
/// The value is shifted by `10^precision`, nudged by half a unit away from
/// zero, truncated, and shifted back. Negative precision rounds to a
/// multiple of `10^-precision`:
///
/// ```
/// use round_tree::decimal;
///
/// assert_eq!(decimal(3.14159265359, 4), 3.1416);
/// assert_eq!(decimal(-2.5, 0), -3.0);
/// assert_eq!(decimal(987.654, -1), 990.0);
/// ```
///
/// NaN and infinities are not handled here; the walker never passes them.
/// Precisions beyond roughly `±308` overflow or underflow `10^precision`, and
/// the result is then infinite or NaN even for finite input. The walker
/// reports such results as [`ErrorKind::Overflow`](crate::ErrorKind::Overflow).
#[inline]
pub fn decimal(num: f64, precision: i32) -> f64 {
    let shift = 10f64.powi(precision);
    let shifted = num * shift;
    let rounded = (shifted + 0.5f64.copysign(shifted)).trunc();
    rounded / shift
}

/// Round a `Decimal` to `precision` places with the same tie-break as [`decimal`].
///
/// Returns `None` if the rounded value does not fit in a `Decimal`.
pub fn round_decimal(value: Decimal, precision: i32) -> Option<Decimal> {
    if precision >= 0 {
        return Some(
            value.round_dp_with_strategy(precision.unsigned_abs(), RoundingStrategy::MidpointAwayFromZero),
        );
    }

    let exp = precision.unsigned_abs();
    if exp > MAX_DECIMAL_EXP {
        // Every representable value is below 10^29: the nearest multiple is
        // either zero or out of range.
        let half = pow10(exp - 1).and_then(|p| p.checked_mul(Decimal::from(5)));
        return match half {
            Some(half) if value.abs() >= half => None,
            _ => Some(Decimal::ZERO),
        };
    }

    let factor = pow10(exp)?;
    let shifted = value.checked_div(factor)?;
    shifted
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(factor)
}

fn pow10(exp: u32) -> Option<Decimal> {
    10i128
        .checked_pow(exp)
        .and_then(|n| Decimal::try_from_i128_with_scale(n, 0).ok())
}

// ============================================================================
// Tests
// ============================================================================
