// ============================================================================
// Numeric Module
// Half-away-from-zero decimal rounding at a power-of-ten scale
// ============================================================================
//
// This module provides:
// - decimal(): rounding for f64 leaves
// - round_decimal(): the same rule for rust_decimal::Decimal leaves
//
// Both accept negative precision, which rounds to a multiple of 10^-p.

mod decimal;

pub use decimal::{decimal, round_decimal};
