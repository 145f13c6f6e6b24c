// ============================================================================
// Round Tree Library
// Recursive, annotation-driven decimal rounding of nested in-memory values
// ============================================================================

//! # Round Tree
//!
//! Rounds every float reachable from a value, in place, to a decimal
//! precision that can change from one struct member to the next.
//!
//! ## Features
//!
//! - **Half-away-from-zero rounding** at any power of ten, including
//!   negative precision
//! - **Per-member tags** (`#[round(precision = "2,percent")]`) that override
//!   the inherited precision for a member and everything beneath it
//! - **Percent rescaling** that multiplies a fraction by 100 before rounding
//! - **Every container shape**: structs, enums, `Vec`, arrays, maps,
//!   `Option`, `Box`, cells and locks, `serde_json::Value` (feature `serde`)
//! - **Navigable errors** such as `.floats[0] is not a number (but should be)`
//!
//! ## Example
//!
//! ```rust
//! use round_tree::Walk;
//! use std::collections::BTreeMap;
//!
//! #[derive(Walk)]
//! struct Report {
//!     pub number: f64,
//!     #[round(precision = "3")]
//!     pub map: BTreeMap<String, f64>,
//!     #[round(precision = "2,percent")]
//!     pub rate: f64,
//!     pub list: Vec<f64>,
//! }
//!
//! let mut report = Report {
//!     number: 1.1111,
//!     map: BTreeMap::from([("a".to_string(), 4.5555555)]),
//!     rate: 0.998765,
//!     list: vec![7.0, 6.656],
//! };
//!
//! round_tree::recursive(&mut report, 2).unwrap();
//!
//! assert_eq!(report.number, 1.11);
//! assert_eq!(report.map["a"], 4.556);
//! assert_eq!(report.rate, 99.88);
//! assert_eq!(report.list, vec![7.0, 6.66]);
//! ```

// Lets #[derive(Walk)] refer to `::round_tree` inside this crate too.
extern crate self as round_tree;

pub mod numeric;
pub mod walker;

pub use numeric::{decimal, round_decimal};
pub use round_tree_derive::Walk;
pub use walker::{
    recursive, walk_member, Context, ErrorKind, FieldPath, PathSegment, RoundError, Tag, Walk,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::decimal;
    pub use crate::walker::{recursive, Context, RoundError};
    pub use crate::Walk;
}
