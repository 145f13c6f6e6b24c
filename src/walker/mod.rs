// ============================================================================
// Walker Module
// Type-driven recursive descent that rounds every float leaf in place
// ============================================================================
//
// Shapes and where they live:
// - walk.rs:        Walk trait, composite members, numeric leaves
// - indirection.rs: Box, Option, &mut, cells and locks
// - sequence.rs:    slices, arrays, vectors, tuples
// - map.rs:         HashMap, BTreeMap
// - opaque.rs:      values that are never inspected
// - json.rs:        serde_json::Value (feature "serde")
//
// The context is passed by value down the call chain and replaced, never
// mutated, when a member carries a tag.

mod context;
mod errors;
mod indirection;
mod map;
mod opaque;
mod sequence;
mod walk;

#[cfg(feature = "serde")]
mod json;

pub use context::{Context, Tag};
pub use errors::{ErrorKind, FieldPath, PathSegment, RoundError};
pub use walk::{recursive, walk_member, Walk};
