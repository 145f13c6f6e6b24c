// ============================================================================
// Associative Maps
// Each value is copied out, walked, and written back under the same key
// ============================================================================
//
// The copy means a failing entry keeps its pre-call value even when the
// failure happens halfway through a composite value. Keys are never touched
// and the map is never rebuilt.

use super::context::Context;
use super::errors::{PathSegment, RoundError};
use super::walk::Walk;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;

pub(super) fn walk_entries<'a, K, V, I>(entries: I, ctx: Context) -> Result<(), RoundError>
where
    K: Display + 'a,
    V: Walk + Clone + 'a,
    I: IntoIterator<Item = (&'a K, &'a mut V)>,
{
    for (key, value) in entries {
        let mut copy = value.clone();
        copy.walk(ctx)
            .map_err(|err| err.within(PathSegment::key(key)))?;
        *value = copy;
    }
    Ok(())
}

impl<K, V, S> Walk for HashMap<K, V, S>
where
    K: Display,
    V: Walk + Clone,
    S: BuildHasher,
{
    #[inline]
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        walk_entries(self.iter_mut(), ctx)
    }
}

impl<K, V> Walk for BTreeMap<K, V>
where
    K: Display,
    V: Walk + Clone,
{
    #[inline]
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        walk_entries(self.iter_mut(), ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recursive;

    #[test]
    fn test_map_values() {
        let mut data: HashMap<&str, f64> = HashMap::from([
            ("a", 1.87654321),
            ("b", 2.87654321),
            ("c", 3.87654321),
        ]);

        recursive(&mut data, 3).unwrap();

        assert_eq!(
            data,
            HashMap::from([("a", 1.877), ("b", 2.877), ("c", 3.877)])
        );
    }

    #[test]
    fn test_btree_error_path_uses_key() {
        let mut data = BTreeMap::from([
            (String::from("ok"), vec![1.26]),
            (String::from("x"), vec![0.5, f64::NAN]),
        ]);

        let err = recursive(&mut data, 1).unwrap_err();
        assert_eq!(err.to_string(), "[x][1] is not a number (but should be)");

        // Visited before the failure.
        assert_eq!(data["ok"], vec![1.3]);
        // The failing entry is written back only on success.
        assert_eq!(data["x"][0], 0.5);
        assert!(data["x"][1].is_nan());
    }

    #[test]
    fn test_keys_are_untouched() {
        let mut data: BTreeMap<i64, Option<f64>> = BTreeMap::from([(1, Some(0.4)), (2, None)]);
        recursive(&mut data, 0).unwrap();
        assert_eq!(data.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(data[&1], Some(0.0));
        assert_eq!(data[&2], None);
    }
}
