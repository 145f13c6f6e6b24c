// ============================================================================
// Sequences
// Slices, arrays and growable vectors are walked in index order, in place
// ============================================================================

use super::context::Context;
use super::errors::{PathSegment, RoundError};
use super::walk::{walk_member, Walk};
use std::collections::VecDeque;

/// Walk `items` in order, stopping at the first failing index.
fn walk_items<'a, T, I>(items: I, ctx: Context) -> Result<(), RoundError>
where
    T: Walk + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    for (index, item) in items.into_iter().enumerate() {
        item.walk(ctx)
            .map_err(|err| err.within(PathSegment::Index(index)))?;
    }
    Ok(())
}

impl<T: Walk> Walk for [T] {
    #[inline]
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        walk_items(self.iter_mut(), ctx)
    }
}

impl<T: Walk, const N: usize> Walk for [T; N] {
    #[inline]
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        walk_items(self.iter_mut(), ctx)
    }
}

impl<T: Walk> Walk for Vec<T> {
    #[inline]
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        walk_items(self.iter_mut(), ctx)
    }
}

impl<T: Walk> Walk for VecDeque<T> {
    #[inline]
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        walk_items(self.iter_mut(), ctx)
    }
}

impl<A> Walk for smallvec::SmallVec<A>
where
    A: smallvec::Array,
    A::Item: Walk,
{
    #[inline]
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        walk_items(self.iter_mut(), ctx)
    }
}

impl<T: Walk, const CAP: usize> Walk for arrayvec::ArrayVec<T, CAP> {
    #[inline]
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        walk_items(self.iter_mut(), ctx)
    }
}

// ============================================================================
// Tuples
// Positional members named `0`, `1`, ... without tags
// ============================================================================

macro_rules! impl_walk_tuple {
    ($($name:ident : $index:tt),+) => {
        impl<$($name: Walk),+> Walk for ($($name,)+) {
            fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
                $(walk_member(stringify!($index), None, &mut self.$index, ctx)?;)+
                Ok(())
            }
        }
    };
}

impl_walk_tuple!(A: 0);
impl_walk_tuple!(A: 0, B: 1);
impl_walk_tuple!(A: 0, B: 1, C: 2);
impl_walk_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_walk_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_walk_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
