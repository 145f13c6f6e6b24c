// ============================================================================
// Indirection
// Pointers, optionals, cells and locks forward the context unchanged
// ============================================================================
//
// Everything here goes through `&mut`/`get_mut`, so no lock is ever taken.
// An empty target (`None`) ends the walk for that branch without error.

use super::context::Context;
use super::errors::RoundError;
use super::walk::Walk;
use std::cell::{Cell, RefCell};
use std::sync::PoisonError;

impl<T: Walk + ?Sized> Walk for &mut T {
    #[inline]
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        (**self).walk(ctx)
    }
}

impl<T: Walk + ?Sized> Walk for Box<T> {
    #[inline]
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        (**self).walk(ctx)
    }
}

impl<T: Walk> Walk for Option<T> {
    #[inline]
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        match self {
            Some(inner) => inner.walk(ctx),
            None => Ok(()),
        }
    }
}

impl<T: Walk> Walk for Cell<T> {
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        self.get_mut().walk(ctx)
    }
}

impl<T: Walk + ?Sized> Walk for RefCell<T> {
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        self.get_mut().walk(ctx)
    }
}

// A poisoned lock still owns a valid value; round it anyway.
impl<T: Walk + ?Sized> Walk for std::sync::Mutex<T> {
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        self.get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .walk(ctx)
    }
}

impl<T: Walk + ?Sized> Walk for std::sync::RwLock<T> {
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        self.get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .walk(ctx)
    }
}

impl<T: Walk + ?Sized> Walk for parking_lot::Mutex<T> {
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        self.get_mut().walk(ctx)
    }
}

impl<T: Walk + ?Sized> Walk for parking_lot::RwLock<T> {
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        self.get_mut().walk(ctx)
    }
}
