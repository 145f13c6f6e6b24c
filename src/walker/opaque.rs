// ============================================================================
// Opaque Values
// Types that hold no floats are accepted by the walker and never inspected
// ============================================================================

use std::marker::PhantomData;
use std::time::Duration;

/// Implement [`Walk`](crate::Walk) as a no-op for types the rounder should skip.
///
/// ```
/// use round_tree::{opaque, Walk};
///
/// #[derive(Walk)]
/// struct Quote {
///     pub currency: Currency,
///     pub price: f64,
/// }
///
/// pub struct Currency(&'static str);
/// opaque!(Currency);
///
/// let mut quote = Quote { currency: Currency("EUR"), price: 1.23456 };
/// round_tree::recursive(&mut quote, 2).unwrap();
/// assert_eq!(quote.price, 1.23);
/// ```
#[macro_export]
macro_rules! opaque {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Walk for $ty {
                #[inline]
                fn walk(&mut self, _ctx: $crate::Context) -> ::core::result::Result<(), $crate::RoundError> {
                    Ok(())
                }
            }
        )+
    };
}

opaque!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String, str, (),
    Duration,
);

impl<T: ?Sized> crate::Walk for PhantomData<T> {
    #[inline]
    fn walk(&mut self, _ctx: crate::Context) -> Result<(), crate::RoundError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::recursive;

    #[test]
    fn test_opaque_values_are_untouched() {
        let mut count = 42u32;
        let mut name = String::from("1.23456");
        let mut flag = true;

        recursive(&mut count, 2).unwrap();
        recursive(&mut name, 2).unwrap();
        recursive(&mut flag, 2).unwrap();

        assert_eq!(count, 42);
        assert_eq!(name, "1.23456");
        assert!(flag);
    }
}
