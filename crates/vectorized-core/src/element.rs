//! Scalar element trait for lane-generic computing
//!
//! This module provides the type foundation for the scalars that may sit in a
//! lane (f32, f64, i32, ...) without imposing any storage choice. Storage and
//! width are picked separately by [`crate::PreferredVector`].

use num_traits::{AsPrimitive, Num};
use std::fmt::Debug;

/// Base trait for scalar types that can live in a vector lane
///
/// `Num` supplies the four arithmetic operators plus `zero`/`one`, which is
/// everything the wrapper needs for elementwise arithmetic and for
/// `increment`/`decrement`. Sums are accumulated as `f64`.
pub trait Element: Num + Copy + PartialOrd + Debug + AsPrimitive<f64> + Send + Sync + 'static {
    /// Convert to f64 for accumulation
    #[inline]
    fn as_f64(self) -> f64 {
        self.as_()
    }
}

macro_rules! impl_element {
    ($($type:ty),* $(,)?) => {
        $(impl Element for $type {})*
    };
}

impl_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
