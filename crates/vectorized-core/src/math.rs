//! Math dispatch shared by scalars and wrappers
//!
//! Generic numeric code calls [`sqrt`], [`log`], [`sin`], [`cos`], [`tan`] and
//! [`pow`] from here and gets the scalar function for `f32`/`f64` or the
//! lane-wise method for [`Vectorized`]. The functions add nothing beyond the
//! forwarding.
//!
//! ```rust
//! use vectorized_core::math::{self, VectorMath};
//! use vectorized_core::Vectorized;
//! use std::ops::{Add, Mul};
//!
//! fn norm<V: VectorMath + Add<Output = V> + Mul<Output = V>>(x: V, y: V) -> V {
//!     math::sqrt(x * x + y * y)
//! }
//!
//! assert_eq!(norm(3.0f64, 4.0), 5.0);
//! assert_eq!(norm(Vectorized::splat(3.0f64), Vectorized::splat(4.0))[0], 5.0);
//! ```

use crate::preference::PreferredVector;
use crate::storage::LaneMath;
use crate::vectorized::Vectorized;
use num_traits::Float;

/// Math operations available on both scalars and wrappers
pub trait VectorMath: Copy {
    fn sqrt(self) -> Self;

    /// Natural logarithm
    fn log(self) -> Self;

    fn sin(self) -> Self;

    fn cos(self) -> Self;

    fn tan(self) -> Self;

    /// `self` raised to `exponent`, lane by lane for wrappers
    fn pow(self, exponent: Self) -> Self;
}

macro_rules! impl_float_math {
    ($($type:ty),*) => {
        $(
            impl VectorMath for $type {
                #[inline]
                fn sqrt(self) -> Self {
                    <$type>::sqrt(self)
                }

                #[inline]
                fn log(self) -> Self {
                    <$type>::ln(self)
                }

                #[inline]
                fn sin(self) -> Self {
                    <$type>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    <$type>::cos(self)
                }

                #[inline]
                fn tan(self) -> Self {
                    <$type>::tan(self)
                }

                #[inline]
                fn pow(self, exponent: Self) -> Self {
                    <$type>::powf(self, exponent)
                }
            }
        )*
    };
}

impl_float_math!(f32, f64);

impl<T> VectorMath for Vectorized<T>
where
    T: PreferredVector + Float,
    T::Storage: LaneMath<T>,
{
    #[inline]
    fn sqrt(self) -> Self {
        Vectorized::sqrt(self)
    }

    #[inline]
    fn log(self) -> Self {
        Vectorized::log(self)
    }

    #[inline]
    fn sin(self) -> Self {
        Vectorized::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        Vectorized::cos(self)
    }

    #[inline]
    fn tan(self) -> Self {
        Vectorized::tan(self)
    }

    #[inline]
    fn pow(self, exponent: Self) -> Self {
        Vectorized::pow(self, exponent)
    }
}

#[inline]
pub fn sqrt<V: VectorMath>(value: V) -> V {
    value.sqrt()
}

/// Natural logarithm
#[inline]
pub fn log<V: VectorMath>(value: V) -> V {
    value.log()
}

#[inline]
pub fn sin<V: VectorMath>(value: V) -> V {
    value.sin()
}

#[inline]
pub fn cos<V: VectorMath>(value: V) -> V {
    value.cos()
}

#[inline]
pub fn tan<V: VectorMath>(value: V) -> V {
    value.tan()
}

#[inline]
pub fn pow<V: VectorMath>(base: V, exponent: V) -> V {
    base.pow(exponent)
}
