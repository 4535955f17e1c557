//! Lane storage capabilities
//!
//! A storage capability is the physical representation behind one
//! [`crate::Vectorized`] value: a hardware register type when a backend binds
//! one, or [`ArrayStorage`] otherwise. The wrapper only ever talks to storage
//! through [`Lanes`] and [`LaneMath`], so every capability must provide the
//! full operation set or the build fails.

use crate::element::Element;
use num_traits::Float;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Storage contract for a fixed number of lanes of `T`
///
/// Arithmetic is elementwise and always covers every lane. Lane access goes
/// through the slice views, so out-of-range indices get whatever bounds
/// behaviour the storage's slice has.
pub trait Lanes<T: Element>:
    Copy
    + Debug
    + Default
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Number of lanes held by one value
    const WIDTH: usize;

    /// Broadcast `value` into every lane
    fn splat(value: T) -> Self;

    /// View the lanes as a slice of length `WIDTH`
    fn as_slice(&self) -> &[T];

    /// Mutable view of the lanes
    fn as_mut_slice(&mut self) -> &mut [T];

    #[inline]
    fn lane(&self, index: usize) -> T {
        self.as_slice()[index]
    }

    #[inline]
    fn set_lane(&mut self, index: usize, value: T) {
        self.as_mut_slice()[index] = value;
    }

    /// Read a lane without bounds checks
    ///
    /// # Safety
    /// `index` must be less than `WIDTH`.
    #[inline]
    unsafe fn lane_unchecked(&self, index: usize) -> T {
        *self.as_slice().get_unchecked(index)
    }

    /// Apply `f` to every lane
    #[inline]
    fn map_lanes<F: FnMut(T) -> T>(self, mut f: F) -> Self {
        let mut out = self;
        for lane in out.as_mut_slice() {
            *lane = f(*lane);
        }
        out
    }

    /// Combine two values lane by lane
    #[inline]
    fn zip_lanes<F: FnMut(T, T) -> T>(self, other: Self, mut f: F) -> Self {
        let mut out = self;
        for (lane, &rhs) in out.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *lane = f(*lane, rhs);
        }
        out
    }
}

/// Math hooks for floating-point storage
///
/// The provided bodies apply the scalar function to each lane independently.
/// A hardware backend overrides whichever of these it has a vector sequence
/// for; results must match the per-lane scalar function up to rounding.
pub trait LaneMath<T: Element + Float>: Lanes<T> {
    #[inline]
    fn sqrt(self) -> Self {
        self.map_lanes(Float::sqrt)
    }

    /// Natural logarithm
    #[inline]
    fn ln(self) -> Self {
        self.map_lanes(Float::ln)
    }

    #[inline]
    fn sin(self) -> Self {
        self.map_lanes(Float::sin)
    }

    #[inline]
    fn cos(self) -> Self {
        self.map_lanes(Float::cos)
    }

    #[inline]
    fn tan(self) -> Self {
        self.map_lanes(Float::tan)
    }

    /// Lane `i` raised to `exponent` lane `i`
    #[inline]
    fn powf(self, exponent: Self) -> Self {
        self.zip_lanes(exponent, Float::powf)
    }
}

/// Portable fixed-size array storage
///
/// This is the fallback capability: plain loops over `[T; N]`. The default
/// preference binds every scalar to `ArrayStorage<T, 1>`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct ArrayStorage<T, const N: usize>(pub [T; N]);

impl<T: Element, const N: usize> ArrayStorage<T, N> {
    pub fn new(values: [T; N]) -> Self {
        Self(values)
    }

    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

impl<T: Element, const N: usize> Default for ArrayStorage<T, N> {
    fn default() -> Self {
        Self([T::zero(); N])
    }
}

impl<T: Element, const N: usize> From<[T; N]> for ArrayStorage<T, N> {
    fn from(values: [T; N]) -> Self {
        Self(values)
    }
}

macro_rules! impl_array_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Element, const N: usize> $trait for ArrayStorage<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(std::array::from_fn(|i| self.0[i] $op rhs.0[i]))
            }
        }
    };
}

impl_array_op!(Add, add, +);
impl_array_op!(Sub, sub, -);
impl_array_op!(Mul, mul, *);
impl_array_op!(Div, div, /);

impl<T: Element, const N: usize> Lanes<T> for ArrayStorage<T, N> {
    const WIDTH: usize = {
        assert!(N >= 1, "ArrayStorage needs at least one lane");
        N
    };

    #[inline]
    fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: Element + Float, const N: usize> LaneMath<T> for ArrayStorage<T, N> {}
