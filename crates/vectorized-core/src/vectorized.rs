//! The lane-generic value wrapper
//!
//! [`Vectorized<T>`] owns exactly one value of `T`'s preferred storage and
//! forwards everything to it. The wrapper never looks at its width at runtime
//! to pick a code path; every choice was made by [`PreferredVector`].
//!
//! Lane indexing delegates to the storage's bounds behaviour unless the
//! `checked-lanes` feature is enabled, in which case the wrapper checks
//! against `WIDTH` itself. `get_unchecked` skips checks entirely and
//! `try_lane`/`try_set` report bad indices as errors.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::preference::PreferredVector;
use crate::storage::{LaneMath, Lanes};
use num_traits::Float;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A vector of `T` sized by `T`'s preferred storage
///
/// Plain value type: copies are deep, no two wrappers share storage.
pub struct Vectorized<T: PreferredVector> {
    storage: T::Storage,
}

impl<T: PreferredVector> Vectorized<T> {
    /// Number of lanes, fixed at compile time
    pub const WIDTH: usize = {
        assert!(
            T::WIDTH == <T::Storage as Lanes<T>>::WIDTH,
            "PreferredVector::WIDTH disagrees with its storage width"
        );
        assert!(T::WIDTH >= 1, "PreferredVector::WIDTH must be at least 1");
        T::WIDTH
    };

    /// Wrapper over the storage's default state
    ///
    /// Lane values are whatever the storage defaults to; callers should not
    /// rely on them.
    #[inline]
    pub fn new() -> Self {
        Self::from_storage(T::Storage::default())
    }

    /// Broadcast `value` into every lane
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_storage(T::Storage::splat(value))
    }

    /// Wrap an existing storage value
    #[inline]
    pub fn from_storage(storage: T::Storage) -> Self {
        let _ = Self::WIDTH;
        Self { storage }
    }

    /// Build from a per-lane generator
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(mut f: F) -> Self {
        let mut out = Self::new();
        for (i, lane) in out.storage.as_mut_slice().iter_mut().enumerate() {
            *lane = f(i);
        }
        out
    }

    /// Load the first `WIDTH` values of `src`
    pub fn load(src: &[T]) -> Result<Self> {
        if src.len() < Self::WIDTH {
            return Err(Error::size_mismatch(Self::WIDTH, src.len(), "load"));
        }
        Ok(Self::from_fn(|i| src[i]))
    }

    /// Store every lane into the first `WIDTH` slots of `dst`
    pub fn store(&self, dst: &mut [T]) -> Result<()> {
        if dst.len() < Self::WIDTH {
            return Err(Error::size_mismatch(Self::WIDTH, dst.len(), "store"));
        }
        dst[..Self::WIDTH].copy_from_slice(self.storage.as_slice());
        Ok(())
    }

    #[inline]
    pub fn inner(&self) -> &T::Storage {
        &self.storage
    }

    #[inline]
    pub fn into_inner(self) -> T::Storage {
        self.storage
    }

    /// Write `value` into lane `index`
    ///
    /// `index` must be below `WIDTH`. The storage decides what happens
    /// otherwise (a panic for every storage this crate ships).
    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        #[cfg(feature = "checked-lanes")]
        Self::check_lane(index);
        self.storage.set_lane(index, value);
    }

    /// Read lane `index`
    #[inline]
    pub fn lane(&self, index: usize) -> T {
        #[cfg(feature = "checked-lanes")]
        Self::check_lane(index);
        self.storage.lane(index)
    }

    /// Read lane `index`, reporting a bad index as an error
    pub fn try_lane(&self, index: usize) -> Result<T> {
        if index < Self::WIDTH {
            Ok(self.storage.lane(index))
        } else {
            Err(Error::lane_out_of_range(index, Self::WIDTH))
        }
    }

    /// Write lane `index`, reporting a bad index as an error
    pub fn try_set(&mut self, index: usize, value: T) -> Result<()> {
        if index < Self::WIDTH {
            self.storage.set_lane(index, value);
            Ok(())
        } else {
            Err(Error::lane_out_of_range(index, Self::WIDTH))
        }
    }

    /// Read lane `index` without any bounds check
    ///
    /// # Safety
    /// `index` must be less than `WIDTH`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        self.storage.lane_unchecked(index)
    }

    /// Sum of every lane, accumulated in lane order as f64
    #[inline]
    pub fn sum(&self) -> f64 {
        let mut total = 0.0;
        for &value in self.storage.as_slice() {
            total += value.as_f64();
        }
        total
    }

    /// Add one to every lane
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        *self += Self::splat(T::one());
        self
    }

    /// Subtract one from every lane
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        *self -= Self::splat(T::one());
        self
    }

    /// Iterate over the lanes in order
    pub fn lanes(&self) -> impl Iterator<Item = T> + '_ {
        self.storage.as_slice().iter().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.storage.as_slice().to_vec()
    }

    #[cfg(feature = "checked-lanes")]
    #[inline]
    fn check_lane(index: usize) {
        assert!(
            index < Self::WIDTH,
            "lane index {index} out of range for width {}",
            Self::WIDTH
        );
    }
}

// Math over float lanes; storage may override any of these
impl<T> Vectorized<T>
where
    T: PreferredVector + Float,
    T::Storage: LaneMath<T>,
{
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::from_storage(LaneMath::sqrt(self.storage))
    }

    /// Natural logarithm of every lane
    #[inline]
    pub fn log(self) -> Self {
        Self::from_storage(LaneMath::ln(self.storage))
    }

    #[inline]
    pub fn cos(self) -> Self {
        Self::from_storage(LaneMath::cos(self.storage))
    }

    #[inline]
    pub fn sin(self) -> Self {
        Self::from_storage(LaneMath::sin(self.storage))
    }

    #[inline]
    pub fn tan(self) -> Self {
        Self::from_storage(LaneMath::tan(self.storage))
    }

    /// Lane `i` of `self` raised to lane `i` of `power`
    #[inline]
    pub fn pow(self, power: Self) -> Self {
        Self::from_storage(self.storage.powf(power.storage))
    }
}

impl<T: PreferredVector> Clone for Vectorized<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: PreferredVector> Copy for Vectorized<T> {}

impl<T: PreferredVector> Default for Vectorized<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PreferredVector> fmt::Debug for Vectorized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vectorized")
            .field(&self.storage.as_slice())
            .finish()
    }
}

impl<T: PreferredVector> PartialEq for Vectorized<T> {
    fn eq(&self, other: &Self) -> bool {
        self.storage.as_slice() == other.storage.as_slice()
    }
}

impl<T: PreferredVector> From<T> for Vectorized<T> {
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

impl<T: PreferredVector> Index<usize> for Vectorized<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        #[cfg(feature = "checked-lanes")]
        Self::check_lane(index);
        &self.storage.as_slice()[index]
    }
}

impl<T: PreferredVector> IndexMut<usize> for Vectorized<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        #[cfg(feature = "checked-lanes")]
        Self::check_lane(index);
        &mut self.storage.as_mut_slice()[index]
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Vectorized<T>
where
    T: PreferredVector + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.lanes())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Vectorized<T>
where
    T: PreferredVector + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        if values.len() != Self::WIDTH {
            return Err(serde::de::Error::invalid_length(
                values.len(),
                &"one value per lane",
            ));
        }
        Self::load(&values).map_err(serde::de::Error::custom)
    }
}
