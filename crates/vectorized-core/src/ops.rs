//! Elementwise operators for [`Vectorized`]
//!
//! Binary operators delegate to the storage's own operator. Compound forms are
//! written in terms of the binary ones so a storage only has to provide
//! `Add`, `Sub`, `Mul` and `Div`.

use crate::preference::PreferredVector;
use crate::storage::Lanes;
use crate::vectorized::Vectorized;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: PreferredVector> $trait for Vectorized<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::from_storage(self.into_inner() $op rhs.into_inner())
            }
        }

        impl<T: PreferredVector> $assign_trait for Vectorized<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, +);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, -);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, *);
impl_binary_op!(Div, div, DivAssign, div_assign, /);

impl<T> Neg for Vectorized<T>
where
    T: PreferredVector + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_storage(self.into_inner().map_lanes(|x| -x))
    }
}

impl<T: PreferredVector> Sum for Vectorized<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::splat(T::zero()), |acc, x| acc + x)
    }
}
