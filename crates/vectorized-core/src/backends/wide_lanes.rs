//! `wide` backend: 4-lane f32 and f64 vectors
//!
//! Lane views reinterpret the register as a `[T; 4]` via bytemuck; the
//! register types are `Pod` with the same size as the array.

use crate::storage::{LaneMath, Lanes};
use crate::PreferredVector;
use ::wide::{f32x4, f64x4};

macro_rules! impl_wide_lanes {
    ($scalar:ty, $register:ty, $width:expr) => {
        impl Lanes<$scalar> for $register {
            const WIDTH: usize = $width;

            #[inline]
            fn splat(value: $scalar) -> Self {
                <$register>::splat(value)
            }

            #[inline]
            fn as_slice(&self) -> &[$scalar] {
                bytemuck::cast_ref::<$register, [$scalar; $width]>(self)
            }

            #[inline]
            fn as_mut_slice(&mut self) -> &mut [$scalar] {
                bytemuck::cast_mut::<$register, [$scalar; $width]>(self)
            }
        }

        impl LaneMath<$scalar> for $register {
            #[inline]
            fn sqrt(self) -> Self {
                <$register>::sqrt(self)
            }
        }

        impl PreferredVector for $scalar {
            type Storage = $register;
            const WIDTH: usize = $width;
            const BACKEND: &'static str = "wide";
        }
    };
}

impl_wide_lanes!(f32, f32x4, 4);
impl_wide_lanes!(f64, f64x4, 4);
