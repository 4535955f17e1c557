//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use num_traits::{AsPrimitive, Float, Num, NumCast, One, ToPrimitive, Zero};
use std::num::FpCategory;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use vectorized_core::{ArrayStorage, Element, PreferredVector};

pub const EPSILON: f64 = 1e-12;

/// Values that exercise ordinary, tiny, huge and negative inputs
pub fn sample_values() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        0.5,
        2.0,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        std::f64::consts::PI,
        std::f64::consts::E,
        1e-300,
        1e300,
        -123.456,
    ]
}

/// Positive values inside the domain of every math function under test
pub fn positive_values() -> Vec<f64> {
    vec![1e-6, 0.1, 0.5, 1.0, 1.5, 2.0, 10.0, 1234.5]
}

/// Scalar bound to four lanes of portable array storage
///
/// Stands in for a hardware specialization so width > 1 behaviour is tested
/// in every build.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Quad(pub f64);

impl PreferredVector for Quad {
    type Storage = ArrayStorage<Quad, 4>;
    const WIDTH: usize = 4;
    const BACKEND: &'static str = "array4";
}

impl Element for Quad {}

impl AsPrimitive<f64> for Quad {
    fn as_(self) -> f64 {
        self.0
    }
}

macro_rules! quad_binary_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Quad {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Quad(self.0 $op rhs.0)
            }
        }
    };
}

quad_binary_op!(Add, add, +);
quad_binary_op!(Sub, sub, -);
quad_binary_op!(Mul, mul, *);
quad_binary_op!(Div, div, /);
quad_binary_op!(Rem, rem, %);

impl Neg for Quad {
    type Output = Self;

    fn neg(self) -> Self {
        Quad(-self.0)
    }
}

impl Zero for Quad {
    fn zero() -> Self {
        Quad(0.0)
    }
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl One for Quad {
    fn one() -> Self {
        Quad(1.0)
    }
}

impl Num for Quad {
    type FromStrRadixErr = <f64 as Num>::FromStrRadixErr;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        f64::from_str_radix(str, radix).map(Quad)
    }
}

impl ToPrimitive for Quad {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl NumCast for Quad {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        n.to_f64().map(Quad)
    }
}

macro_rules! quad_unary {
    ($($method:ident),*) => {
        $(fn $method(self) -> Self { Quad(self.0.$method()) })*
    };
}

macro_rules! quad_binary {
    ($($method:ident),*) => {
        $(fn $method(self, other: Self) -> Self { Quad(self.0.$method(other.0)) })*
    };
}

macro_rules! quad_predicate {
    ($($method:ident),*) => {
        $(fn $method(self) -> bool { self.0.$method() })*
    };
}

impl Float for Quad {
    fn nan() -> Self { Quad(f64::NAN) }
    fn infinity() -> Self { Quad(f64::INFINITY) }
    fn neg_infinity() -> Self { Quad(f64::NEG_INFINITY) }
    fn neg_zero() -> Self { Quad(-0.0) }
    fn min_value() -> Self { Quad(f64::MIN) }
    fn min_positive_value() -> Self { Quad(f64::MIN_POSITIVE) }
    fn max_value() -> Self { Quad(f64::MAX) }
    fn epsilon() -> Self { Quad(f64::EPSILON) }
    fn classify(self) -> FpCategory { self.0.classify() }
    fn integer_decode(self) -> (u64, i16, i8) { Float::integer_decode(self.0) }
    fn powi(self, n: i32) -> Self { Quad(self.0.powi(n)) }
    fn mul_add(self, a: Self, b: Self) -> Self { Quad(self.0.mul_add(a.0, b.0)) }
    fn abs_sub(self, other: Self) -> Self { Quad((self.0 - other.0).max(0.0)) }
    fn sin_cos(self) -> (Self, Self) {
        let (s, c) = self.0.sin_cos();
        (Quad(s), Quad(c))
    }

    quad_predicate!(is_nan, is_infinite, is_finite, is_normal, is_sign_positive, is_sign_negative);
    quad_unary!(
        floor, ceil, round, trunc, fract, abs, signum, recip, sqrt, exp, exp2, ln, log2, log10,
        cbrt, sin, cos, tan, asin, acos, atan, exp_m1, ln_1p, sinh, cosh, tanh, asinh, acosh,
        atanh, to_degrees, to_radians
    );
    quad_binary!(powf, log, max, min, hypot, atan2);
}

/// Build a width-4 wrapper from four plain values
pub fn quad(values: [f64; 4]) -> vectorized_core::Vectorized<Quad> {
    vectorized_core::Vectorized::from_fn(|i| Quad(values[i]))
}
