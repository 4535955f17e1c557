//! Write-once numeric code over scalars or compile-time selected SIMD lanes
//!
//! This crate re-exports [`vectorized_core`]. Enable the `wide` feature to
//! bind `f32`/`f64` to 4-lane hardware vectors; without it every scalar uses
//! the single-lane array fallback and code written against
//! [`Vectorized`] runs unchanged.
//!
//! ```rust
//! use vectorized::prelude::*;
//!
//! let mut acc = Vectorized::<f64>::splat(0.0);
//! for _ in 0..3 {
//!     acc.increment();
//! }
//! assert_eq!(acc[0], 3.0);
//! assert_eq!(sqrt(acc * acc)[0], 3.0);
//! ```

pub use vectorized_core::*;

pub mod prelude {
    pub use vectorized_core::prelude::*;
}
