//! Core traits and types for lane-generic numeric code
//!
//! This crate lets numeric algorithms be written once against a "vector of T"
//! and retargeted to whatever lane width the build selects for `T`.
//!
//! # Architecture Overview
//!
//! The crate is organized into three layers:
//!
//! 1. **Preference** - [`PreferredVector`] maps a scalar type to a storage
//!    capability and a lane width, resolved entirely at compile time
//! 2. **Wrapper** - [`Vectorized<T>`] holds one storage value and exposes
//!    arithmetic, reductions and math over every lane
//! 3. **Dispatch** - [`VectorMath`] and the free functions in [`math`] give
//!    scalars and wrappers the same call syntax
//!
//! Without any feature enabled every scalar uses the width-1 array fallback.
//! The `wide` feature binds `f32` and `f64` to 4-lane hardware vectors.
//!
//! # Example
//!
//! ```rust
//! use vectorized_core::{math, Vectorized};
//!
//! let a = Vectorized::<f32>::splat(2.0);
//! let b = Vectorized::<f32>::splat(3.0);
//!
//! let c = a * b + a;
//! assert_eq!(c[0], 8.0);
//! assert_eq!(math::sqrt(a)[0], 2.0f32.sqrt());
//! ```

pub mod element;
pub mod error;
pub mod math;
pub mod ops;
pub mod preference;
pub mod slices;
pub mod storage;
pub mod vectorized;

mod backends;

// Re-export core types
pub use error::{Error, Result};

pub use element::Element;
pub use math::VectorMath;
pub use preference::{
    backend_name, describe, log_selection, require_hardware, PreferredVector, VectorInfo,
};
pub use slices::{map_slice, sum_slice};
pub use storage::{ArrayStorage, LaneMath, Lanes};
pub use vectorized::Vectorized;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cargo features this build was compiled with
#[allow(clippy::vec_init_then_push)]
pub fn features() -> Vec<&'static str> {
    let mut enabled = Vec::new();
    #[cfg(feature = "wide")]
    enabled.push("wide");
    #[cfg(feature = "serde")]
    enabled.push("serde");
    #[cfg(feature = "checked-lanes")]
    enabled.push("checked-lanes");
    enabled
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Element, LaneMath, Lanes, PreferredVector, Result, VectorMath, Vectorized,
    };

    pub use crate::error::Error;
    pub use crate::math::{cos, log, pow, sin, sqrt, tan};
}
