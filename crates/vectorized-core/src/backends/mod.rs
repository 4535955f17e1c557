//! Hardware storage bindings
//!
//! Each backend implements [`crate::Lanes`] (and [`crate::LaneMath`] where it
//! has float lanes) for a register type, then claims scalars through
//! [`crate::PreferredVector`]. Scalars no backend claims keep the width-1
//! fallback from [`crate::preference`].
//!
//! # Backends
//!
//! - `wide_lanes`: portable 128/256-bit vectors from the `wide` crate
//!   (`f32x4`, `f64x4`), enabled by the `wide` feature

#[cfg(feature = "wide")]
mod wide_lanes;
