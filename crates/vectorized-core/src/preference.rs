//! Compile-time selection of lane storage per scalar type
//!
//! [`PreferredVector`] is the extension point: it maps a scalar type to the
//! storage capability and lane width a [`crate::Vectorized`] of that scalar
//! uses. Nothing here exists at runtime; each scalar is resolved once per
//! build.
//!
//! # Usage
//!
//! ```rust,ignore
//! // Default binding: one lane over plain array storage
//! vectorized_core::prefer_scalar!(MyScalar);
//!
//! // Hardware binding
//! impl PreferredVector for f32 {
//!     type Storage = wide::f32x4;
//!     const WIDTH: usize = 4;
//!     const BACKEND: &'static str = "wide";
//! }
//! ```

use crate::element::Element;
use crate::error::{Error, Result};
use crate::storage::Lanes;
use log::{debug, trace};
use std::any::type_name;

/// Storage selection trait for a scalar type
pub trait PreferredVector: Element {
    /// The storage capability used for this scalar
    type Storage: Lanes<Self>;

    /// Number of lanes in one vector of this scalar
    ///
    /// Must equal `Storage::WIDTH`; a mismatch fails the build when the
    /// wrapper is instantiated.
    const WIDTH: usize;

    /// Name of the backend providing `Storage`
    const BACKEND: &'static str = "scalar";
}

/// Bind scalar types to the width-1 array fallback
///
/// Any [`Element`] type can be made vectorizable this way without writing a
/// storage type for it.
#[macro_export]
macro_rules! prefer_scalar {
    ($($type:ty),* $(,)?) => {
        $(
            impl $crate::PreferredVector for $type {
                type Storage = $crate::ArrayStorage<$type, 1>;
                const WIDTH: usize = 1;
            }
        )*
    };
}

prefer_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Floats fall back to one lane unless a hardware backend claims them
#[cfg(not(feature = "wide"))]
prefer_scalar!(f32, f64);

/// What the build resolved for one scalar type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorInfo {
    pub scalar: &'static str,
    pub storage: &'static str,
    pub backend: &'static str,
    pub width: usize,
}

impl VectorInfo {
    /// Whether the binding is wider than a single lane
    pub fn is_vectorized(&self) -> bool {
        self.width > 1
    }
}

/// Get the backend name bound to `T`
pub fn backend_name<T: PreferredVector>() -> &'static str {
    T::BACKEND
}

/// Describe the storage binding for `T`
pub fn describe<T: PreferredVector>() -> VectorInfo {
    let info = VectorInfo {
        scalar: type_name::<T>(),
        storage: type_name::<T::Storage>(),
        backend: T::BACKEND,
        width: <T::Storage as Lanes<T>>::WIDTH,
    };
    trace!("Resolved vector binding: {info:?}");
    info
}

/// Log the storage binding for `T` at debug level
pub fn log_selection<T: PreferredVector>() -> VectorInfo {
    let info = describe::<T>();
    debug!(
        "{} uses {} backend: {} lanes of {}",
        info.scalar, info.backend, info.width, info.storage
    );
    info
}

/// Require a multi-lane binding for `T`
///
/// Returns [`Error::FeatureNotAvailable`] when `T` only has the width-1
/// fallback in this build.
pub fn require_hardware<T: PreferredVector>() -> Result<VectorInfo> {
    let info = describe::<T>();
    if info.is_vectorized() {
        Ok(info)
    } else {
        Err(Error::FeatureNotAvailable(format!(
            "no multi-lane storage for {} in this build",
            info.scalar
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_use_scalar_fallback() {
        let info = describe::<i32>();
        assert_eq!(info.width, 1);
        assert_eq!(info.backend, "scalar");
        assert_eq!(info.scalar, "i32");
        assert!(!info.is_vectorized());
        assert_eq!(backend_name::<u64>(), "scalar");
    }

    #[cfg(not(feature = "wide"))]
    #[test]
    fn test_floats_use_scalar_fallback() {
        assert_eq!(<f32 as PreferredVector>::WIDTH, 1);
        assert_eq!(<f64 as PreferredVector>::WIDTH, 1);
        assert!(matches!(
            require_hardware::<f32>(),
            Err(Error::FeatureNotAvailable(_))
        ));
    }

    #[cfg(feature = "wide")]
    #[test]
    fn test_floats_use_wide_backend() {
        let info = log_selection::<f32>();
        assert_eq!(info.width, 4);
        assert_eq!(info.backend, "wide");
        assert!(require_hardware::<f64>().is_ok());
    }

    #[test]
    fn test_require_hardware_rejects_integers() {
        let err = require_hardware::<u8>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Feature not available: no multi-lane storage for u8 in this build"
        );
    }
}
