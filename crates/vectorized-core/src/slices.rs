//! Slice drivers built on the wrapper
//!
//! These walk a slice in `WIDTH`-sized chunks and finish the tail one lane at
//! a time through a broadcast wrapper, so a single wrapper-level function
//! covers the whole slice.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::preference::PreferredVector;
use crate::vectorized::Vectorized;
use log::trace;

/// Apply `f` across `src`, writing results to `dst`
///
/// Tail elements are processed through a broadcast wrapper and lane 0 of the
/// result is kept.
pub fn map_slice<T, F>(src: &[T], dst: &mut [T], f: F) -> Result<()>
where
    T: PreferredVector,
    F: Fn(Vectorized<T>) -> Vectorized<T>,
{
    if src.len() != dst.len() {
        return Err(Error::size_mismatch(src.len(), dst.len(), "map_slice"));
    }

    let width = Vectorized::<T>::WIDTH;
    let mut src_chunks = src.chunks_exact(width);
    let mut dst_chunks = dst.chunks_exact_mut(width);

    let mut chunks = 0usize;
    for (input, output) in (&mut src_chunks).zip(&mut dst_chunks) {
        f(Vectorized::load(input)?).store(output)?;
        chunks += 1;
    }

    let tail = src_chunks.remainder();
    for (&x, out) in tail.iter().zip(dst_chunks.into_remainder()) {
        *out = f(Vectorized::splat(x))[0];
    }

    trace!(
        "map_slice: {} elements, {chunks} chunks of {width}, {} tail",
        src.len(),
        tail.len()
    );
    Ok(())
}

/// Sum every element of `src` as f64
///
/// The running total never lives in `T`, so integer lanes cannot overflow
/// and `f32` input keeps growing past 2^24.
pub fn sum_slice<T: PreferredVector>(src: &[T]) -> f64 {
    let width = Vectorized::<T>::WIDTH;
    let chunks = src.chunks_exact(width);
    let tail = chunks.remainder();

    let mut total = 0.0;
    for chunk in chunks {
        total += Vectorized::from_fn(|i| chunk[i]).sum();
    }

    for &x in tail {
        total += x.as_f64();
    }
    total
}
