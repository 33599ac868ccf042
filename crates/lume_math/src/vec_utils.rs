//! Checked vector operations.
//!
//! glam's own `length`/`normalize` quietly return 0 or NaN for the zero
//! vector. Everything here that needs a direction reports
//! [`MathError::ZeroVector`] instead.

use crate::Vec3;
use thiserror::Error;

/// Errors raised by vector operations with an undefined result.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("zero-length vector has no defined norm or direction")]
    ZeroVector,
}

/// Result type for checked vector operations.
pub type MathResult<T> = Result<T, MathError>;

/// Component-wise `a - b`.
#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

/// Dot product of `a` and `b`.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Squared euclidean length. Total, returns 0 for the zero vector.
#[inline]
pub fn norm_squared(v: Vec3) -> f32 {
    dot(v, v)
}

/// Euclidean length of `v`.
///
/// Fails with [`MathError::ZeroVector`] when `v` is the zero vector. The
/// components are scaled by the largest magnitude first, so very large or
/// very small vectors neither overflow nor underflow.
pub fn norm(v: Vec3) -> MathResult<f32> {
    let (scale, unit) = scaled(v)?;
    Ok(scale * unit.length())
}

/// Unit vector pointing along `v`.
pub fn normalize(v: Vec3) -> MathResult<Vec3> {
    let (_, unit) = scaled(v)?;
    Ok(unit / unit.length())
}

/// Split `v` into its largest component magnitude and `v` divided by it.
fn scaled(v: Vec3) -> MathResult<(f32, Vec3)> {
    if v == Vec3::ZERO {
        return Err(MathError::ZeroVector);
    }
    let scale = v.abs().max_element();
    Ok((scale, v / scale))
}
