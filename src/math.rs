//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector3;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;

/// Euclidean norm `sqrt(x² + y² + z²)` of `vector`.
#[inline]
#[must_use]
pub fn euclidean_norm(vector: &R3) -> Scalar {
    vector.norm()
}
