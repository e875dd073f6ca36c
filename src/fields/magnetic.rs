use std::f64::consts::PI;
use std::fmt;
use std::ops::Add;

use super::sample::guard_zero_distance;
use super::{FieldSample, FieldVector};
use crate::constants::VACUUM_PERMEABILITY;
use crate::math::Scalar;

/// Magnetic field sample expressed in tesla (T).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MagneticFieldSample {
    vector: FieldVector,
    calculated_field_strength: Scalar,
}

impl MagneticFieldSample {
    /// Constructs a sample from vector components; the derived strength starts at 0.
    #[must_use]
    pub fn new(bx: Scalar, by: Scalar, bz: Scalar) -> Self {
        Self::from_vector(FieldVector::new(bx, by, bz))
    }

    /// Wraps an existing field vector.
    #[must_use]
    pub fn from_vector(vector: FieldVector) -> Self {
        Self {
            vector,
            calculated_field_strength: 0.0,
        }
    }

    /// Infinite-wire form of Ampère's law, evaluated as `I / (2π r μ₀)` for
    /// `current_a` (A) at `distance_m` (m). Stores and returns the result.
    ///
    /// A distance of exactly zero stores 0.
    pub fn calculate_field_strength(&mut self, current_a: Scalar, distance_m: Scalar) -> Scalar {
        self.calculated_field_strength = guard_zero_distance(Self::LABEL, distance_m, || {
            current_a / (2.0 * PI * distance_m * VACUUM_PERMEABILITY)
        });
        self.calculated_field_strength
    }
}

impl FieldSample for MagneticFieldSample {
    const LABEL: &'static str = "Magnetic Field";
    const UNIT: &'static str = "T";

    fn vector(&self) -> &FieldVector {
        &self.vector
    }

    fn calculated_field_strength(&self) -> Scalar {
        self.calculated_field_strength
    }
}

impl Add for MagneticFieldSample {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vector(self.vector + rhs.vector)
    }
}

impl fmt::Display for MagneticFieldSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::LABEL, self.vector)
    }
}
