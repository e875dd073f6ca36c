use std::f64::consts::PI;
use std::fmt;
use std::ops::Add;

use super::sample::guard_zero_distance;
use super::{FieldSample, FieldVector};
use crate::constants::coulomb_coefficient;
use crate::math::Scalar;

/// Electric field sample: a field vector plus the Coulomb field strength in N/C.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElectricFieldSample {
    vector: FieldVector,
    calculated_field_strength: Scalar,
}

impl ElectricFieldSample {
    /// Constructs a sample from vector components; the derived strength starts at 0.
    #[must_use]
    pub fn new(ex: Scalar, ey: Scalar, ez: Scalar) -> Self {
        Self::from_vector(FieldVector::new(ex, ey, ez))
    }

    /// Wraps an existing field vector.
    #[must_use]
    pub fn from_vector(vector: FieldVector) -> Self {
        Self {
            vector,
            calculated_field_strength: 0.0,
        }
    }

    /// Applies Coulomb's law `E = Q / (4π ε₀ r²)` for a point charge `charge_c` (C)
    /// at `distance_m` (m), stores the result and returns it.
    ///
    /// A distance of exactly zero stores 0 instead of dividing by zero.
    pub fn calculate_field_strength(&mut self, charge_c: Scalar, distance_m: Scalar) -> Scalar {
        self.calculated_field_strength = guard_zero_distance(Self::LABEL, distance_m, || {
            charge_c * coulomb_coefficient() / (distance_m * distance_m)
        });
        self.calculated_field_strength
    }
}

impl FieldSample for ElectricFieldSample {
    const LABEL: &'static str = "Electric Field";
    const UNIT: &'static str = "N/C";

    fn vector(&self) -> &FieldVector {
        &self.vector
    }

    fn calculated_field_strength(&self) -> Scalar {
        self.calculated_field_strength
    }
}

/// Sums the vectors only; the result's derived strength is left at 0.
impl Add for ElectricFieldSample {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vector(self.vector + rhs.vector)
    }
}

impl fmt::Display for ElectricFieldSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::LABEL, self.vector)
    }
}
