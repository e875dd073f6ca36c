use std::fmt;
use std::ops::Add;

use crate::math::{euclidean_norm, R3, Scalar};

/// Three-component field vector stored inline as a fixed-size `nalgebra` vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldVector {
    components: R3,
}

impl FieldVector {
    /// Constructs a vector from its three components. Any float is accepted.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self {
            components: R3::new(x, y, z),
        }
    }

    /// Returns the zero vector.
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            components: R3::zeros(),
        }
    }

    /// X component.
    #[must_use]
    pub fn x(&self) -> Scalar {
        self.components.x
    }

    /// Y component.
    #[must_use]
    pub fn y(&self) -> Scalar {
        self.components.y
    }

    /// Z component.
    #[must_use]
    pub fn z(&self) -> Scalar {
        self.components.z
    }

    /// Borrows the underlying `nalgebra` vector.
    #[must_use]
    pub const fn as_r3(&self) -> &R3 {
        &self.components
    }

    /// Euclidean magnitude; NaN if any component is NaN.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        euclidean_norm(&self.components)
    }

    /// Overwrites every component with those of `source`.
    pub fn assign(&mut self, source: &Self) {
        self.components.copy_from(&source.components);
    }
}

impl Default for FieldVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<R3> for FieldVector {
    fn from(components: R3) -> Self {
        Self { components }
    }
}

impl From<[Scalar; 3]> for FieldVector {
    fn from([x, y, z]: [Scalar; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for FieldVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            components: self.components + rhs.components,
        }
    }
}

impl fmt::Display for FieldVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
