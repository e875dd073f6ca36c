//! Physical constants used by the field-strength laws.
//!
//! Both values are the classical textbook figures rather than the latest
//! CODATA recommendations:
//! - ε₀ is taken to four significant figures, 8.854 × 10⁻¹² F/m;
//! - μ₀ is the pre-2019 defined value 4π × 10⁻⁷ H/m.
//!
//! Reference values: NIST Reference on Constants, Units, and Uncertainty,
//! <https://physics.nist.gov/cuu/Constants/>.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: Scalar = 8.854e-12;
/// Vacuum permeability μ₀ in henries per meter (H/m), 4π × 10⁻⁷.
pub const VACUUM_PERMEABILITY: Scalar = 4.0 * PI * 1.0e-7;

/// Coulomb coefficient 1 / (4π ε₀) in m/F.
#[inline]
#[must_use]
pub fn coulomb_coefficient() -> Scalar {
    1.0 / (4.0 * PI * VACUUM_PERMITTIVITY)
}
