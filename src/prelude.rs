//! Convenience re-exports for working with field samples.

pub use crate::constants::{coulomb_coefficient, VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
pub use crate::errors::FieldError;
pub use crate::fields::{ElectricFieldSample, FieldSample, FieldVector, MagneticFieldSample};
pub use crate::math::{R3, Scalar};
pub use crate::scenario::{Scenario, ScenarioOutcome};
