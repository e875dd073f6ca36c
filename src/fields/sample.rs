use std::io::{self, Write};

use tracing::trace;

use super::FieldVector;
use crate::math::Scalar;

/// Behaviour shared by field samples: a field vector plus a derived field strength.
pub trait FieldSample {
    /// Human-readable field name used in report lines, e.g. `Electric Field`.
    const LABEL: &'static str;
    /// SI unit of the derived field strength.
    const UNIT: &'static str;

    /// Field vector carried by the sample.
    fn vector(&self) -> &FieldVector;

    /// Last value stored by the field-strength calculation (0 until calculated).
    fn calculated_field_strength(&self) -> Scalar;

    /// Euclidean magnitude of the sample's vector.
    fn magnitude(&self) -> Scalar {
        self.vector().magnitude()
    }

    /// Writes `Field Magnitude: <m>` followed by a newline.
    fn write_magnitude<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "Field Magnitude: {}", self.magnitude())
    }

    /// Writes `Calculated <label>: <value> <unit>` followed by a newline.
    fn write_calculated_field_strength<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(
            out,
            "Calculated {}: {} {}",
            Self::LABEL,
            self.calculated_field_strength(),
            Self::UNIT
        )
    }
}

/// Evaluates `law` unless `distance` is exactly zero, in which case the strength is 0.
pub(crate) fn guard_zero_distance(label: &str, distance: Scalar, law: impl FnOnce() -> Scalar) -> Scalar {
    if distance == 0.0 {
        trace!(field = label, "zero distance, field strength set to 0");
        0.0
    } else {
        law()
    }
}
