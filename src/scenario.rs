//! Fixed demonstration scenario run by the `field-samples` binary.

use std::io::Write;

use tracing::{debug, info};

use crate::errors::FieldError;
use crate::fields::{ElectricFieldSample, FieldSample, FieldVector, MagneticFieldSample};
use crate::math::Scalar;

/// Inputs for the demonstration run.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Initial electric sample vector (E1).
    pub electric: FieldVector,
    /// Initial magnetic sample vector (B1).
    pub magnetic: FieldVector,
    /// Point charge Q in coulombs for Coulomb's law.
    pub charge_c: Scalar,
    /// Distance from the point charge in meters.
    pub charge_distance_m: Scalar,
    /// Wire current I in amperes for Ampère's law.
    pub current_a: Scalar,
    /// Distance from the wire in meters.
    pub wire_distance_m: Scalar,
    /// Electric vector added to E1 (E2).
    pub electric_addend: FieldVector,
    /// Magnetic vector added to B1 (B2).
    pub magnetic_addend: FieldVector,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            electric: FieldVector::new(1.0e5, 10.9, 1.7e2),
            magnetic: FieldVector::new(2.5, 5.3, 7.1),
            charge_c: 1.0e-6,
            charge_distance_m: 0.5,
            current_a: 10.0,
            wire_distance_m: 0.2,
            electric_addend: FieldVector::new(2.0, 3.0, 4.0),
            magnetic_addend: FieldVector::new(1.0, 2.0, 3.0),
        }
    }
}

/// Samples produced by [`Scenario::run`].
#[derive(Debug, Clone, Copy)]
pub struct ScenarioOutcome {
    /// E1 after its field strength was calculated.
    pub electric: ElectricFieldSample,
    /// B1 after its field strength was calculated.
    pub magnetic: MagneticFieldSample,
    /// E1 + E2.
    pub electric_sum: ElectricFieldSample,
    /// B1 + B2.
    pub magnetic_sum: MagneticFieldSample,
}

impl Scenario {
    /// Runs the scenario, writing six report lines to `out` in a fixed order:
    /// both magnitudes, both calculated strengths, then both sums.
    pub fn run<W: Write>(&self, mut out: W) -> Result<ScenarioOutcome, FieldError> {
        debug!(scenario = ?self, "running field scenario");

        let mut e1 = ElectricFieldSample::from_vector(self.electric);
        let mut b1 = MagneticFieldSample::from_vector(self.magnetic);

        e1.write_magnitude(&mut out)?;
        b1.write_magnitude(&mut out)?;

        e1.calculate_field_strength(self.charge_c, self.charge_distance_m);
        b1.calculate_field_strength(self.current_a, self.wire_distance_m);

        e1.write_calculated_field_strength(&mut out)?;
        b1.write_calculated_field_strength(&mut out)?;

        let electric_sum = e1 + ElectricFieldSample::from_vector(self.electric_addend);
        writeln!(out, "{electric_sum}")?;

        let magnetic_sum = b1 + MagneticFieldSample::from_vector(self.magnetic_addend);
        writeln!(out, "{magnetic_sum}")?;

        out.flush()?;
        info!(
            electric_strength = e1.calculated_field_strength(),
            magnetic_strength = b1.calculated_field_strength(),
            "field scenario complete"
        );

        Ok(ScenarioOutcome {
            electric: e1,
            magnetic: b1,
            electric_sum,
            magnetic_sum,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_scenario_writes_six_lines_in_order() {
        let mut buf = Vec::new();
        let outcome = Scenario::default().run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);

        let e_mag: Scalar = lines[0].strip_prefix("Field Magnitude: ").unwrap().parse().unwrap();
        assert_relative_eq!(e_mag, 100_000.145_093_944_7, max_relative = 1.0e-12);
        let b_mag: Scalar = lines[1].strip_prefix("Field Magnitude: ").unwrap().parse().unwrap();
        assert_relative_eq!(b_mag, 9.205_976_319_760_984, max_relative = 1.0e-12);

        let e = lines[2]
            .strip_prefix("Calculated Electric Field: ")
            .and_then(|rest| rest.strip_suffix(" N/C"))
            .unwrap();
        assert_relative_eq!(e.parse::<Scalar>().unwrap(), 35_950.969_751_952_87, max_relative = 1.0e-9);
        let b = lines[3]
            .strip_prefix("Calculated Magnetic Field: ")
            .and_then(|rest| rest.strip_suffix(" T"))
            .unwrap();
        assert_relative_eq!(b.parse::<Scalar>().unwrap(), 6_332_573.977_646_111, max_relative = 1.0e-9);

        assert_eq!(lines[4], "Electric Field: (100002, 13.9, 174)");
        assert_eq!(lines[5], "Magnetic Field: (3.5, 7.3, 10.1)");

        assert_eq!(outcome.electric_sum.calculated_field_strength(), 0.0);
        assert_eq!(outcome.magnetic_sum.calculated_field_strength(), 0.0);
        assert_eq!(
            outcome.electric.calculated_field_strength(),
            e.parse::<Scalar>().unwrap()
        );
    }

    #[test]
    fn zero_distances_report_zero_strengths() {
        let scenario = Scenario {
            charge_distance_m: 0.0,
            wire_distance_m: 0.0,
            ..Scenario::default()
        };
        let mut buf = Vec::new();
        scenario.run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Calculated Electric Field: 0 N/C\n"));
        assert!(text.contains("Calculated Magnetic Field: 0 T\n"));
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_surface_as_output_errors() {
        let err = Scenario::default().run(BrokenSink).unwrap_err();
        assert!(matches!(err, FieldError::Output(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(err.to_string().starts_with("failed to write field report"));
    }
}
