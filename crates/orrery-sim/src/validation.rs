//! Validation of the on-circle invariant
//!
//! Every projected position must sit on its body's orbit circle. Long runs of
//! small steps only mutate the angle, so any radial drift points at a
//! projection bug rather than accumulation error.

use crate::system::OrbitalSystem;

/// Validation result for a single body
#[derive(Debug)]
pub struct ValidationPoint {
    pub name: String,
    pub expected_radius: f64,
    pub measured_radius: f64,
    /// Absolute radial drift
    pub drift: f64,
}

/// Check every body's distance from the origin against its orbital radius
pub fn validate_system(system: &OrbitalSystem) -> Vec<ValidationPoint> {
    system
        .bodies()
        .iter()
        .map(|body| {
            let measured = body.position().magnitude();
            ValidationPoint {
                name: body.name.clone(),
                expected_radius: body.orbital_radius,
                measured_radius: measured,
                drift: (measured - body.orbital_radius).abs(),
            }
        })
        .collect()
}

/// Summary statistics over many validation points
#[derive(Debug)]
pub struct ValidationSummary {
    pub num_points: usize,
    pub mean_drift: f64,
    pub max_drift: f64,
}

pub fn summarize(points: &[ValidationPoint]) -> ValidationSummary {
    let n = points.len();
    if n == 0 {
        return ValidationSummary {
            num_points: 0,
            mean_drift: 0.0,
            max_drift: 0.0,
        };
    }

    let mean = points.iter().map(|p| p.drift).sum::<f64>() / n as f64;
    let max = points.iter().map(|p| p.drift).fold(0.0, f64::max);

    ValidationSummary {
        num_points: n,
        mean_drift: mean,
        max_drift: max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_system_has_no_drift() {
        let system = OrbitalSystem::solar_system(3);
        let points = validate_system(&system);
        assert_eq!(points.len(), 9);

        let summary = summarize(&points);
        assert!(summary.max_drift < 1e-9);
    }

    #[test]
    fn test_drift_stays_bounded_over_long_run() {
        let mut system = OrbitalSystem::solar_system(3);
        let mut all_points = Vec::new();

        for _ in 0..200 {
            system.advance(1.0, false).unwrap();
            all_points.extend(validate_system(&system));
        }

        let summary = summarize(&all_points);
        assert_eq!(summary.num_points, 200 * 9);
        // Relative to the largest orbit (~4495) this is float-noise territory
        assert!(summary.max_drift < 1e-6);
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.num_points, 0);
        assert_eq!(summary.max_drift, 0.0);
    }
}
