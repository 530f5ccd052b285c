//! Positions in the horizontal orbital plane

use serde::{Deserialize, Serialize};

/// Position in the orbital plane (the vertical axis is owned by the renderer)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanePosition {
    pub x: f64,
    pub z: f64,
}

impl PlanePosition {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Project polar coordinates onto the plane
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            z: radius * angle.sin(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_polar_projection_stays_on_circle() {
        let angles = [0.0, 0.29, PI / 3.0, PI, 1.5 * PI, 7.0 * PI];

        for angle in angles {
            let pos = PlanePosition::from_polar(19.0, angle);
            assert!((pos.magnitude() - 19.0).abs() < 1e-9, "off circle at {}", angle);
        }
    }

    #[test]
    fn test_zero_radius_projects_to_origin() {
        let pos = PlanePosition::from_polar(0.0, 2.37);
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.z, 0.0);
    }

    #[test]
    fn test_cardinal_angles() {
        let east = PlanePosition::from_polar(2.0, 0.0);
        assert!((east.x - 2.0).abs() < 1e-12);
        assert!(east.z.abs() < 1e-12);

        let north = PlanePosition::from_polar(2.0, PI / 2.0);
        assert!(north.x.abs() < 1e-12);
        assert!((north.z - 2.0).abs() < 1e-12);
    }
}
