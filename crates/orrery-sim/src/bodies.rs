//! Orbiting bodies and the built-in solar-system catalog
//!
//! Catalog values are display-scaled: body radii by 1e4 from km,
//! orbital radii by 1e2 from 10^6 km.

use crate::coords::PlanePosition;
use crate::error::SimError;
use rand::Rng;
use std::f64::consts::TAU;

/// Angular speed of a body with speed factor 1.0 (radians per simulated second)
pub const BASE_ANGULAR_SPEED: f64 = 0.1;

/// Startup descriptor for one body
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BodySpec {
    pub name: String,
    /// Distance from the shared orbital center; 0 marks a stationary central body
    pub orbital_radius: f64,
    /// Signed rate of angle change (radians per simulated second)
    pub angular_speed: f64,
    /// Starting angle in radians; None draws one from the seeded RNG
    pub initial_angle: Option<f64>,
}

impl BodySpec {
    pub fn new(name: impl Into<String>, orbital_radius: f64, angular_speed: f64) -> Self {
        Self {
            name: name.into(),
            orbital_radius,
            angular_speed,
            initial_angle: None,
        }
    }

    pub fn with_initial_angle(mut self, angle: f64) -> Self {
        self.initial_angle = Some(angle);
        self
    }
}

/// Live state of one simulated body
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OrbitingBody {
    pub name: String,
    pub orbital_radius: f64,
    pub angular_speed: f64,
    /// Current angular position (radians, unwrapped)
    pub angle: f64,
}

impl OrbitingBody {
    /// Build from a descriptor, drawing a random initial angle in [0, 2π) if unset
    pub fn from_spec(spec: &BodySpec, rng: &mut impl Rng) -> Result<Self, SimError> {
        if !spec.orbital_radius.is_finite() || spec.orbital_radius < 0.0 {
            return Err(SimError::InvalidInput(format!(
                "{}: orbital radius must be finite and non-negative, got {}",
                spec.name, spec.orbital_radius
            )));
        }
        if !spec.angular_speed.is_finite() {
            return Err(SimError::InvalidInput(format!(
                "{}: angular speed must be finite, got {}",
                spec.name, spec.angular_speed
            )));
        }
        let angle = match spec.initial_angle {
            Some(a) if !a.is_finite() => {
                return Err(SimError::InvalidInput(format!(
                    "{}: initial angle must be finite, got {}",
                    spec.name, a
                )));
            }
            Some(a) => a,
            None => rng.random_range(0.0..TAU),
        };

        Ok(Self {
            name: spec.name.clone(),
            orbital_radius: spec.orbital_radius,
            angular_speed: spec.angular_speed,
            angle,
        })
    }

    /// A central body has no orbit to traverse
    pub fn is_stationary(&self) -> bool {
        self.orbital_radius == 0.0
    }

    /// Advance the orbital angle by dt simulated seconds
    pub fn advance(&mut self, dt: f64) {
        if self.is_stationary() {
            return;
        }
        self.angle += self.angular_speed * dt;
    }

    /// Current position on the orbit circle
    pub fn position(&self) -> PlanePosition {
        PlanePosition::from_polar(self.orbital_radius, self.angle)
    }

    /// Orbital period in simulated seconds (None for stationary or non-rotating bodies)
    pub fn period(&self) -> Option<f64> {
        if self.is_stationary() || self.angular_speed == 0.0 {
            None
        } else {
            Some(TAU / self.angular_speed.abs())
        }
    }
}

/// Built-in solar-system bodies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Planet {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }

    /// Display-scaled body radius
    pub fn display_radius(&self) -> f64 {
        match self {
            Self::Sun => 69.57,
            Self::Mercury => 0.2439,
            Self::Venus => 0.6051,
            Self::Earth => 0.6371,
            Self::Mars => 0.3389,
            Self::Jupiter => 6.9911,
            Self::Saturn => 5.8232,
            Self::Uranus => 2.5362,
            Self::Neptune => 2.4622,
        }
    }

    /// Display-scaled distance from the Sun
    pub fn orbital_radius(&self) -> f64 {
        match self {
            Self::Sun => 0.0,
            Self::Mercury => 57.9,
            Self::Venus => 108.2,
            Self::Earth => 149.6,
            Self::Mars => 227.9,
            Self::Jupiter => 778.6,
            Self::Saturn => 1433.5,
            Self::Uranus => 2872.5,
            Self::Neptune => 4495.1,
        }
    }

    /// Orbital speed relative to Earth
    pub fn speed_factor(&self) -> f64 {
        match self {
            Self::Sun => 0.0,
            Self::Mercury => 1.607,
            Self::Venus => 1.174,
            Self::Earth => 1.0,
            Self::Mars => 0.802,
            Self::Jupiter => 0.434,
            Self::Saturn => 0.323,
            Self::Uranus => 0.228,
            Self::Neptune => 0.182,
        }
    }

    /// Fallback display color (0xRRGGBB)
    pub fn color(&self) -> u32 {
        match self {
            Self::Sun => 0xffff00,
            Self::Mercury => 0xff0000,
            Self::Venus => 0x00ff00,
            Self::Earth => 0x0000ff,
            Self::Mars => 0xffa500,
            Self::Jupiter => 0xffd700,
            Self::Saturn => 0x808080,
            Self::Uranus => 0x00ffff,
            Self::Neptune => 0x000080,
        }
    }

    pub fn angular_speed(&self) -> f64 {
        BASE_ANGULAR_SPEED * self.speed_factor()
    }

    pub fn spec(&self) -> BodySpec {
        BodySpec::new(self.name(), self.orbital_radius(), self.angular_speed())
    }

    /// All bodies including the Sun
    pub fn all() -> &'static [Planet] {
        &[
            Self::Sun,
            Self::Mercury,
            Self::Venus,
            Self::Earth,
            Self::Mars,
            Self::Jupiter,
            Self::Saturn,
            Self::Uranus,
            Self::Neptune,
        ]
    }

    /// Orbiting bodies only
    pub fn planets() -> &'static [Planet] {
        &[
            Self::Mercury,
            Self::Venus,
            Self::Earth,
            Self::Mars,
            Self::Jupiter,
            Self::Saturn,
            Self::Uranus,
            Self::Neptune,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_stationary_body_never_moves() {
        let mut rng = StdRng::seed_from_u64(1);
        let spec = BodySpec::new("Sun", 0.0, 0.5).with_initial_angle(0.0);
        let mut sun = OrbitingBody::from_spec(&spec, &mut rng).unwrap();

        for _ in 0..100 {
            sun.advance(3.7);
        }

        assert_eq!(sun.angle, 0.0);
        let pos = sun.position();
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.z, 0.0);
    }

    #[test]
    fn test_advance_follows_angular_speed() {
        let mut rng = StdRng::seed_from_u64(1);
        let spec = BodySpec::new("probe", 19.0, 0.029).with_initial_angle(0.0);
        let mut body = OrbitingBody::from_spec(&spec, &mut rng).unwrap();

        body.advance(10.0);
        assert!((body.angle - 0.29).abs() < 1e-12);

        let pos = body.position();
        assert!((pos.x - 19.0 * 0.29f64.cos()).abs() < 1e-9);
        assert!((pos.z - 19.0 * 0.29f64.sin()).abs() < 1e-9);
        assert!((pos.x - 18.2066).abs() < 1e-3);
        assert!((pos.z - 5.4331).abs() < 1e-3);
    }

    #[test]
    fn test_random_initial_angle_is_seeded() {
        let spec = BodySpec::new("Earth", 149.6, 0.1);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = OrbitingBody::from_spec(&spec, &mut rng_a).unwrap();
        let b = OrbitingBody::from_spec(&spec, &mut rng_b).unwrap();

        assert_eq!(a.angle, b.angle);
        assert!(a.angle >= 0.0 && a.angle < TAU);
    }

    #[test]
    fn test_rejects_bad_specs() {
        let mut rng = StdRng::seed_from_u64(1);

        let negative = BodySpec::new("x", -1.0, 0.1);
        assert!(OrbitingBody::from_spec(&negative, &mut rng).is_err());

        let nan_speed = BodySpec::new("x", 1.0, f64::NAN);
        assert!(OrbitingBody::from_spec(&nan_speed, &mut rng).is_err());

        let inf_angle = BodySpec::new("x", 1.0, 0.1).with_initial_angle(f64::INFINITY);
        assert!(OrbitingBody::from_spec(&inf_angle, &mut rng).is_err());
    }

    #[test]
    fn test_catalog_is_well_formed() {
        for planet in Planet::all() {
            assert!(planet.orbital_radius() >= 0.0);
            assert!(planet.angular_speed().is_finite());
        }

        // Orbital radii increase outward
        let radii: Vec<f64> = Planet::planets().iter().map(|p| p.orbital_radius()).collect();
        for pair in radii.windows(2) {
            assert!(pair[0] < pair[1]);
        }

        // Inner planets orbit faster
        assert!(Planet::Mercury.angular_speed() > Planet::Neptune.angular_speed());
        assert!((Planet::Earth.angular_speed() - BASE_ANGULAR_SPEED).abs() < 1e-12);
    }
}
