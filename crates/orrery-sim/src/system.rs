//! Orbital system state and per-tick snapshots

use crate::bodies::{BodySpec, OrbitingBody, Planet};
use crate::coords::PlanePosition;
use crate::error::SimError;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One body's state at a point in time
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BodyState {
    pub name: String,
    pub angle: f64,
    pub position: PlanePosition,
}

/// Snapshot of the whole system, handed to the rendering collaborator
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SystemSnapshot {
    pub states: Vec<BodyState>,
}

/// The set of orbiting bodies, owned by the caller and advanced per tick
pub struct OrbitalSystem {
    bodies: Vec<OrbitingBody>,
}

impl OrbitalSystem {
    /// Build from descriptors; unspecified initial angles are drawn from a
    /// seeded RNG so runs are reproducible
    pub fn from_specs(specs: &[BodySpec], seed: u64) -> Result<Self, SimError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let bodies = specs
            .iter()
            .map(|spec| OrbitingBody::from_spec(spec, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bodies })
    }

    /// The built-in solar-system catalog
    pub fn solar_system(seed: u64) -> Self {
        let specs: Vec<BodySpec> = Planet::all().iter().map(|p| p.spec()).collect();
        // Catalog specs are always valid
        Self::from_specs(&specs, seed).unwrap_or(Self { bodies: Vec::new() })
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&OrbitingBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Advance every orbiting body's angle by dt simulated seconds.
    ///
    /// Identity when paused (no angle mutation, however large dt is).
    /// A non-finite dt is rejected and the prior state retained, so one bad
    /// sample cannot poison displayed positions.
    pub fn advance(&mut self, dt: f64, paused: bool) -> Result<(), SimError> {
        if paused {
            return Ok(());
        }
        if !dt.is_finite() {
            return Err(SimError::InvalidInput(format!(
                "dt must be finite, got {}",
                dt
            )));
        }
        if dt == 0.0 {
            return Ok(());
        }

        for body in &mut self.bodies {
            body.advance(dt);
        }

        Ok(())
    }

    pub fn snapshot(&self) -> SystemSnapshot {
        SystemSnapshot {
            states: self
                .bodies
                .iter()
                .map(|b| BodyState {
                    name: b.name.clone(),
                    angle: b.angle,
                    position: b.position(),
                })
                .collect(),
        }
    }
}
