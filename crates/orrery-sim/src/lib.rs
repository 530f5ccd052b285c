pub mod bodies;
pub mod clock;
pub mod coords;
pub mod error;
pub mod system;
pub mod validation;

pub use bodies::{BodySpec, OrbitingBody, Planet, BASE_ANGULAR_SPEED};
pub use clock::{SimulationClock, TickPolicy};
pub use coords::PlanePosition;
pub use error::SimError;
pub use system::{BodyState, OrbitalSystem, SystemSnapshot};
pub use validation::{summarize, validate_system, ValidationPoint, ValidationSummary};
