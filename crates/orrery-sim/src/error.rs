//! Simulation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// Non-finite or out-of-range numeric input (dt, angular speed, radius, angle)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
