//! Motor driver trait

use crate::error::Result;

/// Spin direction for a motor command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Sign convention: forward is +1, reverse is -1
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

/// Smart motor driver trait
///
/// Commands are fire-and-forget and idempotent: no acknowledgment is
/// expected, and repeating a command is harmless. A negative velocity with
/// [`Direction::Forward`] spins the motor in reverse.
pub trait Motor: Send {
    /// Spin at the given speed in percent of maximum
    fn spin(&mut self, direction: Direction, speed_pct: f64) -> Result<()>;

    /// Preset the velocity in percent without starting the motor
    fn set_velocity(&mut self, speed_pct: f64) -> Result<()>;

    /// Spin forward at the last preset velocity
    fn spin_forward(&mut self) -> Result<()>;

    /// Stop the motor
    fn stop(&mut self) -> Result<()>;
}
