//! Intake roller
//!
//! A single motor pulling game objects in or ejecting them. The roller is
//! geared so that reverse spin pulls inward.

use crate::error::Result;
use crate::hal::{Direction, Motor};

pub struct Intake {
    motor: Box<dyn Motor>,
}

impl Intake {
    pub fn new(motor: Box<dyn Motor>) -> Self {
        Self { motor }
    }

    /// Spin the roller inward at `speed` percent
    pub fn pull_in(&mut self, speed: f64) -> Result<()> {
        self.motor.spin(Direction::Reverse, speed)
    }

    /// Spin the roller outward at `speed` percent
    pub fn eject(&mut self, speed: f64) -> Result<()> {
        self.motor.spin(Direction::Forward, speed)
    }

    /// Stop the roller
    pub fn stop(&mut self) -> Result<()> {
        self.motor.stop()
    }
}
