//! Four-wheel drivetrain
//!
//! Owns the four wheel motors and issues the low-level commands the control
//! components decide on. Wheel naming follows the robot frame: front-left,
//! front-right, rear-left, rear-right.

use crate::control::mixer::WheelSpeeds;
use crate::error::Result;
use crate::hal::{Direction, Motor};

pub struct Drivetrain {
    front_left: Box<dyn Motor>,
    front_right: Box<dyn Motor>,
    rear_left: Box<dyn Motor>,
    rear_right: Box<dyn Motor>,
}

impl Drivetrain {
    pub fn new(
        front_left: Box<dyn Motor>,
        front_right: Box<dyn Motor>,
        rear_left: Box<dyn Motor>,
        rear_right: Box<dyn Motor>,
    ) -> Self {
        Self {
            front_left,
            front_right,
            rear_left,
            rear_right,
        }
    }

    /// Apply a mixed set of wheel commands
    ///
    /// Each motor gets its velocity preset and is spun forward; a negative
    /// velocity spins the wheel in reverse per the actuator contract.
    pub fn apply(&mut self, speeds: &WheelSpeeds) -> Result<()> {
        self.front_left.set_velocity(speeds.front_left as f64)?;
        self.front_left.spin_forward()?;
        self.front_right.set_velocity(speeds.front_right as f64)?;
        self.front_right.spin_forward()?;
        self.rear_left.set_velocity(speeds.rear_left as f64)?;
        self.rear_left.spin_forward()?;
        self.rear_right.set_velocity(speeds.rear_right as f64)?;
        self.rear_right.spin_forward()?;
        Ok(())
    }

    /// Spin all four wheels in the same direction at the same speed
    pub fn spin_all(&mut self, direction: Direction, speed_pct: f64) -> Result<()> {
        self.front_left.spin(direction, speed_pct)?;
        self.front_right.spin(direction, speed_pct)?;
        self.rear_left.spin(direction, speed_pct)?;
        self.rear_right.spin(direction, speed_pct)?;
        Ok(())
    }

    /// Stop all drivetrain wheel movement
    pub fn stop_all(&mut self) -> Result<()> {
        self.front_left.stop()?;
        self.front_right.stop()?;
        self.rear_left.stop()?;
        self.rear_right.stop()?;
        Ok(())
    }

    pub fn front_left(&mut self) -> &mut dyn Motor {
        self.front_left.as_mut()
    }

    pub fn front_right(&mut self) -> &mut dyn Motor {
        self.front_right.as_mut()
    }

    pub fn rear_left(&mut self) -> &mut dyn Motor {
        self.rear_left.as_mut()
    }

    pub fn rear_right(&mut self) -> &mut dyn Motor {
        self.rear_right.as_mut()
    }
}
