//! Limit switch trait

use crate::error::Result;

/// Binary contact sensor (bumper / limit switch)
pub trait LimitSwitch: Send {
    /// Whether the switch is currently pressed
    fn is_pressed(&mut self) -> Result<bool>;
}
