//! Operator input source trait

use crate::error::Result;

/// Logical drive axes sampled from the operator controller
///
/// Readings are bounded integers, roughly -100..100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Forward/backward (forward positive)
    Longitudinal,
    /// Strafe (right positive)
    Lateral,
    /// Rotation (clockwise positive)
    Angular,
}

/// Logical buttons the control loop reacts to
///
/// The mapping from physical controls to these is a device concern; the
/// control core only sees the behavior each button gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Scale all wheel outputs down while held
    SlowMode,
    /// Blend the vision tracking offset into the angular axis while held
    VisionAssist,
    /// Run the intake roller inward while held
    IntakeIn,
    /// Run the intake roller outward while held
    IntakeOut,
    /// Wind the launcher until it releases
    Launch,
}

/// Operator input source
///
/// Synchronous sampling with latest-value semantics; there is no buffering
/// guarantee beyond "most recent sample".
pub trait InputSource: Send {
    /// Current reading of a logical axis
    fn axis(&mut self, axis: Axis) -> Result<i32>;

    /// Whether a logical button is currently held
    fn button(&mut self, button: Button) -> Result<bool>;
}
