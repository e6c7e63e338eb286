//! Hardware abstraction traits
//!
//! Every device the control core touches is reached through one of these
//! traits, so the algorithms run unchanged against real hardware bindings or
//! the simulated devices in [`crate::devices::mock`].

pub mod clock;
pub mod input;
pub mod motor;
pub mod switch;
pub mod vision;

pub use clock::{Clock, SystemClock};
pub use input::{Axis, Button, InputSource};
pub use motor::{Direction, Motor};
pub use switch::LimitSwitch;
pub use vision::{DetectedObject, Signature, Snapshot, VisionSensor};
