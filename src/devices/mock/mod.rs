//! Mock devices for hardware-free simulation and testing
//!
//! Every driver trait has a scripted counterpart here. Each mock is `Clone`
//! around a shared state handle, so a test keeps a view of the device while
//! the control components own the boxed driver:
//!
//! ```
//! use yantra_core::devices::mock::MockMotor;
//! use yantra_core::hal::{Direction, Motor};
//!
//! let motor = MockMotor::new();
//! let mut boxed: Box<dyn Motor> = Box::new(motor.clone());
//! boxed.spin(Direction::Forward, 40.0).unwrap();
//! assert!(motor.is_running());
//! ```

mod clock;
mod input;
mod motor;
mod switch;
mod vision;

pub use clock::ManualClock;
pub use input::{InputFrame, ScriptedInput};
pub use motor::{MockMotor, MotorCommand};
pub use switch::ScriptedSwitch;
pub use vision::ScriptedVision;
