//! Control algorithms
//!
//! The algorithmic core of the robot: input conditioning, holonomic drive
//! mixing, visual target tracking, the proportional turn controller, timed
//! open-loop maneuvers, and the launcher state machine. Everything here is
//! hardware-free and runs against the [`crate::hal`] traits.

pub mod deadband;
pub mod launcher;
pub mod maneuver;
pub mod mixer;
pub mod tracker;
pub mod turn;

pub use deadband::DeadbandFilter;
pub use launcher::{Launcher, LauncherState};
pub use maneuver::Maneuvers;
pub use mixer::{WheelSpeeds, mix};
pub use tracker::VisionTracker;
pub use turn::TurnController;
