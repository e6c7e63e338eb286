//! Timed open-loop maneuver primitives
//!
//! Blocking, fixed-duration actuator commands used to script autonomous
//! routines. The drivetrain is a pinwheel arrangement: the front-left and
//! rear-right wheels drive straight-line motion while the other diagonal
//! pair drives lateral motion, so each straight primitive energizes two
//! wheels and explicitly stops the other two. Primitives compose
//! sequentially, never concurrently, and every timed primitive ends in a
//! full stop.

use crate::drivetrain::Drivetrain;
use crate::error::Result;
use crate::hal::{Clock, Direction};
use std::time::Duration;

/// Open-loop maneuver executor
///
/// `turn_constant` is the empirically tuned value relating wheel speed,
/// duration, and turned angle for this chassis revision.
#[derive(Debug, Clone)]
pub struct Maneuvers {
    turn_constant: f64,
}

impl Maneuvers {
    pub fn new(turn_constant: f64) -> Self {
        Self { turn_constant }
    }

    /// Drive forward for `time_s` seconds at `speed` percent
    pub fn forward(
        &self,
        drivetrain: &mut Drivetrain,
        clock: &mut dyn Clock,
        time_s: f64,
        speed: f64,
    ) -> Result<()> {
        log::debug!("Maneuver: forward {:.1}s at {:.1}%", time_s, speed);
        self.forward_free(drivetrain, speed)?;
        clock.wait(Duration::from_secs_f64(time_s));
        drivetrain.stop_all()
    }

    /// Drive forward without a duration; the caller stops the drivetrain
    ///
    /// Used by feedback sequences that decide the stopping point themselves.
    pub fn forward_free(&self, drivetrain: &mut Drivetrain, speed: f64) -> Result<()> {
        drivetrain.rear_right().spin(Direction::Reverse, speed)?;
        drivetrain.front_left().spin(Direction::Forward, speed)?;
        drivetrain.front_right().stop()?;
        drivetrain.rear_left().stop()?;
        Ok(())
    }

    /// Drive backward for `time_s` seconds at `speed` percent
    pub fn backward(
        &self,
        drivetrain: &mut Drivetrain,
        clock: &mut dyn Clock,
        time_s: f64,
        speed: f64,
    ) -> Result<()> {
        log::debug!("Maneuver: backward {:.1}s at {:.1}%", time_s, speed);
        drivetrain.rear_right().spin(Direction::Forward, speed)?;
        drivetrain.front_left().spin(Direction::Reverse, speed)?;
        drivetrain.front_right().stop()?;
        drivetrain.rear_left().stop()?;
        clock.wait(Duration::from_secs_f64(time_s));
        drivetrain.stop_all()
    }

    /// Strafe right for `time_s` seconds at `speed` percent
    pub fn strafe_right(
        &self,
        drivetrain: &mut Drivetrain,
        clock: &mut dyn Clock,
        time_s: f64,
        speed: f64,
    ) -> Result<()> {
        log::debug!("Maneuver: strafe right {:.1}s at {:.1}%", time_s, speed);
        drivetrain.rear_right().stop()?;
        drivetrain.front_left().stop()?;
        drivetrain.front_right().spin(Direction::Forward, speed)?;
        drivetrain.rear_left().spin(Direction::Reverse, speed)?;
        clock.wait(Duration::from_secs_f64(time_s));
        drivetrain.stop_all()
    }

    /// Strafe left for `time_s` seconds at `speed` percent
    pub fn strafe_left(
        &self,
        drivetrain: &mut Drivetrain,
        clock: &mut dyn Clock,
        time_s: f64,
        speed: f64,
    ) -> Result<()> {
        log::debug!("Maneuver: strafe left {:.1}s at {:.1}%", time_s, speed);
        drivetrain.rear_right().stop()?;
        drivetrain.front_left().stop()?;
        drivetrain.front_right().spin(Direction::Reverse, speed)?;
        drivetrain.rear_left().spin(Direction::Forward, speed)?;
        clock.wait(Duration::from_secs_f64(time_s));
        drivetrain.stop_all()
    }

    /// Turn right by `angle_deg` degrees over `time_s` seconds
    ///
    /// The wheel speed is derived from the calibrated linear relationship
    /// `speed = (turn_constant / 90) * angle / time`; all four wheels spin
    /// forward for the full duration.
    pub fn turn_right(
        &self,
        drivetrain: &mut Drivetrain,
        clock: &mut dyn Clock,
        time_s: f64,
        angle_deg: f64,
    ) -> Result<()> {
        let speed = self.turn_speed(angle_deg, time_s);
        log::debug!(
            "Maneuver: turn right {:.0} deg in {:.1}s at {:.1}%",
            angle_deg,
            time_s,
            speed
        );
        drivetrain.spin_all(Direction::Forward, speed)?;
        clock.wait(Duration::from_secs_f64(time_s));
        drivetrain.stop_all()
    }

    /// Turn left by `angle_deg` degrees over `time_s` seconds
    pub fn turn_left(
        &self,
        drivetrain: &mut Drivetrain,
        clock: &mut dyn Clock,
        time_s: f64,
        angle_deg: f64,
    ) -> Result<()> {
        let speed = self.turn_speed(angle_deg, time_s);
        log::debug!(
            "Maneuver: turn left {:.0} deg in {:.1}s at {:.1}%",
            angle_deg,
            time_s,
            speed
        );
        drivetrain.spin_all(Direction::Reverse, speed)?;
        clock.wait(Duration::from_secs_f64(time_s));
        drivetrain.stop_all()
    }

    fn turn_speed(&self, angle_deg: f64, time_s: f64) -> f64 {
        (self.turn_constant / 90.0) * angle_deg / time_s
    }
}
