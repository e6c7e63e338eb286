//! Autonomous routines
//!
//! Scripted sequences composed from the timed maneuver primitives, run
//! synchronously with no input polling. The only feedback section is the
//! vision-guided ball approach, which interleaves tracker polls with the
//! proportional turn controller.

use crate::config::AppConfig;
use crate::control::{Maneuvers, TurnController, VisionTracker};
use crate::drivetrain::Drivetrain;
use crate::error::Result;
use crate::hal::{Clock, Signature};
use crate::intake::Intake;
use std::time::Duration;

/// Offset magnitude below which the robot is considered aimed at the target
const AIMED_THRESHOLD: f64 = 5.0;

/// Drive speed in percent for the final approach to a tracked object
const APPROACH_SPEED: f64 = 40.0;

/// Autonomous routine executor
pub struct Autonomous {
    drivetrain: Drivetrain,
    intake: Intake,
    tracker: VisionTracker,
    turn: TurnController,
    maneuvers: Maneuvers,
    clock: Box<dyn Clock>,
    config: AppConfig,
}

impl Autonomous {
    pub fn new(
        drivetrain: Drivetrain,
        intake: Intake,
        tracker: VisionTracker,
        clock: Box<dyn Clock>,
        config: AppConfig,
    ) -> Self {
        Self {
            drivetrain,
            intake,
            tracker,
            turn: TurnController::new(config.vision.gain),
            maneuvers: Maneuvers::new(config.turn.turn_constant),
            clock,
            config,
        }
    }

    /// Run the competition autonomous period
    pub fn run(&mut self, target: &Signature) -> Result<()> {
        self.preload_straight(target, true)
    }

    /// Score the preloaded object, then optionally hunt the next one
    ///
    /// Drives up near the autonomous line, turns toward the goal, closes in,
    /// and ejects the preload. With vision chaining enabled the robot then
    /// backs off, swings around to face the far object, and hands off to the
    /// tracked approach.
    pub fn preload_straight(&mut self, target: &Signature, use_vision: bool) -> Result<()> {
        log::info!("Autonomous: preload routine (vision: {})", use_vision);
        let trim = self.config.auton.speed_trim;

        self.maneuvers
            .forward(&mut self.drivetrain, self.clock.as_mut(), 3.0, 50.0 * trim)?;
        self.pause();
        self.maneuvers
            .turn_right(&mut self.drivetrain, self.clock.as_mut(), 1.0, 90.0)?;
        self.pause();
        self.maneuvers
            .forward(&mut self.drivetrain, self.clock.as_mut(), 1.0, 5.0 * trim)?;
        self.pause();

        // Eject the preload into the goal
        self.intake.eject(self.config.intake.speed)?;
        self.clock.wait(Duration::from_secs(2));
        self.intake.stop()?;

        if !use_vision {
            return Ok(());
        }

        self.maneuvers
            .backward(&mut self.drivetrain, self.clock.as_mut(), 1.0, 5.0 * trim)?;
        self.pause();
        // Swing around to face the object near the long barrier
        self.maneuvers
            .turn_right(&mut self.drivetrain, self.clock.as_mut(), 2.0, 160.0)?;
        self.pause();
        self.maneuvers
            .forward(&mut self.drivetrain, self.clock.as_mut(), 1.0, APPROACH_SPEED)?;

        self.go_to_ball(target)
    }

    /// Turn toward the tracked object, then drive onto it with the intake
    /// running
    ///
    /// Polls the tracker every iteration and feeds the offset to the turn
    /// controller until the error is small, then drives forward for a fixed
    /// time and halts. Losing sight of the target reads as zero offset,
    /// which ends the aiming phase rather than erroring.
    pub fn go_to_ball(&mut self, target: &Signature) -> Result<()> {
        log::info!("Autonomous: tracked approach");
        loop {
            let offset = self.tracker.locate(target, self.config.vision.min_area)?;
            if offset.abs() >= AIMED_THRESHOLD {
                self.turn.command(&mut self.drivetrain, offset)?;
            } else {
                self.maneuvers
                    .forward_free(&mut self.drivetrain, APPROACH_SPEED)?;
                self.intake.pull_in(self.config.intake.speed)?;
                self.clock.wait(Duration::from_secs(2));
                self.drivetrain.stop_all()?;
                self.intake.stop()?;
                return Ok(());
            }
        }
    }

    fn pause(&mut self) {
        self.clock.wait(Duration::from_millis(500));
    }
}
