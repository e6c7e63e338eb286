//! Driver control loop
//!
//! The top-level cooperative loop: every cycle it samples operator input and
//! the vision sensor, conditions the axes, mixes wheel commands, and issues
//! actuator writes, then yields for one loop period. Within a cycle, input
//! sampling always precedes computation, which always precedes actuation.

use crate::config::AppConfig;
use crate::control::{DeadbandFilter, Launcher, VisionTracker, mix};
use crate::drivetrain::Drivetrain;
use crate::error::Result;
use crate::hal::{Axis, Button, Clock, InputSource, Signature};
use crate::intake::Intake;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Driver control loop over the full device set
pub struct Teleop {
    input: Box<dyn InputSource>,
    drivetrain: Drivetrain,
    intake: Intake,
    launcher: Launcher,
    tracker: VisionTracker,
    clock: Box<dyn Clock>,
    target: Signature,
    config: AppConfig,
    longitudinal: DeadbandFilter,
    lateral: DeadbandFilter,
    angular: DeadbandFilter,
    drive_stopped: bool,
}

impl Teleop {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        input: Box<dyn InputSource>,
        drivetrain: Drivetrain,
        intake: Intake,
        launcher: Launcher,
        tracker: VisionTracker,
        clock: Box<dyn Clock>,
        target: Signature,
        config: AppConfig,
    ) -> Self {
        let deadband = config.drive.deadband;
        Self {
            input,
            drivetrain,
            intake,
            launcher,
            tracker,
            clock,
            target,
            config,
            longitudinal: DeadbandFilter::new(deadband),
            lateral: DeadbandFilter::new(deadband),
            angular: DeadbandFilter::new(deadband),
            drive_stopped: true,
        }
    }

    /// Run cycles until the token clears, then stop every actuator
    pub fn run(&mut self, running: &AtomicBool) -> Result<()> {
        log::info!("Driver control started");
        while running.load(Ordering::Relaxed) {
            self.cycle()?;
        }
        log::info!("Driver control stopping");
        self.drivetrain.stop_all()?;
        self.intake.stop()?;
        Ok(())
    }

    /// One control cycle
    ///
    /// Public so tests can step the loop deterministically.
    pub fn cycle(&mut self) -> Result<()> {
        // Input sampling
        let longitudinal = self.input.axis(Axis::Longitudinal)?;
        let lateral = self.input.axis(Axis::Lateral)?;
        let mut angular = self.input.axis(Axis::Angular)?;

        let offset = self
            .tracker
            .locate(&self.target, self.config.vision.min_area)?;

        // Blend the tracking offset into the angular axis before the
        // deadband so a held stick still dominates a weak correction.
        // The sum truncates toward zero as a whole.
        if self.input.button(Button::VisionAssist)? {
            angular = (angular as f64 + offset * self.config.vision.gain) as i32;
        }

        // Condition the axes
        let longitudinal = self.longitudinal.apply(longitudinal);
        let lateral = self.lateral.apply(lateral);
        let angular = self.angular.apply(angular);

        // Mix and optionally cut speed; the cutoff applies after clamping
        let mut speeds = mix(longitudinal, lateral, angular, &self.config.drive);
        if self.input.button(Button::SlowMode)? {
            speeds = speeds.scaled_down(self.config.drive.slow_factor);
        }

        // Actuate, stopping exactly once on the transition to all-idle
        let any_live = !(self.longitudinal.is_suppressed()
            && self.lateral.is_suppressed()
            && self.angular.is_suppressed());
        if any_live {
            self.drivetrain.apply(&speeds)?;
            self.drive_stopped = false;
        } else if !self.drive_stopped {
            self.drivetrain.stop_all()?;
            self.drive_stopped = true;
        }

        // Intake roller
        if self.input.button(Button::IntakeIn)? {
            self.intake.pull_in(self.config.intake.speed)?;
        } else if self.input.button(Button::IntakeOut)? {
            self.intake.eject(self.config.intake.speed)?;
        } else {
            self.intake.stop()?;
        }

        // Launcher winds to completion before the loop resumes
        if self.input.button(Button::Launch)? {
            self.launcher.launch()?;
        }

        self.clock
            .wait(Duration::from_millis(self.config.teleop.cycle_ms));
        Ok(())
    }
}
