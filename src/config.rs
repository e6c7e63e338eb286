//! Configuration for the robot control core
//!
//! Loads configuration from a TOML file. Every tuning value that governs the
//! control algorithms lives here so that hardware revisions differ only in
//! their config file, not in code.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub drive: DriveConfig,
    pub vision: VisionConfig,
    pub turn: TurnConfig,
    pub launcher: LauncherConfig,
    pub intake: IntakeConfig,
    pub auton: AutonConfig,
    pub teleop: TeleopConfig,
    pub logging: LoggingConfig,
}

/// Drivetrain mixing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DriveConfig {
    /// Joystick deadband half-width: readings in [-deadband, deadband]
    /// latch to zero until a reading leaves the band
    pub deadband: i32,

    /// Per-wheel speed clamp in percent (applied symmetrically)
    pub speed_cap: i32,

    /// Shared divisor applied to every mixed wheel value
    pub speed_divisor: f64,

    /// Division factor applied after clamping while the slow-mode button
    /// is held (2 = half speed, 4 = quarter speed)
    pub slow_factor: i32,
}

/// Vision tracking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VisionConfig {
    /// Horizontal pixel coordinate of the image center
    pub center_x: f64,

    /// Camera is mounted reversed relative to driver perspective.
    /// Flips the sign of the reported offset.
    pub reversed: bool,

    /// Minimum bounding-box area (width x height, px^2). Objects at or
    /// below this are ignored; the comparison is strictly greater-than.
    pub min_area: f64,

    /// Proportional gain converting a pixel offset into a turn signal
    pub gain: f64,
}

/// Timed-turn calibration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TurnConfig {
    /// Empirical constant relating speed, duration, and turned angle:
    /// speed = (turn_constant / 90) * angle / time. Distinct per hardware
    /// revision.
    pub turn_constant: f64,
}

/// Launcher winding configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LauncherConfig {
    /// Motor speed in percent while winding toward the limit switch
    pub wind_speed: f64,
}

/// Intake roller configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntakeConfig {
    /// Roller speed in percent for both pull-in and eject
    pub speed: f64,
}

/// Autonomous routine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AutonConfig {
    /// Multiplier trimming the scripted drive speeds for field conditions
    pub speed_trim: f64,
}

/// Teleop loop configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeleopConfig {
    /// Nominal loop period in milliseconds
    pub cycle_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Calibrated configuration for the competition chassis
    ///
    /// Suitable for testing and simulation. Deployments should load a
    /// proper TOML configuration file.
    pub fn competition_defaults() -> Self {
        Self {
            drive: DriveConfig {
                deadband: 5,
                speed_cap: 80,
                speed_divisor: 1.25,
                slow_factor: 2,
            },
            vision: VisionConfig {
                center_x: 158.0,
                reversed: true,
                min_area: 2500.0,
                gain: 0.3,
            },
            turn: TurnConfig {
                turn_constant: 36.5,
            },
            launcher: LauncherConfig { wind_speed: 40.0 },
            intake: IntakeConfig { speed: 40.0 },
            auton: AutonConfig { speed_trim: 1.05 },
            teleop: TeleopConfig { cycle_ms: 20 },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.drive.speed_divisor <= 0.0 {
            return Err(Error::Config(format!(
                "drive.speed_divisor must be positive, got {}",
                self.drive.speed_divisor
            )));
        }
        if self.drive.slow_factor < 1 {
            return Err(Error::Config(format!(
                "drive.slow_factor must be >= 1, got {}",
                self.drive.slow_factor
            )));
        }
        if self.drive.speed_cap < 0 {
            return Err(Error::Config(format!(
                "drive.speed_cap must be non-negative, got {}",
                self.drive.speed_cap
            )));
        }
        if self.drive.deadband < 0 {
            return Err(Error::Config(format!(
                "drive.deadband must be non-negative, got {}",
                self.drive.deadband
            )));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::competition_defaults()
    }
}
