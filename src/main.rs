//! yantra-core - Control loop daemon for the competition robot
//!
//! Runs the driver-control loop (default) or the autonomous routine
//! (`--autonomous`) against the mock device set. Real hardware bindings
//! implement the `hal` traits out of tree and wire up the same way.

use std::env;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use yantra_core::auton::Autonomous;
use yantra_core::config::AppConfig;
use yantra_core::control::{Launcher, VisionTracker};
use yantra_core::devices::mock::{MockMotor, ScriptedInput, ScriptedSwitch, ScriptedVision};
use yantra_core::drivetrain::Drivetrain;
use yantra_core::error::Result;
use yantra_core::hal::{Signature, SystemClock};
use yantra_core::intake::Intake;
use yantra_core::teleop::Teleop;

/// Parse config path from command line arguments.
///
/// Supports:
/// - `yantra-core <path>` (positional)
/// - `yantra-core --config <path>` (flag-based)
/// - `yantra-core -c <path>` (short flag)
///
/// Returns `None` if not specified; defaults then apply.
fn parse_config_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();

    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }

    if args.len() > 1 && !args[1].starts_with('-') {
        return Some(args[1].clone());
    }

    None
}

fn main() -> Result<()> {
    let config = match parse_config_path() {
        Some(path) => AppConfig::from_file(&path)?,
        None => AppConfig::competition_defaults(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .init();

    log::info!("yantra-core starting (simulated devices)");

    // Wire up the mock device set
    let drivetrain = Drivetrain::new(
        Box::new(MockMotor::new()),
        Box::new(MockMotor::new()),
        Box::new(MockMotor::new()),
        Box::new(MockMotor::new()),
    );
    let intake = Intake::new(Box::new(MockMotor::new()));
    let launcher = Launcher::new(
        Box::new(MockMotor::new()),
        Box::new(ScriptedSwitch::always_pressed()),
        config.launcher.wind_speed,
    );
    let tracker = VisionTracker::new(Box::new(ScriptedVision::new()), &config.vision);
    let clock = Box::new(SystemClock);
    let target = Signature::blue_triball();

    let autonomous_mode = env::args().any(|a| a == "--autonomous");
    if autonomous_mode {
        let mut auton = Autonomous::new(drivetrain, intake, tracker, clock, config);
        auton.run(&target)?;
        log::info!("Autonomous routine complete");
        return Ok(());
    }

    // Shutdown token checked once per loop cycle
    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::Relaxed);
    })
    .map_err(|e| yantra_core::Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    let mut teleop = Teleop::new(
        Box::new(ScriptedInput::new()),
        drivetrain,
        intake,
        launcher,
        tracker,
        clock,
        target,
        config,
    );

    log::info!("yantra-core running. Press Ctrl-C to stop.");
    teleop.run(&running)?;

    log::info!("yantra-core stopped");
    Ok(())
}
