//! Launcher wind/release state machine
//!
//! The launcher arm is wound by its motor until the release mechanism trips
//! a limit switch. Winding is a blocking operation: if the switch never
//! trips the call never returns, and the operator must intervene. The
//! mechanical design guarantees an eventual trip, so no timeout exists.

use crate::error::Result;
use crate::hal::{Direction, LimitSwitch, Motor};

/// Launcher mechanism state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherState {
    /// Motor energized, waiting for the limit switch
    Winding,
    /// At rest; re-armed only by a fresh launch call
    Idle,
}

/// Spring/motor-driven launcher gated by a limit switch
pub struct Launcher {
    motor: Box<dyn Motor>,
    switch: Box<dyn LimitSwitch>,
    wind_speed: f64,
    state: LauncherState,
}

impl Launcher {
    pub fn new(motor: Box<dyn Motor>, switch: Box<dyn LimitSwitch>, wind_speed: f64) -> Self {
        Self {
            motor,
            switch,
            wind_speed,
            state: LauncherState::Idle,
        }
    }

    /// Wind the launcher until it releases and trips the limit switch
    ///
    /// Polls the switch, energizing the motor on every unpressed reading;
    /// the instant the switch reports pressed the motor is stopped and the
    /// mechanism returns to [`LauncherState::Idle`].
    pub fn launch(&mut self) -> Result<()> {
        log::info!("Launcher: winding");
        self.state = LauncherState::Winding;

        while !self.switch.is_pressed()? {
            self.motor.spin(Direction::Forward, self.wind_speed)?;
        }

        self.motor.stop()?;
        self.state = LauncherState::Idle;
        log::info!("Launcher: released");
        Ok(())
    }

    pub fn state(&self) -> LauncherState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::mock::{MockMotor, MotorCommand, ScriptedSwitch};

    #[test]
    fn test_energize_counts() {
        // Switch trips on the 5th poll: exactly 4 energize commands,
        // then exactly one stop
        let motor = MockMotor::new();
        let switch = ScriptedSwitch::pressed_on_poll(5);
        let mut launcher = Launcher::new(Box::new(motor.clone()), Box::new(switch), 40.0);

        launcher.launch().unwrap();

        let commands = motor.commands();
        let energized = commands
            .iter()
            .filter(|c| matches!(c, MotorCommand::Spin(Direction::Forward, _)))
            .count();
        let stops = commands
            .iter()
            .filter(|c| matches!(c, MotorCommand::Stop))
            .count();
        assert_eq!(energized, 4);
        assert_eq!(stops, 1);
        assert_eq!(commands.last(), Some(&MotorCommand::Stop));
    }

    #[test]
    fn test_already_pressed_skips_winding() {
        let motor = MockMotor::new();
        let switch = ScriptedSwitch::pressed_on_poll(1);
        let mut launcher = Launcher::new(Box::new(motor.clone()), Box::new(switch), 40.0);

        launcher.launch().unwrap();
        assert_eq!(motor.commands(), vec![MotorCommand::Stop]);
    }

    #[test]
    fn test_returns_to_idle() {
        let motor = MockMotor::new();
        let switch = ScriptedSwitch::pressed_on_poll(3);
        let mut launcher = Launcher::new(Box::new(motor), Box::new(switch), 40.0);

        assert_eq!(launcher.state(), LauncherState::Idle);
        launcher.launch().unwrap();
        assert_eq!(launcher.state(), LauncherState::Idle);
    }

    #[test]
    fn test_winds_at_configured_speed() {
        let motor = MockMotor::new();
        let switch = ScriptedSwitch::pressed_on_poll(2);
        let mut launcher = Launcher::new(Box::new(motor.clone()), Box::new(switch), 40.0);

        launcher.launch().unwrap();
        assert_eq!(
            motor.commands().first(),
            Some(&MotorCommand::Spin(Direction::Forward, 40.0))
        );
    }
}
