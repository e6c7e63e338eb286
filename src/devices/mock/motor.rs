//! Mock motor recording every command

use crate::error::Result;
use crate::hal::{Direction, Motor};
use parking_lot::Mutex;
use std::sync::Arc;

/// One recorded actuator command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotorCommand {
    SetVelocity(f64),
    Spin(Direction, f64),
    SpinForward,
    Stop,
}

#[derive(Debug)]
struct MotorState {
    velocity: f64,
    direction: Direction,
    running: bool,
    log: Vec<MotorCommand>,
}

/// Mock motor driver
#[derive(Clone)]
pub struct MockMotor {
    state: Arc<Mutex<MotorState>>,
}

impl MockMotor {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MotorState {
                velocity: 0.0,
                direction: Direction::Forward,
                running: false,
                log: Vec::new(),
            })),
        }
    }

    /// Last commanded velocity in percent
    pub fn last_velocity(&self) -> f64 {
        self.state.lock().velocity
    }

    /// Last commanded direction
    pub fn direction(&self) -> Direction {
        self.state.lock().direction
    }

    /// Whether the motor is currently energized
    pub fn is_running(&self) -> bool {
        self.state.lock().running
    }

    /// Effective signed velocity: direction sign times commanded velocity,
    /// zero when stopped
    pub fn signed_velocity(&self) -> f64 {
        let state = self.state.lock();
        if state.running {
            state.direction.sign() * state.velocity
        } else {
            0.0
        }
    }

    /// Every command received so far, in order
    pub fn commands(&self) -> Vec<MotorCommand> {
        self.state.lock().log.clone()
    }

    /// Number of stop commands received
    pub fn stop_count(&self) -> usize {
        self.state
            .lock()
            .log
            .iter()
            .filter(|c| matches!(c, MotorCommand::Stop))
            .count()
    }

    /// Forget the command log (state is kept)
    pub fn clear_log(&self) {
        self.state.lock().log.clear();
    }
}

impl Default for MockMotor {
    fn default() -> Self {
        Self::new()
    }
}

impl Motor for MockMotor {
    fn spin(&mut self, direction: Direction, speed_pct: f64) -> Result<()> {
        let mut state = self.state.lock();
        state.direction = direction;
        state.velocity = speed_pct;
        state.running = true;
        state.log.push(MotorCommand::Spin(direction, speed_pct));
        Ok(())
    }

    fn set_velocity(&mut self, speed_pct: f64) -> Result<()> {
        let mut state = self.state.lock();
        state.velocity = speed_pct;
        state.log.push(MotorCommand::SetVelocity(speed_pct));
        Ok(())
    }

    fn spin_forward(&mut self) -> Result<()> {
        let mut state = self.state.lock();
        state.direction = Direction::Forward;
        state.running = true;
        state.log.push(MotorCommand::SpinForward);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        let mut state = self.state.lock();
        state.running = false;
        state.log.push(MotorCommand::Stop);
        Ok(())
    }
}
