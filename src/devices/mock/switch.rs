//! Scripted limit switch

use crate::error::Result;
use crate::hal::LimitSwitch;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug)]
struct SwitchState {
    pressed_on: usize,
    polls: usize,
}

/// Limit switch that becomes pressed on a configured poll
#[derive(Clone)]
pub struct ScriptedSwitch {
    state: Arc<Mutex<SwitchState>>,
}

impl ScriptedSwitch {
    /// Reports unpressed until poll number `poll` (1-based), pressed from
    /// then on
    pub fn pressed_on_poll(poll: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(SwitchState {
                pressed_on: poll,
                polls: 0,
            })),
        }
    }

    /// Pressed from the very first poll
    pub fn always_pressed() -> Self {
        Self::pressed_on_poll(1)
    }

    /// Number of polls so far
    pub fn poll_count(&self) -> usize {
        self.state.lock().polls
    }
}

impl LimitSwitch for ScriptedSwitch {
    fn is_pressed(&mut self) -> Result<bool> {
        let mut state = self.state.lock();
        state.polls += 1;
        Ok(state.polls >= state.pressed_on)
    }
}
