//! Scripted operator input

use crate::error::Result;
use crate::hal::{Axis, Button, InputSource};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// One cycle's worth of operator input
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub longitudinal: i32,
    pub lateral: i32,
    pub angular: i32,
    pub slow_mode: bool,
    pub vision_assist: bool,
    pub intake_in: bool,
    pub intake_out: bool,
    pub launch: bool,
}

#[derive(Debug, Default)]
struct InputState {
    queue: VecDeque<InputFrame>,
    current: InputFrame,
}

/// Scripted input source
///
/// Queued frames advance one per control cycle: the loop samples the
/// longitudinal axis first (the iteration ordering guarantee), so a pending
/// frame is dequeued on that read. Once the queue drains, the last frame
/// holds. `set_frame` replaces the held frame directly for tests that step
/// the loop by hand.
#[derive(Clone, Default)]
pub struct ScriptedInput {
    state: Arc<Mutex<InputState>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a frame for a future cycle
    pub fn push_frame(&self, frame: InputFrame) {
        self.state.lock().queue.push_back(frame);
    }

    /// Replace the currently held frame
    pub fn set_frame(&self, frame: InputFrame) {
        self.state.lock().current = frame;
    }
}

impl InputSource for ScriptedInput {
    fn axis(&mut self, axis: Axis) -> Result<i32> {
        let mut state = self.state.lock();
        if axis == Axis::Longitudinal
            && let Some(next) = state.queue.pop_front()
        {
            state.current = next;
        }
        let frame = state.current;
        Ok(match axis {
            Axis::Longitudinal => frame.longitudinal,
            Axis::Lateral => frame.lateral,
            Axis::Angular => frame.angular,
        })
    }

    fn button(&mut self, button: Button) -> Result<bool> {
        let frame = self.state.lock().current;
        Ok(match button {
            Button::SlowMode => frame.slow_mode,
            Button::VisionAssist => frame.vision_assist,
            Button::IntakeIn => frame.intake_in,
            Button::IntakeOut => frame.intake_out,
            Button::Launch => frame.launch,
        })
    }
}
