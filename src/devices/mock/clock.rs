//! Virtual clock recording requested waits

use crate::hal::Clock;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Clock that records every wait without sleeping
///
/// Lets maneuver scripts run instantly while tests assert on the virtual
/// time that would have elapsed.
#[derive(Clone, Default)]
pub struct ManualClock {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every wait requested so far, in order
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().clone()
    }

    /// Sum of all requested waits
    pub fn total_waited(&self) -> Duration {
        self.waits.lock().iter().sum()
    }
}

impl Clock for ManualClock {
    fn wait(&mut self, duration: Duration) {
        self.waits.lock().push(duration);
    }
}
