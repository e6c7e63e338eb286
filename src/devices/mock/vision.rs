//! Scripted vision sensor

use crate::error::Result;
use crate::hal::{Signature, Snapshot, VisionSensor};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Default)]
struct VisionState {
    queue: VecDeque<Snapshot>,
    fallback: Snapshot,
    snapshots_taken: usize,
}

/// Scripted vision sensor
///
/// Returns queued snapshots in order; once the queue drains, every call
/// returns the fallback (empty by default).
#[derive(Clone, Default)]
pub struct ScriptedVision {
    state: Arc<Mutex<VisionState>>,
}

impl ScriptedVision {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a snapshot for a future call
    pub fn push_snapshot(&self, snapshot: Snapshot) {
        self.state.lock().queue.push_back(snapshot);
    }

    /// Set the snapshot returned after the queue drains
    pub fn set_fallback(&self, snapshot: Snapshot) {
        self.state.lock().fallback = snapshot;
    }

    /// Total snapshots taken so far
    pub fn snapshot_count(&self) -> usize {
        self.state.lock().snapshots_taken
    }
}

impl VisionSensor for ScriptedVision {
    fn snapshot(&mut self, _signature: &Signature) -> Result<Snapshot> {
        let mut state = self.state.lock();
        state.snapshots_taken += 1;
        Ok(state
            .queue
            .pop_front()
            .unwrap_or_else(|| state.fallback.clone()))
    }
}
