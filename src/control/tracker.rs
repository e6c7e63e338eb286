//! Closed-loop visual target tracking

use crate::config::VisionConfig;
use crate::error::Result;
use crate::hal::{Signature, VisionSensor};

/// Queries the vision sensor for a target signature and reports the signed
/// horizontal offset of the largest qualifying object from the image center.
///
/// The camera may be mounted reversed relative to the driver perspective;
/// the `reversed` flag flips the offset sign in one place.
pub struct VisionTracker {
    sensor: Box<dyn VisionSensor>,
    center_x: f64,
    reversed: bool,
}

impl VisionTracker {
    pub fn new(sensor: Box<dyn VisionSensor>, config: &VisionConfig) -> Self {
        Self {
            sensor,
            center_x: config.center_x,
            reversed: config.reversed,
        }
    }

    /// Locate the target, returning its horizontal pixel offset
    ///
    /// Issues exactly one snapshot. Returns 0.0 when no object matches the
    /// signature or when the largest match's bounding-box area is not
    /// strictly greater than `min_area`. With the camera in its normal
    /// orientation a positive value means the object is right of center.
    pub fn locate(&mut self, signature: &Signature, min_area: f64) -> Result<f64> {
        let snapshot = self.sensor.snapshot(signature)?;

        let mut offset = 0.0;
        if snapshot.count > 0
            && let Some(largest) = snapshot.largest
            && largest.area() > min_area
        {
            offset = if self.reversed {
                self.center_x - largest.center_x
            } else {
                largest.center_x - self.center_x
            };
            log::debug!(
                "VisionTracker: sig {} at x={:.1}, area={:.0}, offset={:.1}",
                signature.id,
                largest.center_x,
                largest.area(),
                offset
            );
        }
        Ok(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::mock::ScriptedVision;
    use crate::hal::{DetectedObject, Snapshot};

    fn config(reversed: bool) -> VisionConfig {
        VisionConfig {
            center_x: 158.0,
            reversed,
            min_area: 2500.0,
            gain: 0.3,
        }
    }

    fn snapshot_with(width: f64, height: f64, center_x: f64) -> Snapshot {
        Snapshot {
            count: 1,
            largest: Some(DetectedObject {
                width,
                height,
                center_x,
            }),
        }
    }

    #[test]
    fn test_no_object_returns_zero() {
        let vision = ScriptedVision::new();
        let mut tracker = VisionTracker::new(Box::new(vision.clone()), &config(false));
        let offset = tracker
            .locate(&Signature::blue_triball(), 2500.0)
            .unwrap();
        assert_eq!(offset, 0.0);
        assert_eq!(vision.snapshot_count(), 1);
    }

    #[test]
    fn test_area_gate_is_strict() {
        let vision = ScriptedVision::new();
        // 50 x 50 = exactly the minimum: excluded
        vision.push_snapshot(snapshot_with(50.0, 50.0, 200.0));
        // one unit above: included
        vision.push_snapshot(snapshot_with(50.0, 50.02, 200.0));

        let mut tracker = VisionTracker::new(Box::new(vision), &config(false));
        let sig = Signature::blue_triball();
        assert_eq!(tracker.locate(&sig, 2500.0).unwrap(), 0.0);
        assert_eq!(tracker.locate(&sig, 2500.0).unwrap(), 42.0);
    }

    #[test]
    fn test_orientation_flip() {
        let sig = Signature::red_ball();

        let vision = ScriptedVision::new();
        vision.push_snapshot(snapshot_with(60.0, 60.0, 100.0));
        let mut normal = VisionTracker::new(Box::new(vision), &config(false));
        assert_eq!(normal.locate(&sig, 2500.0).unwrap(), -58.0);

        let vision = ScriptedVision::new();
        vision.push_snapshot(snapshot_with(60.0, 60.0, 100.0));
        let mut flipped = VisionTracker::new(Box::new(vision), &config(true));
        assert_eq!(flipped.locate(&sig, 2500.0).unwrap(), 58.0);
    }

    #[test]
    fn test_one_snapshot_per_call() {
        let vision = ScriptedVision::new();
        let mut tracker = VisionTracker::new(Box::new(vision.clone()), &config(true));
        let sig = Signature::blue_triball();
        for _ in 0..4 {
            tracker.locate(&sig, 2500.0).unwrap();
        }
        assert_eq!(vision.snapshot_count(), 4);
    }
}
