//! Proportional turn controller
//!
//! Converts a tracking offset into an in-place rotation. Under this mixing
//! convention, spinning all four wheels forward at the same signed speed
//! rotates the robot without translating it.

use crate::drivetrain::Drivetrain;
use crate::error::Result;
use crate::hal::Direction;

/// Minimum-effort threshold in raw offset units; scaled by the gain so the
/// robot does not jitter near zero error
const MIN_EFFORT: f64 = 20.0;

/// Proportional turn-to-target controller
#[derive(Debug, Clone)]
pub struct TurnController {
    gain: f64,
}

impl TurnController {
    pub fn new(gain: f64) -> Self {
        Self { gain }
    }

    /// Issue a rotation command proportional to the offset
    ///
    /// `signal = offset * gain`; when `|signal|` exceeds the scaled
    /// minimum-effort deadband all four wheels spin forward at `signal`
    /// percent (positive turns right), otherwise the drivetrain is stopped.
    /// The boundary itself stops.
    pub fn command(&self, drivetrain: &mut Drivetrain, offset: f64) -> Result<()> {
        let signal = offset * self.gain;
        if signal.abs() > MIN_EFFORT * self.gain {
            log::debug!("TurnController: offset={:.1}, signal={:.1}%", offset, signal);
            drivetrain.spin_all(Direction::Forward, signal)
        } else {
            drivetrain.stop_all()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::mock::{MockMotor, MotorCommand};

    fn mock_drivetrain() -> (Drivetrain, [MockMotor; 4]) {
        let motors = [
            MockMotor::new(),
            MockMotor::new(),
            MockMotor::new(),
            MockMotor::new(),
        ];
        let drivetrain = Drivetrain::new(
            Box::new(motors[0].clone()),
            Box::new(motors[1].clone()),
            Box::new(motors[2].clone()),
            Box::new(motors[3].clone()),
        );
        (drivetrain, motors)
    }

    #[test]
    fn test_drives_all_four_above_deadband() {
        let (mut drivetrain, motors) = mock_drivetrain();
        let turn = TurnController::new(0.3);

        // offset 100 -> signal 30, well above 20 * 0.3
        turn.command(&mut drivetrain, 100.0).unwrap();
        for motor in &motors {
            assert_eq!(
                motor.commands().last(),
                Some(&MotorCommand::Spin(Direction::Forward, 30.0))
            );
        }
    }

    #[test]
    fn test_negative_offset_spins_reverse_signal() {
        let (mut drivetrain, motors) = mock_drivetrain();
        let turn = TurnController::new(0.3);

        turn.command(&mut drivetrain, -100.0).unwrap();
        for motor in &motors {
            assert_eq!(
                motor.commands().last(),
                Some(&MotorCommand::Spin(Direction::Forward, -30.0))
            );
        }
    }

    #[test]
    fn test_boundary_stops() {
        let (mut drivetrain, motors) = mock_drivetrain();
        let turn = TurnController::new(0.3);

        // |offset * gain| == 20 * gain exactly: the driving branch is
        // exclusive of the boundary
        turn.command(&mut drivetrain, 20.0).unwrap();
        for motor in &motors {
            assert_eq!(motor.commands().last(), Some(&MotorCommand::Stop));
        }

        // one tick above the boundary drives
        let (mut drivetrain, motors) = mock_drivetrain();
        turn.command(&mut drivetrain, 20.1).unwrap();
        for motor in &motors {
            assert!(matches!(
                motor.commands().last(),
                Some(&MotorCommand::Spin(Direction::Forward, _))
            ));
        }
    }
}
