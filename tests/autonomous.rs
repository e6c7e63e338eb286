//! Autonomous Routine Tests
//!
//! Runs the scripted preload routine and the vision-guided approach against
//! mock devices with a virtual clock, asserting on the exact command
//! sequences and the virtual time each script consumes.

use std::time::Duration;
use yantra_core::AppConfig;
use yantra_core::auton::Autonomous;
use yantra_core::control::VisionTracker;
use yantra_core::devices::mock::{ManualClock, MockMotor, MotorCommand, ScriptedVision};
use yantra_core::drivetrain::Drivetrain;
use yantra_core::hal::{DetectedObject, Direction, Signature, Snapshot};
use yantra_core::intake::Intake;

struct Rig {
    auton: Autonomous,
    vision: ScriptedVision,
    clock: ManualClock,
    front_left: MockMotor,
    rear_right: MockMotor,
    intake_motor: MockMotor,
}

fn rig() -> Rig {
    let config = AppConfig::competition_defaults();
    let vision = ScriptedVision::new();
    let clock = ManualClock::new();
    let front_left = MockMotor::new();
    let rear_right = MockMotor::new();
    let intake_motor = MockMotor::new();

    let drivetrain = Drivetrain::new(
        Box::new(front_left.clone()),
        Box::new(MockMotor::new()),
        Box::new(MockMotor::new()),
        Box::new(rear_right.clone()),
    );
    let auton = Autonomous::new(
        drivetrain,
        Intake::new(Box::new(intake_motor.clone())),
        VisionTracker::new(Box::new(vision.clone()), &config.vision),
        Box::new(clock.clone()),
        config,
    );

    Rig {
        auton,
        vision,
        clock,
        front_left,
        rear_right,
        intake_motor,
    }
}

fn object_at(center_x: f64) -> Snapshot {
    Snapshot {
        count: 1,
        largest: Some(DetectedObject {
            width: 60.0,
            height: 60.0,
            center_x,
        }),
    }
}

#[test]
fn test_preload_sequence_without_vision() {
    let mut rig = rig();
    rig.auton
        .preload_straight(&Signature::blue_triball(), false)
        .unwrap();

    // Front-left wheel: drive toward the line, 90-degree turn, creep to
    // the goal; every maneuver ends in a stop
    let trim = 1.05;
    let turn_speed = (36.5 / 90.0) * 90.0 / 1.0;
    assert_eq!(
        rig.front_left.commands(),
        vec![
            MotorCommand::Spin(Direction::Forward, 50.0 * trim),
            MotorCommand::Stop,
            MotorCommand::Spin(Direction::Forward, turn_speed),
            MotorCommand::Stop,
            MotorCommand::Spin(Direction::Forward, 5.0 * trim),
            MotorCommand::Stop,
        ]
    );

    // Preload ejected for two seconds
    assert_eq!(
        rig.intake_motor.commands(),
        vec![
            MotorCommand::Spin(Direction::Forward, 40.0),
            MotorCommand::Stop,
        ]
    );

    // 3s + 0.5s + 1s + 0.5s + 1s + 0.5s + 2s of virtual time
    assert_eq!(rig.clock.total_waited(), Duration::from_millis(8500));

    // Vision untouched on this branch
    assert_eq!(rig.vision.snapshot_count(), 0);
}

#[test]
fn test_preload_with_vision_chains_into_approach() {
    let mut rig = rig();
    // Target dead ahead from the start of the approach
    rig.vision.set_fallback(object_at(158.0));

    rig.auton.run(&Signature::blue_triball()).unwrap();

    // Scoring leg 8.5s, then back off 1s, pause, 160-degree swing 2s,
    // pause, approach leg 1s, intake drive 2s
    assert_eq!(rig.clock.total_waited(), Duration::from_millis(15500));

    // The final approach pulls the intake inward
    assert_eq!(
        rig.intake_motor.commands().last(),
        Some(&MotorCommand::Stop)
    );
    assert!(
        rig.intake_motor
            .commands()
            .contains(&MotorCommand::Spin(Direction::Reverse, 40.0))
    );
}

#[test]
fn test_go_to_ball_turns_until_aimed() {
    let mut rig = rig();
    // Object far left of center (reversed camera: offset 158 - 58 = +100),
    // then centered
    rig.vision.push_snapshot(object_at(58.0));
    rig.vision.push_snapshot(object_at(158.0));

    rig.auton.go_to_ball(&Signature::blue_triball()).unwrap();

    // First pass: proportional turn at 100 * 0.3 = 30 percent on all wheels
    // Second pass: aimed, drive onto the ball and stop
    assert_eq!(
        rig.front_left.commands(),
        vec![
            MotorCommand::Spin(Direction::Forward, 30.0),
            MotorCommand::Spin(Direction::Forward, 40.0),
            MotorCommand::Stop,
        ]
    );
    assert_eq!(
        rig.rear_right.commands(),
        vec![
            MotorCommand::Spin(Direction::Forward, 30.0),
            MotorCommand::Spin(Direction::Reverse, 40.0),
            MotorCommand::Stop,
        ]
    );
    assert_eq!(rig.clock.total_waited(), Duration::from_secs(2));
}

#[test]
fn test_go_to_ball_repolls_every_iteration() {
    let mut rig = rig();
    rig.vision.push_snapshot(object_at(58.0));
    rig.vision.push_snapshot(object_at(100.0));
    rig.vision.push_snapshot(object_at(158.0));

    rig.auton.go_to_ball(&Signature::blue_triball()).unwrap();

    assert_eq!(rig.vision.snapshot_count(), 3);
}

#[test]
fn test_go_to_ball_with_lost_target_drives_on() {
    let mut rig = rig();
    // No object in sight reads as zero offset: treated as aimed, never as
    // an error
    rig.auton.go_to_ball(&Signature::blue_triball()).unwrap();

    assert_eq!(
        rig.front_left.commands(),
        vec![
            MotorCommand::Spin(Direction::Forward, 40.0),
            MotorCommand::Stop,
        ]
    );
    assert_eq!(rig.intake_motor.stop_count(), 1);
}
