//! Control loop integration tests: loops → ports → recorded calls.

use roverbot::app::events::AppEvent;
use roverbot::config::SystemConfig;
use roverbot::control::demo::DirectionDemo;
use roverbot::control::line_follower::LineFollower;
use roverbot::control::obstacle::ObstacleAvoider;
use roverbot::control::parking::ParkingAssist;
use roverbot::drive::MovementCommand;
use roverbot::sensors::ultrasonic::DistanceSample;

use crate::mock_hw::{MockDelay, MockHardware, MockSink};

// ── Obstacle avoider ──────────────────────────────────────────

#[test]
fn clear_path_cruises_forward() {
    let config = SystemConfig::default();
    let mut avoider = ObstacleAvoider::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();
    let mut delay = MockDelay::new();

    hw.queue_range_cm(80.0);
    avoider.tick(&mut hw, &mut sink, &mut delay);

    assert_eq!(
        hw.last_drive().map(|c| c.cmd),
        Some(MovementCommand::Forward)
    );
    assert_eq!(hw.last_drive().unwrap().left_speed, config.cruise_speed);
    assert!(delay.sleeps_ms.is_empty(), "no escape holds on a clear path");
}

#[test]
fn exactly_at_threshold_still_counts_as_clear() {
    // The threshold is an exclusive bound.
    let config = SystemConfig::default();
    let mut avoider = ObstacleAvoider::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();
    let mut delay = MockDelay::new();

    hw.queue_range_sample(DistanceSample {
        duration_us: 1166,
        distance_cm: config.obstacle_threshold_cm,
    });
    avoider.tick(&mut hw, &mut sink, &mut delay);

    assert_eq!(hw.drive_sequence(), vec![MovementCommand::Forward]);
    assert!(!sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::ObstacleDetected { .. })));
}

#[test]
fn blocked_path_runs_stop_reverse_turn_escape() {
    let config = SystemConfig::default();
    let mut avoider = ObstacleAvoider::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();
    let mut delay = MockDelay::new();

    hw.queue_range_cm(10.0);
    avoider.tick(&mut hw, &mut sink, &mut delay);

    assert_eq!(
        hw.drive_sequence(),
        vec![
            MovementCommand::Stop,
            MovementCommand::Backward,
            MovementCommand::Right,
        ]
    );
    assert_eq!(
        delay.sleeps_ms,
        vec![
            config.escape_stop_ms,
            config.escape_reverse_ms,
            config.escape_turn_ms,
        ]
    );
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::ObstacleDetected { .. })));
}

#[test]
fn just_inside_threshold_triggers_escape() {
    let config = SystemConfig::default();
    let mut avoider = ObstacleAvoider::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();
    let mut delay = MockDelay::new();

    hw.queue_range_cm(19.9);
    avoider.tick(&mut hw, &mut sink, &mut delay);

    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::ObstacleDetected { .. })));
    assert_eq!(hw.drive_sequence().first(), Some(&MovementCommand::Stop));
}

#[test]
fn missing_echo_keeps_cruising() {
    let config = SystemConfig::default();
    let mut avoider = ObstacleAvoider::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();
    let mut delay = MockDelay::new();

    hw.queue_no_echo();
    avoider.tick(&mut hw, &mut sink, &mut delay);

    assert!(sink.contains(&AppEvent::EchoTimeout));
    assert_eq!(hw.drive_sequence(), vec![MovementCommand::Forward]);
}

#[test]
fn cruise_event_emitted_once_until_interrupted() {
    let config = SystemConfig::default();
    let mut avoider = ObstacleAvoider::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();
    let mut delay = MockDelay::new();

    hw.queue_range_cm(80.0);
    hw.queue_range_cm(75.0);
    hw.queue_range_cm(70.0);
    for _ in 0..3 {
        avoider.tick(&mut hw, &mut sink, &mut delay);
    }

    // Motors re-commanded every tick, but only one Forward event.
    assert_eq!(hw.drive_calls.len(), 3);
    let forward_events = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::DriveCommand(MovementCommand::Forward)))
        .count();
    assert_eq!(forward_events, 1);
}

// ── Line follower ─────────────────────────────────────────────

#[test]
fn line_truth_table_drives_all_four_actions() {
    let config = SystemConfig::default();
    let mut follower = LineFollower::new(config.cruise_speed, config.turn_speed);
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    hw.queue_line(false, false);
    hw.queue_line(false, true);
    hw.queue_line(true, false);
    hw.queue_line(true, true);
    for _ in 0..4 {
        follower.tick(&mut hw, &mut sink);
    }

    assert_eq!(
        hw.drive_sequence(),
        vec![
            MovementCommand::Forward,
            MovementCommand::Right,
            MovementCommand::Left,
            MovementCommand::Stop,
        ]
    );
}

#[test]
fn turning_uses_turn_speed() {
    let mut follower = LineFollower::new(150, 120);
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    hw.queue_line(false, true);
    follower.tick(&mut hw, &mut sink);

    let call = hw.last_drive().unwrap();
    assert_eq!(call.cmd, MovementCommand::Right);
    assert_eq!(call.left_speed, 120);
    assert_eq!(call.right_speed, 120);
}

// ── Parking assist ────────────────────────────────────────────

#[test]
fn beep_half_period_tracks_raw_echo() {
    let config = SystemConfig::default();
    let mut assist = ParkingAssist::new(config.parking_settle_ms);
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();
    let mut delay = MockDelay::new();

    hw.queue_range_sample(DistanceSample {
        duration_us: 2000,
        distance_cm: 34.3,
    });
    assist.tick(&mut hw, &mut sink, &mut delay);

    assert_eq!(hw.beeps, vec![1000]);
    assert_eq!(delay.sleeps_ms, vec![config.parking_settle_ms]);
}

#[test]
fn closer_target_means_higher_pitch() {
    let config = SystemConfig::default();
    let mut assist = ParkingAssist::new(config.parking_settle_ms);
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();
    let mut delay = MockDelay::new();

    hw.queue_range_cm(100.0);
    hw.queue_range_cm(10.0);
    assist.tick(&mut hw, &mut sink, &mut delay);
    assist.tick(&mut hw, &mut sink, &mut delay);

    assert_eq!(hw.beeps.len(), 2);
    assert!(
        hw.beeps[1] < hw.beeps[0],
        "shorter echo must shorten the half-period"
    );
}

#[test]
fn no_echo_silences_instead_of_beeping() {
    let config = SystemConfig::default();
    let mut assist = ParkingAssist::new(config.parking_settle_ms);
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();
    let mut delay = MockDelay::new();

    hw.queue_no_echo();
    assist.tick(&mut hw, &mut sink, &mut delay);

    assert!(hw.beeps.is_empty());
    assert_eq!(hw.silences, 1);
    assert!(sink.contains(&AppEvent::EchoTimeout));
}

// ── Direction demo ────────────────────────────────────────────

#[test]
fn demo_cycles_every_movement_with_holds() {
    let config = SystemConfig::default();
    let mut demo = DirectionDemo::new(config.cruise_speed, config.turn_speed, config.demo_hold_ms);
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();
    let mut delay = MockDelay::new();

    demo.run_cycle(&mut hw, &mut sink, &mut delay);

    assert_eq!(
        hw.drive_sequence(),
        vec![
            MovementCommand::Forward,
            MovementCommand::Backward,
            MovementCommand::Right,
            MovementCommand::Left,
            MovementCommand::Stop,
        ]
    );
    assert_eq!(delay.sleeps_ms, vec![config.demo_hold_ms; 5]);
}
