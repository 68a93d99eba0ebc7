//! Remote drive loop tests: serial bytes → drive commands.

use roverbot::app::events::AppEvent;
use roverbot::config::SystemConfig;
use roverbot::control::remote::RemoteLoop;
use roverbot::drive::MovementCommand;

use crate::mock_hw::{MockCommandPort, MockHardware, MockSink};

fn remote() -> RemoteLoop {
    let config = SystemConfig::default();
    RemoteLoop::new(config.cruise_speed, config.turn_speed)
}

#[test]
fn recognised_bytes_drive_in_arrival_order() {
    let mut remote = remote();
    let mut link = MockCommandPort::new();
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    link.feed(b"FBS");
    remote.tick(&mut link, &mut hw, &mut sink);

    assert_eq!(
        hw.drive_sequence(),
        vec![
            MovementCommand::Forward,
            MovementCommand::Backward,
            MovementCommand::Stop,
        ]
    );
}

#[test]
fn unknown_bytes_are_ignored_and_reported() {
    let mut remote = remote();
    let mut link = MockCommandPort::new();
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    link.feed(b"FZS");
    remote.tick(&mut link, &mut hw, &mut sink);

    assert_eq!(
        hw.drive_sequence(),
        vec![MovementCommand::Forward, MovementCommand::Stop]
    );
    assert!(sink.contains(&AppEvent::RemoteIgnored(b'Z')));
}

#[test]
fn empty_buffer_leaves_last_command_in_force() {
    let mut remote = remote();
    let mut link = MockCommandPort::new();
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    link.feed(b"F");
    remote.tick(&mut link, &mut hw, &mut sink);
    remote.tick(&mut link, &mut hw, &mut sink); // nothing pending

    // No new drive call: the motors keep the last applied output.
    assert_eq!(hw.drive_calls.len(), 1);
}

#[test]
fn turns_use_turn_speed_and_straights_cruise_speed() {
    let config = SystemConfig::default();
    let mut remote = RemoteLoop::new(config.cruise_speed, 120);
    let mut link = MockCommandPort::new();
    let mut hw = MockHardware::new();
    let mut sink = MockSink::new();

    link.feed(b"FL");
    remote.tick(&mut link, &mut hw, &mut sink);

    assert_eq!(hw.drive_calls[0].left_speed, config.cruise_speed);
    assert_eq!(hw.drive_calls[1].left_speed, 120);
}
