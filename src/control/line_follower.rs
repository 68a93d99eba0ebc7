//! Line follower loop.
//!
//! Two reflective sensors straddle a dark line on a bright floor.  A
//! sensor reads `true` when it has drifted off the line onto the bright
//! surface, so steering pulls the car back toward whichever side still
//! sees dark:
//!
//! | left | right | action   |
//! |------|-------|----------|
//! | dark | dark  | forward  |
//! | dark | lit   | right    |
//! | lit  | dark  | left     |
//! | lit  | lit   | stop     |

use crate::app::events::AppEvent;
use crate::app::ports::{DrivePort, EventSink, LineSensorPort};
use crate::drive::MovementCommand;
use crate::sensors::line::LineReading;

/// Pure steering decision for one sensor sample.
pub fn steer(reading: LineReading) -> MovementCommand {
    match (reading.left, reading.right) {
        (false, false) => MovementCommand::Forward,
        (false, true) => MovementCommand::Right,
        (true, false) => MovementCommand::Left,
        (true, true) => MovementCommand::Stop,
    }
}

pub struct LineFollower {
    cruise_speed: u8,
    turn_speed: u8,
    last: Option<MovementCommand>,
}

impl LineFollower {
    pub fn new(cruise_speed: u8, turn_speed: u8) -> Self {
        Self {
            cruise_speed,
            turn_speed,
            last: None,
        }
    }

    /// Sample the pair and re-drive.  Events are emitted only when the
    /// steering decision changes, the motors are commanded every tick.
    pub fn tick(
        &mut self,
        hw: &mut (impl LineSensorPort + DrivePort),
        sink: &mut impl EventSink,
    ) {
        let reading = hw.read_pair();
        let cmd = steer(reading);

        let speed = match cmd {
            MovementCommand::Left | MovementCommand::Right => self.turn_speed,
            _ => self.cruise_speed,
        };
        hw.drive(cmd, speed, speed);

        if self.last != Some(cmd) {
            self.last = Some(cmd);
            sink.emit(&AppEvent::Line(reading));
            sink.emit(&AppEvent::DriveCommand(cmd));
        }
    }
}
