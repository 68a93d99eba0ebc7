//! Remote drive loop.
//!
//! The operator sends single-byte commands over the serial bridge:
//! `F` forward, `B` backward, `L` left, `R` right, `S` stop.  Anything
//! else is dropped.  The last applied command stays in force until the
//! next recognised byte arrives.

use crate::app::events::AppEvent;
use crate::app::ports::{CommandPort, DrivePort, EventSink};
use crate::drive::MovementCommand;

/// Map one command byte to a movement, `None` for unrecognised bytes.
pub fn decode(byte: u8) -> Option<MovementCommand> {
    match byte {
        b'F' => Some(MovementCommand::Forward),
        b'B' => Some(MovementCommand::Backward),
        b'L' => Some(MovementCommand::Left),
        b'R' => Some(MovementCommand::Right),
        b'S' => Some(MovementCommand::Stop),
        _ => None,
    }
}

pub struct RemoteLoop {
    cruise_speed: u8,
    turn_speed: u8,
}

impl RemoteLoop {
    pub fn new(cruise_speed: u8, turn_speed: u8) -> Self {
        Self {
            cruise_speed,
            turn_speed,
        }
    }

    /// Drain every pending byte and apply the commands in arrival order.
    pub fn tick(
        &mut self,
        link: &mut impl CommandPort,
        drive: &mut impl DrivePort,
        sink: &mut impl EventSink,
    ) {
        while let Some(byte) = link.poll_byte() {
            match decode(byte) {
                Some(cmd) => {
                    let speed = match cmd {
                        MovementCommand::Left | MovementCommand::Right => self.turn_speed,
                        _ => self.cruise_speed,
                    };
                    drive.drive(cmd, speed, speed);
                    sink.emit(&AppEvent::DriveCommand(cmd));
                }
                None => sink.emit(&AppEvent::RemoteIgnored(byte)),
            }
        }
    }
}
