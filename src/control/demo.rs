//! Direction demo loop.
//!
//! Bench-test mode: step through every movement with a fixed hold
//! between steps, then repeat.  Useful for verifying motor wiring
//! before the car goes on the floor.

use embedded_hal::delay::DelayNs;

use crate::app::events::AppEvent;
use crate::app::ports::{DrivePort, EventSink};
use crate::drive::MovementCommand;

const SEQUENCE: [MovementCommand; 5] = [
    MovementCommand::Forward,
    MovementCommand::Backward,
    MovementCommand::Right,
    MovementCommand::Left,
    MovementCommand::Stop,
];

pub struct DirectionDemo {
    cruise_speed: u8,
    turn_speed: u8,
    hold_ms: u32,
}

impl DirectionDemo {
    pub fn new(cruise_speed: u8, turn_speed: u8, hold_ms: u32) -> Self {
        Self {
            cruise_speed,
            turn_speed,
            hold_ms,
        }
    }

    /// Run one full pass over the sequence.
    pub fn run_cycle(
        &mut self,
        drive: &mut impl DrivePort,
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) {
        for cmd in SEQUENCE {
            let speed = match cmd {
                MovementCommand::Left | MovementCommand::Right => self.turn_speed,
                _ => self.cruise_speed,
            };
            drive.drive(cmd, speed, speed);
            sink.emit(&AppEvent::DriveCommand(cmd));
            delay.delay_ms(self.hold_ms);
        }
    }
}
