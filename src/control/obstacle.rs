//! Obstacle avoidance loop.
//!
//! Cruise forward while the path is clear.  When the range finder
//! reports something closer than the threshold, run a fixed escape
//! manoeuvre: stop, reverse, then turn right, with timed holds between
//! the phases.  A missing echo means nothing reflected within range and
//! cruising continues.

use embedded_hal::delay::DelayNs;

use crate::app::events::AppEvent;
use crate::app::ports::{DrivePort, EventSink, RangePort};
use crate::config::SystemConfig;
use crate::drive::MovementCommand;

pub struct ObstacleAvoider {
    cruise_speed: u8,
    turn_speed: u8,
    threshold_cm: f32,
    stop_ms: u32,
    reverse_ms: u32,
    turn_ms: u32,
    cruising: bool,
}

impl ObstacleAvoider {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            cruise_speed: config.cruise_speed,
            turn_speed: config.turn_speed,
            threshold_cm: config.obstacle_threshold_cm,
            stop_ms: config.escape_stop_ms,
            reverse_ms: config.escape_reverse_ms,
            turn_ms: config.escape_turn_ms,
            cruising: false,
        }
    }

    /// One measure-and-react cycle.  Blocks for the escape holds when an
    /// obstacle is found.
    pub fn tick(
        &mut self,
        hw: &mut (impl RangePort + DrivePort),
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) {
        match hw.measure() {
            Some(sample) => {
                sink.emit(&AppEvent::Range(sample));
                if sample.distance_cm < self.threshold_cm {
                    sink.emit(&AppEvent::ObstacleDetected {
                        distance_cm: sample.distance_cm,
                    });
                    self.escape(hw, sink, delay);
                } else {
                    self.cruise(hw, sink);
                }
            }
            None => {
                // Nothing reflected within the timeout budget: open road.
                sink.emit(&AppEvent::EchoTimeout);
                self.cruise(hw, sink);
            }
        }
    }

    fn cruise(&mut self, drive: &mut impl DrivePort, sink: &mut impl EventSink) {
        drive.drive(
            MovementCommand::Forward,
            self.cruise_speed,
            self.cruise_speed,
        );
        if !self.cruising {
            self.cruising = true;
            sink.emit(&AppEvent::DriveCommand(MovementCommand::Forward));
        }
    }

    fn escape(
        &mut self,
        drive: &mut impl DrivePort,
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) {
        self.cruising = false;

        drive.drive(MovementCommand::Stop, 0, 0);
        sink.emit(&AppEvent::DriveCommand(MovementCommand::Stop));
        delay.delay_ms(self.stop_ms);

        drive.drive(
            MovementCommand::Backward,
            self.cruise_speed,
            self.cruise_speed,
        );
        sink.emit(&AppEvent::DriveCommand(MovementCommand::Backward));
        delay.delay_ms(self.reverse_ms);

        drive.drive(MovementCommand::Right, self.turn_speed, self.turn_speed);
        sink.emit(&AppEvent::DriveCommand(MovementCommand::Right));
        delay.delay_ms(self.turn_ms);
    }
}
