//! Parking assist loop.
//!
//! The rear sensor pings continuously and the buzzer pitch tracks the
//! echo: the beep half-period is half the raw round-trip time, so the
//! tone rises as the bumper closes in.  A short settle delay between
//! the ping and the beep keeps the buzzer edge out of the echo window.

use embedded_hal::delay::DelayNs;

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, RangePort, SignalPort};

pub struct ParkingAssist {
    settle_ms: u32,
}

impl ParkingAssist {
    pub fn new(settle_ms: u32) -> Self {
        Self { settle_ms }
    }

    /// One ping-and-beep cycle.
    pub fn tick(
        &mut self,
        hw: &mut (impl RangePort + SignalPort),
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) {
        match hw.measure() {
            Some(sample) => {
                sink.emit(&AppEvent::Range(sample));
                delay.delay_ms(self.settle_ms);
                hw.beep_cycle(sample.duration_us / 2);
            }
            None => {
                sink.emit(&AppEvent::EchoTimeout);
                hw.silence();
            }
        }
    }
}
