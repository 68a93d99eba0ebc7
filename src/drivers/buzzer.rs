//! Piezo buzzer driver.
//!
//! The parking loop keys the buzzer with a square half-period: pin high
//! for `half_period_us`, then low for the same.  Shorter periods read as
//! faster ticking.

use crate::drivers::hw_init;

pub struct Buzzer {
    gpio: i32,
    ticks: u64,
}

impl Buzzer {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, ticks: 0 }
    }

    /// Emit one on/off cycle with the given half-period.  Blocks for the
    /// full cycle — parking assist has nothing else to do meanwhile.
    pub fn tick(&mut self, half_period_us: u32) {
        hw_init::gpio_write(self.gpio, true);
        hw_init::delay_us(half_period_us);
        hw_init::gpio_write(self.gpio, false);
        hw_init::delay_us(half_period_us);
        self.ticks += 1;
    }

    /// Force the pin low.
    pub fn silence(&mut self) {
        hw_init::gpio_write(self.gpio, false);
    }

    /// Cycles emitted since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
