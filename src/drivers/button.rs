//! Debounced push-button driver.
//!
//! Active-low momentary switch with a pull-up.  The control loop polls
//! `poll()` every tick; a press event fires once when the level has been
//! stably down for the debounce window, and not again until release.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real GPIO level via hw_init.
//! On host/test: reads a simulation atomic.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

const DEBOUNCE_MS: u32 = 50;

#[cfg(not(target_os = "espidf"))]
static SIM_PRESSED: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_pressed(pressed: bool) {
    SIM_PRESSED.store(pressed, Ordering::Relaxed);
}

pub struct ButtonDriver {
    gpio: i32,
    /// Last raw level sampled (true = pressed).
    last_raw: bool,
    /// When the raw level last changed.
    raw_since_ms: u32,
    /// Debounced level.
    stable: bool,
}

impl ButtonDriver {
    pub fn new(gpio: i32) -> Self {
        Self {
            gpio,
            last_raw: false,
            raw_since_ms: 0,
            stable: false,
        }
    }

    /// Call once per control tick.  Returns `true` exactly once per
    /// debounced press.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        let raw = self.read_pressed();

        if raw != self.last_raw {
            self.last_raw = raw;
            self.raw_since_ms = now_ms;
        }

        if raw != self.stable && now_ms.wrapping_sub(self.raw_since_ms) >= DEBOUNCE_MS {
            self.stable = raw;
            return raw;
        }

        false
    }

    /// Debounced pressed state.
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    #[cfg(target_os = "espidf")]
    fn read_pressed(&self) -> bool {
        // Active-low: pressed pulls the pin to ground.
        !hw_init::gpio_read(self.gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_pressed(&self) -> bool {
        let _ = self.gpio;
        SIM_PRESSED.load(Ordering::Relaxed)
    }
}
