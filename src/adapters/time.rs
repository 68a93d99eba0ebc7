//! Time adapter.
//!
//! Provides the [`DelayNs`] implementation the control loops block on,
//! plus a millisecond uptime query for button debouncing.
//!
//! - **`target_os = "espidf"`** — backed by `esp_timer_get_time()` and
//!   the calibrated ROM spin loop (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`** — backed by `std::time` for
//!   host-side testing and simulation.

use embedded_hal::delay::DelayNs;

use crate::drivers::hw_init;

/// Delay/clock source for the firmware control loops.
pub struct FirmwareDelay;

impl FirmwareDelay {
    pub fn new() -> Self {
        Self
    }

    /// Milliseconds since boot (monotonic, truncated to `u32`).
    pub fn now_ms(&self) -> u32 {
        (hw_init::now_us() / 1_000) as u32
    }
}

impl Default for FirmwareDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayNs for FirmwareDelay {
    fn delay_ns(&mut self, ns: u32) {
        // Sub-microsecond resolution is below what the spin loop offers;
        // round up so a nonzero request never becomes a zero wait.
        hw_init::delay_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        hw_init::delay_us(us);
    }
}
