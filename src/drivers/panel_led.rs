//! Red/Green indicator LED pair for the panel demo.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives two GPIO outputs via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct PanelLeds {
    red_gpio: i32,
    green_gpio: i32,
    current: (bool, bool),
}

impl PanelLeds {
    pub fn new(red_gpio: i32, green_gpio: i32) -> Self {
        Self {
            red_gpio,
            green_gpio,
            current: (false, false),
        }
    }

    pub fn set(&mut self, red: bool, green: bool) {
        hw_init::gpio_write(self.red_gpio, red);
        hw_init::gpio_write(self.green_gpio, green);
        self.current = (red, green);
    }

    pub fn off(&mut self) {
        self.set(false, false);
    }

    /// `(red, green)` as last asserted.
    pub fn current(&self) -> (bool, bool) {
        self.current
    }
}
