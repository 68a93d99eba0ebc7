//! Two-channel reflective line sensor pair.
//!
//! Each TCRT5000 board outputs a digital bit: LOW over the dark line,
//! HIGH over the bright floor.  The pair is re-sampled every control
//! tick; no history is kept.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads real GPIO levels via hw_init.
//! On host/test: reads simulation atomics.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
static SIM_LEFT: AtomicBool = AtomicBool::new(false);
#[cfg(not(target_os = "espidf"))]
static SIM_RIGHT: AtomicBool = AtomicBool::new(false);

/// Inject a synthetic sensor pair for host tests.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_pair(left: bool, right: bool) {
    SIM_LEFT.store(left, Ordering::Relaxed);
    SIM_RIGHT.store(right, Ordering::Relaxed);
}

/// One sample of both sensor bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineReading {
    pub left: bool,
    pub right: bool,
}

pub struct LineSensorPair {
    left_gpio: i32,
    right_gpio: i32,
}

impl LineSensorPair {
    pub fn new(left_gpio: i32, right_gpio: i32) -> Self {
        Self {
            left_gpio,
            right_gpio,
        }
    }

    pub fn read(&mut self) -> LineReading {
        LineReading {
            left: self.read_left(),
            right: self.read_right(),
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_left(&self) -> bool {
        hw_init::gpio_read(self.left_gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_left(&self) -> bool {
        let _ = self.left_gpio;
        SIM_LEFT.load(Ordering::Relaxed)
    }

    #[cfg(target_os = "espidf")]
    fn read_right(&self) -> bool {
        hw_init::gpio_read(self.right_gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_right(&self) -> bool {
        let _ = self.right_gpio;
        SIM_RIGHT.load(Ordering::Relaxed)
    }
}
