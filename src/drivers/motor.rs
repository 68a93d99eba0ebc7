//! L298N dual H-bridge driver.
//!
//! Applies a pre-computed [`MotorOutput`] to the four direction pins and
//! the two LEDC enable channels.  The driver is a dumb actuator — all
//! command-to-output policy lives in [`crate::drive`].
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO/PWM via hw_init helpers.
//! On host/test: tracks the last applied output in-memory only.

use crate::drive::MotorOutput;
use crate::drivers::hw_init;
use crate::pins;

pub struct MotorDriver {
    last: MotorOutput,
}

impl MotorDriver {
    pub fn new() -> Self {
        Self {
            last: MotorOutput::all_off(),
        }
    }

    /// Assert the output on the hardware.  Re-applying an identical output
    /// is harmless — the pin writes are level-idempotent.
    pub fn apply(&mut self, out: MotorOutput) {
        debug_assert!(out.direction_bits_valid());

        hw_init::gpio_write(pins::MOTOR_L_FWD_GPIO, out.left_forward);
        hw_init::gpio_write(pins::MOTOR_L_BWD_GPIO, out.left_backward);
        hw_init::gpio_write(pins::MOTOR_R_FWD_GPIO, out.right_forward);
        hw_init::gpio_write(pins::MOTOR_R_BWD_GPIO, out.right_backward);
        hw_init::ledc_set(hw_init::LEDC_CH_MOTOR_L, out.left_speed);
        hw_init::ledc_set(hw_init::LEDC_CH_MOTOR_R, out.right_speed);

        self.last = out;
    }

    /// De-assert everything.
    pub fn stop(&mut self) {
        self.apply(MotorOutput::all_off());
    }

    /// Last output asserted on the pins.
    pub fn last_output(&self) -> MotorOutput {
        self.last
    }

    pub fn is_moving(&self) -> bool {
        self.last.left_speed > 0 || self.last.right_speed > 0
    }
}
