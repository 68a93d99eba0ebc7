//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod button;
pub mod buzzer;
pub mod hw_init;
pub mod lcd;
pub mod motor;
pub mod panel_led;
