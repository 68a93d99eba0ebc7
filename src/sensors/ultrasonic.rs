//! HC-SR04 ultrasonic range finder.
//!
//! Trigger protocol: hold the trigger low for 2 µs, high for 10 µs, then
//! low; the sensor answers with an echo pulse whose width is the round-trip
//! time of flight.  `distance = (duration / 2) * 0.0343` cm.
//!
//! Both echo edge waits are bounded by `timeout_us`.  The classic
//! `pulseIn`-style wait has no bound and hangs forever on a missing or
//! disconnected sensor; here a missed edge yields `None` instead.
//!
//! The parking sensor shares one GPIO for trigger and echo; the
//! [`shared_pin`](UltrasonicRanger::shared_pin) constructor flips the pin
//! direction around each ping.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: bit-bangs the real pins with the µs clock in hw_init.
//! On host/test: returns a synthetic duration from a simulation atomic.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU32, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// Speed of sound at room temperature, cm per µs.
pub const SPEED_OF_SOUND_CM_PER_US: f32 = 0.0343;

const TRIGGER_SETUP_US: u32 = 2;
const TRIGGER_PULSE_US: u32 = 10;

/// Sentinel in the simulation atomic meaning "no echo observed".
#[cfg(not(target_os = "espidf"))]
const SIM_NO_ECHO: u32 = u32::MAX;

#[cfg(not(target_os = "espidf"))]
static SIM_ECHO_US: AtomicU32 = AtomicU32::new(SIM_NO_ECHO);

/// Inject a synthetic echo duration (or a missing echo) for host tests.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_echo_us(duration_us: Option<u32>) {
    SIM_ECHO_US.store(duration_us.unwrap_or(SIM_NO_ECHO), Ordering::Relaxed);
}

/// One successful ranging measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSample {
    /// Raw echo pulse width in microseconds (round trip).
    pub duration_us: u32,
    /// Derived one-way distance in centimetres.
    pub distance_cm: f32,
}

/// Convert a round-trip echo duration to one-way centimetres.
pub fn duration_to_distance_cm(duration_us: u32) -> f32 {
    (duration_us as f32 / 2.0) * SPEED_OF_SOUND_CM_PER_US
}

pub struct UltrasonicRanger {
    trig_gpio: i32,
    echo_gpio: i32,
    /// Trigger and echo share one physical pin (mode-flipped per ping).
    shared: bool,
    timeout_us: u32,
}

impl UltrasonicRanger {
    /// Standard two-pin wiring.
    pub fn new(trig_gpio: i32, echo_gpio: i32, timeout_us: u32) -> Self {
        Self {
            trig_gpio,
            echo_gpio,
            shared: false,
            timeout_us,
        }
    }

    /// Single-wire wiring: one GPIO serves as trigger, then as echo.
    pub fn shared_pin(gpio: i32, timeout_us: u32) -> Self {
        Self {
            trig_gpio: gpio,
            echo_gpio: gpio,
            shared: true,
            timeout_us,
        }
    }

    /// Fire one ping and measure the echo.  `None` when either echo edge
    /// fails to arrive within the timeout budget.
    pub fn measure(&mut self) -> Option<DistanceSample> {
        let duration_us = self.measure_pulse_us()?;
        Some(DistanceSample {
            duration_us,
            distance_cm: duration_to_distance_cm(duration_us),
        })
    }

    #[cfg(target_os = "espidf")]
    fn measure_pulse_us(&mut self) -> Option<u32> {
        if self.shared {
            hw_init::gpio_set_output(self.trig_gpio);
        }

        hw_init::gpio_write(self.trig_gpio, false);
        hw_init::delay_us(TRIGGER_SETUP_US);
        hw_init::gpio_write(self.trig_gpio, true);
        hw_init::delay_us(TRIGGER_PULSE_US);
        hw_init::gpio_write(self.trig_gpio, false);

        if self.shared {
            hw_init::gpio_set_input(self.echo_gpio);
        }

        let result = self.wait_for_pulse();

        if self.shared {
            hw_init::gpio_set_output(self.trig_gpio);
        }

        result
    }

    /// Bounded replacement for `pulseIn`: wait for the rising edge, then
    /// time the high phase, each against the same timeout budget.
    #[cfg(target_os = "espidf")]
    fn wait_for_pulse(&self) -> Option<u32> {
        let timeout = self.timeout_us as u64;

        let armed_at = hw_init::now_us();
        while !hw_init::gpio_read(self.echo_gpio) {
            if hw_init::now_us() - armed_at > timeout {
                return None;
            }
        }

        let rise_at = hw_init::now_us();
        while hw_init::gpio_read(self.echo_gpio) {
            if hw_init::now_us() - rise_at > timeout {
                return None;
            }
        }

        Some((hw_init::now_us() - rise_at) as u32)
    }

    #[cfg(not(target_os = "espidf"))]
    fn measure_pulse_us(&mut self) -> Option<u32> {
        match SIM_ECHO_US.load(Ordering::Relaxed) {
            SIM_NO_ECHO => None,
            // Durations past the timeout budget would have tripped the
            // bounded wait on hardware.
            d if d as u64 > self.timeout_us as u64 => None,
            d => Some(d),
        }
    }
}
