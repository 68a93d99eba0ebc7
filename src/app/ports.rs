//! Port traits — the hexagonal boundary between control logic and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ control loops (domain)
//! ```
//!
//! Driven adapters (motor driver, range finder, serial link, panel
//! peripherals) implement these traits.  The control loops in
//! [`control`](crate::control) consume them via generics, so the domain
//! core never touches a GPIO register directly and every loop runs
//! unchanged against the mock harness in the integration tests.

use crate::drive::MovementCommand;
use crate::sensors::line::LineReading;
use crate::sensors::ultrasonic::DistanceSample;

// ───────────────────────────────────────────────────────────────
// Drive port (domain → motors)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the control loops command the drive train through this.
pub trait DrivePort {
    /// Apply a movement command at the given per-side speeds (0–255).
    fn drive(&mut self, cmd: MovementCommand, left_speed: u8, right_speed: u8);

    /// Cut all direction pins and both PWM channels.
    fn stop(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Range port (range finder → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: fire one ultrasonic ping and collect the echo.
pub trait RangePort {
    /// `None` when no echo arrived within the timeout budget.
    fn measure(&mut self) -> Option<DistanceSample>;
}

// ───────────────────────────────────────────────────────────────
// Line sensor port (reflective pair → domain)
// ───────────────────────────────────────────────────────────────

pub trait LineSensorPort {
    /// Sample both reflective sensors.
    fn read_pair(&mut self) -> LineReading;
}

// ───────────────────────────────────────────────────────────────
// Command port (serial link → domain)
// ───────────────────────────────────────────────────────────────

/// Inbound byte stream from the operator (Bluetooth serial bridge).
pub trait CommandPort {
    /// Next pending byte, or `None` when the receive buffer is empty.
    fn poll_byte(&mut self) -> Option<u8>;
}

// ───────────────────────────────────────────────────────────────
// Panel port (domain → LEDs, display, button)
// ───────────────────────────────────────────────────────────────

/// The operator panel: two indicator LEDs, a character display, and a
/// momentary push button.
pub trait PanelPort {
    /// Drive the red / green indicator pair.
    fn set_leds(&mut self, red: bool, green: bool);

    /// Write a line of text to the display (truncated to the panel width).
    fn show(&mut self, row: u8, text: &str);

    /// Blank the display.
    fn clear_display(&mut self);

    /// `true` exactly once per debounced button press.
    fn poll_press(&mut self, now_ms: u32) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Signal port (domain → buzzer)
// ───────────────────────────────────────────────────────────────

/// Audible proximity feedback.
pub trait SignalPort {
    /// Emit one square-wave cycle with the given half period.
    fn beep_cycle(&mut self, half_period_us: u32);

    /// Force the buzzer line low.
    fn silence(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The control loops emit structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log today;
/// a radio link tomorrow).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
