//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns every driver and sensor, exposing them through the port traits
//! in [`crate::app::ports`].  This is the only module (besides the
//! drivers it owns) that maps pin numbers to roles.  On non-espidf
//! targets the underlying drivers use cfg-gated simulation stubs, so
//! the adapter itself is target-agnostic.

use crate::app::ports::{DrivePort, LineSensorPort, PanelPort, RangePort, SignalPort};
use crate::config::SystemConfig;
use crate::drive::{MotorOutput, MovementCommand};
use crate::drivers::button::ButtonDriver;
use crate::drivers::buzzer::Buzzer;
use crate::drivers::lcd::Lcd;
use crate::drivers::motor::MotorDriver;
use crate::drivers::panel_led::PanelLeds;
use crate::pins;
use crate::sensors::line::LineSensorPair;
use crate::sensors::ultrasonic::{DistanceSample, UltrasonicRanger};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    motor: MotorDriver,
    ranger: UltrasonicRanger,
    line: LineSensorPair,
    buzzer: Buzzer,
    leds: PanelLeds,
    lcd: Lcd,
    button: ButtonDriver,
}

impl HardwareAdapter {
    /// Front-facing wiring: dedicated trigger and echo pins.
    pub fn new(config: &SystemConfig) -> Self {
        Self::with_ranger(UltrasonicRanger::new(
            pins::RANGE_TRIG_GPIO,
            pins::RANGE_ECHO_GPIO,
            config.echo_timeout_us,
        ))
    }

    /// Rear parking wiring: trigger and echo share one GPIO.
    pub fn new_parking(config: &SystemConfig) -> Self {
        Self::with_ranger(UltrasonicRanger::shared_pin(
            pins::PARKING_PING_GPIO,
            config.echo_timeout_us,
        ))
    }

    fn with_ranger(ranger: UltrasonicRanger) -> Self {
        Self {
            motor: MotorDriver::new(),
            ranger,
            line: LineSensorPair::new(pins::LINE_LEFT_GPIO, pins::LINE_RIGHT_GPIO),
            buzzer: Buzzer::new(pins::BUZZER_GPIO),
            leds: PanelLeds::new(pins::LED_RED_GPIO, pins::LED_GREEN_GPIO),
            lcd: Lcd::new(),
            button: ButtonDriver::new(pins::BUTTON_GPIO),
        }
    }

    /// Run the display power-on sequence.  Only the panel mode needs it.
    pub fn init_display(&mut self) {
        self.lcd.init();
    }
}

// ── DrivePort implementation ──────────────────────────────────

impl DrivePort for HardwareAdapter {
    fn drive(&mut self, cmd: MovementCommand, left_speed: u8, right_speed: u8) {
        self.motor
            .apply(MotorOutput::from_command(cmd, left_speed, right_speed));
    }

    fn stop(&mut self) {
        self.motor.stop();
    }
}

// ── RangePort implementation ──────────────────────────────────

impl RangePort for HardwareAdapter {
    fn measure(&mut self) -> Option<DistanceSample> {
        self.ranger.measure()
    }
}

// ── LineSensorPort implementation ─────────────────────────────

impl LineSensorPort for HardwareAdapter {
    fn read_pair(&mut self) -> crate::sensors::line::LineReading {
        self.line.read()
    }
}

// ── PanelPort implementation ──────────────────────────────────

impl PanelPort for HardwareAdapter {
    fn set_leds(&mut self, red: bool, green: bool) {
        self.leds.set(red, green);
    }

    fn show(&mut self, row: u8, text: &str) {
        self.lcd.print(row as usize, text);
    }

    fn clear_display(&mut self) {
        self.lcd.clear();
    }

    fn poll_press(&mut self, now_ms: u32) -> bool {
        self.button.poll(now_ms)
    }
}

// ── SignalPort implementation ─────────────────────────────────

impl SignalPort for HardwareAdapter {
    fn beep_cycle(&mut self, half_period_us: u32) {
        self.buzzer.tick(half_period_us);
    }

    fn silence(&mut self) {
        self.buzzer.silence();
    }
}
