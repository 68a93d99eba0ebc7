//! Mock hardware adapters for integration tests.
//!
//! Records every port call so tests can assert on the full command
//! history without touching real GPIO/PWM registers.

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;

use roverbot::app::events::AppEvent;
use roverbot::app::ports::{
    CommandPort, DrivePort, EventSink, LineSensorPort, PanelPort, RangePort, SignalPort,
};
use roverbot::drive::MovementCommand;
use roverbot::sensors::line::LineReading;
use roverbot::sensors::ultrasonic::{duration_to_distance_cm, DistanceSample};

// ── Call records ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveCall {
    pub cmd: MovementCommand,
    pub left_speed: u8,
    pub right_speed: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelCall {
    SetLeds { red: bool, green: bool },
    Show { row: u8, text: String },
    ClearDisplay,
}

// ── MockHardware ──────────────────────────────────────────────

/// One mock standing in for the whole hardware adapter: queues feed the
/// read-side ports, vectors record the write side.
#[derive(Default)]
pub struct MockHardware {
    pub drive_calls: Vec<DriveCall>,
    pub stops: usize,
    pub range_queue: VecDeque<Option<DistanceSample>>,
    pub line_queue: VecDeque<LineReading>,
    pub press_queue: VecDeque<bool>,
    pub panel_calls: Vec<PanelCall>,
    pub beeps: Vec<u32>,
    pub silences: usize,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_range_cm(&mut self, distance_cm: f32) {
        // Invert the conversion so the sample is self-consistent.
        let duration_us = (2.0 * distance_cm / 0.0343) as u32;
        self.range_queue.push_back(Some(DistanceSample {
            duration_us,
            distance_cm: duration_to_distance_cm(duration_us),
        }));
    }

    pub fn queue_range_sample(&mut self, sample: DistanceSample) {
        self.range_queue.push_back(Some(sample));
    }

    pub fn queue_no_echo(&mut self) {
        self.range_queue.push_back(None);
    }

    pub fn queue_line(&mut self, left: bool, right: bool) {
        self.line_queue.push_back(LineReading { left, right });
    }

    pub fn queue_press(&mut self) {
        self.press_queue.push_back(true);
    }

    pub fn last_drive(&self) -> Option<&DriveCall> {
        self.drive_calls.last()
    }

    pub fn drive_sequence(&self) -> Vec<MovementCommand> {
        self.drive_calls.iter().map(|c| c.cmd).collect()
    }

    pub fn last_leds(&self) -> Option<(bool, bool)> {
        self.panel_calls.iter().rev().find_map(|c| match c {
            PanelCall::SetLeds { red, green } => Some((*red, *green)),
            _ => None,
        })
    }

    pub fn last_shown(&self) -> Option<&str> {
        self.panel_calls.iter().rev().find_map(|c| match c {
            PanelCall::Show { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrivePort for MockHardware {
    fn drive(&mut self, cmd: MovementCommand, left_speed: u8, right_speed: u8) {
        self.drive_calls.push(DriveCall {
            cmd,
            left_speed,
            right_speed,
        });
    }

    fn stop(&mut self) {
        self.stops += 1;
        self.drive_calls.push(DriveCall {
            cmd: MovementCommand::Stop,
            left_speed: 0,
            right_speed: 0,
        });
    }
}

impl RangePort for MockHardware {
    fn measure(&mut self) -> Option<DistanceSample> {
        self.range_queue.pop_front().flatten()
    }
}

impl LineSensorPort for MockHardware {
    fn read_pair(&mut self) -> LineReading {
        self.line_queue.pop_front().unwrap_or_default()
    }
}

impl PanelPort for MockHardware {
    fn set_leds(&mut self, red: bool, green: bool) {
        self.panel_calls.push(PanelCall::SetLeds { red, green });
    }

    fn show(&mut self, row: u8, text: &str) {
        self.panel_calls.push(PanelCall::Show {
            row,
            text: text.to_string(),
        });
    }

    fn clear_display(&mut self) {
        self.panel_calls.push(PanelCall::ClearDisplay);
    }

    fn poll_press(&mut self, _now_ms: u32) -> bool {
        self.press_queue.pop_front().unwrap_or(false)
    }
}

impl SignalPort for MockHardware {
    fn beep_cycle(&mut self, half_period_us: u32) {
        self.beeps.push(half_period_us);
    }

    fn silence(&mut self) {
        self.silences += 1;
    }
}

// ── MockCommandPort ───────────────────────────────────────────

/// Serial link fed from a byte queue.
#[derive(Default)]
pub struct MockCommandPort {
    pub bytes: VecDeque<u8>,
}

#[allow(dead_code)]
impl MockCommandPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        self.bytes.extend(bytes.iter().copied());
    }
}

impl CommandPort for MockCommandPort {
    fn poll_byte(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }
}

// ── MockDelay ─────────────────────────────────────────────────

/// Recording clock: every delay is logged in milliseconds and returns
/// immediately, so escape sequences run at test speed.
#[derive(Default)]
pub struct MockDelay {
    pub sleeps_ms: Vec<u32>,
}

#[allow(dead_code)]
impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.sleeps_ms.push(ns / 1_000_000);
    }
}

// ── MockSink ──────────────────────────────────────────────────

/// Event sink that keeps everything for later assertions.
#[derive(Default)]
pub struct MockSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, event: &AppEvent) -> bool {
        self.events.contains(event)
    }
}

impl EventSink for MockSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
