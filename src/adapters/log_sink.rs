//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! A future radio telemetry adapter would implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(mode) => {
                info!("START | mode={:?}", mode);
            }
            AppEvent::DriveCommand(cmd) => {
                info!("DRIVE | {:?}", cmd);
            }
            AppEvent::RemoteIgnored(byte) => {
                warn!("REMOTE | ignored byte 0x{:02X}", byte);
            }
            AppEvent::Range(sample) => {
                info!(
                    "RANGE | {:.1}cm ({}us echo)",
                    sample.distance_cm, sample.duration_us
                );
            }
            AppEvent::EchoTimeout => {
                info!("RANGE | no echo within budget");
            }
            AppEvent::ObstacleDetected { distance_cm } => {
                warn!("OBSTACLE | blocked at {:.1}cm, escaping", distance_cm);
            }
            AppEvent::Line(reading) => {
                info!("LINE | left={} right={}", reading.left, reading.right);
            }
            AppEvent::PanelChanged(state) => {
                info!("PANEL | {:?}", state);
            }
        }
    }
}
