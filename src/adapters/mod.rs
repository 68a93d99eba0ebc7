//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements       | Connects to               |
//! |------------|------------------|---------------------------|
//! | `hardware` | DrivePort        | L298N via GPIO + LEDC     |
//! |            | RangePort        | HC-SR04 trigger/echo pins |
//! |            | LineSensorPort   | Reflective pair GPIO      |
//! |            | PanelPort        | LEDs, HD44780, button     |
//! |            | SignalPort       | Piezo buzzer GPIO         |
//! | `log_sink` | EventSink        | Serial log output         |
//! | `serial`   | CommandPort      | UART0 receive buffer      |
//! | `time`     | DelayNs          | ESP32 system timer        |

pub mod hardware;
pub mod log_sink;
pub mod serial;
pub mod time;
