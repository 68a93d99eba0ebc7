//! Outbound application events.
//!
//! The control loops emit these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — today that means the structured
//! serial log.

use crate::config::RunMode;
use crate::control::panel::PanelState;
use crate::drive::MovementCommand;
use crate::sensors::line::LineReading;
use crate::sensors::ultrasonic::DistanceSample;

/// Structured events emitted by the control loops.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The firmware entered its run mode after hardware bring-up.
    Started(RunMode),

    /// A movement command was applied to the drive train.
    DriveCommand(MovementCommand),

    /// An inbound serial byte did not map to any command and was dropped.
    RemoteIgnored(u8),

    /// One ultrasonic measurement completed.
    Range(DistanceSample),

    /// The range finder saw no echo within the timeout budget.
    EchoTimeout,

    /// The cruise path is blocked; the escape manoeuvre is starting.
    ObstacleDetected { distance_cm: f32 },

    /// One sample of the reflective sensor pair.
    Line(LineReading),

    /// The operator panel toggled to a new state.
    PanelChanged(PanelState),
}
