//! Differential-drive command model.
//!
//! [`MovementCommand`] is the discrete vocabulary every control loop speaks;
//! [`MotorOutput`] is the exact pin-level rendering of a command — four
//! direction lines plus two PWM magnitudes.  The mapping is pure so it can
//! be tested exhaustively; the motor driver only ever applies a
//! pre-computed `MotorOutput`.

/// Discrete movement command, produced fresh each control-loop iteration
/// and immediately consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementCommand {
    Forward,
    Backward,
    Left,
    Right,
    Stop,
}

/// Pin-level output for both motor channels.
///
/// Invariant: `left_forward && left_backward` is never true, and likewise
/// for the right channel — asserting both would short the H-bridge arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotorOutput {
    pub left_forward: bool,
    pub left_backward: bool,
    pub right_forward: bool,
    pub right_backward: bool,
    /// PWM duty for the left enable pin (0-255).
    pub left_speed: u8,
    /// PWM duty for the right enable pin (0-255).
    pub right_speed: u8,
}

impl MotorOutput {
    /// Everything de-asserted — the safe power-on state.
    pub const fn all_off() -> Self {
        Self {
            left_forward: false,
            left_backward: false,
            right_forward: false,
            right_backward: false,
            left_speed: 0,
            right_speed: 0,
        }
    }

    /// Render a command at the given per-channel speed magnitudes.
    ///
    /// Turns pivot on the stopped wheel: `Left` halts the left channel and
    /// drives the right forward, `Right` the mirror image.  `Stop`
    /// de-asserts everything regardless of the requested speeds.
    pub fn from_command(cmd: MovementCommand, left_speed: u8, right_speed: u8) -> Self {
        match cmd {
            MovementCommand::Forward => Self {
                left_forward: true,
                right_forward: true,
                left_speed,
                right_speed,
                ..Self::all_off()
            },
            MovementCommand::Backward => Self {
                left_backward: true,
                right_backward: true,
                left_speed,
                right_speed,
                ..Self::all_off()
            },
            MovementCommand::Left => Self {
                right_forward: true,
                right_speed,
                ..Self::all_off()
            },
            MovementCommand::Right => Self {
                left_forward: true,
                left_speed,
                ..Self::all_off()
            },
            MovementCommand::Stop => Self::all_off(),
        }
    }

    /// True when neither channel asserts forward and backward together.
    pub const fn direction_bits_valid(&self) -> bool {
        !(self.left_forward && self.left_backward)
            && !(self.right_forward && self.right_backward)
    }
}
