//! System configuration parameters
//!
//! All tunable parameters for the rover.  Per the hardware bring-up notes
//! there is no runtime configuration channel — these are compile-time
//! defaults, collected in one struct so every tunable has a single home.

use serde::{Deserialize, Serialize};

/// Which control loop the firmware runs.  The original bring-up treated
/// each behaviour as a separate sketch; here one binary carries all of
/// them and this constant picks the active one at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunMode {
    /// Cycle Forward/Backward/Right/Left/Stop with fixed holds.
    DirectionDemo,
    /// Single-character drive commands over the serial link.
    Remote,
    /// Two-sensor line following.
    LineFollower,
    /// Cruise forward, escape when an obstacle is closer than threshold.
    ObstacleAvoider,
    /// Push-button Red/Green LED toggle with LCD readout.
    PanelToggle,
    /// Proximity beeper on the shared-pin ranger.
    ParkingAssist,
}

/// Control loop selected for this build.
pub const RUN_MODE: RunMode = RunMode::Remote;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Drive ---
    /// PWM magnitude (0-255) for straight-line cruising.
    pub cruise_speed: u8,
    /// PWM magnitude (0-255) for the outer wheel while turning.
    pub turn_speed: u8,

    // --- Obstacle avoidance ---
    /// Obstacle distance (cm) below which the escape sequence runs.
    /// Exclusive bound: exactly this distance still counts as clear.
    pub obstacle_threshold_cm: f32,
    /// Hold durations for the escape sequence (milliseconds).
    pub escape_stop_ms: u32,
    pub escape_reverse_ms: u32,
    pub escape_turn_ms: u32,

    // --- Ranging ---
    /// Maximum wait for each echo edge (microseconds).  The original
    /// `pulseIn` call had no bound and could hang on a missing echo.
    pub echo_timeout_us: u32,

    // --- Timing ---
    /// Hold per direction in the direction demo (milliseconds).
    pub demo_hold_ms: u32,
    /// Settle delay between ranging and beeping in parking assist
    /// (milliseconds).
    pub parking_settle_ms: u32,
    /// Idle delay between control-loop iterations (milliseconds).
    pub loop_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Drive — 150/255 matches the bring-up sketches
            cruise_speed: 150,
            turn_speed: 150,

            // Obstacle avoidance
            obstacle_threshold_cm: 20.0,
            escape_stop_ms: 250,
            escape_reverse_ms: 500,
            escape_turn_ms: 1000,

            // Ranging — ~5 m round trip at 0.0343 cm/µs, past the
            // HC-SR04's 4 m ceiling
            echo_timeout_us: 30_000,

            // Timing
            demo_hold_ms: 2000,
            parking_settle_ms: 5,
            loop_interval_ms: 10,
        }
    }
}
