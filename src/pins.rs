//! GPIO / peripheral pin assignments for the rover main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// The PWM pins are only referenced by the espidf peripheral bring-up.
#![allow(dead_code)]

// ---------------------------------------------------------------------------
// Drive motors (L298N dual H-bridge)
// ---------------------------------------------------------------------------

/// Left channel direction inputs (IN1/IN2 on the L298N).
pub const MOTOR_L_FWD_GPIO: i32 = 4;
pub const MOTOR_L_BWD_GPIO: i32 = 5;
/// Right channel direction inputs (IN3/IN4 on the L298N).
pub const MOTOR_R_FWD_GPIO: i32 = 6;
pub const MOTOR_R_BWD_GPIO: i32 = 7;

/// LEDC PWM outputs for the enable pins (ENA = left, ENB = right).
pub const MOTOR_L_PWM_GPIO: i32 = 15;
pub const MOTOR_R_PWM_GPIO: i32 = 16;

// ---------------------------------------------------------------------------
// Ultrasonic ranging (HC-SR04)
// ---------------------------------------------------------------------------

/// Trigger output for the front-facing ranger.
pub const RANGE_TRIG_GPIO: i32 = 17;
/// Echo return input for the front-facing ranger.
pub const RANGE_ECHO_GPIO: i32 = 18;

/// Single shared trigger/echo line for the parking-assist sensor.
/// The driver flips this pin between output and input around each ping.
pub const PARKING_PING_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// Line sensors (TCRT5000 boards, digital out)
// ---------------------------------------------------------------------------

/// LOW = over the line.
pub const LINE_LEFT_GPIO: i32 = 9;
pub const LINE_RIGHT_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Panel: push-button, indicator LEDs, buzzer
// ---------------------------------------------------------------------------

/// Momentary push-button (active-low with external pull-up).
pub const BUTTON_GPIO: i32 = 11;

pub const LED_RED_GPIO: i32 = 12;
pub const LED_GREEN_GPIO: i32 = 13;

/// Piezo buzzer for parking assist.
pub const BUZZER_GPIO: i32 = 14;

// ---------------------------------------------------------------------------
// Character LCD (HD44780, 4-bit GPIO mode)
// ---------------------------------------------------------------------------

pub const LCD_RS_GPIO: i32 = 21;
pub const LCD_EN_GPIO: i32 = 47;
pub const LCD_D4_GPIO: i32 = 38;
pub const LCD_D5_GPIO: i32 = 39;
pub const LCD_D6_GPIO: i32 = 40;
pub const LCD_D7_GPIO: i32 = 41;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives the 0 – 255 duty range the
/// drive contract is specified in.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the motor enable pins.
pub const MOTOR_PWM_FREQ_HZ: u32 = 1_000;
