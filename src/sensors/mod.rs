//! Sensor drivers: ultrasonic ranging and the line-follower pair.

pub mod line;
pub mod ultrasonic;
