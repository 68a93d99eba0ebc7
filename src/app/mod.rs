//! Application boundary — port traits and outbound events.
//!
//! All interaction between the control loops and the hardware happens
//! through the **port traits** defined in [`ports`], keeping the domain
//! layer fully testable without real peripherals.

pub mod events;
pub mod ports;
