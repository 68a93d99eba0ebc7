//! Run-mode control loops.
//!
//! Each loop is pure domain logic over the port traits in
//! [`app::ports`](crate::app::ports): one tick function driven from the
//! main loop, with all waiting expressed through
//! [`DelayNs`](embedded_hal::delay::DelayNs) so the integration tests can
//! substitute a recording clock.

pub mod demo;
pub mod line_follower;
pub mod obstacle;
pub mod panel;
pub mod parking;
pub mod remote;
