//! UART command link adapter.
//!
//! Implements [`CommandPort`] over UART0, where the Bluetooth serial
//! bridge module is wired.  Reads are non-blocking: the control loop
//! polls one byte per call and gets `None` when the receive FIFO is
//! empty.
//!
//! On host builds there is no UART; the stub always reports an empty
//! buffer and the integration tests drive the control loops through a
//! mock [`CommandPort`] instead.

use crate::app::ports::CommandPort;
#[cfg(target_os = "espidf")]
use crate::error::Error;
use crate::error::Result;

#[cfg(target_os = "espidf")]
const UART_PORT: i32 = 0;
#[cfg(target_os = "espidf")]
const RX_BUFFER_SIZE: i32 = 256;

pub struct SerialLink {
    _private: (),
}

impl SerialLink {
    /// Install the UART driver and claim the receive FIFO.
    #[cfg(target_os = "espidf")]
    pub fn new() -> Result<Self> {
        use esp_idf_svc::sys::*;

        // SAFETY: driver install happens once at startup, before the
        // control loop takes over the port.
        let ret = unsafe {
            uart_driver_install(
                UART_PORT,
                RX_BUFFER_SIZE,
                0,
                0,
                core::ptr::null_mut(),
                0,
            )
        };
        if ret != ESP_OK as i32 {
            return Err(Error::Init("UART driver install failed"));
        }
        Ok(Self { _private: () })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Result<Self> {
        Ok(Self { _private: () })
    }
}

impl CommandPort for SerialLink {
    #[cfg(target_os = "espidf")]
    fn poll_byte(&mut self) -> Option<u8> {
        use esp_idf_svc::sys::*;

        let mut byte = 0u8;
        // SAFETY: reads at most one byte into a stack buffer; zero
        // ticks_to_wait keeps the call non-blocking.
        let n = unsafe {
            uart_read_bytes(
                UART_PORT,
                (&mut byte as *mut u8).cast(),
                1,
                0,
            )
        };
        (n == 1).then_some(byte)
    }

    #[cfg(not(target_os = "espidf"))]
    fn poll_byte(&mut self) -> Option<u8> {
        None
    }
}
