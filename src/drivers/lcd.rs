//! HD44780 character LCD driver (16x2, 4-bit GPIO mode).
//!
//! Just enough of the instruction set for the panel demo: init, clear,
//! and writing one line of text.  Timing follows the datasheet worst
//! cases; all pin access goes through the hw_init helpers, which are
//! no-ops on host builds, so the driver doubles as an in-memory panel
//! for tests via the line buffers.

use heapless::String;

use crate::drivers::hw_init;
use crate::pins;

pub const COLS: usize = 16;
pub const ROWS: usize = 2;

// HD44780 instruction bytes.
const CMD_CLEAR: u8 = 0x01;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_ENTRY_INCREMENT: u8 = 0x06;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address of the start of each row.
const ROW_OFFSET: [u8; ROWS] = [0x00, 0x40];

pub struct Lcd {
    lines: [String<COLS>; ROWS],
}

impl Lcd {
    pub fn new() -> Self {
        Self {
            lines: [String::new(), String::new()],
        }
    }

    /// Datasheet power-on sequence: three 8-bit function-set nibbles, then
    /// switch to 4-bit mode and configure.  Call once after hw_init.
    pub fn init(&mut self) {
        hw_init::delay_us(50_000); // Vcc rise time

        self.write_nibble(0x03, false);
        hw_init::delay_us(4_500);
        self.write_nibble(0x03, false);
        hw_init::delay_us(4_500);
        self.write_nibble(0x03, false);
        hw_init::delay_us(150);
        self.write_nibble(0x02, false); // 4-bit mode

        self.command(CMD_FUNCTION_4BIT_2LINE);
        self.command(CMD_DISPLAY_ON);
        self.command(CMD_ENTRY_INCREMENT);
        self.clear();
    }

    pub fn clear(&mut self) {
        self.command(CMD_CLEAR);
        hw_init::delay_us(2_000); // clear is the slow instruction
        for line in &mut self.lines {
            line.clear();
        }
    }

    /// Overwrite one row with `text`, truncated to the panel width.
    pub fn print(&mut self, row: usize, text: &str) {
        let row = row.min(ROWS - 1);
        self.command(CMD_SET_DDRAM | ROW_OFFSET[row]);

        self.lines[row].clear();
        for ch in text.chars().take(COLS) {
            let byte = if ch.is_ascii() { ch as u8 } else { b'?' };
            self.write_byte(byte, true);
            let _ = self.lines[row].push(ch);
        }
    }

    /// Text currently shown on `row` (host-visible shadow of the DDRAM).
    pub fn line(&self, row: usize) -> &str {
        &self.lines[row.min(ROWS - 1)]
    }

    // ── Bus helpers ───────────────────────────────────────────

    fn command(&mut self, byte: u8) {
        self.write_byte(byte, false);
    }

    fn write_byte(&mut self, byte: u8, is_data: bool) {
        self.write_nibble(byte >> 4, is_data);
        self.write_nibble(byte & 0x0F, is_data);
        hw_init::delay_us(40); // instruction execution time
    }

    fn write_nibble(&mut self, nibble: u8, is_data: bool) {
        hw_init::gpio_write(pins::LCD_RS_GPIO, is_data);
        hw_init::gpio_write(pins::LCD_D4_GPIO, nibble & 0x01 != 0);
        hw_init::gpio_write(pins::LCD_D5_GPIO, nibble & 0x02 != 0);
        hw_init::gpio_write(pins::LCD_D6_GPIO, nibble & 0x04 != 0);
        hw_init::gpio_write(pins::LCD_D7_GPIO, nibble & 0x08 != 0);

        // Enable strobe: >450 ns high.
        hw_init::gpio_write(pins::LCD_EN_GPIO, true);
        hw_init::delay_us(1);
        hw_init::gpio_write(pins::LCD_EN_GPIO, false);
        hw_init::delay_us(1);
    }
}
