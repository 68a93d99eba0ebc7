//! One-shot hardware peripheral initialization and register-level helpers.
//!
//! Configures GPIO directions and the LEDC timer/channels using raw
//! ESP-IDF sys calls.  Called once from `main()` before the control loop
//! starts.  Every driver goes through the thin `gpio_*`/`ledc_*` helpers
//! here rather than touching the sys crate directly.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::error::Error;
use crate::error::Result;
#[cfg(target_os = "espidf")]
use crate::pins;

/// LEDC channel feeding the left enable pin (ENA).
pub const LEDC_CH_MOTOR_L: u32 = 0;
/// LEDC channel feeding the right enable pin (ENB).
pub const LEDC_CH_MOTOR_R: u32 = 1;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<()> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        init_gpio_outputs()?;
        init_gpio_inputs()?;
        init_ledc()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<()> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── GPIO outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<()> {
    let output_pins = [
        pins::MOTOR_L_FWD_GPIO,
        pins::MOTOR_L_BWD_GPIO,
        pins::MOTOR_R_FWD_GPIO,
        pins::MOTOR_R_BWD_GPIO,
        pins::RANGE_TRIG_GPIO,
        pins::BUZZER_GPIO,
        pins::LED_RED_GPIO,
        pins::LED_GREEN_GPIO,
        pins::LCD_RS_GPIO,
        pins::LCD_EN_GPIO,
        pins::LCD_D4_GPIO,
        pins::LCD_D5_GPIO,
        pins::LCD_D6_GPIO,
        pins::LCD_D7_GPIO,
    ];

    for &pin in &output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(Error::Init("GPIO output config failed"));
        }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: GPIO outputs configured");
    Ok(())
}

// ── GPIO inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_inputs() -> Result<()> {
    let input_pins = [
        pins::RANGE_ECHO_GPIO,
        pins::LINE_LEFT_GPIO,
        pins::LINE_RIGHT_GPIO,
    ];

    for &pin in &input_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(Error::Init("GPIO input config failed"));
        }
    }

    // Button is active-low with a pull-up.
    let btn_cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::BUTTON_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&btn_cfg) };
    if ret != ESP_OK as i32 {
        return Err(Error::Init("button GPIO config failed"));
    }

    info!("hw_init: GPIO inputs configured");
    Ok(())
}

// ── GPIO helpers ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // control-loop context only.
    unsafe {
        gpio_set_level(pin, if high { 1 } else { 0 });
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    false
}

/// Re-point a pin as a plain output.  Used by the shared-pin ranger which
/// alternates one GPIO between trigger (output) and echo (input).
#[cfg(target_os = "espidf")]
pub fn gpio_set_output(pin: i32) {
    // SAFETY: gpio_set_direction only touches the direction register.
    unsafe {
        gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_OUTPUT);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_set_output(_pin: i32) {}

/// Re-point a pin as a plain input.
#[cfg(target_os = "espidf")]
pub fn gpio_set_input(pin: i32) {
    // SAFETY: gpio_set_direction only touches the direction register.
    unsafe {
        gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_INPUT);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_set_input(_pin: i32) {}

// ── LEDC PWM ──────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_ledc() -> Result<()> {
    // Timer 0: both motor enable pins (1 kHz, 8-bit).
    // SAFETY: Called from the single main-task context via init_peripherals().
    let timer0 = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: pins::PWM_RESOLUTION_BITS,
        freq_hz: pins::MOTOR_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    if unsafe { ledc_timer_config(&timer0) } != ESP_OK as i32 {
        return Err(Error::Init("LEDC timer config failed"));
    }

    let channels = [
        (LEDC_CH_MOTOR_L, pins::MOTOR_L_PWM_GPIO),
        (LEDC_CH_MOTOR_R, pins::MOTOR_R_PWM_GPIO),
    ];
    for &(channel, gpio) in &channels {
        let cfg = ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel,
            timer_sel: ledc_timer_t_LEDC_TIMER_0,
            gpio_num: gpio,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        };
        if unsafe { ledc_channel_config(&cfg) } != ESP_OK as i32 {
            return Err(Error::Init("LEDC channel config failed"));
        }
    }

    info!("hw_init: LEDC configured (ENA=CH0, ENB=CH1)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u8) {
    // SAFETY: channels were configured in init_ledc(); duty register writes
    // are race-free since only the control loop calls this.
    unsafe {
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, duty as u32);
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u8) {}

// ── Microsecond clock / busy-wait ─────────────────────────────

/// Monotonic microseconds since boot.
#[cfg(target_os = "espidf")]
pub fn now_us() -> u64 {
    // SAFETY: esp_timer_get_time is a monotonic counter read.
    (unsafe { esp_timer_get_time() }) as u64
}

#[cfg(not(target_os = "espidf"))]
pub fn now_us() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_micros() as u64
}

/// Busy-wait for `us` microseconds.  Only used for the short, precise
/// holds in the ranging trigger and the LCD enable strobe; millisecond
/// holds go through the delay adapter instead.
#[cfg(target_os = "espidf")]
pub fn delay_us(us: u32) {
    // SAFETY: esp_rom_delay_us is a calibrated spin loop.
    unsafe {
        esp_rom_delay_us(us);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn delay_us(us: u32) {
    std::thread::sleep(std::time::Duration::from_micros(us as u64));
}
