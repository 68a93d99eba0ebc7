//! Roverbot firmware — main entry point.
//!
//! Hexagonal architecture: all hardware sits behind the port traits in
//! [`roverbot::app::ports`], and the run mode selects which control
//! loop drives them.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter    LogEventSink    SerialLink           │
//! │  (Drive/Range/      (EventSink)     (CommandPort)        │
//! │   Line/Panel/Signal)                                     │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ─────────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        Control loops (pure logic)              │      │
//! │  │  demo · remote · line · obstacle · panel ·     │      │
//! │  │  parking                                       │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use roverbot::adapters::hardware::HardwareAdapter;
use roverbot::adapters::log_sink::LogEventSink;
use roverbot::adapters::serial::SerialLink;
use roverbot::adapters::time::FirmwareDelay;
use roverbot::app::events::AppEvent;
use roverbot::app::ports::EventSink;
use roverbot::config::{RunMode, SystemConfig, RUN_MODE};
use roverbot::control::demo::DirectionDemo;
use roverbot::control::line_follower::LineFollower;
use roverbot::control::obstacle::ObstacleAvoider;
use roverbot::control::panel::PanelToggle;
use roverbot::control::parking::ParkingAssist;
use roverbot::control::remote::RemoteLoop;
use roverbot::drivers::hw_init;

use embedded_hal::delay::DelayNs;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Roverbot v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Hardware bring-up ──────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // The watchdog resets the chip after its timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Construct adapters and enter the selected loop ─────
    let config = SystemConfig::default();
    let mut sink = LogEventSink::new();
    let mut delay = FirmwareDelay::new();

    sink.emit(&AppEvent::Started(RUN_MODE));

    match RUN_MODE {
        RunMode::DirectionDemo => {
            let mut hw = HardwareAdapter::new(&config);
            let mut demo = DirectionDemo::new(config.cruise_speed, config.turn_speed, config.demo_hold_ms);
            loop {
                demo.run_cycle(&mut hw, &mut sink, &mut delay);
            }
        }
        RunMode::Remote => {
            let mut hw = HardwareAdapter::new(&config);
            let mut link = SerialLink::new().map_err(|e| anyhow::anyhow!("{}", e))?;
            let mut remote = RemoteLoop::new(config.cruise_speed, config.turn_speed);
            loop {
                remote.tick(&mut link, &mut hw, &mut sink);
                delay.delay_ms(config.loop_interval_ms);
            }
        }
        RunMode::LineFollower => {
            let mut hw = HardwareAdapter::new(&config);
            let mut follower = LineFollower::new(config.cruise_speed, config.turn_speed);
            loop {
                follower.tick(&mut hw, &mut sink);
                delay.delay_ms(config.loop_interval_ms);
            }
        }
        RunMode::ObstacleAvoider => {
            let mut hw = HardwareAdapter::new(&config);
            let mut avoider = ObstacleAvoider::new(&config);
            loop {
                avoider.tick(&mut hw, &mut sink, &mut delay);
                delay.delay_ms(config.loop_interval_ms);
            }
        }
        RunMode::PanelToggle => {
            let mut hw = HardwareAdapter::new(&config);
            hw.init_display();
            let mut panel = PanelToggle::new();
            panel.init(&mut hw);
            loop {
                panel.tick(&mut hw, &mut sink, delay.now_ms());
                delay.delay_ms(config.loop_interval_ms);
            }
        }
        RunMode::ParkingAssist => {
            let mut hw = HardwareAdapter::new_parking(&config);
            let mut assist = ParkingAssist::new(config.parking_settle_ms);
            loop {
                assist.tick(&mut hw, &mut sink, &mut delay);
            }
        }
    }
}
