//! MotorBench Firmware: Main Entry Point
//!
//! Hexagonal layout with a synchronous drive loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  LedcChannel ×2          LogEventSink                          │
//! │  (PwmChannel)            (EventSink)                           │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │           DriveService (pure logic)                    │    │
//! │  │  MotorDriver · clamp + dispatch                        │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  DemoRamp (pure step sequence) · FreeRTOS delays               │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod pins;

pub mod app;
mod adapters;
pub mod control;
mod drivers;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::info;

use adapters::ledc::LedcChannel;
use adapters::log_sink::LogEventSink;
use app::service::DriveService;
use config::DriveConfig;
use control::ramp::DemoRamp;
use drivers::motor::MotorDriver;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  MotorBench v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical; log and halt.
        log::error!("HAL init failed: {}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Construct adapters and service ─────────────────────
    let config = DriveConfig::default();

    let motor = MotorDriver::new(LedcChannel::forward(), LedcChannel::reverse());
    let mut service = DriveService::new(motor);
    let mut sink = LogEventSink::new();
    service.start(&mut sink);

    info!("System ready. Entering drive loop.");

    // ── 4. Drive loop ─────────────────────────────────────────
    loop {
        for step in DemoRamp::new(&config) {
            service.set_speed(step.speed, &mut sink);
            FreeRtos::delay_ms(step.dwell_ms);
        }
    }
}
