//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (ESP-IDF serial console in production). A future telemetry
//! adapter would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::drivers::motor::{Direction, MotorState};

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { version } => {
                info!("START | motorbench v{} ready", version);
            }
            AppEvent::SpeedChanged { requested, state } => match state {
                MotorState::Stopped => {
                    info!("MOTOR | stopped (requested {})", requested);
                }
                MotorState::Running { duty, dir } => {
                    let dir = match dir {
                        Direction::Forward => "forward",
                        Direction::Reverse => "reverse",
                    };
                    info!("MOTOR | {} | duty={}% (requested {})", dir, duty, requested);
                }
            },
        }
    }
}
