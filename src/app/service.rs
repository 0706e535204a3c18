//! Drive service: the application core.
//!
//! [`DriveService`] owns the motor driver and emits one structured
//! [`AppEvent`](super::events::AppEvent) per speed command. All I/O flows
//! through port traits injected at call sites, making the service
//! testable with mock adapters.
//!
//! ```text
//!                 ┌────────────────────────┐ ──▶ EventSink
//!                 │      DriveService       │
//!  PwmChannel ◀───│      MotorDriver        │
//!  PwmChannel ◀───│  clamp + dispatch       │
//!                 └────────────────────────┘
//! ```

use crate::drivers::motor::{MotorDriver, MotorState};

use super::events::AppEvent;
use super::ports::{EventSink, PwmChannel};

/// Orchestrates the motor driver and the diagnostic event stream.
pub struct DriveService<F, R> {
    motor: MotorDriver<F, R>,
}

impl<F: PwmChannel, R: PwmChannel> DriveService<F, R> {
    pub fn new(motor: MotorDriver<F, R>) -> Self {
        Self { motor }
    }

    /// Announce startup on the event stream.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            version: env!("CARGO_PKG_VERSION"),
        });
    }

    /// Apply a signed speed command and report the resulting state.
    ///
    /// One event per call, clamped or not; the event carries the raw
    /// requested value so overrange commands remain visible in the log.
    pub fn set_speed(&mut self, speed: i16, sink: &mut impl EventSink) {
        self.motor.set_speed(speed);
        sink.emit(&AppEvent::SpeedChanged {
            requested: speed,
            state: self.motor.state(),
        });
    }

    /// Stop the motor. Equivalent to `set_speed(0, sink)`.
    pub fn stop(&mut self, sink: &mut impl EventSink) {
        self.set_speed(0, sink);
    }

    pub fn state(&self) -> MotorState {
        self.motor.state()
    }
}
