//! Outbound application events.
//!
//! The [`DriveService`](super::service::DriveService) emits these through
//! the [`EventSink`](super::ports::EventSink) port. Adapters on the other
//! side decide what to do with them; the shipped adapter logs one line
//! per event to the serial console.

use crate::drivers::motor::MotorState;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The drive service has started (carries the firmware version).
    Started { version: &'static str },

    /// A speed command was applied. `requested` is the raw input before
    /// clamping; `state` is the driver state after dispatch.
    SpeedChanged { requested: i16, state: MotorState },
}
