//! Port traits, the boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DriveService (domain)
//! ```
//!
//! Driven adapters (PWM channels, event sinks) implement these traits.
//! The [`DriveService`](super::service::DriveService) and
//! [`MotorDriver`](crate::drivers::motor::MotorDriver) consume them via
//! generics, so the domain core never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// PWM channel port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// One hardware PWM output, pre-configured for frequency and polarity.
///
/// Frequency (1 kHz) and polarity (active-high) are fixed when the
/// peripheral is brought up; the only runtime operation is the duty
/// write. Implementations saturate values above 100.
pub trait PwmChannel {
    /// Set the output duty cycle in percent (0-100).
    fn set_duty_percent(&mut self, percent: u8);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log, a test
/// recorder, a future telemetry channel).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
