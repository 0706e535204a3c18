//! Demo ramp sequence generator.
//!
//! Produces one full exercise cycle as a stream of (speed, dwell) steps:
//! forward ramp up, hold, ramp down, reverse ramp up, hold, ramp down,
//! final hold. Pure values, no sleeping; the caller decides how to wait
//! out each dwell, which keeps the whole sequence assertable in host
//! tests.
//!
//! Boundary speeds are re-emitted when a phase turns around (up ends at
//! 100, down starts at 100). The duty writes are idempotent, so the
//! repeat is harmless and keeps each phase a self-contained sweep.

use crate::config::DriveConfig;

/// One step of the demo cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampStep {
    /// Signed speed command for this step.
    pub speed: i16,
    /// How long to sit at this speed before the next step.
    pub dwell_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ForwardUp,
    ForwardDown,
    ReverseUp,
    ReverseDown,
    Done,
}

/// Iterator over one demo cycle. Construct a fresh one per cycle.
#[derive(Debug, Clone)]
pub struct DemoRamp {
    step: i16,
    step_interval_ms: u32,
    hold_ms: u32,
    phase: Phase,
    speed: i16,
}

impl DemoRamp {
    pub fn new(config: &DriveConfig) -> Self {
        Self {
            // A zero step would never reach the extremum; coerce to 1.
            step: i16::from(config.ramp_step_percent.max(1)),
            step_interval_ms: config.step_interval_ms,
            hold_ms: config.hold_duration_ms,
            phase: Phase::ForwardUp,
            speed: 0,
        }
    }

    fn dwell_for(&self, speed: i16) -> u32 {
        // Extremum of an up-ramp and the final zero get the extended hold.
        let held = match self.phase {
            Phase::ForwardUp => speed == 100,
            Phase::ReverseUp => speed == -100,
            Phase::ReverseDown => speed == 0,
            Phase::ForwardDown | Phase::Done => false,
        };
        if held {
            self.step_interval_ms + self.hold_ms
        } else {
            self.step_interval_ms
        }
    }
}

impl Iterator for DemoRamp {
    type Item = RampStep;

    fn next(&mut self) -> Option<RampStep> {
        let speed = self.speed;
        let step = RampStep {
            speed,
            dwell_ms: self.dwell_for(speed),
        };

        match self.phase {
            Phase::ForwardUp => {
                if speed == 100 {
                    self.phase = Phase::ForwardDown;
                } else {
                    self.speed = (speed + self.step).min(100);
                }
            }
            Phase::ForwardDown => {
                if speed == 0 {
                    self.phase = Phase::ReverseUp;
                } else {
                    self.speed = (speed - self.step).max(0);
                }
            }
            Phase::ReverseUp => {
                if speed == -100 {
                    self.phase = Phase::ReverseDown;
                } else {
                    self.speed = (speed - self.step).max(-100);
                }
            }
            Phase::ReverseDown => {
                if speed == 0 {
                    self.phase = Phase::Done;
                } else {
                    self.speed = (speed + self.step).min(0);
                }
            }
            Phase::Done => return None,
        }

        Some(step)
    }
}
