//! Mock hardware adapters for integration tests.
//!
//! Records every duty write and emitted event so tests can assert on the
//! full command history without touching real GPIO/PWM registers.

use std::cell::RefCell;
use std::rc::Rc;

use motorbench::app::events::AppEvent;
use motorbench::app::ports::{EventSink, PwmChannel};

// ── Recording PWM channel ─────────────────────────────────────

/// Fake PWM channel whose write history stays readable after the channel
/// is moved into a driver.
#[derive(Clone)]
pub struct MockPwm {
    writes: Rc<RefCell<Vec<u8>>>,
}

#[allow(dead_code)]
impl MockPwm {
    pub fn new() -> Self {
        Self {
            writes: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Duty currently on the pin (last write), 0 before any write.
    pub fn duty(&self) -> u8 {
        self.writes.borrow().last().copied().unwrap_or(0)
    }

    /// Every duty value written, in order.
    pub fn history(&self) -> Vec<u8> {
        self.writes.borrow().clone()
    }
}

impl PwmChannel for MockPwm {
    fn set_duty_percent(&mut self, percent: u8) {
        self.writes.borrow_mut().push(percent);
    }
}

// ── Recording event sink ──────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn last(&self) -> Option<&AppEvent> {
        self.events.last()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
