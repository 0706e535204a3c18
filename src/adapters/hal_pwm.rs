//! Bridge adapter for `embedded-hal` PWM implementations.
//!
//! Lets the motor driver run on any HAL that implements
//! [`SetDutyCycle`], e.g. a timer channel from another chip family or a
//! bench instrument shim. Write errors are ignored; the port has no
//! error path and the drivers in this class treat a failed duty write as
//! a missed update, not a fault.

use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::PwmChannel;

/// Wraps a [`SetDutyCycle`] implementor as a [`PwmChannel`].
pub struct HalPwmChannel<T> {
    inner: T,
}

impl<T: SetDutyCycle> HalPwmChannel<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Hand back the wrapped channel.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: SetDutyCycle> PwmChannel for HalPwmChannel<T> {
    fn set_duty_percent(&mut self, percent: u8) {
        self.inner.set_duty_cycle_percent(percent.min(100)).ok();
    }
}
