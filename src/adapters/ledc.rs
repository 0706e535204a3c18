//! LEDC-backed PWM channel adapter.
//!
//! Thin handle over one of the channels configured by
//! [`hw_init`](crate::drivers::hw_init). Converts percent duty to the
//! timer's 8-bit range and writes it. On non-espidf targets the
//! underlying write is a no-op stub.

use crate::app::ports::PwmChannel;
use crate::drivers::hw_init;

/// Handle to a configured LEDC channel.
pub struct LedcChannel {
    channel: u32,
}

impl LedcChannel {
    /// The forward (RPWM) channel.
    pub fn forward() -> Self {
        Self {
            channel: hw_init::LEDC_CH_FORWARD,
        }
    }

    /// The reverse (LPWM) channel.
    pub fn reverse() -> Self {
        Self {
            channel: hw_init::LEDC_CH_REVERSE,
        }
    }
}

impl PwmChannel for LedcChannel {
    fn set_duty_percent(&mut self, percent: u8) {
        hw_init::ledc_set(self.channel, duty_from_percent(percent));
    }
}

fn duty_from_percent(percent: u8) -> u8 {
    let percent = percent.min(100);
    ((percent as u16) * 255 / 100) as u8
}
