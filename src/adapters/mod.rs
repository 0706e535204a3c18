//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements   | Connects to               |
//! |------------|--------------|---------------------------|
//! | `ledc`     | `PwmChannel` | ESP32 LEDC peripheral     |
//! | `hal_pwm`  | `PwmChannel` | any `embedded-hal` PWM    |
//! | `log_sink` | `EventSink`  | Serial log output         |

pub mod hal_pwm;
pub mod ledc;
pub mod log_sink;
