//! GPIO / peripheral pin assignments for the MotorBench main board.
//!
//! Single source of truth; every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// H-bridge module (BTS7960 class, dual PWM inputs)
// ---------------------------------------------------------------------------

/// LEDC PWM output: RPWM, forward half-bridge input.
pub const MOTOR_RPWM_GPIO: i32 = 4;
/// LEDC PWM output: LPWM, reverse half-bridge input.
pub const MOTOR_LPWM_GPIO: i32 = 5;

// R_EN and L_EN on the bridge module are strapped to 3V3 on the carrier
// board. They are not software-controlled; the bridge conducts whenever
// either PWM input is active.

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits). 8-bit gives 0 - 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the motor bridge (1 kHz, module-compatible).
pub const MOTOR_PWM_FREQ_HZ: u32 = 1_000;
