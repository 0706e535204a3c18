//! System configuration parameters
//!
//! All tunable parameters for the MotorBench demo drive sequence.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    // --- Ramp profile ---
    /// Speed change per ramp step (percentage points)
    pub ramp_step_percent: u8,
    /// Dwell between ramp steps (milliseconds)
    pub step_interval_ms: u32,
    /// Extra hold at each extremum and at the end of a cycle (milliseconds)
    pub hold_duration_ms: u32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            ramp_step_percent: 10,
            step_interval_ms: 500,
            hold_duration_ms: 2000,
        }
    }
}
