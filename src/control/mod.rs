//! Pure control-sequence generators, no I/O.

pub mod ramp;
