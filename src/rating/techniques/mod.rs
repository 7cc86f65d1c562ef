//! Human solving techniques, one module per pattern family.
//!
//! Each module exposes a detector working on an immutable candidate map
//! and an applier that executes the detected deductions. Detectors report
//! every instance of their pattern; appliers return how many placements or
//! eliminations actually happened, which may be zero when all targets were
//! already gone.

pub(crate) mod fish;
pub(crate) mod hidden_singles;
pub(crate) mod naked_pairs;
pub(crate) mod naked_singles;
pub(crate) mod pointing_pairs;
pub(crate) mod xy_wing;
