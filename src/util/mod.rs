//! Utility helpers shared across UI modules.
//!
//! Utility modules isolate pure math and browser/environment glue from
//! component logic so both stay small and the math stays testable.

pub mod easing;
pub mod scroll;
pub mod timestamp;
