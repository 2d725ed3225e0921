//! Deterministic progress curve for the loading overlay.
//!
//! The overlay samples this each timer tick: progress is a pure function of
//! elapsed time over the fixed total duration, independent of any render
//! loop, so the bar advances identically regardless of frame timing.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Cubic ease-out over a normalized input. Values outside `0..=1` clamp.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inverted = 1.0 - t;
    1.0 - inverted * inverted * inverted
}

/// Eased progress fraction in `0..=1` for a point in time. Non-positive
/// durations are treated as already complete.
#[must_use]
pub fn progress_at(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ease_out_cubic(elapsed_ms / duration_ms)
}
