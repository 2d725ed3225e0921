use super::*;

#[test]
fn curve_starts_at_zero_and_ends_at_one() {
    assert_eq!(progress_at(0.0, 1000.0), 0.0);
    assert_eq!(progress_at(1000.0, 1000.0), 1.0);
}

#[test]
fn progress_clamps_outside_the_duration() {
    assert_eq!(progress_at(-50.0, 1000.0), 0.0);
    assert_eq!(progress_at(5000.0, 1000.0), 1.0);
}

#[test]
fn ease_out_front_loads_the_motion() {
    // Ease-out covers more than half the distance by the halfway point.
    let halfway = progress_at(500.0, 1000.0);
    assert!(halfway > 0.5, "got {halfway}");
    assert!(halfway < 1.0);
}

#[test]
fn progress_is_monotonic() {
    let mut last = 0.0;
    for step in 0..=100 {
        let now = progress_at(f64::from(step) * 10.0, 1000.0);
        assert!(now >= last, "regressed at step {step}");
        last = now;
    }
}

#[test]
fn zero_duration_is_immediately_complete() {
    assert_eq!(progress_at(0.0, 0.0), 1.0);
    assert_eq!(progress_at(0.0, -100.0), 1.0);
}
