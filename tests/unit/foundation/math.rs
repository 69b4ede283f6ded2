use super::*;

#[test]
fn cycle_progress_stays_in_unit_interval() {
    for t in [0.0, 1.0, 19_999.999, 20_000.0, 123_456.7, -1.0, -20_000.0, 1e15] {
        let p = cycle_progress(t, 20_000.0);
        assert!((0.0..1.0).contains(&p), "t={t} p={p}");
    }
    assert_eq!(cycle_progress(5_000.0, 20_000.0), 0.25);
    assert_eq!(cycle_progress(20_000.0, 20_000.0), 0.0);
}

#[test]
fn cycle_progress_degenerate_duration_is_zero() {
    assert_eq!(cycle_progress(10.0, 0.0), 0.0);
    assert_eq!(cycle_progress(10.0, -5.0), 0.0);
    assert_eq!(cycle_progress(f64::NAN, 10.0), 0.0);
}

#[test]
fn wrap_unit_handles_tiny_negatives() {
    assert_eq!(wrap_unit(-1e-18), 0.0);
    assert_eq!(wrap_unit(1.0), 0.0);
    assert!((wrap_unit(-0.25) - 0.75).abs() < 1e-12);
    assert!((wrap_unit(2.5) - 0.5).abs() < 1e-12);
}

