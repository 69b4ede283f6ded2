use super::*;

const EPS: f64 = 1e-6;

fn close(a: Pose, b: Pose) -> bool {
    (a.tx - b.tx).abs() < EPS && (a.ty - b.ty).abs() < EPS && (a.scale - b.scale).abs() < EPS
}

#[test]
fn every_progress_yields_finite_pose() {
    for traj in [Trajectory::BREATHING_DRIFT, Trajectory::SWELL_DRIFT] {
        for i in 0..10_000 {
            let pose = traj.evaluate(i as f64 / 10_000.0);
            assert!(pose.tx.is_finite());
            assert!(pose.ty.is_finite());
            assert!(pose.scale.is_finite());
        }
    }
}

#[test]
fn continuous_at_internal_boundaries() {
    for traj in [Trajectory::BREATHING_DRIFT, Trajectory::SWELL_DRIFT] {
        for b in traj.breakpoints() {
            let below = traj.evaluate(b - 1e-9);
            let at = traj.evaluate(b);
            assert!(close(below, at), "{traj:?} jumps at {b}: {below:?} vs {at:?}");
        }
    }
}

#[test]
fn cycle_wraps_back_to_rest() {
    for traj in [Trajectory::BREATHING_DRIFT, Trajectory::SWELL_DRIFT] {
        assert!(close(traj.evaluate(0.0), Pose::REST));
        assert!(close(traj.evaluate(1.0 - 1e-9), Pose::REST));
        assert!(close(traj.evaluate(1.0), Pose::REST));
    }
}

#[test]
fn breathing_drift_hits_key_poses() {
    let t = Trajectory::BREATHING_DRIFT;
    assert!(close(t.evaluate(0.33), Pose::new(0.15, 0.15, 1.25)));
    assert!(close(t.evaluate(0.66), Pose::new(-0.15, -0.15, 0.85)));
    let mid = t.evaluate(0.165);
    assert!(close(mid, Pose::new(0.075, 0.075, 1.125)));
}

#[test]
fn swell_drift_peaks_at_midpoint() {
    let t = Trajectory::SWELL_DRIFT;
    assert!(close(t.evaluate(0.5), Pose::new(0.25, -0.25, 1.45)));
    assert!(close(t.evaluate(0.75), Pose::new(0.125, -0.125, 1.225)));
}

#[test]
fn validate_rejects_unordered_breaks() {
    let bad = Trajectory::ThreeSegmentDrift {
        first_break: 0.7,
        second_break: 0.3,
        peak: Pose::REST,
        trough: Pose::REST,
    };
    assert!(bad.validate().is_err());

    let edge = Trajectory::TwoSegmentDrift {
        midpoint: 1.0,
        peak: Pose::REST,
    };
    assert!(edge.validate().is_err());

    assert!(Trajectory::BREATHING_DRIFT.validate().is_ok());
    assert!(Trajectory::SWELL_DRIFT.validate().is_ok());
}

#[test]
fn serde_uses_kind_tag() {
    let json = serde_json::to_value(Trajectory::SWELL_DRIFT).unwrap();
    assert_eq!(json["kind"], "two_segment_drift");
    let back: Trajectory = serde_json::from_value(json).unwrap();
    assert_eq!(back, Trajectory::SWELL_DRIFT);
}
