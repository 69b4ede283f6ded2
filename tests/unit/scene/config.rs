use super::*;

#[test]
fn default_scene_is_valid() {
    let scene = SceneConfig::default();
    scene.validate().unwrap();
    assert_eq!(scene.lights.len(), 2);
    assert_eq!(scene.lights[0].duration_ms, 20_000.0);
    assert_eq!(scene.lights[1].duration_ms, 30_000.0);
    assert_eq!(scene.particles.count, 100);
}

#[test]
fn partial_scene_file_keeps_defaults() {
    let scene = SceneConfig::from_json_str(r#"{ "seed": 9, "particles": { "count": 3 } }"#).unwrap();
    assert_eq!(scene.seed, 9);
    assert_eq!(scene.particles.count, 3);
    assert_eq!(scene.particles.size_min_px, 10.0);
    assert_eq!(scene.lights, default_lights());
}

#[test]
fn light_with_trajectory_parses() {
    let json = r#"{
        "lights": [{
            "duration_ms": 1000,
            "opacity": 0.4,
            "gradients": [{ "center": { "x": 0.5, "y": 0.5 }, "radius_px": 50,
                            "color": { "r": 1, "g": 2, "b": 3, "a": 0.5 } }],
            "trajectory": { "kind": "two_segment_drift", "midpoint": 0.4,
                            "peak": { "tx": 0.1, "ty": 0.0, "scale": 1.2 } }
        }]
    }"#;
    let scene = SceneConfig::from_json_str(json).unwrap();
    assert_eq!(scene.lights.len(), 1);
    assert_eq!(scene.lights[0].trajectory.breakpoints(), vec![0.4]);
}

#[test]
fn invalid_light_is_reported_with_index() {
    let json = r#"{
        "lights": [{
            "duration_ms": 0,
            "opacity": 0.4,
            "gradients": [],
            "trajectory": { "kind": "two_segment_drift", "midpoint": 0.5,
                            "peak": { "tx": 0.0, "ty": 0.0, "scale": 1.0 } }
        }]
    }"#;
    let err = SceneConfig::from_json_str(json).unwrap_err();
    assert!(err.to_string().contains("light 0"));
}

#[test]
fn malformed_scene_is_a_serde_error() {
    let err = SceneConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, FolioError::Serde(_)));
}
