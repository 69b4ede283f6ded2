use std::collections::HashMap;

use super::*;

#[test]
fn defaults_follow_site_layout() {
    let cfg = SiteConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.entry_path(), PathBuf::from("./index.html"));
    assert_eq!(cfg.data_path(), PathBuf::from("./public/api/experiences.json"));
    assert_eq!(cfg.output_entry_path(), PathBuf::from("./dist/index.html"));
    assert_eq!(cfg.data_url_path(), "/api/experiences.json");
    assert_eq!(cfg.placeholder, "{{EXPERIENCES}}");
    assert_eq!(cfg.timeline_class, "experience-timeline");
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let cfg = SiteConfig::from_json_str(r#"{ "root": "site", "out_dir": "/tmp/out" }"#).unwrap();
    assert_eq!(cfg.entry_path(), PathBuf::from("site/index.html"));
    assert_eq!(cfg.output_entry_path(), PathBuf::from("/tmp/out/index.html"));
    assert_eq!(cfg.canvas_id, "background-canvas");
}

#[test]
fn unknown_fields_and_invalid_values_are_rejected() {
    assert!(SiteConfig::from_json_str(r#"{ "outdir": "x" }"#).is_err());
    let err = SiteConfig::from_json_str(r#"{ "timeline_class": "a b" }"#).unwrap_err();
    assert!(matches!(err, FolioError::Validation(_)));
    assert!(SiteConfig::from_json_str(r#"{ "canvas_id": " " }"#).is_err());
}

#[test]
fn out_dir_inside_public_dir_is_rejected_when_copying() {
    for json in [
        r#"{ "public_dir": "." }"#,
        r#"{ "public_dir": "site", "out_dir": "site/dist" }"#,
        r#"{ "public_dir": "public", "out_dir": "./public/../public/out" }"#,
        r#"{ "public_dir": "public", "out_dir": "public" }"#,
    ] {
        let err = SiteConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, FolioError::Validation(_)), "{json}");
        assert!(err.to_string().contains("inside public_dir"), "{json}");
    }

    SiteConfig::from_json_str(r#"{ "public_dir": ".", "copy_public": false }"#).unwrap();
    SiteConfig::from_json_str(r#"{ "public_dir": "public", "out_dir": "public/../dist" }"#)
        .unwrap();
    SiteConfig::from_json_str(r#"{ "public_dir": "pub", "out_dir": "public" }"#).unwrap();
}

#[test]
fn lexical_resolves_dot_segments() {
    assert_eq!(lexical(Path::new("./a/./b/../c")), PathBuf::from("a/c"));
    assert_eq!(lexical(Path::new("../x")), PathBuf::from("../x"));
    assert_eq!(lexical(Path::new(".")), PathBuf::new());
}

#[test]
fn env_overrides_apply_by_prefixed_name() {
    let vars: HashMap<&str, &str> = [
        ("FOLIO_OUT_DIR", "build"),
        ("FOLIO_EXPERIENCES_DATA", "/data/xp.json"),
        ("OUT_DIR", "ignored"),
    ]
    .into_iter()
    .collect();

    let mut cfg = SiteConfig::default();
    cfg.apply_overrides(|k| vars.get(k).map(|v| (*v).to_owned()))
        .unwrap();
    assert_eq!(cfg.out_dir, PathBuf::from("build"));
    assert_eq!(cfg.data_path(), PathBuf::from("./public/data/xp.json"));
    assert_eq!(cfg.data_url_path(), "/data/xp.json");
}

#[test]
fn env_override_into_public_dir_fails_validation() {
    let mut cfg = SiteConfig::default();
    let err = cfg
        .apply_overrides(|k| (k == "FOLIO_OUT_DIR").then(|| "public/dist".to_owned()))
        .unwrap_err();
    assert!(matches!(err, FolioError::Validation(_)));
}
