use super::*;
use crate::input::pointer::PointerPath;

#[test]
fn empty_json_gives_defaults() {
    let cfg = SketchConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SketchConfig::default());
    assert_eq!(cfg.range().len_frames(), 300);
}

#[test]
fn partial_json_overrides_fields() {
    let cfg = SketchConfig::from_json(
        r#"{
            "canvas": { "width": 64, "height": 48 },
            "duration": 12,
            "seed": 99,
            "fairy": { "scale": 0.5 },
            "pointer": { "path": { "kind": "fixed", "x": 0.2, "y": 0.3 }, "presses": [[2, 4]] },
            "hint": null
        }"#,
    )
    .unwrap();
    assert_eq!(
        cfg.canvas,
        Canvas {
            width: 64,
            height: 48
        }
    );
    assert_eq!(cfg.seed, 99);
    assert_eq!(cfg.fairy.scale, 0.5);
    assert_eq!(cfg.fairy.start, [0.55, 0.55]);
    assert_eq!(cfg.pointer.path, PointerPath::Fixed { x: 0.2, y: 0.3 });
    assert!(cfg.hint.is_none());

    let opts = cfg.forest_opts();
    assert_eq!(opts.seed, 99);
    assert_eq!(opts.fairy_scale, 0.5);
}

#[test]
fn invalid_values_are_rejected() {
    for bad in [
        r#"{ "canvas": { "width": 0, "height": 10 } }"#,
        r#"{ "canvas": { "width": 70000, "height": 10 } }"#,
        r#"{ "fps": { "num": 30, "den": 0 } }"#,
        r#"{ "fairy": { "scale": 0 } }"#,
        r#"{ "pointer": { "path": { "kind": "orbit", "center": [0.5, 0.5], "radius": [0.1, 0.1], "period_frames": 0 } } }"#,
    ] {
        let err = SketchConfig::from_json(bad).unwrap_err();
        assert!(err.to_string().contains("validation error"), "{bad}: {err}");
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SketchConfig::from_json("{ not json").unwrap_err();
    assert!(err.to_string().contains("serialization error"));
}

#[test]
fn relative_font_resolves_against_config_dir() {
    let dir = std::env::temp_dir().join("fairyglade_config_font");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("sketch.json");
    std::fs::write(&path, r#"{ "font": "fonts/hint.ttf" }"#).unwrap();

    let cfg = SketchConfig::from_path(&path).unwrap();
    assert_eq!(cfg.font, Some(dir.join("fonts/hint.ttf")));
}

#[test]
fn missing_file_reports_path() {
    let err = SketchConfig::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("here.json"));
}
