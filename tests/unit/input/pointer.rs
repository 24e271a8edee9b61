use super::*;

fn canvas() -> Canvas {
    Canvas {
        width: 400,
        height: 200,
    }
}

#[test]
fn clamp_keeps_a_forty_pixel_inset() {
    let c = canvas();
    assert_eq!(
        clamp_to_canvas(Point::new(-10.0, 500.0), c, POINTER_MARGIN),
        Point::new(40.0, 160.0)
    );
    assert_eq!(
        clamp_to_canvas(Point::new(200.0, 100.0), c, POINTER_MARGIN),
        Point::new(200.0, 100.0)
    );
    assert_eq!(
        clamp_to_canvas(Point::new(1e9, -1e9), c, POINTER_MARGIN),
        Point::new(360.0, 40.0)
    );
}

#[test]
fn clamp_on_tiny_canvas_collapses_to_center() {
    let tiny = Canvas {
        width: 60,
        height: 200,
    };
    let p = clamp_to_canvas(Point::new(0.0, 0.0), tiny, POINTER_MARGIN);
    assert_eq!(p, Point::new(30.0, 40.0));
}

#[test]
fn fixed_path_samples_constant_point() {
    let track = PointerTrack {
        path: PointerPath::Fixed { x: 0.5, y: 0.25 },
        presses: vec![],
    };
    for f in [0, 10, 1000] {
        let s = track.sample(FrameIndex(f), canvas());
        assert_eq!(s.position, Point::new(200.0, 50.0));
        assert!(!s.pressed);
    }
}

#[test]
fn orbit_starts_rightmost_and_wraps() {
    let track = PointerTrack {
        path: PointerPath::Orbit {
            center: [0.5, 0.5],
            radius: [0.25, 0.25],
            period_frames: 100,
        },
        presses: vec![],
    };
    let p0 = track.sample(FrameIndex(0), canvas()).position;
    let p100 = track.sample(FrameIndex(100), canvas()).position;
    assert!((p0.x - 300.0).abs() < 1e-9);
    assert!((p0.y - 100.0).abs() < 1e-9);
    assert_eq!(p0, p100);
    let quarter = track.sample(FrameIndex(25), canvas()).position;
    assert!((quarter.y - 150.0).abs() < 1e-9);
}

#[test]
fn keyframes_interpolate_and_hold() {
    let track = PointerTrack {
        path: PointerPath::Keyframes {
            keys: vec![
                PointerKey {
                    frame: 10,
                    x: 0.0,
                    y: 0.0,
                },
                PointerKey {
                    frame: 20,
                    x: 1.0,
                    y: 0.5,
                },
            ],
        },
        presses: vec![],
    };
    assert_eq!(track.sample(FrameIndex(0), canvas()).position, Point::ORIGIN);
    assert_eq!(
        track.sample(FrameIndex(15), canvas()).position,
        Point::new(200.0, 50.0)
    );
    assert_eq!(
        track.sample(FrameIndex(99), canvas()).position,
        Point::new(400.0, 100.0)
    );
}

#[test]
fn presses_are_half_open_ranges() {
    let track = PointerTrack {
        path: PointerPath::default(),
        presses: vec![[10, 12], [40, 41]],
    };
    let pressed: Vec<u64> = (0..50)
        .filter(|&f| track.sample(FrameIndex(f), canvas()).pressed)
        .collect();
    assert_eq!(pressed, vec![10, 11, 40]);
}

#[test]
fn validate_rejects_bad_tracks() {
    let unordered = PointerTrack {
        path: PointerPath::Keyframes {
            keys: vec![
                PointerKey {
                    frame: 5,
                    x: 0.0,
                    y: 0.0,
                },
                PointerKey {
                    frame: 5,
                    x: 1.0,
                    y: 1.0,
                },
            ],
        },
        presses: vec![],
    };
    assert!(unordered.validate().is_err());

    let zero_period = PointerTrack {
        path: PointerPath::Orbit {
            center: [0.5, 0.5],
            radius: [0.1, 0.1],
            period_frames: 0,
        },
        presses: vec![],
    };
    assert!(zero_period.validate().is_err());

    let inverted_press = PointerTrack {
        path: PointerPath::Fixed { x: 0.5, y: 0.5 },
        presses: vec![[9, 3]],
    };
    assert!(inverted_press.validate().is_err());

    assert!(PointerTrack::default().validate().is_ok());
}

#[test]
fn track_json_uses_kind_tag() {
    let json = r#"{ "path": { "kind": "fixed", "x": 0.1, "y": 0.9 }, "presses": [[0, 3]] }"#;
    let track: PointerTrack = serde_json::from_str(json).unwrap();
    assert_eq!(track.path, PointerPath::Fixed { x: 0.1, y: 0.9 });
    assert_eq!(track.presses, vec![[0, 3]]);
}
