use super::*;

fn frame(w: u32, h: u32, rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: rgba.repeat((w * h) as usize),
        premultiplied: true,
    }
}

fn cfg(w: u32, h: u32) -> SinkConfig {
    SinkConfig {
        width: w,
        height: h,
        fps: Fps::new(30, 1).unwrap(),
    }
}

#[test]
fn in_memory_sink_captures_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2, 2)).unwrap();
    sink.push_frame(FrameIndex(0), &frame(2, 2, [1, 2, 3, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(1), &frame(2, 2, [4, 5, 6, 255]))
        .unwrap();
    sink.end().unwrap();
    assert!(sink.is_ended());
    assert_eq!(sink.config().unwrap().width, 2);
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1]);
}

#[test]
fn png_sequence_writes_numbered_files() {
    let dir = std::env::temp_dir().join("fairyglade_png_sequence");
    let _ = std::fs::remove_dir_all(&dir);
    let mut sink = PngSequenceSink::new(&dir, "frame_");
    sink.begin(cfg(3, 2)).unwrap();
    sink.push_frame(FrameIndex(7), &frame(3, 2, [0, 128, 0, 255]))
        .unwrap();
    sink.end().unwrap();

    let path = dir.join("frame_000007.png");
    assert_eq!(sink.written(), &[path.clone()]);
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(1, 1).0, [0, 128, 0, 255]);
}

#[test]
fn png_sequence_requires_begin() {
    let mut sink = PngSequenceSink::new(std::env::temp_dir(), "x");
    let err = sink
        .push_frame(FrameIndex(0), &frame(1, 1, [0, 0, 0, 255]))
        .unwrap_err();
    assert!(err.to_string().contains("not started"));
}
