use super::*;
use crate::draw::surface::DrawSurface;
use crate::foundation::core::Point;

fn canvas() -> Canvas {
    Canvas {
        width: 32,
        height: 24,
    }
}

#[test]
fn empty_list_with_clear_fills_frame() {
    let mut be = CpuBackend::new(CpuBackendOpts::default().with_clear_rgba(Some([10, 20, 30, 255])))
        .unwrap();
    let frame = be.render(canvas(), &DisplayList::new()).unwrap();
    assert_eq!(frame.width, 32);
    assert_eq!(frame.height, 24);
    assert_eq!(frame.data.len(), 32 * 24 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(0, 0), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(31, 23), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(32, 0), None);
}

#[test]
fn without_clear_frame_starts_transparent() {
    let mut be = CpuBackend::new(CpuBackendOpts::default()).unwrap();
    let frame = be.render(canvas(), &DisplayList::new()).unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn filled_shapes_land_where_transformed() {
    let mut list = DisplayList::new();
    list.fill(
        Affine::IDENTITY,
        kurbo::Rect::new(0.0, 0.0, 32.0, 24.0).into(),
        Rgba8::rgb(255, 0, 0),
    );
    list.fill(
        Affine::translate((24.0, 12.0)),
        Primitive::circle_d(Point::ORIGIN, 8.0),
        Rgba8::rgb(0, 0, 255),
    );
    let mut be = CpuBackend::new(CpuBackendOpts::default()).unwrap();
    let frame = be.render(canvas(), &list).unwrap();
    assert_eq!(frame.pixel(2, 2), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(23, 11), Some([0, 0, 255, 255]));
}

#[test]
fn strokes_are_rasterized() {
    let mut list = DisplayList::new();
    list.stroke(
        Affine::IDENTITY,
        kurbo::Line::new((0.0, 12.0), (32.0, 12.0)).into(),
        Rgba8::rgb(0, 255, 0),
        6.0,
    );
    let mut be = CpuBackend::new(CpuBackendOpts::default()).unwrap();
    let frame = be.render(canvas(), &list).unwrap();
    assert_eq!(frame.pixel(16, 11), Some([0, 255, 0, 255]));
    assert_eq!(frame.pixel(16, 1), Some([0, 0, 0, 0]));
}

#[test]
fn text_without_font_is_skipped_and_counted() {
    let mut list = DisplayList::new();
    crate::scene::ground::draw_hint(canvas(), "hello", &mut list);
    let mut be = CpuBackend::new(CpuBackendOpts::default()).unwrap();
    let frame = be.render(canvas(), &list).unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
    assert_eq!(be.skipped_text(), 1);
}

#[test]
fn invalid_font_bytes_fail_up_front() {
    let opts = CpuBackendOpts::default().with_font_bytes(Some(Arc::new(vec![1, 2, 3])));
    assert!(CpuBackend::new(opts).is_err());
}

#[test]
fn oversized_canvas_is_a_render_error() {
    let mut be = CpuBackend::new(CpuBackendOpts::default()).unwrap();
    let err = be
        .render(
            Canvas {
                width: 70_000,
                height: 4,
            },
            &DisplayList::new(),
        )
        .unwrap_err();
    assert!(err.to_string().contains("render error"));
}

#[test]
fn straight_conversion_undoes_premultiplication() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 32, 0, 128, 9, 9, 9, 255],
        premultiplied: true,
    };
    assert_eq!(frame.to_straight_rgba8(), vec![128, 64, 0, 128, 9, 9, 9, 255]);
}

fn stacked_translucent_rings() -> DisplayList {
    let mut list = DisplayList::new();
    for i in 1..=12 {
        list.fill(
            Affine::translate((16.0, 12.0)),
            Primitive::circle_d(Point::ORIGIN, 4.0 + 2.0 * f64::from(i)),
            Rgba8::rgba(240, 220, 255, 200 / i as u8),
        );
    }
    list
}

#[test]
fn translucent_layers_keep_opaque_clear_opaque() {
    let mut be = CpuBackend::new(CpuBackendOpts::default().with_clear_rgba(Some([0, 0, 0, 255])))
        .unwrap();
    let frame = be.render(canvas(), &stacked_translucent_rings()).unwrap();
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
    let centre = frame.pixel(16, 12).unwrap();
    assert!(centre[0] > 0);
}

#[test]
fn translucent_layers_on_transparent_clear_keep_partial_alpha() {
    let mut be = CpuBackend::new(CpuBackendOpts::default()).unwrap();
    let frame = be.render(canvas(), &stacked_translucent_rings()).unwrap();
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
    let a = frame.pixel(16, 12).unwrap()[3];
    assert!(a > 0 && a < 255);
}
