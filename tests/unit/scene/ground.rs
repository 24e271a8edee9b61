use super::*;
use crate::draw::surface::DisplayList;

fn canvas() -> Canvas {
    Canvas {
        width: 400,
        height: 300,
    }
}

#[test]
fn ground_band_starts_at_ground_line() {
    let mut list = DisplayList::new();
    draw_ground(canvas(), 0, &mut list, &mut Rng64::new(4));
    let Primitive::Rect(r) = &list.cmds()[0].primitive else {
        panic!("ground must start with the band rect");
    };
    assert!((r.y0 - 246.0).abs() < 1e-9);
    assert!(r.y1 > 300.0);

    let tufts = list
        .cmds()
        .iter()
        .filter(|c| c.primitive.kind_name() == "ellipse")
        .count();
    assert_eq!(tufts, TUFTS as usize);
    let mushroom_parts = list.len() - 1 - tufts;
    assert_eq!(mushroom_parts % 2, 0);
}

#[test]
fn ground_is_deterministic_for_a_given_rng() {
    let mut a = DisplayList::new();
    let mut b = DisplayList::new();
    draw_ground(canvas(), 9, &mut a, &mut Rng64::new(21));
    draw_ground(canvas(), 9, &mut b, &mut Rng64::new(21));
    assert_eq!(a, b);
}

#[test]
fn mushroom_is_cap_then_stem() {
    let mut list = DisplayList::new();
    draw_mushroom(Point::new(50.0, 60.0), 10.0, &mut list);
    assert_eq!(list.len(), 2);
    assert_eq!(list.cmds()[0].primitive.kind_name(), "arc");
    assert_eq!(list.cmds()[1].primitive.kind_name(), "rounded_rect");
    assert_eq!(list.cmds()[0].transform, Affine::translate((50.0, 60.0)));
}

#[test]
fn hint_is_anchored_bottom_right() {
    let mut list = DisplayList::new();
    draw_hint(canvas(), HINT_TEXT, &mut list);
    let Primitive::Text(run) = &list.cmds()[0].primitive else {
        panic!("expected text");
    };
    assert_eq!(run.anchor, Point::new(388.0, 288.0));
    assert_eq!(run.align_x, TextAlignX::Right);
    assert_eq!(run.align_y, TextAlignY::Bottom);
    assert!(run.text.contains("sparkle"));
}
