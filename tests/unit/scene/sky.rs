use super::*;
use crate::draw::surface::DisplayList;

fn canvas() -> Canvas {
    Canvas {
        width: 320,
        height: 180,
    }
}

#[test]
fn stars_are_generated_within_bounds() {
    let stars = generate_stars(canvas(), &mut Rng64::new(3));
    assert_eq!(stars.len(), STAR_COUNT);
    for s in &stars {
        assert!((0.0..320.0).contains(&s.pos.x));
        assert!((0.0..90.0).contains(&s.pos.y));
        assert!((0.5..2.2).contains(&s.radius));
        assert!((0.01..0.08).contains(&s.twinkle));
    }
}

#[test]
fn twinkle_jitter_is_small_and_bounded() {
    let mut star = Star {
        pos: Point::ORIGIN,
        radius: 1.0,
        twinkle: 0.05,
    };
    let before = star.radius;
    star.twinkle_at(1000);
    assert!((star.radius - before).abs() <= STAR_JITTER + 1e-12);

    for tick in 0..50_000 {
        star.twinkle_at(tick);
        assert!((Star::RADIUS_FLOOR..=Star::RADIUS_CEIL).contains(&star.radius));
    }
}

#[test]
fn star_alpha_tracks_radius() {
    let small = Star {
        pos: Point::ORIGIN,
        radius: 0.5,
        twinkle: 0.01,
    };
    let big = Star { radius: 2.2, ..small };
    assert!((small.alpha() - 80.0).abs() < 1e-9);
    assert!((big.alpha() - 255.0).abs() < 1e-9);
}

#[test]
fn sky_gradient_has_one_row_per_pixel() {
    let mut list = DisplayList::new();
    draw_sky(canvas(), &mut list);
    assert_eq!(list.len(), 180);
    assert_eq!(list.cmds()[0].paint.color(), Rgba8::rgb(20, 20, 40));
    assert_eq!(sky_color(1.0), Rgba8::rgb(50, 60, 80));
}

#[test]
fn mist_draws_six_translucent_bands() {
    let mut list = DisplayList::new();
    draw_mist(canvas(), 40, &mut list);
    assert_eq!(list.len(), 6);
    let alphas: Vec<u8> = list.cmds().iter().map(|c| c.paint.color().a).collect();
    assert_eq!(alphas, vec![18, 26, 34, 42, 50, 58]);
}
