use super::*;

fn fairy_at(x: f64, y: f64) -> Fairy {
    Fairy::new(Point::new(x, y), 1.0)
}

#[test]
fn tick_zero_centered_pointer_idle() {
    let mut f = fairy_at(528.0, 297.0);
    f.update(0, Point::new(480.0, 270.0), false);
    assert_eq!(f.sparkle_frames_remaining(), 0);
    assert_eq!(f.wing_phase_deg(), 0.0);
    assert_eq!(f.bob(), 0.0);
    // 120 + 110 * (0.5 + 0.5 * sin 0)
    assert!((f.glow() - 175.0).abs() < 1e-12);
}

#[test]
fn wing_and_glow_stay_in_bounds() {
    let mut f = fairy_at(100.0, 100.0);
    for tick in 0..2000 {
        f.update(tick, Point::new(100.0, 100.0), false);
        assert!((-25.0..=25.0).contains(&f.wing_phase_deg()), "tick {tick}");
        assert!((120.0..=230.0).contains(&f.glow()), "tick {tick}");
        assert!(f.bob().abs() <= BOB_AMPLITUDE);
    }
}

#[test]
fn glow_reaches_both_extremes() {
    let mut f = fairy_at(0.0, 0.0);
    f.update(45, Point::ORIGIN, false);
    assert!((f.glow() - 230.0).abs() < 1e-9);
    f.update(135, Point::ORIGIN, false);
    assert!((f.glow() - 120.0).abs() < 1e-9);
}

#[test]
fn trigger_sets_exactly_thirty_then_counts_down() {
    let mut f = fairy_at(0.0, 0.0);
    f.update(10, Point::ORIGIN, true);
    assert_eq!(f.sparkle_frames_remaining(), SPARKLE_FRAMES);
    assert!(f.is_sparkling());

    for (i, tick) in (11..41).enumerate() {
        f.update(tick, Point::ORIGIN, false);
        assert_eq!(f.sparkle_frames_remaining(), SPARKLE_FRAMES - 1 - i as u32);
    }
    assert_eq!(f.sparkle_frames_remaining(), 0);

    f.update(41, Point::ORIGIN, false);
    assert_eq!(f.sparkle_frames_remaining(), 0);
    assert!(!f.is_sparkling());
}

#[test]
fn retrigger_restarts_without_accumulating() {
    let mut f = fairy_at(0.0, 0.0);
    f.update(0, Point::ORIGIN, true);
    for tick in 1..6 {
        f.update(tick, Point::ORIGIN, false);
    }
    assert_eq!(f.sparkle_frames_remaining(), 25);
    f.update(6, Point::ORIGIN, true);
    assert_eq!(f.sparkle_frames_remaining(), 30);
    f.update(7, Point::ORIGIN, true);
    assert_eq!(f.sparkle_frames_remaining(), 30);
}

#[test]
fn seek_converges_geometrically_without_overshoot() {
    let target = Point::new(40.0, 500.0);
    let mut f = fairy_at(900.0, 60.0);
    let mut prev = (target - f.position()).hypot();
    for tick in 0..200 {
        f.update(tick, target, false);
        let d = (target - f.position()).hypot();
        assert!(d < prev, "tick {tick}: {d} !< {prev}");
        assert!((d - prev * 0.95).abs() <= 1e-9 * prev.max(1.0));
        assert!(f.position().x >= target.x);
        assert!(f.position().y <= target.y);
        prev = d;
    }
}

#[test]
fn position_moves_a_bounded_step() {
    let mut f = fairy_at(0.0, 0.0);
    let before = f.position();
    f.update(1, Point::new(1000.0, 0.0), false);
    let step = (f.position() - before).hypot();
    assert!((step - 50.0).abs() < 1e-9);
}

#[test]
fn draw_anchor_applies_bob_to_baseline() {
    let mut f = fairy_at(10.0, 100.0);
    f.update(75, Point::new(10.0, 100.0), false);
    assert_eq!(f.baseline(), f.position().y);
    let expected = BOB_AMPLITUDE * sin_deg(75.0 * BOB_RATE_DEG);
    assert!((f.draw_anchor().y - (f.baseline() + expected)).abs() < 1e-12);
    assert_eq!(f.draw_anchor().x, f.position().x);
}

#[test]
fn scale_is_fixed() {
    let mut f = Fairy::new(Point::ORIGIN, 1.5);
    for tick in 0..10 {
        f.update(tick, Point::new(5.0, 5.0), tick % 2 == 0);
    }
    assert_eq!(f.visual_scale(), 1.5);
    assert_eq!(f.size(), 81.0);
}

#[test]
fn snapshot_reflects_state() {
    let mut f = fairy_at(3.0, 4.0);
    f.update(12, Point::new(3.0, 4.0), true);
    let s = f.snapshot();
    assert_eq!(s.tick, 12);
    assert_eq!(s.sparkle_frames_remaining, 30);
    assert_eq!(s.position, [3.0, 4.0]);
}
