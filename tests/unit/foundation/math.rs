use super::*;

#[test]
fn degree_trig_matches_known_angles() {
    assert!(sin_deg(0.0).abs() < 1e-12);
    assert!((sin_deg(90.0) - 1.0).abs() < 1e-12);
    assert!((cos_deg(180.0) + 1.0).abs() < 1e-12);
    assert!((sin_deg(-30.0) + 0.5).abs() < 1e-12);
}

#[test]
fn map_range_is_linear_and_unclamped() {
    assert_eq!(map_range(0.5, 0.0, 1.0, 10.0, 20.0), 15.0);
    assert_eq!(map_range(2.0, 0.0, 1.0, 10.0, 20.0), 30.0);
    assert_eq!(map_range(3.0, 1.0, 1.0, 7.0, 9.0), 7.0);
    assert_eq!(lerp(20.0, 50.0, 1.0), 50.0);
}

#[test]
fn fnv1a64_matches_reference_vectors() {
    let h = Fnv1a64::new_default();
    assert_eq!(h.finish(), 0xcbf2_9ce4_8422_2325);

    let mut h = Fnv1a64::new_default();
    h.write_bytes(b"a");
    assert_eq!(h.finish(), 0xaf63_dc4c_8601_ec8c);
}

#[test]
fn fnv1a64_distinguishes_signed_zero() {
    let mut a = Fnv1a64::new_default();
    a.write_f64(0.0);
    let mut b = Fnv1a64::new_default();
    b.write_f64(-0.0);
    assert_ne!(a.finish(), b.finish());
}
