//! Layered drawing of the fairy.
//!
//! Every layer is re-derived from the [`Fairy`] state on each call; nothing is cached between
//! frames. Randomness is only consumed by the sparkle layer and comes from the caller.

use kurbo::{BezPath, Line};
use smallvec::SmallVec;

use crate::character::fairy::{Fairy, SPARKLE_FRAMES};
use crate::draw::primitive::{ArcMode, Primitive};
use crate::draw::surface::DrawSurface;
use crate::foundation::core::{Affine, Point, Rgba8, Vec2};
use crate::foundation::math::{cos_deg, map_range, sin_deg};
use crate::foundation::rng::Rng64;

/// Number of glow rings in the halo.
pub const HALO_RINGS: u32 = 12;
/// Number of vein strokes per wing.
pub const WING_VEINS: usize = 4;
/// Particles drawn per sparkle frame.
pub const SPARKLE_COUNT: usize = 12;

const HALO_COLOR: Rgba8 = Rgba8::rgb(240, 220, 255);
const WING_FILL: Rgba8 = Rgba8::rgba(150, 220, 255, 120);
const WING_HIGHLIGHT: Rgba8 = Rgba8::rgba(255, 255, 255, 50);
const VEIN: Rgba8 = Rgba8::rgba(255, 255, 255, 40);
const TORSO: Rgba8 = Rgba8::rgb(220, 255, 230);
const DRESS: Rgba8 = Rgba8::rgba(170, 210, 255, 220);
const ARM: Rgba8 = Rgba8::rgba(240, 200, 200, 220);
const SKIN: Rgba8 = Rgba8::rgb(255, 240, 230);
const HAIR: Rgba8 = Rgba8::rgb(120, 60, 140);
const INK: Rgba8 = Rgba8::rgb(20, 30, 40);

const WING_Y_OFFSET: f64 = -8.0;

/// Which of the two wing passes is being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WingPass {
    /// Behind the body.
    Back,
    /// In front of the body, as a translucent highlight.
    Front,
}

/// One sparkle particle, relative to the draw anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
    /// Particle centre.
    pub center: Point,
    /// Dot diameter.
    pub diameter: f64,
    /// Blue channel of the dot fill.
    pub blue: f64,
}

impl Fairy {
    /// Draw the fairy onto `surface`. Call after [`Fairy::update`] in the same frame.
    pub fn render(&self, surface: &mut dyn DrawSurface, rng: &mut Rng64) {
        render(self, surface, rng);
    }
}

/// Draw every layer of `fairy` back to front.
pub fn render(fairy: &Fairy, surface: &mut dyn DrawSurface, rng: &mut Rng64) {
    let base = Affine::translate(fairy.draw_anchor().to_vec2());

    draw_halo(fairy, surface, base);
    draw_wings(fairy, surface, base, WingPass::Back);
    draw_body(fairy, surface, base * Affine::translate((0.0, 2.0)));
    draw_wings(fairy, surface, base, WingPass::Front);
    draw_face(fairy, surface, base);
    if fairy.is_sparkling() {
        draw_sparkles(fairy, surface, base, rng);
    }
}

fn draw_halo(fairy: &Fairy, surface: &mut dyn DrawSurface, base: Affine) {
    let size = fairy.size();
    for i in (1..=HALO_RINGS).rev() {
        let i = f64::from(i);
        let alpha = fairy.glow() / (i * 1.2);
        surface.fill(
            base,
            Primitive::circle_d(Point::new(0.0, -6.0), size * (1.0 + i * 0.35)),
            HALO_COLOR.with_alpha(alpha),
        );
    }
}

/// Local transform of one wing: mirrored rotation, then the shoulder offset.
pub fn wing_transform(fairy: &Fairy, side: f64) -> Affine {
    Affine::rotate((side * fairy.wing_phase_deg()).to_radians())
        * Affine::translate((side * fairy.size() * 0.24, WING_Y_OFFSET))
}

/// Closed wing outline for `side` (-1 left, +1 right).
pub fn wing_path(size: f64, side: f64) -> BezPath {
    let w = size * 0.9;
    let h = size * 1.1;
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.curve_to(
        (w * 0.15 * side, -h * 0.25),
        (w * 0.6 * side, -h * 0.6),
        (w * 0.4 * side, -h * 1.04),
    );
    p.curve_to(
        (w * 0.05 * side, -h * 0.86),
        (-w * 0.5 * side, -h * 0.38),
        (0.0, 0.0),
    );
    p.close_path();
    p
}

/// Vein strokes for `side`, shortest first.
pub fn vein_paths(size: f64, side: f64) -> [BezPath; WING_VEINS] {
    let w = size * 0.9;
    let h = size * 1.1;
    std::array::from_fn(|i| {
        let t = map_range(i as f64, 0.0, (WING_VEINS - 1) as f64, 0.2, 0.8);
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.curve_to(
            (w * 0.12 * side * t, -h * 0.18 * t),
            (w * 0.45 * side * t, -h * 0.45 * t),
            (w * 0.35 * side * t, -h * 0.8 * t),
        );
        p
    })
}

fn draw_wings(fairy: &Fairy, surface: &mut dyn DrawSurface, base: Affine, pass: WingPass) {
    let fill = match pass {
        WingPass::Back => WING_FILL,
        WingPass::Front => WING_HIGHLIGHT,
    };
    for side in [-1.0, 1.0] {
        let xf = base * wing_transform(fairy, side);
        surface.fill(xf, wing_path(fairy.size(), side).into(), fill);
        for vein in vein_paths(fairy.size(), side) {
            surface.stroke(xf, vein.into(), VEIN, 1.0);
        }
    }
}

fn draw_body(fairy: &Fairy, surface: &mut dyn DrawSurface, body: Affine) {
    let s = fairy.size();
    let t = fairy.tick() as f64;

    surface.fill(
        body,
        Primitive::ellipse_wh(Point::new(0.0, -6.0), s * 0.8, s),
        TORSO,
    );

    let sway_deg = sin_deg(t * 1.5) * 2.0;
    let dress_xf = body * Affine::translate((0.0, s * 0.25)) * Affine::rotate(sway_deg.to_radians());
    let mut dress = BezPath::new();
    dress.move_to((-s * 0.55, 0.0));
    dress.curve_to((-s * 0.2, s * 0.8), (s * 0.2, s * 0.8), (s * 0.55, 0.0));
    dress.curve_to((s * 0.2, s * 0.9), (-s * 0.2, s * 0.9), (-s * 0.55, 0.0));
    dress.close_path();
    surface.fill(dress_xf, dress.into(), DRESS);

    let swing = sin_deg(t * 2.0) * 2.0;
    surface.stroke(
        body,
        Line::new((-s * 0.22, -6.0), (-s * 0.5, 6.0 + swing)).into(),
        ARM,
        4.0,
    );
    surface.stroke(
        body,
        Line::new((s * 0.22, -6.0), (s * 0.5, 6.0 - swing)).into(),
        ARM,
        4.0,
    );
}

fn draw_face(fairy: &Fairy, surface: &mut dyn DrawSurface, base: Affine) {
    let s = fairy.size();
    surface.fill(
        base,
        Primitive::ellipse_wh(Point::new(0.0, -26.0), s * 0.42, s * 0.52),
        SKIN,
    );
    surface.fill(
        base * Affine::translate((-6.0, -34.0)),
        Primitive::arc_wh(Point::ORIGIN, s * 0.55, s * 0.65, 180.0, 360.0, ArcMode::Chord),
        HAIR,
    );
    for x in [-6.0, 6.0] {
        surface.fill(base, Primitive::ellipse_wh(Point::new(x, -28.0), 4.0, 4.0), INK);
    }
    surface.stroke(
        base,
        Primitive::arc_wh(Point::new(0.0, -22.0), 10.0, 6.0, 200.0, 340.0, ArcMode::Open),
        INK,
        1.2,
    );
}

/// Sample one frame's sparkle particles for a fairy of body `size`.
pub fn sample_sparkles(rng: &mut Rng64, size: f64) -> SmallVec<[Sparkle; SPARKLE_COUNT]> {
    (0..SPARKLE_COUNT)
        .map(|_| {
            let ang = rng.below(360.0);
            let rad = rng.range(6.0, size * 0.9);
            let diameter = rng.range(2.0, 8.0);
            let blue = rng.range(200.0, 255.0);
            Sparkle {
                center: Point::new(cos_deg(ang) * rad * 0.6, sin_deg(ang) * rad * 0.4 - 10.0),
                diameter,
                blue,
            }
        })
        .collect()
}

fn draw_sparkles(fairy: &Fairy, surface: &mut dyn DrawSurface, base: Affine, rng: &mut Rng64) {
    let fade = f64::from(fairy.sparkle_frames_remaining()) / f64::from(SPARKLE_FRAMES);
    let spike = Rgba8::rgb(255, 250, 180).with_alpha(200.0 * fade);
    for p in sample_sparkles(rng, fairy.size()) {
        surface.fill(
            base,
            Primitive::circle_d(p.center, p.diameter),
            Rgba8::from_f64(255.0, 250.0, p.blue, 220.0 * fade),
        );
        let arm = Vec2::new(p.diameter * 0.6, 0.0);
        let up = Vec2::new(0.0, p.diameter * 0.6);
        surface.stroke(base, Line::new(p.center - arm, p.center + arm).into(), spike, 1.0);
        surface.stroke(base, Line::new(p.center - up, p.center + up).into(), spike, 1.0);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/character/render.rs"]
mod tests;
