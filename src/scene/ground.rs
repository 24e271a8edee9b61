use kurbo::{Rect, RoundedRect};

use crate::draw::primitive::{ArcMode, Primitive, TextAlignX, TextAlignY, TextRun};
use crate::draw::surface::DrawSurface;
use crate::foundation::core::{Affine, Canvas, Point, Rgba8};
use crate::foundation::math::sin_deg;
use crate::foundation::rng::Rng64;

/// Fraction of the canvas height where the ground starts.
pub const GROUND_LINE: f64 = 0.82;
/// Plant tufts along the ground.
pub const TUFTS: u32 = 28;
/// Chance that a tuft grows a mushroom in a given frame.
pub const MUSHROOM_CHANCE: f64 = 0.13;
/// Default hint line.
pub const HINT_TEXT: &str = "move mouse to guide the fairy \u{2022} click to make her sparkle";

/// Ground band, swaying tufts and the occasional mushroom.
pub fn draw_ground(canvas: Canvas, tick: u64, surface: &mut dyn DrawSurface, rng: &mut Rng64) {
    let (w, h) = (canvas.w(), canvas.h());
    let ground_y = h * GROUND_LINE;
    surface.fill(
        Affine::IDENTITY,
        Rect::new(0.0, ground_y, w, h + 100.0).into(),
        Rgba8::rgb(18, 45, 30),
    );

    let t = tick as f64;
    let last = f64::from(TUFTS - 1);
    for i in 0..TUFTS {
        let i = f64::from(i);
        let x = i / last * w + sin_deg((i + t * 0.3) * 0.4) * 12.0;
        let base = ground_y + rng.range(6.0, 18.0);
        let tuft_w = rng.range(6.0, 18.0);
        let tuft_h = rng.range(4.0, 10.0);
        surface.fill(
            Affine::IDENTITY,
            Primitive::ellipse_wh(Point::new(x, base), tuft_w, tuft_h),
            Rgba8::rgba(40, 80, 60, 230),
        );
        if rng.chance(MUSHROOM_CHANCE) {
            let mx = x + rng.range(-10.0, 10.0);
            let size = 6.0 + rng.range(2.0, 12.0);
            draw_mushroom(Point::new(mx, base - 10.0), size, surface);
        }
    }
}

/// A mushroom: chord cap over a rounded stem, anchored at the cap's base.
pub fn draw_mushroom(at: Point, size: f64, surface: &mut dyn DrawSurface) {
    let xf = Affine::translate(at.to_vec2());
    surface.fill(
        xf,
        Primitive::arc_wh(Point::ORIGIN, size * 2.0, size, 180.0, 360.0, ArcMode::Chord),
        Rgba8::rgba(255, 70, 110, 240),
    );
    let stem = Rect::new(
        -size * 0.12,
        -size * 0.05,
        -size * 0.12 + size * 0.25,
        -size * 0.05 + size * 0.9,
    );
    surface.fill(
        xf,
        RoundedRect::from_rect(stem, 4.0).into(),
        Rgba8::rgb(255, 255, 255),
    );
}

/// Bottom-right hint text.
pub fn draw_hint(canvas: Canvas, text: &str, surface: &mut dyn DrawSurface) {
    surface.text(
        Affine::IDENTITY,
        TextRun {
            text: text.to_string(),
            anchor: Point::new(canvas.w() - 12.0, canvas.h() - 12.0),
            size_px: 12.0,
            align_x: TextAlignX::Right,
            align_y: TextAlignY::Bottom,
        },
        Rgba8::rgba(255, 255, 255, 240),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/scene/ground.rs"]
mod tests;
