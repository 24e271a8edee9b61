use kurbo::Rect;

use crate::draw::primitive::Primitive;
use crate::draw::surface::DrawSurface;
use crate::foundation::core::{Affine, Canvas, Point, Rgba8};
use crate::foundation::math::{lerp, map_range, sin_deg};
use crate::foundation::rng::Rng64;

/// Stars generated at startup.
pub const STAR_COUNT: usize = 120;
const STAR_RADIUS_MIN: f64 = 0.5;
const STAR_RADIUS_MAX: f64 = 2.2;
const STAR_JITTER: f64 = 0.02;
const MIST_BANDS: u32 = 6;

/// A twinkling star. Only `radius` changes after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Centre on the canvas.
    pub pos: Point,
    /// Current size; drawn as the circle's diameter.
    pub radius: f64,
    /// Twinkle rate in degrees per tick.
    pub twinkle: f64,
}

impl Star {
    /// Lower bound of the jittered radius.
    pub const RADIUS_FLOOR: f64 = STAR_RADIUS_MIN * 0.5;
    /// Upper bound of the jittered radius.
    pub const RADIUS_CEIL: f64 = STAR_RADIUS_MAX * 1.5;

    /// Apply this frame's radius jitter.
    pub fn twinkle_at(&mut self, tick: u64) {
        self.radius += sin_deg(tick as f64 * self.twinkle) * STAR_JITTER;
        self.radius = self.radius.clamp(Self::RADIUS_FLOOR, Self::RADIUS_CEIL);
    }

    /// Fill alpha for the current radius.
    pub fn alpha(&self) -> f64 {
        map_range(self.radius, STAR_RADIUS_MIN, STAR_RADIUS_MAX, 80.0, 255.0)
    }
}

/// Scatter [`STAR_COUNT`] stars over the top half of `canvas`.
pub fn generate_stars(canvas: Canvas, rng: &mut Rng64) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| {
            let x = rng.below(canvas.w());
            let y = rng.below(canvas.h() * 0.5);
            let radius = rng.range(STAR_RADIUS_MIN, STAR_RADIUS_MAX);
            let twinkle = rng.range(0.01, 0.08);
            Star {
                pos: Point::new(x, y),
                radius,
                twinkle,
            }
        })
        .collect()
}

/// Sky colour at normalized height `t` (0 top, 1 bottom).
pub fn sky_color(t: f64) -> Rgba8 {
    Rgba8::from_f64(lerp(20.0, 50.0, t), lerp(20.0, 60.0, t), lerp(40.0, 80.0, t), 255.0)
}

/// Vertical gradient, one pixel row at a time.
pub fn draw_sky(canvas: Canvas, surface: &mut dyn DrawSurface) {
    let h = canvas.h();
    for row in 0..canvas.height {
        let y = f64::from(row);
        let t = map_range(y, 0.0, h, 0.0, 1.0);
        surface.fill(
            Affine::IDENTITY,
            Rect::new(0.0, y, canvas.w(), y + 1.0).into(),
            sky_color(t),
        );
    }
}

/// Twinkle and draw every star.
pub fn draw_stars(stars: &mut [Star], tick: u64, surface: &mut dyn DrawSurface) {
    for s in stars.iter_mut() {
        s.twinkle_at(tick);
        surface.fill(
            Affine::IDENTITY,
            Primitive::circle_d(s.pos, s.radius),
            Rgba8::rgb(255, 255, 255).with_alpha(s.alpha()),
        );
    }
}

/// Drifting mist bands above the ground line.
pub fn draw_mist(canvas: Canvas, tick: u64, surface: &mut dyn DrawSurface) {
    let (w, h) = (canvas.w(), canvas.h());
    let t = tick as f64;
    for i in 0..MIST_BANDS {
        let i = f64::from(i);
        let band_y = h * (0.55 + i * 0.06);
        let drift = sin_deg(t * 0.6 + i * 30.0) * 8.0;
        surface.fill(
            Affine::IDENTITY,
            Primitive::ellipse_wh(
                Point::new(w * 0.5, band_y + drift),
                w * (0.9 - i * 0.08),
                120.0 + i * 30.0,
            ),
            Rgba8::rgb(200, 230, 255).with_alpha(18.0 + i * 8.0),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sky.rs"]
mod tests;
