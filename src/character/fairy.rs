use crate::foundation::core::{Point, Vec2};
use crate::foundation::math::sin_deg;

/// Vertical bob amplitude in pixels.
pub const BOB_AMPLITUDE: f64 = 8.0;
/// Bob rate in degrees per tick.
pub const BOB_RATE_DEG: f64 = 1.2;
/// Fraction of the remaining distance to the pointer covered each update.
pub const SEEK_RATE: f64 = 0.05;
/// Peak wing rotation in degrees.
pub const WING_AMPLITUDE_DEG: f64 = 25.0;
/// Wing flutter rate in degrees per tick.
pub const WING_RATE_DEG: f64 = 8.0;
/// Lowest glow intensity.
pub const GLOW_BASE: f64 = 120.0;
/// Glow swing above [`GLOW_BASE`].
pub const GLOW_SPAN: f64 = 110.0;
/// Glow pulse rate in degrees per tick.
pub const GLOW_RATE_DEG: f64 = 2.0;
/// Length of the sparkle window in frames.
pub const SPARKLE_FRAMES: u32 = 30;
/// Body size in pixels at scale 1.
pub const BASE_SIZE: f64 = 54.0;

/// The animated fairy: an explicit state struct advanced once per frame by [`Fairy::update`].
///
/// `position` is the seek anchor; it only ever moves a fixed fraction of the way toward the
/// pointer target, so it never jumps. The bob is kept apart from it and applied to the draw
/// anchor, which leaves the seek filter's convergence untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Fairy {
    position: Point,
    visual_scale: f64,
    bob: f64,
    wing_phase_deg: f64,
    glow: f64,
    sparkle_frames_remaining: u32,
    tick: u64,
}

/// Serializable view of the fairy's state, used by diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FairySnapshot {
    /// Tick of the latest update.
    pub tick: u64,
    /// Seek anchor.
    pub position: [f64; 2],
    /// Where the body is drawn this frame.
    pub draw_anchor: [f64; 2],
    /// Wing rotation in degrees.
    pub wing_phase_deg: f64,
    /// Glow intensity.
    pub glow: f64,
    /// Remaining sparkle frames.
    pub sparkle_frames_remaining: u32,
}

impl Fairy {
    /// Place a fairy at `start` with a fixed `visual_scale`.
    ///
    /// Derived values start at their tick-0 state so a fairy can be drawn before its first
    /// update.
    pub fn new(start: Point, visual_scale: f64) -> Self {
        let mut fairy = Self {
            position: start,
            visual_scale,
            bob: 0.0,
            wing_phase_deg: 0.0,
            glow: 0.0,
            sparkle_frames_remaining: 0,
            tick: 0,
        };
        fairy.derive_phases(0);
        fairy
    }

    /// Advance one frame.
    ///
    /// `pointer` must already be clamped into the canvas by the caller. `pointer_active` is the
    /// "pressed this frame" trigger for the sparkle window.
    pub fn update(&mut self, tick: u64, pointer: Point, pointer_active: bool) {
        self.derive_phases(tick);

        let dir: Vec2 = (pointer - self.position) * SEEK_RATE;
        self.position += dir;

        if self.sparkle_frames_remaining > 0 {
            self.sparkle_frames_remaining -= 1;
        }
        if pointer_active {
            self.sparkle_frames_remaining = SPARKLE_FRAMES;
        }
    }

    fn derive_phases(&mut self, tick: u64) {
        let t = tick as f64;
        self.tick = tick;
        self.bob = BOB_AMPLITUDE * sin_deg(t * BOB_RATE_DEG);
        self.wing_phase_deg = WING_AMPLITUDE_DEG * sin_deg(t * WING_RATE_DEG);
        self.glow = GLOW_BASE + GLOW_SPAN * (0.5 + 0.5 * sin_deg(t * GLOW_RATE_DEG));
    }

    /// Seek anchor.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Vertical resting coordinate the bob oscillates around.
    pub fn baseline(&self) -> f64 {
        self.position.y
    }

    /// Current bob offset.
    pub fn bob(&self) -> f64 {
        self.bob
    }

    /// Point the body is drawn around this frame.
    pub fn draw_anchor(&self) -> Point {
        Point::new(self.position.x, self.position.y + self.bob)
    }

    /// Uniform size multiplier.
    pub fn visual_scale(&self) -> f64 {
        self.visual_scale
    }

    /// Body size in pixels.
    pub fn size(&self) -> f64 {
        BASE_SIZE * self.visual_scale
    }

    /// Wing rotation in degrees, within `[-25, 25]`.
    pub fn wing_phase_deg(&self) -> f64 {
        self.wing_phase_deg
    }

    /// Glow intensity, within `[120, 230]`.
    pub fn glow(&self) -> f64 {
        self.glow
    }

    /// Frames left in the sparkle window.
    pub fn sparkle_frames_remaining(&self) -> u32 {
        self.sparkle_frames_remaining
    }

    /// `true` while the sparkle window is open.
    pub fn is_sparkling(&self) -> bool {
        self.sparkle_frames_remaining > 0
    }

    /// Tick of the latest update.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Diagnostic snapshot.
    pub fn snapshot(&self) -> FairySnapshot {
        let anchor = self.draw_anchor();
        FairySnapshot {
            tick: self.tick,
            position: [self.position.x, self.position.y],
            draw_anchor: [anchor.x, anchor.y],
            wing_phase_deg: self.wing_phase_deg,
            glow: self.glow,
            sparkle_frames_remaining: self.sparkle_frames_remaining,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/character/fairy.rs"]
mod tests;
