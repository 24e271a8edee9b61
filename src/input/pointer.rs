use crate::foundation::core::{Canvas, FrameIndex, FrameRange, Point};
use crate::foundation::error::{GladeError, GladeResult};
use crate::foundation::math::{cos_deg, lerp, sin_deg};

/// Inset kept between the pointer target and the canvas edges.
pub const POINTER_MARGIN: f64 = 40.0;

/// Pointer state for one frame, as the host would report it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer position in canvas pixels.
    pub position: Point,
    /// Whether the button is held this frame.
    pub pressed: bool,
}

/// Clamp `p` into `canvas` inset by `margin` on every side.
///
/// On a canvas narrower (or shorter) than `2 * margin` the axis collapses to its centre line.
pub fn clamp_to_canvas(p: Point, canvas: Canvas, margin: f64) -> Point {
    fn axis(v: f64, len: f64, margin: f64) -> f64 {
        let lo = margin;
        let hi = len - margin;
        if lo > hi {
            return len * 0.5;
        }
        v.clamp(lo, hi)
    }
    Point::new(
        axis(p.x, canvas.w(), margin),
        axis(p.y, canvas.h(), margin),
    )
}

/// A pointer keyframe in canvas fractions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerKey {
    /// Frame the key applies to.
    pub frame: u64,
    /// Horizontal position as a fraction of the canvas width.
    pub x: f64,
    /// Vertical position as a fraction of the canvas height.
    pub y: f64,
}

/// Scripted pointer motion standing in for a live mouse. Coordinates are canvas fractions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerPath {
    /// Pointer parked at one spot.
    Fixed {
        /// Horizontal fraction.
        x: f64,
        /// Vertical fraction.
        y: f64,
    },
    /// Elliptical orbit, starting at angle 0 (rightmost point).
    Orbit {
        /// Centre as `[fx, fy]`.
        center: [f64; 2],
        /// Radii as `[fx, fy]`.
        radius: [f64; 2],
        /// Frames per revolution.
        period_frames: u64,
    },
    /// Linear interpolation between keys, holding the first and last keys outside their span.
    Keyframes {
        /// Keys in strictly increasing frame order.
        keys: Vec<PointerKey>,
    },
}

impl Default for PointerPath {
    fn default() -> Self {
        Self::Orbit {
            center: [0.5, 0.45],
            radius: [0.3, 0.2],
            period_frames: 240,
        }
    }
}

/// Pointer path plus the frame ranges during which the button is held.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerTrack {
    /// Pointer motion.
    #[serde(default)]
    pub path: PointerPath,
    /// Half-open `[start, end)` frame ranges with the button held.
    #[serde(default)]
    pub presses: Vec<[u64; 2]>,
}

impl PointerTrack {
    /// Check ranges and key ordering.
    pub fn validate(&self) -> GladeResult<()> {
        match &self.path {
            PointerPath::Fixed { x, y } => {
                if !x.is_finite() || !y.is_finite() {
                    return Err(GladeError::validation("fixed pointer must be finite"));
                }
            }
            PointerPath::Orbit {
                center,
                radius,
                period_frames,
            } => {
                if *period_frames == 0 {
                    return Err(GladeError::validation(
                        "orbit period_frames must be > 0",
                    ));
                }
                if center.iter().chain(radius.iter()).any(|v| !v.is_finite()) {
                    return Err(GladeError::validation("orbit center/radius must be finite"));
                }
            }
            PointerPath::Keyframes { keys } => {
                if keys.is_empty() {
                    return Err(GladeError::validation(
                        "keyframes pointer needs at least one key",
                    ));
                }
                if keys.windows(2).any(|w| w[0].frame >= w[1].frame) {
                    return Err(GladeError::validation(
                        "pointer keys must be in strictly increasing frame order",
                    ));
                }
                if keys.iter().any(|k| !k.x.is_finite() || !k.y.is_finite()) {
                    return Err(GladeError::validation("pointer keys must be finite"));
                }
            }
        }
        for [start, end] in &self.presses {
            FrameRange::new(FrameIndex(*start), FrameIndex(*end))?;
        }
        Ok(())
    }

    /// Pointer state at `frame` on `canvas`, before clamping.
    pub fn sample(&self, frame: FrameIndex, canvas: Canvas) -> PointerInput {
        let (fx, fy) = self.fraction_at(frame.0);
        let pressed = self
            .presses
            .iter()
            .any(|&[start, end]| start <= frame.0 && frame.0 < end);
        PointerInput {
            position: canvas.at_fraction(fx, fy),
            pressed,
        }
    }

    fn fraction_at(&self, frame: u64) -> (f64, f64) {
        match &self.path {
            PointerPath::Fixed { x, y } => (*x, *y),
            PointerPath::Orbit {
                center,
                radius,
                period_frames,
            } => {
                let period = (*period_frames).max(1);
                let deg = (frame % period) as f64 / period as f64 * 360.0;
                (
                    center[0] + radius[0] * cos_deg(deg),
                    center[1] + radius[1] * sin_deg(deg),
                )
            }
            PointerPath::Keyframes { keys } => {
                let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
                    return (0.5, 0.5);
                };
                if frame <= first.frame {
                    return (first.x, first.y);
                }
                if frame >= last.frame {
                    return (last.x, last.y);
                }
                let i = keys.partition_point(|k| k.frame <= frame);
                let (a, b) = (keys[i - 1], keys[i]);
                let t = (frame - a.frame) as f64 / (b.frame - a.frame) as f64;
                (lerp(a.x, b.x, t), lerp(a.y, b.y, t))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/pointer.rs"]
mod tests;
