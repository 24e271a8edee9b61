use crate::character::Fairy;
use crate::draw::surface::DrawSurface;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::rng::Rng64;
use crate::input::pointer::{POINTER_MARGIN, PointerInput, clamp_to_canvas};
use crate::scene::ground::{draw_ground, draw_hint};
use crate::scene::sky::{Star, draw_mist, draw_sky, draw_stars, generate_stars};
use crate::scene::trees::{Tree, draw_trees, generate_trees};

/// Options for building a [`Forest`].
#[derive(Clone, Debug, PartialEq)]
pub struct ForestOpts {
    /// Seed for star and tree placement.
    pub seed: u64,
    /// Fairy start position as canvas fractions.
    pub fairy_start: [f64; 2],
    /// Fairy size multiplier.
    pub fairy_scale: f64,
    /// Hint line drawn bottom-right; `None` hides it.
    pub hint: Option<String>,
}

impl Default for ForestOpts {
    fn default() -> Self {
        Self {
            seed: 7,
            fairy_start: [0.55, 0.55],
            fairy_scale: 1.0,
            hint: Some(crate::scene::ground::HINT_TEXT.to_string()),
        }
    }
}

/// Composition root of the sketch: scene state created once, plus the fairy.
///
/// Owned by whoever drives frames and threaded explicitly into each [`Forest::frame`] call.
#[derive(Clone, Debug)]
pub struct Forest {
    canvas: Canvas,
    stars: Vec<Star>,
    trees: Vec<Tree>,
    fairy: Fairy,
    hint: Option<String>,
}

impl Forest {
    /// Generate the scene for `canvas`.
    pub fn new(canvas: Canvas, opts: &ForestOpts) -> Self {
        let mut rng = Rng64::new(opts.seed);
        let stars = generate_stars(canvas, &mut rng);
        let trees = generate_trees(canvas, &mut rng);
        let [fx, fy] = opts.fairy_start;
        let fairy = Fairy::new(canvas.at_fraction(fx, fy), opts.fairy_scale);
        Self {
            canvas,
            stars,
            trees,
            fairy,
            hint: opts.hint.clone(),
        }
    }

    /// Current canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// The fairy.
    pub fn fairy(&self) -> &Fairy {
        &self.fairy
    }

    /// Stars in draw order.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Trees, far to near.
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    /// Adopt a new canvas size.
    ///
    /// Star and tree placement is rescaled to the new bounds; the fairy is left alone and picks
    /// up the new clamp rectangle on the next frame.
    pub fn resize(&mut self, canvas: Canvas) {
        if canvas == self.canvas {
            return;
        }
        let sx = ratio(canvas.w(), self.canvas.w());
        let sy = ratio(canvas.h(), self.canvas.h());
        for s in &mut self.stars {
            s.pos = Point::new(s.pos.x * sx, s.pos.y * sy);
        }
        for t in &mut self.trees {
            t.x *= sx;
            t.base_y *= sy;
        }
        tracing::debug!(
            from_w = self.canvas.width,
            from_h = self.canvas.height,
            to_w = canvas.width,
            to_h = canvas.height,
            "forest resized"
        );
        self.canvas = canvas;
    }

    /// Draw one frame: background, then fairy update and render, then the hint.
    pub fn frame(
        &mut self,
        tick: u64,
        pointer: PointerInput,
        surface: &mut dyn DrawSurface,
        rng: &mut Rng64,
    ) {
        draw_sky(self.canvas, surface);
        draw_stars(&mut self.stars, tick, surface);
        draw_mist(self.canvas, tick, surface);
        draw_trees(&self.trees, surface, rng);
        draw_ground(self.canvas, tick, surface, rng);

        let target = clamp_to_canvas(pointer.position, self.canvas, POINTER_MARGIN);
        self.fairy.update(tick, target, pointer.pressed);
        self.fairy.render(surface, rng);

        if let Some(hint) = &self.hint {
            draw_hint(self.canvas, hint, surface);
        }
    }
}

fn ratio(new: f64, old: f64) -> f64 {
    if old == 0.0 { 1.0 } else { new / old }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/forest.rs"]
mod tests;
