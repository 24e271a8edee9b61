use kurbo::{Rect, RoundedRect};

use crate::draw::primitive::Primitive;
use crate::draw::surface::DrawSurface;
use crate::foundation::core::{Affine, Canvas, Point, Rgba8};
use crate::foundation::math::map_range;
use crate::foundation::rng::Rng64;

/// Trees generated at startup.
pub const TREE_COUNT: usize = 14;
/// Triangular canopy layers per tree.
pub const CANOPY_LAYERS: u32 = 4;
/// Leaf dots drawn on trees with `detail`.
pub const LEAF_DOTS: usize = 12;

/// A stylized tree, fixed after generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tree {
    /// Horizontal position of the trunk.
    pub x: f64,
    /// Vertical anchor the tree is built around.
    pub base_y: f64,
    /// Trunk width before depth scaling.
    pub trunk_w: f64,
    /// Overall height before depth scaling.
    pub height: f64,
    /// Red channel of the canopy tint (the source sketch calls it hue).
    pub hue: f64,
    /// Whether leaf dots are drawn.
    pub detail: bool,
}

/// Spread [`TREE_COUNT`] trees across `canvas`, roughly evenly, with jitter.
pub fn generate_trees(canvas: Canvas, rng: &mut Rng64) -> Vec<Tree> {
    let last = (TREE_COUNT - 1) as f64;
    (0..TREE_COUNT)
        .map(|i| {
            let xpos = i as f64 / last * canvas.w();
            let x = xpos + rng.range(-100.0, 100.0);
            let base_y = canvas.h() * 0.75 + rng.range(-40.0, 40.0);
            let trunk_w = rng.range(20.0, 50.0);
            let height = rng.range(220.0, 420.0);
            let hue = rng.range(90.0, 140.0);
            let detail = rng.next_f64_01() > 0.6;
            Tree {
                x,
                base_y,
                trunk_w,
                height,
                hue,
                detail,
            }
        })
        .collect()
}

/// Depth factor for the `i`-th of `n` trees: 0.6 for the farthest, 1.0 for the nearest.
pub fn depth_for(i: usize, n: usize) -> f64 {
    map_range(i as f64, 0.0, n.saturating_sub(1) as f64, 0.6, 1.0)
}

/// Draw all trees back to front.
pub fn draw_trees(trees: &[Tree], surface: &mut dyn DrawSurface, rng: &mut Rng64) {
    for (i, t) in trees.iter().enumerate() {
        let depth = depth_for(i, trees.len());
        draw_tree(
            t,
            t.trunk_w * depth * 0.9,
            t.height * depth,
            depth,
            surface,
            rng,
        );
    }
}

fn draw_tree(
    tree: &Tree,
    trunk_w: f64,
    h: f64,
    depth: f64,
    surface: &mut dyn DrawSurface,
    rng: &mut Rng64,
) {
    let xf = Affine::translate((tree.x, tree.base_y));

    let trunk_h = h * 0.6;
    let trunk = Rect::from_center_size((0.0, h * 0.22), (trunk_w, trunk_h));
    surface.fill(
        xf,
        RoundedRect::from_rect(trunk, 12.0).into(),
        Rgba8::rgba(60, 30, 20, 220),
    );

    let layers = f64::from(CANOPY_LAYERS);
    for i in 0..CANOPY_LAYERS {
        let i = f64::from(i);
        let ly = -i * (h / (layers + 1.0)) - 20.0;
        let w = map_range(i, 0.0, layers - 1.0, h * 0.9, h * 0.35) * (0.8 + depth * 0.2);
        surface.fill(
            xf,
            Primitive::triangle(
                Point::new(-w * 0.5, ly + 40.0),
                Point::new(w * 0.5, ly + 40.0),
                Point::new(0.0, ly - (30.0 - i * 6.0)),
            ),
            Rgba8::from_f64(
                tree.hue - i * 6.0,
                150.0 - i * 10.0,
                80.0 - i * 4.0,
                200.0 - i * 30.0,
            ),
        );
    }

    if tree.detail {
        for _ in 0..LEAF_DOTS {
            let lx = rng.range(-h * 0.35, h * 0.35);
            let ly = rng.range(-h * 0.6, -20.0);
            let d = rng.range(8.0, 18.0);
            surface.fill(
                xf,
                Primitive::circle_d(Point::new(lx, ly), d),
                Rgba8::rgba(100, 200, 150, 40),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/trees.rs"]
mod tests;
