use std::collections::BTreeMap;

use crate::draw::primitive::{
    DrawCmd, Paint, Primitive, TextAlignX, TextAlignY, TextRun, path_el_tag,
};
use crate::foundation::core::{Affine, Rgba8};
use crate::foundation::math::Fnv1a64;

/// Immediate-mode drawing capability handed to everything that draws.
///
/// Implementors receive fully resolved commands: no transform stack or "current colour" lives
/// behind this trait, callers pass both explicitly on every call.
pub trait DrawSurface {
    /// Accept one draw command.
    fn draw(&mut self, cmd: DrawCmd);

    /// Fill `primitive` under `transform`.
    fn fill(&mut self, transform: Affine, primitive: Primitive, color: Rgba8) {
        self.draw(DrawCmd {
            transform,
            primitive,
            paint: Paint::Fill(color),
        });
    }

    /// Stroke `primitive` under `transform`.
    fn stroke(&mut self, transform: Affine, primitive: Primitive, color: Rgba8, width: f64) {
        self.draw(DrawCmd {
            transform,
            primitive,
            paint: Paint::Stroke { color, width },
        });
    }

    /// Draw a line of filled text.
    fn text(&mut self, transform: Affine, run: TextRun, color: Rgba8) {
        self.fill(transform, Primitive::Text(run), color);
    }
}

/// Recorded draw commands for one frame, in back-to-front order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    cmds: Vec<DrawCmd>,
}

impl DisplayList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands.
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    /// `true` when nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Drop all commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Stable 64-bit fingerprint of the list's geometry, transforms and paints.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u64(self.cmds.len() as u64);
        for cmd in &self.cmds {
            for c in cmd.transform.as_coeffs() {
                h.write_f64(c);
            }
            match cmd.paint {
                Paint::Fill(c) => {
                    h.write_u8(0);
                    h.write_bytes(&[c.r, c.g, c.b, c.a]);
                }
                Paint::Stroke { color: c, width } => {
                    h.write_u8(1);
                    h.write_bytes(&[c.r, c.g, c.b, c.a]);
                    h.write_f64(width);
                }
            }
            h.write_bytes(cmd.primitive.kind_name().as_bytes());
            match &cmd.primitive {
                Primitive::Text(run) => {
                    h.write_bytes(run.text.as_bytes());
                    h.write_f64(run.anchor.x);
                    h.write_f64(run.anchor.y);
                    h.write_f64(f64::from(run.size_px));
                    h.write_u8(match run.align_x {
                        TextAlignX::Left => 0,
                        TextAlignX::Right => 1,
                    });
                    h.write_u8(match run.align_y {
                        TextAlignY::Top => 0,
                        TextAlignY::Bottom => 1,
                    });
                }
                other => {
                    if let Some(path) = other.to_path() {
                        for el in path.elements() {
                            h.write_u8(path_el_tag(el));
                            for p in el_points(el) {
                                h.write_f64(p.x);
                                h.write_f64(p.y);
                            }
                        }
                    }
                }
            }
        }
        h.finish()
    }

    /// Per-kind command counts, keyed `"<fill|stroke>.<kind>"`.
    pub fn op_counts(&self) -> BTreeMap<String, usize> {
        let mut out = BTreeMap::new();
        for cmd in &self.cmds {
            let paint = match cmd.paint {
                Paint::Fill(_) => "fill",
                Paint::Stroke { .. } => "stroke",
            };
            *out.entry(format!("{paint}.{}", cmd.primitive.kind_name()))
                .or_insert(0) += 1;
        }
        out
    }
}

impl DrawSurface for DisplayList {
    fn draw(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }
}

fn el_points(el: &kurbo::PathEl) -> impl Iterator<Item = kurbo::Point> {
    use kurbo::PathEl;
    let pts: smallvec::SmallVec<[kurbo::Point; 3]> = match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => smallvec::smallvec![p],
        PathEl::QuadTo(a, b) => smallvec::smallvec![a, b],
        PathEl::CurveTo(a, b, c) => smallvec::smallvec![a, b, c],
        PathEl::ClosePath => smallvec::SmallVec::new(),
    };
    pts.into_iter()
}

#[cfg(test)]
#[path = "../../tests/unit/draw/surface.rs"]
mod tests;
