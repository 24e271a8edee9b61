use kurbo::{BezPath, Circle, Ellipse, Line, PathEl, Rect, RoundedRect, Shape as _};

use crate::foundation::core::{Affine, Point, Rgba8, Vec2};

/// Flattening tolerance used when shapes are converted to paths.
pub const PATH_TOLERANCE: f64 = 0.1;

/// How an elliptical arc is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcMode {
    /// Only the curve itself.
    Open,
    /// Curve closed by the straight chord between its end points.
    Chord,
}

/// Elliptical arc with angles in degrees, measured clockwise on a y-down canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcShape {
    /// Ellipse centre.
    pub center: Point,
    /// Ellipse radii.
    pub radii: Vec2,
    /// Start angle in degrees.
    pub start_deg: f64,
    /// End angle in degrees (`>= start_deg`).
    pub end_deg: f64,
    /// Closing mode.
    pub mode: ArcMode,
}

impl ArcShape {
    /// Point on the ellipse at `deg`.
    pub fn point_at(&self, deg: f64) -> Point {
        let t = deg.to_radians();
        Point::new(
            self.center.x + self.radii.x * t.cos(),
            self.center.y + self.radii.y * t.sin(),
        )
    }

    fn to_path(self, tolerance: f64) -> BezPath {
        let arc = kurbo::Arc {
            center: self.center,
            radii: self.radii,
            start_angle: self.start_deg.to_radians(),
            sweep_angle: (self.end_deg - self.start_deg).to_radians(),
            x_rotation: 0.0,
        };
        let mut path = BezPath::new();
        path.move_to(self.point_at(self.start_deg));
        path.extend(arc.append_iter(tolerance));
        if self.mode == ArcMode::Chord {
            path.close_path();
        }
        path
    }
}

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlignX {
    /// Anchor is the left edge.
    Left,
    /// Anchor is the right edge.
    Right,
}

/// Vertical text anchoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlignY {
    /// Anchor is the top edge.
    Top,
    /// Anchor is the bottom edge.
    Bottom,
}

/// A single line of text anchored at a point.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// UTF-8 text.
    pub text: String,
    /// Anchor point in local coordinates.
    pub anchor: Point,
    /// Font size in pixels.
    pub size_px: f32,
    /// Horizontal anchoring.
    pub align_x: TextAlignX,
    /// Vertical anchoring.
    pub align_y: TextAlignY,
}

/// Geometry of one draw command.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Circle.
    Circle(Circle),
    /// Axis-aligned ellipse.
    Ellipse(Ellipse),
    /// Rectangle.
    Rect(Rect),
    /// Rectangle with rounded corners.
    RoundedRect(RoundedRect),
    /// Straight segment.
    Line(Line),
    /// Elliptical arc.
    Arc(ArcShape),
    /// Free-form Bézier path.
    Path(BezPath),
    /// Text line.
    Text(TextRun),
}

impl Primitive {
    /// Circle from a p5-style centre and diameter.
    pub fn circle_d(center: Point, diameter: f64) -> Self {
        Self::Circle(Circle::new(center, diameter.abs() * 0.5))
    }

    /// Ellipse from a p5-style centre and full width/height.
    pub fn ellipse_wh(center: Point, w: f64, h: f64) -> Self {
        Self::Ellipse(Ellipse::new(center, Vec2::new(w.abs() * 0.5, h.abs() * 0.5), 0.0))
    }

    /// Closed triangle.
    pub fn triangle(a: Point, b: Point, c: Point) -> Self {
        let mut p = BezPath::new();
        p.move_to(a);
        p.line_to(b);
        p.line_to(c);
        p.close_path();
        Self::Path(p)
    }

    /// Arc from a p5-style centre, full width/height and degree angles.
    pub fn arc_wh(center: Point, w: f64, h: f64, start_deg: f64, end_deg: f64, mode: ArcMode) -> Self {
        Self::Arc(ArcShape {
            center,
            radii: Vec2::new(w.abs() * 0.5, h.abs() * 0.5),
            start_deg,
            end_deg,
            mode,
        })
    }

    /// Short stable name of the primitive kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Ellipse(_) => "ellipse",
            Self::Rect(_) => "rect",
            Self::RoundedRect(_) => "rounded_rect",
            Self::Line(_) => "line",
            Self::Arc(_) => "arc",
            Self::Path(_) => "path",
            Self::Text(_) => "text",
        }
    }

    /// Outline of the primitive; `None` for text.
    pub fn to_path(&self) -> Option<BezPath> {
        let path = match self {
            Self::Circle(c) => c.to_path(PATH_TOLERANCE),
            Self::Ellipse(e) => e.to_path(PATH_TOLERANCE),
            Self::Rect(r) => r.to_path(PATH_TOLERANCE),
            Self::RoundedRect(r) => r.to_path(PATH_TOLERANCE),
            Self::Line(l) => {
                let mut p = BezPath::new();
                p.move_to(l.p0);
                p.line_to(l.p1);
                p
            }
            Self::Arc(a) => a.to_path(PATH_TOLERANCE),
            Self::Path(p) => p.clone(),
            Self::Text(_) => return None,
        };
        Some(path)
    }
}

impl From<Circle> for Primitive {
    fn from(v: Circle) -> Self {
        Self::Circle(v)
    }
}

impl From<Ellipse> for Primitive {
    fn from(v: Ellipse) -> Self {
        Self::Ellipse(v)
    }
}

impl From<Rect> for Primitive {
    fn from(v: Rect) -> Self {
        Self::Rect(v)
    }
}

impl From<RoundedRect> for Primitive {
    fn from(v: RoundedRect) -> Self {
        Self::RoundedRect(v)
    }
}

impl From<Line> for Primitive {
    fn from(v: Line) -> Self {
        Self::Line(v)
    }
}

impl From<BezPath> for Primitive {
    fn from(v: BezPath) -> Self {
        Self::Path(v)
    }
}

/// Fill or stroke paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Fill the interior.
    Fill(Rgba8),
    /// Stroke the outline with round caps.
    Stroke {
        /// Stroke colour.
        color: Rgba8,
        /// Stroke width in local units.
        width: f64,
    },
}

impl Paint {
    /// Paint colour.
    pub fn color(self) -> Rgba8 {
        match self {
            Self::Fill(c) => c,
            Self::Stroke { color, .. } => color,
        }
    }
}

/// One immediate-mode draw call, with its transform made explicit.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCmd {
    /// Local-to-canvas transform.
    pub transform: Affine,
    /// Geometry.
    pub primitive: Primitive,
    /// Paint.
    pub paint: Paint,
}

pub(crate) fn path_el_tag(el: &PathEl) -> u8 {
    match el {
        PathEl::MoveTo(_) => 0,
        PathEl::LineTo(_) => 1,
        PathEl::QuadTo(..) => 2,
        PathEl::CurveTo(..) => 3,
        PathEl::ClosePath => 4,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/primitive.rs"]
mod tests;
