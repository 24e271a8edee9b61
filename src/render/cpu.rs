use std::sync::Arc;

use crate::draw::primitive::{DrawCmd, Paint, Primitive, TextAlignX, TextAlignY, TextRun};
use crate::draw::surface::DisplayList;
use crate::foundation::core::{Affine, Canvas, Rgba8, Vec2};
use crate::foundation::error::{GladeError, GladeResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::text::{TextBrushRgba8, TextLayoutEngine};

/// Options for the CPU backend.
#[derive(Clone, Debug, Default)]
pub struct CpuBackendOpts {
    /// If set, the frame is cleared to this straight RGBA8 colour before drawing.
    pub clear_rgba: Option<[u8; 4]>,
    /// Font used for text commands. Text is skipped when absent.
    pub font_bytes: Option<Arc<Vec<u8>>>,
}

impl CpuBackendOpts {
    /// Return options with a configured clear color.
    pub fn with_clear_rgba(mut self, clear: Option<[u8; 4]>) -> Self {
        self.clear_rgba = clear;
        self
    }

    /// Return options with a font for text commands.
    pub fn with_font_bytes(mut self, font: Option<Arc<Vec<u8>>>) -> Self {
        self.font_bytes = font;
        self
    }
}

struct TextCache {
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
}

/// CPU backend powered by `vello_cpu`.
pub struct CpuBackend {
    clear_rgba: Option<[u8; 4]>,
    ctx: Option<vello_cpu::RenderContext>,
    text: Option<TextCache>,
    skipped_text: u64,
}

impl CpuBackend {
    /// Build a backend, registering the font up front when one is given.
    pub fn new(opts: CpuBackendOpts) -> GladeResult<Self> {
        let text = match opts.font_bytes {
            Some(bytes) => {
                let engine = TextLayoutEngine::new(&bytes)?;
                let font = vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                    0,
                );
                Some(TextCache { engine, font })
            }
            None => None,
        };
        Ok(Self {
            clear_rgba: opts.clear_rgba,
            ctx: None,
            text,
            skipped_text: 0,
        })
    }

    /// Text commands dropped so far because no font was configured.
    pub fn skipped_text(&self) -> u64 {
        self.skipped_text
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> GladeResult<R>,
    ) -> GladeResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn draw_cmd(&mut self, cmd: &DrawCmd, ctx: &mut vello_cpu::RenderContext) -> GladeResult<()> {
        if let Primitive::Text(run) = &cmd.primitive {
            return self.draw_text(cmd.transform, run, cmd.paint.color(), ctx);
        }
        let Some(path) = cmd.primitive.to_path() else {
            return Ok(());
        };
        let cpu_path = bezpath_to_cpu(&path);
        ctx.set_transform(affine_to_cpu(cmd.transform));
        match cmd.paint {
            Paint::Fill(c) => {
                ctx.set_paint(color_to_cpu(c));
                ctx.fill_path(&cpu_path);
            }
            Paint::Stroke { color, width } => {
                ctx.set_stroke(
                    vello_cpu::kurbo::Stroke::new(width).with_caps(vello_cpu::kurbo::Cap::Round),
                );
                ctx.set_paint(color_to_cpu(color));
                ctx.stroke_path(&cpu_path);
            }
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        transform: Affine,
        run: &TextRun,
        color: Rgba8,
        ctx: &mut vello_cpu::RenderContext,
    ) -> GladeResult<()> {
        let Some(text) = self.text.as_mut() else {
            self.skipped_text += 1;
            return Ok(());
        };
        let brush = TextBrushRgba8 {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        };
        let layout = text.engine.layout_line(&run.text, run.size_px, brush)?;

        let w = f64::from(layout.width());
        let h = f64::from(layout.height());
        let dx = match run.align_x {
            TextAlignX::Left => 0.0,
            TextAlignX::Right => -w,
        };
        let dy = match run.align_y {
            TextAlignY::Top => 0.0,
            TextAlignY::Bottom => -h,
        };
        let origin = run.anchor.to_vec2() + Vec2::new(dx, dy);
        ctx.set_transform(affine_to_cpu(transform * Affine::translate(origin)));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let b = glyph_run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(b.r, b.g, b.b, b.a));
                let glyphs = glyph_run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&text.font)
                    .font_size(glyph_run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }
}

impl RenderBackend for CpuBackend {
    fn render(&mut self, canvas: Canvas, list: &DisplayList) -> GladeResult<FrameRGBA> {
        let w: u16 = canvas
            .width
            .try_into()
            .map_err(|_| GladeError::render("canvas width exceeds u16"))?;
        let h: u16 = canvas
            .height
            .try_into()
            .map_err(|_| GladeError::render("canvas height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(GladeError::render("canvas width/height must be > 0"));
        }

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        let clear = self.clear_rgba;
        let skipped_before = self.skipped_text;
        self.with_ctx_mut(w, h, |this, ctx| {
            if let Some([r, g, b, a]) = clear {
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(w),
                    f64::from(h),
                ));
            }
            for cmd in list.cmds() {
                this.draw_cmd(cmd, ctx)?;
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;
        if self.skipped_text > skipped_before {
            tracing::debug!(
                skipped = self.skipped_text - skipped_before,
                "text skipped: no font configured"
            );
        }

        let mut data = pixmap.data_as_u8_slice().to_vec();
        if matches!(clear, Some([_, _, _, 255])) {
            seal_alpha(&mut data);
        }
        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data,
            premultiplied: true,
        })
    }
}

/// Force full coverage after drawing onto an opaque clear.
///
/// The u8 pipeline loses a little alpha to rounding each time a translucent layer lands on an
/// opaque pixel, which would otherwise leave see-through holes in exported frames.
fn seal_alpha(premul: &mut [u8]) {
    for px in premul.chunks_exact_mut(4) {
        px[3] = 255;
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &crate::foundation::core::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
