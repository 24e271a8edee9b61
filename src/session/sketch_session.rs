use std::sync::Arc;

use crate::config::SketchConfig;
use crate::draw::primitive::DrawCmd;
use crate::draw::surface::{DisplayList, DrawSurface};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{GladeError, GladeResult};
use crate::foundation::rng::Rng64;
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::cpu::CpuBackendOpts;
use crate::scene::forest::Forest;

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames in the requested range.
    pub frames_total: u64,
    /// Frames rasterized and pushed to the sink.
    pub frames_rendered: u64,
    /// Frames stepped without rasterizing to reach the range start.
    pub frames_simulated: u64,
}

/// Drives a [`Forest`] through consecutive frames.
///
/// The simulation is sequential: the fairy's position at frame `n` depends on every frame
/// before it, so frames can only be requested in increasing order. Skipped frames are still
/// simulated, just not rasterized.
pub struct SketchSession {
    config: SketchConfig,
    forest: Forest,
    next: FrameIndex,
    list: DisplayList,
}

impl SketchSession {
    /// Validate `config` and build the scene from its seed.
    pub fn new(config: SketchConfig) -> GladeResult<Self> {
        config.validate()?;
        let forest = Forest::new(config.canvas, &config.forest_opts());
        tracing::debug!(
            width = config.canvas.width,
            height = config.canvas.height,
            seed = config.seed,
            "session created"
        );
        Ok(Self {
            config,
            forest,
            next: FrameIndex(0),
            list: DisplayList::new(),
        })
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Index of the frame the next [`advance`](Self::advance) call produces.
    pub fn next_frame(&self) -> FrameIndex {
        self.next
    }

    /// Run one frame and return its index with the recorded display list.
    pub fn advance(&mut self) -> (FrameIndex, &DisplayList) {
        let idx = self.next;
        let mut list = std::mem::take(&mut self.list);
        list.clear();
        self.step(&mut list);
        self.list = list;
        (idx, &self.list)
    }

    /// Simulate frames up to (not including) `frame` without recording them.
    ///
    /// Returns how many frames were stepped.
    pub fn fast_forward(&mut self, frame: FrameIndex) -> GladeResult<u64> {
        if frame < self.next {
            return Err(GladeError::validation(format!(
                "frame {} already passed (next is {})",
                frame.0, self.next.0
            )));
        }
        let skipped = frame.0 - self.next.0;
        while self.next < frame {
            self.step(&mut Discard);
        }
        Ok(skipped)
    }

    /// Rasterize `frame`, simulating any frames between the current position and it.
    #[tracing::instrument(level = "debug", skip_all, fields(frame = frame.0))]
    pub fn render_frame(
        &mut self,
        frame: FrameIndex,
        backend: &mut dyn RenderBackend,
    ) -> GladeResult<FrameRGBA> {
        self.fast_forward(frame)?;
        let canvas = self.config.canvas;
        let (_, list) = self.advance();
        backend.render(canvas, list)
    }

    /// Render `range` into `sink` in increasing frame order.
    #[tracing::instrument(level = "debug", skip(self, backend, sink))]
    pub fn render_range(
        &mut self,
        range: FrameRange,
        backend: &mut dyn RenderBackend,
        sink: &mut dyn FrameSink,
    ) -> GladeResult<RenderStats> {
        if range.is_empty() {
            return Err(GladeError::validation("render range must be non-empty"));
        }
        let frames_simulated = self.fast_forward(range.start)?;

        sink.begin(SinkConfig {
            width: self.config.canvas.width,
            height: self.config.canvas.height,
            fps: self.config.fps,
        })?;
        let mut frames_rendered = 0u64;
        for idx in range.iter() {
            let frame = self.render_frame(idx, backend)?;
            sink.push_frame(idx, &frame)?;
            frames_rendered += 1;
        }
        sink.end()?;

        let stats = RenderStats {
            frames_total: range.len_frames(),
            frames_rendered,
            frames_simulated,
        };
        tracing::info!(
            frames = stats.frames_rendered,
            skipped = stats.frames_simulated,
            "range rendered"
        );
        Ok(stats)
    }

    /// CPU backend options for this config: clear colour plus the font file, if any.
    pub fn backend_opts(&self) -> GladeResult<CpuBackendOpts> {
        use anyhow::Context as _;

        let font_bytes = match &self.config.font {
            Some(path) => Some(Arc::new(
                std::fs::read(path)
                    .with_context(|| format!("read font '{}'", path.display()))?,
            )),
            None => None,
        };
        Ok(CpuBackendOpts::default()
            .with_clear_rgba(Some(self.config.clear_rgba))
            .with_font_bytes(font_bytes))
    }

    fn step(&mut self, surface: &mut dyn DrawSurface) {
        let tick = self.next.0;
        let pointer = self.config.pointer.sample(self.next, self.config.canvas);
        let mut rng = Rng64::for_frame(self.config.seed, tick);
        self.forest.frame(tick, pointer, surface, &mut rng);
        self.next = FrameIndex(tick + 1);
    }
}

/// Surface that drops every command; used when frames only need simulating.
struct Discard;

impl DrawSurface for Discard {
    fn draw(&mut self, _cmd: DrawCmd) {}
}

#[cfg(test)]
#[path = "../../tests/unit/session/sketch_session.rs"]
mod tests;
