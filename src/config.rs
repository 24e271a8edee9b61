//! Sketch configuration, loaded from JSON with every field optional.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{GladeError, GladeResult};
use crate::input::pointer::PointerTrack;
use crate::scene::forest::ForestOpts;

/// Fairy placement and size.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FairyConfig {
    /// Start position as canvas fractions `[fx, fy]`.
    pub start: [f64; 2],
    /// Uniform size multiplier.
    pub scale: f64,
}

impl Default for FairyConfig {
    fn default() -> Self {
        Self {
            start: [0.55, 0.55],
            scale: 1.0,
        }
    }
}

/// Everything needed to drive a sketch session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Output canvas.
    pub canvas: Canvas,
    /// Frame rate used for encoding.
    pub fps: Fps,
    /// Number of frames in a full render.
    pub duration: u64,
    /// Seed for scene generation and per-frame jitter.
    pub seed: u64,
    /// Fairy setup.
    pub fairy: FairyConfig,
    /// Scripted pointer.
    pub pointer: PointerTrack,
    /// Hint line; `null` hides it.
    pub hint: Option<String>,
    /// Font file used to rasterize the hint. Without it the hint is skipped at raster time.
    pub font: Option<PathBuf>,
    /// Colour the frame is cleared to before drawing (straight RGBA8).
    pub clear_rgba: [u8; 4],
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 960,
                height: 540,
            },
            fps: Fps { num: 30, den: 1 },
            duration: 300,
            seed: 7,
            fairy: FairyConfig::default(),
            pointer: PointerTrack::default(),
            hint: Some(crate::scene::ground::HINT_TEXT.to_string()),
            font: None,
            clear_rgba: [0, 0, 0, 255],
        }
    }
}

impl SketchConfig {
    /// Read and validate a JSON config file.
    ///
    /// A relative `font` path is resolved against the config file's directory.
    pub fn from_path(path: &Path) -> GladeResult<Self> {
        use anyhow::Context as _;

        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let mut cfg = Self::from_reader(BufReader::new(f))?;
        if let Some(font) = cfg.font.as_mut()
            && font.is_relative()
            && let Some(dir) = path.parent()
        {
            *font = dir.join(&*font);
        }
        Ok(cfg)
    }

    /// Parse and validate JSON from a reader.
    pub fn from_reader(r: impl std::io::Read) -> GladeResult<Self> {
        let cfg: Self = serde_json::from_reader(r).map_err(|e| GladeError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate JSON from a string.
    pub fn from_json(s: &str) -> GladeResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Check the invariants the session relies on.
    pub fn validate(&self) -> GladeResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(GladeError::validation("canvas width/height must be > 0"));
        }
        if self.canvas.width > u32::from(u16::MAX) || self.canvas.height > u32::from(u16::MAX) {
            return Err(GladeError::validation(
                "canvas width/height must fit in u16 for the CPU rasterizer",
            ));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.fairy.scale.is_finite() || self.fairy.scale <= 0.0 {
            return Err(GladeError::validation("fairy scale must be finite and > 0"));
        }
        if self.fairy.start.iter().any(|v| !v.is_finite()) {
            return Err(GladeError::validation("fairy start must be finite"));
        }
        self.pointer.validate()
    }

    /// Full render range `[0, duration)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration),
        }
    }

    /// Scene options derived from this config.
    pub fn forest_opts(&self) -> ForestOpts {
        ForestOpts {
            seed: self.seed,
            fairy_start: self.fairy.start,
            fairy_scale: self.fairy.scale,
            hint: self.hint.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
