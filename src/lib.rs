//! Fairyglade renders a procedural night forest with a fairy that follows the pointer.
//!
//! The sketch is immediate-mode: every frame the scene is redrawn from scratch onto a
//! [`DrawSurface`]. The usual flow is:
//!
//! - Load a [`SketchConfig`] (or use the defaults)
//! - Create a [`SketchSession`]
//! - Advance frames to get [`DisplayList`]s, or render them through a [`RenderBackend`] into a
//!   [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

/// The fairy character.
pub mod character;
/// JSON sketch configuration.
pub mod config;
/// Drawing primitives and surfaces.
pub mod draw;
/// Frame sinks (PNG sequence, ffmpeg MP4, in-memory).
pub mod encode;
/// Pointer input.
pub mod input;
pub mod render;
/// Forest backdrop and composition root.
pub mod scene;
/// Session-oriented frame driver.
pub mod session;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8, Vec2,
};
pub use crate::foundation::error::{GladeError, GladeResult};
pub use crate::foundation::math::{cos_deg, lerp, map_range, sin_deg};
pub use crate::foundation::rng::Rng64;

pub use crate::character::{Fairy, FairySnapshot};
pub use crate::config::{FairyConfig, SketchConfig};
pub use crate::draw::primitive::{DrawCmd, Paint, Primitive};
pub use crate::draw::surface::{DisplayList, DrawSurface};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::input::{PointerInput, PointerPath, PointerTrack};
pub use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, create_backend};
pub use crate::render::cpu::{CpuBackend, CpuBackendOpts};
pub use crate::scene::{Forest, ForestOpts};
pub use crate::session::sketch_session::{RenderStats, SketchSession};
