//! Frame sinks: where rendered frames go once they leave the rasterizer.

pub mod ffmpeg;
pub mod sink;
