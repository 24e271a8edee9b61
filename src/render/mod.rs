//! Rasterization of display lists.

/// Backend trait and frame type.
pub mod backend;
/// CPU raster backend.
pub mod cpu;
pub(crate) mod text;
