//! Host input: pointer state, scripted pointer tracks and canvas clamping.

pub mod pointer;

pub use pointer::{
    POINTER_MARGIN, PointerInput, PointerKey, PointerPath, PointerTrack, clamp_to_canvas,
};
