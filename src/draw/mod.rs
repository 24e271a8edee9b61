//! Immediate-mode drawing vocabulary: primitives, paints and the surface capability.

pub mod primitive;
pub mod surface;
