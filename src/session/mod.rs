//! Offline frame driver: owns the scene and walks it frame by frame.

pub mod sketch_session;
