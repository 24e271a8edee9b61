//! The animated fairy: motion model and layered rendering.

pub mod fairy;
pub mod render;

pub use fairy::{Fairy, FairySnapshot};
pub use render::render;
