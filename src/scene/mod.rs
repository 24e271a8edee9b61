//! The forest backdrop and the composition root that ties it to the fairy.

pub mod forest;
pub mod ground;
pub mod sky;
pub mod trees;

pub use forest::{Forest, ForestOpts};
