mod geometry;
mod gestures;
mod operations;
mod types;

pub use types::*;
