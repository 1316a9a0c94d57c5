mod drag;
mod operations;
mod types;

pub(crate) use drag::TabHeaderDrag;
pub use types::*;
