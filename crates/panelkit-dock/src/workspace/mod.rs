mod deferred;
mod routing;
mod signals;
mod types;

pub use types::*;
