use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! graph_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }
    };
}

graph_id!(NodeId, "node");
graph_id!(SlotId, "slot");
graph_id!(ConnectionId, "connection");
