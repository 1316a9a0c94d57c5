//! Typed handles into the workspace arena. All four kinds share one counter,
//! so a raw number never names two different things.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
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

entity_id!(
    /// A single tab: name plus opaque content.
    TabId,
    "tab"
);
entity_id!(
    /// An ordered group of tabs sharing one content area.
    GroupId,
    "group"
);
entity_id!(
    /// A node of the docking tree.
    PanelId,
    "panel"
);
entity_id!(
    /// A free-floating window wrapping one docking tree.
    FloatId,
    "floating"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed() {
        assert_eq!(TabId(3).to_string(), "tab-3");
        assert_eq!(GroupId(4).to_string(), "group-4");
        assert_eq!(PanelId(5).to_string(), "panel-5");
        assert_eq!(FloatId(6).to_string(), "floating-6");
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&PanelId(12)).unwrap(), "12");
        let id: TabId = serde_json::from_str("7").unwrap();
        assert_eq!(id, TabId(7));
    }
}
