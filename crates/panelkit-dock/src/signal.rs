//! The docking coordination vocabulary.
//!
//! Components never hold references to each other. A component raises a
//! [`Signal`] and the workspace delivers it to whichever container is
//! responsible: the owning group, the parent panel, or every panel for a
//! broadcast. Every signal is also copied to the host outbox.

use serde::Serialize;

use panelkit_common::{Rect, Vec2};

use crate::docked::DropZone;
use crate::ids::{FloatId, GroupId, PanelId, TabId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "signal", rename_all = "camelCase")]
pub enum Signal {
    /// The tab's close affordance fired. Delivered to its group.
    TabClose { tab: TabId },
    /// The tab's header was clicked. Delivered to its group.
    TabActivate { tab: TabId },
    /// A group ran out of tabs. Delivered to its parent panel.
    TabGroupClose { group: GroupId },
    /// A group switched its active tab. Travels up for naming.
    TabGroupActiveChanged { group: GroupId },
    /// A panel leaves its parent, whatever that parent is.
    DockedPanelDetach { panel: PanelId },
    /// A panel's children changed. Travels up for naming.
    DockedPanelChildrenChanged { panel: PanelId },
    /// A floating panel holding a single tab was dragged over a tab strip.
    FloatingPanelTabDock {
        tab: TabId,
        target: GroupId,
        pos: Vec2,
    },
    /// Broadcast while a floating panel is dragged by its header. `None`
    /// hides every drop overlay.
    FloatingPanelBodyDockMouse {
        source: Option<FloatId>,
        pos: Option<Vec2>,
    },
    /// A floating panel was released over a drop indicator.
    FloatingPanelBodyDockDrop {
        panel: PanelId,
        target: PanelId,
        zone: DropZone,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cursor {
    #[serde(rename = "ew-resize")]
    EwResize,
    #[serde(rename = "ns-resize")]
    NsResize,
    #[serde(rename = "nwse-resize")]
    NwseResize,
}

impl Cursor {
    pub fn css_name(self) -> &'static str {
        match self {
            Cursor::EwResize => "ew-resize",
            Cursor::NsResize => "ns-resize",
            Cursor::NwseResize => "nwse-resize",
        }
    }
}

/// Everything the host may need to repaint, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum WorkspaceEvent {
    Signal(Signal),
    FloatingCreated { id: FloatId },
    FloatingDestroyed { id: FloatId },
    FloatingRaised { id: FloatId, z: u32 },
    FloatingMoved { id: FloatId, rect: Rect },
    FloatingResized { id: FloatId, rect: Rect },
    FloatingOpacity { id: FloatId, opacity: f64 },
    FloatingTitle { id: FloatId, title: String },
    RootChanged { panel: Option<PanelId> },
    ActiveTabChanged { group: GroupId, tab: TabId },
    TabOpacity { tab: TabId, opacity: f64 },
    Cursor { id: FloatId, cursor: Option<Cursor> },
    CursorLock { cursor: Option<Cursor> },
    TabTargetHighlight { on: bool },
    DropOverlay {
        panel: PanelId,
        visible: bool,
        hovered: Option<DropZone>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_serialize_tagged() {
        let json = serde_json::to_value(Signal::TabClose { tab: TabId(3) }).unwrap();
        assert_eq!(json, serde_json::json!({"signal": "tabClose", "tab": 3}));
    }

    #[test]
    fn events_wrap_signals() {
        let event = WorkspaceEvent::Signal(Signal::DockedPanelDetach { panel: PanelId(2) });
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["event"], "signal");
        assert_eq!(json["signal"], "dockedPanelDetach");
        assert_eq!(json["panel"], 2);
    }

    #[test]
    fn cursor_uses_css_names() {
        let json = serde_json::to_string(&Cursor::NwseResize).unwrap();
        assert_eq!(json, "\"nwse-resize\"");
        assert_eq!(Cursor::EwResize.css_name(), "ew-resize");
    }
}
