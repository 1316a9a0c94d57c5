//! Docking model: tabs, tab groups, docked and floating panels, and the
//! drag gestures that move them between each other.
//!
//! Everything lives in one [`Workspace`] arena. The host feeds it pointer
//! events and reads back [`WorkspaceEvent`]s describing what to repaint.

pub mod docked;
pub mod floating;
pub mod ids;
pub mod layout;
pub mod serialize;
pub mod settings;
pub mod signal;
pub mod tab;
pub mod tab_group;
pub mod workspace;

pub use docked::{Container, DockChild, DockedPanel, DropOverlay, DropZone, Orientation, PanelParent};
pub use floating::{FloatingPanel, ResizeMode};
pub use ids::{FloatId, GroupId, PanelId, TabId};
pub use layout::{Element, LayoutEngine, LayoutProvider, LayoutSnapshot};
pub use serialize::{PanelState, WorkspaceState};
pub use settings::DockSettings;
pub use signal::{Cursor, Signal, WorkspaceEvent};
pub use tab::Tab;
pub use tab_group::TabGroup;
pub use workspace::{DragSource, Workspace};

pub type Result<T> = std::result::Result<T, panelkit_common::DockError>;
