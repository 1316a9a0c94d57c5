//! Core types and constructors for Workspace.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use panelkit_common::{DockError, EventQueue, Vec2};
use panelkit_config::PanelKitConfig;

use crate::docked::DockedPanel;
use crate::floating::FloatingPanel;
use crate::ids::{FloatId, GroupId, PanelId, TabId};
use crate::layout::{LayoutEngine, LayoutProvider, LayoutSnapshot};
use crate::settings::DockSettings;
use crate::signal::WorkspaceEvent;
use crate::tab::Tab;
use crate::tab_group::TabGroup;

/// Which tracker owns the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    TabHeader(TabId),
    PanelHeader(PanelId),
    FloatingHeader(FloatId),
    FloatingResize(FloatId),
}

/// Structural work queued from inside a drag callback, run once the
/// current pointer event has been fully handled.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Deferred {
    DetachTabToFloat {
        tab: TabId,
        pos: Vec2,
    },
    DetachPanelToFloat {
        panel: PanelId,
        pos: Vec2,
        pivot: Vec2,
    },
    DockTabInto {
        tab: TabId,
        group: GroupId,
        pos: Vec2,
    },
}

/// Owns every tab, group, docked panel and floating panel, and routes
/// pointer input and docking signals between them.
pub struct Workspace {
    pub(crate) settings: DockSettings,
    pub(crate) layout_provider: Box<dyn LayoutProvider>,
    pub(crate) tabs: HashMap<TabId, Tab>,
    pub(crate) groups: HashMap<GroupId, TabGroup>,
    pub(crate) panels: HashMap<PanelId, DockedPanel>,
    pub(crate) floating: HashMap<FloatId, FloatingPanel>,
    pub(crate) root: Option<PanelId>,
    /// Auto-incrementing counter shared by all entity ids.
    pub(super) next_id: u32,
    /// Stacking counter; every raise takes the next value.
    pub(super) next_z: u32,
    pub(crate) gesture: Option<DragSource>,
    /// Tab pressed with the primary button, with the group it was in.
    pub(crate) click_candidate: Option<(TabId, GroupId)>,
    pub(crate) pending: VecDeque<Deferred>,
    pub(crate) tab_target_highlight: bool,
    pub(super) events: EventQueue<WorkspaceEvent>,
}

impl Workspace {
    pub fn new(settings: DockSettings) -> Self {
        Self::with_layout(settings, Box::new(LayoutEngine::default()))
    }

    /// Create with a custom layout provider.
    pub fn with_layout(settings: DockSettings, layout_provider: Box<dyn LayoutProvider>) -> Self {
        let next_z = settings.z_index_base;
        Self {
            settings,
            layout_provider,
            tabs: HashMap::new(),
            groups: HashMap::new(),
            panels: HashMap::new(),
            floating: HashMap::new(),
            root: None,
            next_id: 1,
            next_z,
            gesture: None,
            click_candidate: None,
            pending: VecDeque::new(),
            tab_target_highlight: false,
            events: EventQueue::new(),
        }
    }

    pub fn from_config(config: &PanelKitConfig) -> Result<Self, DockError> {
        Ok(Self::with_layout(
            DockSettings::from_config(config)?,
            Box::new(LayoutEngine::from_config(&config.layout)),
        ))
    }

    pub(crate) fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn alloc_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    pub(crate) fn push_event(&mut self, event: WorkspaceEvent) {
        self.events.push(event);
    }

    // -- Accessors --

    pub fn settings(&self) -> &DockSettings {
        &self.settings
    }

    pub fn layout(&self) -> LayoutSnapshot {
        self.layout_provider.layout(self)
    }

    pub fn root(&self) -> Option<PanelId> {
        self.root
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.get(&id)
    }

    pub fn group(&self, id: GroupId) -> Option<&TabGroup> {
        self.groups.get(&id)
    }

    pub fn panel(&self, id: PanelId) -> Option<&DockedPanel> {
        self.panels.get(&id)
    }

    pub fn floating(&self, id: FloatId) -> Option<&FloatingPanel> {
        self.floating.get(&id)
    }

    pub fn floating_panels(&self) -> impl Iterator<Item = &FloatingPanel> {
        self.floating.values()
    }

    /// Floating panels from the bottom of the stack to the top.
    pub fn floating_by_z(&self) -> Vec<FloatId> {
        let mut ids: Vec<_> = self.floating.values().map(|f| (f.z, f.id)).collect();
        ids.sort();
        ids.into_iter().map(|(_, id)| id).collect()
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn floating_count(&self) -> usize {
        self.floating.len()
    }

    pub fn gesture(&self) -> Option<DragSource> {
        self.gesture
    }

    pub fn tab_target_highlight(&self) -> bool {
        self.tab_target_highlight
    }

    /// Take every event raised since the last call.
    pub fn drain_events(&mut self) -> Vec<WorkspaceEvent> {
        self.events.drain()
    }

    pub(crate) fn tab_mut(&mut self, id: TabId) -> Result<&mut Tab, DockError> {
        self.tabs.get_mut(&id).ok_or_else(|| DockError::not_found("tab", id))
    }

    pub(crate) fn group_mut(&mut self, id: GroupId) -> Result<&mut TabGroup, DockError> {
        self.groups
            .get_mut(&id)
            .ok_or_else(|| DockError::not_found("tab group", id))
    }

    pub(crate) fn panel_mut(&mut self, id: PanelId) -> Result<&mut DockedPanel, DockError> {
        self.panels
            .get_mut(&id)
            .ok_or_else(|| DockError::not_found("docked panel", id))
    }

    pub(crate) fn floating_mut(&mut self, id: FloatId) -> Result<&mut FloatingPanel, DockError> {
        self.floating
            .get_mut(&id)
            .ok_or_else(|| DockError::not_found("floating panel", id))
    }

    pub(crate) fn group_ref(&self, id: GroupId) -> Result<&TabGroup, DockError> {
        self.groups
            .get(&id)
            .ok_or_else(|| DockError::not_found("tab group", id))
    }

    pub(crate) fn panel_ref(&self, id: PanelId) -> Result<&DockedPanel, DockError> {
        self.panels
            .get(&id)
            .ok_or_else(|| DockError::not_found("docked panel", id))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(DockSettings::default())
    }
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace")
            .field("root", &self.root)
            .field("tabs", &self.tabs.len())
            .field("groups", &self.groups.len())
            .field("panels", &self.panels.len())
            .field("floating", &self.floating.len())
            .field("gesture", &self.gesture)
            .finish()
    }
}
