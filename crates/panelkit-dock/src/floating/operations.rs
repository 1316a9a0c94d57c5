//! Creating, stacking, moving and destroying floating panels.

use tracing::{debug, info};

use panelkit_common::{ensure, DockError, Rect};

use crate::docked::{DockChild, PanelParent};
use crate::ids::{FloatId, GroupId, PanelId, TabId};
use crate::signal::WorkspaceEvent;
use crate::workspace::Workspace;

use super::FloatingPanel;

impl Workspace {
    /// Wrap a detached docked panel in a new floating panel on top of the stack.
    pub fn create_floating(&mut self, panel: PanelId) -> Result<FloatId, DockError> {
        ensure(
            self.panel_ref(panel)?.parent == PanelParent::Detached,
            "Only a detached panel can float",
        )?;
        let id = FloatId(self.alloc_id());
        let z = self.alloc_z();
        let size = self.settings.floating_size;
        self.panel_mut(panel)?.parent = PanelParent::Floating(id);
        self.floating
            .insert(id, FloatingPanel::new(id, panel, Rect::new(0.0, 0.0, size.x, size.y), z));
        info!(%id, %panel, z, "created floating panel");
        self.push_event(WorkspaceEvent::FloatingCreated { id });
        self.refresh_title(id)?;
        Ok(id)
    }

    /// Open a floating panel holding a single new tab.
    pub fn add_floating_panel(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<FloatId, DockError> {
        let tab = self.create_tab(name, content);
        let group = self.create_group();
        self.add_tab(group, tab)?;
        let panel = self.create_panel(Some(DockChild::Group(group)))?;
        self.create_floating(panel)
    }

    /// Same as [`Workspace::add_floating_panel`], tagged with an id the host chose.
    pub fn add_floating_panel_with_host_id(
        &mut self,
        host_id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<FloatId, DockError> {
        let id = self.add_floating_panel(name, content)?;
        self.floating_mut(id)?.host_id = Some(host_id.into());
        Ok(id)
    }

    pub fn floating_by_host_id(&self, host_id: &str) -> Option<FloatId> {
        self.floating
            .values()
            .find(|f| f.host_id() == Some(host_id))
            .map(FloatingPanel::id)
    }

    /// Put `id` on top of every other floating panel.
    pub fn raise(&mut self, id: FloatId) -> Result<(), DockError> {
        let z = self.alloc_z();
        self.floating_mut(id)?.z = z;
        debug!(%id, z, "raised floating panel");
        self.push_event(WorkspaceEvent::FloatingRaised { id, z });
        Ok(())
    }

    pub fn move_floating(&mut self, id: FloatId, rect: Rect) -> Result<(), DockError> {
        self.floating_mut(id)?.rect = rect;
        self.push_event(WorkspaceEvent::FloatingMoved { id, rect });
        Ok(())
    }

    pub fn resize_floating(&mut self, id: FloatId, width: f64, height: f64) -> Result<(), DockError> {
        let entry = self.floating_mut(id)?;
        entry.rect.width = width.max(0.0);
        entry.rect.height = height.max(0.0);
        let rect = entry.rect;
        self.push_event(WorkspaceEvent::FloatingResized { id, rect });
        Ok(())
    }

    /// Close button: the floating panel goes away with everything inside it.
    pub fn close_floating(&mut self, id: FloatId) -> Result<(), DockError> {
        let content = self
            .floating
            .get(&id)
            .map(FloatingPanel::content)
            .ok_or_else(|| DockError::not_found("floating panel", id))?;
        info!(%id, "closing floating panel");
        self.destroy_floating(id);
        self.destroy_subtree(DockChild::Panel(content));
        Ok(())
    }

    /// A floating panel whose content is one group with one tab can be
    /// dropped into another group's tab strip.
    pub fn is_dockable_as_tab(&self, id: FloatId) -> bool {
        self.single_tab_of(id).is_some()
    }

    /// Remove the floating record. Its content panel, if it still exists,
    /// is left detached. Destroying twice is harmless.
    pub(crate) fn destroy_floating(&mut self, id: FloatId) {
        let Some(entry) = self.floating.remove(&id) else {
            return;
        };
        if let Some(panel) = self.panels.get_mut(&entry.content) {
            if panel.parent == PanelParent::Floating(id) {
                panel.parent = PanelParent::Detached;
            }
        }
        info!(%id, "destroyed floating panel");
        self.push_event(WorkspaceEvent::FloatingDestroyed { id });
    }

    pub(crate) fn set_floating_opacity(&mut self, id: FloatId, opacity: f64) -> Result<(), DockError> {
        self.floating_mut(id)?.opacity = opacity;
        self.push_event(WorkspaceEvent::FloatingOpacity { id, opacity });
        Ok(())
    }

    /// The title follows the name of the content panel.
    pub(crate) fn refresh_title(&mut self, id: FloatId) -> Result<(), DockError> {
        let content = self.floating_mut(id)?.content;
        let title = self.panel_name(content).unwrap_or_default().to_string();
        let entry = self.floating_mut(id)?;
        if entry.title != title {
            entry.title.clone_from(&title);
            self.push_event(WorkspaceEvent::FloatingTitle { id, title });
        }
        Ok(())
    }

    /// The lone group and tab of a floating panel, if that is all it holds.
    pub(crate) fn single_tab_of(&self, id: FloatId) -> Option<(GroupId, TabId)> {
        let content = self.floating.get(&id)?.content;
        let DockChild::Group(group) = *self.panel(content)?.children().first()? else {
            return None;
        };
        match self.group(group)?.tab_ids() {
            [tab] => Some((group, *tab)),
            _ => None,
        }
    }
}
