//! Drop overlays: which panels accept a dragged floating panel, and where.

use tracing::trace;

use panelkit_common::{DockError, Vec2};

use crate::ids::{FloatId, PanelId};
use crate::layout::{Element, LayoutSnapshot};
use crate::signal::WorkspaceEvent;
use crate::workspace::Workspace;

use super::{Container, DropOverlay, DropZone};

impl Workspace {
    /// Show the overlay of every single-child panel under `pos`, except the
    /// panels inside the floating panel being dragged. `None` hides them all.
    pub(crate) fn update_drop_overlays(
        &mut self,
        source: Option<FloatId>,
        pos: Option<Vec2>,
    ) -> Result<(), DockError> {
        let snapshot = self.layout();
        let mut ids: Vec<PanelId> = self.panels.keys().copied().collect();
        ids.sort();
        for id in ids {
            let container = self.container_of(id);
            let eligible = match (container, source) {
                (None, _) => false,
                (Some(Container::Floating(f)), Some(source)) => f != source,
                (Some(_), _) => true,
            };
            let overlay = match pos {
                Some(pos) if eligible => self.overlay_at(&snapshot, id, pos)?,
                _ => DropOverlay::default(),
            };
            let panel = self.panel_mut(id)?;
            if panel.overlay != overlay {
                trace!(panel = %id, ?overlay, "drop overlay changed");
                panel.overlay = overlay;
                self.push_event(WorkspaceEvent::DropOverlay {
                    panel: id,
                    visible: overlay.visible,
                    hovered: overlay.hovered,
                });
            }
        }
        Ok(())
    }

    fn overlay_at(
        &self,
        snapshot: &LayoutSnapshot,
        panel: PanelId,
        pos: Vec2,
    ) -> Result<DropOverlay, DockError> {
        let visible = self.panel_ref(panel)?.len() == 1
            && snapshot.contains(Element::PanelContent(panel), pos);
        if !visible {
            return Ok(DropOverlay::default());
        }
        let hovered = DropZone::ALL
            .into_iter()
            .find(|&zone| snapshot.contains(Element::DropIndicator(panel, zone), pos));
        Ok(DropOverlay { visible, hovered })
    }

    /// The visible drop indicator under `pos`, topmost surface first.
    pub(crate) fn drop_target_at(&self, pos: Vec2) -> Option<(PanelId, DropZone)> {
        let snapshot = self.layout();
        let mut candidates: Vec<(u32, PanelId)> = self
            .panels
            .values()
            .filter(|p| p.overlay.visible)
            .map(|p| (self.stacking_rank(p.id), p.id))
            .collect();
        candidates.sort_by(|a, b| b.cmp(a));
        candidates.into_iter().find_map(|(_, id)| {
            DropZone::ALL
                .into_iter()
                .find(|&zone| snapshot.contains(Element::DropIndicator(id, zone), pos))
                .map(|zone| (id, zone))
        })
    }

    /// Root content sits below every floating panel.
    pub(crate) fn stacking_rank(&self, panel: PanelId) -> u32 {
        match self.container_of(panel) {
            Some(Container::Floating(f)) => self.floating.get(&f).map_or(0, |f| f.z),
            _ => 0,
        }
    }
}
