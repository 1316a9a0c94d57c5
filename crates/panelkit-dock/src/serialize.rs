//! Structure-only snapshots of the workspace: names and nesting, no
//! geometry and no tab content.

use serde::Serialize;

use panelkit_common::DockError;

use crate::docked::{DockChild, Orientation};
use crate::ids::{FloatId, GroupId, PanelId, TabId};
use crate::workspace::Workspace;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PanelState {
    FloatingPanel { children: Vec<PanelState> },
    DockedPanel {
        orientation: Orientation,
        children: Vec<PanelState>,
    },
    TabGroup { tabs: Vec<PanelState> },
    Tab { name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WorkspaceState {
    Workspace {
        docked: Option<PanelState>,
        /// Bottom of the stack first.
        floating: Vec<PanelState>,
    },
}

impl Workspace {
    pub fn tab_state(&self, id: TabId) -> Result<PanelState, DockError> {
        let tab = self.tab(id).ok_or_else(|| DockError::not_found("tab", id))?;
        Ok(PanelState::Tab {
            name: tab.name().to_string(),
        })
    }

    pub fn group_state(&self, id: GroupId) -> Result<PanelState, DockError> {
        let tabs = self
            .group_ref(id)?
            .tab_ids()
            .iter()
            .map(|&tab| self.tab_state(tab))
            .collect::<Result<_, _>>()?;
        Ok(PanelState::TabGroup { tabs })
    }

    pub fn panel_state(&self, id: PanelId) -> Result<PanelState, DockError> {
        let panel = self.panel_ref(id)?;
        let children = panel
            .children()
            .iter()
            .map(|&child| match child {
                DockChild::Group(group) => self.group_state(group),
                DockChild::Panel(panel) => self.panel_state(panel),
            })
            .collect::<Result<_, _>>()?;
        Ok(PanelState::DockedPanel {
            orientation: panel.orientation(),
            children,
        })
    }

    pub fn floating_state(&self, id: FloatId) -> Result<PanelState, DockError> {
        let floating = self
            .floating(id)
            .ok_or_else(|| DockError::not_found("floating panel", id))?;
        Ok(PanelState::FloatingPanel {
            children: vec![self.panel_state(floating.content())?],
        })
    }

    pub fn workspace_state(&self) -> Result<WorkspaceState, DockError> {
        let docked = self.root().map(|root| self.panel_state(root)).transpose()?;
        let floating = self
            .floating_by_z()
            .into_iter()
            .map(|id| self.floating_state(id))
            .collect::<Result<_, _>>()?;
        Ok(WorkspaceState::Workspace { docked, floating })
    }

    /// The whole workspace as compact JSON. Equal structures give equal text.
    pub fn serialize_state(&self) -> Result<String, DockError> {
        let state = self.workspace_state()?;
        serde_json::to_string(&state).map_err(|e| DockError::invariant(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::docked::{DockChild, DropZone};
    use crate::workspace::Workspace;

    fn sample() -> Workspace {
        let mut ws = Workspace::default();
        let g1 = ws.create_group_with(&[("A", "a"), ("B", "b")]).unwrap();
        let root = ws.create_panel(Some(DockChild::Group(g1))).unwrap();
        ws.set_root(root).unwrap();
        let g2 = ws.create_group_with(&[("C", "c")]).unwrap();
        let side = ws.create_panel(Some(DockChild::Group(g2))).unwrap();
        ws.dock_panel(side, root, DropZone::Down).unwrap();
        ws.add_floating_panel("F", "f").unwrap();
        ws
    }

    #[test]
    fn tab_group_state() {
        let mut ws = Workspace::default();
        let group = ws.create_group_with(&[("A", "x"), ("B", "y")]).unwrap();
        let value = serde_json::to_value(ws.group_state(group).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"type": "tabGroup", "tabs": [
                {"type": "tab", "name": "A"},
                {"type": "tab", "name": "B"},
            ]})
        );
    }

    #[test]
    fn whole_workspace_state() {
        let ws = sample();
        let value: serde_json::Value = serde_json::from_str(&ws.serialize_state().unwrap()).unwrap();
        let leaf = |names: &[&str]| {
            json!({"type": "dockedPanel", "orientation": "horizontal", "children": [
                {"type": "tabGroup", "tabs": names.iter().map(|n| json!({"type": "tab", "name": n})).collect::<Vec<_>>()}
            ]})
        };
        assert_eq!(
            value,
            json!({
                "type": "workspace",
                "docked": {
                    "type": "dockedPanel",
                    "orientation": "vertical",
                    "children": [leaf(&["A", "B"]), leaf(&["C"])],
                },
                "floating": [{"type": "floatingPanel", "children": [leaf(&["F"])]}],
            })
        );
    }

    #[test]
    fn equal_structures_serialize_identically() {
        assert_eq!(sample().serialize_state().unwrap(), sample().serialize_state().unwrap());
    }

    #[test]
    fn empty_workspace() {
        let ws = Workspace::default();
        assert_eq!(
            ws.serialize_state().unwrap(),
            r#"{"type":"workspace","docked":null,"floating":[]}"#
        );
    }
}
