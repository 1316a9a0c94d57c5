mod drag;
mod operations;
mod types;

pub(crate) use drag::{FloatingHeaderDrag, FloatingResizeDrag};
pub use types::*;

#[cfg(test)]
mod tests {
    use panelkit_common::Rect;

    use crate::docked::{DockChild, PanelParent};
    use crate::signal::WorkspaceEvent;
    use crate::workspace::Workspace;

    #[test]
    fn new_floating_panel_has_default_size_and_title() {
        let mut ws = Workspace::default();
        let id = ws.add_floating_panel("Notes", "<p/>").unwrap();
        let entry = ws.floating(id).unwrap();
        assert_eq!(entry.rect(), Rect::new(0.0, 0.0, 420.0, 300.0));
        assert_eq!(entry.title(), "Notes");
        assert_eq!(entry.z(), 100);
        assert!(ws.is_dockable_as_tab(id));
        let events = ws.drain_events();
        assert!(events.contains(&WorkspaceEvent::FloatingCreated { id }));
    }

    #[test]
    fn raise_moves_panel_to_top() {
        let mut ws = Workspace::default();
        let a = ws.add_floating_panel("A", "").unwrap();
        let b = ws.add_floating_panel("B", "").unwrap();
        assert_eq!(ws.floating_by_z(), vec![a, b]);
        ws.raise(a).unwrap();
        assert_eq!(ws.floating_by_z(), vec![b, a]);
        assert!(ws.floating(a).unwrap().z() > ws.floating(b).unwrap().z());
    }

    #[test]
    fn title_follows_active_tab() {
        let mut ws = Workspace::default();
        let id = ws.add_floating_panel("A", "").unwrap();
        let content = ws.floating(id).unwrap().content();
        let DockChild::Group(group) = ws.panel(content).unwrap().children()[0] else {
            panic!("expected group");
        };
        let tab = ws.create_tab("B", "");
        ws.add_tab(group, tab).unwrap();
        ws.activate_tab(tab).unwrap();
        assert_eq!(ws.floating(id).unwrap().title(), "B");
        assert!(!ws.is_dockable_as_tab(id));
    }

    #[test]
    fn closing_last_tab_destroys_floating_panel() {
        let mut ws = Workspace::default();
        let id = ws.add_floating_panel("A", "").unwrap();
        let content = ws.floating(id).unwrap().content();
        let DockChild::Group(group) = ws.panel(content).unwrap().children()[0] else {
            panic!("expected group");
        };
        let tab = ws.group(group).unwrap().tab_ids()[0];
        ws.close_tab(tab).unwrap();
        assert!(ws.floating(id).is_none());
        assert_eq!(ws.panel_count(), 0);
        assert_eq!(ws.group_count(), 0);
        assert!(ws.drain_events().contains(&WorkspaceEvent::FloatingDestroyed { id }));
    }

    #[test]
    fn close_floating_drops_contents() {
        let mut ws = Workspace::default();
        let id = ws.add_floating_panel("A", "").unwrap();
        ws.close_floating(id).unwrap();
        assert_eq!(ws.floating_count(), 0);
        assert_eq!(ws.tab_count(), 0);
        assert_eq!(ws.panel_count(), 0);
        assert!(ws.close_floating(id).is_err());
    }

    #[test]
    fn destroy_is_idempotent_and_detaches_content() {
        let mut ws = Workspace::default();
        let id = ws.add_floating_panel("A", "").unwrap();
        let content = ws.floating(id).unwrap().content();
        ws.destroy_floating(id);
        ws.destroy_floating(id);
        assert_eq!(ws.panel(content).unwrap().parent(), PanelParent::Detached);
    }

    #[test]
    fn host_id_lookup() {
        let mut ws = Workspace::default();
        let id = ws.add_floating_panel_with_host_id("mixer", "Mixer", "").unwrap();
        assert_eq!(ws.floating_by_host_id("mixer"), Some(id));
        assert_eq!(ws.floating_by_host_id("other"), None);
    }
}
