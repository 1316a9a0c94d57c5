mod drag;
mod operations;
mod overlay;
mod types;

pub(crate) use drag::PanelHeaderDrag;
pub use operations::Container;
pub use types::*;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ids::{GroupId, PanelId};
    use crate::workspace::Workspace;

    /// Walk the tree under `panel` and check the shape rules every docked
    /// panel obeys between operations.
    pub(crate) fn assert_well_formed(ws: &Workspace, panel: PanelId) {
        let entry = ws.panel(panel).expect("panel exists");
        assert!(!entry.is_empty(), "{panel} is empty");
        if entry.len() == 1 {
            assert!(
                matches!(entry.children()[0], DockChild::Group(_)),
                "{panel} has a single docked panel child"
            );
        } else {
            for child in entry.children() {
                assert!(
                    matches!(child, DockChild::Panel(_)),
                    "{panel} mixes a bare group into a split"
                );
            }
        }
        for &child in entry.children() {
            match child {
                DockChild::Group(g) => assert_eq!(ws.group(g).unwrap().parent(), Some(panel)),
                DockChild::Panel(p) => {
                    assert_eq!(ws.panel(p).unwrap().parent(), PanelParent::Panel(panel));
                    assert_well_formed(ws, p);
                }
            }
        }
    }

    fn leaf(ws: &mut Workspace, name: &str) -> (GroupId, PanelId) {
        let group = ws.create_group_with(&[(name, "")]).unwrap();
        let panel = ws.create_panel(Some(DockChild::Group(group))).unwrap();
        (group, panel)
    }

    #[test]
    fn docking_to_the_right_wraps_existing_group() {
        let mut ws = Workspace::default();
        let (g1, root) = leaf(&mut ws, "A");
        ws.set_root(root).unwrap();
        let (_, p2) = leaf(&mut ws, "B");

        ws.dock_panel(p2, root, DropZone::Right).unwrap();

        let entry = ws.panel(root).unwrap();
        assert_eq!(entry.orientation(), Orientation::Horizontal);
        assert_eq!(entry.len(), 2);
        assert_eq!(entry.children()[1], DockChild::Panel(p2));
        let DockChild::Panel(wrapper) = entry.children()[0] else {
            panic!("first child should be a wrapper panel");
        };
        assert_eq!(ws.panel(wrapper).unwrap().children(), &[DockChild::Group(g1)]);
        assert!(entry.header_visible());
        assert_well_formed(&ws, root);
    }

    #[test]
    fn docking_up_inserts_first_and_goes_vertical() {
        let mut ws = Workspace::default();
        let (_, root) = leaf(&mut ws, "A");
        ws.set_root(root).unwrap();
        let (_, p2) = leaf(&mut ws, "B");

        ws.dock_panel(p2, root, DropZone::Up).unwrap();

        let entry = ws.panel(root).unwrap();
        assert_eq!(entry.orientation(), Orientation::Vertical);
        assert_eq!(entry.children()[0], DockChild::Panel(p2));
        assert_eq!(ws.panel_name(root), Some("B"));
    }

    #[test]
    fn single_panel_child_is_absorbed_in_order() {
        let mut ws = Workspace::default();
        let (_, root) = leaf(&mut ws, "R");
        ws.set_root(root).unwrap();
        let (_, x) = leaf(&mut ws, "X");
        let (_, y) = leaf(&mut ws, "Y");
        let q = ws.create_panel(Some(DockChild::Panel(x))).unwrap();
        ws.add_item(q, DockChild::Panel(y), false).unwrap();
        ws.set_orientation(q, Orientation::Vertical).unwrap();
        ws.add_item(root, DockChild::Panel(q), false).unwrap();
        let DockChild::Panel(wrapper) = ws.panel(root).unwrap().children()[0] else {
            panic!("expected wrapper");
        };

        ws.close_docked_panel(wrapper).unwrap();

        let entry = ws.panel(root).unwrap();
        assert_eq!(entry.orientation(), Orientation::Vertical);
        assert_eq!(entry.children(), &[DockChild::Panel(x), DockChild::Panel(y)]);
        assert!(ws.panel(q).is_none());
        assert!(ws.panel(wrapper).is_none());
        assert_well_formed(&ws, root);
    }

    #[test]
    fn bare_second_group_is_wrapped_too() {
        let mut ws = Workspace::default();
        let (g1, root) = leaf(&mut ws, "A");
        ws.set_root(root).unwrap();
        let g2 = ws.create_group_with(&[("B", "")]).unwrap();

        ws.add_item(root, DockChild::Group(g2), false).unwrap();

        let entry = ws.panel(root).unwrap();
        assert_eq!(entry.orientation(), Orientation::Horizontal);
        let [DockChild::Panel(first), DockChild::Panel(second)] = entry.children() else {
            panic!("expected two wrapper panels, got {:?}", entry.children());
        };
        assert_eq!(ws.panel(*first).unwrap().children(), &[DockChild::Group(g1)]);
        assert_eq!(ws.panel(*second).unwrap().children(), &[DockChild::Group(g2)]);
        assert_eq!(ws.group(g2).unwrap().parent(), Some(*second));
        assert_well_formed(&ws, root);
    }

    #[test]
    fn docking_into_own_descendant_is_rejected() {
        let mut ws = Workspace::default();
        let (_, x) = leaf(&mut ws, "X");
        let outer = ws.create_panel(Some(DockChild::Panel(x))).unwrap();

        let err = ws.dock_panel(outer, x, DropZone::Right).unwrap_err();
        assert!(err.is_invariant());
        assert!(err.to_string().contains("own descendants"));
        assert_eq!(ws.panel(x).unwrap().parent(), PanelParent::Panel(outer));
        assert_eq!(ws.panel(x).unwrap().len(), 1);
    }

    #[test]
    fn dropping_onto_a_split_is_rejected() {
        let mut ws = Workspace::default();
        let (_, root) = leaf(&mut ws, "A");
        ws.set_root(root).unwrap();
        let (_, b) = leaf(&mut ws, "B");
        ws.dock_panel(b, root, DropZone::Down).unwrap();
        let (_, c) = leaf(&mut ws, "C");

        let err = ws.dock_panel(c, root, DropZone::Right).unwrap_err();
        assert!(err.is_invariant());
        let entry = ws.panel(root).unwrap();
        assert_eq!(entry.orientation(), Orientation::Vertical);
        assert_eq!(entry.len(), 2);
        assert_eq!(ws.panel(c).unwrap().parent(), PanelParent::Detached);
    }

    #[test]
    fn adding_present_item_is_an_invariant_error() {
        let mut ws = Workspace::default();
        let (group, panel) = leaf(&mut ws, "A");
        let err = ws.add_item(panel, DockChild::Group(group), false).unwrap_err();
        assert!(err.to_string().contains("Trying to add item already present"));
    }

    #[test]
    fn removing_missing_item_is_an_invariant_error() {
        let mut ws = Workspace::default();
        let (_, panel) = leaf(&mut ws, "A");
        let stray = ws.create_group();
        let err = ws.remove_item(panel, DockChild::Group(stray)).unwrap_err();
        assert!(err.is_invariant());
        assert!(err
            .to_string()
            .contains("Trying to remove child not present in docked panel"));
    }

    #[test]
    fn emptied_panel_detaches_and_disappears() {
        let mut ws = Workspace::default();
        let (group, root) = leaf(&mut ws, "A");
        ws.set_root(root).unwrap();
        ws.remove_item(root, DockChild::Group(group)).unwrap();
        assert_eq!(ws.root(), None);
        assert!(ws.panel(root).is_none());
        assert_eq!(ws.group(group).unwrap().parent(), None);
    }

    #[test]
    fn detaching_the_root_clears_it() {
        let mut ws = Workspace::default();
        let (_, root) = leaf(&mut ws, "A");
        ws.set_root(root).unwrap();
        ws.detach_panel(root).unwrap();
        assert_eq!(ws.root(), None);
        assert_eq!(ws.panel(root).unwrap().parent(), PanelParent::Detached);
        assert!(ws.set_root(root).is_ok());
    }

    #[test]
    fn second_root_is_rejected() {
        let mut ws = Workspace::default();
        let (_, a) = leaf(&mut ws, "A");
        let (_, b) = leaf(&mut ws, "B");
        ws.set_root(a).unwrap();
        assert!(ws.set_root(b).unwrap_err().is_invariant());
    }

    #[test]
    fn repeated_docking_keeps_tree_well_formed() {
        let mut ws = Workspace::default();
        let (_, root) = leaf(&mut ws, "root");
        ws.set_root(root).unwrap();
        let zones = [DropZone::Right, DropZone::Down, DropZone::Left, DropZone::Up];
        let mut docked = Vec::new();
        for (i, zone) in zones.into_iter().enumerate() {
            let (_, panel) = leaf(&mut ws, &format!("P{i}"));
            // Dock into the most recently docked leaf when possible.
            let target = docked.last().copied().unwrap_or(root);
            ws.dock_panel(panel, target, zone).unwrap();
            docked.push(panel);
            assert_well_formed(&ws, root);
        }
        for panel in docked.into_iter().rev() {
            ws.close_docked_panel(panel).unwrap();
            assert_well_formed(&ws, root);
        }
        assert_eq!(ws.panel_name(root), Some("root"));
    }

    #[test]
    fn container_follows_parent_chain() {
        let mut ws = Workspace::default();
        let (_, root) = leaf(&mut ws, "A");
        ws.set_root(root).unwrap();
        let (_, inner) = leaf(&mut ws, "B");
        ws.dock_panel(inner, root, DropZone::Right).unwrap();
        assert_eq!(ws.container_of(inner), Some(Container::Root));

        let floating = ws.add_floating_panel("F", "").unwrap();
        let content = ws.floating(floating).unwrap().content();
        assert_eq!(ws.container_of(content), Some(Container::Floating(floating)));

        let (_, loose) = leaf(&mut ws, "C");
        assert_eq!(ws.container_of(loose), None);
    }
}
