//! Layout calculation: recursive tree-to-rect computation.

use panelkit_common::{Rect, Vec2};

use crate::docked::{DockChild, DropZone, Orientation};
use crate::ids::{GroupId, PanelId};
use crate::workspace::Workspace;

use super::{Element, LayoutEngine, LayoutProvider, LayoutSnapshot};

impl LayoutProvider for LayoutEngine {
    fn layout(&self, workspace: &Workspace) -> LayoutSnapshot {
        let mut out = LayoutSnapshot::new();
        if let Some(root) = workspace.root() {
            self.layout_panel(workspace, root, self.viewport, &mut out);
        }
        for floating in workspace.floating_panels() {
            let frame = floating.rect();
            let (header, content) = split_top(frame, self.header_height);
            out.insert(Element::FloatingFrame(floating.id()), frame);
            out.insert(Element::FloatingHeader(floating.id()), header);
            out.insert(Element::FloatingContent(floating.id()), content);
            self.layout_panel(workspace, floating.content(), content, &mut out);
        }
        out
    }
}

impl LayoutEngine {
    fn layout_panel(&self, ws: &Workspace, id: PanelId, bounds: Rect, out: &mut LayoutSnapshot) {
        let Some(panel) = ws.panel(id) else {
            return;
        };
        out.insert(Element::PanelFrame(id), bounds);
        let content = if panel.header_visible() {
            let (header, content) = split_top(bounds, self.header_height);
            out.insert(Element::PanelHeader(id), header);
            content
        } else {
            bounds
        };
        out.insert(Element::PanelContent(id), content);
        self.layout_drop_indicators(id, content, out);

        let children = panel.children();
        let shares = split_even(content, children.len(), panel.orientation(), self.gap);
        for (child, rect) in children.iter().zip(shares) {
            match *child {
                DockChild::Group(group) => self.layout_group(ws, group, rect, out),
                DockChild::Panel(panel) => self.layout_panel(ws, panel, rect, out),
            }
        }
    }

    fn layout_drop_indicators(&self, id: PanelId, content: Rect, out: &mut LayoutSnapshot) {
        let center = content.center();
        let size = self.drop_indicator_size;
        let offset = self.drop_indicator_offset;
        for zone in DropZone::ALL {
            let at = match zone {
                DropZone::Left => Vec2::new(center.x - offset, center.y),
                DropZone::Right => Vec2::new(center.x + offset, center.y),
                DropZone::Up => Vec2::new(center.x, center.y - offset),
                DropZone::Down => Vec2::new(center.x, center.y + offset),
            };
            out.insert(
                Element::DropIndicator(id, zone),
                Rect::new(at.x - size / 2.0, at.y - size / 2.0, size, size),
            );
        }
    }

    fn layout_group(&self, ws: &Workspace, id: GroupId, bounds: Rect, out: &mut LayoutSnapshot) {
        let Some(group) = ws.group(id) else {
            return;
        };
        out.insert(Element::GroupFrame(id), bounds);
        let content = if group.header_visible() {
            let (strip, content) = split_top(bounds, self.tab_strip_height);
            out.insert(Element::TabStrip(id), strip);
            for (i, &tab) in group.tab_ids().iter().enumerate() {
                out.insert(
                    Element::TabHeader(tab),
                    Rect::new(
                        strip.x + i as f64 * self.tab_width,
                        strip.y,
                        self.tab_width,
                        strip.height,
                    ),
                );
            }
            content
        } else {
            bounds
        };
        out.insert(Element::GroupContent(id), content);
    }
}

/// Cut a band of `height` off the top of `bounds`.
fn split_top(bounds: Rect, height: f64) -> (Rect, Rect) {
    let height = height.min(bounds.height).max(0.0);
    (
        Rect::new(bounds.x, bounds.y, bounds.width, height),
        Rect::new(bounds.x, bounds.y + height, bounds.width, bounds.height - height),
    )
}

/// Divide `bounds` into `count` equal shares separated by `gap`.
fn split_even(bounds: Rect, count: usize, orientation: Orientation, gap: f64) -> Vec<Rect> {
    match count {
        0 => Vec::new(),
        1 => vec![bounds],
        n => {
            let gaps = gap * (n - 1) as f64;
            (0..n)
                .map(|i| match orientation {
                    Orientation::Horizontal => {
                        let share = ((bounds.width - gaps).max(0.0)) / n as f64;
                        Rect::new(bounds.x + i as f64 * (share + gap), bounds.y, share, bounds.height)
                    }
                    Orientation::Vertical => {
                        let share = ((bounds.height - gaps).max(0.0)) / n as f64;
                        Rect::new(bounds.x, bounds.y + i as f64 * (share + gap), bounds.width, share)
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_even_horizontal_with_gap() {
        let shares = split_even(
            Rect::new(0.0, 0.0, 810.0, 600.0),
            2,
            Orientation::Horizontal,
            10.0,
        );
        assert_eq!(shares[0], Rect::new(0.0, 0.0, 400.0, 600.0));
        assert_eq!(shares[1], Rect::new(410.0, 0.0, 400.0, 600.0));
    }

    #[test]
    fn split_even_vertical_three_ways() {
        let shares = split_even(Rect::new(0.0, 0.0, 100.0, 300.0), 3, Orientation::Vertical, 0.0);
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[2], Rect::new(0.0, 200.0, 100.0, 100.0));
    }

    #[test]
    fn split_top_clamps_to_bounds() {
        let (header, content) = split_top(Rect::new(0.0, 0.0, 50.0, 10.0), 24.0);
        assert_eq!(header.height, 10.0);
        assert_eq!(content.height, 0.0);
    }
}
