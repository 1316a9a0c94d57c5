//! Layout snapshot types and the provider seam.

use std::collections::HashMap;

use panelkit_common::{DockError, Rect, Vec2};
use panelkit_config::LayoutConfig;

use crate::docked::DropZone;
use crate::ids::{FloatId, GroupId, PanelId, TabId};
use crate::workspace::Workspace;

/// Every box the docking logic asks the host about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    FloatingFrame(FloatId),
    FloatingHeader(FloatId),
    FloatingContent(FloatId),
    PanelFrame(PanelId),
    PanelHeader(PanelId),
    PanelContent(PanelId),
    DropIndicator(PanelId, DropZone),
    GroupFrame(GroupId),
    TabStrip(GroupId),
    GroupContent(GroupId),
    /// The tab's slot in the strip, before any drag offset is applied.
    TabHeader(TabId),
}

/// Bounding rectangles of everything currently laid out. Elements that are
/// hidden (a single tab's strip, a leaf panel's header) are absent.
#[derive(Debug, Clone, Default)]
pub struct LayoutSnapshot {
    rects: HashMap<Element, Rect>,
}

impl LayoutSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: Element, rect: Rect) {
        self.rects.insert(element, rect);
    }

    pub fn get(&self, element: Element) -> Option<Rect> {
        self.rects.get(&element).copied()
    }

    pub fn rect(&self, element: Element) -> Result<Rect, DockError> {
        self.get(element)
            .ok_or_else(|| DockError::not_found("element", format!("{element:?}")))
    }

    pub fn contains(&self, element: Element, pos: Vec2) -> bool {
        self.get(element).is_some_and(|r| r.contains(pos))
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Element, &Rect)> {
        self.rects.iter()
    }
}

/// Computes where everything is. The host's real layout engine can stand in
/// for the built-in one.
pub trait LayoutProvider {
    fn layout(&self, workspace: &Workspace) -> LayoutSnapshot;
}

/// Built-in deterministic layout: equal split shares, fixed-width tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    pub header_height: f64,
    pub tab_strip_height: f64,
    pub tab_width: f64,
    /// Gap in pixels between split children.
    pub gap: f64,
    pub drop_indicator_size: f64,
    pub drop_indicator_offset: f64,
    /// Area filled by the root docked panel.
    pub viewport: Rect,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl LayoutEngine {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            header_height: config.header_height,
            tab_strip_height: config.tab_strip_height,
            tab_width: config.tab_width,
            gap: config.split_gap,
            drop_indicator_size: config.drop_indicator_size,
            drop_indicator_offset: config.drop_indicator_offset,
            viewport: Rect::new(0.0, 0.0, config.viewport_width, config.viewport_height),
        }
    }
}
