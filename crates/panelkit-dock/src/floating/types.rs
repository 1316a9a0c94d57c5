//! Core types for floating panels.

use serde::Serialize;

use panelkit_common::{DragTracker, Rect, Vec2};

use crate::ids::{FloatId, PanelId};
use crate::signal::Cursor;

/// Which edges a resize gesture moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    Right,
    Bottom,
    Both,
}

impl ResizeMode {
    /// Classify a pointer position against the panel's frame.
    pub fn at(frame: Rect, pos: Vec2, tolerance: f64) -> Option<ResizeMode> {
        let right = pos.x > frame.right() - tolerance;
        let bottom = pos.y > frame.bottom() - tolerance;
        match (right, bottom) {
            (true, true) => Some(ResizeMode::Both),
            (true, false) => Some(ResizeMode::Right),
            (false, true) => Some(ResizeMode::Bottom),
            (false, false) => None,
        }
    }

    pub fn cursor(self) -> Cursor {
        match self {
            ResizeMode::Right => Cursor::EwResize,
            ResizeMode::Bottom => Cursor::NsResize,
            ResizeMode::Both => Cursor::NwseResize,
        }
    }

    pub fn moves_width(self) -> bool {
        matches!(self, ResizeMode::Right | ResizeMode::Both)
    }

    pub fn moves_height(self) -> bool {
        matches!(self, ResizeMode::Bottom | ResizeMode::Both)
    }
}

/// A freely positioned, resizable window wrapping one docking tree.
#[derive(Debug)]
pub struct FloatingPanel {
    pub(crate) id: FloatId,
    pub(crate) content: PanelId,
    pub(crate) rect: Rect,
    pub(crate) z: u32,
    pub(crate) opacity: f64,
    pub(crate) title: String,
    /// Identifier supplied by the host when it created the panel.
    pub(crate) host_id: Option<String>,
    pub(crate) resize_hover: Option<ResizeMode>,
    /// Mode and size captured when a resize gesture started.
    pub(crate) resizing: Option<(ResizeMode, Vec2)>,
    pub(crate) header_tracker: Option<DragTracker>,
    pub(crate) resize_tracker: Option<DragTracker>,
}

impl FloatingPanel {
    pub(crate) fn new(id: FloatId, content: PanelId, rect: Rect, z: u32) -> Self {
        Self {
            id,
            content,
            rect,
            z,
            opacity: 1.0,
            title: String::new(),
            host_id: None,
            resize_hover: None,
            resizing: None,
            header_tracker: Some(DragTracker::new("floating panel header: move, dock")),
            resize_tracker: Some(DragTracker::new("floating panel: resize")),
        }
    }

    pub fn id(&self) -> FloatId {
        self.id
    }

    pub fn content(&self) -> PanelId {
        self.content
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn z(&self) -> u32 {
        self.z
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn host_id(&self) -> Option<&str> {
        self.host_id.as_deref()
    }

    pub fn resize_hover(&self) -> Option<ResizeMode> {
        self.resize_hover
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_mode_classification() {
        let frame = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(ResizeMode::at(frame, Vec2::new(195.0, 50.0), 10.0), Some(ResizeMode::Right));
        assert_eq!(ResizeMode::at(frame, Vec2::new(50.0, 95.0), 10.0), Some(ResizeMode::Bottom));
        assert_eq!(ResizeMode::at(frame, Vec2::new(195.0, 95.0), 10.0), Some(ResizeMode::Both));
        assert_eq!(ResizeMode::at(frame, Vec2::new(190.0, 50.0), 10.0), None);
    }

    #[test]
    fn resize_cursor_names() {
        assert_eq!(ResizeMode::Both.cursor(), Cursor::NwseResize);
        assert_eq!(ResizeMode::Right.cursor(), Cursor::EwResize);
        assert_eq!(ResizeMode::Bottom.cursor(), Cursor::NsResize);
    }
}
