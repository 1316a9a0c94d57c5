//! Pointer input model delivered by the host.
//!
//! Button bits follow the DOM `buttons` convention: left = 1, right = 2,
//! middle = 4. The button that *caused* a press is reported separately.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn bit(self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 4,
        }
    }

    /// Decode a DOM `MouseEvent.button` index.
    pub fn from_dom_index(index: i16) -> Option<Self> {
        match index {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            _ => None,
        }
    }
}

/// Bitset of currently held buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Buttons(pub u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const PRIMARY: Buttons = Buttons(1);

    pub fn contains(self, button: MouseButton) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn with(self, button: MouseButton) -> Buttons {
        Buttons(self.0 | button.bit())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// One pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pos: Vec2,
    /// Button that triggered a down/up event. `None` for plain moves.
    #[serde(default)]
    pub button: Option<MouseButton>,
    /// Buttons held while the event was generated.
    #[serde(default)]
    pub buttons: Buttons,
}

impl PointerEvent {
    pub fn down(pos: Vec2, button: MouseButton) -> Self {
        Self {
            kind: PointerKind::Down,
            pos,
            button: Some(button),
            buttons: Buttons::NONE.with(button),
        }
    }

    /// A move with the primary button held.
    pub fn drag(pos: Vec2) -> Self {
        Self {
            kind: PointerKind::Move,
            pos,
            button: None,
            buttons: Buttons::PRIMARY,
        }
    }

    /// A move with no buttons held.
    pub fn hover(pos: Vec2) -> Self {
        Self {
            kind: PointerKind::Move,
            pos,
            button: None,
            buttons: Buttons::NONE,
        }
    }

    pub fn up(pos: Vec2, button: MouseButton) -> Self {
        Self {
            kind: PointerKind::Up,
            pos,
            button: Some(button),
            buttons: Buttons::NONE,
        }
    }

    pub fn is_primary_held(&self) -> bool {
        self.buttons.contains(MouseButton::Left)
    }

    /// Rebuild the event at the same position as a different kind. Used when
    /// a gesture is handed to a freshly created element.
    pub fn with_kind(&self, kind: PointerKind) -> Self {
        Self {
            kind,
            pos: self.pos,
            button: if kind == PointerKind::Move {
                None
            } else {
                Some(MouseButton::Left)
            },
            buttons: Buttons::PRIMARY,
        }
    }
}
