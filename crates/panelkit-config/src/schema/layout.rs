//! Geometry used by the built-in layout engine and hit-testing.

use serde::{Deserialize, Serialize};

/// Docking layout metrics, in pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of docked and floating panel headers (valid range: 8-96).
    pub header_height: f64,
    /// Height of a tab group's header strip (valid range: 8-96).
    pub tab_strip_height: f64,
    /// Width of one tab header (valid range: 16-600).
    pub tab_width: f64,
    /// Gap between split children (valid range: 0-40).
    pub split_gap: f64,
    /// Side length of a drop indicator square (valid range: 4-200).
    pub drop_indicator_size: f64,
    /// Distance of each drop indicator from the content centre (valid range: 0-400).
    pub drop_indicator_offset: f64,
    /// Size of the area the root docked panel fills.
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: 24.0,
            tab_strip_height: 24.0,
            tab_width: 120.0,
            split_gap: 4.0,
            drop_indicator_size: 32.0,
            drop_indicator_offset: 40.0,
            viewport_width: 1280.0,
            viewport_height: 800.0,
        }
    }
}

/// Node editor metrics, in pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NodesConfig {
    pub node_width: f64,
    pub header_height: f64,
    /// Vertical pitch of one slot row.
    pub slot_height: f64,
    /// Side length of the square connection handle on a slot.
    pub handle_size: f64,
    pub z_index_base: u32,
}

impl Default for NodesConfig {
    fn default() -> Self {
        Self {
            node_width: 160.0,
            header_height: 24.0,
            slot_height: 20.0,
            handle_size: 10.0,
            z_index_base: 100,
        }
    }
}
