//! Docking behaviour: drag thresholds, stacking, floating panel defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DockingConfig {
    /// Header drag distance before a docked panel tears off (valid range: 1-200).
    pub detach_threshold: f64,
    /// Margin around a tab strip the pointer may leave before a tab is
    /// dragged out into its own floating panel (valid range: 0-100).
    pub tab_strip_margin: f64,
    /// Distance from the right/bottom edge of a floating panel that arms a
    /// resize (valid range: 1-50).
    pub resize_tolerance: f64,
    /// First stacking index handed to floating panels.
    pub z_index_base: u32,
    /// Opacity of whatever is being dragged (valid range: 0.05-1.0).
    pub drag_opacity: f64,
    /// Initial size of a freshly created floating panel, `px` or `vw`.
    pub floating_width: String,
    pub floating_height: String,
}

impl Default for DockingConfig {
    fn default() -> Self {
        Self {
            detach_threshold: 20.0,
            tab_strip_margin: 10.0,
            resize_tolerance: 10.0,
            z_index_base: 100,
            drag_opacity: 0.5,
            floating_width: "420px".into(),
            floating_height: "300px".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docking_config_defaults() {
        let config = DockingConfig::default();
        assert_eq!(config.detach_threshold, 20.0);
        assert_eq!(config.tab_strip_margin, 10.0);
        assert_eq!(config.resize_tolerance, 10.0);
        assert_eq!(config.z_index_base, 100);
        assert_eq!(config.floating_width, "420px");
    }

    #[test]
    fn docking_config_partial_toml() {
        let config: DockingConfig = toml::from_str(
            r#"
detach_threshold = 8.0
floating_width = "30vw"
"#,
        )
        .unwrap();
        assert_eq!(config.detach_threshold, 8.0);
        assert_eq!(config.floating_width, "30vw");
        assert_eq!(config.drag_opacity, 0.5);
    }
}
