use panelkit_common::units::css_length_to_px;
use panelkit_common::{DockError, Vec2};
use panelkit_config::PanelKitConfig;

/// Behavioural constants of the docking state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct DockSettings {
    pub detach_threshold: f64,
    pub tab_strip_margin: f64,
    pub resize_tolerance: f64,
    pub z_index_base: u32,
    pub drag_opacity: f64,
    pub floating_size: Vec2,
}

impl Default for DockSettings {
    fn default() -> Self {
        Self {
            detach_threshold: 20.0,
            tab_strip_margin: 10.0,
            resize_tolerance: 10.0,
            z_index_base: 100,
            drag_opacity: 0.5,
            floating_size: Vec2::new(420.0, 300.0),
        }
    }
}

impl DockSettings {
    /// Resolve the docking section of a config. Floating sizes may be given in
    /// `vw`, resolved against the configured viewport width.
    pub fn from_config(config: &PanelKitConfig) -> Result<Self, DockError> {
        let docking = &config.docking;
        let viewport = config.layout.viewport_width;
        Ok(Self {
            detach_threshold: docking.detach_threshold,
            tab_strip_margin: docking.tab_strip_margin,
            resize_tolerance: docking.resize_tolerance,
            z_index_base: docking.z_index_base,
            drag_opacity: docking.drag_opacity,
            floating_size: Vec2::new(
                css_length_to_px(&docking.floating_width, viewport)?,
                css_length_to_px(&docking.floating_height, viewport)?,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_default_config() {
        let settings = DockSettings::from_config(&PanelKitConfig::default()).unwrap();
        assert_eq!(settings, DockSettings::default());
    }

    #[test]
    fn viewport_relative_floating_size() {
        let mut config = PanelKitConfig::default();
        config.layout.viewport_width = 1000.0;
        config.docking.floating_width = "30vw".into();
        let settings = DockSettings::from_config(&config).unwrap();
        assert_eq!(settings.floating_size, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn bad_unit_is_rejected() {
        let mut config = PanelKitConfig::default();
        config.docking.floating_height = "12rem".into();
        let err = DockSettings::from_config(&config).unwrap_err();
        assert!(matches!(err, DockError::UnknownUnit(_)));
    }
}
