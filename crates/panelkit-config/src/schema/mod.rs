//! Configuration schema types for panelkit.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod docking;
mod layout;
mod system;

pub use docking::*;
pub use layout::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration. Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct PanelKitConfig {
    pub docking: DockingConfig,
    pub layout: LayoutConfig,
    pub nodes: NodesConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config: PanelKitConfig = toml::from_str("").unwrap();
        assert_eq!(config, PanelKitConfig::default());
    }

    #[test]
    fn sections_parse_independently() {
        let config: PanelKitConfig = toml::from_str(
            r#"
[layout]
tab_width = 80.0

[nodes]
slot_height = 30.0

[logging]
level = "warn"
"#,
        )
        .unwrap();
        assert_eq!(config.layout.tab_width, 80.0);
        assert_eq!(config.layout.header_height, 24.0);
        assert_eq!(config.nodes.slot_height, 30.0);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.docking, DockingConfig::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: PanelKitConfig = toml::from_str(
            r#"
[docking]
something_new = true
"#,
        )
        .unwrap();
        assert_eq!(config.docking.detach_threshold, 20.0);
    }
}
