//! panelkit configuration.
//!
//! TOML-based configuration for docking behaviour, layout metrics, the node
//! editor and logging. Every section uses defaults so partial configs work.
//!
//! ```rust,no_run
//! use panelkit_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.layout.tab_width);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    DockingConfig, LayoutConfig, LogLevel, LoggingConfig, NodesConfig, PanelKitConfig,
    CONFIG_SCHEMA_VERSION,
};
pub use toml_loader::{load_default, load_from_path};

use panelkit_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<PanelKitConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PanelKitConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
