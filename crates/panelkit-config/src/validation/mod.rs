//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod docking;
mod helpers;
mod layout;


use crate::schema::PanelKitConfig;
use panelkit_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PanelKitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    docking::validate_docking(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    layout::validate_nodes(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
