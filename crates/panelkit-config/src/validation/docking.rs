//! Docking configuration validation (thresholds, opacity, floating size).

use crate::schema::PanelKitConfig;

use super::helpers::{validate_css_length, validate_range, validate_range_f64};

pub(crate) fn validate_docking(errors: &mut Vec<String>, config: &PanelKitConfig) {
    let docking = &config.docking;
    validate_range_f64(
        errors,
        "docking.detach_threshold",
        docking.detach_threshold,
        1.0,
        200.0,
    );
    validate_range_f64(
        errors,
        "docking.tab_strip_margin",
        docking.tab_strip_margin,
        0.0,
        100.0,
    );
    validate_range_f64(
        errors,
        "docking.resize_tolerance",
        docking.resize_tolerance,
        1.0,
        50.0,
    );
    validate_range_f64(errors, "docking.drag_opacity", docking.drag_opacity, 0.05, 1.0);
    validate_range(
        errors,
        "docking.z_index_base",
        docking.z_index_base,
        0,
        1_000_000,
    );

    let viewport = config.layout.viewport_width;
    validate_css_length(errors, "docking.floating_width", &docking.floating_width, viewport);
    validate_css_length(errors, "docking.floating_height", &docking.floating_height, viewport);
}
