//! Layout and node metric validation.

use crate::schema::PanelKitConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &PanelKitConfig) {
    let layout = &config.layout;
    validate_range_f64(errors, "layout.header_height", layout.header_height, 8.0, 96.0);
    validate_range_f64(
        errors,
        "layout.tab_strip_height",
        layout.tab_strip_height,
        8.0,
        96.0,
    );
    validate_range_f64(errors, "layout.tab_width", layout.tab_width, 16.0, 600.0);
    validate_range_f64(errors, "layout.split_gap", layout.split_gap, 0.0, 40.0);
    validate_range_f64(
        errors,
        "layout.drop_indicator_size",
        layout.drop_indicator_size,
        4.0,
        200.0,
    );
    validate_range_f64(
        errors,
        "layout.drop_indicator_offset",
        layout.drop_indicator_offset,
        0.0,
        400.0,
    );
    validate_range_f64(
        errors,
        "layout.viewport_width",
        layout.viewport_width,
        100.0,
        16384.0,
    );
    validate_range_f64(
        errors,
        "layout.viewport_height",
        layout.viewport_height,
        100.0,
        16384.0,
    );
}

pub(crate) fn validate_nodes(errors: &mut Vec<String>, config: &PanelKitConfig) {
    let nodes = &config.nodes;
    validate_range_f64(errors, "nodes.node_width", nodes.node_width, 40.0, 1000.0);
    validate_range_f64(errors, "nodes.header_height", nodes.header_height, 8.0, 96.0);
    validate_range_f64(errors, "nodes.slot_height", nodes.slot_height, 8.0, 96.0);
    validate_range_f64(errors, "nodes.handle_size", nodes.handle_size, 2.0, 48.0);
    validate_range(errors, "nodes.z_index_base", nodes.z_index_base, 0, 1_000_000);
}
