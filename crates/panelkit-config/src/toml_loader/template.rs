//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# panelkit configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[docking]
# detach_threshold = 20.0     # 1-200, px of header drag before a panel tears off
# tab_strip_margin = 10.0     # 0-100, px outside the tab strip before a tab floats
# resize_tolerance = 10.0     # 1-50, px from the right/bottom edge that arms resize
# z_index_base = 100
# drag_opacity = 0.5          # 0.05-1.0
# floating_width = "420px"    # px or vw
# floating_height = "300px"

[layout]
# header_height = 24.0
# tab_strip_height = 24.0
# tab_width = 120.0
# split_gap = 4.0
# drop_indicator_size = 32.0
# drop_indicator_offset = 40.0
# viewport_width = 1280.0
# viewport_height = 800.0

[nodes]
# node_width = 160.0
# header_height = 24.0
# slot_height = 20.0
# handle_size = 10.0
# z_index_base = 100

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
}
