//! Sample session: a split docked layout, one floating panel and a small
//! node graph.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use panelkit_bridge::{HostBridge, ParamHost};
use panelkit_common::{PanelKitError, Vec2};
use panelkit_config::NodesConfig;
use panelkit_dock::{DockChild, Orientation, WorkspaceState};
use panelkit_nodes::{NodeGraph, SlotKind};

#[derive(Debug, Serialize)]
pub struct DemoConnection {
    pub id: String,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct DemoOutput {
    pub workspace: WorkspaceState,
    pub connections: Vec<DemoConnection>,
}

/// Lay out the sample docked tree and float a log panel.
pub fn build_layout<H: ParamHost>(bridge: &mut HostBridge<H>) -> Result<(), PanelKitError> {
    let workspace = bridge.workspace_mut();
    let scene = workspace.create_group_with(&[("Scene", "<canvas></canvas>"), ("Game", "<canvas></canvas>")])?;
    let hierarchy = workspace.create_group_with(&[("Hierarchy", "<ul></ul>")])?;
    let inspector = workspace.create_group_with(&[("Inspector", "<form></form>")])?;

    let left = workspace.create_panel(Some(DockChild::Group(hierarchy)))?;
    let right = workspace.create_panel(Some(DockChild::Group(scene)))?;
    workspace.add_item(right, DockChild::Group(inspector), false)?;
    workspace.set_orientation(right, Orientation::Vertical)?;

    let root = workspace.create_panel(Some(DockChild::Panel(left)))?;
    workspace.add_item(root, DockChild::Panel(right), false)?;
    workspace.set_root(root)?;

    bridge.add_floating_panel_base64("log", &STANDARD.encode("Log"), &STANDARD.encode("<pre></pre>"));
    Ok(())
}

/// Two oscillators mixed into one output.
pub fn build_graph(metrics: NodesConfig) -> Result<NodeGraph, PanelKitError> {
    let mut graph = NodeGraph::new(metrics);
    let osc_a = graph.add_node("Oscillator A", Vec2::new(40.0, 40.0));
    let osc_b = graph.add_node("Oscillator B", Vec2::new(40.0, 200.0));
    let mixer = graph.add_node("Mixer", Vec2::new(320.0, 120.0));

    let out_a = graph.add_slot(osc_a, "out", SlotKind::Output)?;
    let out_b = graph.add_slot(osc_b, "out", SlotKind::Output)?;
    let in_1 = graph.add_slot(mixer, "in 1", SlotKind::Input)?;
    let in_2 = graph.add_slot(mixer, "in 2", SlotKind::Input)?;
    graph.add_slot(mixer, "mix", SlotKind::Output)?;

    graph.connect(out_a, in_1)?;
    graph.connect(out_b, in_2)?;
    Ok(graph)
}

pub fn run<H: ParamHost>(
    bridge: &mut HostBridge<H>,
    metrics: NodesConfig,
) -> Result<DemoOutput, PanelKitError> {
    build_layout(bridge)?;
    let graph = build_graph(metrics)?;
    let connections = graph
        .connections()
        .map(|c| DemoConnection {
            id: c.id().to_string(),
            path: c.path_data(),
        })
        .collect();
    Ok(DemoOutput {
        workspace: bridge.workspace().workspace_state()?,
        connections,
    })
}
