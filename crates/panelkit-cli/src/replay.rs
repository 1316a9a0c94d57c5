//! Scripted host sessions.
//!
//! A script is a JSON array. Each step is either a pointer event
//! (`{"kind": "down", "pos": {...}, "button": "left"}`) or a host message
//! (`{"kind": "addFloatingPanel", "payload": {...}}`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use panelkit_bridge::{HostBridge, IpcMessage, ParamHost};
use panelkit_common::{Notification, PanelKitError, PointerEvent};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReplayStep {
    Pointer(PointerEvent),
    Host(IpcMessage),
}

/// What a replay produced besides the workspace changes.
#[derive(Debug, Default, Serialize)]
pub struct ReplayReport {
    pub steps: usize,
    pub replies: Vec<IpcMessage>,
    pub alerts: Vec<Notification>,
}

pub fn parse_script(text: &str) -> Result<Vec<ReplayStep>, PanelKitError> {
    serde_json::from_str(text).map_err(|e| PanelKitError::Other(format!("invalid replay script: {e}")))
}

pub fn load_script(path: &Path) -> Result<Vec<ReplayStep>, PanelKitError> {
    let text = std::fs::read_to_string(path)?;
    parse_script(&text)
}

/// Apply every step in order. Failing steps are reported as alerts and the
/// replay carries on.
pub fn replay<H: ParamHost>(bridge: &mut HostBridge<H>, steps: Vec<ReplayStep>) -> ReplayReport {
    let mut report = ReplayReport::default();
    for step in steps {
        report.steps += 1;
        match step {
            ReplayStep::Pointer(event) => {
                tracing::trace!(?event, "replay pointer");
                bridge.handle_pointer(&event);
            }
            ReplayStep::Host(message) => {
                tracing::debug!(kind = %message.kind, "replay message");
                if let Some(reply) = bridge.handle_ipc(&message.to_json()) {
                    report.replies.push(reply);
                }
            }
        }
        report.alerts.extend(bridge.drain_alerts());
    }
    report
}
