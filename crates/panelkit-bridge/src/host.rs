//! Entry points callable by the embedding host.
//!
//! Nothing here propagates an error to the host. Failures are logged and
//! queued as error notifications, which the host shows as alerts.

use std::fmt::Display;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;
use tracing::{debug, error, info};

use panelkit_common::{BridgeError, DockError, Notification, NotificationQueue, PointerEvent};
use panelkit_config::PanelKitConfig;
use panelkit_dock::{FloatId, Workspace, WorkspaceEvent};

use crate::ipc::{HostRequest, IpcMessage};
use crate::params::{InputKind, ParamBinder, ParamHost};

const ALERT_CAPACITY: usize = 32;

fn decode_base64(field: &'static str, encoded: &str) -> Result<String, BridgeError> {
    let bytes = STANDARD.decode(encoded).map_err(|e| BridgeError::Base64 {
        field,
        reason: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| BridgeError::Base64 {
        field,
        reason: e.to_string(),
    })
}

pub struct HostBridge<H: ParamHost> {
    workspace: Workspace,
    binder: ParamBinder,
    host: H,
    alerts: NotificationQueue,
}

impl<H: ParamHost> HostBridge<H> {
    pub fn new(workspace: Workspace, host: H) -> Self {
        Self {
            workspace,
            binder: ParamBinder::new(),
            host,
            alerts: NotificationQueue::new(ALERT_CAPACITY),
        }
    }

    pub fn from_config(config: &PanelKitConfig, host: H) -> Result<Self, DockError> {
        Ok(Self::new(Workspace::from_config(config)?, host))
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }

    pub fn binder(&self) -> &ParamBinder {
        &self.binder
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn alerts(&self) -> &NotificationQueue {
        &self.alerts
    }

    pub fn drain_alerts(&mut self) -> Vec<Notification> {
        self.alerts.drain()
    }

    pub fn drain_events(&mut self) -> Vec<WorkspaceEvent> {
        self.workspace.drain_events()
    }

    fn alert(&mut self, context: &str, err: impl Display) {
        error!(context, error = %err, "host call failed");
        self.alerts.push(Notification::error(context, err.to_string()));
    }

    /// Open a floating panel whose title and content arrive base64 encoded.
    /// `id` is the host's name for the panel.
    pub fn add_floating_panel_base64(
        &mut self,
        id: &str,
        title_b64: &str,
        content_b64: &str,
    ) -> Option<FloatId> {
        let decoded = decode_base64("title", title_b64)
            .and_then(|title| Ok((title, decode_base64("content", content_b64)?)));
        let (title, content) = match decoded {
            Ok(pair) => pair,
            Err(e) => {
                self.alert("addFloatingPanel", e);
                return None;
            }
        };
        match self
            .workspace
            .add_floating_panel_with_host_id(id, title, content)
        {
            Ok(floating) => {
                info!(host_id = id, %floating, "host opened floating panel");
                Some(floating)
            }
            Err(e) => {
                self.alert("addFloatingPanel", e);
                None
            }
        }
    }

    /// Bind input `id` to the host parameter of the same name.
    pub fn connect_param(&mut self, id: &str, kind: InputKind) -> bool {
        match self.binder.connect(&mut self.host, id, kind) {
            Ok(()) => true,
            Err(e) => {
                self.alert("connectParam", e);
                false
            }
        }
    }

    /// Pull the host's value of `id` into its input. `false` when nothing is
    /// bound under `id` or the update failed.
    pub fn update_param(&mut self, id: &str) -> bool {
        match self.binder.update(&mut self.host, id) {
            Ok(applied) => applied,
            Err(e) => {
                self.alert("updateParam", e);
                false
            }
        }
    }

    pub fn input_changed(&mut self, id: &str, raw: &str) -> bool {
        match self.binder.on_input(&mut self.host, id, raw) {
            Ok(_) => true,
            Err(e) => {
                self.alert("inputChanged", e);
                false
            }
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match self.workspace.handle_pointer(event) {
            Ok(claimed) => claimed,
            Err(e) => {
                self.alert("pointer", e);
                false
            }
        }
    }

    pub fn serialize_state(&mut self) -> Option<String> {
        match self.workspace.serialize_state() {
            Ok(state) => Some(state),
            Err(e) => {
                self.alert("serializeState", e);
                None
            }
        }
    }

    /// Handle one raw message from the host. Returns the reply to send back,
    /// if the request has one.
    pub fn handle_ipc(&mut self, raw: &str) -> Option<IpcMessage> {
        let request = match IpcMessage::from_json(raw).and_then(|m| HostRequest::try_from(&m)) {
            Ok(request) => request,
            Err(e) => {
                self.alert("ipc", e);
                return None;
            }
        };
        debug!(?request, "host request");
        self.dispatch(request)
    }

    pub fn dispatch(&mut self, request: HostRequest) -> Option<IpcMessage> {
        match request {
            HostRequest::AddFloatingPanel {
                id,
                title_b64,
                content_b64,
            } => {
                let floating = self.add_floating_panel_base64(&id, &title_b64, &content_b64)?;
                Some(IpcMessage::json(
                    "floatingPanelAdded",
                    json!({"id": id, "floating": floating.to_string()}),
                ))
            }
            HostRequest::ConnectParam { id, kind } => {
                let applied = self.connect_param(&id, kind);
                Some(IpcMessage::json("paramUpdated", json!({"id": id, "applied": applied})))
            }
            HostRequest::UpdateParam { id } => {
                let applied = self.update_param(&id);
                Some(IpcMessage::json("paramUpdated", json!({"id": id, "applied": applied})))
            }
            HostRequest::InputChanged { id, value } => {
                self.input_changed(&id, &value);
                None
            }
            HostRequest::SerializeState => {
                let state = self.serialize_state()?;
                Some(IpcMessage::text("state", state))
            }
            HostRequest::Pointer(event) => {
                self.handle_pointer(&event);
                None
            }
        }
    }
}
