//! Message protocol between the embedding host and the toolkit.
//!
//! Every message is one JSON object `{"kind": ..., "payload": ...}`:
//! - **host -> toolkit**: requests such as `addFloatingPanel` or `updateParam`,
//!   parsed into a [`HostRequest`] and run by [`crate::HostBridge::handle_ipc`].
//! - **toolkit -> host**: replies built with [`IpcMessage::json`] and sent back
//!   as text with [`IpcMessage::to_json`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use panelkit_common::{BridgeError, PointerEvent};

use crate::params::InputKind;

/// One message on the wire, in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of a message: a bare string or structured JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

impl IpcMessage {
    /// Parse a message from raw JSON text.
    pub fn from_json(raw: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(raw).map_err(|e| BridgeError::MalformedMessage(e.to_string()))
    }

    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Text(text.into()),
        }
    }

    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }

    fn payload_as<T: DeserializeOwned>(&self) -> Result<T, BridgeError> {
        let value = match &self.payload {
            IpcPayload::Json(value) => value.clone(),
            IpcPayload::Text(text) => serde_json::Value::String(text.clone()),
            IpcPayload::None => serde_json::Value::Null,
        };
        serde_json::from_value(value)
            .map_err(|e| BridgeError::MalformedMessage(format!("{}: {e}", self.kind)))
    }

    /// The target id of a request whose payload is either `"id"` or `{"id": ...}`.
    fn payload_id(&self) -> Result<String, BridgeError> {
        match &self.payload {
            IpcPayload::Text(id) => Ok(id.clone()),
            _ => self.payload_as::<IdArgs>().map(|args| args.id),
        }
    }
}

#[derive(Deserialize)]
struct IdArgs {
    id: String,
}

#[derive(Deserialize)]
struct FloatingArgs {
    id: String,
    title: String,
    content: String,
}

#[derive(Deserialize)]
struct ConnectArgs {
    id: String,
    #[serde(default)]
    kind: Option<String>,
}

#[derive(Deserialize)]
struct InputArgs {
    id: String,
    value: serde_json::Value,
}

/// A decoded host request.
#[derive(Debug, Clone, PartialEq)]
pub enum HostRequest {
    /// Open a floating panel. Title and content are base64 encoded.
    AddFloatingPanel {
        id: String,
        title_b64: String,
        content_b64: String,
    },
    ConnectParam { id: String, kind: InputKind },
    UpdateParam { id: String },
    /// The user edited a bound input. `value` is the input's raw text
    /// (`"true"`/`"false"` for checkboxes).
    InputChanged { id: String, value: String },
    SerializeState,
    Pointer(PointerEvent),
}

impl TryFrom<&IpcMessage> for HostRequest {
    type Error = BridgeError;

    fn try_from(message: &IpcMessage) -> Result<Self, Self::Error> {
        match message.kind.as_str() {
            "addFloatingPanel" => {
                let args: FloatingArgs = message.payload_as()?;
                Ok(HostRequest::AddFloatingPanel {
                    id: args.id,
                    title_b64: args.title,
                    content_b64: args.content,
                })
            }
            "connectParam" => {
                let args: ConnectArgs = message.payload_as()?;
                Ok(HostRequest::ConnectParam {
                    id: args.id,
                    kind: InputKind::from_dom_type(args.kind.as_deref().unwrap_or("text")),
                })
            }
            "updateParam" => Ok(HostRequest::UpdateParam {
                id: message.payload_id()?,
            }),
            "inputChanged" => {
                let args: InputArgs = message.payload_as()?;
                let value = match args.value {
                    serde_json::Value::String(text) => text,
                    other => other.to_string(),
                };
                Ok(HostRequest::InputChanged { id: args.id, value })
            }
            "serializeState" => Ok(HostRequest::SerializeState),
            "pointer" => message.payload_as().map(HostRequest::Pointer),
            other => Err(BridgeError::MalformedMessage(format!(
                "unknown message kind: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelkit_common::{PointerKind, Vec2};
    use serde_json::json;

    fn request(raw: &str) -> Result<HostRequest, BridgeError> {
        HostRequest::try_from(&IpcMessage::from_json(raw)?)
    }

    #[test]
    fn payload_defaults_to_none() {
        let msg = IpcMessage::from_json(r#"{"kind":"serializeState"}"#).unwrap();
        assert_eq!(msg.payload, IpcPayload::None);
        assert_eq!(request(r#"{"kind":"serializeState"}"#).unwrap(), HostRequest::SerializeState);
    }

    #[test]
    fn garbage_is_malformed() {
        let err = IpcMessage::from_json("{not json").unwrap_err();
        assert!(matches!(err, BridgeError::MalformedMessage(_)));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = request(r#"{"kind":"reticulate","payload":null}"#).unwrap_err();
        assert!(err.to_string().contains("unknown message kind: reticulate"));
    }

    #[test]
    fn add_floating_panel_fields() {
        let req = request(
            r#"{"kind":"addFloatingPanel","payload":{"id":"p1","title":"VGl0bGU=","content":"PGI+PC9iPg=="}}"#,
        )
        .unwrap();
        assert_eq!(
            req,
            HostRequest::AddFloatingPanel {
                id: "p1".into(),
                title_b64: "VGl0bGU=".into(),
                content_b64: "PGI+PC9iPg==".into(),
            }
        );
    }

    #[test]
    fn missing_field_names_the_kind() {
        let err = request(r#"{"kind":"addFloatingPanel","payload":{"id":"p1"}}"#).unwrap_err();
        assert!(err.to_string().starts_with("malformed message: addFloatingPanel"));
    }

    #[test]
    fn connect_param_kind_from_dom_type() {
        let req = request(r#"{"kind":"connectParam","payload":{"id":"gain","kind":"number"}}"#).unwrap();
        assert_eq!(
            req,
            HostRequest::ConnectParam {
                id: "gain".into(),
                kind: InputKind::Number
            }
        );
        let req = request(r#"{"kind":"connectParam","payload":{"id":"label"}}"#).unwrap();
        assert!(matches!(req, HostRequest::ConnectParam { kind: InputKind::Text, .. }));
    }

    #[test]
    fn update_param_accepts_text_or_object() {
        let a = request(r#"{"kind":"updateParam","payload":"gain"}"#).unwrap();
        let b = request(r#"{"kind":"updateParam","payload":{"id":"gain"}}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn input_changed_stringifies_non_text_values() {
        let req = request(r#"{"kind":"inputChanged","payload":{"id":"mute","value":true}}"#).unwrap();
        assert_eq!(
            req,
            HostRequest::InputChanged {
                id: "mute".into(),
                value: "true".into()
            }
        );
    }

    #[test]
    fn pointer_payload_is_a_pointer_event() {
        let req = request(r#"{"kind":"pointer","payload":{"kind":"down","pos":{"x":4.0,"y":5.0},"button":"left"}}"#)
            .unwrap();
        match req {
            HostRequest::Pointer(event) => {
                assert_eq!(event.kind, PointerKind::Down);
                assert_eq!(event.pos, Vec2::new(4.0, 5.0));
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn replies_serialize_as_envelopes() {
        let reply = IpcMessage::json("paramUpdated", json!({"id": "gain", "applied": true}));
        assert_eq!(
            reply.to_json(),
            r#"{"kind":"paramUpdated","payload":{"applied":true,"id":"gain"}}"#
        );
        assert_eq!(IpcMessage::text("alert", "boom").to_json(), r#"{"kind":"alert","payload":"boom"}"#);
    }
}
