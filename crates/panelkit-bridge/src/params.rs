//! Two-way binding between input elements and host-owned parameters.
//!
//! Values travel as `{"value": {"<id>": <value>}}` JSON in both directions.
//! The input's declared kind decides the JSON type: checkbox -> boolean,
//! number -> integer, anything else -> string.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use panelkit_common::BridgeError;

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern compiles"));

/// Declared type of a bound input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Checkbox,
    Number,
    Text,
}

impl InputKind {
    /// Map an `<input type=...>` attribute. Unknown types behave as text.
    pub fn from_dom_type(ty: &str) -> Self {
        match ty {
            "checkbox" => InputKind::Checkbox,
            "number" => InputKind::Number,
            _ => InputKind::Text,
        }
    }

    fn expected(self) -> &'static str {
        match self {
            InputKind::Checkbox => "boolean",
            InputKind::Number => "number",
            InputKind::Text => "string",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            InputKind::Checkbox => value.is_boolean(),
            InputKind::Number => value.is_number(),
            InputKind::Text => value.is_string(),
        }
    }
}

/// The host side of the binding. Both calls exchange envelope JSON text.
pub trait ParamHost {
    fn get_param(&mut self, id: &str) -> Result<String, BridgeError>;
    fn set_param(&mut self, id: &str, json: &str) -> Result<(), BridgeError>;
}

/// Wrap `value` as `{"value": {id: value}}`.
pub fn envelope(id: &str, value: Value) -> Value {
    let mut inner = Map::new();
    inner.insert(id.to_string(), value);
    let mut outer = Map::new();
    outer.insert("value".to_string(), Value::Object(inner));
    Value::Object(outer)
}

/// Pull `id`'s value out of envelope JSON text.
pub fn unwrap_envelope(id: &str, json: &str) -> Result<Value, BridgeError> {
    let parsed: Value =
        serde_json::from_str(json).map_err(|e| BridgeError::MalformedMessage(e.to_string()))?;
    parsed
        .get("value")
        .and_then(|inner| inner.get(id))
        .cloned()
        .ok_or_else(|| BridgeError::MalformedMessage(format!("no value for '{id}' in {json}")))
}

/// An input element currently bound to a host parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundInput {
    pub kind: InputKind,
    /// Last value shown in the element, as JSON.
    pub value: Value,
}

#[derive(Debug, Default)]
pub struct ParamBinder {
    inputs: BTreeMap<String, BoundInput>,
}

impl ParamBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&BoundInput> {
        self.inputs.get(id)
    }

    pub fn is_bound(&self, id: &str) -> bool {
        self.inputs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Bind input `id` and immediately pull the host's current value into it.
    pub fn connect(
        &mut self,
        host: &mut dyn ParamHost,
        id: &str,
        kind: InputKind,
    ) -> Result<(), BridgeError> {
        if self.inputs.contains_key(id) {
            warn!(id, ?kind, "rebinding already connected input");
        }
        self.inputs.insert(
            id.to_string(),
            BoundInput {
                kind,
                value: Value::Null,
            },
        );
        debug!(id, ?kind, "connected input");
        self.update(host, id).map(|_| ())
    }

    /// Refresh input `id` from the host. `Ok(false)` when nothing is bound.
    pub fn update(&mut self, host: &mut dyn ParamHost, id: &str) -> Result<bool, BridgeError> {
        let Some(kind) = self.inputs.get(id).map(|input| input.kind) else {
            return Ok(false);
        };
        let json = host.get_param(id)?;
        let value = unwrap_envelope(id, &json)?;
        if !kind.accepts(&value) {
            return Err(BridgeError::TypeMismatch {
                id: id.to_string(),
                expected: kind.expected(),
                got: value.to_string(),
            });
        }
        debug!(id, %value, "input updated from host");
        if let Some(input) = self.inputs.get_mut(id) {
            input.value = value;
        }
        Ok(true)
    }

    /// The user edited input `id`; coerce `raw` by the input's kind and push it
    /// to the host. Returns the value sent.
    pub fn on_input(
        &mut self,
        host: &mut dyn ParamHost,
        id: &str,
        raw: &str,
    ) -> Result<Value, BridgeError> {
        let kind = self
            .inputs
            .get(id)
            .map(|input| input.kind)
            .ok_or_else(|| BridgeError::Unbound(id.to_string()))?;
        let value = coerce(id, kind, raw)?;
        let json = envelope(id, value.clone()).to_string();
        host.set_param(id, &json)?;
        debug!(id, %json, "input pushed to host");
        if let Some(input) = self.inputs.get_mut(id) {
            input.value = value.clone();
        }
        Ok(value)
    }
}

fn coerce(id: &str, kind: InputKind, raw: &str) -> Result<Value, BridgeError> {
    let malformed = || BridgeError::MalformedInput {
        id: id.to_string(),
        value: raw.to_string(),
    };
    match kind {
        InputKind::Checkbox => match raw {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(malformed()),
        },
        InputKind::Number => {
            if !INTEGER_RE.is_match(raw) {
                return Err(malformed());
            }
            raw.parse::<i64>()
                .map(Value::from)
                .map_err(|_| malformed())
        }
        InputKind::Text => Ok(Value::String(raw.to_string())),
    }
}

/// Parameter store kept in memory. Stands in for a native host in tests and
/// in the command line tool.
#[derive(Debug, Default, Clone)]
pub struct MemoryParamHost {
    values: BTreeMap<String, Value>,
}

impl MemoryParamHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, value: Value) -> Self {
        self.values.insert(id.into(), value);
        self
    }

    pub fn value(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, value: Value) {
        self.values.insert(id.into(), value);
    }
}

impl ParamHost for MemoryParamHost {
    fn get_param(&mut self, id: &str) -> Result<String, BridgeError> {
        let value = self
            .values
            .get(id)
            .cloned()
            .ok_or_else(|| BridgeError::Unbound(id.to_string()))?;
        Ok(envelope(id, value).to_string())
    }

    fn set_param(&mut self, id: &str, json: &str) -> Result<(), BridgeError> {
        let value = unwrap_envelope(id, json)?;
        self.values.insert(id.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn host() -> MemoryParamHost {
        MemoryParamHost::new()
            .with("mute", json!(false))
            .with("gain", json!(12))
            .with("label", json!("Kick"))
    }

    #[test]
    fn envelope_shape() {
        assert_eq!(envelope("gain", json!(3)), json!({"value": {"gain": 3}}));
        assert_eq!(unwrap_envelope("gain", r#"{"value":{"gain":3}}"#).unwrap(), json!(3));
        assert!(unwrap_envelope("gain", r#"{"value":{}}"#).is_err());
    }

    #[test]
    fn connect_pulls_host_value() {
        let mut host = host();
        let mut binder = ParamBinder::new();
        binder.connect(&mut host, "gain", InputKind::Number).unwrap();
        assert_eq!(binder.get("gain").unwrap().value, json!(12));
        binder.connect(&mut host, "mute", InputKind::Checkbox).unwrap();
        assert_eq!(binder.get("mute").unwrap().value, json!(false));
        assert_eq!(binder.len(), 2);
    }

    #[test]
    fn update_without_binding_is_false() {
        let mut host = host();
        let mut binder = ParamBinder::new();
        assert!(!binder.update(&mut host, "gain").unwrap());
    }

    #[test]
    fn update_rejects_wrong_type() {
        let mut host = host();
        let mut binder = ParamBinder::new();
        binder.connect(&mut host, "label", InputKind::Text).unwrap();
        host.insert("label", json!(5));
        let err = binder.update(&mut host, "label").unwrap_err();
        match err {
            BridgeError::TypeMismatch { id, expected, got } => {
                assert_eq!(id, "label");
                assert_eq!(expected, "string");
                assert_eq!(got, "5");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(binder.get("label").unwrap().value, json!("Kick"));
    }

    #[test]
    fn connect_with_mismatched_host_value_fails() {
        let mut host = host();
        let mut binder = ParamBinder::new();
        let err = binder.connect(&mut host, "label", InputKind::Checkbox).unwrap_err();
        assert!(matches!(err, BridgeError::TypeMismatch { expected: "boolean", .. }));
    }

    #[test]
    fn input_marshals_by_kind() {
        let mut host = host();
        let mut binder = ParamBinder::new();
        binder.connect(&mut host, "mute", InputKind::Checkbox).unwrap();
        binder.connect(&mut host, "gain", InputKind::Number).unwrap();
        binder.connect(&mut host, "label", InputKind::Text).unwrap();

        assert_eq!(binder.on_input(&mut host, "mute", "true").unwrap(), json!(true));
        assert_eq!(binder.on_input(&mut host, "gain", "-7").unwrap(), json!(-7));
        assert_eq!(binder.on_input(&mut host, "label", "42").unwrap(), json!("42"));

        assert_eq!(host.value("mute"), Some(&json!(true)));
        assert_eq!(host.value("gain"), Some(&json!(-7)));
        assert_eq!(host.value("label"), Some(&json!("42")));
    }

    #[test]
    fn number_input_must_be_an_integer() {
        let mut host = host();
        let mut binder = ParamBinder::new();
        binder.connect(&mut host, "gain", InputKind::Number).unwrap();
        for raw in ["1.5", "", "12a", " 3"] {
            let err = binder.on_input(&mut host, "gain", raw).unwrap_err();
            assert!(matches!(err, BridgeError::MalformedInput { .. }), "{raw:?}");
        }
        assert_eq!(binder.on_input(&mut host, "gain", "+8").unwrap(), json!(8));
        assert_eq!(host.value("gain"), Some(&json!(8)));
    }

    #[test]
    fn input_on_unbound_id_fails() {
        let mut host = host();
        let mut binder = ParamBinder::new();
        let err = binder.on_input(&mut host, "gain", "1").unwrap_err();
        assert!(matches!(err, BridgeError::Unbound(id) if id == "gain"));
    }

    #[test]
    fn dom_types() {
        assert_eq!(InputKind::from_dom_type("checkbox"), InputKind::Checkbox);
        assert_eq!(InputKind::from_dom_type("number"), InputKind::Number);
        assert_eq!(InputKind::from_dom_type("range"), InputKind::Text);
    }
}
