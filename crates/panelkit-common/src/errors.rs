use std::fmt;
use std::panic::Location;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Where an invariant check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

fn fmt_detail(detail: &Option<String>) -> String {
    detail
        .as_ref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}

#[derive(Debug, thiserror::Error)]
pub enum DockError {
    /// A programming or integration error: duplicate child, missing child,
    /// overlapping drags. Never an expected runtime condition.
    #[error("assert failed at {location}: {message}{}", fmt_detail(.detail))]
    Invariant {
        message: String,
        location: CallSite,
        detail: Option<String>,
    },

    #[error("unknown unit: '{0}'")]
    UnknownUnit(String),

    #[error("no such {kind}: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl DockError {
    #[track_caller]
    pub fn invariant(message: impl Into<String>) -> Self {
        DockError::Invariant {
            message: message.into(),
            location: CallSite::caller(),
            detail: None,
        }
    }

    #[track_caller]
    pub fn invariant_with(message: impl Into<String>, detail: impl fmt::Debug) -> Self {
        DockError::Invariant {
            message: message.into(),
            location: CallSite::caller(),
            detail: Some(format!("{detail:?}")),
        }
    }

    pub fn not_found(kind: &'static str, id: impl fmt::Display) -> Self {
        DockError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn is_invariant(&self) -> bool {
        matches!(self, DockError::Invariant { .. })
    }
}

/// Fail with an invariant violation unless `condition` holds.
#[track_caller]
pub fn ensure(condition: bool, message: &str) -> Result<(), DockError> {
    if condition {
        Ok(())
    } else {
        Err(DockError::invariant(message))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("malformed message: {0}")]
    MalformedMessage(String),

    #[error("malformed input for '{id}': {value}")]
    MalformedInput { id: String, value: String },

    #[error("type mismatch for '{id}': expected {expected}, got {got}")]
    TypeMismatch {
        id: String,
        expected: &'static str,
        got: String,
    },

    #[error("invalid base64 in {field}: {reason}")]
    Base64 { field: &'static str, reason: String },

    #[error("parameter not bound: {0}")]
    Unbound(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PanelKitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dock(#[from] DockError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("docking.detach_threshold".into());
        assert_eq!(
            err.to_string(),
            "config validation error: docking.detach_threshold"
        );
    }

    #[test]
    fn invariant_captures_call_site() {
        let err = DockError::invariant("Trying to add item already present");
        match &err {
            DockError::Invariant { location, .. } => {
                assert!(location.file.ends_with("errors.rs"));
                assert!(location.line > 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_invariant());
        assert!(err.to_string().contains("Trying to add item already present"));
    }

    #[test]
    fn invariant_with_detail_renders_it() {
        let err = DockError::invariant_with("index out of bounds", (4, 2));
        assert!(err.to_string().ends_with("index out of bounds ((4, 2))"));
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert!(ensure(true, "fine").is_ok());
        let err = ensure(false, "broken").unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn bridge_error_display() {
        let err = BridgeError::TypeMismatch {
            id: "gain".into(),
            expected: "number",
            got: "\"loud\"".into(),
        };
        assert_eq!(
            err.to_string(),
            "type mismatch for 'gain': expected number, got \"loud\""
        );
    }

    #[test]
    fn umbrella_from_variants() {
        let err: PanelKitError = DockError::UnknownUnit("12em".into()).into();
        assert!(matches!(err, PanelKitError::Dock(_)));
        assert_eq!(err.to_string(), "unknown unit: '12em'");

        let err: PanelKitError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, PanelKitError::Config(_)));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PanelKitError = io_err.into();
        assert!(err.to_string().contains("file missing"));
    }
}
