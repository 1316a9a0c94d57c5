//! Host-embedding bridge for panelkit.
//!
//! The native application that embeds the toolkit talks to it through:
//! - JSON IPC messages (`{"kind", "payload"}`), see [`ipc`]
//! - a base64 entry point that opens a floating panel
//! - two-way parameter binding between input elements and host values
//!
//! Every entry point converts failures into alert notifications instead of
//! returning them to the host.

pub mod host;
pub mod ipc;
pub mod params;

pub use host::HostBridge;
pub use ipc::{HostRequest, IpcMessage, IpcPayload};
pub use params::{envelope, BoundInput, InputKind, MemoryParamHost, ParamBinder, ParamHost};
