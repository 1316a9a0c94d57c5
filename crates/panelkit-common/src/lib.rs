pub mod drag;
pub mod errors;
pub mod events;
pub mod input;
pub mod notifications;
pub mod types;
pub mod units;

pub use drag::{DragCallbacks, DragHandler, DragPhase, DragStatus, DragTracker};
pub use errors::{ensure, BridgeError, CallSite, ConfigError, DockError, PanelKitError};
pub use events::EventQueue;
pub use input::{Buttons, MouseButton, PointerEvent, PointerKind};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use types::{Rect, Vec2};

pub type Result<T> = std::result::Result<T, PanelKitError>;
