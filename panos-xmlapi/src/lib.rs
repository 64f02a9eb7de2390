//! PAN-OS XML API primitives used by higher-level provisioning tools.

pub mod client;
pub mod element;
pub mod object;
pub mod render;
pub mod response;
pub mod session;

pub use client::XmlApiClient;
pub use element::ConfigElement;
pub use object::{ConfigObject, ObjectKind};
pub use render::{render, RenderError};
pub use session::{ApiError, DeviceSession, RecordingSession, SessionCall};
