use thiserror::Error;

use crate::object::{ConfigObject, ObjectKind};
use crate::render::RenderError;

/// Errors raised while talking to a device API session.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The device accepted the request transport but rejected its content.
    #[error("device rejected the request (code {code}): {message}")]
    Device { code: String, message: String },
    /// The response payload did not look like a device API response.
    #[error("malformed API response: {0}")]
    Malformed(String),
    /// Response XML could not be tokenized.
    #[error("failed to parse API response: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Failed to decode a text entity in the response.
    #[error("failed to decode API response text: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    /// Response bytes were not valid UTF-8 where text was expected.
    #[error("invalid UTF-8 in API response: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// An object body could not be rendered to XML.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The HTTP request itself failed.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// A stateful device configuration session.
///
/// `bulk_create` submits the full ordered list of same-kind objects in one
/// operation; an empty list is a no-op. `create` submits a single object.
/// Both raise [`ApiError`] on any device-side rejection.
pub trait DeviceSession {
    fn bulk_create(&mut self, kind: ObjectKind, objects: &[ConfigObject]) -> Result<(), ApiError>;
    fn create(&mut self, object: &ConfigObject) -> Result<(), ApiError>;
}

/// One recorded call against a [`RecordingSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCall {
    BulkCreate { kind: ObjectKind, names: Vec<String> },
    Create { kind: ObjectKind, name: String },
}

/// In-memory session double that records every call, optionally failing
/// when a configured object kind is submitted.
#[derive(Debug, Default)]
pub struct RecordingSession {
    pub calls: Vec<SessionCall>,
    fail_on: Option<(ObjectKind, String)>,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session that rejects every submission touching `kind`
    /// with a device error carrying `message`. Calls are still recorded.
    pub fn failing_on(kind: ObjectKind, message: &str) -> Self {
        Self {
            calls: Vec::new(),
            fail_on: Some((kind, message.to_string())),
        }
    }

    fn check_failure(&self, kind: ObjectKind) -> Result<(), ApiError> {
        match &self.fail_on {
            Some((fail_kind, message)) if *fail_kind == kind => Err(ApiError::Device {
                code: "conflict".to_string(),
                message: message.clone(),
            }),
            _ => Ok(()),
        }
    }
}

impl DeviceSession for RecordingSession {
    fn bulk_create(&mut self, kind: ObjectKind, objects: &[ConfigObject]) -> Result<(), ApiError> {
        self.calls.push(SessionCall::BulkCreate {
            kind,
            names: objects.iter().map(|o| o.name.clone()).collect(),
        });
        self.check_failure(kind)
    }

    fn create(&mut self, object: &ConfigObject) -> Result<(), ApiError> {
        self.calls.push(SessionCall::Create {
            kind: object.kind,
            name: object.name.clone(),
        });
        self.check_failure(object.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::{DeviceSession, RecordingSession, SessionCall};
    use crate::element::ConfigElement;
    use crate::object::{ConfigObject, ObjectKind};

    #[test]
    fn records_bulk_and_single_calls_in_order() {
        let mut session = RecordingSession::new();
        let gw = ConfigObject::new(
            ObjectKind::IkeGateway,
            "gw-1",
            ConfigElement::entry("gw-1"),
        );

        session
            .bulk_create(ObjectKind::IkeGateway, std::slice::from_ref(&gw))
            .expect("bulk");
        session.create(&gw).expect("create");

        assert_eq!(
            session.calls,
            vec![
                SessionCall::BulkCreate {
                    kind: ObjectKind::IkeGateway,
                    names: vec!["gw-1".to_string()],
                },
                SessionCall::Create {
                    kind: ObjectKind::IkeGateway,
                    name: "gw-1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn failing_session_rejects_configured_kind() {
        let mut session = RecordingSession::failing_on(ObjectKind::Zone, "zone exists");
        let zone = ConfigObject::new(ObjectKind::Zone, "vpn", ConfigElement::entry("vpn"));

        let err = session.create(&zone).expect_err("should fail");
        assert!(err.to_string().contains("zone exists"));
        assert_eq!(session.calls.len(), 1);
    }

    #[test]
    fn failing_session_rejects_every_matching_call() {
        let mut session = RecordingSession::failing_on(ObjectKind::Zone, "zone exists");
        let zone = ConfigObject::new(ObjectKind::Zone, "vpn", ConfigElement::entry("vpn"));

        session.create(&zone).expect_err("should fail");
        session.create(&zone).expect_err("should fail again");
        assert_eq!(session.calls.len(), 2);
    }
}
