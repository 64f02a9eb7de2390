use crate::object::{ConfigObject, ObjectKind};
use crate::render::render;
use crate::response;
use crate::session::{ApiError, DeviceSession};

/// Blocking HTTPS client for the device XML API.
///
/// Authenticates once with `type=keygen` and then issues
/// `type=config&action=set` requests against candidate-configuration
/// xpaths. A bulk create sends all entries of one kind in a single set
/// request at the kind's container xpath.
pub struct XmlApiClient {
    http: reqwest::blocking::Client,
    base: String,
    key: String,
}

impl XmlApiClient {
    /// Open a session against `host`, exchanging the credentials for an
    /// API key.
    ///
    /// Firewalls commonly run with self-signed certificates; pass
    /// `accept_invalid_certs` to skip verification for those devices.
    pub fn connect(
        host: &str,
        username: &str,
        password: &str,
        accept_invalid_certs: bool,
    ) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        let base = format!("https://{host}/api/");

        let body = http
            .get(&base)
            .query(&[
                ("type", "keygen"),
                ("user", username),
                ("password", password),
            ])
            .send()?
            .bytes()?;
        let key = response::parse_keygen(&body)?;

        Ok(Self { http, base, key })
    }

    fn set(&self, xpath: &str, element: &str) -> Result<(), ApiError> {
        let body = self
            .http
            .get(&self.base)
            .query(&[
                ("type", "config"),
                ("action", "set"),
                ("key", self.key.as_str()),
                ("xpath", xpath),
                ("element", element),
            ])
            .send()?
            .bytes()?;
        response::check_status(&body)
    }
}

impl DeviceSession for XmlApiClient {
    fn bulk_create(&mut self, kind: ObjectKind, objects: &[ConfigObject]) -> Result<(), ApiError> {
        if objects.is_empty() {
            return Ok(());
        }

        let mut payload = String::new();
        for object in objects {
            payload.push_str(&render(&object.entry)?);
        }
        self.set(&kind.xpath(), &payload)
    }

    fn create(&mut self, object: &ConfigObject) -> Result<(), ApiError> {
        self.set(&object.kind.xpath(), &render(&object.entry)?)
    }
}
