use serde::Serialize;

use crate::element::ConfigElement;

const DEVICE_XPATH: &str = "/config/devices/entry[@name='localhost.localdomain']";

/// The network object types this crate knows how to stage on a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ObjectKind {
    TunnelInterface,
    VirtualRouter,
    Zone,
    IkeGateway,
    IpsecTunnel,
}

impl ObjectKind {
    /// Candidate-configuration xpath of the container holding entries of
    /// this kind.
    pub fn xpath(self) -> String {
        match self {
            ObjectKind::TunnelInterface => {
                format!("{DEVICE_XPATH}/network/interface/tunnel/units")
            }
            ObjectKind::VirtualRouter => format!("{DEVICE_XPATH}/network/virtual-router"),
            ObjectKind::Zone => {
                format!("{DEVICE_XPATH}/vsys/entry[@name='vsys1']/zone")
            }
            ObjectKind::IkeGateway => format!("{DEVICE_XPATH}/network/ike/gateway"),
            ObjectKind::IpsecTunnel => format!("{DEVICE_XPATH}/network/tunnel/ipsec"),
        }
    }

    /// Human-readable label used in error context.
    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::TunnelInterface => "tunnel interface",
            ObjectKind::VirtualRouter => "virtual router",
            ObjectKind::Zone => "zone",
            ObjectKind::IkeGateway => "IKE gateway",
            ObjectKind::IpsecTunnel => "IPSec tunnel",
        }
    }
}

/// A named configuration object ready for submission: its kind picks the
/// container xpath, the entry element carries the object body.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigObject {
    pub kind: ObjectKind,
    pub name: String,
    pub entry: ConfigElement,
}

impl ConfigObject {
    pub fn new(kind: ObjectKind, name: impl Into<String>, entry: ConfigElement) -> Self {
        Self {
            kind,
            name: name.into(),
            entry,
        }
    }
}
