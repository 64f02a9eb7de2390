use serde::Serialize;

/// A tunnel interface terminating one VPN's encrypted traffic. The name is
/// the join key the grouping step uses for router and zone membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TunnelInterfaceSpec {
    pub name: String,
    pub comment: Option<String>,
    pub ip: Option<String>,
    pub management_profile: Option<String>,
    /// Owning virtual-router name, verbatim from the row.
    pub virtual_router: String,
    /// Owning zone name, after the 31-character truncation rule.
    pub zone: String,
}

/// How the remote peer of an IKE gateway is addressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PeerAddress {
    /// Peer address is learned dynamically; no value is configured.
    Dynamic,
    /// Fixed peer address of the given type (`ip`, `fqdn`, ...).
    Static { addr_type: String, value: String },
}

/// An IKE identity as a (type, value) pair, e.g. `fqdn`/`vpn.example.com`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IkeIdentity {
    pub id_type: String,
    pub value: String,
}

/// Dead-peer-detection policy for an IKE gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DpdSetting {
    /// Enabled with the device's default interval and retry.
    Defaults,
    Disabled,
    /// Enabled with an explicit interval and retry count.
    Custom { interval: u32, retry: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IkeGatewaySpec {
    pub name: String,
    pub interface: Option<String>,
    pub local_ip: Option<String>,
    pub peer: PeerAddress,
    pub pre_shared_key: Option<String>,
    pub local_id: Option<IkeIdentity>,
    pub peer_id: Option<IkeIdentity>,
    pub passive_mode: bool,
    pub nat_traversal: bool,
    pub exchange_mode: Option<String>,
    pub crypto_profile: Option<String>,
    pub fragmentation: bool,
    pub dpd: DpdSetting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpsecTunnelSpec {
    pub name: String,
    pub tunnel_interface: Option<String>,
    pub ike_gateway: Option<String>,
    pub crypto_profile: String,
}

/// A virtual router and the interfaces assigned to it, in row order.
/// Duplicate interface names are preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VirtualRouterSpec {
    pub name: String,
    pub interfaces: Vec<String>,
}

/// A security zone and the interfaces assigned to it, in row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneSpec {
    pub name: String,
    pub interfaces: Vec<String>,
}

/// Everything produced from one input file: per-row specs in row order,
/// grouping specs in first-seen key order. Immutable once assembled; one
/// graph is the unit submitted to the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectGraph {
    pub tunnel_interfaces: Vec<TunnelInterfaceSpec>,
    pub ike_gateways: Vec<IkeGatewaySpec>,
    pub ipsec_tunnels: Vec<IpsecTunnelSpec>,
    pub virtual_routers: Vec<VirtualRouterSpec>,
    pub zones: Vec<ZoneSpec>,
}
