use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{
    DpdSetting, IkeGatewaySpec, IkeIdentity, IpsecTunnelSpec, ObjectGraph, PeerAddress,
    TunnelInterfaceSpec, VirtualRouterSpec, ZoneSpec,
};
use crate::row::{Row, RowError, COLUMN_NAMES};

/// Device-imposed maximum length for object names.
pub const MAX_NAME_LEN: usize = 31;

/// A name that was longer than [`MAX_NAME_LEN`] and got cut down.
///
/// Truncation can silently collide two distinct names; that risk is
/// accepted and only logged, never auto-resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruncationWarning {
    pub field: &'static str,
    pub original: String,
    pub truncated: String,
}

impl Display for TruncationWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} name '{}' truncated to '{}' (31 character limit)",
            self.field, self.original, self.truncated
        )
    }
}

/// Names created from one row, plus any truncation warnings it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    pub tunnel_interface: String,
    pub ike_gateway: String,
    pub ipsec_tunnel: String,
    pub warnings: Vec<TruncationWarning>,
}

/// Accumulates per-row specs and grouping membership, then assembles the
/// final [`ObjectGraph`]. One builder lives for exactly one input file.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    tunnel_interfaces: Vec<TunnelInterfaceSpec>,
    ike_gateways: Vec<IkeGatewaySpec>,
    ipsec_tunnels: Vec<IpsecTunnelSpec>,
    router_members: IndexMap<String, Vec<String>>,
    zone_members: IndexMap<String, Vec<String>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and fold one raw record. `index` is the one-based data
    /// row number used in error and progress output.
    pub fn push_record(&mut self, index: usize, cells: &[String]) -> Result<RowOutcome, RowError> {
        let row = Row::from_record(index, cells)?;
        self.push_row(index, row)
    }

    /// Fold one normalized row into the graph under construction.
    pub fn push_row(&mut self, index: usize, row: Row) -> Result<RowOutcome, RowError> {
        let mut warnings = Vec::new();
        let interface_name = row.tunnel_if_name.clone();

        // Zone truncation happens before the grouping key is read, so an
        // over-long zone groups under its truncated name.
        let zone = truncate_name("zone", row.zone, &mut warnings);

        self.router_members
            .entry(row.virtual_router.clone())
            .or_default()
            .push(interface_name.clone());
        self.zone_members
            .entry(zone.clone())
            .or_default()
            .push(interface_name.clone());

        self.tunnel_interfaces.push(TunnelInterfaceSpec {
            name: row.tunnel_if_name,
            comment: row.tunnel_if_comment,
            ip: row.tunnel_if_ip,
            management_profile: row.mgmt_profile,
            virtual_router: row.virtual_router,
            zone,
        });

        let gateway_name = truncate_name("IKE gateway", row.ike_gw_name, &mut warnings);
        let peer = match row.peer_ip_type.as_deref() {
            Some("dynamic") => PeerAddress::Dynamic,
            other => PeerAddress::Static {
                addr_type: other.unwrap_or("ip").to_string(),
                value: row.peer_ip_value.ok_or(RowError::MissingField {
                    row: index,
                    column: COLUMN_NAMES[10],
                })?,
            },
        };

        self.ike_gateways.push(IkeGatewaySpec {
            name: gateway_name.clone(),
            interface: row.ike_interface,
            local_ip: row.ike_local_ip,
            peer,
            pre_shared_key: row.psk,
            local_id: parse_identity(index, COLUMN_NAMES[12], row.local_id)?,
            peer_id: parse_identity(index, COLUMN_NAMES[13], row.peer_id)?,
            passive_mode: flag(row.passive_mode.as_deref()),
            nat_traversal: flag(row.nat_traversal.as_deref()),
            exchange_mode: row.ikev1_exchange_mode,
            crypto_profile: row.ikev1_crypto_profile,
            fragmentation: flag(row.fragmentation.as_deref()),
            dpd: parse_dpd(index, row.dpd)?,
        });

        let tunnel_name = truncate_name("IPSec tunnel", row.ipsec_tunnel_name, &mut warnings);
        self.ipsec_tunnels.push(IpsecTunnelSpec {
            name: tunnel_name.clone(),
            tunnel_interface: row.tunnel_interface_ref,
            ike_gateway: row
                .ike_gw_ref
                .map(|name| truncate_name("IKE gateway reference", name, &mut warnings)),
            crypto_profile: row
                .ipsec_crypto_profile
                .unwrap_or_else(|| "default".to_string()),
        });

        Ok(RowOutcome {
            tunnel_interface: interface_name,
            ike_gateway: gateway_name,
            ipsec_tunnel: tunnel_name,
            warnings,
        })
    }

    /// Convert the grouping maps into router/zone specs and finalize the
    /// graph. No mutation happens after this point.
    pub fn finish(self) -> ObjectGraph {
        ObjectGraph {
            tunnel_interfaces: self.tunnel_interfaces,
            ike_gateways: self.ike_gateways,
            ipsec_tunnels: self.ipsec_tunnels,
            virtual_routers: self
                .router_members
                .into_iter()
                .map(|(name, interfaces)| VirtualRouterSpec { name, interfaces })
                .collect(),
            zones: self
                .zone_members
                .into_iter()
                .map(|(name, interfaces)| ZoneSpec { name, interfaces })
                .collect(),
        }
    }
}

/// Build a full graph from raw records in one call.
pub fn build_graph(records: &[Vec<String>]) -> Result<(ObjectGraph, Vec<RowOutcome>), RowError> {
    let mut builder = GraphBuilder::new();
    let mut outcomes = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        outcomes.push(builder.push_record(index + 1, record)?);
    }
    Ok((builder.finish(), outcomes))
}

/// Truncate a name to the device limit, recording a warning when it was
/// actually cut.
fn truncate_name(
    field: &'static str,
    name: String,
    warnings: &mut Vec<TruncationWarning>,
) -> String {
    if name.chars().count() <= MAX_NAME_LEN {
        return name;
    }
    let truncated: String = name.chars().take(MAX_NAME_LEN).collect();
    warnings.push(TruncationWarning {
        field,
        original: name,
        truncated: truncated.clone(),
    });
    truncated
}

/// Boolean cells are true iff they case-insensitively equal "true";
/// absent or anything else is false.
fn flag(cell: Option<&str>) -> bool {
    matches!(cell, Some(value) if value.eq_ignore_ascii_case("true"))
}

/// Split a `type:value` identity cell, tolerating whitespace after the
/// colon. Absent cells leave the identity unset.
fn parse_identity(
    row: usize,
    column: &'static str,
    cell: Option<String>,
) -> Result<Option<IkeIdentity>, RowError> {
    let Some(cell) = cell else {
        return Ok(None);
    };
    let cleaned = cell.replace(": ", ":");
    match cleaned.split_once(':') {
        Some((id_type, value)) => Ok(Some(IkeIdentity {
            id_type: id_type.to_string(),
            value: value.to_string(),
        })),
        None => Err(RowError::Malformed {
            row,
            column,
            value: cell,
            reason: "expected 'type:value'",
        }),
    }
}

/// Three-way dead-peer-detection policy: absent/"true" enables device
/// defaults, "false" disables, anything else is an `interval;retry` pair.
fn parse_dpd(row: usize, cell: Option<String>) -> Result<DpdSetting, RowError> {
    let Some(cell) = cell else {
        return Ok(DpdSetting::Defaults);
    };
    if cell.eq_ignore_ascii_case("true") {
        return Ok(DpdSetting::Defaults);
    }
    if cell.eq_ignore_ascii_case("false") {
        return Ok(DpdSetting::Disabled);
    }

    let cleaned = cell.replace("; ", ";");
    let malformed = |reason| RowError::Malformed {
        row,
        column: COLUMN_NAMES[19],
        value: cell.clone(),
        reason,
    };
    let (interval, retry) = cleaned
        .split_once(';')
        .ok_or_else(|| malformed("expected 'interval;retry'"))?;
    Ok(DpdSetting::Custom {
        interval: interval
            .trim()
            .parse()
            .map_err(|_| malformed("interval must be an integer"))?,
        retry: retry
            .trim()
            .parse()
            .map_err(|_| malformed("retry must be an integer"))?,
    })
}
