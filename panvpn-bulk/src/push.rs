use panos_xmlapi::{ApiError, ConfigObject, DeviceSession, ObjectKind};
use serde::Serialize;
use thiserror::Error;

use crate::model::ObjectGraph;
use crate::objects;

/// A push failure: the first device rejection aborts the remaining
/// categories. Nothing already created is rolled back.
#[derive(Debug, Error)]
#[error("failed to create {}: {source}", .kind.label())]
pub struct PushError {
    pub kind: ObjectKind,
    #[source]
    pub source: ApiError,
}

/// Objects created per category by a completed push.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PushReport {
    pub tunnel_interfaces: usize,
    pub virtual_routers: usize,
    pub zones: usize,
    pub ike_gateways: usize,
    pub ipsec_tunnels: usize,
}

/// Submit an object graph in dependency order: tunnel interfaces first so
/// routers and zones can attach them, then gateways before the tunnels
/// that reference them. Interfaces, gateways, and tunnels go up as one
/// bulk create per category; routers and zones are created one by one.
///
/// The first device error aborts the remaining steps; re-pushing a graph
/// the device already holds fails the same way with a conflict error.
pub fn push_graph(
    session: &mut dyn DeviceSession,
    graph: &ObjectGraph,
) -> Result<PushReport, PushError> {
    let interfaces: Vec<ConfigObject> = graph
        .tunnel_interfaces
        .iter()
        .map(objects::tunnel_interface_object)
        .collect();
    println!("creating tunnel interfaces (n={})", interfaces.len());
    session
        .bulk_create(ObjectKind::TunnelInterface, &interfaces)
        .map_err(|source| PushError {
            kind: ObjectKind::TunnelInterface,
            source,
        })?;

    println!("attaching interfaces to virtual routers (n={})", graph.virtual_routers.len());
    for router in &graph.virtual_routers {
        session
            .create(&objects::virtual_router_object(router))
            .map_err(|source| PushError {
                kind: ObjectKind::VirtualRouter,
                source,
            })?;
    }

    println!("attaching interfaces to zones (n={})", graph.zones.len());
    for zone in &graph.zones {
        session
            .create(&objects::zone_object(zone))
            .map_err(|source| PushError {
                kind: ObjectKind::Zone,
                source,
            })?;
    }

    let gateways: Vec<ConfigObject> = graph
        .ike_gateways
        .iter()
        .map(objects::ike_gateway_object)
        .collect();
    println!("creating IKE gateways (n={})", gateways.len());
    session
        .bulk_create(ObjectKind::IkeGateway, &gateways)
        .map_err(|source| PushError {
            kind: ObjectKind::IkeGateway,
            source,
        })?;

    let tunnels: Vec<ConfigObject> = graph
        .ipsec_tunnels
        .iter()
        .map(objects::ipsec_tunnel_object)
        .collect();
    println!("creating IPSec tunnels (n={})", tunnels.len());
    session
        .bulk_create(ObjectKind::IpsecTunnel, &tunnels)
        .map_err(|source| PushError {
            kind: ObjectKind::IpsecTunnel,
            source,
        })?;

    Ok(PushReport {
        tunnel_interfaces: graph.tunnel_interfaces.len(),
        virtual_routers: graph.virtual_routers.len(),
        zones: graph.zones.len(),
        ike_gateways: graph.ike_gateways.len(),
        ipsec_tunnels: graph.ipsec_tunnels.len(),
    })
}
