//! Rendering of configuration specs into device `<entry>` elements.
//!
//! Element shapes follow the device's candidate-configuration schema:
//! booleans are `yes`/`no` leaves, lists are `<member>` children, and the
//! local address type is always `ip`.

use panos_xmlapi::{ConfigElement, ConfigObject, ObjectKind};

use crate::model::{
    DpdSetting, IkeGatewaySpec, IkeIdentity, IpsecTunnelSpec, PeerAddress, TunnelInterfaceSpec,
    VirtualRouterSpec, ZoneSpec,
};

pub fn tunnel_interface_object(spec: &TunnelInterfaceSpec) -> ConfigObject {
    let mut entry = ConfigElement::entry(&spec.name);
    if let Some(comment) = &spec.comment {
        entry = entry.child(ConfigElement::text("comment", comment.as_str()));
    }
    if let Some(ip) = &spec.ip {
        entry = entry.child(ConfigElement::new("ip").child(ConfigElement::entry(ip)));
    }
    if let Some(profile) = &spec.management_profile {
        entry = entry.child(ConfigElement::text(
            "interface-management-profile",
            profile.as_str(),
        ));
    }
    ConfigObject::new(ObjectKind::TunnelInterface, spec.name.as_str(), entry)
}

pub fn ike_gateway_object(spec: &IkeGatewaySpec) -> ConfigObject {
    let mut local = ConfigElement::new("local-address");
    if let Some(interface) = &spec.interface {
        local = local.child(ConfigElement::text("interface", interface.as_str()));
    }
    if let Some(ip) = &spec.local_ip {
        local = local.child(ConfigElement::text("ip", ip.as_str()));
    }

    let peer = match &spec.peer {
        PeerAddress::Dynamic => {
            ConfigElement::new("peer-address").child(ConfigElement::new("dynamic"))
        }
        PeerAddress::Static { addr_type, value } => ConfigElement::new("peer-address")
            .child(ConfigElement::text(addr_type.as_str(), value.as_str())),
    };

    let mut ikev1 = ConfigElement::new("ikev1");
    if let Some(mode) = &spec.exchange_mode {
        ikev1 = ikev1.child(ConfigElement::text("exchange-mode", mode.as_str()));
    }
    if let Some(profile) = &spec.crypto_profile {
        ikev1 = ikev1.child(ConfigElement::text("ike-crypto-profile", profile.as_str()));
    }
    ikev1 = ikev1.child(dpd_element(spec.dpd));

    let entry = ConfigElement::entry(&spec.name)
        .child(local)
        .child(peer)
        .maybe_child(spec.pre_shared_key.as_ref().map(|psk| {
            ConfigElement::new("authentication").child(
                ConfigElement::new("pre-shared-key")
                    .child(ConfigElement::text("key", psk.as_str())),
            )
        }))
        .maybe_child(
            spec.local_id
                .as_ref()
                .map(|id| identity_element("local-id", id)),
        )
        .maybe_child(
            spec.peer_id
                .as_ref()
                .map(|id| identity_element("peer-id", id)),
        )
        .child(ConfigElement::new("protocol").child(ikev1))
        .child(
            ConfigElement::new("protocol-common")
                .child(
                    ConfigElement::new("nat-traversal")
                        .child(ConfigElement::text("enable", yes_no(spec.nat_traversal))),
                )
                .child(
                    ConfigElement::new("fragmentation")
                        .child(ConfigElement::text("enable", yes_no(spec.fragmentation))),
                )
                .child(ConfigElement::text(
                    "passive-mode",
                    yes_no(spec.passive_mode),
                )),
        );

    ConfigObject::new(ObjectKind::IkeGateway, spec.name.as_str(), entry)
}

pub fn ipsec_tunnel_object(spec: &IpsecTunnelSpec) -> ConfigObject {
    let auto_key = ConfigElement::new("auto-key")
        .maybe_child(spec.ike_gateway.as_ref().map(|gateway| {
            ConfigElement::new("ike-gateway").child(ConfigElement::entry(gateway))
        }))
        .child(ConfigElement::text(
            "ipsec-crypto-profile",
            spec.crypto_profile.as_str(),
        ));

    let entry = ConfigElement::entry(&spec.name)
        .maybe_child(
            spec.tunnel_interface
                .as_ref()
                .map(|interface| ConfigElement::text("tunnel-interface", interface.as_str())),
        )
        .child(auto_key);

    ConfigObject::new(ObjectKind::IpsecTunnel, spec.name.as_str(), entry)
}

pub fn virtual_router_object(spec: &VirtualRouterSpec) -> ConfigObject {
    let entry =
        ConfigElement::entry(&spec.name).child(member_list("interface", &spec.interfaces));
    ConfigObject::new(ObjectKind::VirtualRouter, spec.name.as_str(), entry)
}

pub fn zone_object(spec: &ZoneSpec) -> ConfigObject {
    let entry = ConfigElement::entry(&spec.name).child(
        ConfigElement::new("network").child(member_list("layer3", &spec.interfaces)),
    );
    ConfigObject::new(ObjectKind::Zone, spec.name.as_str(), entry)
}

fn identity_element(tag: &str, identity: &IkeIdentity) -> ConfigElement {
    ConfigElement::new(tag)
        .child(ConfigElement::text("type", identity.id_type.as_str()))
        .child(ConfigElement::text("id", identity.value.as_str()))
}

fn dpd_element(dpd: DpdSetting) -> ConfigElement {
    match dpd {
        DpdSetting::Defaults => {
            ConfigElement::new("dpd").child(ConfigElement::text("enable", "yes"))
        }
        DpdSetting::Disabled => {
            ConfigElement::new("dpd").child(ConfigElement::text("enable", "no"))
        }
        DpdSetting::Custom { interval, retry } => ConfigElement::new("dpd")
            .child(ConfigElement::text("enable", "yes"))
            .child(ConfigElement::text("interval", interval.to_string()))
            .child(ConfigElement::text("retry", retry.to_string())),
    }
}

fn member_list(tag: &str, names: &[String]) -> ConfigElement {
    names
        .iter()
        .fold(ConfigElement::new(tag), |element, name| {
            element.child(ConfigElement::text("member", name.as_str()))
        })
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
