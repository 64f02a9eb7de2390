//! CSV-driven bulk IPSec VPN provisioning for PAN-OS firewalls.
//!
//! One input row describes one VPN instance: a tunnel interface, an IKE
//! gateway, and an IPSec tunnel, plus the virtual router and zone the
//! interface belongs to. The library turns all rows into a single
//! [`model::ObjectGraph`] and pushes it to a device in dependency order
//! (interfaces before routers/zones, gateways before tunnels).
//!
//! - [`row`] — per-row normalization and required-field validation
//! - [`reader`] — CSV file reading (header discarded, comma-split)
//! - [`build`] — row-to-spec derivation, truncation, and grouping
//! - [`model`] — the configuration spec types and the object graph
//! - [`objects`] — rendering specs into device `<entry>` elements
//! - [`push`] — ordered submission with first-error abort
//! - [`report`] — terminal output helpers

pub mod build;
pub mod model;
pub mod objects;
pub mod push;
pub mod reader;
pub mod report;
pub mod row;
