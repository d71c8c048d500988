//! IaaS API (v1) request and response types.
//!
//! Covers networks, network areas with their ranges and routes, public
//! IPs, and server service account attachments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form labels attached to most IaaS objects.
pub type Labels = BTreeMap<String, String>;

// ── Lifecycle states ─────────────────────────────────────────────────

pub const STATE_CREATED: &str = "CREATED";
pub const STATE_FAILED: &str = "FAILED";

/// Generic `{ "items": [...] }` envelope used by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

// ── Networks ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub network_id: Option<String>,
    pub name: Option<String>,
    pub nameservers: Option<Vec<String>>,
    #[serde(rename = "nameserversV6")]
    pub nameservers_v6: Option<Vec<String>>,
    pub prefixes: Option<Vec<String>>,
    #[serde(rename = "prefixesV6")]
    pub prefixes_v6: Option<Vec<String>>,
    pub public_ip: Option<String>,
    pub labels: Option<Labels>,
    pub routed: Option<bool>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNetworkIpv4 {
    /// Always sent; an empty list asks for no nameservers.
    pub nameservers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNetworkIpv6 {
    /// Three-state: absent leaves the area default, `[]` clears, else sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNetworkAddressFamily {
    pub ipv4: CreateNetworkIpv4,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<CreateNetworkIpv6>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNetworkPayload {
    pub name: String,
    pub address_family: CreateNetworkAddressFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNetworkIpv4 {
    pub nameservers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNetworkIpv6 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNetworkAddressFamily {
    pub ipv4: UpdateNetworkIpv4,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<UpdateNetworkIpv6>,
}

/// Body for `PATCH /v1/projects/{projectId}/networks/{networkId}`.
///
/// Prefix lengths and `routed` are fixed at creation and have no
/// counterpart here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUpdateNetworkPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub address_family: UpdateNetworkAddressFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

// ── Network areas ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRange {
    pub network_range_id: Option<String>,
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAreaIpv4 {
    pub default_nameservers: Option<Vec<String>>,
    pub network_ranges: Option<Vec<NetworkRange>>,
    pub transfer_network: Option<String>,
    pub default_prefix_len: Option<i64>,
    pub max_prefix_len: Option<i64>,
    pub min_prefix_len: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkArea {
    pub area_id: Option<String>,
    pub name: Option<String>,
    pub ipv4: Option<NetworkAreaIpv4>,
    pub labels: Option<Labels>,
    pub project_count: Option<i64>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRangePayload {
    pub prefix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAreaIpv4 {
    pub default_nameservers: Vec<String>,
    pub network_ranges: Vec<NetworkRangePayload>,
    pub transfer_network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_prefix_len: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_prefix_len: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_prefix_len: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAreaAddressFamily {
    pub ipv4: CreateAreaIpv4,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNetworkAreaPayload {
    pub name: String,
    pub address_family: CreateAreaAddressFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAreaIpv4 {
    pub default_nameservers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_prefix_len: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_prefix_len: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_prefix_len: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAreaAddressFamily {
    pub ipv4: UpdateAreaIpv4,
}

/// Body for `PATCH /v1/organizations/{organizationId}/network-areas/{areaId}`.
///
/// Network ranges have their own endpoints; the transfer network is
/// immutable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUpdateNetworkAreaPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub address_family: UpdateAreaAddressFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNetworkRangesPayload {
    pub ipv4: Vec<NetworkRangePayload>,
}

// ── Network area routes ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub route_id: Option<String>,
    pub prefix: Option<String>,
    pub nexthop: Option<String>,
    pub labels: Option<Labels>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePayload {
    pub prefix: String,
    pub nexthop: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNetworkAreaRoutePayload {
    pub ipv4: Vec<RoutePayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNetworkAreaRoutePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

// ── Public IPs ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicIp {
    pub id: Option<String>,
    pub ip: Option<String>,
    pub network_interface: Option<String>,
    pub labels: Option<Labels>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublicIpPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Body for `PATCH /v1/projects/{projectId}/public-ips/{publicIpId}`.
///
/// `networkInterface` is always serialised: `null` detaches the address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePublicIpPayload {
    pub network_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}
