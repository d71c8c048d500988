//! IaaS API (v2alpha) types for region-scoped networks.
//!
//! The alpha surface groups address-family settings into `ipv4` / `ipv6`
//! objects on the network itself and adds routing table placement.

use serde::{Deserialize, Serialize};

pub use crate::iaas::types::Labels;

pub const STATUS_CREATED: &str = "CREATED";
pub const STATUS_FAILED: &str = "FAILED";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkIpv4 {
    pub nameservers: Option<Vec<String>>,
    pub prefixes: Option<Vec<String>>,
    pub gateway: Option<String>,
    pub public_ip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkIpv6 {
    pub nameservers: Option<Vec<String>>,
    pub prefixes: Option<Vec<String>>,
    pub gateway: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: Option<String>,
    pub name: Option<String>,
    pub ipv4: Option<NetworkIpv4>,
    pub ipv6: Option<NetworkIpv6>,
    pub labels: Option<Labels>,
    pub routed: Option<bool>,
    pub routing_table_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNetworkIpv4 {
    pub nameservers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNetworkIpv6 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNetworkPayload {
    pub name: String,
    pub ipv4: CreateNetworkIpv4,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<CreateNetworkIpv6>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_table_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNetworkIpv4 {
    pub nameservers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNetworkIpv6 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

/// Body for `PATCH /v2alpha/projects/{p}/regions/{r}/networks/{n}`.
///
/// Prefix lengths, `routed` and `routingTableId` are fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUpdateNetworkPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ipv4: UpdateNetworkIpv4,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<UpdateNetworkIpv6>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}
