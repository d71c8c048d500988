// ── Network area models ──

use serde::{Deserialize, Serialize};

use super::Labels;

/// One entry of `network_ranges`, keyed by `prefix`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRangeModel {
    pub network_range_id: Option<String>,
    pub prefix: String,
}

/// `cloudplane_network_area`, ID `organization_id,network_area_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkAreaModel {
    pub id: Option<String>,
    pub organization_id: String,
    pub network_area_id: Option<String>,
    pub name: Option<String>,
    pub default_nameservers: Option<Vec<String>>,
    pub network_ranges: Option<Vec<NetworkRangeModel>>,
    /// Fixed after creation.
    pub transfer_network: Option<String>,
    pub default_prefix_length: Option<i64>,
    pub max_prefix_length: Option<i64>,
    pub min_prefix_length: Option<i64>,
    pub labels: Option<Labels>,
    pub project_count: Option<i64>,
}

/// `cloudplane_network_area_route`,
/// ID `organization_id,network_area_id,network_area_route_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkAreaRouteModel {
    pub id: Option<String>,
    pub organization_id: String,
    pub network_area_id: String,
    pub network_area_route_id: Option<String>,
    pub prefix: Option<String>,
    pub next_hop: Option<String>,
    pub labels: Option<Labels>,
}
