// ── Network model ──
//
// Shared by the stable and experimental network backends. `region` and
// `routing_table_id` only have meaning for the experimental one.

use serde::{Deserialize, Serialize};

use super::Labels;

/// `cloudplane_network`, ID `project_id,network_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkModel {
    pub id: Option<String>,
    pub project_id: String,
    pub network_id: Option<String>,
    pub name: Option<String>,
    pub region: Option<String>,
    pub ipv4_nameservers: Option<Vec<String>>,
    pub ipv4_prefix_length: Option<i64>,
    pub ipv4_prefixes: Option<Vec<String>>,
    pub ipv4_gateway: Option<String>,
    /// Absent leaves the area default, `[]` clears, a list sets.
    pub ipv6_nameservers: Option<Vec<String>>,
    pub ipv6_prefix_length: Option<i64>,
    pub ipv6_prefixes: Option<Vec<String>>,
    pub ipv6_gateway: Option<String>,
    pub public_ip: Option<String>,
    pub labels: Option<Labels>,
    pub routed: Option<bool>,
    pub routing_table_id: Option<String>,
    pub state: Option<String>,
}
