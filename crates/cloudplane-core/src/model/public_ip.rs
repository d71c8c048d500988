use serde::{Deserialize, Serialize};

use super::Labels;

/// `cloudplane_public_ip`, ID `project_id,public_ip_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicIpModel {
    pub id: Option<String>,
    pub project_id: String,
    pub public_ip_id: Option<String>,
    pub ip: Option<String>,
    /// Attached network interface; `null` means detached.
    pub network_interface_id: Option<String>,
    pub labels: Option<Labels>,
}
