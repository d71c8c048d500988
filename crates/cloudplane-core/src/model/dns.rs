// ── DNS models ──

use serde::{Deserialize, Serialize};

/// `cloudplane_dns_zone`, ID `project_id,zone_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneModel {
    pub id: Option<String>,
    pub project_id: String,
    pub zone_id: Option<String>,
    pub name: Option<String>,
    pub dns_name: Option<String>,
    pub description: Option<String>,
    pub acl: Option<String>,
    pub active: Option<bool>,
    pub contact_email: Option<String>,
    pub default_ttl: Option<i64>,
    pub expire_time: Option<i64>,
    pub is_reverse_zone: Option<bool>,
    pub negative_cache: Option<i64>,
    /// Secondary-zone primaries. Fixed after creation.
    pub primaries: Option<Vec<String>>,
    pub primary_name_server: Option<String>,
    pub record_count: Option<i64>,
    pub refresh_time: Option<i64>,
    pub retry_time: Option<i64>,
    pub serial_number: Option<i64>,
    #[serde(rename = "type")]
    pub zone_type: Option<String>,
    pub visibility: Option<String>,
    pub state: Option<String>,
}

/// `cloudplane_dns_record_set`, ID `project_id,zone_id,record_set_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSetModel {
    pub id: Option<String>,
    pub project_id: String,
    pub zone_id: String,
    pub record_set_id: Option<String>,
    /// Name as configured, relative or fully qualified.
    pub name: Option<String>,
    /// Fully qualified name as reported by the server.
    pub fqdn: Option<String>,
    pub records: Option<Vec<String>>,
    pub ttl: Option<i64>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub comment: Option<String>,
    pub active: Option<bool>,
    pub state: Option<String>,
}
