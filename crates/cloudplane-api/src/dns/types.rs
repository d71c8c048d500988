//! DNS API request and response types (`/v1/projects/{projectId}/zones`).
//!
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`.
//! Almost every response field is optional: the service omits fields it
//! has no value for, and callers must not invent zero values.

use serde::{Deserialize, Serialize};

// ── Zone lifecycle states ────────────────────────────────────────────

pub const ZONE_CREATE_SUCCEEDED: &str = "CREATE_SUCCEEDED";
pub const ZONE_CREATE_FAILED: &str = "CREATE_FAILED";
pub const ZONE_UPDATE_SUCCEEDED: &str = "UPDATE_SUCCEEDED";
pub const ZONE_UPDATE_FAILED: &str = "UPDATE_FAILED";
pub const ZONE_DELETE_SUCCEEDED: &str = "DELETE_SUCCEEDED";
pub const ZONE_DELETE_FAILED: &str = "DELETE_FAILED";

// Record sets share the zone state vocabulary.
pub const RECORD_SET_CREATE_SUCCEEDED: &str = ZONE_CREATE_SUCCEEDED;
pub const RECORD_SET_CREATE_FAILED: &str = ZONE_CREATE_FAILED;
pub const RECORD_SET_UPDATE_SUCCEEDED: &str = ZONE_UPDATE_SUCCEEDED;
pub const RECORD_SET_UPDATE_FAILED: &str = ZONE_UPDATE_FAILED;
pub const RECORD_SET_DELETE_SUCCEEDED: &str = ZONE_DELETE_SUCCEEDED;
pub const RECORD_SET_DELETE_FAILED: &str = ZONE_DELETE_FAILED;

// ── Zones ────────────────────────────────────────────────────────────

/// Zone object as returned inside [`ZoneResponse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: Option<String>,
    pub name: Option<String>,
    pub dns_name: Option<String>,
    pub description: Option<String>,
    pub acl: Option<String>,
    pub active: Option<bool>,
    pub contact_email: Option<String>,
    #[serde(rename = "defaultTTL")]
    pub default_ttl: Option<i32>,
    pub expire_time: Option<i32>,
    pub is_reverse_zone: Option<bool>,
    pub negative_cache: Option<i32>,
    pub primaries: Option<Vec<String>>,
    pub primary_name_server: Option<String>,
    pub record_count: Option<i32>,
    pub refresh_time: Option<i32>,
    pub retry_time: Option<i32>,
    pub serial_number: Option<i64>,
    #[serde(rename = "type")]
    pub zone_type: Option<String>,
    pub visibility: Option<String>,
    /// One of the `ZONE_*` lifecycle constants, or a `*_PENDING` state.
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Envelope for single-zone endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneResponse {
    pub zone: Option<Zone>,
}

/// Envelope for `GET /v1/projects/{projectId}/zones`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListZonesResponse {
    #[serde(default)]
    pub zones: Vec<Zone>,
    pub total_items: Option<i64>,
}

/// Body for `POST /v1/projects/{projectId}/zones`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZonePayload {
    pub name: String,
    pub dns_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(rename = "defaultTTL", skip_serializing_if = "Option::is_none")]
    pub default_ttl: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reverse_zone: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_cache: Option<i32>,
    pub primaries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_time: Option<i32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<String>,
}

/// Body for `PATCH /v1/projects/{projectId}/zones/{zoneId}`.
///
/// Deliberately has no `primaries` field: the service rejects a
/// primaries list on partial update even when it is unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUpdateZonePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(rename = "defaultTTL", skip_serializing_if = "Option::is_none")]
    pub default_ttl: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_cache: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_time: Option<i32>,
}

// ── Record sets ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub content: Option<String>,
}

/// Record set object as returned inside [`RecordSetResponse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    pub id: Option<String>,
    /// Fully qualified name, always with the zone suffix.
    pub name: Option<String>,
    pub records: Option<Vec<Record>>,
    pub ttl: Option<i32>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub comment: Option<String>,
    pub active: Option<bool>,
    pub state: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSetResponse {
    pub rrset: Option<RecordSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayload {
    pub content: String,
}

/// Body for `POST /v1/projects/{projectId}/zones/{zoneId}/rrsets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordSetPayload {
    pub name: String,
    pub records: Vec<RecordPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Body for `PATCH /v1/projects/{projectId}/zones/{zoneId}/rrsets/{rrSetId}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUpdateRecordSetPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<RecordPayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
