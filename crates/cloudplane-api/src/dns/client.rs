// Async client for the DNS API.
//
// Base path: /v1/projects/{projectId}/zones
// Auth: bearer service account token

use secrecy::SecretString;

use super::types;
use crate::Error;
use crate::rest::RestClient;
use crate::transport::TransportConfig;

/// Async client for DNS zones and record sets.
#[derive(Debug, Clone)]
pub struct DnsClient {
    rest: RestClient,
}

impl DnsClient {
    // ── Constructors ─────────────────────────────────────────────────

    pub fn from_token(
        base_url: &str,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            rest: RestClient::from_token(base_url, token, transport)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            rest: RestClient::from_reqwest(base_url, http)?,
        })
    }

    // ── Zones ────────────────────────────────────────────────────────

    pub async fn create_zone(
        &self,
        project_id: &str,
        body: &types::CreateZonePayload,
    ) -> Result<types::ZoneResponse, Error> {
        self.rest
            .post(&format!("v1/projects/{project_id}/zones"), body)
            .await
    }

    pub async fn get_zone(
        &self,
        project_id: &str,
        zone_id: &str,
    ) -> Result<types::ZoneResponse, Error> {
        self.rest
            .get(&format!("v1/projects/{project_id}/zones/{zone_id}"))
            .await
    }

    /// List active zones whose DNS name equals `dns_name`.
    pub async fn list_zones_by_dns_name(
        &self,
        project_id: &str,
        dns_name: &str,
    ) -> Result<types::ListZonesResponse, Error> {
        self.rest
            .get_with_params(
                &format!("v1/projects/{project_id}/zones"),
                &[
                    ("dnsName[eq]", dns_name.to_owned()),
                    ("active[eq]", "true".to_owned()),
                ],
            )
            .await
    }

    pub async fn partial_update_zone(
        &self,
        project_id: &str,
        zone_id: &str,
        body: &types::PartialUpdateZonePayload,
    ) -> Result<types::ZoneResponse, Error> {
        self.rest
            .patch(&format!("v1/projects/{project_id}/zones/{zone_id}"), body)
            .await
    }

    pub async fn delete_zone(&self, project_id: &str, zone_id: &str) -> Result<(), Error> {
        self.rest
            .delete(&format!("v1/projects/{project_id}/zones/{zone_id}"))
            .await
    }

    // ── Record sets ──────────────────────────────────────────────────

    pub async fn create_record_set(
        &self,
        project_id: &str,
        zone_id: &str,
        body: &types::CreateRecordSetPayload,
    ) -> Result<types::RecordSetResponse, Error> {
        self.rest
            .post(
                &format!("v1/projects/{project_id}/zones/{zone_id}/rrsets"),
                body,
            )
            .await
    }

    pub async fn get_record_set(
        &self,
        project_id: &str,
        zone_id: &str,
        record_set_id: &str,
    ) -> Result<types::RecordSetResponse, Error> {
        self.rest
            .get(&format!(
                "v1/projects/{project_id}/zones/{zone_id}/rrsets/{record_set_id}"
            ))
            .await
    }

    pub async fn partial_update_record_set(
        &self,
        project_id: &str,
        zone_id: &str,
        record_set_id: &str,
        body: &types::PartialUpdateRecordSetPayload,
    ) -> Result<types::RecordSetResponse, Error> {
        self.rest
            .patch(
                &format!("v1/projects/{project_id}/zones/{zone_id}/rrsets/{record_set_id}"),
                body,
            )
            .await
    }

    pub async fn delete_record_set(
        &self,
        project_id: &str,
        zone_id: &str,
        record_set_id: &str,
    ) -> Result<(), Error> {
        self.rest
            .delete(&format!(
                "v1/projects/{project_id}/zones/{zone_id}/rrsets/{record_set_id}"
            ))
            .await
    }
}
