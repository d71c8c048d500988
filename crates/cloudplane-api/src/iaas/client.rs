// Async client for the IaaS API (v1).
//
// Project-scoped: /v1/projects/{projectId}/...
// Organization-scoped: /v1/organizations/{organizationId}/network-areas/...

use secrecy::SecretString;

use super::types;
use crate::Error;
use crate::rest::RestClient;
use crate::transport::TransportConfig;

/// Async client for the stable IaaS API.
#[derive(Debug, Clone)]
pub struct IaasClient {
    rest: RestClient,
}

impl IaasClient {
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

    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            rest: RestClient::from_reqwest(base_url, http)?,
        })
    }

    // ── Networks ─────────────────────────────────────────────────────

    pub async fn create_network(
        &self,
        project_id: &str,
        body: &types::CreateNetworkPayload,
    ) -> Result<types::Network, Error> {
        self.rest
            .post(&format!("v1/projects/{project_id}/networks"), body)
            .await
    }

    pub async fn get_network(
        &self,
        project_id: &str,
        network_id: &str,
    ) -> Result<types::Network, Error> {
        self.rest
            .get(&format!("v1/projects/{project_id}/networks/{network_id}"))
            .await
    }

    pub async fn partial_update_network(
        &self,
        project_id: &str,
        network_id: &str,
        body: &types::PartialUpdateNetworkPayload,
    ) -> Result<types::Network, Error> {
        self.rest
            .patch(
                &format!("v1/projects/{project_id}/networks/{network_id}"),
                body,
            )
            .await
    }

    pub async fn delete_network(&self, project_id: &str, network_id: &str) -> Result<(), Error> {
        self.rest
            .delete(&format!("v1/projects/{project_id}/networks/{network_id}"))
            .await
    }

    // ── Network areas ────────────────────────────────────────────────

    pub async fn create_network_area(
        &self,
        organization_id: &str,
        body: &types::CreateNetworkAreaPayload,
    ) -> Result<types::NetworkArea, Error> {
        self.rest
            .post(
                &format!("v1/organizations/{organization_id}/network-areas"),
                body,
            )
            .await
    }

    pub async fn get_network_area(
        &self,
        organization_id: &str,
        area_id: &str,
    ) -> Result<types::NetworkArea, Error> {
        self.rest
            .get(&format!(
                "v1/organizations/{organization_id}/network-areas/{area_id}"
            ))
            .await
    }

    pub async fn partial_update_network_area(
        &self,
        organization_id: &str,
        area_id: &str,
        body: &types::PartialUpdateNetworkAreaPayload,
    ) -> Result<types::NetworkArea, Error> {
        self.rest
            .patch(
                &format!("v1/organizations/{organization_id}/network-areas/{area_id}"),
                body,
            )
            .await
    }

    pub async fn delete_network_area(
        &self,
        organization_id: &str,
        area_id: &str,
    ) -> Result<(), Error> {
        self.rest
            .delete(&format!(
                "v1/organizations/{organization_id}/network-areas/{area_id}"
            ))
            .await
    }

    // ── Network ranges ───────────────────────────────────────────────

    pub async fn list_network_ranges(
        &self,
        organization_id: &str,
        area_id: &str,
    ) -> Result<types::ItemList<types::NetworkRange>, Error> {
        self.rest
            .get(&format!(
                "v1/organizations/{organization_id}/network-areas/{area_id}/network-ranges"
            ))
            .await
    }

    pub async fn create_network_ranges(
        &self,
        organization_id: &str,
        area_id: &str,
        body: &types::CreateNetworkRangesPayload,
    ) -> Result<types::ItemList<types::NetworkRange>, Error> {
        self.rest
            .post(
                &format!(
                    "v1/organizations/{organization_id}/network-areas/{area_id}/network-ranges"
                ),
                body,
            )
            .await
    }

    pub async fn delete_network_range(
        &self,
        organization_id: &str,
        area_id: &str,
        network_range_id: &str,
    ) -> Result<(), Error> {
        self.rest
            .delete(&format!(
                "v1/organizations/{organization_id}/network-areas/{area_id}/network-ranges/{network_range_id}"
            ))
            .await
    }

    // ── Network area routes ──────────────────────────────────────────

    pub async fn create_network_area_routes(
        &self,
        organization_id: &str,
        area_id: &str,
        body: &types::CreateNetworkAreaRoutePayload,
    ) -> Result<types::ItemList<types::Route>, Error> {
        self.rest
            .post(
                &format!("v1/organizations/{organization_id}/network-areas/{area_id}/routes"),
                body,
            )
            .await
    }

    pub async fn get_network_area_route(
        &self,
        organization_id: &str,
        area_id: &str,
        route_id: &str,
    ) -> Result<types::Route, Error> {
        self.rest
            .get(&format!(
                "v1/organizations/{organization_id}/network-areas/{area_id}/routes/{route_id}"
            ))
            .await
    }

    pub async fn update_network_area_route(
        &self,
        organization_id: &str,
        area_id: &str,
        route_id: &str,
        body: &types::UpdateNetworkAreaRoutePayload,
    ) -> Result<types::Route, Error> {
        self.rest
            .patch(
                &format!(
                    "v1/organizations/{organization_id}/network-areas/{area_id}/routes/{route_id}"
                ),
                body,
            )
            .await
    }

    pub async fn delete_network_area_route(
        &self,
        organization_id: &str,
        area_id: &str,
        route_id: &str,
    ) -> Result<(), Error> {
        self.rest
            .delete(&format!(
                "v1/organizations/{organization_id}/network-areas/{area_id}/routes/{route_id}"
            ))
            .await
    }

    // ── Public IPs ───────────────────────────────────────────────────

    pub async fn create_public_ip(
        &self,
        project_id: &str,
        body: &types::CreatePublicIpPayload,
    ) -> Result<types::PublicIp, Error> {
        self.rest
            .post(&format!("v1/projects/{project_id}/public-ips"), body)
            .await
    }

    pub async fn get_public_ip(
        &self,
        project_id: &str,
        public_ip_id: &str,
    ) -> Result<types::PublicIp, Error> {
        self.rest
            .get(&format!("v1/projects/{project_id}/public-ips/{public_ip_id}"))
            .await
    }

    pub async fn update_public_ip(
        &self,
        project_id: &str,
        public_ip_id: &str,
        body: &types::UpdatePublicIpPayload,
    ) -> Result<types::PublicIp, Error> {
        self.rest
            .patch(
                &format!("v1/projects/{project_id}/public-ips/{public_ip_id}"),
                body,
            )
            .await
    }

    pub async fn delete_public_ip(&self, project_id: &str, public_ip_id: &str) -> Result<(), Error> {
        self.rest
            .delete(&format!("v1/projects/{project_id}/public-ips/{public_ip_id}"))
            .await
    }

    // ── Server service accounts ──────────────────────────────────────

    pub async fn list_server_service_accounts(
        &self,
        project_id: &str,
        server_id: &str,
    ) -> Result<types::ItemList<String>, Error> {
        self.rest
            .get(&format!(
                "v1/projects/{project_id}/servers/{server_id}/service-accounts"
            ))
            .await
    }

    pub async fn add_service_account_to_server(
        &self,
        project_id: &str,
        server_id: &str,
        email: &str,
    ) -> Result<(), Error> {
        self.rest
            .put_no_response(&format!(
                "v1/projects/{project_id}/servers/{server_id}/service-accounts/{email}"
            ))
            .await
    }

    pub async fn remove_service_account_from_server(
        &self,
        project_id: &str,
        server_id: &str,
        email: &str,
    ) -> Result<(), Error> {
        self.rest
            .delete(&format!(
                "v1/projects/{project_id}/servers/{server_id}/service-accounts/{email}"
            ))
            .await
    }
}
