// Async client for the IaaS API (v2alpha).
//
// Base path: /v2alpha/projects/{projectId}/regions/{region}/networks

use secrecy::SecretString;

use super::types;
use crate::Error;
use crate::rest::RestClient;
use crate::transport::TransportConfig;

/// Async client for the experimental region-scoped network API.
#[derive(Debug, Clone)]
pub struct IaasAlphaClient {
    rest: RestClient,
}

impl IaasAlphaClient {
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

    fn networks_path(project_id: &str, region: &str) -> String {
        format!("v2alpha/projects/{project_id}/regions/{region}/networks")
    }

    pub async fn create_network(
        &self,
        project_id: &str,
        region: &str,
        body: &types::CreateNetworkPayload,
    ) -> Result<types::Network, Error> {
        self.rest
            .post(&Self::networks_path(project_id, region), body)
            .await
    }

    pub async fn get_network(
        &self,
        project_id: &str,
        region: &str,
        network_id: &str,
    ) -> Result<types::Network, Error> {
        let base = Self::networks_path(project_id, region);
        self.rest.get(&format!("{base}/{network_id}")).await
    }

    pub async fn partial_update_network(
        &self,
        project_id: &str,
        region: &str,
        network_id: &str,
        body: &types::PartialUpdateNetworkPayload,
    ) -> Result<types::Network, Error> {
        let base = Self::networks_path(project_id, region);
        self.rest.patch(&format!("{base}/{network_id}"), body).await
    }

    pub async fn delete_network(
        &self,
        project_id: &str,
        region: &str,
        network_id: &str,
    ) -> Result<(), Error> {
        let base = Self::networks_path(project_id, region);
        self.rest.delete(&format!("{base}/{network_id}")).await
    }
}
