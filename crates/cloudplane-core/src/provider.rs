// ── Provider configuration and registry ──
//
// `Provider::configure` builds the shared `ProviderData` once, picks the
// network backend from the enabled experiments, and registers every
// resource and data source by type name.

use std::collections::BTreeMap;
use std::sync::Arc;

use cloudplane_api::{
    DnsClient, IaasAlphaClient, IaasClient, TlsMode, TransportConfig, WaitHandler,
};
use tracing::info;

use crate::config::{Experiment, ProviderConfig, TlsVerification, WaitSettings};
use crate::context::OperationContext;
use crate::data_source::{
    DataSource, DnsRecordSetDataSource, DnsZoneDataSource, NetworkAreaDataSource,
    NetworkDataSource, PublicIpDataSource,
};
use crate::error::{CoreError, Phase};
use crate::resource::{
    DnsRecordSetResource, DnsZoneResource, ExperimentalNetworks, NetworkAreaResource,
    NetworkAreaRouteResource, NetworkResource, PublicIpResource, Resource,
    ServiceAccountAttachResource, StableNetworks,
};

/// API clients and settings shared read-only by every resource.
#[derive(Debug)]
pub struct ProviderData {
    pub dns: DnsClient,
    pub iaas: IaasClient,
    pub iaas_alpha: IaasAlphaClient,
    /// Default region for region-scoped APIs.
    pub region: Option<String>,
    pub wait: WaitSettings,
}

impl ProviderData {
    pub fn new(config: &ProviderConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: match &config.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: config.timeout,
            ..TransportConfig::default()
        };
        let http = transport.build_authenticated_client(&config.token)?;

        Ok(Self {
            dns: DnsClient::from_reqwest(config.endpoints.dns.as_str(), http.clone())?,
            iaas: IaasClient::from_reqwest(config.endpoints.iaas.as_str(), http.clone())?,
            iaas_alpha: IaasAlphaClient::from_reqwest(config.endpoints.iaas.as_str(), http)?,
            region: config.region.clone(),
            wait: config.wait,
        })
    }

    /// Run a wait handler with the configured cadence and the operation's
    /// cancellation token.
    pub async fn wait<T: Send + 'static>(
        &self,
        ctx: &OperationContext,
        handler: WaitHandler<T>,
    ) -> Result<T, CoreError> {
        Ok(handler
            .with_throttle(self.wait.throttle)
            .with_timeout(self.wait.timeout)
            .wait(ctx.cancellation())
            .await?)
    }
}

/// A configured provider instance.
pub struct Provider {
    data: Arc<ProviderData>,
    resources: BTreeMap<&'static str, Arc<dyn Resource>>,
    data_sources: BTreeMap<&'static str, Arc<dyn DataSource>>,
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .field("data_sources", &self.data_sources.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Provider {
    pub fn configure(config: &ProviderConfig) -> Result<Self, CoreError> {
        let data = Arc::new(
            ProviderData::new(config).map_err(|e| e.in_operation("provider", Phase::Configure))?,
        );
        let experimental_network = config.has_experiment(Experiment::Network);

        let network: Arc<dyn Resource> = if experimental_network {
            Arc::new(NetworkResource::<ExperimentalNetworks>::new(&data))
        } else {
            Arc::new(NetworkResource::<StableNetworks>::new(&data))
        };
        let network_ds: Arc<dyn DataSource> = if experimental_network {
            Arc::new(NetworkDataSource::<ExperimentalNetworks>::new(&data))
        } else {
            Arc::new(NetworkDataSource::<StableNetworks>::new(&data))
        };

        let resources: Vec<Arc<dyn Resource>> = vec![
            Arc::new(DnsZoneResource::new(&data)),
            Arc::new(DnsRecordSetResource::new(&data)),
            network,
            Arc::new(NetworkAreaResource::new(&data)),
            Arc::new(NetworkAreaRouteResource::new(&data)),
            Arc::new(PublicIpResource::new(&data)),
            Arc::new(ServiceAccountAttachResource::new(&data)),
        ];
        let data_sources: Vec<Arc<dyn DataSource>> = vec![
            Arc::new(DnsZoneDataSource::new(&data)),
            Arc::new(DnsRecordSetDataSource::new(&data)),
            network_ds,
            Arc::new(NetworkAreaDataSource::new(&data)),
            Arc::new(PublicIpDataSource::new(&data)),
        ];

        info!(
            experiments = ?config.experiments,
            resources = resources.len(),
            data_sources = data_sources.len(),
            "provider configured"
        );

        Ok(Self {
            data,
            resources: resources.into_iter().map(|r| (r.type_name(), r)).collect(),
            data_sources: data_sources
                .into_iter()
                .map(|d| (d.type_name(), d))
                .collect(),
        })
    }

    pub fn data(&self) -> &Arc<ProviderData> {
        &self.data
    }

    pub fn resource(&self, type_name: &str) -> Option<Arc<dyn Resource>> {
        self.resources.get(type_name).cloned()
    }

    pub fn data_source(&self, type_name: &str) -> Option<Arc<dyn DataSource>> {
        self.data_sources.get(type_name).cloned()
    }

    pub fn resource_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }

    pub fn data_source_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.data_sources.keys().copied()
    }
}
