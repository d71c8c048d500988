// ── Network resource ──
//
// One resource type backed by either the stable IaaS API or the
// region-scoped experimental one. The backend is chosen when the provider
// is configured and never changes for its lifetime.

use std::sync::Arc;

use async_trait::async_trait;
use cloudplane_api::WaitHandler;
use cloudplane_api::iaas::types::Network;
use cloudplane_api::iaas::wait as stable_wait;
use cloudplane_api::iaas_alpha::types::Network as AlphaNetwork;
use cloudplane_api::iaas_alpha::wait as alpha_wait;
use serde_json::Value;
use tracing::info;

use super::{Resource, commit, forget, found, known_id, seed_import};
use crate::context::OperationContext;
use crate::convert::{map_network_alpha_fields, map_network_fields};
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{Attribute, ResourceState, Schema, Validator, decode};
use crate::identifier::{build_internal_id, parse_import_id};
use crate::model::NetworkModel;
use crate::payload::{
    to_network_alpha_create_payload, to_network_alpha_update_payload, to_network_create_payload,
    to_network_update_payload,
};
use crate::provider::ProviderData;

pub const TYPE_NAME: &str = "cloudplane_network";

const IMPORT_FORMAT: [&str; 2] = ["project_id", "network_id"];

pub fn network_schema() -> Schema {
    Schema::new(
        "Network within a project.",
        vec![
            Attribute::computed("id"),
            Attribute::scope_id("project_id"),
            Attribute::computed("network_id"),
            Attribute::required("name"),
            Attribute::optional_computed("region").requires_replace(),
            Attribute::optional("ipv4_nameservers"),
            Attribute::optional("ipv4_prefix_length")
                .with(Validator::IntRange { min: 8, max: 29 })
                .requires_replace(),
            Attribute::computed("ipv4_prefixes"),
            Attribute::optional_computed("ipv4_gateway"),
            Attribute::optional("ipv6_nameservers"),
            Attribute::optional("ipv6_prefix_length")
                .with(Validator::IntRange { min: 56, max: 64 })
                .requires_replace(),
            Attribute::computed("ipv6_prefixes"),
            Attribute::optional_computed("ipv6_gateway"),
            Attribute::computed("public_ip"),
            Attribute::optional("labels"),
            Attribute::optional_computed("routed").requires_replace(),
            Attribute::optional("routing_table_id")
                .with(Validator::Uuid)
                .requires_replace(),
            Attribute::computed("state"),
        ],
    )
}

// ── Backends ─────────────────────────────────────────────────────────

/// API surface a network resource is served from.
#[async_trait]
pub trait NetworkBackend: Send + Sync + Sized + 'static {
    type Remote: Send + Sync + 'static;

    /// Short name for logs.
    const NAME: &'static str;

    fn new(data: &Arc<ProviderData>) -> Self;

    /// Reject attributes the backend cannot serve and fill in scoping
    /// defaults. Runs before every API call.
    fn prepare(&self, model: &mut NetworkModel) -> Result<(), CoreError>;

    /// Returns the identifier reported by the create call.
    async fn create(&self, model: &NetworkModel) -> Result<Option<String>, CoreError>;

    fn wait_ready(&self, model: &NetworkModel, network_id: &str) -> WaitHandler<Self::Remote>;

    /// `None` when the network does not exist.
    async fn get(
        &self,
        model: &NetworkModel,
        network_id: &str,
    ) -> Result<Option<Self::Remote>, CoreError>;

    async fn update(
        &self,
        model: &NetworkModel,
        prior: &NetworkModel,
        network_id: &str,
    ) -> Result<(), CoreError>;

    /// `false` when the network was already gone.
    async fn delete(&self, model: &NetworkModel, network_id: &str) -> Result<bool, CoreError>;

    fn wait_deleted(&self, model: &NetworkModel, network_id: &str) -> WaitHandler<()>;

    fn map(remote: Option<&Self::Remote>, model: Option<&mut NetworkModel>) -> Result<(), CoreError>;

    fn data(&self) -> &ProviderData;
}

/// IaaS v1: project-scoped, no regions, no routing tables.
#[derive(Debug)]
pub struct StableNetworks {
    data: Arc<ProviderData>,
}

#[async_trait]
impl NetworkBackend for StableNetworks {
    type Remote = Network;

    const NAME: &'static str = "stable";

    fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            data: Arc::clone(data),
        }
    }

    fn prepare(&self, model: &mut NetworkModel) -> Result<(), CoreError> {
        if model.routing_table_id.is_some() {
            return Err(CoreError::Config {
                message: "routing_table_id requires the \"network\" experiment".into(),
            });
        }
        Ok(())
    }

    async fn create(&self, model: &NetworkModel) -> Result<Option<String>, CoreError> {
        let body = to_network_create_payload(Some(model))?;
        let created = self.data.iaas.create_network(&model.project_id, &body).await?;
        Ok(created.network_id)
    }

    fn wait_ready(&self, model: &NetworkModel, network_id: &str) -> WaitHandler<Network> {
        stable_wait::network_ready_wait_handler(&self.data.iaas, &model.project_id, network_id)
    }

    async fn get(
        &self,
        model: &NetworkModel,
        network_id: &str,
    ) -> Result<Option<Network>, CoreError> {
        found(self.data.iaas.get_network(&model.project_id, network_id).await)
    }

    async fn update(
        &self,
        model: &NetworkModel,
        prior: &NetworkModel,
        network_id: &str,
    ) -> Result<(), CoreError> {
        let body = to_network_update_payload(Some(model), Some(prior))?;
        self.data
            .iaas
            .partial_update_network(&model.project_id, network_id, &body)
            .await?;
        Ok(())
    }

    async fn delete(&self, model: &NetworkModel, network_id: &str) -> Result<bool, CoreError> {
        let deleted = self.data.iaas.delete_network(&model.project_id, network_id).await;
        Ok(found(deleted)?.is_some())
    }

    fn wait_deleted(&self, model: &NetworkModel, network_id: &str) -> WaitHandler<()> {
        stable_wait::delete_network_wait_handler(&self.data.iaas, &model.project_id, network_id)
    }

    fn map(remote: Option<&Network>, model: Option<&mut NetworkModel>) -> Result<(), CoreError> {
        map_network_fields(remote, model)
    }

    fn data(&self) -> &ProviderData {
        &self.data
    }
}

/// IaaS v2alpha: region-scoped, supports routing tables and gateways.
#[derive(Debug)]
pub struct ExperimentalNetworks {
    data: Arc<ProviderData>,
}

impl ExperimentalNetworks {
    fn region(model: &NetworkModel) -> Result<&str, CoreError> {
        model.region.as_deref().ok_or_else(|| CoreError::Config {
            message: "no region set on the network or the provider".into(),
        })
    }
}

#[async_trait]
impl NetworkBackend for ExperimentalNetworks {
    type Remote = AlphaNetwork;

    const NAME: &'static str = "experimental";

    fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            data: Arc::clone(data),
        }
    }

    fn prepare(&self, model: &mut NetworkModel) -> Result<(), CoreError> {
        if model.region.is_none() {
            model.region.clone_from(&self.data.region);
        }
        Self::region(model).map(|_| ())
    }

    async fn create(&self, model: &NetworkModel) -> Result<Option<String>, CoreError> {
        let body = to_network_alpha_create_payload(Some(model))?;
        let created = self
            .data
            .iaas_alpha
            .create_network(&model.project_id, Self::region(model)?, &body)
            .await?;
        Ok(created.id)
    }

    fn wait_ready(&self, model: &NetworkModel, network_id: &str) -> WaitHandler<AlphaNetwork> {
        alpha_wait::network_ready_wait_handler(
            &self.data.iaas_alpha,
            &model.project_id,
            model.region.as_deref().unwrap_or_default(),
            network_id,
        )
    }

    async fn get(
        &self,
        model: &NetworkModel,
        network_id: &str,
    ) -> Result<Option<AlphaNetwork>, CoreError> {
        let region = Self::region(model)?;
        found(
            self.data
                .iaas_alpha
                .get_network(&model.project_id, region, network_id)
                .await,
        )
    }

    async fn update(
        &self,
        model: &NetworkModel,
        prior: &NetworkModel,
        network_id: &str,
    ) -> Result<(), CoreError> {
        let body = to_network_alpha_update_payload(Some(model), Some(prior))?;
        self.data
            .iaas_alpha
            .partial_update_network(&model.project_id, Self::region(model)?, network_id, &body)
            .await?;
        Ok(())
    }

    async fn delete(&self, model: &NetworkModel, network_id: &str) -> Result<bool, CoreError> {
        let region = Self::region(model)?;
        let deleted = self
            .data
            .iaas_alpha
            .delete_network(&model.project_id, region, network_id)
            .await;
        Ok(found(deleted)?.is_some())
    }

    fn wait_deleted(&self, model: &NetworkModel, network_id: &str) -> WaitHandler<()> {
        alpha_wait::delete_network_wait_handler(
            &self.data.iaas_alpha,
            &model.project_id,
            model.region.as_deref().unwrap_or_default(),
            network_id,
        )
    }

    fn map(
        remote: Option<&AlphaNetwork>,
        model: Option<&mut NetworkModel>,
    ) -> Result<(), CoreError> {
        map_network_alpha_fields(remote, model)
    }

    fn data(&self) -> &ProviderData {
        &self.data
    }
}

// ── Resource ─────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct NetworkResource<B> {
    backend: B,
}

impl<B: NetworkBackend> NetworkResource<B> {
    pub fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            backend: B::new(data),
        }
    }

    async fn create_network(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let mut model: NetworkModel = decode(plan)?;
        self.backend.prepare(&mut model)?;

        let created = self.backend.create(&model).await?;
        let network_id = known_id("network_id", created.as_ref())?;
        let id = build_internal_id(&[&model.project_id, &network_id]);
        state.set_attribute("project_id", model.project_id.clone());
        state.set_attribute("network_id", network_id.clone());
        if let Some(region) = &model.region {
            state.set_attribute("region", region.clone());
        }
        state.set_attribute("id", id.clone());
        info!(resource = TYPE_NAME, backend = B::NAME, %id, "network created, waiting for it to become ready");

        let network = self
            .backend
            .data()
            .wait(ctx, self.backend.wait_ready(&model, &network_id))
            .await?;
        let working = NetworkModel {
            network_id: Some(network_id),
            ..model
        };
        commit(state, working, Some(&network), B::map)
    }

    async fn read_network(&self, state: &mut ResourceState) -> Result<(), CoreError> {
        let mut model: NetworkModel = state.decode()?;
        self.backend.prepare(&mut model)?;
        let network_id = known_id("network_id", model.network_id.as_ref())?;

        let Some(network) = self.backend.get(&model, &network_id).await? else {
            forget(TYPE_NAME, state, "not found");
            return Ok(());
        };
        commit(state, model, Some(&network), B::map)
    }

    async fn update_network(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let mut prior: NetworkModel = state.decode()?;
        self.backend.prepare(&mut prior)?;
        let mut model: NetworkModel = decode(plan)?;
        model.network_id = model.network_id.or_else(|| prior.network_id.clone());
        model.region = model.region.or_else(|| prior.region.clone());
        self.backend.prepare(&mut model)?;
        let network_id = known_id("network_id", model.network_id.as_ref())?;

        self.backend.update(&model, &prior, &network_id).await?;
        let network = self
            .backend
            .data()
            .wait(ctx, self.backend.wait_ready(&model, &network_id))
            .await?;
        info!(resource = TYPE_NAME, backend = B::NAME, %network_id, "network updated");
        commit(state, model, Some(&network), B::map)
    }

    async fn delete_network(
        &self,
        ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let mut model: NetworkModel = state.decode()?;
        self.backend.prepare(&mut model)?;
        let network_id = known_id("network_id", model.network_id.as_ref())?;

        if self.backend.delete(&model, &network_id).await? {
            self.backend
                .data()
                .wait(ctx, self.backend.wait_deleted(&model, &network_id))
                .await?;
        }
        info!(resource = TYPE_NAME, backend = B::NAME, %network_id, "network deleted");
        state.remove();
        Ok(())
    }
}

#[async_trait]
impl<B: NetworkBackend> Resource for NetworkResource<B> {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        network_schema()
    }

    async fn create(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.create_network(ctx, plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Create))
    }

    async fn read(
        &self,
        _ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.read_network(state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Read))
    }

    async fn update(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.update_network(ctx, plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Update))
    }

    async fn delete(
        &self,
        ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.delete_network(ctx, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Delete))
    }

    async fn import_state(
        &self,
        _ctx: &OperationContext,
        id: &str,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let [project_id, network_id] =
            parse_import_id(id, IMPORT_FORMAT).map_err(in_operation(TYPE_NAME, Phase::Import))?;
        seed_import(
            state,
            id,
            &[("project_id", project_id.as_str()), ("network_id", network_id.as_str())],
        );
        Ok(())
    }
}
