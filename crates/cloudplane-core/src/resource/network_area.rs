// ── Network area resource ──
//
// Ranges are not part of the area PATCH body. An update diffs the
// configured ranges against the live ones and issues range calls,
// additions first.

use std::sync::Arc;

use async_trait::async_trait;
use cloudplane_api::iaas::types::CreateNetworkRangesPayload;
use cloudplane_api::iaas::wait::{
    delete_network_area_wait_handler, network_area_ready_wait_handler,
};
use serde_json::Value;
use tracing::{debug, info};

use super::{Resource, commit, forget, found, known_id, seed_import};
use crate::context::OperationContext;
use crate::convert::map_network_area_fields;
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{Attribute, ResourceState, Schema, Validator, decode};
use crate::identifier::{build_internal_id, parse_import_id};
use crate::model::{NetworkAreaModel, NetworkRangeModel};
use crate::payload::{
    network_range_changes, to_network_area_create_payload, to_network_area_update_payload,
};
use crate::provider::ProviderData;

pub const TYPE_NAME: &str = "cloudplane_network_area";

const IMPORT_FORMAT: [&str; 2] = ["organization_id", "network_area_id"];

pub fn network_area_schema() -> Schema {
    Schema::new(
        "Network area within an organization.",
        vec![
            Attribute::computed("id"),
            Attribute::scope_id("organization_id"),
            Attribute::computed("network_area_id"),
            Attribute::required("name"),
            Attribute::optional("default_nameservers"),
            Attribute::required("network_ranges"),
            Attribute::required("transfer_network").requires_replace(),
            Attribute::optional_computed("default_prefix_length")
                .with(Validator::IntRange { min: 24, max: 29 }),
            Attribute::optional_computed("max_prefix_length")
                .with(Validator::IntRange { min: 24, max: 29 }),
            Attribute::optional_computed("min_prefix_length")
                .with(Validator::IntRange { min: 8, max: 29 }),
            Attribute::optional("labels"),
            Attribute::computed("project_count"),
        ],
    )
}

#[derive(Debug)]
pub struct NetworkAreaResource {
    data: Arc<ProviderData>,
}

impl NetworkAreaResource {
    pub fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            data: Arc::clone(data),
        }
    }

    async fn create_area(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let model: NetworkAreaModel = decode(plan)?;
        let body = to_network_area_create_payload(Some(&model))?;
        let created = self
            .data
            .iaas
            .create_network_area(&model.organization_id, &body)
            .await?;

        let area_id = known_id("network_area_id", created.area_id.as_ref())?;
        let id = build_internal_id(&[&model.organization_id, &area_id]);
        state.set_attribute("organization_id", model.organization_id.clone());
        state.set_attribute("network_area_id", area_id.clone());
        state.set_attribute("id", id.clone());
        info!(resource = TYPE_NAME, %id, "network area created, waiting for it to become ready");

        let area = self
            .data
            .wait(
                ctx,
                network_area_ready_wait_handler(&self.data.iaas, &model.organization_id, &area_id),
            )
            .await?;
        let working = NetworkAreaModel {
            network_area_id: Some(area_id),
            ..model
        };
        commit(state, working, Some(&area), map_network_area_fields)
    }

    async fn read_area(&self, state: &mut ResourceState) -> Result<(), CoreError> {
        let model: NetworkAreaModel = state.decode()?;
        let area_id = known_id("network_area_id", model.network_area_id.as_ref())?;

        let Some(area) = found(
            self.data
                .iaas
                .get_network_area(&model.organization_id, &area_id)
                .await,
        )?
        else {
            forget(TYPE_NAME, state, "not found");
            return Ok(());
        };
        commit(state, model, Some(&area), map_network_area_fields)
    }

    async fn update_ranges(
        &self,
        organization_id: &str,
        area_id: &str,
        desired: &[NetworkRangeModel],
    ) -> Result<(), CoreError> {
        let current = self
            .data
            .iaas
            .list_network_ranges(organization_id, area_id)
            .await?;
        let changes = network_range_changes(desired, &current.items)?;
        if changes.is_empty() {
            return Ok(());
        }
        debug!(
            %area_id,
            add = changes.to_add.len(),
            remove = changes.to_remove.len(),
            "updating network ranges"
        );

        if !changes.to_add.is_empty() {
            let body = CreateNetworkRangesPayload {
                ipv4: changes.to_add,
            };
            self.data
                .iaas
                .create_network_ranges(organization_id, area_id, &body)
                .await?;
        }
        for range_id in &changes.to_remove {
            let removed = self
                .data
                .iaas
                .delete_network_range(organization_id, area_id, range_id)
                .await;
            found(removed)?;
        }
        Ok(())
    }

    async fn update_area(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let prior: NetworkAreaModel = state.decode()?;
        let mut model: NetworkAreaModel = decode(plan)?;
        model.network_area_id = model.network_area_id.or_else(|| prior.network_area_id.clone());
        let area_id = known_id("network_area_id", model.network_area_id.as_ref())?;

        let body = to_network_area_update_payload(Some(&model), Some(&prior))?;
        self.data
            .iaas
            .partial_update_network_area(&model.organization_id, &area_id, &body)
            .await?;
        if let Some(ranges) = &model.network_ranges {
            self.update_ranges(&model.organization_id, &area_id, ranges)
                .await?;
        }

        let area = self
            .data
            .wait(
                ctx,
                network_area_ready_wait_handler(&self.data.iaas, &model.organization_id, &area_id),
            )
            .await?;
        info!(resource = TYPE_NAME, %area_id, "network area updated");
        commit(state, model, Some(&area), map_network_area_fields)
    }

    async fn delete_area(
        &self,
        ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let model: NetworkAreaModel = state.decode()?;
        let area_id = known_id("network_area_id", model.network_area_id.as_ref())?;

        let deleted = self
            .data
            .iaas
            .delete_network_area(&model.organization_id, &area_id)
            .await;
        if found(deleted)?.is_some() {
            self.data
                .wait(
                    ctx,
                    delete_network_area_wait_handler(
                        &self.data.iaas,
                        &model.organization_id,
                        &area_id,
                    ),
                )
                .await?;
        }
        info!(resource = TYPE_NAME, %area_id, "network area deleted");
        state.remove();
        Ok(())
    }
}

#[async_trait]
impl Resource for NetworkAreaResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        network_area_schema()
    }

    async fn create(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.create_area(ctx, plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Create))
    }

    async fn read(
        &self,
        _ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.read_area(state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Read))
    }

    async fn update(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.update_area(ctx, plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Update))
    }

    async fn delete(
        &self,
        ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.delete_area(ctx, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Delete))
    }

    async fn import_state(
        &self,
        _ctx: &OperationContext,
        id: &str,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let [organization_id, area_id] =
            parse_import_id(id, IMPORT_FORMAT).map_err(in_operation(TYPE_NAME, Phase::Import))?;
        seed_import(
            state,
            id,
            &[
                ("organization_id", organization_id.as_str()),
                ("network_area_id", area_id.as_str()),
            ],
        );
        Ok(())
    }
}
