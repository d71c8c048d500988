// ── Network area route resource ──
//
// Routes settle synchronously; there is nothing to wait for.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use super::{Resource, commit, forget, found, known_id, seed_import};
use crate::context::OperationContext;
use crate::convert::map_network_area_route_fields;
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{Attribute, ResourceState, Schema, decode};
use crate::identifier::{build_internal_id, parse_import_id};
use crate::model::NetworkAreaRouteModel;
use crate::payload::{to_network_area_route_create_payload, to_network_area_route_update_payload};
use crate::provider::ProviderData;

pub const TYPE_NAME: &str = "cloudplane_network_area_route";

const IMPORT_FORMAT: [&str; 3] = ["organization_id", "network_area_id", "network_area_route_id"];

pub fn network_area_route_schema() -> Schema {
    Schema::new(
        "Static route within a network area.",
        vec![
            Attribute::computed("id"),
            Attribute::scope_id("organization_id"),
            Attribute::scope_id("network_area_id"),
            Attribute::computed("network_area_route_id"),
            Attribute::required("prefix").requires_replace(),
            Attribute::required("next_hop").requires_replace(),
            Attribute::optional("labels"),
        ],
    )
}

#[derive(Debug)]
pub struct NetworkAreaRouteResource {
    data: Arc<ProviderData>,
}

impl NetworkAreaRouteResource {
    pub fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            data: Arc::clone(data),
        }
    }

    async fn create_route(&self, plan: &Value, state: &mut ResourceState) -> Result<(), CoreError> {
        let model: NetworkAreaRouteModel = decode(plan)?;
        let body = to_network_area_route_create_payload(Some(&model))?;
        let created = self
            .data
            .iaas
            .create_network_area_routes(&model.organization_id, &model.network_area_id, &body)
            .await?;
        let route = created.items.into_iter().next().ok_or(CoreError::MissingResponse)?;

        let route_id = known_id("network_area_route_id", route.route_id.as_ref())?;
        let id = build_internal_id(&[&model.organization_id, &model.network_area_id, &route_id]);
        state.set_attribute("organization_id", model.organization_id.clone());
        state.set_attribute("network_area_id", model.network_area_id.clone());
        state.set_attribute("network_area_route_id", route_id);
        state.set_attribute("id", id.clone());
        info!(resource = TYPE_NAME, %id, "route created");

        commit(state, model, Some(&route), map_network_area_route_fields)
    }

    async fn read_route(&self, state: &mut ResourceState) -> Result<(), CoreError> {
        let model: NetworkAreaRouteModel = state.decode()?;
        let route_id = known_id("network_area_route_id", model.network_area_route_id.as_ref())?;

        let Some(route) = found(
            self.data
                .iaas
                .get_network_area_route(&model.organization_id, &model.network_area_id, &route_id)
                .await,
        )?
        else {
            forget(TYPE_NAME, state, "not found");
            return Ok(());
        };
        commit(state, model, Some(&route), map_network_area_route_fields)
    }

    async fn update_route(&self, plan: &Value, state: &mut ResourceState) -> Result<(), CoreError> {
        let prior: NetworkAreaRouteModel = state.decode()?;
        let mut model: NetworkAreaRouteModel = decode(plan)?;
        model.network_area_route_id = model
            .network_area_route_id
            .or_else(|| prior.network_area_route_id.clone());
        let route_id = known_id("network_area_route_id", model.network_area_route_id.as_ref())?;

        let body = to_network_area_route_update_payload(Some(&model), Some(&prior))?;
        let route = self
            .data
            .iaas
            .update_network_area_route(
                &model.organization_id,
                &model.network_area_id,
                &route_id,
                &body,
            )
            .await?;
        info!(resource = TYPE_NAME, %route_id, "route updated");
        commit(state, model, Some(&route), map_network_area_route_fields)
    }

    async fn delete_route(&self, state: &mut ResourceState) -> Result<(), CoreError> {
        let model: NetworkAreaRouteModel = state.decode()?;
        let route_id = known_id("network_area_route_id", model.network_area_route_id.as_ref())?;

        let deleted = self
            .data
            .iaas
            .delete_network_area_route(&model.organization_id, &model.network_area_id, &route_id)
            .await;
        found(deleted)?;
        info!(resource = TYPE_NAME, %route_id, "route deleted");
        state.remove();
        Ok(())
    }
}

#[async_trait]
impl Resource for NetworkAreaRouteResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        network_area_route_schema()
    }

    async fn create(
        &self,
        _ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.create_route(plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Create))
    }

    async fn read(
        &self,
        _ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.read_route(state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Read))
    }

    async fn update(
        &self,
        _ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.update_route(plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Update))
    }

    async fn delete(
        &self,
        _ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.delete_route(state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Delete))
    }

    async fn import_state(
        &self,
        _ctx: &OperationContext,
        id: &str,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let [organization_id, area_id, route_id] =
            parse_import_id(id, IMPORT_FORMAT).map_err(in_operation(TYPE_NAME, Phase::Import))?;
        seed_import(
            state,
            id,
            &[
                ("organization_id", organization_id.as_str()),
                ("network_area_id", area_id.as_str()),
                ("network_area_route_id", route_id.as_str()),
            ],
        );
        Ok(())
    }
}
