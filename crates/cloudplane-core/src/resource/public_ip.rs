use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use super::{Resource, commit, forget, found, known_id, seed_import};
use crate::context::OperationContext;
use crate::convert::map_public_ip_fields;
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{Attribute, ResourceState, Schema, Validator, decode};
use crate::identifier::{build_internal_id, parse_import_id};
use crate::model::PublicIpModel;
use crate::payload::{to_public_ip_create_payload, to_public_ip_update_payload};
use crate::provider::ProviderData;

pub const TYPE_NAME: &str = "cloudplane_public_ip";

const IMPORT_FORMAT: [&str; 2] = ["project_id", "public_ip_id"];

pub fn public_ip_schema() -> Schema {
    Schema::new(
        "Public IP address, optionally attached to a network interface.",
        vec![
            Attribute::computed("id"),
            Attribute::scope_id("project_id"),
            Attribute::computed("public_ip_id"),
            Attribute::computed("ip"),
            Attribute::optional("network_interface_id").with(Validator::Uuid),
            Attribute::optional("labels"),
        ],
    )
}

#[derive(Debug)]
pub struct PublicIpResource {
    data: Arc<ProviderData>,
}

impl PublicIpResource {
    pub fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            data: Arc::clone(data),
        }
    }

    async fn create_public_ip(
        &self,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let model: PublicIpModel = decode(plan)?;
        let body = to_public_ip_create_payload(Some(&model))?;
        let created = self
            .data
            .iaas
            .create_public_ip(&model.project_id, &body)
            .await?;

        let public_ip_id = known_id("public_ip_id", created.id.as_ref())?;
        let id = build_internal_id(&[&model.project_id, &public_ip_id]);
        state.set_attribute("project_id", model.project_id.clone());
        state.set_attribute("public_ip_id", public_ip_id);
        state.set_attribute("id", id.clone());
        info!(resource = TYPE_NAME, %id, ip = ?created.ip, "public IP created");

        commit(state, model, Some(&created), map_public_ip_fields)
    }

    async fn read_public_ip(&self, state: &mut ResourceState) -> Result<(), CoreError> {
        let model: PublicIpModel = state.decode()?;
        let public_ip_id = known_id("public_ip_id", model.public_ip_id.as_ref())?;

        let Some(public_ip) = found(
            self.data
                .iaas
                .get_public_ip(&model.project_id, &public_ip_id)
                .await,
        )?
        else {
            forget(TYPE_NAME, state, "not found");
            return Ok(());
        };
        commit(state, model, Some(&public_ip), map_public_ip_fields)
    }

    async fn update_public_ip(
        &self,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let prior: PublicIpModel = state.decode()?;
        let mut model: PublicIpModel = decode(plan)?;
        model.public_ip_id = model.public_ip_id.or_else(|| prior.public_ip_id.clone());
        let public_ip_id = known_id("public_ip_id", model.public_ip_id.as_ref())?;

        let body = to_public_ip_update_payload(Some(&model), Some(&prior))?;
        let public_ip = self
            .data
            .iaas
            .update_public_ip(&model.project_id, &public_ip_id, &body)
            .await?;
        info!(resource = TYPE_NAME, %public_ip_id, "public IP updated");
        commit(state, model, Some(&public_ip), map_public_ip_fields)
    }

    async fn delete_public_ip(&self, state: &mut ResourceState) -> Result<(), CoreError> {
        let model: PublicIpModel = state.decode()?;
        let public_ip_id = known_id("public_ip_id", model.public_ip_id.as_ref())?;

        let deleted = self
            .data
            .iaas
            .delete_public_ip(&model.project_id, &public_ip_id)
            .await;
        found(deleted)?;
        info!(resource = TYPE_NAME, %public_ip_id, "public IP deleted");
        state.remove();
        Ok(())
    }
}

#[async_trait]
impl Resource for PublicIpResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        public_ip_schema()
    }

    async fn create(
        &self,
        _ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.create_public_ip(plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Create))
    }

    async fn read(
        &self,
        _ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.read_public_ip(state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Read))
    }

    async fn update(
        &self,
        _ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.update_public_ip(plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Update))
    }

    async fn delete(
        &self,
        _ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.delete_public_ip(state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Delete))
    }

    async fn import_state(
        &self,
        _ctx: &OperationContext,
        id: &str,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let [project_id, public_ip_id] =
            parse_import_id(id, IMPORT_FORMAT).map_err(in_operation(TYPE_NAME, Phase::Import))?;
        seed_import(
            state,
            id,
            &[("project_id", project_id.as_str()), ("public_ip_id", public_ip_id.as_str())],
        );
        Ok(())
    }
}
