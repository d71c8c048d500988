// ── Server service account attachment ──
//
// An attachment has no identity of its own on the server side; it exists
// while the email appears in the server's service account list. Every
// attribute forces replacement, so there is no update.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use super::{Resource, commit, forget, found, seed_import};
use crate::context::OperationContext;
use crate::convert::map_service_account_attach_fields;
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{Attribute, ResourceState, Schema, Validator, decode};
use crate::identifier::{build_internal_id, parse_import_id};
use crate::model::ServiceAccountAttachModel;
use crate::provider::ProviderData;

pub const TYPE_NAME: &str = "cloudplane_server_service_account_attach";

const IMPORT_FORMAT: [&str; 3] = ["project_id", "server_id", "service_account_email"];

pub fn service_account_attach_schema() -> Schema {
    Schema::new(
        "Attaches a service account to a server.",
        vec![
            Attribute::computed("id"),
            Attribute::scope_id("project_id"),
            Attribute::scope_id("server_id"),
            Attribute::required("service_account_email")
                .with(Validator::NoSeparator)
                .requires_replace(),
        ],
    )
}

#[derive(Debug)]
pub struct ServiceAccountAttachResource {
    data: Arc<ProviderData>,
}

impl ServiceAccountAttachResource {
    pub fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            data: Arc::clone(data),
        }
    }

    async fn attach(&self, plan: &Value, state: &mut ResourceState) -> Result<(), CoreError> {
        let model: ServiceAccountAttachModel = decode(plan)?;
        self.data
            .iaas
            .add_service_account_to_server(
                &model.project_id,
                &model.server_id,
                &model.service_account_email,
            )
            .await?;

        let id = build_internal_id(&[
            &model.project_id,
            &model.server_id,
            &model.service_account_email,
        ]);
        state.set_attribute("project_id", model.project_id.clone());
        state.set_attribute("server_id", model.server_id.clone());
        state.set_attribute("service_account_email", model.service_account_email.clone());
        state.set_attribute("id", id.clone());
        info!(resource = TYPE_NAME, %id, "service account attached");

        let accounts = self
            .data
            .iaas
            .list_server_service_accounts(&model.project_id, &model.server_id)
            .await?;
        commit(state, model, Some(&accounts), map_service_account_attach_fields)
    }

    async fn read_attachment(&self, state: &mut ResourceState) -> Result<(), CoreError> {
        let model: ServiceAccountAttachModel = state.decode()?;

        let Some(accounts) = found(
            self.data
                .iaas
                .list_server_service_accounts(&model.project_id, &model.server_id)
                .await,
        )?
        else {
            forget(TYPE_NAME, state, "server not found");
            return Ok(());
        };
        match commit(state, model, Some(&accounts), map_service_account_attach_fields) {
            Err(e) if e.is_not_found() => {
                forget(TYPE_NAME, state, "service account detached");
                Ok(())
            }
            other => other,
        }
    }

    async fn detach(&self, state: &mut ResourceState) -> Result<(), CoreError> {
        let model: ServiceAccountAttachModel = state.decode()?;
        let removed = self
            .data
            .iaas
            .remove_service_account_from_server(
                &model.project_id,
                &model.server_id,
                &model.service_account_email,
            )
            .await;
        found(removed)?;
        info!(
            resource = TYPE_NAME,
            server_id = %model.server_id,
            email = %model.service_account_email,
            "service account detached"
        );
        state.remove();
        Ok(())
    }
}

#[async_trait]
impl Resource for ServiceAccountAttachResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        service_account_attach_schema()
    }

    async fn create(
        &self,
        _ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.attach(plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Create))
    }

    async fn read(
        &self,
        _ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.read_attachment(state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Read))
    }

    async fn update(
        &self,
        _ctx: &OperationContext,
        _plan: &Value,
        _state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        Err(CoreError::Internal(
            "service account attachments cannot be updated in place".into(),
        )
        .in_operation(TYPE_NAME, Phase::Update))
    }

    async fn delete(
        &self,
        _ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.detach(state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Delete))
    }

    async fn import_state(
        &self,
        _ctx: &OperationContext,
        id: &str,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let [project_id, server_id, email] =
            parse_import_id(id, IMPORT_FORMAT).map_err(in_operation(TYPE_NAME, Phase::Import))?;
        seed_import(
            state,
            id,
            &[
                ("project_id", project_id.as_str()),
                ("server_id", server_id.as_str()),
                ("service_account_email", email.as_str()),
            ],
        );
        Ok(())
    }
}
