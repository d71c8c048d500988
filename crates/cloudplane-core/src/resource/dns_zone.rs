// ── DNS zone resource ──

use std::sync::Arc;

use async_trait::async_trait;
use cloudplane_api::dns::types::ZONE_DELETE_SUCCEEDED;
use cloudplane_api::dns::wait::{
    create_zone_wait_handler, delete_zone_wait_handler, partial_update_zone_wait_handler,
};
use serde_json::Value;
use tracing::info;

use super::{Resource, commit, forget, found, known_id, seed_import};
use crate::context::OperationContext;
use crate::convert::map_zone_fields;
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{Attribute, ResourceState, Schema, Validator, decode};
use crate::identifier::{build_internal_id, parse_import_id};
use crate::model::ZoneModel;
use crate::payload::{to_zone_create_payload, to_zone_update_payload};
use crate::provider::ProviderData;

pub const TYPE_NAME: &str = "cloudplane_dns_zone";

const IMPORT_FORMAT: [&str; 2] = ["project_id", "zone_id"];

pub(crate) const ZONE_TYPES: &[&str] = &["primary", "secondary"];

pub fn zone_schema() -> Schema {
    Schema::new(
        "DNS zone.",
        vec![
            Attribute::computed("id"),
            Attribute::scope_id("project_id"),
            Attribute::computed("zone_id"),
            Attribute::required("name"),
            Attribute::required("dns_name").requires_replace(),
            Attribute::optional("description"),
            Attribute::optional_computed("acl"),
            Attribute::computed("active"),
            Attribute::optional_computed("contact_email"),
            Attribute::optional_computed("default_ttl").with(Validator::IntRange {
                min: 60,
                max: 99_999_999,
            }),
            Attribute::optional_computed("expire_time"),
            Attribute::optional_computed("is_reverse_zone").requires_replace(),
            Attribute::optional_computed("negative_cache"),
            Attribute::optional("primaries").requires_replace(),
            Attribute::computed("primary_name_server"),
            Attribute::computed("record_count"),
            Attribute::optional_computed("refresh_time"),
            Attribute::optional_computed("retry_time"),
            Attribute::computed("serial_number"),
            Attribute::optional_computed("type")
                .with(Validator::OneOf(ZONE_TYPES))
                .requires_replace(),
            Attribute::computed("visibility"),
            Attribute::computed("state"),
        ],
    )
}

#[derive(Debug)]
pub struct DnsZoneResource {
    data: Arc<ProviderData>,
}

impl DnsZoneResource {
    pub fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            data: Arc::clone(data),
        }
    }

    async fn create_zone(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let model: ZoneModel = decode(plan)?;
        let body = to_zone_create_payload(Some(&model))?;
        let created = self.data.dns.create_zone(&model.project_id, &body).await?;

        let zone_id = known_id("zone_id", created.zone.as_ref().and_then(|z| z.id.as_ref()))?;
        let id = build_internal_id(&[&model.project_id, &zone_id]);
        state.set_attribute("project_id", model.project_id.clone());
        state.set_attribute("zone_id", zone_id.clone());
        state.set_attribute("id", id.clone());
        info!(resource = TYPE_NAME, %id, "zone created, waiting for it to become active");

        let zone = self
            .data
            .wait(ctx, create_zone_wait_handler(&self.data.dns, &model.project_id, &zone_id))
            .await?;
        let working = ZoneModel {
            zone_id: Some(zone_id),
            ..model
        };
        commit(state, working, Some(&zone), map_zone_fields)
    }

    async fn read_zone(&self, state: &mut ResourceState) -> Result<(), CoreError> {
        let model: ZoneModel = state.decode()?;
        let zone_id = known_id("zone_id", model.zone_id.as_ref())?;

        let Some(resp) = found(self.data.dns.get_zone(&model.project_id, &zone_id).await)? else {
            forget(TYPE_NAME, state, "not found");
            return Ok(());
        };
        if resp
            .zone
            .as_ref()
            .is_some_and(|z| z.state.as_deref() == Some(ZONE_DELETE_SUCCEEDED))
        {
            forget(TYPE_NAME, state, "deleted");
            return Ok(());
        }
        commit(state, model, resp.zone.as_ref(), map_zone_fields)
    }

    async fn update_zone(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let prior: ZoneModel = state.decode()?;
        let mut model: ZoneModel = decode(plan)?;
        model.zone_id = model.zone_id.or(prior.zone_id);
        let zone_id = known_id("zone_id", model.zone_id.as_ref())?;

        let body = to_zone_update_payload(Some(&model))?;
        self.data
            .dns
            .partial_update_zone(&model.project_id, &zone_id, &body)
            .await?;
        let zone = self
            .data
            .wait(
                ctx,
                partial_update_zone_wait_handler(&self.data.dns, &model.project_id, &zone_id),
            )
            .await?;
        info!(resource = TYPE_NAME, %zone_id, "zone updated");
        commit(state, model, Some(&zone), map_zone_fields)
    }

    async fn delete_zone(
        &self,
        ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let model: ZoneModel = state.decode()?;
        let zone_id = known_id("zone_id", model.zone_id.as_ref())?;

        if found(self.data.dns.delete_zone(&model.project_id, &zone_id).await)?.is_some() {
            self.data
                .wait(ctx, delete_zone_wait_handler(&self.data.dns, &model.project_id, &zone_id))
                .await?;
        }
        info!(resource = TYPE_NAME, %zone_id, "zone deleted");
        state.remove();
        Ok(())
    }
}

#[async_trait]
impl Resource for DnsZoneResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        zone_schema()
    }

    async fn create(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.create_zone(ctx, plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Create))
    }

    async fn read(
        &self,
        _ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.read_zone(state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Read))
    }

    async fn update(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.update_zone(ctx, plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Update))
    }

    async fn delete(
        &self,
        ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.delete_zone(ctx, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Delete))
    }

    async fn import_state(
        &self,
        _ctx: &OperationContext,
        id: &str,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let [project_id, zone_id] =
            parse_import_id(id, IMPORT_FORMAT).map_err(in_operation(TYPE_NAME, Phase::Import))?;
        seed_import(state, id, &[("project_id", project_id.as_str()), ("zone_id", zone_id.as_str())]);
        Ok(())
    }
}
