// ── DNS record set resource ──

use std::sync::Arc;

use async_trait::async_trait;
use cloudplane_api::dns::types::RECORD_SET_DELETE_SUCCEEDED;
use cloudplane_api::dns::wait::{
    create_record_set_wait_handler, delete_record_set_wait_handler,
    partial_update_record_set_wait_handler,
};
use serde_json::Value;
use tracing::info;

use super::{Resource, commit, forget, found, known_id, seed_import};
use crate::context::OperationContext;
use crate::convert::map_record_set_fields;
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{Attribute, ResourceState, Schema, Validator, decode};
use crate::identifier::{build_internal_id, parse_import_id};
use crate::model::RecordSetModel;
use crate::payload::{to_record_set_create_payload, to_record_set_update_payload};
use crate::provider::ProviderData;

pub const TYPE_NAME: &str = "cloudplane_dns_record_set";

const IMPORT_FORMAT: [&str; 3] = ["project_id", "zone_id", "record_set_id"];

pub(crate) const RECORD_TYPES: &[&str] = &[
    "A", "AAAA", "SOA", "CNAME", "NS", "MX", "TXT", "SRV", "PTR", "ALIAS", "DNAME", "CAA",
    "DNSKEY", "DS", "LOC", "NAPTR", "SSHFP", "TLSA", "URI", "CERT", "SVCB", "TYPE", "CSYNC",
    "HINFO", "HTTPS",
];

pub fn record_set_schema() -> Schema {
    Schema::new(
        "DNS record set.",
        vec![
            Attribute::computed("id"),
            Attribute::scope_id("project_id"),
            Attribute::scope_id("zone_id"),
            Attribute::computed("record_set_id"),
            Attribute::required("name").requires_replace(),
            Attribute::computed("fqdn"),
            Attribute::required("records"),
            Attribute::optional_computed("ttl").with(Validator::IntRange {
                min: 60,
                max: 99_999_999,
            }),
            Attribute::required("type")
                .with(Validator::OneOf(RECORD_TYPES))
                .requires_replace(),
            Attribute::optional("comment"),
            Attribute::computed("active"),
            Attribute::computed("state"),
        ],
    )
}

#[derive(Debug)]
pub struct DnsRecordSetResource {
    data: Arc<ProviderData>,
}

impl DnsRecordSetResource {
    pub fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            data: Arc::clone(data),
        }
    }

    async fn create_record_set(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let model: RecordSetModel = decode(plan)?;
        let body = to_record_set_create_payload(Some(&model))?;
        let created = self
            .data
            .dns
            .create_record_set(&model.project_id, &model.zone_id, &body)
            .await?;

        let record_set_id = known_id(
            "record_set_id",
            created.rrset.as_ref().and_then(|r| r.id.as_ref()),
        )?;
        let id = build_internal_id(&[&model.project_id, &model.zone_id, &record_set_id]);
        state.set_attribute("project_id", model.project_id.clone());
        state.set_attribute("zone_id", model.zone_id.clone());
        state.set_attribute("record_set_id", record_set_id.clone());
        state.set_attribute("id", id.clone());
        info!(resource = TYPE_NAME, %id, "record set created, waiting for it to become active");

        let rrset = self
            .data
            .wait(
                ctx,
                create_record_set_wait_handler(
                    &self.data.dns,
                    &model.project_id,
                    &model.zone_id,
                    &record_set_id,
                ),
            )
            .await?;
        let working = RecordSetModel {
            record_set_id: Some(record_set_id),
            ..model
        };
        commit(state, working, Some(&rrset), map_record_set_fields)
    }

    async fn read_record_set(&self, state: &mut ResourceState) -> Result<(), CoreError> {
        let model: RecordSetModel = state.decode()?;
        let record_set_id = known_id("record_set_id", model.record_set_id.as_ref())?;

        let Some(resp) = found(
            self.data
                .dns
                .get_record_set(&model.project_id, &model.zone_id, &record_set_id)
                .await,
        )?
        else {
            forget(TYPE_NAME, state, "not found");
            return Ok(());
        };
        if resp
            .rrset
            .as_ref()
            .is_some_and(|r| r.state.as_deref() == Some(RECORD_SET_DELETE_SUCCEEDED))
        {
            forget(TYPE_NAME, state, "deleted");
            return Ok(());
        }
        commit(state, model, resp.rrset.as_ref(), map_record_set_fields)
    }

    async fn update_record_set(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let prior: RecordSetModel = state.decode()?;
        let mut model: RecordSetModel = decode(plan)?;
        model.record_set_id = model.record_set_id.or(prior.record_set_id);
        let record_set_id = known_id("record_set_id", model.record_set_id.as_ref())?;

        let body = to_record_set_update_payload(Some(&model))?;
        self.data
            .dns
            .partial_update_record_set(&model.project_id, &model.zone_id, &record_set_id, &body)
            .await?;
        let rrset = self
            .data
            .wait(
                ctx,
                partial_update_record_set_wait_handler(
                    &self.data.dns,
                    &model.project_id,
                    &model.zone_id,
                    &record_set_id,
                ),
            )
            .await?;
        info!(resource = TYPE_NAME, %record_set_id, "record set updated");
        commit(state, model, Some(&rrset), map_record_set_fields)
    }

    async fn delete_record_set(
        &self,
        ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let model: RecordSetModel = state.decode()?;
        let record_set_id = known_id("record_set_id", model.record_set_id.as_ref())?;

        let deleted = self
            .data
            .dns
            .delete_record_set(&model.project_id, &model.zone_id, &record_set_id)
            .await;
        if found(deleted)?.is_some() {
            self.data
                .wait(
                    ctx,
                    delete_record_set_wait_handler(
                        &self.data.dns,
                        &model.project_id,
                        &model.zone_id,
                        &record_set_id,
                    ),
                )
                .await?;
        }
        info!(resource = TYPE_NAME, %record_set_id, "record set deleted");
        state.remove();
        Ok(())
    }
}

#[async_trait]
impl Resource for DnsRecordSetResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        record_set_schema()
    }

    async fn create(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.create_record_set(ctx, plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Create))
    }

    async fn read(
        &self,
        _ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.read_record_set(state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Read))
    }

    async fn update(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.update_record_set(ctx, plan, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Update))
    }

    async fn delete(
        &self,
        ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        self.delete_record_set(ctx, state)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Delete))
    }

    async fn import_state(
        &self,
        _ctx: &OperationContext,
        id: &str,
        state: &mut ResourceState,
    ) -> Result<(), CoreError> {
        let [project_id, zone_id, record_set_id] =
            parse_import_id(id, IMPORT_FORMAT).map_err(in_operation(TYPE_NAME, Phase::Import))?;
        seed_import(
            state,
            id,
            &[
                ("project_id", project_id.as_str()),
                ("zone_id", zone_id.as_str()),
                ("record_set_id", record_set_id.as_str()),
            ],
        );
        Ok(())
    }
}
