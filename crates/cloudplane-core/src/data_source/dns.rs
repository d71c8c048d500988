// DNS zone and record set lookups.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{DataSource, not_found, resolve};
use crate::context::OperationContext;
use crate::convert::{map_record_set_fields, map_zone_fields};
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{Attribute, Schema, Validator, decode};
use crate::model::{RecordSetModel, ZoneModel};
use crate::provider::ProviderData;
use crate::resource::dns_record_set::TYPE_NAME as RECORD_SET_TYPE;
use crate::resource::dns_zone::TYPE_NAME as ZONE_TYPE;

const ZONE_COMPUTED: &[&str] = &[
    "id",
    "name",
    "description",
    "acl",
    "active",
    "contact_email",
    "default_ttl",
    "expire_time",
    "is_reverse_zone",
    "negative_cache",
    "primaries",
    "primary_name_server",
    "record_count",
    "refresh_time",
    "retry_time",
    "serial_number",
    "type",
    "visibility",
    "state",
];

pub fn zone_data_source_schema() -> Schema {
    let mut attributes = vec![
        Attribute::required("project_id")
            .with(Validator::Uuid)
            .with(Validator::NoSeparator),
        Attribute::optional_computed("zone_id").with(Validator::Uuid),
        Attribute::optional_computed("dns_name"),
    ];
    attributes.extend(ZONE_COMPUTED.iter().copied().map(Attribute::computed));
    Schema::new("DNS zone, looked up by zone_id or dns_name.", attributes)
}

#[derive(Debug)]
pub struct DnsZoneDataSource {
    data: Arc<ProviderData>,
}

impl DnsZoneDataSource {
    pub fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            data: Arc::clone(data),
        }
    }

    async fn lookup(&self, config: &Value) -> Result<Value, CoreError> {
        let model: ZoneModel = decode(config)?;

        let zone = match (model.zone_id.as_deref(), model.dns_name.as_deref()) {
            (Some(zone_id), None) => self
                .data
                .dns
                .get_zone(&model.project_id, zone_id)
                .await?
                .zone
                .ok_or(CoreError::MissingResponse)?,
            (None, Some(dns_name)) => {
                let listed = self
                    .data
                    .dns
                    .list_zones_by_dns_name(&model.project_id, dns_name)
                    .await?;
                debug!(%dns_name, matches = listed.zones.len(), "zone lookup by dns_name");
                listed
                    .zones
                    .into_iter()
                    .next()
                    .ok_or_else(|| not_found(format!("zone with dns_name {dns_name:?}")))?
            }
            _ => {
                return Err(CoreError::validation(
                    "exactly one of zone_id and dns_name must be set",
                ));
            }
        };
        resolve(model, Some(&zone), map_zone_fields)
    }
}

#[async_trait]
impl DataSource for DnsZoneDataSource {
    fn type_name(&self) -> &'static str {
        ZONE_TYPE
    }

    fn schema(&self) -> Schema {
        zone_data_source_schema()
    }

    async fn read(&self, _ctx: &OperationContext, config: &Value) -> Result<Value, CoreError> {
        self.lookup(config)
            .await
            .map_err(in_operation(ZONE_TYPE, Phase::Read))
    }
}

pub fn record_set_data_source_schema() -> Schema {
    Schema::new(
        "DNS record set.",
        vec![
            Attribute::computed("id"),
            Attribute::required("project_id").with(Validator::Uuid),
            Attribute::required("zone_id").with(Validator::Uuid),
            Attribute::required("record_set_id").with(Validator::Uuid),
            Attribute::computed("name"),
            Attribute::computed("fqdn"),
            Attribute::computed("records"),
            Attribute::computed("ttl"),
            Attribute::computed("type"),
            Attribute::computed("comment"),
            Attribute::computed("active"),
            Attribute::computed("state"),
        ],
    )
}

#[derive(Debug)]
pub struct DnsRecordSetDataSource {
    data: Arc<ProviderData>,
}

impl DnsRecordSetDataSource {
    pub fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            data: Arc::clone(data),
        }
    }

    async fn lookup(&self, config: &Value) -> Result<Value, CoreError> {
        let model: RecordSetModel = decode(config)?;
        let record_set_id = model
            .record_set_id
            .clone()
            .ok_or(CoreError::MissingIdentifier {
                attribute: "record_set_id",
            })?;
        let rrset = self
            .data
            .dns
            .get_record_set(&model.project_id, &model.zone_id, &record_set_id)
            .await?
            .rrset;
        resolve(model, rrset.as_ref(), map_record_set_fields)
    }
}

#[async_trait]
impl DataSource for DnsRecordSetDataSource {
    fn type_name(&self) -> &'static str {
        RECORD_SET_TYPE
    }

    fn schema(&self) -> Schema {
        record_set_data_source_schema()
    }

    async fn read(&self, _ctx: &OperationContext, config: &Value) -> Result<Value, CoreError> {
        self.lookup(config)
            .await
            .map_err(in_operation(RECORD_SET_TYPE, Phase::Read))
    }
}
