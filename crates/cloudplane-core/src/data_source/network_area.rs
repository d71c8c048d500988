use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{DataSource, resolve};
use crate::context::OperationContext;
use crate::convert::map_network_area_fields;
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{Attribute, Schema, Validator, decode};
use crate::model::NetworkAreaModel;
use crate::provider::ProviderData;
use crate::resource::network_area::TYPE_NAME;

pub fn network_area_data_source_schema() -> Schema {
    Schema::new(
        "Network area within an organization.",
        vec![
            Attribute::computed("id"),
            Attribute::required("organization_id").with(Validator::Uuid),
            Attribute::required("network_area_id").with(Validator::Uuid),
            Attribute::computed("name"),
            Attribute::computed("default_nameservers"),
            Attribute::computed("network_ranges"),
            Attribute::computed("transfer_network"),
            Attribute::computed("default_prefix_length"),
            Attribute::computed("max_prefix_length"),
            Attribute::computed("min_prefix_length"),
            Attribute::computed("labels"),
            Attribute::computed("project_count"),
        ],
    )
}

#[derive(Debug)]
pub struct NetworkAreaDataSource {
    data: Arc<ProviderData>,
}

impl NetworkAreaDataSource {
    pub fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            data: Arc::clone(data),
        }
    }

    async fn lookup(&self, config: &Value) -> Result<Value, CoreError> {
        let model: NetworkAreaModel = decode(config)?;
        let area_id = model
            .network_area_id
            .clone()
            .ok_or(CoreError::MissingIdentifier {
                attribute: "network_area_id",
            })?;
        let area = self
            .data
            .iaas
            .get_network_area(&model.organization_id, &area_id)
            .await?;
        resolve(model, Some(&area), map_network_area_fields)
    }
}

#[async_trait]
impl DataSource for NetworkAreaDataSource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        network_area_data_source_schema()
    }

    async fn read(&self, _ctx: &OperationContext, config: &Value) -> Result<Value, CoreError> {
        self.lookup(config)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Read))
    }
}
