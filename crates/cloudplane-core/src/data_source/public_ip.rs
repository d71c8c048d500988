use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{DataSource, resolve};
use crate::context::OperationContext;
use crate::convert::map_public_ip_fields;
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{Attribute, Schema, Validator, decode};
use crate::model::PublicIpModel;
use crate::provider::ProviderData;
use crate::resource::public_ip::TYPE_NAME;

pub fn public_ip_data_source_schema() -> Schema {
    Schema::new(
        "Public IP address.",
        vec![
            Attribute::computed("id"),
            Attribute::required("project_id").with(Validator::Uuid),
            Attribute::required("public_ip_id").with(Validator::Uuid),
            Attribute::computed("ip"),
            Attribute::computed("network_interface_id"),
            Attribute::computed("labels"),
        ],
    )
}

#[derive(Debug)]
pub struct PublicIpDataSource {
    data: Arc<ProviderData>,
}

impl PublicIpDataSource {
    pub fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            data: Arc::clone(data),
        }
    }

    async fn lookup(&self, config: &Value) -> Result<Value, CoreError> {
        let model: PublicIpModel = decode(config)?;
        let public_ip_id = model
            .public_ip_id
            .clone()
            .ok_or(CoreError::MissingIdentifier {
                attribute: "public_ip_id",
            })?;
        let public_ip = self
            .data
            .iaas
            .get_public_ip(&model.project_id, &public_ip_id)
            .await?;
        resolve(model, Some(&public_ip), map_public_ip_fields)
    }
}

#[async_trait]
impl DataSource for PublicIpDataSource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        public_ip_data_source_schema()
    }

    async fn read(&self, _ctx: &OperationContext, config: &Value) -> Result<Value, CoreError> {
        self.lookup(config)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Read))
    }
}
