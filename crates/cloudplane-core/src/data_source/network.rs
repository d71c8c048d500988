use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{DataSource, not_found, resolve};
use crate::context::OperationContext;
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{Attribute, Schema, Validator, decode};
use crate::model::NetworkModel;
use crate::provider::ProviderData;
use crate::resource::network::{NetworkBackend, TYPE_NAME};

pub fn network_data_source_schema() -> Schema {
    Schema::new(
        "Network within a project.",
        vec![
            Attribute::computed("id"),
            Attribute::required("project_id").with(Validator::Uuid),
            Attribute::required("network_id").with(Validator::Uuid),
            Attribute::optional_computed("region"),
            Attribute::computed("name"),
            Attribute::computed("ipv4_nameservers"),
            Attribute::computed("ipv4_prefix_length"),
            Attribute::computed("ipv4_prefixes"),
            Attribute::computed("ipv4_gateway"),
            Attribute::computed("ipv6_nameservers"),
            Attribute::computed("ipv6_prefix_length"),
            Attribute::computed("ipv6_prefixes"),
            Attribute::computed("ipv6_gateway"),
            Attribute::computed("public_ip"),
            Attribute::computed("labels"),
            Attribute::computed("routed"),
            Attribute::computed("routing_table_id"),
            Attribute::computed("state"),
        ],
    )
}

#[derive(Debug)]
pub struct NetworkDataSource<B> {
    backend: B,
}

impl<B: NetworkBackend> NetworkDataSource<B> {
    pub fn new(data: &Arc<ProviderData>) -> Self {
        Self {
            backend: B::new(data),
        }
    }

    async fn lookup(&self, config: &Value) -> Result<Value, CoreError> {
        let mut model: NetworkModel = decode(config)?;
        self.backend.prepare(&mut model)?;
        let network_id = model.network_id.clone().ok_or(CoreError::MissingIdentifier {
            attribute: "network_id",
        })?;

        let network = self
            .backend
            .get(&model, &network_id)
            .await?
            .ok_or_else(|| not_found(format!("network {network_id}")))?;
        resolve(model, Some(&network), B::map)
    }
}

#[async_trait]
impl<B: NetworkBackend> DataSource for NetworkDataSource<B> {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        network_data_source_schema()
    }

    async fn read(&self, _ctx: &OperationContext, config: &Value) -> Result<Value, CoreError> {
        self.lookup(config)
            .await
            .map_err(in_operation(TYPE_NAME, Phase::Read))
    }
}
