// ── Data sources ──
//
// Read-only lookups. A data source decodes its configuration into the
// same model the matching resource uses, fetches the remote object and
// maps it with nothing known beforehand, so lists come back in server
// order. A missing remote is an error here, not a removal.

pub mod dns;
pub mod network;
pub mod network_area;
pub mod public_ip;

pub use dns::{DnsRecordSetDataSource, DnsZoneDataSource};
pub use network::NetworkDataSource;
pub use network_area::NetworkAreaDataSource;
pub use public_ip::PublicIpDataSource;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::context::OperationContext;
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{Schema, encode};

#[async_trait]
pub trait DataSource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    fn validate_config(&self, config: &Value) -> Result<(), CoreError> {
        self.schema()
            .validate(config)
            .map_err(in_operation(self.type_name(), Phase::Validate))
    }

    /// Look the object up and return its full attribute object.
    async fn read(&self, ctx: &OperationContext, config: &Value) -> Result<Value, CoreError>;
}

/// Map `remote` onto the decoded config and encode the result.
pub(crate) fn resolve<R, M, F>(mut model: M, remote: Option<&R>, mapper: F) -> Result<Value, CoreError>
where
    M: Serialize,
    F: FnOnce(Option<&R>, Option<&mut M>) -> Result<(), CoreError>,
{
    mapper(remote, Some(&mut model))?;
    Ok(Value::Object(encode(&model)?))
}

pub(crate) fn not_found(what: impl std::fmt::Display) -> CoreError {
    CoreError::RemoteNotFound {
        message: format!("{what} not found"),
    }
}
