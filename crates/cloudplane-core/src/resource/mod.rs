// ── Resource lifecycle ──
//
// Every managed resource implements `Resource`: the host hands in the
// planned attribute object and the state slot, the resource calls the
// API, waits for the remote side to settle, and maps the response back
// into state. Shared lifecycle rules live in the helpers below:
//
// - identifiers are written to state right after a successful mutating
//   call, before any wait;
// - mapping runs on a working copy and only a successful result replaces
//   the slot;
// - a read that finds the remote gone empties the slot instead of failing;
// - a delete that finds the remote already gone succeeds.

pub mod dns_record_set;
pub mod dns_zone;
pub mod network;
pub mod network_area;
pub mod network_area_route;
pub mod public_ip;
pub mod service_account_attach;

pub use dns_record_set::DnsRecordSetResource;
pub use dns_zone::DnsZoneResource;
pub use network::{ExperimentalNetworks, NetworkBackend, NetworkResource, StableNetworks};
pub use network_area::NetworkAreaResource;
pub use network_area_route::NetworkAreaRouteResource;
pub use public_ip::PublicIpResource;
pub use service_account_attach::ServiceAccountAttachResource;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::context::OperationContext;
use crate::error::{CoreError, Phase, in_operation};
use crate::framework::{ResourceState, Schema};

#[async_trait]
pub trait Resource: Send + Sync {
    /// Type name as used in configuration, e.g. `cloudplane_dns_zone`.
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    fn validate_config(&self, config: &Value) -> Result<(), CoreError> {
        self.schema()
            .validate(config)
            .map_err(in_operation(self.type_name(), Phase::Validate))
    }

    async fn create(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError>;

    /// Refresh state from the remote. Empties the slot when the remote is gone.
    async fn read(&self, ctx: &OperationContext, state: &mut ResourceState)
    -> Result<(), CoreError>;

    async fn update(
        &self,
        ctx: &OperationContext,
        plan: &Value,
        state: &mut ResourceState,
    ) -> Result<(), CoreError>;

    async fn delete(
        &self,
        ctx: &OperationContext,
        state: &mut ResourceState,
    ) -> Result<(), CoreError>;

    /// Seed state from an import identifier. No network calls; the host
    /// follows up with `read`.
    async fn import_state(
        &self,
        ctx: &OperationContext,
        id: &str,
        state: &mut ResourceState,
    ) -> Result<(), CoreError>;
}

// ── Lifecycle helpers ────────────────────────────────────────────────

/// Treat 404/410 as `None`.
pub(crate) fn found<T>(result: Result<T, cloudplane_api::Error>) -> Result<Option<T>, CoreError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// An identifier the state must already hold.
pub(crate) fn known_id(attribute: &'static str, value: Option<&String>) -> Result<String, CoreError> {
    value
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or(CoreError::MissingIdentifier { attribute })
}

/// Map onto `working` and replace the slot only if mapping succeeds.
pub(crate) fn commit<R, M, F>(
    state: &mut ResourceState,
    mut working: M,
    remote: Option<&R>,
    mapper: F,
) -> Result<(), CoreError>
where
    M: Serialize,
    F: FnOnce(Option<&R>, Option<&mut M>) -> Result<(), CoreError>,
{
    mapper(remote, Some(&mut working))?;
    state.set(&working)
}

/// Drop a resource whose remote counterpart no longer exists.
pub(crate) fn forget(resource: &'static str, state: &mut ResourceState, reason: &str) {
    let id = state
        .attribute("id")
        .and_then(Value::as_str)
        .unwrap_or("<unknown>")
        .to_owned();
    warn!(resource, %id, reason, "remote resource gone, removing from state");
    state.remove();
}

/// Replace the slot with the identifier attributes of an import.
pub(crate) fn seed_import(state: &mut ResourceState, id: &str, attributes: &[(&str, &str)]) {
    let mut seeded = ResourceState::new();
    for (name, value) in attributes {
        seeded.set_attribute(name, *value);
    }
    seeded.set_attribute("id", id);
    *state = seeded;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;

    #[derive(Serialize)]
    struct Model {
        id: Option<String>,
    }

    #[test]
    fn commit_leaves_state_untouched_on_mapping_failure() {
        let mut state = ResourceState::from_value(json!({ "id": "old" })).unwrap();
        let err = commit(&mut state, Model { id: None }, Some(&()), |_, _| {
            Err(CoreError::MissingIdentifier { attribute: "id" })
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingIdentifier);
        assert_eq!(state.to_value(), json!({ "id": "old" }));
    }

    #[test]
    fn commit_replaces_state_on_success() {
        let mut state = ResourceState::from_value(json!({ "id": "old" })).unwrap();
        commit(&mut state, Model { id: None }, Some(&()), |_, m| {
            m.unwrap().id = Some("new".into());
            Ok(())
        })
        .unwrap();
        assert_eq!(state.to_value(), json!({ "id": "new" }));
    }

    #[test]
    fn found_maps_not_found_to_none() {
        let gone: Result<(), _> = Err(cloudplane_api::Error::Api {
            message: "gone".into(),
            code: None,
            status: 410,
        });
        assert!(found(gone).unwrap().is_none());

        let denied: Result<(), _> = Err(cloudplane_api::Error::Unauthorized);
        assert_eq!(found(denied).unwrap_err().kind(), ErrorKind::Authentication);
    }

    #[test]
    fn seed_import_replaces_slot() {
        let mut state = ResourceState::from_value(json!({ "stale": true })).unwrap();
        seed_import(&mut state, "p,z", &[("project_id", "p"), ("zone_id", "z")]);
        assert_eq!(
            state.to_value(),
            json!({ "project_id": "p", "zone_id": "z", "id": "p,z" })
        );
    }
}
