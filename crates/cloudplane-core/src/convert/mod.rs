// ── Response-to-state field mapping ──
//
// Each `map_*_fields` function copies a typed API response into a typed
// model. Mappers never perform I/O. They resolve the resource identifier
// from the model first and the response second, recompute the composite
// `id`, keep absent server fields as `None`, and route list attributes
// through the reconciler.

pub mod dns;
pub mod network;
pub mod network_area;
pub mod public_ip;
pub mod server;

pub use dns::{map_record_set_fields, map_zone_fields};
pub use network::{map_network_alpha_fields, map_network_fields};
pub use network_area::{map_network_area_fields, map_network_area_route_fields};
pub use public_ip::map_public_ip_fields;
pub use server::map_service_account_attach_fields;

use crate::error::CoreError;
use crate::model::Labels;

/// Unwrap both mapper inputs or fail with the matching contract error.
pub(crate) fn require<'r, 'm, R, M>(
    remote: Option<&'r R>,
    model: Option<&'m mut M>,
) -> Result<(&'r R, &'m mut M), CoreError> {
    let remote = remote.ok_or(CoreError::MissingResponse)?;
    let model = model.ok_or(CoreError::MissingState)?;
    Ok((remote, model))
}

/// Identifier from the model if known, else from the response.
pub(crate) fn resolve_id(
    attribute: &'static str,
    known: Option<&str>,
    remote: Option<&str>,
) -> Result<String, CoreError> {
    known
        .filter(|s| !s.is_empty())
        .or(remote.filter(|s| !s.is_empty()))
        .map(str::to_owned)
        .ok_or(CoreError::MissingIdentifier { attribute })
}

/// Labels as stored in state.
///
/// The service reports "no labels" as either an empty object or nothing
/// at all; both keep whatever the model held before (`{}` or `null`).
pub fn map_labels(prior: Option<&Labels>, remote: Option<&Labels>) -> Option<Labels> {
    match remote {
        Some(labels) if !labels.is_empty() => Some(labels.clone()),
        _ => prior.filter(|p| p.is_empty()).cloned(),
    }
}

fn widen(value: Option<i32>) -> Option<i64> {
    value.map(i64::from)
}
