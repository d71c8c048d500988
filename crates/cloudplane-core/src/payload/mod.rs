// ── Request payload builders ──
//
// Each builder turns a typed model into the request body for one API
// call. Builders fail with `NilModel` when given no model. Attributes that
// a given endpoint must not receive are excluded by the payload type
// itself, and each exclusion is documented on the builder.

pub mod dns;
pub mod network;
pub mod network_area;
pub mod public_ip;

pub use dns::{
    to_record_set_create_payload, to_record_set_update_payload, to_zone_create_payload,
    to_zone_update_payload,
};
pub use network::{
    to_network_alpha_create_payload, to_network_alpha_update_payload, to_network_create_payload,
    to_network_update_payload,
};
pub use network_area::{
    NetworkRangeChanges, network_range_changes, to_network_area_create_payload,
    to_network_area_route_create_payload, to_network_area_route_update_payload,
    to_network_area_update_payload,
};
pub use public_ip::{to_public_ip_create_payload, to_public_ip_update_payload};

use crate::error::CoreError;
use crate::model::Labels;

pub(crate) fn require_model<M>(model: Option<&M>) -> Result<&M, CoreError> {
    model.ok_or(CoreError::NilModel)
}

/// A value the schema marks required; absent means the config bypassed validation.
pub(crate) fn required(field: &'static str, value: Option<&String>) -> Result<String, CoreError> {
    value
        .cloned()
        .ok_or_else(|| CoreError::validation(format!("attribute {field:?} is required")))
}

/// Checked narrowing for attributes the wire carries as 32-bit integers.
pub(crate) fn to_i32(field: &'static str, value: Option<i64>) -> Result<Option<i32>, CoreError> {
    value
        .map(|v| {
            i32::try_from(v).map_err(|_| {
                CoreError::type_assertion(format!("{field}: {v} does not fit in a 32-bit integer"))
            })
        })
        .transpose()
}

/// Labels for a partial update.
///
/// Removing every label from the configuration has to send `{}`; omitting
/// the field would leave the old labels in place.
pub fn update_labels(desired: Option<&Labels>, prior: Option<&Labels>) -> Option<Labels> {
    match (desired, prior) {
        (Some(labels), _) => Some(labels.clone()),
        (None, Some(prior)) if !prior.is_empty() => Some(Labels::new()),
        (None, _) => None,
    }
}
