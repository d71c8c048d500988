use cloudplane_api::iaas::types::{CreatePublicIpPayload, UpdatePublicIpPayload};

use super::{require_model, update_labels};
use crate::error::CoreError;
use crate::model::PublicIpModel;

pub fn to_public_ip_create_payload(
    model: Option<&PublicIpModel>,
) -> Result<CreatePublicIpPayload, CoreError> {
    let model = require_model(model)?;
    Ok(CreatePublicIpPayload {
        ip: None,
        network_interface: model.network_interface_id.clone(),
        labels: model.labels.clone(),
    })
}

/// `network_interface_id` is always sent; `null` detaches the address.
pub fn to_public_ip_update_payload(
    model: Option<&PublicIpModel>,
    prior: Option<&PublicIpModel>,
) -> Result<UpdatePublicIpPayload, CoreError> {
    let model = require_model(model)?;
    Ok(UpdatePublicIpPayload {
        network_interface: model.network_interface_id.clone(),
        labels: update_labels(model.labels.as_ref(), prior.and_then(|p| p.labels.as_ref())),
    })
}
