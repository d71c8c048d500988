// Network payloads for the stable and experimental APIs.
//
// IPv4 nameservers are always sent, defaulting to `[]`. IPv6 nameservers
// are three-state: `None` omits the field so the area default applies,
// `Some([])` clears them, a populated list sets them. Prefix lengths,
// `routed` and `routing_table_id` are fixed at creation and never appear
// in an update body.

use cloudplane_api::iaas::types::{
    CreateNetworkAddressFamily, CreateNetworkIpv4, CreateNetworkIpv6, CreateNetworkPayload,
    PartialUpdateNetworkPayload, UpdateNetworkAddressFamily, UpdateNetworkIpv4, UpdateNetworkIpv6,
};
use cloudplane_api::iaas_alpha::types as alpha;

use super::{require_model, required, update_labels};
use crate::error::CoreError;
use crate::model::NetworkModel;

fn ipv4_nameservers(model: &NetworkModel) -> Vec<String> {
    model.ipv4_nameservers.clone().unwrap_or_default()
}

fn wants_ipv6(model: &NetworkModel) -> bool {
    model.ipv6_nameservers.is_some()
        || model.ipv6_prefix_length.is_some()
        || model.ipv6_gateway.is_some()
}

pub fn to_network_create_payload(
    model: Option<&NetworkModel>,
) -> Result<CreateNetworkPayload, CoreError> {
    let model = require_model(model)?;
    let ipv6 = wants_ipv6(model).then(|| CreateNetworkIpv6 {
        nameservers: model.ipv6_nameservers.clone(),
        prefix_length: model.ipv6_prefix_length,
    });
    Ok(CreateNetworkPayload {
        name: required("name", model.name.as_ref())?,
        address_family: CreateNetworkAddressFamily {
            ipv4: CreateNetworkIpv4 {
                nameservers: ipv4_nameservers(model),
                prefix_length: model.ipv4_prefix_length,
            },
            ipv6,
        },
        labels: model.labels.clone(),
        routed: model.routed,
    })
}

pub fn to_network_update_payload(
    model: Option<&NetworkModel>,
    prior: Option<&NetworkModel>,
) -> Result<PartialUpdateNetworkPayload, CoreError> {
    let model = require_model(model)?;
    Ok(PartialUpdateNetworkPayload {
        name: model.name.clone(),
        address_family: UpdateNetworkAddressFamily {
            ipv4: UpdateNetworkIpv4 {
                nameservers: ipv4_nameservers(model),
            },
            ipv6: model
                .ipv6_nameservers
                .as_ref()
                .map(|ns| UpdateNetworkIpv6 {
                    nameservers: Some(ns.clone()),
                }),
        },
        labels: update_labels(model.labels.as_ref(), prior.and_then(|p| p.labels.as_ref())),
    })
}

pub fn to_network_alpha_create_payload(
    model: Option<&NetworkModel>,
) -> Result<alpha::CreateNetworkPayload, CoreError> {
    let model = require_model(model)?;
    let ipv6 = wants_ipv6(model).then(|| alpha::CreateNetworkIpv6 {
        nameservers: model.ipv6_nameservers.clone(),
        prefix_length: model.ipv6_prefix_length,
        gateway: model.ipv6_gateway.clone(),
    });
    Ok(alpha::CreateNetworkPayload {
        name: required("name", model.name.as_ref())?,
        ipv4: alpha::CreateNetworkIpv4 {
            nameservers: ipv4_nameservers(model),
            prefix_length: model.ipv4_prefix_length,
            gateway: model.ipv4_gateway.clone(),
        },
        ipv6,
        labels: model.labels.clone(),
        routed: model.routed,
        routing_table_id: model.routing_table_id.clone(),
    })
}

pub fn to_network_alpha_update_payload(
    model: Option<&NetworkModel>,
    prior: Option<&NetworkModel>,
) -> Result<alpha::PartialUpdateNetworkPayload, CoreError> {
    let model = require_model(model)?;
    let ipv6 = (model.ipv6_nameservers.is_some() || model.ipv6_gateway.is_some()).then(|| {
        alpha::UpdateNetworkIpv6 {
            nameservers: model.ipv6_nameservers.clone(),
            gateway: model.ipv6_gateway.clone(),
        }
    });
    Ok(alpha::PartialUpdateNetworkPayload {
        name: model.name.clone(),
        ipv4: alpha::UpdateNetworkIpv4 {
            nameservers: ipv4_nameservers(model),
            gateway: model.ipv4_gateway.clone(),
        },
        ipv6,
        labels: update_labels(model.labels.as_ref(), prior.and_then(|p| p.labels.as_ref())),
    })
}
