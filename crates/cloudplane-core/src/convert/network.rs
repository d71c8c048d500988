// Network mappers for the stable (v1) and experimental (v2alpha) APIs.

use cloudplane_api::iaas::types::Network;
use cloudplane_api::iaas_alpha::types::Network as AlphaNetwork;

use super::{map_labels, require, resolve_id};
use crate::error::CoreError;
use crate::identifier::build_internal_id;
use crate::model::NetworkModel;
use crate::reconcile::reconcile_nullable;

fn set_identity(model: &mut NetworkModel, remote_id: Option<&str>) -> Result<(), CoreError> {
    let network_id = resolve_id("network_id", model.network_id.as_deref(), remote_id)?;
    model.id = Some(build_internal_id(&[&model.project_id, &network_id]));
    model.network_id = Some(network_id);
    Ok(())
}

pub fn map_network_fields(
    network: Option<&Network>,
    model: Option<&mut NetworkModel>,
) -> Result<(), CoreError> {
    let (network, model) = require(network, model)?;
    set_identity(model, network.network_id.as_deref())?;

    model.name.clone_from(&network.name);
    model.ipv4_nameservers = reconcile_nullable(
        model.ipv4_nameservers.as_deref(),
        network.nameservers.as_deref(),
    );
    model.ipv4_prefixes =
        reconcile_nullable(model.ipv4_prefixes.as_deref(), network.prefixes.as_deref());
    model.ipv6_nameservers = reconcile_nullable(
        model.ipv6_nameservers.as_deref(),
        network.nameservers_v6.as_deref(),
    );
    model.ipv6_prefixes = reconcile_nullable(
        model.ipv6_prefixes.as_deref(),
        network.prefixes_v6.as_deref(),
    );
    model.public_ip.clone_from(&network.public_ip);
    model.labels = map_labels(model.labels.as_ref(), network.labels.as_ref());
    model.routed = network.routed;
    model.state.clone_from(&network.state);
    Ok(())
}

pub fn map_network_alpha_fields(
    network: Option<&AlphaNetwork>,
    model: Option<&mut NetworkModel>,
) -> Result<(), CoreError> {
    let (network, model) = require(network, model)?;
    set_identity(model, network.id.as_deref())?;

    model.name.clone_from(&network.name);

    let ipv4 = network.ipv4.as_ref();
    model.ipv4_nameservers = reconcile_nullable(
        model.ipv4_nameservers.as_deref(),
        ipv4.and_then(|v| v.nameservers.as_deref()),
    );
    model.ipv4_prefixes = reconcile_nullable(
        model.ipv4_prefixes.as_deref(),
        ipv4.and_then(|v| v.prefixes.as_deref()),
    );
    model.ipv4_gateway = ipv4.and_then(|v| v.gateway.clone());
    model.public_ip = ipv4.and_then(|v| v.public_ip.clone());

    let ipv6 = network.ipv6.as_ref();
    model.ipv6_nameservers = reconcile_nullable(
        model.ipv6_nameservers.as_deref(),
        ipv6.and_then(|v| v.nameservers.as_deref()),
    );
    model.ipv6_prefixes = reconcile_nullable(
        model.ipv6_prefixes.as_deref(),
        ipv6.and_then(|v| v.prefixes.as_deref()),
    );
    model.ipv6_gateway = ipv6.and_then(|v| v.gateway.clone());

    model.labels = map_labels(model.labels.as_ref(), network.labels.as_ref());
    model.routed = network.routed;
    model.routing_table_id.clone_from(&network.routing_table_id);
    model.state.clone_from(&network.status);
    Ok(())
}
