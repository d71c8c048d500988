// Network area and area route payloads.

use std::collections::HashSet;

use cloudplane_api::iaas::types::{
    CreateAreaAddressFamily, CreateAreaIpv4, CreateNetworkAreaPayload,
    CreateNetworkAreaRoutePayload, NetworkRange, NetworkRangePayload,
    PartialUpdateNetworkAreaPayload, RoutePayload, UpdateAreaAddressFamily, UpdateAreaIpv4,
    UpdateNetworkAreaRoutePayload,
};

use super::{require_model, required, update_labels};
use crate::error::CoreError;
use crate::model::{NetworkAreaModel, NetworkAreaRouteModel, NetworkRangeModel};

pub fn to_network_area_create_payload(
    model: Option<&NetworkAreaModel>,
) -> Result<CreateNetworkAreaPayload, CoreError> {
    let model = require_model(model)?;
    Ok(CreateNetworkAreaPayload {
        name: required("name", model.name.as_ref())?,
        address_family: CreateAreaAddressFamily {
            ipv4: CreateAreaIpv4 {
                default_nameservers: model.default_nameservers.clone().unwrap_or_default(),
                network_ranges: model
                    .network_ranges
                    .iter()
                    .flatten()
                    .map(|r| NetworkRangePayload {
                        prefix: r.prefix.clone(),
                    })
                    .collect(),
                transfer_network: required("transfer_network", model.transfer_network.as_ref())?,
                default_prefix_len: model.default_prefix_length,
                max_prefix_len: model.max_prefix_length,
                min_prefix_len: model.min_prefix_length,
            },
        },
        labels: model.labels.clone(),
    })
}

/// Partial area update.
///
/// `transfer_network` is fixed after creation. Network ranges have their
/// own endpoints, see [`network_range_changes`].
pub fn to_network_area_update_payload(
    model: Option<&NetworkAreaModel>,
    prior: Option<&NetworkAreaModel>,
) -> Result<PartialUpdateNetworkAreaPayload, CoreError> {
    let model = require_model(model)?;
    Ok(PartialUpdateNetworkAreaPayload {
        name: model.name.clone(),
        address_family: UpdateAreaAddressFamily {
            ipv4: UpdateAreaIpv4 {
                default_nameservers: model.default_nameservers.clone().unwrap_or_default(),
                default_prefix_len: model.default_prefix_length,
                max_prefix_len: model.max_prefix_length,
                min_prefix_len: model.min_prefix_length,
            },
        },
        labels: update_labels(model.labels.as_ref(), prior.and_then(|p| p.labels.as_ref())),
    })
}

/// Range calls needed to move the area from `current` to `desired`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkRangeChanges {
    pub to_add: Vec<NetworkRangePayload>,
    /// Server IDs of ranges to delete.
    pub to_remove: Vec<String>,
}

impl NetworkRangeChanges {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Diff configured ranges against the area's current ranges by prefix.
///
/// Additions are applied before removals so the area never drops to zero
/// ranges in between.
pub fn network_range_changes(
    desired: &[NetworkRangeModel],
    current: &[NetworkRange],
) -> Result<NetworkRangeChanges, CoreError> {
    let wanted: HashSet<&str> = desired.iter().map(|r| r.prefix.as_str()).collect();
    let present: HashSet<&str> = current.iter().filter_map(|r| r.prefix.as_deref()).collect();

    let mut seen = HashSet::new();
    let to_add = desired
        .iter()
        .filter(|r| !present.contains(r.prefix.as_str()) && seen.insert(r.prefix.as_str()))
        .map(|r| NetworkRangePayload {
            prefix: r.prefix.clone(),
        })
        .collect();

    let to_remove = current
        .iter()
        .filter(|r| r.prefix.as_deref().is_some_and(|p| !wanted.contains(p)))
        .map(|r| {
            r.network_range_id.clone().ok_or(CoreError::MissingIdentifier {
                attribute: "network_range_id",
            })
        })
        .collect::<Result<_, _>>()?;

    Ok(NetworkRangeChanges { to_add, to_remove })
}

pub fn to_network_area_route_create_payload(
    model: Option<&NetworkAreaRouteModel>,
) -> Result<CreateNetworkAreaRoutePayload, CoreError> {
    let model = require_model(model)?;
    Ok(CreateNetworkAreaRoutePayload {
        ipv4: vec![RoutePayload {
            prefix: required("prefix", model.prefix.as_ref())?,
            nexthop: required("next_hop", model.next_hop.as_ref())?,
            labels: model.labels.clone(),
        }],
    })
}

/// Only labels can change on an existing route.
pub fn to_network_area_route_update_payload(
    model: Option<&NetworkAreaRouteModel>,
    prior: Option<&NetworkAreaRouteModel>,
) -> Result<UpdateNetworkAreaRoutePayload, CoreError> {
    let model = require_model(model)?;
    Ok(UpdateNetworkAreaRoutePayload {
        labels: update_labels(model.labels.as_ref(), prior.and_then(|p| p.labels.as_ref())),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;

    fn area() -> NetworkAreaModel {
        NetworkAreaModel {
            organization_id: "oid".into(),
            name: Some("area".into()),
            transfer_network: Some("192.168.0.0/24".into()),
            network_ranges: Some(vec![NetworkRangeModel {
                network_range_id: None,
                prefix: "10.0.0.0/16".into(),
            }]),
            ..Default::default()
        }
    }

    fn current(id: &str, prefix: &str) -> NetworkRange {
        NetworkRange {
            network_range_id: Some(id.into()),
            prefix: Some(prefix.into()),
        }
    }

    #[test]
    fn builders_reject_nil_model() {
        let kinds = [
            to_network_area_create_payload(None).unwrap_err().kind(),
            to_network_area_update_payload(None, None).unwrap_err().kind(),
            to_network_area_route_create_payload(None).unwrap_err().kind(),
            to_network_area_route_update_payload(None, None).unwrap_err().kind(),
        ];
        assert!(kinds.iter().all(|k| *k == ErrorKind::NilModel));
    }

    #[test]
    fn update_never_sends_transfer_network_or_ranges() {
        let body =
            serde_json::to_value(to_network_area_update_payload(Some(&area()), None).unwrap())
                .unwrap();
        assert_eq!(
            body,
            json!({ "name": "area", "addressFamily": { "ipv4": { "defaultNameservers": [] } } })
        );
    }

    #[test]
    fn create_requires_transfer_network() {
        let model = NetworkAreaModel {
            transfer_network: None,
            ..area()
        };
        let err = to_network_area_create_payload(Some(&model)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn range_changes_add_and_remove_by_prefix() {
        let desired = vec![
            NetworkRangeModel {
                network_range_id: None,
                prefix: "10.0.0.0/16".into(),
            },
            NetworkRangeModel {
                network_range_id: None,
                prefix: "10.2.0.0/16".into(),
            },
        ];
        let existing = vec![current("r0", "10.0.0.0/16"), current("r1", "10.1.0.0/16")];
        let changes = network_range_changes(&desired, &existing).unwrap();
        assert_eq!(
            changes.to_add,
            vec![NetworkRangePayload {
                prefix: "10.2.0.0/16".into()
            }]
        );
        assert_eq!(changes.to_remove, vec!["r1".to_owned()]);

        let none = network_range_changes(&desired[..1], &existing[..1]).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn route_create_wraps_single_entry() {
        let model = NetworkAreaRouteModel {
            organization_id: "oid".into(),
            network_area_id: "aid".into(),
            prefix: Some("192.168.1.0/24".into()),
            next_hop: Some("10.0.0.1".into()),
            ..Default::default()
        };
        let body =
            serde_json::to_value(to_network_area_route_create_payload(Some(&model)).unwrap())
                .unwrap();
        assert_eq!(
            body,
            json!({ "ipv4": [{ "prefix": "192.168.1.0/24", "nexthop": "10.0.0.1" }] })
        );
    }
}
