// Network area and area route mappers.

use cloudplane_api::iaas::types::{NetworkArea, NetworkRange, Route};

use super::{map_labels, require, resolve_id};
use crate::error::CoreError;
use crate::identifier::build_internal_id;
use crate::model::{NetworkAreaModel, NetworkAreaRouteModel, NetworkRangeModel};
use crate::reconcile::{reconcile_by_key, reconcile_nullable};

fn to_range_models(ranges: &[NetworkRange]) -> Result<Vec<NetworkRangeModel>, CoreError> {
    ranges
        .iter()
        .map(|r| {
            let prefix = r
                .prefix
                .clone()
                .ok_or_else(|| CoreError::type_assertion("network range without prefix"))?;
            Ok(NetworkRangeModel {
                network_range_id: r.network_range_id.clone(),
                prefix,
            })
        })
        .collect()
}

pub fn map_network_area_fields(
    area: Option<&NetworkArea>,
    model: Option<&mut NetworkAreaModel>,
) -> Result<(), CoreError> {
    let (area, model) = require(area, model)?;

    let area_id = resolve_id(
        "network_area_id",
        model.network_area_id.as_deref(),
        area.area_id.as_deref(),
    )?;
    model.id = Some(build_internal_id(&[&model.organization_id, &area_id]));
    model.network_area_id = Some(area_id);

    model.name.clone_from(&area.name);
    model.labels = map_labels(model.labels.as_ref(), area.labels.as_ref());
    model.project_count = area.project_count;

    let ipv4 = area.ipv4.as_ref();
    model.default_nameservers = reconcile_nullable(
        model.default_nameservers.as_deref(),
        ipv4.and_then(|v| v.default_nameservers.as_deref()),
    );
    model.network_ranges = match ipv4.and_then(|v| v.network_ranges.as_deref()) {
        Some(ranges) => {
            let actual = to_range_models(ranges)?;
            Some(reconcile_by_key(
                model.network_ranges.as_deref(),
                &actual,
                |r: &NetworkRangeModel| r.prefix.as_str(),
            ))
        }
        None => None,
    };
    model.transfer_network = ipv4.and_then(|v| v.transfer_network.clone());
    model.default_prefix_length = ipv4.and_then(|v| v.default_prefix_len);
    model.max_prefix_length = ipv4.and_then(|v| v.max_prefix_len);
    model.min_prefix_length = ipv4.and_then(|v| v.min_prefix_len);
    Ok(())
}

pub fn map_network_area_route_fields(
    route: Option<&Route>,
    model: Option<&mut NetworkAreaRouteModel>,
) -> Result<(), CoreError> {
    let (route, model) = require(route, model)?;

    let route_id = resolve_id(
        "network_area_route_id",
        model.network_area_route_id.as_deref(),
        route.route_id.as_deref(),
    )?;
    model.id = Some(build_internal_id(&[
        &model.organization_id,
        &model.network_area_id,
        &route_id,
    ]));
    model.network_area_route_id = Some(route_id);

    model.prefix.clone_from(&route.prefix);
    model.next_hop.clone_from(&route.nexthop);
    model.labels = map_labels(model.labels.as_ref(), route.labels.as_ref());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cloudplane_api::iaas::types::NetworkAreaIpv4;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ErrorKind;

    fn range(id: &str, prefix: &str) -> NetworkRange {
        NetworkRange {
            network_range_id: Some(id.into()),
            prefix: Some(prefix.into()),
        }
    }

    #[test]
    fn network_area_null_inputs() {
        let mut area_model = NetworkAreaModel {
            organization_id: "oid".into(),
            ..Default::default()
        };
        assert_eq!(
            map_network_area_fields(None, Some(&mut area_model))
                .unwrap_err()
                .kind(),
            ErrorKind::MissingResponse
        );
        assert_eq!(
            map_network_area_fields(Some(&NetworkArea::default()), None)
                .unwrap_err()
                .kind(),
            ErrorKind::MissingState
        );
        assert_eq!(
            map_network_area_fields(Some(&NetworkArea::default()), Some(&mut area_model))
                .unwrap_err()
                .kind(),
            ErrorKind::MissingIdentifier
        );

        let mut route_model = NetworkAreaRouteModel {
            organization_id: "oid".into(),
            network_area_id: "aid".into(),
            ..Default::default()
        };
        assert_eq!(
            map_network_area_route_fields(None, Some(&mut route_model))
                .unwrap_err()
                .kind(),
            ErrorKind::MissingResponse
        );
        assert_eq!(
            map_network_area_route_fields(Some(&Route::default()), None)
                .unwrap_err()
                .kind(),
            ErrorKind::MissingState
        );
        assert_eq!(
            map_network_area_route_fields(Some(&Route::default()), Some(&mut route_model))
                .unwrap_err()
                .kind(),
            ErrorKind::MissingIdentifier
        );
    }

    #[test]
    fn ranges_follow_configured_order_with_server_ids() {
        let mut model = NetworkAreaModel {
            organization_id: "oid".into(),
            network_area_id: Some("aid".into()),
            network_ranges: Some(vec![
                NetworkRangeModel {
                    network_range_id: None,
                    prefix: "10.1.0.0/16".into(),
                },
                NetworkRangeModel {
                    network_range_id: None,
                    prefix: "10.0.0.0/16".into(),
                },
            ]),
            ..Default::default()
        };
        let area = NetworkArea {
            ipv4: Some(NetworkAreaIpv4 {
                network_ranges: Some(vec![range("r0", "10.0.0.0/16"), range("r1", "10.1.0.0/16")]),
                transfer_network: Some("192.168.0.0/24".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        map_network_area_fields(Some(&area), Some(&mut model)).unwrap();

        let ranges = model.network_ranges.unwrap();
        assert_eq!(ranges[0].prefix, "10.1.0.0/16");
        assert_eq!(ranges[0].network_range_id.as_deref(), Some("r1"));
        assert_eq!(ranges[1].network_range_id.as_deref(), Some("r0"));
        assert_eq!(model.transfer_network.as_deref(), Some("192.168.0.0/24"));
        assert_eq!(model.id.as_deref(), Some("oid,aid"));
        assert_eq!(model.default_nameservers, None);
    }

    #[test]
    fn range_without_prefix_fails() {
        let mut model = NetworkAreaModel {
            organization_id: "oid".into(),
            network_area_id: Some("aid".into()),
            ..Default::default()
        };
        let area = NetworkArea {
            ipv4: Some(NetworkAreaIpv4 {
                network_ranges: Some(vec![NetworkRange::default()]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = map_network_area_fields(Some(&area), Some(&mut model)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeAssertionFailed);
    }

    #[test]
    fn route_composite_id() {
        let mut model = NetworkAreaRouteModel {
            organization_id: "oid".into(),
            network_area_id: "aid".into(),
            ..Default::default()
        };
        let route = Route {
            route_id: Some("rid".into()),
            prefix: Some("192.168.0.0/24".into()),
            nexthop: Some("10.0.0.1".into()),
            labels: None,
        };
        map_network_area_route_fields(Some(&route), Some(&mut model)).unwrap();
        assert_eq!(model.id.as_deref(), Some("oid,aid,rid"));
        assert_eq!(model.next_hop.as_deref(), Some("10.0.0.1"));
    }
}
