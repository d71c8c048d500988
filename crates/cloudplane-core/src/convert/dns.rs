// DNS zone and record set mappers.

use cloudplane_api::dns::types::{RecordSet, Zone};

use super::{require, resolve_id, widen};
use crate::error::CoreError;
use crate::identifier::build_internal_id;
use crate::model::{RecordSetModel, ZoneModel};
use crate::reconcile::reconcile_nullable;

pub fn map_zone_fields(zone: Option<&Zone>, model: Option<&mut ZoneModel>) -> Result<(), CoreError> {
    let (zone, model) = require(zone, model)?;

    let zone_id = resolve_id("zone_id", model.zone_id.as_deref(), zone.id.as_deref())?;
    model.id = Some(build_internal_id(&[&model.project_id, &zone_id]));
    model.zone_id = Some(zone_id);

    model.name.clone_from(&zone.name);
    model.dns_name.clone_from(&zone.dns_name);
    model.description.clone_from(&zone.description);
    model.acl.clone_from(&zone.acl);
    model.active = zone.active;
    model.contact_email.clone_from(&zone.contact_email);
    model.default_ttl = widen(zone.default_ttl);
    model.expire_time = widen(zone.expire_time);
    model.is_reverse_zone = zone.is_reverse_zone;
    model.negative_cache = widen(zone.negative_cache);
    model.primaries = reconcile_nullable(model.primaries.as_deref(), zone.primaries.as_deref());
    model.primary_name_server.clone_from(&zone.primary_name_server);
    model.record_count = widen(zone.record_count);
    model.refresh_time = widen(zone.refresh_time);
    model.retry_time = widen(zone.retry_time);
    model.serial_number = zone.serial_number;
    model.zone_type.clone_from(&zone.zone_type);
    model.visibility.clone_from(&zone.visibility);
    model.state.clone_from(&zone.state);
    Ok(())
}

/// `name` keeps the configured spelling; `fqdn` carries the server's.
pub fn map_record_set_fields(
    rrset: Option<&RecordSet>,
    model: Option<&mut RecordSetModel>,
) -> Result<(), CoreError> {
    let (rrset, model) = require(rrset, model)?;

    let record_set_id = resolve_id(
        "record_set_id",
        model.record_set_id.as_deref(),
        rrset.id.as_deref(),
    )?;
    model.id = Some(build_internal_id(&[
        &model.project_id,
        &model.zone_id,
        &record_set_id,
    ]));
    model.record_set_id = Some(record_set_id);

    let records = rrset
        .records
        .as_ref()
        .map(|records| {
            records
                .iter()
                .map(|r| {
                    r.content
                        .clone()
                        .ok_or_else(|| CoreError::type_assertion("record without content"))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;
    model.records = reconcile_nullable(model.records.as_deref(), records.as_deref());

    if model.name.is_none() {
        model.name.clone_from(&rrset.name);
    }
    model.fqdn.clone_from(&rrset.name);
    model.ttl = widen(rrset.ttl);
    model.record_type.clone_from(&rrset.record_type);
    model.comment.clone_from(&rrset.comment);
    model.active = rrset.active;
    model.state.clone_from(&rrset.state);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cloudplane_api::dns::types::Record;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ErrorKind;

    fn zone_model() -> ZoneModel {
        ZoneModel {
            project_id: "pid".into(),
            ..Default::default()
        }
    }

    #[test]
    fn zone_null_inputs() {
        let mut model = zone_model();
        assert_eq!(
            map_zone_fields(None, Some(&mut model)).unwrap_err().kind(),
            ErrorKind::MissingResponse
        );
        assert_eq!(
            map_zone_fields(Some(&Zone::default()), None).unwrap_err().kind(),
            ErrorKind::MissingState
        );
        assert_eq!(
            map_zone_fields(Some(&Zone::default()), Some(&mut model))
                .unwrap_err()
                .kind(),
            ErrorKind::MissingIdentifier
        );
    }

    #[test]
    fn zone_id_from_response_then_composite() {
        let mut model = zone_model();
        let zone = Zone {
            id: Some("zid".into()),
            dns_name: Some("example.com".into()),
            default_ttl: Some(3600),
            ..Default::default()
        };
        map_zone_fields(Some(&zone), Some(&mut model)).unwrap();
        assert_eq!(model.id.as_deref(), Some("pid,zid"));
        assert_eq!(model.zone_id.as_deref(), Some("zid"));
        assert_eq!(model.default_ttl, Some(3600));
        // Absent server values stay null.
        assert_eq!(model.negative_cache, None);
        assert_eq!(model.serial_number, None);
    }

    #[test]
    fn zone_known_id_wins_over_response() {
        let mut model = ZoneModel {
            zone_id: Some("known".into()),
            ..zone_model()
        };
        let zone = Zone {
            id: Some("other".into()),
            ..Default::default()
        };
        map_zone_fields(Some(&zone), Some(&mut model)).unwrap();
        assert_eq!(model.id.as_deref(), Some("pid,known"));
    }

    #[test]
    fn primaries_null_versus_empty() {
        let mut model = ZoneModel {
            zone_id: Some("zid".into()),
            primaries: Some(vec!["1.1.1.1".into()]),
            ..zone_model()
        };
        map_zone_fields(Some(&Zone::default()), Some(&mut model)).unwrap();
        assert_eq!(model.primaries, None);

        let zone = Zone {
            primaries: Some(vec![]),
            ..Default::default()
        };
        map_zone_fields(Some(&zone), Some(&mut model)).unwrap();
        assert_eq!(model.primaries, Some(vec![]));
    }

    #[test]
    fn primaries_keep_known_order() {
        let mut model = ZoneModel {
            zone_id: Some("zid".into()),
            primaries: Some(vec!["2.2.2.2".into(), "1.1.1.1".into()]),
            ..zone_model()
        };
        let zone = Zone {
            primaries: Some(vec!["1.1.1.1".into(), "3.3.3.3".into(), "2.2.2.2".into()]),
            ..Default::default()
        };
        map_zone_fields(Some(&zone), Some(&mut model)).unwrap();
        assert_eq!(
            model.primaries,
            Some(vec!["2.2.2.2".into(), "1.1.1.1".into(), "3.3.3.3".into()])
        );
    }

    #[test]
    fn record_set_after_create() {
        let mut model = RecordSetModel {
            project_id: "pid".into(),
            zone_id: "zid".into(),
            name: Some("example.com".into()),
            records: Some(vec!["1.2.3.4".into()]),
            ttl: Some(3600),
            record_type: Some("A".into()),
            ..Default::default()
        };
        let rrset = RecordSet {
            id: Some("rid".into()),
            name: Some("example.com.".into()),
            records: Some(vec![Record {
                content: Some("1.2.3.4".into()),
            }]),
            ttl: Some(3600),
            record_type: Some("A".into()),
            ..Default::default()
        };
        map_record_set_fields(Some(&rrset), Some(&mut model)).unwrap();
        assert_eq!(model.id.as_deref(), Some("pid,zid,rid"));
        assert_eq!(model.records, Some(vec!["1.2.3.4".to_owned()]));
        assert_eq!(model.name.as_deref(), Some("example.com"));
        assert_eq!(model.fqdn.as_deref(), Some("example.com."));
        assert_eq!(model.comment, None);
    }

    #[test]
    fn record_set_null_inputs() {
        let mut model = RecordSetModel {
            project_id: "pid".into(),
            zone_id: "zid".into(),
            ..Default::default()
        };
        assert_eq!(
            map_record_set_fields(None, Some(&mut model)).unwrap_err().kind(),
            ErrorKind::MissingResponse
        );
        assert_eq!(
            map_record_set_fields(Some(&RecordSet::default()), None)
                .unwrap_err()
                .kind(),
            ErrorKind::MissingState
        );
        assert_eq!(
            map_record_set_fields(Some(&RecordSet::default()), Some(&mut model))
                .unwrap_err()
                .kind(),
            ErrorKind::MissingIdentifier
        );
        assert_eq!(model.id, None);
    }

    #[test]
    fn record_without_content_is_type_assertion() {
        let mut model = RecordSetModel {
            project_id: "pid".into(),
            zone_id: "zid".into(),
            record_set_id: Some("rid".into()),
            ..Default::default()
        };
        let rrset = RecordSet {
            records: Some(vec![Record { content: None }]),
            ..Default::default()
        };
        let err = map_record_set_fields(Some(&rrset), Some(&mut model)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeAssertionFailed);
    }
}
