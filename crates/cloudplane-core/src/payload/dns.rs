// DNS zone and record set payloads.

use cloudplane_api::dns::types::{
    CreateRecordSetPayload, CreateZonePayload, PartialUpdateRecordSetPayload,
    PartialUpdateZonePayload, RecordPayload,
};

use super::{require_model, required, to_i32};
use crate::error::CoreError;
use crate::model::{RecordSetModel, ZoneModel};

pub fn to_zone_create_payload(model: Option<&ZoneModel>) -> Result<CreateZonePayload, CoreError> {
    let model = require_model(model)?;
    Ok(CreateZonePayload {
        name: required("name", model.name.as_ref())?,
        dns_name: required("dns_name", model.dns_name.as_ref())?,
        acl: model.acl.clone(),
        contact_email: model.contact_email.clone(),
        default_ttl: to_i32("default_ttl", model.default_ttl)?,
        description: model.description.clone(),
        expire_time: to_i32("expire_time", model.expire_time)?,
        is_reverse_zone: model.is_reverse_zone,
        negative_cache: to_i32("negative_cache", model.negative_cache)?,
        primaries: model.primaries.clone().unwrap_or_default(),
        refresh_time: to_i32("refresh_time", model.refresh_time)?,
        retry_time: to_i32("retry_time", model.retry_time)?,
        zone_type: model.zone_type.clone(),
    })
}

/// Partial zone update.
///
/// `primaries` is never sent: the service rejects it on update even when
/// unchanged, and the attribute forces replacement instead. `dns_name`,
/// `type` and `is_reverse_zone` are likewise fixed after creation.
pub fn to_zone_update_payload(
    model: Option<&ZoneModel>,
) -> Result<PartialUpdateZonePayload, CoreError> {
    let model = require_model(model)?;
    Ok(PartialUpdateZonePayload {
        name: model.name.clone(),
        acl: model.acl.clone(),
        contact_email: model.contact_email.clone(),
        default_ttl: to_i32("default_ttl", model.default_ttl)?,
        description: model.description.clone(),
        expire_time: to_i32("expire_time", model.expire_time)?,
        negative_cache: to_i32("negative_cache", model.negative_cache)?,
        refresh_time: to_i32("refresh_time", model.refresh_time)?,
        retry_time: to_i32("retry_time", model.retry_time)?,
    })
}

fn record_payloads(records: Option<&Vec<String>>) -> Vec<RecordPayload> {
    records
        .into_iter()
        .flatten()
        .map(|content| RecordPayload {
            content: content.clone(),
        })
        .collect()
}

pub fn to_record_set_create_payload(
    model: Option<&RecordSetModel>,
) -> Result<CreateRecordSetPayload, CoreError> {
    let model = require_model(model)?;
    Ok(CreateRecordSetPayload {
        name: required("name", model.name.as_ref())?,
        records: record_payloads(model.records.as_ref()),
        ttl: to_i32("ttl", model.ttl)?,
        record_type: required("type", model.record_type.as_ref())?,
        comment: model.comment.clone(),
    })
}

/// Partial record set update. `type` is fixed after creation.
pub fn to_record_set_update_payload(
    model: Option<&RecordSetModel>,
) -> Result<PartialUpdateRecordSetPayload, CoreError> {
    let model = require_model(model)?;
    Ok(PartialUpdateRecordSetPayload {
        name: model.name.clone(),
        records: Some(record_payloads(model.records.as_ref())),
        ttl: to_i32("ttl", model.ttl)?,
        comment: model.comment.clone(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;

    fn zone() -> ZoneModel {
        ZoneModel {
            project_id: "pid".into(),
            name: Some("example".into()),
            dns_name: Some("example.com".into()),
            primaries: Some(vec!["1.2.3.4".into()]),
            default_ttl: Some(3600),
            ..Default::default()
        }
    }

    #[test]
    fn builders_reject_nil_model() {
        let kinds = [
            to_zone_create_payload(None).unwrap_err().kind(),
            to_zone_update_payload(None).unwrap_err().kind(),
            to_record_set_create_payload(None).unwrap_err().kind(),
            to_record_set_update_payload(None).unwrap_err().kind(),
        ];
        assert!(kinds.iter().all(|k| *k == ErrorKind::NilModel));
    }

    #[test]
    fn zone_update_never_sends_primaries() {
        let body = serde_json::to_value(to_zone_update_payload(Some(&zone())).unwrap()).unwrap();
        assert!(body.get("primaries").is_none());
        assert_eq!(body["defaultTTL"], json!(3600));
    }

    #[test]
    fn zone_create_defaults_primaries_to_empty() {
        let model = ZoneModel {
            primaries: None,
            ..zone()
        };
        let body = to_zone_create_payload(Some(&model)).unwrap();
        assert!(body.primaries.is_empty());
    }

    #[test]
    fn oversized_ttl_fails_loudly() {
        let model = RecordSetModel {
            name: Some("www".into()),
            record_type: Some("A".into()),
            ttl: Some(5_000_000_000),
            ..Default::default()
        };
        let err = to_record_set_create_payload(Some(&model)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeAssertionFailed);
    }

    #[test]
    fn record_set_create_body() {
        let model = RecordSetModel {
            name: Some("example.com".into()),
            records: Some(vec!["1.2.3.4".into()]),
            ttl: Some(3600),
            record_type: Some("A".into()),
            ..Default::default()
        };
        let body = serde_json::to_value(to_record_set_create_payload(Some(&model)).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "example.com",
                "records": [{ "content": "1.2.3.4" }],
                "ttl": 3600,
                "type": "A"
            })
        );
    }
}
