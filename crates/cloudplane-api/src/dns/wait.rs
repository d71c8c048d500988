// Wait helpers for DNS zone and record set operations.
//
// Zones and record sets report progress through a `state` string.
// Create and update finish on `*_SUCCEEDED`; delete also finishes
// when the object is already gone.

use super::DnsClient;
use super::types::{
    RECORD_SET_CREATE_FAILED, RECORD_SET_CREATE_SUCCEEDED, RECORD_SET_DELETE_FAILED,
    RECORD_SET_DELETE_SUCCEEDED, RECORD_SET_UPDATE_FAILED, RECORD_SET_UPDATE_SUCCEEDED, RecordSet,
    ZONE_CREATE_FAILED, ZONE_CREATE_SUCCEEDED, ZONE_DELETE_FAILED, ZONE_DELETE_SUCCEEDED,
    ZONE_UPDATE_FAILED, ZONE_UPDATE_SUCCEEDED, Zone,
};
use crate::Error;
use crate::wait::{WaitHandler, WaitState};

/// Classify a reported state against a success/failure pair.
fn classify<T>(
    what: &str,
    value: T,
    state: Option<&str>,
    error: Option<&str>,
    succeeded: &str,
    failed: &str,
) -> Result<WaitState<T>, Error> {
    match state {
        Some(s) if s == succeeded => Ok(WaitState::Done(value)),
        Some(s) if s == failed => Err(Error::WaitFailed {
            what: what.to_owned(),
            status: s.to_owned(),
            detail: error.map(str::to_owned),
        }),
        _ => Ok(WaitState::Pending),
    }
}

fn zone_handler(
    client: &DnsClient,
    project_id: &str,
    zone_id: &str,
    succeeded: &'static str,
    failed: &'static str,
) -> WaitHandler<Zone> {
    let client = client.clone();
    let project_id = project_id.to_owned();
    let zone_id = zone_id.to_owned();
    let what = format!("zone {zone_id}");

    WaitHandler::new(what.clone(), move || {
        let client = client.clone();
        let project_id = project_id.clone();
        let zone_id = zone_id.clone();
        let what = what.clone();
        Box::pin(async move {
            let Some(zone) = client.get_zone(&project_id, &zone_id).await?.zone else {
                return Ok(WaitState::Pending);
            };
            let state = zone.state.clone();
            let error = zone.error.clone();
            classify(
                &what,
                zone,
                state.as_deref(),
                error.as_deref(),
                succeeded,
                failed,
            )
        })
    })
}

pub fn create_zone_wait_handler(
    client: &DnsClient,
    project_id: &str,
    zone_id: &str,
) -> WaitHandler<Zone> {
    zone_handler(
        client,
        project_id,
        zone_id,
        ZONE_CREATE_SUCCEEDED,
        ZONE_CREATE_FAILED,
    )
}

pub fn partial_update_zone_wait_handler(
    client: &DnsClient,
    project_id: &str,
    zone_id: &str,
) -> WaitHandler<Zone> {
    zone_handler(
        client,
        project_id,
        zone_id,
        ZONE_UPDATE_SUCCEEDED,
        ZONE_UPDATE_FAILED,
    )
}

/// Finishes on `DELETE_SUCCEEDED` or when the zone is no longer found.
pub fn delete_zone_wait_handler(
    client: &DnsClient,
    project_id: &str,
    zone_id: &str,
) -> WaitHandler<()> {
    let client = client.clone();
    let project_id = project_id.to_owned();
    let zone_id = zone_id.to_owned();
    let what = format!("zone {zone_id}");

    WaitHandler::new(what.clone(), move || {
        let client = client.clone();
        let project_id = project_id.clone();
        let zone_id = zone_id.clone();
        let what = what.clone();
        Box::pin(async move {
            match client.get_zone(&project_id, &zone_id).await {
                Ok(resp) => {
                    let zone = resp.zone.unwrap_or_default();
                    classify(
                        &what,
                        (),
                        zone.state.as_deref(),
                        zone.error.as_deref(),
                        ZONE_DELETE_SUCCEEDED,
                        ZONE_DELETE_FAILED,
                    )
                }
                Err(e) if e.is_not_found() => Ok(WaitState::Done(())),
                Err(e) => Err(e),
            }
        })
    })
}

fn record_set_handler(
    client: &DnsClient,
    ids: (&str, &str, &str),
    succeeded: &'static str,
    failed: &'static str,
) -> WaitHandler<RecordSet> {
    let client = client.clone();
    let (project_id, zone_id, record_set_id) =
        (ids.0.to_owned(), ids.1.to_owned(), ids.2.to_owned());
    let what = format!("record set {record_set_id}");

    WaitHandler::new(what.clone(), move || {
        let client = client.clone();
        let project_id = project_id.clone();
        let zone_id = zone_id.clone();
        let record_set_id = record_set_id.clone();
        let what = what.clone();
        Box::pin(async move {
            let Some(rrset) = client
                .get_record_set(&project_id, &zone_id, &record_set_id)
                .await?
                .rrset
            else {
                return Ok(WaitState::Pending);
            };
            let state = rrset.state.clone();
            let error = rrset.error.clone();
            classify(
                &what,
                rrset,
                state.as_deref(),
                error.as_deref(),
                succeeded,
                failed,
            )
        })
    })
}

pub fn create_record_set_wait_handler(
    client: &DnsClient,
    project_id: &str,
    zone_id: &str,
    record_set_id: &str,
) -> WaitHandler<RecordSet> {
    record_set_handler(
        client,
        (project_id, zone_id, record_set_id),
        RECORD_SET_CREATE_SUCCEEDED,
        RECORD_SET_CREATE_FAILED,
    )
}

pub fn partial_update_record_set_wait_handler(
    client: &DnsClient,
    project_id: &str,
    zone_id: &str,
    record_set_id: &str,
) -> WaitHandler<RecordSet> {
    record_set_handler(
        client,
        (project_id, zone_id, record_set_id),
        RECORD_SET_UPDATE_SUCCEEDED,
        RECORD_SET_UPDATE_FAILED,
    )
}

pub fn delete_record_set_wait_handler(
    client: &DnsClient,
    project_id: &str,
    zone_id: &str,
    record_set_id: &str,
) -> WaitHandler<()> {
    let client = client.clone();
    let project_id = project_id.to_owned();
    let zone_id = zone_id.to_owned();
    let record_set_id = record_set_id.to_owned();
    let what = format!("record set {record_set_id}");

    WaitHandler::new(what.clone(), move || {
        let client = client.clone();
        let project_id = project_id.clone();
        let zone_id = zone_id.clone();
        let record_set_id = record_set_id.clone();
        let what = what.clone();
        Box::pin(async move {
            match client
                .get_record_set(&project_id, &zone_id, &record_set_id)
                .await
            {
                Ok(resp) => {
                    let rrset = resp.rrset.unwrap_or_default();
                    classify(
                        &what,
                        (),
                        rrset.state.as_deref(),
                        rrset.error.as_deref(),
                        RECORD_SET_DELETE_SUCCEEDED,
                        RECORD_SET_DELETE_FAILED,
                    )
                }
                Err(e) if e.is_not_found() => Ok(WaitState::Done(())),
                Err(e) => Err(e),
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_states() {
        let ok = classify("z", 1, Some("CREATE_SUCCEEDED"), None, "CREATE_SUCCEEDED", "CREATE_FAILED");
        assert!(matches!(ok, Ok(WaitState::Done(1))));

        let pending = classify("z", 1, Some("CREATE_PENDING"), None, "CREATE_SUCCEEDED", "CREATE_FAILED");
        assert!(matches!(pending, Ok(WaitState::Pending)));

        let missing = classify("z", 1, None, None, "CREATE_SUCCEEDED", "CREATE_FAILED");
        assert!(matches!(missing, Ok(WaitState::Pending)));

        let failed = classify(
            "z",
            1,
            Some("CREATE_FAILED"),
            Some("invalid primaries"),
            "CREATE_SUCCEEDED",
            "CREATE_FAILED",
        );
        match failed {
            Err(Error::WaitFailed { status, detail, .. }) => {
                assert_eq!(status, "CREATE_FAILED");
                assert_eq!(detail.as_deref(), Some("invalid primaries"));
            }
            other => panic!("expected WaitFailed, got {other:?}"),
        }
    }
}
