// Wait helpers for IaaS v1 operations.
//
// Networks and network areas report `state`; create/update finish on
// `CREATED`, delete finishes once the object returns 404.

use super::IaasClient;
use super::types::{Network, NetworkArea, STATE_CREATED, STATE_FAILED};
use crate::Error;
use crate::wait::{WaitHandler, WaitState};

fn settle<T>(what: &str, value: T, state: Option<&str>) -> Result<WaitState<T>, Error> {
    match state {
        Some(STATE_CREATED) => Ok(WaitState::Done(value)),
        Some(STATE_FAILED) => Err(Error::WaitFailed {
            what: what.to_owned(),
            status: STATE_FAILED.to_owned(),
            detail: None,
        }),
        _ => Ok(WaitState::Pending),
    }
}

fn gone(result: Result<impl Sized, Error>) -> Result<WaitState<()>, Error> {
    match result {
        Ok(_) => Ok(WaitState::Pending),
        Err(e) if e.is_not_found() => Ok(WaitState::Done(())),
        Err(e) => Err(e),
    }
}

// ── Networks ─────────────────────────────────────────────────────────

/// Waits for a network to reach `CREATED`; used after create and update.
pub fn network_ready_wait_handler(
    client: &IaasClient,
    project_id: &str,
    network_id: &str,
) -> WaitHandler<Network> {
    let client = client.clone();
    let project_id = project_id.to_owned();
    let network_id = network_id.to_owned();
    let what = format!("network {network_id}");

    WaitHandler::new(what.clone(), move || {
        let client = client.clone();
        let project_id = project_id.clone();
        let network_id = network_id.clone();
        let what = what.clone();
        Box::pin(async move {
            let network = client.get_network(&project_id, &network_id).await?;
            let state = network.state.clone();
            settle(&what, network, state.as_deref())
        })
    })
}

pub fn delete_network_wait_handler(
    client: &IaasClient,
    project_id: &str,
    network_id: &str,
) -> WaitHandler<()> {
    let client = client.clone();
    let project_id = project_id.to_owned();
    let network_id = network_id.to_owned();

    WaitHandler::new(format!("network {network_id}"), move || {
        let client = client.clone();
        let project_id = project_id.clone();
        let network_id = network_id.clone();
        Box::pin(async move { gone(client.get_network(&project_id, &network_id).await) })
    })
}

// ── Network areas ────────────────────────────────────────────────────

pub fn network_area_ready_wait_handler(
    client: &IaasClient,
    organization_id: &str,
    area_id: &str,
) -> WaitHandler<NetworkArea> {
    let client = client.clone();
    let organization_id = organization_id.to_owned();
    let area_id = area_id.to_owned();
    let what = format!("network area {area_id}");

    WaitHandler::new(what.clone(), move || {
        let client = client.clone();
        let organization_id = organization_id.clone();
        let area_id = area_id.clone();
        let what = what.clone();
        Box::pin(async move {
            let area = client.get_network_area(&organization_id, &area_id).await?;
            let state = area.state.clone();
            settle(&what, area, state.as_deref())
        })
    })
}

pub fn delete_network_area_wait_handler(
    client: &IaasClient,
    organization_id: &str,
    area_id: &str,
) -> WaitHandler<()> {
    let client = client.clone();
    let organization_id = organization_id.to_owned();
    let area_id = area_id.to_owned();

    WaitHandler::new(format!("network area {area_id}"), move || {
        let client = client.clone();
        let organization_id = organization_id.clone();
        let area_id = area_id.clone();
        Box::pin(async move { gone(client.get_network_area(&organization_id, &area_id).await) })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_maps_states() {
        assert!(matches!(
            settle("n", 7, Some("CREATED")),
            Ok(WaitState::Done(7))
        ));
        assert!(matches!(
            settle("n", 7, Some("CREATING")),
            Ok(WaitState::Pending)
        ));
        assert!(matches!(settle("n", 7, None), Ok(WaitState::Pending)));
        assert!(matches!(
            settle("n", 7, Some("FAILED")),
            Err(Error::WaitFailed { .. })
        ));
    }

    #[test]
    fn gone_on_not_found_only() {
        let not_found: Result<(), Error> = Err(Error::Api {
            message: "not found".into(),
            code: None,
            status: 404,
        });
        assert!(matches!(gone(not_found), Ok(WaitState::Done(()))));
        assert!(matches!(gone(Ok(())), Ok(WaitState::Pending)));

        let forbidden: Result<(), Error> = Err(Error::Api {
            message: "no".into(),
            code: None,
            status: 403,
        });
        assert!(matches!(gone(forbidden), Err(Error::Api { status: 403, .. })));
    }
}
