// Wait helpers for v2alpha networks.

use super::IaasAlphaClient;
use super::types::{Network, STATUS_CREATED, STATUS_FAILED};
use crate::Error;
use crate::wait::{WaitHandler, WaitState};

/// Waits for the network `status` to become `CREATED`.
pub fn network_ready_wait_handler(
    client: &IaasAlphaClient,
    project_id: &str,
    region: &str,
    network_id: &str,
) -> WaitHandler<Network> {
    let client = client.clone();
    let project_id = project_id.to_owned();
    let region = region.to_owned();
    let network_id = network_id.to_owned();
    let what = format!("network {network_id} ({region})");

    WaitHandler::new(what.clone(), move || {
        let client = client.clone();
        let project_id = project_id.clone();
        let region = region.clone();
        let network_id = network_id.clone();
        let what = what.clone();
        Box::pin(async move {
            let network = client
                .get_network(&project_id, &region, &network_id)
                .await?;
            match network.status.as_deref() {
                Some(STATUS_CREATED) => Ok(WaitState::Done(network)),
                Some(STATUS_FAILED) => Err(Error::WaitFailed {
                    what,
                    status: STATUS_FAILED.to_owned(),
                    detail: None,
                }),
                _ => Ok(WaitState::Pending),
            }
        })
    })
}

/// Finishes once the network returns 404.
pub fn delete_network_wait_handler(
    client: &IaasAlphaClient,
    project_id: &str,
    region: &str,
    network_id: &str,
) -> WaitHandler<()> {
    let client = client.clone();
    let project_id = project_id.to_owned();
    let region = region.to_owned();
    let network_id = network_id.to_owned();

    WaitHandler::new(format!("network {network_id} ({region})"), move || {
        let client = client.clone();
        let project_id = project_id.clone();
        let region = region.clone();
        let network_id = network_id.clone();
        Box::pin(async move {
            match client.get_network(&project_id, &region, &network_id).await {
                Ok(_) => Ok(WaitState::Pending),
                Err(e) if e.is_not_found() => Ok(WaitState::Done(())),
                Err(e) => Err(e),
            }
        })
    })
}
