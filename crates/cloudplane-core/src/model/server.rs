use serde::{Deserialize, Serialize};

/// `cloudplane_server_service_account_attach`,
/// ID `project_id,server_id,service_account_email`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceAccountAttachModel {
    pub id: Option<String>,
    pub project_id: String,
    pub server_id: String,
    pub service_account_email: String,
}
