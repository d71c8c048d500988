use cloudplane_api::iaas::types::ItemList;

use super::require;
use crate::error::CoreError;
use crate::identifier::build_internal_id;
use crate::model::ServiceAccountAttachModel;

/// Map the server's attached service accounts.
///
/// Fails with `RemoteNotFound` when the model's email is no longer in the
/// list.
pub fn map_service_account_attach_fields(
    accounts: Option<&ItemList<String>>,
    model: Option<&mut ServiceAccountAttachModel>,
) -> Result<(), CoreError> {
    let (accounts, model) = require(accounts, model)?;

    if model.service_account_email.is_empty() {
        return Err(CoreError::MissingIdentifier {
            attribute: "service_account_email",
        });
    }
    if !accounts.items.contains(&model.service_account_email) {
        return Err(CoreError::RemoteNotFound {
            message: format!(
                "service account {} is not attached to server {}",
                model.service_account_email, model.server_id
            ),
        });
    }

    model.id = Some(build_internal_id(&[
        &model.project_id,
        &model.server_id,
        &model.service_account_email,
    ]));
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn model() -> ServiceAccountAttachModel {
        ServiceAccountAttachModel {
            project_id: "pid".into(),
            server_id: "sid".into(),
            service_account_email: "sa@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn service_account_null_inputs() {
        let mut m = model();
        assert_eq!(
            map_service_account_attach_fields(None, Some(&mut m))
                .unwrap_err()
                .kind(),
            ErrorKind::MissingResponse
        );
        assert_eq!(
            map_service_account_attach_fields(Some(&ItemList::default()), None)
                .unwrap_err()
                .kind(),
            ErrorKind::MissingState
        );

        let mut unnamed = ServiceAccountAttachModel {
            service_account_email: String::new(),
            ..model()
        };
        let accounts = ItemList {
            items: vec!["sa@example.com".into()],
        };
        assert_eq!(
            map_service_account_attach_fields(Some(&accounts), Some(&mut unnamed))
                .unwrap_err()
                .kind(),
            ErrorKind::MissingIdentifier
        );
    }

    #[test]
    fn attached_email_sets_id() {
        let mut m = model();
        let accounts = ItemList {
            items: vec!["other@example.com".into(), "sa@example.com".into()],
        };
        map_service_account_attach_fields(Some(&accounts), Some(&mut m)).unwrap();
        assert_eq!(m.id.as_deref(), Some("pid,sid,sa@example.com"));
    }

    #[test]
    fn detached_email_is_not_found() {
        let mut m = model();
        let err = map_service_account_attach_fields(Some(&ItemList::default()), Some(&mut m))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteNotFound);
    }
}
