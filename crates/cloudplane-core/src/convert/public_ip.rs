use cloudplane_api::iaas::types::PublicIp;

use super::{map_labels, require, resolve_id};
use crate::error::CoreError;
use crate::identifier::build_internal_id;
use crate::model::PublicIpModel;

pub fn map_public_ip_fields(
    public_ip: Option<&PublicIp>,
    model: Option<&mut PublicIpModel>,
) -> Result<(), CoreError> {
    let (public_ip, model) = require(public_ip, model)?;

    let public_ip_id = resolve_id(
        "public_ip_id",
        model.public_ip_id.as_deref(),
        public_ip.id.as_deref(),
    )?;
    model.id = Some(build_internal_id(&[&model.project_id, &public_ip_id]));
    model.public_ip_id = Some(public_ip_id);

    model.ip.clone_from(&public_ip.ip);
    model
        .network_interface_id
        .clone_from(&public_ip.network_interface);
    model.labels = map_labels(model.labels.as_ref(), public_ip.labels.as_ref());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn public_ip_null_inputs() {
        let mut model = PublicIpModel {
            project_id: "pid".into(),
            ..Default::default()
        };
        assert_eq!(
            map_public_ip_fields(None, Some(&mut model)).unwrap_err().kind(),
            ErrorKind::MissingResponse
        );
        assert_eq!(
            map_public_ip_fields(Some(&PublicIp::default()), None)
                .unwrap_err()
                .kind(),
            ErrorKind::MissingState
        );
        assert_eq!(
            map_public_ip_fields(Some(&PublicIp::default()), Some(&mut model))
                .unwrap_err()
                .kind(),
            ErrorKind::MissingIdentifier
        );
    }

    #[test]
    fn detached_interface_maps_to_null() {
        let mut model = PublicIpModel {
            project_id: "pid".into(),
            public_ip_id: Some("ip1".into()),
            network_interface_id: Some("nic".into()),
            ..Default::default()
        };
        let remote = PublicIp {
            ip: Some("203.0.113.7".into()),
            ..Default::default()
        };
        map_public_ip_fields(Some(&remote), Some(&mut model)).unwrap();
        assert_eq!(model.network_interface_id, None);
        assert_eq!(model.ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(model.id.as_deref(), Some("pid,ip1"));
    }
}
