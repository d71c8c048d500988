//! Composite identifiers.
//!
//! Every resource is tracked under a single string joining its parent scope
//! identifiers and its own identifier with [`SEPARATOR`], in a fixed order
//! per resource type. The same string is the import format, so creating,
//! reading and importing a resource all produce identical IDs.

use crate::error::CoreError;

pub const SEPARATOR: char = ',';

/// Join identifier components into the internal resource ID.
pub fn build_internal_id(parts: &[&str]) -> String {
    parts.join(",")
}

/// Split an import string into exactly `N` non-empty components.
///
/// `names` documents the expected order and appears in the error message.
pub fn parse_import_id<const N: usize>(
    input: &str,
    names: [&'static str; N],
) -> Result<[String; N], CoreError> {
    let invalid = || CoreError::InvalidImportFormat {
        input: input.to_owned(),
        expected: names.join(","),
    };

    let parts: Vec<String> = input.split(SEPARATOR).map(str::to_owned).collect();
    if parts.iter().any(String::is_empty) {
        return Err(invalid());
    }
    parts.try_into().map_err(|_| invalid())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const RECORD_SET: [&str; 3] = ["project_id", "zone_id", "record_set_id"];

    #[test]
    fn build_is_deterministic() {
        let a = build_internal_id(&["pid", "zid", "rid"]);
        let b = build_internal_id(&["pid", "zid", "rid"]);
        assert_eq!(a, "pid,zid,rid");
        assert_eq!(a, b);
    }

    #[test]
    fn parse_round_trips_build() {
        let id = build_internal_id(&["pid", "zid", "rid"]);
        let [p, z, r] = parse_import_id(&id, RECORD_SET).unwrap();
        assert_eq!(build_internal_id(&[&p, &z, &r]), id);
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = parse_import_id("pid,zid", RECORD_SET).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidImportFormat);
        assert!(err.to_string().contains("project_id,zone_id,record_set_id"));

        let err = parse_import_id("a,b,c,d", RECORD_SET).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidImportFormat);
    }

    #[test]
    fn empty_component_is_rejected() {
        for input in ["pid,,rid", ",zid,rid", "pid,zid,", ""] {
            let err = parse_import_id(input, RECORD_SET).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidImportFormat, "input {input:?}");
        }
    }
}
