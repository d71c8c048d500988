// ── Typed decoding at the framework boundary ──
//
// Attribute objects arrive as loosely typed JSON. They are decoded once,
// here, into the per-resource model structs; any type mismatch surfaces
// as `TypeAssertionFailed` before mappers or builders run.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::CoreError;

/// Decode an attribute object into a typed model.
pub fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, CoreError> {
    T::deserialize(value).map_err(|e| CoreError::type_assertion(e.to_string()))
}

/// Encode a typed model back into an attribute object.
pub fn encode<T: Serialize>(model: &T) -> Result<Map<String, Value>, CoreError> {
    match serde_json::to_value(model) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(CoreError::Internal(format!(
            "model did not encode to an object: {other}"
        ))),
        Err(e) => Err(CoreError::Internal(format!("failed to encode model: {e}"))),
    }
}
